// ── Preview State Machine ──────────────────────────────

/// Lifecycle of one preview: `Idle → Loading → {Ready, Fallback}`.
/// Re-entering `Loading` is always permitted; new input invalidates the
/// previous in-flight result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PreviewState {
    #[default]
    Idle,
    Loading,
    /// Preferred delivery succeeded; holds a URL (svg) or data URI (img).
    Ready { image_src: String },
    /// Base64 delivery failed; holds the direct SVG URL instead. Not an
    /// error state: consumers render it exactly like `Ready`.
    Fallback { image_src: String },
}

impl PreviewState {
    /// The displayable image source, if one has been produced.
    pub fn image_src(&self) -> Option<&str> {
        match self {
            PreviewState::Ready { image_src } | PreviewState::Fallback { image_src } => {
                Some(image_src)
            }
            PreviewState::Idle | PreviewState::Loading => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PreviewState::Loading)
    }
}
