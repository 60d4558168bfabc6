use super::config::CardConfig;

// ── Theme Presets ──────────────────────────────────────

/// Built-in theme: default colors applied when a consumer picks a theme id.
/// The rendering service owns final theming; these presets only seed the
/// editable color fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreset {
    pub id: &'static str,
    pub bg: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub text: &'static str,
    pub border: &'static str,
}

const PRESETS: &[ThemePreset] = &[
    ThemePreset {
        id: "dark",
        bg: "#0d1117",
        primary: "#58a6ff",
        secondary: "#8b949e",
        text: "#c9d1d9",
        border: "#30363d",
    },
    ThemePreset {
        id: "light",
        bg: "#ffffff",
        primary: "#0969da",
        secondary: "#57606a",
        text: "#24292f",
        border: "#d0d7de",
    },
    ThemePreset {
        id: "ocean",
        bg: "#0f2027",
        primary: "#2dd4bf",
        secondary: "#7dd3fc",
        text: "#e0f2fe",
        border: "#164e63",
    },
    ThemePreset {
        id: "sunset",
        bg: "#1f1023",
        primary: "#fb7185",
        secondary: "#fbbf24",
        text: "#fde8e8",
        border: "#4c1d4f",
    },
    ThemePreset {
        id: "forest",
        bg: "#0b1f12",
        primary: "#4ade80",
        secondary: "#a3e635",
        text: "#dcfce7",
        border: "#14532d",
    },
    ThemePreset {
        id: "midnight",
        bg: "#020617",
        primary: "#818cf8",
        secondary: "#c084fc",
        text: "#e2e8f0",
        border: "#1e293b",
    },
];

/// Look up a preset by theme id.
pub fn preset(id: &str) -> Option<&'static ThemePreset> {
    PRESETS.iter().find(|preset| preset.id == id)
}

/// All built-in theme ids, in presentation order.
pub fn theme_ids() -> Vec<&'static str> {
    PRESETS.iter().map(|preset| preset.id).collect()
}

impl CardConfig {
    /// Apply a theme preset over this config's colors. Unknown ids only
    /// set the theme field; the service decides what to do with them.
    pub fn with_theme(mut self, id: &str) -> Self {
        self.theme = id.to_string();
        if let Some(preset) = preset(id) {
            self.bg_color = preset.bg.to_string();
            self.primary_color = preset.primary.to_string();
            self.secondary_color = preset.secondary.to_string();
            self.text_color = preset.text.to_string();
            self.border_color = preset.border.to_string();
        }
        self
    }
}
