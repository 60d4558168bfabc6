use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Card Kind ──────────────────────────────────────────

/// The six card kinds understood by the rendering service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Stats,
    Languages,
    Streak,
    Activity,
    Quote,
    Custom,
}

impl CardKind {
    /// Wire name used in the `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardKind::Stats => "stats",
            CardKind::Languages => "languages",
            CardKind::Streak => "streak",
            CardKind::Activity => "activity",
            CardKind::Quote => "quote",
            CardKind::Custom => "custom",
        }
    }

    /// Whether the rendering service needs a username for this kind.
    /// Quote and custom cards render without one.
    pub fn requires_username(&self) -> bool {
        !matches!(self, CardKind::Quote | CardKind::Custom)
    }

    pub fn all() -> [CardKind; 6] {
        [
            CardKind::Stats,
            CardKind::Languages,
            CardKind::Streak,
            CardKind::Activity,
            CardKind::Quote,
            CardKind::Custom,
        ]
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stats" => Ok(CardKind::Stats),
            "languages" => Ok(CardKind::Languages),
            "streak" => Ok(CardKind::Streak),
            "activity" => Ok(CardKind::Activity),
            "quote" => Ok(CardKind::Quote),
            "custom" => Ok(CardKind::Custom),
            other => Err(format!("Unknown card kind: {}", other)),
        }
    }
}

// ── Preview Format ─────────────────────────────────────

/// Delivery mode for the preview image.
///
/// `Svg` is consumed directly as an image URL pointing at the service;
/// `Img` asks the service for a ready-to-embed base64 data URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewFormat {
    Svg,
    Img,
}

impl PreviewFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreviewFormat::Svg => "svg",
            PreviewFormat::Img => "img",
        }
    }
}

impl FromStr for PreviewFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "svg" => Ok(PreviewFormat::Svg),
            "img" => Ok(PreviewFormat::Img),
            other => Err(format!("Unknown preview format: {}", other)),
        }
    }
}

// ── Card Config ────────────────────────────────────────

/// Full configuration of a single card, as edited by a consumer.
///
/// Field names mirror the JSON shape the generator UI produces, so a
/// config file exported from the UI loads unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardConfig {
    #[serde(rename = "type")]
    pub kind: CardKind,
    pub username: Option<String>,

    pub theme: String,
    pub bg_color: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub text_color: String,
    pub border_color: String,
    pub border_radius: u32,
    pub show_border: bool,
    pub width: u32,
    pub height: u32,

    /// Entry animation name; the wire contract defaults to "fadeIn" when unset.
    pub animation: Option<String>,
    /// Animation speed; the wire contract defaults to "normal" when unset.
    pub animation_speed: Option<String>,

    pub gradient_enabled: bool,
    pub gradient_type: Option<String>,
    pub gradient_angle: u32,
    pub gradient_start: String,
    pub gradient_end: String,

    /// Free text for custom cards. Omitted from the wire when empty.
    pub custom_text: Option<String>,

    pub preview_format: PreviewFormat,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            kind: CardKind::Stats,
            username: None,
            theme: "dark".to_string(),
            bg_color: "#0d1117".to_string(),
            primary_color: "#58a6ff".to_string(),
            secondary_color: "#8b949e".to_string(),
            text_color: "#c9d1d9".to_string(),
            border_color: "#30363d".to_string(),
            border_radius: 8,
            show_border: true,
            width: 495,
            height: 195,
            animation: None,
            animation_speed: None,
            gradient_enabled: false,
            gradient_type: None,
            gradient_angle: 45,
            gradient_start: "#58a6ff".to_string(),
            gradient_end: "#bc8cff".to_string(),
            custom_text: None,
            preview_format: PreviewFormat::Svg,
        }
    }
}

impl CardConfig {
    /// Default config for a kind, with the given username.
    pub fn new(kind: CardKind, username: Option<String>) -> Self {
        Self {
            kind,
            username,
            ..Self::default()
        }
    }

    /// True when this config cannot be rendered yet: the kind needs a
    /// username and none is set. The preview pipeline must not issue a
    /// request in that case.
    pub fn needs_username(&self) -> bool {
        self.kind.requires_username()
            && self.username.as_deref().map_or(true, |u| u.is_empty())
    }
}
