pub mod catalog;
pub mod config;
pub mod theme;

pub use catalog::{catalog, CardKindInfo};
pub use config::{CardConfig, CardKind, PreviewFormat};
pub use theme::{preset, theme_ids, ThemePreset};
