use super::config::CardKind;
use serde::Serialize;

/// Display metadata for one card kind, as shown by the generator UI.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CardKindInfo {
    pub kind: CardKind,
    pub name: &'static str,
    pub description: &'static str,
    /// One-line sample rendering used as placeholder preview text.
    pub sample: &'static str,
}

const CATALOG: [CardKindInfo; 6] = [
    CardKindInfo {
        kind: CardKind::Stats,
        name: "User Stats Card",
        description: "Display total stars, commits, PRs, issues, and more",
        sample: "⭐ 1,234 | 📦 56 | 👥 789",
    },
    CardKindInfo {
        kind: CardKind::Languages,
        name: "Language Breakdown",
        description: "Show your most-used programming languages",
        sample: "TypeScript 45% | Python 30% | Rust 15%",
    },
    CardKindInfo {
        kind: CardKind::Streak,
        name: "Contribution Streak",
        description: "Track your current and longest contribution streak",
        sample: "🔥 Current: 15 days | Best: 87 days",
    },
    CardKindInfo {
        kind: CardKind::Activity,
        name: "Activity Graph",
        description: "Visualize your contribution activity over time",
        sample: "▁▂▃▅▆▇█▆▅▃▂▁▂▅▇",
    },
    CardKindInfo {
        kind: CardKind::Quote,
        name: "Dev Quotes",
        description: "Random inspirational quotes for developers",
        sample: "\"Code is poetry.\" - Unknown",
    },
    CardKindInfo {
        kind: CardKind::Custom,
        name: "Custom Image",
        description: "Create fully custom images with your own text and style",
        sample: "Your text, your style",
    },
];

/// All card kinds with their display metadata, in catalog order.
pub fn catalog() -> &'static [CardKindInfo] {
    &CATALOG
}

impl CardKind {
    pub fn info(&self) -> &'static CardKindInfo {
        // CATALOG is declared in enum order
        &CATALOG[*self as usize]
    }
}
