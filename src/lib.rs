//! Client for the DevCard profile-card rendering service. Resolves the
//! backend endpoint for the current deployment topology and encodes card
//! configurations into the service's query contract; the preview fetcher
//! then turns both into a displayable image source, negotiating delivery
//! format with a silent SVG fallback.

pub mod card;
pub mod config;
pub mod endpoint;
pub mod params;
pub mod preview;
pub mod telemetry;
pub mod utils;

pub use card::{catalog, CardConfig, CardKind, CardKindInfo, PreviewFormat};
pub use config::{DeploymentConfig, PageContext};
pub use endpoint::{resolve, ResolvedEndpoint};
pub use preview::{PreviewInstance, PreviewState, PreviewView};
pub use telemetry::{FetchFailure, Telemetry};
