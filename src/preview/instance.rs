use crate::card::{CardConfig, PreviewFormat};
use crate::endpoint::ResolvedEndpoint;
use crate::params;
use crate::preview::fetcher;
use crate::preview::state::PreviewState;
use crate::telemetry::Telemetry;
use crate::utils::http;
use reqwest::Client;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

/// What a consumer renders: an image source string (URL or data URI),
/// a loading flag, and whether the config still needs a username.
/// All visual presentation belongs to the consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewView {
    pub image_src: String,
    pub loading: bool,
    pub needs_username: bool,
}

/// Inputs whose change restarts the state machine from `Loading`.
/// An identical triple is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FetchKey {
    format: PreviewFormat,
    query: String,
    endpoint: ResolvedEndpoint,
}

/// One mounted preview. Instances are fully independent; several previews
/// on a page share nothing but the process. Cloning yields a handle to the
/// same instance.
#[derive(Clone)]
pub struct PreviewInstance {
    client: Client,
    endpoint: ResolvedEndpoint,
    telemetry: Telemetry,
    state: Arc<RwLock<PreviewState>>,
    needs_username: Arc<AtomicBool>,
    /// Monotonic fetch generation. Only the latest generation may commit
    /// its result, so a slow superseded response never overwrites a
    /// faster later one.
    generation: Arc<AtomicU64>,
    last_key: Arc<Mutex<Option<FetchKey>>>,
}

impl PreviewInstance {
    pub fn new(endpoint: ResolvedEndpoint) -> Self {
        Self::with_client(endpoint, http::preview_client())
    }

    pub fn with_client(endpoint: ResolvedEndpoint, client: Client) -> Self {
        Self {
            client,
            endpoint,
            telemetry: Telemetry::default(),
            state: Arc::new(RwLock::new(PreviewState::Idle)),
            needs_username: Arc::new(AtomicBool::new(false)),
            generation: Arc::new(AtomicU64::new(0)),
            last_key: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with_telemetry(mut self, telemetry: Telemetry) -> Self {
        self.telemetry = telemetry;
        self
    }

    pub fn endpoint(&self) -> &ResolvedEndpoint {
        &self.endpoint
    }

    /// Apply a config change and drive one fetch cycle to completion.
    ///
    /// Gating happens before anything else: a kind that requires a
    /// username with none set never reaches the fetcher, and the consumer
    /// sees the "needs username" view instead.
    pub async fn update(&self, config: &CardConfig) {
        if config.needs_username() {
            // Invalidate any in-flight fetch; its result must not surface.
            self.generation.fetch_add(1, Ordering::SeqCst);
            self.needs_username.store(true, Ordering::SeqCst);
            *self.last_key.lock().unwrap() = None;
            *self.state.write().await = PreviewState::Idle;
            return;
        }
        self.needs_username.store(false, Ordering::SeqCst);

        let query = params::encode(config);
        let key = FetchKey {
            format: config.preview_format,
            query,
            endpoint: self.endpoint.clone(),
        };

        {
            let mut last_key = self.last_key.lock().unwrap();
            if last_key.as_ref() == Some(&key) {
                return;
            }
            *last_key = Some(key.clone());
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if self.generation.load(Ordering::SeqCst) != generation {
            // Already superseded before we even started.
            return;
        }
        *self.state.write().await = PreviewState::Loading;

        let next = fetcher::fetch_encoded(
            &self.client,
            &key.endpoint,
            key.format,
            &key.query,
            &self.telemetry,
        )
        .await;

        // Latest scheduled fetch wins; stale results are dropped.
        if self.generation.load(Ordering::SeqCst) == generation {
            *self.state.write().await = next;
        }
    }

    /// Fire-and-forget variant of `update` for event-driven consumers.
    pub fn spawn_update(&self, config: CardConfig) {
        let instance = self.clone();
        tokio::spawn(async move {
            instance.update(&config).await;
        });
    }

    pub async fn state(&self) -> PreviewState {
        self.state.read().await.clone()
    }

    /// Consumer-facing snapshot of this instance.
    pub async fn view(&self) -> PreviewView {
        let state = self.state.read().await;
        PreviewView {
            image_src: state.image_src().unwrap_or_default().to_string(),
            loading: state.is_loading(),
            needs_username: self.needs_username.load(Ordering::SeqCst),
        }
    }
}

impl std::fmt::Debug for PreviewInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewInstance")
            .field("endpoint", &self.endpoint)
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish()
    }
}
