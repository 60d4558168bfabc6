use anyhow::Result;
use clap::Parser;
use devcard_client::card::{CardConfig, CardKind, PreviewFormat};
use devcard_client::config::{load_json_config, DeploymentConfig, PageContext};
use devcard_client::endpoint;
use devcard_client::params;
use devcard_client::preview::PreviewInstance;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Resolve, encode, and optionally fetch a card preview from the command line.
#[derive(Parser, Debug)]
#[command(name = "devcard-preview", version)]
struct Args {
    /// Deployment config JSON; falls back to DEVCARD_* environment variables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Card config JSON exported from the generator UI
    #[arg(long)]
    card: Option<PathBuf>,

    /// Card kind (stats, languages, streak, activity, quote, custom)
    #[arg(long)]
    kind: Option<CardKind>,

    /// GitHub username to render
    #[arg(long)]
    username: Option<String>,

    /// Theme preset id to apply
    #[arg(long)]
    theme: Option<String>,

    /// Delivery format (svg or img)
    #[arg(long)]
    format: Option<PreviewFormat>,

    /// Text for custom cards
    #[arg(long)]
    custom_text: Option<String>,

    /// Hostname of the embedding page
    #[arg(long, default_value = "localhost")]
    hostname: String,

    /// Origin of the embedding page
    #[arg(long, default_value = "http://localhost:8080")]
    origin: String,

    /// Perform the fetch instead of only printing the request URL
    #[arg(long)]
    fetch: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let deployment = match &args.config {
        Some(path) => DeploymentConfig::load(path),
        None => DeploymentConfig::from_env(),
    };
    let page = PageContext::new(args.hostname.clone(), args.origin.clone());
    let resolved = endpoint::resolve(&deployment, &page);
    println!(
        "[Preview] Endpoint: {}{}",
        resolved.base_url, resolved.api_path
    );

    let mut config: CardConfig = match &args.card {
        Some(path) => load_json_config(path, "Card"),
        None => CardConfig::default(),
    };
    if let Some(kind) = args.kind {
        config.kind = kind;
    }
    if let Some(username) = args.username {
        config.username = Some(username);
    }
    if let Some(theme) = &args.theme {
        config = config.with_theme(theme);
    }
    if let Some(format) = args.format {
        config.preview_format = format;
    }
    if let Some(text) = args.custom_text {
        config.custom_text = Some(text);
    }

    if config.needs_username() {
        println!(
            "[Preview] A {} card needs a username — pass --username",
            config.kind
        );
        return Ok(());
    }

    println!("[Preview] Request URL: {}", resolved.request_url(&params::encode(&config)));

    if args.fetch {
        let instance = PreviewInstance::new(resolved);
        instance.update(&config).await;
        let view = instance.view().await;
        println!("[Preview] Image source: {}", view.image_src);
    }

    Ok(())
}
