use crate::card::{CardConfig, PreviewFormat};
use crate::endpoint::ResolvedEndpoint;
use crate::params;
use crate::preview::state::PreviewState;
use crate::telemetry::{FetchFailure, Telemetry};
use crate::utils::http;
use base64::{engine::general_purpose, Engine as _};
use reqwest::Client;

/// Query parameter asking the service for a ready-to-embed data URI
/// instead of an SVG document.
pub const BASE64_FORMAT_PARAM: &str = "format=base64";

fn base64_url(endpoint: &ResolvedEndpoint, query: &str) -> String {
    format!("{}&{}", endpoint.request_url(query), BASE64_FORMAT_PARAM)
}

/// Run one fetch cycle for an already-encoded query and return the
/// terminal state. `Loading` never leaks out of here: the result is
/// always `Ready` or `Fallback`.
///
/// Svg delivery skips the network entirely: the image source is the
/// request URL itself and the consumer's image tag performs the load.
/// Img delivery fetches a base64 data URI and silently reverts to the
/// SVG URL on any failure, trading format preference for availability.
pub async fn fetch_encoded(
    client: &Client,
    endpoint: &ResolvedEndpoint,
    format: PreviewFormat,
    query: &str,
    telemetry: &Telemetry,
) -> PreviewState {
    let svg_url = endpoint.request_url(query);

    match format {
        PreviewFormat::Svg => PreviewState::Ready { image_src: svg_url },
        PreviewFormat::Img => {
            match http::get_text(client, &base64_url(endpoint, query)).await {
                Ok(body) => match validate_data_uri(body.trim()) {
                    Ok(()) => PreviewState::Ready {
                        image_src: body.trim().to_string(),
                    },
                    Err(failure) => {
                        telemetry.report(&failure);
                        PreviewState::Fallback { image_src: svg_url }
                    }
                },
                Err(failure) => {
                    telemetry.report(&failure);
                    PreviewState::Fallback { image_src: svg_url }
                }
            }
        }
    }
}

/// Encode and fetch in one step. Callers that need the re-fetch key
/// (query + format + endpoint) encode first and use `fetch_encoded`.
pub async fn fetch_preview(
    client: &Client,
    endpoint: &ResolvedEndpoint,
    config: &CardConfig,
    telemetry: &Telemetry,
) -> PreviewState {
    let query = params::encode(config);
    fetch_encoded(client, endpoint, config.preview_format, &query, telemetry).await
}

/// A 2xx body that is not an embeddable data URI counts as a transport
/// failure per the error taxonomy, so the payload is checked before it
/// is committed as an image source.
fn validate_data_uri(body: &str) -> Result<(), FetchFailure> {
    if !body.starts_with("data:") {
        return Err(FetchFailure::MalformedBody(
            "body is not a data URI".to_string(),
        ));
    }
    match body.split_once(";base64,") {
        Some((_, payload)) => match general_purpose::STANDARD.decode(payload) {
            Ok(_) => Ok(()),
            Err(e) => Err(FetchFailure::MalformedBody(format!(
                "base64 decode error: {}",
                e
            ))),
        },
        None => Err(FetchFailure::MalformedBody(
            "data URI has no base64 payload".to_string(),
        )),
    }
}
