use crate::telemetry::FetchFailure;
use reqwest::Client;
use std::time::Duration;

/// Bound on a single preview request. A hung request must not leave a
/// preview instance loading forever.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A client configured for preview fetches. Failures degrade to the SVG
/// fallback rather than being retried, so no retry policy lives here.
pub fn preview_client() -> Client {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_default()
}

/// Issue a GET and return the body as text, classifying every failure mode:
/// non-2xx status, transport errors, and timeouts.
pub async fn get_text(client: &Client, url: &str) -> Result<String, FetchFailure> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchFailure::Status(status.as_u16()));
    }
    let body = response.text().await?;
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn no_proxy_client() -> Client {
        Client::builder().no_proxy().build().unwrap()
    }

    #[tokio::test]
    async fn get_text_returns_body_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ok"))
            .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
            .mount(&server)
            .await;

        let body = get_text(&no_proxy_client(), &format!("{}/ok", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "hello");
    }

    #[tokio::test]
    async fn get_text_classifies_status_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = get_text(&no_proxy_client(), &server.uri()).await.unwrap_err();
        assert_eq!(err, FetchFailure::Status(503));
    }

    #[tokio::test]
    async fn get_text_classifies_transport_errors() {
        // Nothing listens here; connection is refused.
        let err = get_text(&no_proxy_client(), "http://127.0.0.1:9/unreachable")
            .await
            .unwrap_err();
        assert!(matches!(err, FetchFailure::Transport(_)));
    }

    #[tokio::test]
    async fn get_text_classifies_timeouts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("late")
                    .set_delay(Duration::from_millis(300)),
            )
            .mount(&server)
            .await;

        let client = Client::builder()
            .no_proxy()
            .timeout(Duration::from_millis(50))
            .build()
            .unwrap();
        let err = get_text(&client, &server.uri()).await.unwrap_err();
        assert_eq!(err, FetchFailure::Timeout);
    }
}
