use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

use super::direction::Direction;
use super::outcome::{TransportError, TranslationOutcome};

/// Something that can turn a query into a [`TranslationOutcome`].
///
/// Implementations never fail: every problem is folded into the outcome.
pub trait Translator {
    fn translate(
        &self,
        direction: Direction,
        text: &str,
    ) -> impl Future<Output = TranslationOutcome>;
}

/// HTTP client for the remote translation service.
///
/// Each call is a single POST with no retry.
pub struct TranslationClient {
    client: Client,
    base_url: String,
}

impl TranslationClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn endpoint_url(&self, direction: Direction) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            direction.endpoint_path()
        )
    }

    async fn request(&self, direction: Direction, text: &str) -> Result<String, TransportError> {
        let url = self.endpoint_url(direction);
        let body = HashMap::from([(direction.request_field(), text)]);

        debug!(%url, bytes = text.len(), "sending translation request");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|source| classify(&url, source))?;

        // The service reports rejected queries with a 4xx/5xx status and an
        // `error` field, so the body is read whatever the status.
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|source| classify(&url, source))?;

        debug!(%url, status, "translation service replied");
        parse_reply(direction, status, &body)
    }
}

impl Translator for TranslationClient {
    async fn translate(&self, direction: Direction, text: &str) -> TranslationOutcome {
        match self.request(direction, text).await {
            Ok(text) => TranslationOutcome::success(text),
            Err(err) => {
                debug!(error = %err, "translation request failed");
                err.into()
            }
        }
    }
}

fn classify(url: &str, source: reqwest::Error) -> TransportError {
    if source.is_timeout() {
        TransportError::Timeout {
            url: url.to_string(),
        }
    } else {
        TransportError::Unreachable {
            url: url.to_string(),
            source,
        }
    }
}

/// Extracts the displayable text from a service reply.
///
/// A non-empty translation wins over `error`; `error` wins over an empty
/// translation.
fn parse_reply(direction: Direction, status: u16, body: &str) -> Result<String, TransportError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| TransportError::MalformedResponse {
            status,
            detail: e.to_string(),
        })?;

    let Value::Object(fields) = value else {
        return Err(TransportError::MalformedResponse {
            status,
            detail: "expected a JSON object".to_string(),
        });
    };

    let translated = string_field(&fields, direction.response_field());
    let error = string_field(&fields, "error");

    match (translated, error) {
        (Some(text), _) if !text.is_empty() => Ok(text.to_string()),
        (_, Some(message)) => Ok(message.to_string()),
        (Some(text), None) => Ok(text.to_string()),
        (None, None) => Err(TransportError::MissingFields {
            expected: direction.response_field(),
            status,
        }),
    }
}

fn string_field<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    fields.get(name).and_then(Value::as_str)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> TranslationClient {
        TranslationClient::new(server.uri(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_url_trims_trailing_slash() {
        let client = TranslationClient::new("http://localhost:5000/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            client.endpoint_url(Direction::SqlToDoc),
            "http://localhost:5000/translate"
        );
        assert_eq!(
            client.endpoint_url(Direction::DocToSql),
            "http://localhost:5000/reverse"
        );
    }

    #[test]
    fn test_parse_reply_prefers_translation() {
        let body = r#"{"mongo_command": "db.users.find({}, {})", "error": "ignored"}"#;
        let text = parse_reply(Direction::SqlToDoc, 200, body).unwrap();
        assert_eq!(text, "db.users.find({}, {})");
    }

    #[test]
    fn test_parse_reply_uses_error_field() {
        let body = r#"{"error": "Invalid MongoDB command format"}"#;
        let text = parse_reply(Direction::DocToSql, 500, body).unwrap();
        assert_eq!(text, "Invalid MongoDB command format");
    }

    #[test]
    fn test_parse_reply_empty_translation_falls_back_to_error() {
        let body = r#"{"sql": "", "error": "nothing to translate"}"#;
        let text = parse_reply(Direction::DocToSql, 200, body).unwrap();
        assert_eq!(text, "nothing to translate");
    }

    #[test]
    fn test_parse_reply_empty_translation_without_error() {
        let text = parse_reply(Direction::DocToSql, 200, r#"{"sql": ""}"#).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_parse_reply_reads_field_for_direction() {
        // The forward field is not a valid answer for the reverse direction.
        let result = parse_reply(Direction::DocToSql, 200, r#"{"mongo_command": "db.t.find()"}"#);
        assert!(matches!(
            result,
            Err(TransportError::MissingFields { expected: "sql", .. })
        ));
    }

    #[test]
    fn test_parse_reply_rejects_non_json() {
        let result = parse_reply(Direction::SqlToDoc, 502, "<html>Bad Gateway</html>");
        assert!(matches!(
            result,
            Err(TransportError::MalformedResponse { status: 502, .. })
        ));
    }

    #[test]
    fn test_parse_reply_rejects_non_object() {
        let result = parse_reply(Direction::SqlToDoc, 200, r#"["db.t.find()"]"#);
        assert!(matches!(
            result,
            Err(TransportError::MalformedResponse { .. })
        ));
    }

    #[tokio::test]
    async fn test_translate_forward_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/translate"))
            .and(body_json(json!({"sql": "SELECT * FROM users WHERE age > 18"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "mongo_command": "db.users.find({\"age\": {\"$gt\": 18}}, {})"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = client_for(&server)
            .translate(Direction::SqlToDoc, "SELECT * FROM users WHERE age > 18")
            .await;

        assert_eq!(
            outcome,
            TranslationOutcome::success("db.users.find({\"age\": {\"$gt\": 18}}, {})")
        );
    }

    #[tokio::test]
    async fn test_translate_reverse_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/reverse"))
            .and(body_json(json!({"mongo": "db.users.find({}, {})"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"sql": "SELECT * FROM users"})),
            )
            .mount(&server)
            .await;

        let outcome = client_for(&server)
            .translate(Direction::DocToSql, "db.users.find({}, {})")
            .await;

        assert_eq!(outcome, TranslationOutcome::success("SELECT * FROM users"));
    }

    #[tokio::test]
    async fn test_service_reported_error_is_displayable_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/reverse"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(json!({"error": "Invalid MongoDB command format"})),
            )
            .mount(&server)
            .await;

        let outcome = client_for(&server)
            .translate(Direction::DocToSql, "db.users")
            .await;

        assert_eq!(
            outcome,
            TranslationOutcome::success("Invalid MongoDB command format")
        );
    }

    #[tokio::test]
    async fn test_unparseable_body_is_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let outcome = client_for(&server)
            .translate(Direction::SqlToDoc, "SELECT 1")
            .await;

        assert!(outcome.is_failure());
        assert!(outcome.text().starts_with("Error: "));
    }

    #[tokio::test]
    async fn test_timeout_is_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"mongo_command": "db.t.find()"}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client = TranslationClient::new(server.uri(), Duration::from_millis(100)).unwrap();
        let outcome = client.translate(Direction::SqlToDoc, "SELECT 1").await;

        assert!(outcome.is_failure());
        assert!(outcome.text().contains("timed out"));
    }

    #[tokio::test]
    async fn test_connection_refused_is_failure() {
        // Bind then drop a listener to get a port with nothing behind it.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            TranslationClient::new(format!("http://{addr}"), Duration::from_secs(2)).unwrap();
        let outcome = client.translate(Direction::SqlToDoc, "SELECT 1").await;

        assert!(outcome.is_failure());
        assert!(outcome.text().contains("failed to reach translation service"));
    }
}
