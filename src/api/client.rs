use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, HeaderValue};
use serde::Deserialize;
use thiserror::Error;

use crate::activity::ActivityBoard;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Request rejected with status {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },
}

impl ApiError {
    /// Server-supplied `detail` text for an application-level rejection.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub activity: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupReceipt {
    #[serde(default)]
    pub message: String,
}

/// Text of the `detail` field of an error body. Any JSON body counts as an
/// answer from the server; only a plain, non-empty string is shown.
fn error_detail(body: &str) -> Result<Option<String>, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    Ok(value
        .get("detail")
        .and_then(serde_json::Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string))
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityApi: Send + Sync {
    async fn list_activities(&self) -> Result<ActivityBoard, ApiError>;

    async fn signup(&self, activity: &str, email: &str) -> Result<SignupReceipt, ApiError>;

    async fn remove_participant(&self, activity: &str, email: &str) -> Result<(), ApiError>;
}

pub struct HttpActivityClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpActivityClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn activities_url(&self) -> String {
        format!("{}/activities", self.base_url)
    }

    fn signup_url(&self, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/signup?email={}",
            self.base_url,
            urlencoding::encode(activity),
            urlencoding::encode(email)
        )
    }

    fn participants_url(&self, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/participants?email={}",
            self.base_url,
            urlencoding::encode(activity),
            urlencoding::encode(email)
        )
    }
}

fn no_cache() -> HeaderValue {
    HeaderValue::from_static("no-cache")
}

#[async_trait]
impl ActivityApi for HttpActivityClient {
    async fn list_activities(&self) -> Result<ActivityBoard, ApiError> {
        let url = self.activities_url();
        tracing::info!("Fetching activities from {}", url);

        let response = self.client
            .get(&url)
            .header(CACHE_CONTROL, no_cache())
            .send()
            .await?;

        let status = response.status();
        tracing::info!("Fetch activities response status: {}", status);

        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!("Failed to fetch activities. Status: {}, Body: {}", status, body);
            let detail = error_detail(&body).ok().flatten();
            return Err(ApiError::Rejected { status: status.as_u16(), detail });
        }

        let board = ActivityBoard::from_json(&body)
            .map_err(|e| ApiError::ParseError(format!("Invalid activity list: {}", e)))?;

        tracing::info!("Fetched {} activities successfully", board.len());
        Ok(board)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<SignupReceipt, ApiError> {
        let url = self.signup_url(activity, email);
        tracing::info!("Signing up {} for {}", email, activity);
        tracing::debug!("POST {}", url);

        let response = self.client
            .post(&url)
            .header(CACHE_CONTROL, no_cache())
            .send()
            .await?;

        let status = response.status();
        tracing::info!("Signup response status: {}", status);

        let body = response.text().await?;

        if !status.is_success() {
            let detail = error_detail(&body)
                .map_err(|e| ApiError::ParseError(format!("Invalid error body: {}", e)))?;
            tracing::warn!("Signup rejected. Status: {}, Detail: {:?}", status, detail);
            return Err(ApiError::Rejected { status: status.as_u16(), detail });
        }

        let receipt: SignupReceipt = serde_json::from_str(&body)
            .map_err(|e| ApiError::ParseError(format!("Invalid signup response: {}", e)))?;

        tracing::info!("Signup accepted: {}", receipt.message);
        Ok(receipt)
    }

    async fn remove_participant(&self, activity: &str, email: &str) -> Result<(), ApiError> {
        let url = self.participants_url(activity, email);
        tracing::info!("Removing {} from {}", email, activity);

        let response = self.client
            .delete(&url)
            .send()
            .await?;

        let status = response.status();
        tracing::info!("Remove participant response status: {}", status);

        if !status.is_success() {
            let body = response.text().await?;
            let detail = error_detail(&body).ok().flatten();
            return Err(ApiError::Rejected { status: status.as_u16(), detail });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup() -> (MockServer, HttpActivityClient) {
        let server = MockServer::start().await;
        let client = HttpActivityClient::new(server.uri());
        (server, client)
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let client = HttpActivityClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn signup_url_encodes_name_and_email() {
        let client = HttpActivityClient::new("http://localhost:8000");
        assert_eq!(
            client.signup_url("Chess Club", "a+b@x.com"),
            "http://localhost:8000/activities/Chess%20Club/signup?email=a%2Bb%40x.com"
        );
    }

    #[test]
    fn participants_url_encodes_reserved_characters() {
        let client = HttpActivityClient::new("http://localhost:8000");
        assert_eq!(
            client.participants_url("Art/Design & Co", "a@x.com"),
            "http://localhost:8000/activities/Art%2FDesign%20%26%20Co/participants?email=a%40x.com"
        );
    }

    #[test]
    fn rejection_exposes_detail() {
        let error = ApiError::Rejected { status: 400, detail: Some("Already signed up".to_string()) };
        assert_eq!(error.detail(), Some("Already signed up"));
        assert!(error.is_rejection());
        assert_eq!(error.to_string(), "Request rejected with status 400: Already signed up");
    }

    #[tokio::test]
    async fn list_activities_sends_no_cache_and_decodes() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/activities"))
            .and(header("cache-control", "no-cache"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Chess Club": {
                    "description": "Learn chess",
                    "schedule": "Fridays",
                    "max_participants": 10,
                    "participants": ["a@x.com"]
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let board = client.list_activities().await.unwrap();

        assert_eq!(board.len(), 1);
        assert_eq!(board.get_index(0).unwrap().spots_left(), 9);
    }

    #[tokio::test]
    async fn list_activities_with_non_json_body_is_parse_error() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/activities"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let result = client.list_activities().await;

        assert!(matches!(result, Err(ApiError::ParseError(_))));
    }

    #[tokio::test]
    async fn list_activities_server_error_is_rejection() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/activities"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({"detail": "boom"})))
            .mount(&server)
            .await;

        let error = client.list_activities().await.unwrap_err();

        assert_eq!(error.detail(), Some("boom"));
    }

    #[tokio::test]
    async fn signup_posts_encoded_path_and_query() {
        let (server, client) = setup().await;

        Mock::given(method("POST"))
            .and(path("/activities/Chess%20Club/signup"))
            .and(query_param("email", "new@x.com"))
            .and(header("cache-control", "no-cache"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "Signed up new@x.com for Chess Club"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let receipt = client.signup("Chess Club", "new@x.com").await.unwrap();

        assert_eq!(receipt.message, "Signed up new@x.com for Chess Club");
    }

    #[tokio::test]
    async fn signup_rejection_carries_detail() {
        let (server, client) = setup().await;

        Mock::given(method("POST"))
            .and(path("/activities/Chess%20Club/signup"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "detail": "Student already signed up"
            })))
            .mount(&server)
            .await;

        let error = client.signup("Chess Club", "a@x.com").await.unwrap_err();

        assert!(matches!(error, ApiError::Rejected { status: 400, .. }));
        assert_eq!(error.detail(), Some("Student already signed up"));
    }

    #[tokio::test]
    async fn signup_rejection_without_text_detail_has_none() {
        let (server, client) = setup().await;

        Mock::given(method("POST"))
            .and(path("/activities/Chess%20Club/signup"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "detail": [{"loc": ["query", "email"], "msg": "field required"}]
            })))
            .mount(&server)
            .await;

        let error = client.signup("Chess Club", "").await.unwrap_err();

        assert!(error.is_rejection());
        assert_eq!(error.detail(), None);
    }

    #[tokio::test]
    async fn signup_rejection_with_non_json_body_is_parse_error() {
        let (server, client) = setup().await;

        Mock::given(method("POST"))
            .and(path("/activities/Chess%20Club/signup"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let result = client.signup("Chess Club", "a@x.com").await;

        assert!(matches!(result, Err(ApiError::ParseError(_))));
    }

    #[tokio::test]
    async fn signup_rejection_with_json_string_body_has_no_detail() {
        let (server, client) = setup().await;

        Mock::given(method("POST"))
            .and(path("/activities/Chess%20Club/signup"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!("Bad request")))
            .mount(&server)
            .await;

        let error = client.signup("Chess Club", "a@x.com").await.unwrap_err();

        assert!(matches!(error, ApiError::Rejected { status: 400, detail: None }));
    }

    #[test]
    fn error_detail_only_takes_plain_text() {
        assert_eq!(error_detail(r#"{"detail":"Full"}"#).unwrap(), Some("Full".to_string()));
        assert_eq!(error_detail(r#"{"detail":""}"#).unwrap(), None);
        assert_eq!(error_detail(r#"{"detail":[{"msg":"field required"}]}"#).unwrap(), None);
        assert_eq!(error_detail("null").unwrap(), None);
        assert!(error_detail("Bad Gateway").is_err());
    }

    #[tokio::test]
    async fn remove_participant_sends_delete() {
        let (server, client) = setup().await;

        Mock::given(method("DELETE"))
            .and(path("/activities/Chess%20Club/participants"))
            .and(query_param("email", "a@x.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "Removed a@x.com from Chess Club"
            })))
            .expect(1)
            .mount(&server)
            .await;

        assert!(client.remove_participant("Chess Club", "a@x.com").await.is_ok());
    }

    #[tokio::test]
    async fn remove_missing_participant_is_rejection() {
        let (server, client) = setup().await;

        Mock::given(method("DELETE"))
            .and(path("/activities/Chess%20Club/participants"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "detail": "Participant not found"
            })))
            .mount(&server)
            .await;

        let error = client.remove_participant("Chess Club", "absent@x.com").await.unwrap_err();

        assert!(matches!(error, ApiError::Rejected { status: 404, .. }));
    }

    #[tokio::test]
    async fn unreachable_server_is_http_error() {
        let client = HttpActivityClient::new("http://127.0.0.1:9");

        let result = client.list_activities().await;

        assert!(matches!(result, Err(ApiError::HttpError(_))));
    }

    #[tokio::test]
    async fn signup_to_unreachable_server_is_http_error() {
        let client = HttpActivityClient::new("http://127.0.0.1:9");

        let error = client.signup("Chess Club", "a@x.com").await.unwrap_err();

        assert!(matches!(error, ApiError::HttpError(_)));
        assert!(!error.is_rejection());
        assert_eq!(error.detail(), None);
    }
}
