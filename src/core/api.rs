//! Lore Service HTTP Client
//!
//! Two operations against the generation backend:
//! - `GET  {base}/factions/{count}` - a batch of factions
//! - `POST {base}/quests/`          - one quest, optionally built around factions
//!
//! Errors propagate unchanged. There is no retry, caching or dedup; callers
//! keep duplicate triggers disabled while a request is in flight.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::Instrument;
use url::Url;

use crate::config::ApiConfig;

use super::error::{ApiError, ApiResult};
use super::models::{Faction, Quest};

// ============================================================================
// Trait
// ============================================================================

/// The generation backend as seen by the controller.
#[async_trait]
pub trait LoreApi: Send + Sync {
    /// Fetch `count` freshly generated factions. `count` is validated to
    /// `1..=10` by the caller.
    async fn generate_factions(&self, count: u8) -> ApiResult<Vec<Faction>>;

    /// Request a quest, optionally built around the given factions.
    async fn generate_quest(&self, factions: Option<Vec<Faction>>) -> ApiResult<Quest>;
}

// ============================================================================
// Wire shapes
// ============================================================================

/// The service wraps factions in an envelope; a bare array is accepted too.
#[derive(Deserialize)]
#[serde(untagged)]
enum FactionsPayload {
    Envelope { factions: Vec<Faction> },
    Bare(Vec<Faction>),
}

impl From<FactionsPayload> for Vec<Faction> {
    fn from(payload: FactionsPayload) -> Self {
        match payload {
            FactionsPayload::Envelope { factions } | FactionsPayload::Bare(factions) => factions,
        }
    }
}

/// Body of `POST /quests/`: `{}` or `{"factions": [...]}`.
#[derive(Debug, Default, Serialize)]
struct QuestRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    factions: Option<Vec<Faction>>,
}

/// FastAPI error body.
#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

// ============================================================================
// Client
// ============================================================================

/// reqwest-backed client for the lore generation service.
#[derive(Debug, Clone)]
pub struct LoreClient {
    base_url: Url,
    http_client: reqwest::Client,
}

impl LoreClient {
    /// Build a client for `base_url` (e.g. `http://localhost:8000`).
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let base_url = parse_base_url(base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            base_url,
            http_client,
        })
    }

    pub fn from_config(config: &ApiConfig) -> ApiResult<Self> {
        Self::new(&config.base_url)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    async fn read_body(response: reqwest::Response) -> ApiResult<String> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                detail: error_detail(&body, status),
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl LoreApi for LoreClient {
    async fn generate_factions(&self, count: u8) -> ApiResult<Vec<Faction>> {
        let url = self.endpoint(&format!("/factions/{count}"));
        let span = tracing::debug_span!("generate_factions", count, %url);

        async move {
            log::debug!("GET {url}");
            let response = self.http_client.get(&url).send().await?;
            let body = Self::read_body(response).await?;
            let payload: FactionsPayload = serde_json::from_str(&body)?;
            let factions: Vec<Faction> = payload.into();
            log::info!("Received {} faction(s)", factions.len());
            Ok::<_, ApiError>(factions)
        }
        .instrument(span)
        .await
    }

    async fn generate_quest(&self, factions: Option<Vec<Faction>>) -> ApiResult<Quest> {
        let url = self.endpoint("/quests/");
        let faction_count = factions.as_ref().map_or(0, Vec::len);
        let span = tracing::debug_span!("generate_quest", faction_count, %url);

        async move {
            log::debug!("POST {url} with {faction_count} faction(s)");
            let request = QuestRequest { factions };
            let response = self.http_client.post(&url).json(&request).send().await?;
            let body = Self::read_body(response).await?;
            let quest: Quest = serde_json::from_str(&body)?;
            log::info!("Received quest '{}'", quest.title);
            Ok::<_, ApiError>(quest)
        }
        .instrument(span)
        .await
    }
}

fn parse_base_url(raw: &str) -> ApiResult<Url> {
    Url::parse(raw).map_err(|source| ApiError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })
}

/// Human-readable message for a failed response: the FastAPI `detail` when
/// present, else the raw body, else the status reason.
fn error_detail(body: &str, status: reqwest::StatusCode) -> String {
    if let Ok(ErrorBody { detail }) = serde_json::from_str::<ErrorBody>(body) {
        return match detail {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client = LoreClient::new("http://localhost:8000/").unwrap();
        assert_eq!(
            client.endpoint("/factions/3"),
            "http://localhost:8000/factions/3"
        );
    }

    #[test]
    fn test_endpoint_keeps_path_prefix() {
        let client = LoreClient::new("http://lore.example.com/api").unwrap();
        assert_eq!(client.endpoint("/quests/"), "http://lore.example.com/api/quests/");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = LoreClient::new("localhost without scheme").unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_quest_request_body_shapes() {
        let empty = serde_json::to_string(&QuestRequest::default()).unwrap();
        assert_eq!(empty, "{}");

        let with = QuestRequest {
            factions: Some(vec![Faction::new("A", "B", "C", None)]),
        };
        let json = serde_json::to_value(&with).unwrap();
        assert_eq!(json["factions"][0]["name"], "A");
    }

    #[test]
    fn test_factions_payload_shapes() {
        let envelope: FactionsPayload =
            serde_json::from_str(r#"{"factions":[{"name":"A"}]}"#).unwrap();
        let bare: FactionsPayload = serde_json::from_str(r#"[{"name":"A"}]"#).unwrap();
        let a: Vec<Faction> = envelope.into();
        let b: Vec<Faction> = bare.into();
        assert_eq!(a, b);
    }

    #[test]
    fn test_error_detail_prefers_fastapi_detail() {
        let status = reqwest::StatusCode::INTERNAL_SERVER_ERROR;
        assert_eq!(error_detail(r#"{"detail":"boom"}"#, status), "boom");
        assert_eq!(error_detail("plain failure", status), "plain failure");
        assert_eq!(error_detail("", status), "Internal Server Error");
    }

    #[test]
    fn test_error_detail_structured() {
        let status = reqwest::StatusCode::UNPROCESSABLE_ENTITY;
        let detail = error_detail(r#"{"detail":[{"loc":["path","count"]}]}"#, status);
        assert!(detail.contains("count"));
    }
}
