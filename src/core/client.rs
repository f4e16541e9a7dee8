use crate::config::Settings;
use crate::domain::model::{LinkOutcome, LinkRequest, LinkRow};
use crate::domain::ports::LinkService;
use crate::utils::error::{ImportError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct LinksResponse {
    links: Vec<LinkRow>,
}

/// reqwest 實作。Client 內建連線池，逐列呼叫時會重用連線
pub struct HttpLinkService {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpLinkService {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.api.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.api.base_url.clone(),
            token: settings.api.token.clone(),
        })
    }

    fn links_url(&self) -> String {
        format!("{}/api/links", self.base_url)
    }

    /// 取回遠端現有的所有連結
    pub async fn list_links(&self) -> Result<Vec<LinkRow>> {
        tracing::debug!("GET {}", self.links_url());
        let response = self
            .client
            .get(self.links_url())
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ImportError::ApiRejectedError {
                status: status.as_u16(),
                body,
            });
        }

        let body: LinksResponse = response.json().await?;
        Ok(body.links)
    }

    /// 刪除一個 slug，分類方式與 create_link 相同
    pub async fn delete_link(&self, slug: &str) -> LinkOutcome {
        let url = format!("{}/{}", self.links_url(), slug);
        tracing::debug!("DELETE {}", url);
        let result = self
            .client
            .delete(url)
            .bearer_auth(&self.token)
            .send()
            .await;

        Self::classify(result).await
    }

    /// A completed exchange is `success = true` whatever the status code;
    /// callers decide what counts as a good status. Anything short of a
    /// readable response body is `success = false` with `status = 0`, unless
    /// the transport error itself carries a status.
    async fn classify(result: reqwest::Result<reqwest::Response>) -> LinkOutcome {
        match result {
            Ok(response) => {
                let status = response.status().as_u16();
                match response.text().await {
                    Ok(body) => LinkOutcome {
                        success: true,
                        message: body,
                        status,
                    },
                    Err(e) => LinkOutcome {
                        success: false,
                        message: e.to_string(),
                        status: 0,
                    },
                }
            }
            Err(e) => LinkOutcome {
                success: false,
                message: e.to_string(),
                status: e.status().map(|s| s.as_u16()).unwrap_or(0),
            },
        }
    }
}

#[async_trait::async_trait]
impl LinkService for HttpLinkService {
    async fn create_link(&self, slug: &str, destination: &str) -> LinkOutcome {
        let payload = LinkRequest {
            slug: slug.to_string(),
            destination: destination.to_string(),
        };

        tracing::debug!("POST {} slug={}", self.links_url(), slug);
        let result = self
            .client
            .post(self.links_url())
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await;

        Self::classify(result).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn test_settings(base_url: String) -> Settings {
        let mut settings = Settings::default();
        settings.api.base_url = base_url;
        settings.api.token = "test-token".to_string();
        settings.api.timeout_seconds = 5;
        settings
    }

    #[tokio::test]
    async fn test_create_link_success() {
        let server = MockServer::start();

        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/links")
                .header("authorization", "Bearer test-token")
                .header("content-type", "application/json")
                .json_body(serde_json::json!({
                    "slug": "gh",
                    "destination": "https://github.com"
                }));
            then.status(200)
                .header("Content-Type", "application/json")
                .body(r#"{"success":true}"#);
        });

        let service = HttpLinkService::new(&test_settings(server.base_url())).unwrap();
        let outcome = service.create_link("gh", "https://github.com").await;

        api_mock.assert();
        assert!(outcome.success);
        assert_eq!(outcome.status, 200);
        assert_eq!(outcome.message, r#"{"success":true}"#);
    }

    #[tokio::test]
    async fn test_create_link_conflict_is_completed_exchange() {
        let server = MockServer::start();

        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/api/links");
            then.status(409).body(r#"{"error":"slug already exists"}"#);
        });

        let service = HttpLinkService::new(&test_settings(server.base_url())).unwrap();
        let outcome = service.create_link("gh", "https://github.com").await;

        api_mock.assert();
        assert!(outcome.success);
        assert_eq!(outcome.status, 409);
        assert!(outcome.message.contains("already exists"));
    }

    #[tokio::test]
    async fn test_create_link_connection_refused() {
        // 沒有 server 在聽這個 port
        let service =
            HttpLinkService::new(&test_settings("http://127.0.0.1:9".to_string())).unwrap();
        let outcome = service.create_link("gh", "https://github.com").await;

        assert!(!outcome.success);
        assert_eq!(outcome.status, 0);
        assert!(!outcome.message.is_empty());
    }

    #[tokio::test]
    async fn test_list_links() {
        let server = MockServer::start();

        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/links")
                .header("authorization", "Bearer test-token");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "links": [
                        {"slug": "gh", "destination": "https://github.com",
                         "created_at": 1700000000, "updated_at": 1700000000},
                        {"slug": "docs", "destination": "https://example.com/docs",
                         "created_at": 1700000001, "updated_at": 1700000002}
                    ]
                }));
        });

        let service = HttpLinkService::new(&test_settings(server.base_url())).unwrap();
        let links = service.list_links().await.unwrap();

        api_mock.assert();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].slug, "gh");
        assert_eq!(links[1].destination, "https://example.com/docs");
    }

    #[tokio::test]
    async fn test_list_links_unauthorized() {
        let server = MockServer::start();

        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/links");
            then.status(401).body(r#"{"error":"Invalid token"}"#);
        });

        let service = HttpLinkService::new(&test_settings(server.base_url())).unwrap();
        let err = service.list_links().await.unwrap_err();

        api_mock.assert();
        match err {
            ImportError::ApiRejectedError { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("Invalid token"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_link_not_found() {
        let server = MockServer::start();

        let api_mock = server.mock(|when, then| {
            when.method(DELETE)
                .path("/api/links/gone")
                .header("authorization", "Bearer test-token");
            then.status(404).body(r#"{"error":"Link not found"}"#);
        });

        let service = HttpLinkService::new(&test_settings(server.base_url())).unwrap();
        let outcome = service.delete_link("gone").await;

        api_mock.assert();
        assert!(outcome.success);
        assert_eq!(outcome.status, 404);
    }
}
