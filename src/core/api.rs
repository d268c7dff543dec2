//! REST client for the course backend.
//!
//! [`ApiClient`] builds the list URLs, attaches the session's bearer token
//! and decodes the [`ApiEnvelope`]. The actual HTTP exchange goes through
//! an [`HttpTransport`], which is `gloo-net` in the browser and a scripted
//! fake in tests.
//!
//! A `401` triggers exactly one token refresh followed by one retry. If the
//! retry is rejected too, or there is no refresh token, the session is
//! cleared and the call fails with [`FetchError::Unauthorized`].

use std::collections::HashSet;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::error::FetchError;
use super::session::SessionStore;
use crate::config::{ApiConfig, MAX_MODULE_PAGES};
use crate::models::{
    ApiEnvelope, Module, ModuleId, RefreshRequest, RefreshResponse, Session, Topic,
    sort_modules, sort_topics,
};

const STATUS_UNAUTHORIZED: u16 = 401;

// =============================================================================
// Transport
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// An outgoing request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    /// JSON body
    pub body: Option<String>,
}

/// A received response. Any status is a response; only transport-level
/// failures are errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends HTTP requests.
#[allow(async_fn_in_trait)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, FetchError>;
}

// =============================================================================
// Client
// =============================================================================

/// Authenticated client for the module and topic endpoints.
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
    page_limit: u32,
    session: Arc<dyn SessionStore + Send + Sync>,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(transport: T, config: &ApiConfig, session: Arc<dyn SessionStore + Send + Sync>) -> Self {
        Self {
            transport,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_limit: config.page_limit.max(1),
            session,
        }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The stored session, if the user is signed in.
    pub fn session(&self) -> Option<Session> {
        self.session.load()
    }

    pub fn modules_url(&self, skip: u32) -> String {
        format!(
            "{}/modules/?limit={}&skip={}",
            self.base_url, self.page_limit, skip
        )
    }

    pub fn topics_url(&self, module: ModuleId) -> String {
        format!(
            "{}/topics/?module_id={}&limit={}",
            self.base_url, module, self.page_limit
        )
    }

    fn refresh_url(&self) -> String {
        format!("{}/auth/refresh", self.base_url)
    }

    /// One page of modules, sorted.
    pub async fn list_modules(&self, skip: u32) -> Result<ApiEnvelope<Module>, FetchError> {
        let mut page: ApiEnvelope<Module> = self.get_list(&self.modules_url(skip)).await?;
        sort_modules(&mut page.data);
        Ok(page)
    }

    /// Every module, following `skip` until a short page or `total` is
    /// reached.
    ///
    /// Stops early on a page with no unseen module ids (a backend that
    /// ignores `skip`) and after [`MAX_MODULE_PAGES`] pages.
    pub async fn list_all_modules(&self) -> Result<Vec<Module>, FetchError> {
        let mut modules = Vec::new();
        let mut seen = HashSet::new();
        for _ in 0..MAX_MODULE_PAGES {
            let page = self.list_modules(modules.len() as u32).await?;
            let received = page.data.len();
            let before = modules.len();
            modules.extend(page.data.into_iter().filter(|m| seen.insert(m.id)));

            if before > 0 && modules.len() == before && received > 0 {
                log::warn!("module page at skip={} repeated known modules, stopping", before);
                break;
            }
            let short_page = received < self.page_limit as usize;
            let reached_total = page.total.is_some_and(|t| modules.len() as u64 >= t);
            if received == 0 || short_page || reached_total {
                break;
            }
        }
        sort_modules(&mut modules);
        log::info!("loaded {} modules", modules.len());
        Ok(modules)
    }

    /// Topics of a module, sorted.
    pub async fn list_topics(&self, module: ModuleId) -> Result<Vec<Topic>, FetchError> {
        let page: ApiEnvelope<Topic> = self.get_list(&self.topics_url(module)).await?;
        let mut topics = page.data;
        sort_topics(&mut topics);
        log::info!("loaded {} topics for module {}", topics.len(), module);
        Ok(topics)
    }

    async fn get_list<D: DeserializeOwned>(&self, url: &str) -> Result<ApiEnvelope<D>, FetchError> {
        let response = self.get_authorized(url).await?;
        serde_json::from_str(&response.body).map_err(|e| {
            log::error!("unexpected response from {}: {}", url, e);
            FetchError::Decode(e.to_string())
        })
    }

    async fn get_authorized(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let response = self.get_once(url).await?;
        if response.status != STATUS_UNAUTHORIZED {
            return check_status(response);
        }

        log::info!("access token rejected, refreshing");
        self.refresh().await?;

        let retry = self.get_once(url).await?;
        if retry.status == STATUS_UNAUTHORIZED {
            log::warn!("request still unauthorized after refresh");
            self.session.clear();
            return Err(FetchError::Unauthorized);
        }
        check_status(retry)
    }

    async fn get_once(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let bearer = self.session.load().map(|s| s.access_token);
        self.transport
            .send(HttpRequest {
                method: Method::Get,
                url: url.to_string(),
                bearer,
                body: None,
            })
            .await
    }

    /// Exchange the refresh token for a new access token.
    async fn refresh(&self) -> Result<(), FetchError> {
        let Some(session) = self.session.load() else {
            return Err(FetchError::Unauthorized);
        };
        let Some(refresh_token) = session.refresh_token.as_deref() else {
            log::warn!("no refresh token, session ends");
            self.session.clear();
            return Err(FetchError::Unauthorized);
        };

        let body = serde_json::to_string(&RefreshRequest { refresh_token })
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        let response = self
            .transport
            .send(HttpRequest {
                method: Method::Post,
                url: self.refresh_url(),
                bearer: None,
                body: Some(body),
            })
            .await?;

        if !response.is_success() {
            log::warn!("token refresh rejected with status {}", response.status);
            self.session.clear();
            return Err(FetchError::Unauthorized);
        }

        let refreshed: RefreshResponse =
            serde_json::from_str(&response.body).map_err(|e| FetchError::Decode(e.to_string()))?;
        let next = Session {
            access_token: refreshed.access_token,
            refresh_token: refreshed.refresh_token.or(session.refresh_token),
            role: session.role,
        };
        if let Err(e) = self.session.save(&next) {
            log::warn!("refreshed session not persisted: {}", e);
        }
        Ok(())
    }
}

fn check_status(response: HttpResponse) -> Result<HttpResponse, FetchError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(FetchError::Http(response.status))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;
    use crate::core::session::MemorySessionStore;
    use crate::models::TopicId;

    /// Replays canned responses and records requests.
    #[derive(Default)]
    struct FakeTransport {
        responses: Mutex<VecDeque<Result<HttpResponse, FetchError>>>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl FakeTransport {
        fn with(responses: Vec<(u16, &str)>) -> Self {
            Self {
                responses: Mutex::new(
                    responses
                        .into_iter()
                        .map(|(status, body)| {
                            Ok(HttpResponse {
                                status,
                                body: body.to_string(),
                            })
                        })
                        .collect(),
                ),
                requests: Mutex::default(),
            }
        }

        fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl HttpTransport for FakeTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, FetchError> {
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(FetchError::Network("no canned response".into())))
        }
    }

    fn session(refresh: Option<&str>) -> Arc<MemorySessionStore> {
        Arc::new(MemorySessionStore::new(Some(Session {
            access_token: "old".into(),
            refresh_token: refresh.map(String::from),
            role: None,
        })))
    }

    fn client(
        responses: Vec<(u16, &str)>,
        store: Arc<MemorySessionStore>,
    ) -> ApiClient<FakeTransport> {
        let config = ApiConfig {
            base_url: "https://lms.example.com/api/v1/".into(),
            page_limit: 2,
            ..ApiConfig::default()
        };
        ApiClient::new(FakeTransport::with(responses), &config, store)
    }

    const TOPICS: &str = r#"{"data": [
        {"id": 2, "title": "Second", "content": null, "resource_link": "https://youtu.be/dQw4w9WgXcQ", "order_index": 2},
        {"id": 1, "title": "First", "content": "Intro", "resource_link": null, "order_index": 1}
    ], "total": 2}"#;

    #[test]
    fn test_urls() {
        let client = client(vec![], session(None));
        assert_eq!(
            client.modules_url(4),
            "https://lms.example.com/api/v1/modules/?limit=2&skip=4"
        );
        assert_eq!(
            client.topics_url(ModuleId(7)),
            "https://lms.example.com/api/v1/topics/?module_id=7&limit=2"
        );
    }

    #[tokio::test]
    async fn test_list_topics_sorted_with_bearer() {
        let client = client(vec![(200, TOPICS)], session(None));
        let topics = client.list_topics(ModuleId(7)).await.unwrap();
        let ids: Vec<TopicId> = topics.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TopicId(1), TopicId(2)]);

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].bearer.as_deref(), Some("old"));
    }

    #[tokio::test]
    async fn test_refresh_then_retry_once() {
        let store = session(Some("refresh-1"));
        let client = client(
            vec![
                (401, ""),
                (200, r#"{"access_token": "new"}"#),
                (200, TOPICS),
            ],
            store.clone(),
        );
        let topics = client.list_topics(ModuleId(7)).await.unwrap();
        assert_eq!(topics.len(), 2);

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[1].method, Method::Post);
        assert_eq!(requests[1].url, "https://lms.example.com/api/v1/auth/refresh");
        assert_eq!(
            requests[1].body.as_deref(),
            Some(r#"{"refresh_token":"refresh-1"}"#)
        );
        assert_eq!(requests[2].bearer.as_deref(), Some("new"));

        let saved = store.load().unwrap();
        assert_eq!(saved.access_token, "new");
        assert_eq!(saved.refresh_token.as_deref(), Some("refresh-1"));
    }

    #[tokio::test]
    async fn test_second_unauthorized_clears_session() {
        let store = session(Some("refresh-1"));
        let client = client(
            vec![(401, ""), (200, r#"{"access_token": "new"}"#), (401, "")],
            store.clone(),
        );
        assert_eq!(
            client.list_topics(ModuleId(7)).await,
            Err(FetchError::Unauthorized)
        );
        assert_eq!(client.transport().requests().len(), 3);
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn test_no_refresh_token_is_unauthorized() {
        let store = session(None);
        let client = client(vec![(401, "")], store.clone());
        assert_eq!(
            client.list_topics(ModuleId(7)).await,
            Err(FetchError::Unauthorized)
        );
        assert_eq!(client.transport().requests().len(), 1);
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let client = client(vec![(500, "oops")], session(None));
        assert_eq!(
            client.list_topics(ModuleId(7)).await,
            Err(FetchError::Http(500))
        );
    }

    #[tokio::test]
    async fn test_shape_sniffing_rejected() {
        let client = client(vec![(200, r#"{"results": []}"#)], session(None));
        assert!(matches!(
            client.list_topics(ModuleId(7)).await,
            Err(FetchError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_list_all_modules_pages() {
        let client = client(
            vec![
                (
                    200,
                    r#"{"data": [{"id": 1, "title": "A", "order_index": 2}, {"id": 2, "title": "B", "order_index": 1}]}"#,
                ),
                (200, r#"{"data": [{"id": 3, "title": "C", "order_index": 0}]}"#),
            ],
            session(None),
        );
        let modules = client.list_all_modules().await.unwrap();
        let titles: Vec<&str> = modules.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "B", "A"]);

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 2);
        assert!(requests[1].url.ends_with("skip=2"));
    }

    #[tokio::test]
    async fn test_list_all_modules_stops_when_skip_ignored() {
        const PAGE: &str = r#"{"data": [{"id": 1, "title": "A"}, {"id": 2, "title": "B"}]}"#;
        let client = client(vec![(200, PAGE); 5], session(None));

        let modules = client.list_all_modules().await.unwrap();
        assert_eq!(modules.len(), 2);
        assert_eq!(client.transport().requests().len(), 2);
    }

    #[tokio::test]
    async fn test_list_all_modules_stops_at_total() {
        let client = client(
            vec![(
                200,
                r#"{"data": [{"id": 1, "title": "A"}, {"id": 2, "title": "B"}], "total": 2}"#,
            )],
            session(None),
        );
        assert_eq!(client.list_all_modules().await.unwrap().len(), 2);
        assert_eq!(client.transport().requests().len(), 1);
    }
}
