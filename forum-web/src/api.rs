use async_trait::async_trait;
use once_cell::unsync::OnceCell;
use reqwest::{Client, StatusCode, Url};
use shared::errors::{InteractionError, Result};
use shared::interaction::ForumTransport;
use shared::models::{EditMessageConfig, EditMessageRequest};
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, Window};

const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";
const CSRF_HEADER: &str = "X-CSRFToken";

thread_local! {
    static SHARED_CLIENT: OnceCell<ForumClient> = OnceCell::new();
}

/// HTTP client for the forum's thread endpoints.
#[derive(Clone, Debug)]
pub struct ForumClient {
    client: Client,
    page_url: Option<Url>,
}

impl ForumClient {
    /// Create a client resolving relative endpoint URLs against `page_url`.
    pub fn new(page_url: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            page_url: page_url.and_then(|href| Url::parse(href).ok()),
        }
    }

    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| {
                let href = web_sys::window().and_then(|window| window.location().href().ok());
                Self::new(href.as_deref())
            })
            .clone()
        })
    }

    fn resolve(&self, url: &str) -> Result<Url> {
        let resolved = match &self.page_url {
            Some(base) => base.join(url),
            None => Url::parse(url),
        };
        resolved.map_err(|error| InteractionError::Transport(format!("invalid url `{url}`: {error}")))
    }
}

fn transport_error(error: &reqwest::Error) -> InteractionError {
    InteractionError::Transport(error.to_string())
}

#[async_trait(?Send)]
impl ForumTransport for ForumClient {
    async fn fetch_update_stamp(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(self.resolve(url)?)
            .send()
            .await
            .map_err(|error| transport_error(&error))?;
        if response.status() != StatusCode::OK {
            return Err(InteractionError::UnexpectedStatus(response.status().as_u16()));
        }
        response.text().await.map_err(|error| transport_error(&error))
    }

    async fn submit_edit(
        &self,
        config: &EditMessageConfig,
        request: &EditMessageRequest,
    ) -> Result<u16> {
        let builder = self
            .client
            .post(self.resolve(&config.url)?)
            .header(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE)
            .header(CSRF_HEADER, config.csrf_token.as_str())
            .json(request);
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_same_origin();

        let response = builder.send().await.map_err(|error| transport_error(&error))?;
        Ok(response.status().as_u16())
    }
}

pub(crate) fn read_cookie(name: &str) -> Option<String> {
    let window: Window = web_sys::window()?;
    let document = window.document()?;
    let html_doc: HtmlDocument = document.dyn_into().ok()?;
    let cookie_string = html_doc.cookie().ok()?;
    find_cookie(&cookie_string, name)
}

/// Look up `name` in a `document.cookie` string. Entries without `=` are
/// skipped.
fn find_cookie(cookie_string: &str, name: &str) -> Option<String> {
    cookie_string
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().to_string())
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod transport_tests {
    use super::*;
    use shared::models::EditSession;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn edit_config() -> EditMessageConfig {
        EditMessageConfig {
            url: "/thread/3/editmessage".to_string(),
            csrf_token: "csrf-abc".to_string(),
        }
    }

    fn root_edit() -> EditMessageRequest {
        EditMessageRequest::for_session(
            "3",
            &EditSession {
                target_id: "3".to_string(),
                draft: "hi".to_string(),
            },
        )
    }

    #[tokio::test]
    async fn test_submit_edit_sends_headers_and_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/thread/3/editmessage"))
            .and(header("X-Requested-With", "XMLHttpRequest"))
            .and(header("X-CSRFToken", "csrf-abc"))
            .and(body_json(serde_json::json!({"replyId": "", "newMessage": "hi"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = ForumClient::new(Some(&server.uri()));
        let status = client.submit_edit(&edit_config(), &root_edit()).await.unwrap();

        assert_eq!(status, 204);
    }

    #[tokio::test]
    async fn test_submit_edit_reports_rejection_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/thread/3/editmessage"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let client = ForumClient::new(Some(&server.uri()));
        let status = client.submit_edit(&edit_config(), &root_edit()).await.unwrap();

        assert_eq!(status, 400);
    }

    #[tokio::test]
    async fn test_fetch_update_stamp_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/thread/3/getupdated"))
            .respond_with(ResponseTemplate::new(200).set_body_string("1700000123"))
            .mount(&server)
            .await;

        let client = ForumClient::new(Some(&server.uri()));
        let body = client.fetch_update_stamp("/thread/3/getupdated").await.unwrap();

        assert_eq!(body, "1700000123");
    }

    #[tokio::test]
    async fn test_fetch_update_stamp_non_ok_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/thread/3/getupdated"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = ForumClient::new(Some(&server.uri()));
        let error = client.fetch_update_stamp("/thread/3/getupdated").await.unwrap_err();

        assert!(matches!(error, InteractionError::UnexpectedStatus(500)));
    }

    #[tokio::test]
    async fn test_fetch_update_stamp_connection_refused() {
        let client = ForumClient::new(Some("http://127.0.0.1:9/"));
        let error = client.fetch_update_stamp("/thread/3/getupdated").await.unwrap_err();

        assert!(matches!(error, InteractionError::Transport(_)));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_read_cookie_after_valueless_cookie() {
        let document: HtmlDocument = web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .dyn_into()
            .unwrap();
        document.set_cookie("consent").unwrap();
        document.set_cookie("csrftoken=abc").unwrap();

        assert_eq!(read_cookie("csrftoken").as_deref(), Some("abc"));
    }
}
