// src/client/api_client.rs
//! Authenticated REST client
//!
//! Every call runs the same sequence: build the request, apply client-wide
//! default headers, attach the session's bearer credential, send once, then
//! interpret the response. A 401 anywhere clears the session and sends the
//! user to the login view; other failures surface as toasts.

use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

use super::pipeline::{
    apply_default_headers, attach_auth, bearer_value, interpret_response, parse_payload,
    ResponseOutcome,
};
use crate::common::{ApiError, ClientConfig};
use crate::navigation::routes::{is_login_view, LOGIN};
use crate::navigation::{Navigator, Notifier};
use crate::session::SessionStore;

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: SessionStore,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    default_headers: Arc<RwLock<HeaderMap>>,
}

impl ApiClient {
    pub fn new(
        config: &ClientConfig,
        session: SessionStore,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            session,
            navigator,
            notifier,
            default_headers: Arc::new(RwLock::new(HeaderMap::new())),
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // ========================================================================
    // DEFAULT HEADERS
    // ========================================================================

    /// Install (or remove, with `None`) the client-wide bearer credential.
    pub fn set_default_token(&self, token: Option<&str>) -> Result<(), ApiError> {
        let value = token.map(bearer_value).transpose()?;
        if let Ok(mut headers) = self.default_headers.write() {
            match value {
                Some(v) => {
                    headers.insert(AUTHORIZATION, v);
                }
                None => {
                    headers.remove(AUTHORIZATION);
                }
            }
        }
        Ok(())
    }

    pub fn default_authorization(&self) -> Option<String> {
        self.default_headers
            .read()
            .ok()?
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    // ========================================================================
    // VERB HELPERS
    // ========================================================================

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.http.request(Method::GET, self.url(path)))
            .await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.http.request(Method::GET, self.url(path)).query(query))
            .await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.http.request(Method::POST, self.url(path)).json(body))
            .await
    }

    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.http.request(Method::POST, self.url(path)))
            .await
    }

    pub async fn post_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.http.request(Method::POST, self.url(path)).query(query))
            .await
    }

    /// POST an `application/x-www-form-urlencoded` body.
    pub async fn post_form<T, F>(&self, path: &str, form: &F) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        F: Serialize + ?Sized,
    {
        self.send(self.http.request(Method::POST, self.url(path)).form(form))
            .await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        self.send(self.http.request(Method::POST, self.url(path)).multipart(form))
            .await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.http.request(Method::PUT, self.url(path)).json(body))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.http.request(Method::DELETE, self.url(path)))
            .await
    }

    /// Fetch a body verbatim, e.g. a backup archive download.
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let (status, body) = self
            .execute(self.http.request(Method::GET, self.url(path)))
            .await?;
        match interpret_response(status, &body) {
            ResponseOutcome::Success => Ok(body),
            failure => Err(self.react_to_failure(failure).await),
        }
    }

    // ========================================================================
    // PIPELINE
    // ========================================================================

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let (status, body) = self.execute(builder).await?;
        self.handle_response(status, &body).await
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<(StatusCode, Vec<u8>), ApiError> {
        let mut request = match builder.build() {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Request could not be built");
                self.notifier.toast_error(&format!("Network error: {e}"));
                return Err(e.into());
            }
        };

        if let Ok(defaults) = self.default_headers.read() {
            apply_default_headers(&mut request, &defaults);
        }
        let token = self.session.token().await;
        attach_auth(&mut request, token.as_deref())?;

        debug!(
            method = %request.method(),
            url = %request.url(),
            authenticated = request.headers().contains_key(AUTHORIZATION),
            "📥 Request"
        );

        let response = match self.http.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Request could not be sent");
                self.notifier.toast_error(&format!("Network error: {e}"));
                return Err(e.into());
            }
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                self.notifier.toast_error(&format!("Network error: {e}"));
                return Err(e.into());
            }
        };

        debug!(status = %status, bytes = body.len(), "📤 Response");
        Ok((status, body))
    }

    /// Turn a received response into the caller's payload, applying the
    /// uniform failure reactions.
    pub async fn handle_response<T: DeserializeOwned>(
        &self,
        status: StatusCode,
        body: &[u8],
    ) -> Result<T, ApiError> {
        match interpret_response(status, body) {
            ResponseOutcome::Success => parse_payload(body),
            failure => Err(self.react_to_failure(failure).await),
        }
    }

    async fn react_to_failure(&self, outcome: ResponseOutcome) -> ApiError {
        match outcome {
            ResponseOutcome::Unauthorized(message) => {
                self.handle_unauthorized().await;
                ApiError::Unauthorized(message)
            }
            ResponseOutcome::Failure { status, message } => {
                self.notifier.toast_error(&message);
                ApiError::from_status(status, message)
            }
            ResponseOutcome::Success => ApiError::InvalidInput(
                "successful response reported as failure".to_string(),
            ),
        }
    }

    /// Drop the session and return to the login view unless already there.
    pub async fn handle_unauthorized(&self) {
        warn!("Server rejected credentials; clearing session");

        if let Err(e) = self.session.clear().await {
            warn!(error = %e, "Failed to clear persisted session");
        }
        if let Err(e) = self.set_default_token(None) {
            warn!(error = %e, "Failed to clear default authorization header");
        }

        if !is_login_view(&self.navigator.current_path()) {
            self.navigator.navigate(LOGIN);
        }
    }
}
