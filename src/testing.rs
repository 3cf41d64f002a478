//! Shared fixtures for unit tests: an in-memory client wired to a mock
//! backend, and a token minter.

use async_trait::async_trait;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::io::{Error as IoError, ErrorKind};
use std::sync::Arc;
use wiremock::MockServer;

use crate::auth::{AuthService, Claims};
use crate::client::ApiClient;
use crate::common::{ApiError, ClientConfig, LoginContract};
use crate::navigation::{MemoryNavigator, MemoryNotifier};
use crate::session::{MemoryStorage, Role, SessionStorage, SessionStore, SessionUser};

pub const TEST_SECRET: &str = "test_secret_key";

pub fn mint_token(email: &str, role: Role, exp: i64) -> String {
    let claims = Claims {
        sub: email.to_string(),
        role: Some(role),
        exp,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("Failed to encode token")
}

pub fn valid_token(email: &str, role: Role) -> String {
    mint_token(email, role, chrono::Utc::now().timestamp() + 3600)
}

pub fn expired_token(email: &str, role: Role) -> String {
    mint_token(email, role, chrono::Utc::now().timestamp() - 3600)
}

/// Storage that accepts writes but refuses to delete records.
#[derive(Default)]
pub struct UndeletableStorage {
    inner: MemoryStorage,
}

#[async_trait]
impl SessionStorage for UndeletableStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, ApiError> {
        self.inner.get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), ApiError> {
        self.inner.set_item(key, value).await
    }

    async fn remove_item(&self, _key: &str) -> Result<(), ApiError> {
        Err(IoError::new(ErrorKind::PermissionDenied, "read-only").into())
    }
}

pub struct Harness {
    pub server: MockServer,
    pub storage: Arc<dyn SessionStorage>,
    pub navigator: Arc<MemoryNavigator>,
    pub notifier: Arc<MemoryNotifier>,
    pub client: ApiClient,
    pub auth: AuthService,
}

impl Harness {
    pub async fn start() -> Self {
        Self::start_with(LoginContract::OAuth2Form, "/").await
    }

    pub async fn start_at(path: &str) -> Self {
        Self::start_with(LoginContract::OAuth2Form, path).await
    }

    pub async fn start_with(contract: LoginContract, path: &str) -> Self {
        Self::start_on(Arc::new(MemoryStorage::new()), contract, path).await
    }

    pub async fn start_on(
        storage: Arc<dyn SessionStorage>,
        contract: LoginContract,
        path: &str,
    ) -> Self {
        let server = MockServer::start().await;
        let session = SessionStore::load(storage.clone()).await.expect("load session");
        let navigator = Arc::new(MemoryNavigator::starting_at(path));
        let notifier = Arc::new(MemoryNotifier::new());

        let config = ClientConfig::default()
            .with_api_url(server.uri())
            .with_login_contract(contract);
        let client = ApiClient::new(&config, session, navigator.clone(), notifier.clone())
            .expect("build client");
        let auth = AuthService::new(client.clone(), contract);

        Self {
            server,
            storage,
            navigator,
            notifier,
            client,
            auth,
        }
    }

    /// Put a session in place without going through the login endpoint.
    pub async fn sign_in_as(&self, email: &str, role: Role) -> String {
        let token = valid_token(email, role);
        self.client
            .session()
            .establish(token.clone(), SessionUser::new(email, role))
            .await
            .expect("establish session");
        token
    }
}
