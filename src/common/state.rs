// Application state shared across all views

use std::sync::Arc;

use tracing::info;

use super::{safe_email_log, ApiError, ClientConfig};
use crate::admin::AdminApi;
use crate::ai::AiApi;
use crate::auth::AuthService;
use crate::candidates::CandidatesApi;
use crate::client::ApiClient;
use crate::interviews::InterviewsApi;
use crate::jobs::JobsApi;
use crate::navigation::{Navigator, Notifier, RouteGuard};
use crate::recruiters::RecruitersApi;
use crate::session::{FileStorage, SessionStorage, SessionStore};

/// The client, session and every endpoint wrapper, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: ClientConfig,
    pub client: ApiClient,
    pub auth: AuthService,
    pub guard: RouteGuard,
    pub jobs: JobsApi,
    pub candidates: CandidatesApi,
    pub recruiters: RecruitersApi,
    pub interviews: InterviewsApi,
    pub ai: AiApi,
    pub admin: AdminApi,
}

impl AppState {
    /// Build state over the session file named in `config`.
    pub async fn init(
        config: ClientConfig,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, ApiError> {
        let storage: Arc<dyn SessionStorage> = Arc::new(FileStorage::new(config.session_file.clone()));
        Self::with_storage(config, storage, navigator, notifier).await
    }

    pub async fn with_storage(
        config: ClientConfig,
        storage: Arc<dyn SessionStorage>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, ApiError> {
        let session = SessionStore::load(storage).await?;
        if let Some(user) = session.user().await {
            info!(
                email = %safe_email_log(&user.email),
                role = %user.role,
                "Restored persisted session"
            );
        }

        let client = ApiClient::new(&config, session, navigator, notifier)?;
        let auth = AuthService::new(client.clone(), config.login_contract);

        Ok(Self {
            guard: RouteGuard::new(auth.clone()),
            jobs: JobsApi::new(client.clone()),
            candidates: CandidatesApi::new(client.clone()),
            recruiters: RecruitersApi::new(client.clone()),
            interviews: InterviewsApi::new(client.clone()),
            ai: AiApi::new(client.clone()),
            admin: AdminApi::new(client.clone()),
            auth,
            client,
            config,
        })
    }
}
