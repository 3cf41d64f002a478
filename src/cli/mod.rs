// src/cli/mod.rs
//! Command-line surface: one subcommand per view of the platform.

pub mod commands;
pub mod output;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use recruit::admin::MaintenanceAction;
use recruit::ai::api::DEFAULT_QUESTION_COUNT;
use recruit::candidates::ApplicationStatus;
use recruit::common::LoginContract;
use recruit::interviews::models::{DEFAULT_DURATION_MINUTES, DEFAULT_TOTAL_QUESTIONS};
use recruit::interviews::InterviewStatus;
use recruit::jobs::JobStatus;
use recruit::session::Role;
use recruit::{ApiError, ClientConfig};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Api(ApiError),
    /// Already shown to the user as a toast or inline message.
    #[error("request failed")]
    Reported,
    #[error("Session expired, please log in again")]
    SessionExpired,
    #[error("could not read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid timestamp `{0}` (expected RFC 3339, e.g. 2024-05-01T10:00:00Z)")]
    InvalidTimestamp(String),
}

impl From<ApiError> for CliError {
    fn from(e: ApiError) -> Self {
        if matches!(e, ApiError::Unauthorized(_)) {
            CliError::SessionExpired
        } else if e.was_toasted() {
            CliError::Reported
        } else {
            CliError::Api(e)
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "recruit", version, about = "Recruitment platform client")]
pub struct Cli {
    /// Backend base URL, including the `/api` prefix
    #[arg(long, env = "RECRUIT_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Where the signed-in session is kept between runs
    #[arg(long, env = "RECRUIT_SESSION_FILE", global = true)]
    pub session_file: Option<PathBuf>,

    /// Login wire format: `form` (OAuth2 password form) or `json`
    #[arg(long, env = "RECRUIT_LOGIN_CONTRACT", global = true)]
    pub login_contract: Option<LoginContract>,

    #[arg(long, env = "RECRUIT_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Environment-derived config with explicit flags layered on top.
    pub fn config(&self) -> ClientConfig {
        let mut config = ClientConfig::from_env();
        if let Some(url) = &self.api_url {
            config.api_url = url.clone();
        }
        if let Some(path) = &self.session_file {
            config.session_file = path.clone();
        }
        if let Some(contract) = self.login_contract {
            config.login_contract = contract;
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and keep the session
    Login {
        email: String,
        /// Read from stdin when omitted
        #[arg(long, env = "RECRUIT_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Create an account
    Register {
        email: String,
        #[arg(long)]
        full_name: String,
        #[arg(long, default_value = "candidate")]
        role: Role,
        #[arg(long, env = "RECRUIT_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    Logout,
    /// Show who is signed in and whether the credential is still valid
    Status,
    Password(PasswordCommand),
    /// Change profile details
    Profile {
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    Jobs(JobsCommand),
    /// Apply to a job as a candidate
    Apply {
        job_id: String,
        #[arg(long)]
        cover_letter: Option<String>,
    },
    /// Upload a PDF resume
    Resume { path: PathBuf },
    /// List own applications, or show one
    Applications { application_id: Option<String> },
    /// Take the interview bot for a job
    Interview {
        interview_id: String,
        job_id: String,
        #[arg(long, default_value_t = DEFAULT_QUESTION_COUNT)]
        questions: u32,
    },
    Recruiter(RecruiterCommand),
    Ai(AiCommand),
    Admin(AdminCommand),
}

#[derive(Args, Debug)]
pub struct PasswordCommand {
    #[command(subcommand)]
    pub command: PasswordSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PasswordSubcommand {
    /// Request a reset email
    Reset { email: String },
    Update {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
    },
}

#[derive(Args, Debug)]
pub struct JobsCommand {
    #[command(subcommand)]
    pub command: JobsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum JobsSubcommand {
    List {
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        status: Option<JobStatus>,
        #[arg(long)]
        recruiter: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    Show { job_id: String },
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long = "requirement")]
        requirements: Vec<String>,
        #[arg(long, default_value = "open")]
        status: JobStatus,
    },
    Update {
        job_id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long = "requirement")]
        requirements: Vec<String>,
        #[arg(long)]
        status: Option<JobStatus>,
    },
    Delete { job_id: String },
}

#[derive(Args, Debug)]
pub struct RecruiterCommand {
    #[command(subcommand)]
    pub command: RecruiterSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RecruiterSubcommand {
    Applications {
        #[arg(long)]
        job: Option<String>,
        #[arg(long)]
        status: Option<ApplicationStatus>,
    },
    Review {
        application_id: String,
        status: ApplicationStatus,
        #[arg(long)]
        feedback: Option<String>,
    },
    Schedule {
        application_id: String,
        #[arg(long)]
        job: String,
        #[arg(long)]
        candidate: String,
        /// RFC 3339 start time
        #[arg(long)]
        at: Option<String>,
        #[arg(long, default_value_t = DEFAULT_DURATION_MINUTES)]
        duration: u32,
        #[arg(long, default_value_t = DEFAULT_TOTAL_QUESTIONS)]
        questions: u32,
    },
    Interviews {
        #[arg(long)]
        status: Option<InterviewStatus>,
    },
}

#[derive(Args, Debug)]
pub struct AiCommand {
    #[command(subcommand)]
    pub command: AiSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AiSubcommand {
    /// Draft a job description
    Describe {
        title: String,
        #[arg(long, default_value = "full-time")]
        job_type: String,
    },
    /// Analyse resume text, optionally against a job description
    Analyze {
        /// Plain-text resume file
        resume: PathBuf,
        #[arg(long)]
        job_description: Option<String>,
    },
    Questions {
        job_id: String,
        #[arg(long, default_value_t = DEFAULT_QUESTION_COUNT)]
        count: u32,
    },
}

#[derive(Args, Debug)]
pub struct AdminCommand {
    #[command(subcommand)]
    pub command: AdminSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AdminSubcommand {
    Users {
        #[arg(long)]
        role: Option<Role>,
    },
    Stats,
    Logs {
        #[arg(long)]
        level: Option<String>,
        #[arg(long)]
        since: Option<String>,
        #[arg(long)]
        until: Option<String>,
        /// Show AI generation logs instead of errors
        #[arg(long)]
        ai: bool,
    },
    Backup,
    Restore { path: PathBuf },
    Download {
        backup_id: String,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    Maintenance { action: MaintenanceAction },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "recruit",
            "--api-url",
            "http://backend:9000/api",
            "--login-contract",
            "json",
            "status",
        ])
        .expect("parse");

        let config = cli.config();
        assert_eq!(config.api_url, "http://backend:9000/api");
        assert_eq!(config.login_contract, LoginContract::Json);
        assert!(matches!(cli.command, Command::Status));
    }

    #[test]
    fn test_parses_typed_arguments() {
        let cli = Cli::try_parse_from([
            "recruit", "recruiter", "review", "app-1", "accepted", "--feedback", "Great",
        ])
        .expect("parse");

        match cli.command {
            Command::Recruiter(RecruiterCommand {
                command:
                    RecruiterSubcommand::Review {
                        application_id,
                        status,
                        feedback,
                    },
            }) => {
                assert_eq!(application_id, "app-1");
                assert_eq!(status, ApplicationStatus::Accepted);
                assert_eq!(feedback.as_deref(), Some("Great"));
            }
            other => panic!("unexpected command {other:?}"),
        }

        assert!(Cli::try_parse_from(["recruit", "register", "a@b.io", "--full-name", "A", "--role", "owner"]).is_err());
    }

    #[test]
    fn test_toasted_errors_are_not_reprinted() {
        let reported = CliError::from(ApiError::NotFound("Job not found".to_string()));
        assert!(matches!(reported, CliError::Reported));

        let expired = CliError::from(ApiError::Unauthorized("expired".to_string()));
        assert!(matches!(expired, CliError::SessionExpired));
        assert_eq!(expired.to_string(), "Session expired, please log in again");

        let shown = CliError::from(ApiError::AccessDenied("/login".to_string()));
        assert_eq!(shown.to_string(), "Access denied, redirected to /login");
    }
}
