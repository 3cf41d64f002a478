// src/cli/commands.rs

use std::path::Path;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::debug;

use super::output;
use super::*;
use recruit::admin::models::{BackupFile, LogQuery, UserFilter};
use recruit::admin::api::backup_file_name;
use recruit::ai::models::{JobDescriptionRequest, ResumeAnalysisRequest};
use recruit::auth::models::ProfileUpdate;
use recruit::auth::RegisterRequest;
use recruit::candidates::{ApplyRequest, ResumeUpload};
use recruit::interviews::models::CreateInterview;
use recruit::interviews::InterviewSession;
use recruit::jobs::{CreateJob, JobSearch, UpdateJob};
use recruit::navigation::routes::{self, LOGIN, REGISTER};
use recruit::navigation::{Navigator, Notifier};
use recruit::recruiters::{ApplicationFilter, ApplicationReview, InterviewFilter};
use recruit::AppState;

/// Auth operations report their own failures inline.
fn reported(_: ApiError) -> CliError {
    CliError::Reported
}

pub async fn run(state: &AppState, command: Command) -> Result<(), CliError> {
    match command {
        Command::Login { email, password } => {
            state.client.navigator().navigate(LOGIN);
            let password = match password {
                Some(p) => p,
                None => prompt("Password: ").await?,
            };
            let session = state.auth.login(&email, &password).await.map_err(reported)?;
            let home = routes::home_for(session.role());
            state.guard.enter(&home).await?;
            output::print_session(&session, true);
            Ok(())
        }
        Command::Register {
            email,
            full_name,
            role,
            password,
        } => {
            state.client.navigator().navigate(REGISTER);
            let password = match password {
                Some(p) => p,
                None => prompt("Password: ").await?,
            };
            let session = state
                .auth
                .register(RegisterRequest {
                    email,
                    password,
                    full_name,
                    role,
                })
                .await
                .map_err(reported)?;
            output::print_session(&session, true);
            Ok(())
        }
        Command::Logout => {
            state.auth.logout().await?;
            state.client.navigator().navigate(LOGIN);
            println!("Signed out");
            Ok(())
        }
        Command::Status => {
            let valid = state.auth.check_auth().await?;
            let session = state.auth.session().snapshot().await;
            output::print_session(&session, valid);
            Ok(())
        }
        Command::Password(password) => match password.command {
            PasswordSubcommand::Reset { email } => {
                state.auth.reset_password(&email).await.map_err(reported)?;
                Ok(())
            }
            PasswordSubcommand::Update { current, new } => {
                state
                    .auth
                    .update_password(&current, &new)
                    .await
                    .map_err(reported)?;
                Ok(())
            }
        },
        Command::Profile { full_name, email } => {
            let user = state
                .auth
                .update_profile(ProfileUpdate { full_name, email })
                .await
                .map_err(reported)?;
            if let Some(user) = user {
                output::print_user(&user);
            }
            Ok(())
        }
        Command::Jobs(jobs) => run_jobs(state, jobs.command).await,
        Command::Apply {
            job_id,
            cover_letter,
        } => {
            state.guard.require(routes::CANDIDATE_APPLICATIONS).await?;
            let response = state
                .candidates
                .apply(&job_id, &ApplyRequest { cover_letter })
                .await?;
            println!("application {}", response.application_id);
            Ok(())
        }
        Command::Resume { path } => {
            state.guard.require(routes::CANDIDATE_RESUME).await?;
            let bytes = read_file(&path).await?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "resume.pdf".to_string());
            let response = state
                .candidates
                .upload_resume(ResumeUpload::new(file_name, bytes))
                .await?;
            println!("{}", response.message);
            Ok(())
        }
        Command::Applications { application_id } => {
            state.guard.require(routes::CANDIDATE_APPLICATIONS).await?;
            match application_id {
                Some(id) => output::print_application(&state.candidates.application(&id).await?),
                None => output::print_applications(&state.candidates.my_applications().await?),
            }
            Ok(())
        }
        Command::Interview {
            interview_id,
            job_id,
            questions,
        } => {
            state
                .guard
                .require(&routes::candidate_interview(&job_id))
                .await?;
            let mut session = state
                .interviews
                .start(&interview_id, &job_id, questions)
                .await?;
            take_interview(&mut session).await?;
            match state.interviews.submit(&mut session).await {
                Ok(result) => {
                    output::print_interview_result(&result);
                    Ok(())
                }
                Err(e) => match session.error() {
                    Some(message) => {
                        state.client.notifier().inline_error(message);
                        Err(CliError::Reported)
                    }
                    None => Err(e.into()),
                },
            }
        }
        Command::Recruiter(recruiter) => run_recruiter(state, recruiter.command).await,
        Command::Ai(ai) => run_ai(state, ai.command).await,
        Command::Admin(admin) => run_admin(state, admin.command).await,
    }
}

async fn run_jobs(state: &AppState, command: JobsSubcommand) -> Result<(), CliError> {
    match command {
        JobsSubcommand::List {
            query,
            status,
            recruiter,
            page,
            limit,
        } => {
            state.guard.enter(routes::JOBS).await?;
            let search = JobSearch {
                query,
                status,
                recruiter_id: recruiter,
                page,
                limit,
            };
            output::print_jobs(&state.jobs.list(&search).await?);
            Ok(())
        }
        JobsSubcommand::Show { job_id } => {
            state.guard.enter(routes::JOBS).await?;
            output::print_job(&state.jobs.get(&job_id).await?);
            Ok(())
        }
        JobsSubcommand::Create {
            title,
            description,
            requirements,
            status,
        } => {
            state.guard.require(routes::RECRUITER_POST_JOB).await?;
            let recruiter_id = state
                .auth
                .session()
                .user()
                .await
                .and_then(|u| u.id)
                .unwrap_or_default();
            let job = state
                .jobs
                .create(&CreateJob {
                    title,
                    description,
                    requirements,
                    status,
                    recruiter_id,
                })
                .await?;
            output::print_job(&job);
            Ok(())
        }
        JobsSubcommand::Update {
            job_id,
            title,
            description,
            requirements,
            status,
        } => {
            state.guard.require(routes::RECRUITER_DASHBOARD).await?;
            let update = UpdateJob {
                title,
                description,
                requirements: (!requirements.is_empty()).then_some(requirements),
                status,
            };
            output::print_job(&state.jobs.update(&job_id, &update).await?);
            Ok(())
        }
        JobsSubcommand::Delete { job_id } => {
            state.guard.require(routes::RECRUITER_DASHBOARD).await?;
            println!("{}", state.jobs.delete(&job_id).await?.message);
            Ok(())
        }
    }
}

async fn run_recruiter(state: &AppState, command: RecruiterSubcommand) -> Result<(), CliError> {
    match command {
        RecruiterSubcommand::Applications { job, status } => {
            state.guard.require(routes::RECRUITER_APPLICATIONS).await?;
            let filter = ApplicationFilter {
                job_id: job,
                status,
            };
            output::print_applications(&state.recruiters.applications(&filter).await?);
            Ok(())
        }
        RecruiterSubcommand::Review {
            application_id,
            status,
            feedback,
        } => {
            state.guard.require(routes::RECRUITER_APPLICATIONS).await?;
            state
                .recruiters
                .review(&application_id, &ApplicationReview { status, feedback })
                .await?;
            Ok(())
        }
        RecruiterSubcommand::Schedule {
            application_id,
            job,
            candidate,
            at,
            duration,
            questions,
        } => {
            state.guard.require(routes::RECRUITER_INTERVIEWS).await?;
            let recruiter_id = state
                .auth
                .session()
                .user()
                .await
                .and_then(|u| u.id)
                .unwrap_or_default();
            let mut interview = CreateInterview::new(job, candidate, recruiter_id);
            interview.scheduled_at = at.as_deref().map(parse_timestamp).transpose()?;
            interview.duration_minutes = duration;
            interview.total_questions = questions;

            let scheduled = state
                .recruiters
                .schedule_interview(&application_id, &interview)
                .await?;
            println!("interview {}", scheduled.interview_id);
            Ok(())
        }
        RecruiterSubcommand::Interviews { status } => {
            state.guard.require(routes::RECRUITER_INTERVIEWS).await?;
            output::print_interviews(&state.recruiters.interviews(&InterviewFilter { status }).await?);
            Ok(())
        }
    }
}

async fn run_ai(state: &AppState, command: AiSubcommand) -> Result<(), CliError> {
    match command {
        AiSubcommand::Describe { title, job_type } => {
            state.guard.require(routes::RECRUITER_POST_JOB).await?;
            let generated = state
                .ai
                .generate_job_description(&JobDescriptionRequest {
                    title,
                    job_type,
                    experience_level: None,
                    skills: Vec::new(),
                })
                .await?;
            println!("{}\n\n{}", generated.description, generated.requirements);
            Ok(())
        }
        AiSubcommand::Analyze {
            resume,
            job_description,
        } => {
            state.guard.require(routes::RECRUITER_APPLICATIONS).await?;
            let bytes = read_file(&resume).await?;
            let analysis = state
                .ai
                .analyze_resume(&ResumeAnalysisRequest {
                    resume_text: String::from_utf8_lossy(&bytes).into_owned(),
                    job_description,
                })
                .await?;
            output::print_resume_analysis(&analysis);
            Ok(())
        }
        AiSubcommand::Questions { job_id, count } => {
            state.guard.require(routes::RECRUITER_INTERVIEWS).await?;
            let questions = state.ai.generate_interview_questions(&job_id, count).await?;
            output::print_questions(&questions);
            Ok(())
        }
    }
}

async fn run_admin(state: &AppState, command: AdminSubcommand) -> Result<(), CliError> {
    match command {
        AdminSubcommand::Users { role } => {
            state.guard.require(routes::ADMIN_USERS).await?;
            output::print_admin_users(&state.admin.users(&UserFilter { role }).await?);
            Ok(())
        }
        AdminSubcommand::Stats => {
            state.guard.require(routes::ADMIN_DASHBOARD).await?;
            output::print_stats(&state.admin.stats().await?);
            Ok(())
        }
        AdminSubcommand::Logs {
            level,
            since,
            until,
            ai,
        } => {
            state.guard.require(routes::ADMIN_LOGS).await?;
            let query = LogQuery {
                level,
                start_date: since.as_deref().map(parse_timestamp).transpose()?,
                end_date: until.as_deref().map(parse_timestamp).transpose()?,
            };
            if ai {
                output::print_ai_logs(&state.admin.ai_logs(&query).await?);
            } else {
                output::print_error_logs(&state.admin.error_logs(&query).await?);
            }
            Ok(())
        }
        AdminSubcommand::Backup => {
            state.guard.require(routes::ADMIN_BACKUPS).await?;
            let backup = state.admin.backup().await?;
            if let Some(file) = backup.file {
                println!("{file}");
            }
            Ok(())
        }
        AdminSubcommand::Restore { path } => {
            state.guard.require(routes::ADMIN_BACKUPS).await?;
            let bytes = read_file(&path).await?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            state
                .admin
                .restore(BackupFile { file_name, bytes })
                .await?;
            Ok(())
        }
        AdminSubcommand::Download { backup_id, out } => {
            state.guard.require(routes::ADMIN_BACKUPS).await?;
            let bytes = state.admin.download_backup(&backup_id).await?;
            let out = out.unwrap_or_else(|| backup_file_name(chrono::Utc::now().date_naive()).into());
            tokio::fs::write(&out, &bytes).await?;
            println!("{} ({} bytes)", out.display(), bytes.len());
            Ok(())
        }
        AdminSubcommand::Maintenance { action } => {
            state.guard.require(routes::ADMIN_DASHBOARD).await?;
            println!("{}", state.admin.maintenance(action).await?.message);
            Ok(())
        }
    }
}

// ============================================================================
// TERMINAL HELPERS
// ============================================================================

/// Walk the candidate through every question, reading option numbers from
/// stdin. `n` and `p` move between questions, an empty line finishes.
async fn take_interview(session: &mut InterviewSession) -> Result<(), CliError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        output::print_question_card(session);
        let Some(line) = lines.next_line().await? else {
            break;
        };
        match line.trim() {
            "" => break,
            "n" => {
                session.next();
            }
            "p" => {
                session.previous();
            }
            choice => {
                let choices = session.current_question().choices();
                let picked = choice
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| choices.get(i).cloned())
                    .unwrap_or_else(|| choice.to_string());
                match session.answer_current(&picked) {
                    Ok(()) => {
                        if !session.next() && session.unanswered().is_empty() {
                            break;
                        }
                    }
                    Err(e) => eprintln!("✗ {}", e.message()),
                }
            }
        }
    }
    debug!(unanswered = session.unanswered().len(), "Interview input finished");
    Ok(())
}

async fn prompt(label: &str) -> Result<String, CliError> {
    let mut stderr = tokio::io::stderr();
    stderr.write_all(label.as_bytes()).await?;
    stderr.flush().await?;

    let mut line = String::new();
    BufReader::new(tokio::io::stdin()).read_line(&mut line).await?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

async fn read_file(path: &Path) -> Result<Vec<u8>, CliError> {
    tokio::fs::read(path).await.map_err(|source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_timestamp(raw: &str) -> Result<chrono::DateTime<chrono::Utc>, CliError> {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&chrono::Utc))
        .map_err(|_| CliError::InvalidTimestamp(raw.to_string()))
}
