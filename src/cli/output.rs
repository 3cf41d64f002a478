// src/cli/output.rs
//! Plain-text rendering of API results for the terminal.

use recruit::admin::models::{AdminUser, AiLog, ErrorLog, SystemStats};
use recruit::ai::models::ResumeAnalysis;
use recruit::candidates::Application;
use recruit::interviews::models::InterviewResult;
use recruit::interviews::{Interview, InterviewSession, Question};
use recruit::jobs::Job;
use recruit::session::{Session, SessionUser};

pub fn print_session(session: &Session, credential_valid: bool) {
    match (&session.user, session.is_authenticated && credential_valid) {
        (Some(user), true) => {
            println!("🔒 Signed in");
            print_user(user);
        }
        _ => println!("🔓 Not signed in"),
    }
}

pub fn print_user(user: &SessionUser) {
    println!("   Email: {}", user.email);
    println!("   Role: {}", user.role);
    if let Some(name) = &user.full_name {
        println!("   Name: {name}");
    }
    if let Some(id) = &user.id {
        println!("   Id: {id}");
    }
}

pub fn print_jobs(jobs: &[Job]) {
    if jobs.is_empty() {
        println!("No jobs found");
        return;
    }
    for job in jobs {
        println!(
            "{:<26} {:<8} {:>4} applied  {}",
            job.id, job.status, job.total_applications, job.title
        );
    }
}

pub fn print_job(job: &Job) {
    println!("{} [{}]", job.title, job.status);
    println!("   Id: {}", job.id);
    if let Some(recruiter) = &job.recruiter_id {
        println!("   Recruiter: {recruiter}");
    }
    println!(
        "   Applications: {}  Interviews: {}",
        job.total_applications, job.total_interviews
    );
    if !job.requirements.is_empty() {
        println!("   Requirements:");
        for requirement in &job.requirements {
            println!("     - {requirement}");
        }
    }
    if !job.description.is_empty() {
        println!();
        println!("{}", job.description);
    }
}

pub fn print_applications(applications: &[Application]) {
    if applications.is_empty() {
        println!("No applications");
        return;
    }
    for application in applications {
        let title = application
            .job
            .as_ref()
            .map(|j| j.title.as_str())
            .unwrap_or(application.job_id.as_str());
        let who = application
            .candidate
            .as_ref()
            .map(|c| c.email.as_str())
            .unwrap_or_default();
        let score = application
            .ai_score
            .map(|s| format!("{s:.1}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<26} {:<9} {:>5}  {} {}",
            application.id, application.status, score, title, who
        );
    }
}

pub fn print_application(application: &Application) {
    print_applications(std::slice::from_ref(application));
    if let Some(summary) = &application.ai_summary {
        println!("   AI summary: {summary}");
    }
    if let Some(feedback) = &application.feedback {
        println!("   Feedback: {feedback}");
    }
    if let Some(letter) = &application.cover_letter {
        println!();
        println!("{letter}");
    }
}

pub fn print_interviews(interviews: &[Interview]) {
    if interviews.is_empty() {
        println!("No interviews");
        return;
    }
    for interview in interviews {
        let when = interview.scheduled_at.as_deref().unwrap_or("unscheduled");
        let score = interview
            .score
            .map(|s| format!("{s:.1}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<26} {:<11} {:>5}  {} ({} min)",
            interview.id, interview.status, score, when, interview.duration_minutes
        );
    }
}

pub fn print_questions(questions: &[Question]) {
    for (index, question) in questions.iter().enumerate() {
        println!("{}. {}", index + 1, question.text);
        for (n, option) in question.choices().iter().enumerate() {
            println!("   {}) {option}", n + 1);
        }
    }
}

pub fn print_question_card(session: &InterviewSession) {
    let question = session.current_question();
    println!();
    println!(
        "Question {} of {} ({}%)",
        session.current_index() + 1,
        session.questions().len(),
        session.progress_percent()
    );
    println!("{}", question.text);
    let chosen = session.answer_for(&question.id);
    for (n, option) in question.choices().iter().enumerate() {
        let mark = if chosen == Some(option.as_str()) { "●" } else { "○" };
        println!("  {mark} {}) {option}", n + 1);
    }
    eprint!("Answer number, n/p to move, empty line to submit: ");
}

pub fn print_interview_result(result: &InterviewResult) {
    println!("✓ Interview submitted");
    if let Some(score) = result.score {
        println!("   Score: {score:.1}");
    }
    if let Some(feedback) = &result.feedback {
        println!("   Feedback: {feedback}");
    }
}

pub fn print_resume_analysis(analysis: &ResumeAnalysis) {
    if let Some(score) = analysis.match_score.or(analysis.score) {
        println!("Match score: {score:.1}");
    }
    println!("{}", analysis.summary);
    if !analysis.raw_analysis.is_empty() {
        println!();
        println!("{}", analysis.raw_analysis);
    }
}

pub fn print_admin_users(users: &[AdminUser]) {
    for user in users {
        println!(
            "{:<26} {:<10} {:<6} {} {}",
            user.id,
            user.role,
            if user.is_active { "active" } else { "off" },
            user.email,
            user.full_name
        );
    }
}

pub fn print_stats(stats: &SystemStats) {
    println!("Users: {} ({} recruiters, {} candidates active)", stats.total_users, stats.active_recruiters, stats.active_candidates);
    println!("Jobs: {}", stats.total_jobs);
    println!("Applications: {}", stats.total_applications);
    println!("Interviews: {}", stats.total_interviews);
    for (label, counts) in [
        ("Jobs", &stats.jobs_by_status),
        ("Applications", &stats.applications_by_status),
        ("Interviews", &stats.interviews_by_status),
    ] {
        let mut entries: Vec<_> = counts.iter().collect();
        entries.sort();
        let line: Vec<String> = entries.iter().map(|(k, v)| format!("{k}={v}")).collect();
        println!("   {label} by status: {}", line.join(" "));
    }
}

pub fn print_error_logs(logs: &[ErrorLog]) {
    for log in logs {
        println!(
            "{} {:<7} {}",
            log.timestamp,
            log.level.as_deref().unwrap_or("-"),
            log.message
        );
    }
}

pub fn print_ai_logs(logs: &[AiLog]) {
    for log in logs {
        println!("{} {:<20} {}", log.timestamp, log.kind, log.input);
    }
}
