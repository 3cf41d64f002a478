//! View paths and the roles that may open them

use crate::session::Role;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const JOBS: &str = "/jobs";

pub const CANDIDATE_DASHBOARD: &str = "/candidate";
pub const CANDIDATE_RESUME: &str = "/candidate/resume";
pub const CANDIDATE_APPLICATIONS: &str = "/candidate/applications";
pub const RECRUITER_DASHBOARD: &str = "/recruiter";
pub const RECRUITER_POST_JOB: &str = "/recruiter/post-job";
pub const RECRUITER_APPLICATIONS: &str = "/recruiter/applications";
pub const RECRUITER_INTERVIEWS: &str = "/recruiter/interviews";
pub const ADMIN_DASHBOARD: &str = "/admin";
pub const ADMIN_USERS: &str = "/admin/users";
pub const ADMIN_LOGS: &str = "/admin/logs";
pub const ADMIN_BACKUPS: &str = "/admin/backups";

/// Interview view for one job.
pub fn candidate_interview(job_id: &str) -> String {
    format!("/candidate/interview/{job_id}")
}

const PROTECTED_SECTIONS: [(&str, &[Role]); 3] = [
    ("candidate", &[Role::Candidate]),
    ("recruiter", &[Role::Recruiter]),
    ("admin", &[Role::Admin]),
];

/// Roles allowed to open `path`, or `None` for public views.
pub fn required_roles(path: &str) -> Option<&'static [Role]> {
    let first_segment = path
        .split('?')
        .next()
        .unwrap_or_default()
        .trim_start_matches('/')
        .split('/')
        .next()
        .unwrap_or_default();

    PROTECTED_SECTIONS
        .iter()
        .find(|(section, _)| *section == first_segment)
        .map(|(_, roles)| *roles)
}

pub fn is_login_view(path: &str) -> bool {
    path.contains(LOGIN)
}

/// Where a signed-in user lands when turned away from a view.
pub fn home_for(role: Option<Role>) -> String {
    role.map(|r| r.home_path()).unwrap_or_else(|| HOME.to_string())
}
