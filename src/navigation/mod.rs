//! # Navigation Module
//!
//! Views, redirects and user-facing messages:
//! - `routes`: view paths and which roles may open them
//! - `navigator`: current-view tracking
//! - `notifier`: toasts and inline form errors
//! - `guard`: the role-based route guard

pub mod guard;
pub mod navigator;
pub mod notifier;
pub mod routes;

#[cfg(test)]
mod tests;

pub use guard::{GuardDecision, RouteGuard};
pub use navigator::{MemoryNavigator, Navigator};
pub use notifier::{MemoryNotifier, Notice, NoticeKind, Notifier, Severity, TerminalNotifier};
