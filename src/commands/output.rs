//! @acp:module "Command Output"
//! @acp:summary "Styled user notifications on stderr"
//! @acp:domain cli
//! @acp:layer output
//!
//! Notifications go to stderr so stdout carries only the generated brief.

use console::style;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// Format a notification line with its status glyph
pub fn format_notice(kind: NoticeKind, message: &str) -> String {
    match kind {
        NoticeKind::Info => format!("{} {}", style("→").cyan(), message),
        NoticeKind::Success => format!("{} {}", style("✓").green(), message),
        NoticeKind::Error => format!("{} {}", style("✗").red(), message),
    }
}

pub fn notify(kind: NoticeKind, message: &str) {
    eprintln!("{}", format_notice(kind, message));
}

pub fn info(message: &str) {
    notify(NoticeKind::Info, message);
}

pub fn success(message: &str) {
    notify(NoticeKind::Success, message);
}

pub fn error(message: &str) {
    notify(NoticeKind::Error, message);
}
