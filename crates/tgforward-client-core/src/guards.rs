use crate::config::{DashboardStrings, DashboardTimings};

pub const VALIDATED_FORM_CLASS: &str = "was-validated";
pub const SPINNER_ICON_HTML: &str = "<i class=\"fas fa-spinner fa-spin\"></i>";

/// What a guarded form does with one submit event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Constraint validation failed; the event is cancelled.
    Blocked,
    /// The submit button shows `busy_html` until `restore_after_ms` elapses.
    Busy {
        busy_html: String,
        restore_after_ms: u32,
    },
}

pub fn decide_submit(
    form_is_valid: bool,
    strings: &DashboardStrings,
    timings: &DashboardTimings,
) -> SubmitDecision {
    if form_is_valid {
        SubmitDecision::Busy {
            busy_html: format!("{SPINNER_ICON_HTML} {}", strings.busy_label),
            restore_after_ms: timings.submit_reenable_ms,
        }
    } else {
        SubmitDecision::Blocked
    }
}

/// Target to navigate to after the confirmation prompt closes. Declined
/// prompts and links without a target go nowhere.
pub fn confirmed_navigation(accepted: bool, href: &str) -> Option<&str> {
    let href = href.trim();
    if accepted && !href.is_empty() {
        Some(href)
    } else {
        None
    }
}
