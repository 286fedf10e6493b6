use serde::{Deserialize, Serialize};

pub const TOAST_CLASS: &str = "toast-notification";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    Success,
    #[default]
    Info,
    Warning,
    Error,
}

impl ToastKind {
    /// Unknown names fall back to `Info`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" | "danger" => Self::Error,
            _ => Self::Info,
        }
    }

    pub fn alert_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Info => "alert-info",
            Self::Warning => "alert-warning",
            Self::Error => "alert-danger",
        }
    }

    pub fn class_name(self) -> String {
        format!("alert {} {TOAST_CLASS}", self.alert_class())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_maps_to_danger_alert() {
        assert_eq!(ToastKind::parse("error").alert_class(), "alert-danger");
        assert_eq!(
            ToastKind::Error.class_name(),
            "alert alert-danger toast-notification"
        );
    }

    #[test]
    fn unknown_kind_is_info() {
        assert_eq!(ToastKind::parse(""), ToastKind::Info);
        assert_eq!(ToastKind::parse("primary"), ToastKind::Info);
        assert_eq!(ToastKind::parse(" Success "), ToastKind::Success);
    }
}
