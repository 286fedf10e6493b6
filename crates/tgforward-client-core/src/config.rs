use serde::{Deserialize, Serialize};

pub const DEFAULT_STATUS_ENDPOINT: &str = "/api/tasks";
pub const DEFAULT_ALERT_HIDE_MS: u32 = 5_000;
pub const DEFAULT_SUBMIT_REENABLE_MS: u32 = 3_000;
pub const DEFAULT_PASTE_CLEANUP_DELAY_MS: u32 = 10;
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 30_000;
pub const DEFAULT_TOAST_DISMISS_MS: u32 = 3_000;
pub const DEFAULT_SUGGESTION_BLUR_DELAY_MS: u32 = 200;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("dashboard config override is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("status endpoint must not be empty")]
    EmptyStatusEndpoint,
}

/// Everything the page behaviors read at startup. Every field has a default,
/// so an override only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub status_endpoint: String,
    pub timings: DashboardTimings,
    pub markers: PageMarkers,
    pub strings: DashboardStrings,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            status_endpoint: DEFAULT_STATUS_ENDPOINT.to_string(),
            timings: DashboardTimings::default(),
            markers: PageMarkers::default(),
            strings: DashboardStrings::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|error| ConfigError::InvalidJson(error.to_string()))?;
        config.normalized()
    }

    /// Trims the endpoint and clamps timings that would otherwise spin.
    pub fn normalized(mut self) -> Result<Self, ConfigError> {
        let endpoint = self.status_endpoint.trim();
        if endpoint.is_empty() {
            return Err(ConfigError::EmptyStatusEndpoint);
        }
        self.status_endpoint = endpoint.to_string();
        self.timings = self.timings.clamped();
        Ok(self)
    }
}

/// Delays in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardTimings {
    pub alert_hide_ms: u32,
    pub submit_reenable_ms: u32,
    pub paste_cleanup_delay_ms: u32,
    pub poll_interval_ms: u32,
    pub toast_dismiss_ms: u32,
    pub suggestion_blur_delay_ms: u32,
}

impl Default for DashboardTimings {
    fn default() -> Self {
        Self {
            alert_hide_ms: DEFAULT_ALERT_HIDE_MS,
            submit_reenable_ms: DEFAULT_SUBMIT_REENABLE_MS,
            paste_cleanup_delay_ms: DEFAULT_PASTE_CLEANUP_DELAY_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            toast_dismiss_ms: DEFAULT_TOAST_DISMISS_MS,
            suggestion_blur_delay_ms: DEFAULT_SUGGESTION_BLUR_DELAY_MS,
        }
    }
}

impl DashboardTimings {
    fn clamped(self) -> Self {
        Self {
            alert_hide_ms: self.alert_hide_ms.max(1),
            submit_reenable_ms: self.submit_reenable_ms.max(1),
            paste_cleanup_delay_ms: self.paste_cleanup_delay_ms.max(1),
            poll_interval_ms: if self.poll_interval_ms == 0 {
                DEFAULT_POLL_INTERVAL_MS
            } else {
                self.poll_interval_ms
            },
            toast_dismiss_ms: self.toast_dismiss_ms.max(1),
            suggestion_blur_delay_ms: self.suggestion_blur_delay_ms.max(1),
        }
    }
}

/// Selectors and attribute names the server-rendered templates expose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMarkers {
    pub tooltip_selector: String,
    pub alert_selector: String,
    pub error_alert_class: String,
    pub form_selector: String,
    pub submit_button_selector: String,
    pub chat_field_selectors: Vec<String>,
    pub confirm_link_selectors: Vec<String>,
    pub task_table_selector: String,
    pub task_row_selector: String,
    pub task_id_attribute: String,
    pub status_badge_selector: String,
    pub toggle_link_selector: String,
}

impl Default for PageMarkers {
    fn default() -> Self {
        Self {
            tooltip_selector: "[data-bs-toggle=\"tooltip\"]".to_string(),
            alert_selector: ".alert".to_string(),
            error_alert_class: "alert-danger".to_string(),
            form_selector: "form".to_string(),
            submit_button_selector: "button[type=\"submit\"]".to_string(),
            chat_field_selectors: vec![
                "textarea[name=\"source_chats\"]".to_string(),
                "textarea[name=\"target_chats\"]".to_string(),
            ],
            confirm_link_selectors: vec![
                "a[data-confirm]".to_string(),
                "a[onclick*=\"confirm\"]".to_string(),
            ],
            task_table_selector: ".table".to_string(),
            task_row_selector: "tr[data-task-id]".to_string(),
            task_id_attribute: "data-task-id".to_string(),
            status_badge_selector: ".badge".to_string(),
            toggle_link_selector: "a[href*=\"toggle_task\"]".to_string(),
        }
    }
}

impl PageMarkers {
    pub fn chat_field_selector(&self) -> String {
        self.chat_field_selectors.join(", ")
    }

    pub fn confirm_link_selector(&self) -> String {
        self.confirm_link_selectors.join(", ")
    }
}

/// Localized UI text. Templates use `{lines}` and `{count}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStrings {
    pub busy_label: String,
    pub invalid_lines_template: String,
    pub validated_count_template: String,
    pub confirm_destructive: String,
    pub task_active: String,
    pub task_inactive: String,
    pub pause_task: String,
    pub resume_task: String,
    pub copy_succeeded: String,
    pub copy_failed: String,
    pub suggestion_channel: String,
    pub suggestion_phone: String,
    pub suggestion_group: String,
}

impl Default for DashboardStrings {
    fn default() -> Self {
        Self {
            busy_label: "جاري المعالجة...".to_string(),
            invalid_lines_template: "أسطر غير صحيحة: {lines}".to_string(),
            validated_count_template: "تم التحقق من {count} محادثة".to_string(),
            confirm_destructive: "هل أنت متأكد من هذا الإجراء؟ لا يمكن التراجع عنه.".to_string(),
            task_active: "نشط".to_string(),
            task_inactive: "معطل".to_string(),
            pause_task: "تعطيل".to_string(),
            resume_task: "تفعيل".to_string(),
            copy_succeeded: "تم النسخ إلى الحافظة".to_string(),
            copy_failed: "فشل في النسخ".to_string(),
            suggestion_channel: "قناة عامة".to_string(),
            suggestion_phone: "رقم هاتف".to_string(),
            suggestion_group: "معرف مجموعة".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_override_keeps_defaults() {
        let config = DashboardConfig::from_json("{}").expect("valid config");
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.timings.poll_interval_ms, 30_000);
        assert_eq!(config.timings.submit_reenable_ms, 3_000);
        assert_eq!(config.timings.paste_cleanup_delay_ms, 10);
    }

    #[test]
    fn partial_override_merges_nested_sections() {
        let config = DashboardConfig::from_json(
            r#"{
                "status_endpoint": " /dashboard/api/tasks ",
                "timings": { "poll_interval_ms": 5000 },
                "strings": { "task_active": "Active" }
            }"#,
        )
        .expect("valid config");
        assert_eq!(config.status_endpoint, "/dashboard/api/tasks");
        assert_eq!(config.timings.poll_interval_ms, 5_000);
        assert_eq!(config.timings.alert_hide_ms, DEFAULT_ALERT_HIDE_MS);
        assert_eq!(config.strings.task_active, "Active");
        assert_eq!(config.strings.task_inactive, "معطل");
    }

    #[test]
    fn zero_timings_are_clamped() {
        let config = DashboardConfig::from_json(
            r#"{ "timings": { "poll_interval_ms": 0, "paste_cleanup_delay_ms": 0 } }"#,
        )
        .expect("valid config");
        assert_eq!(config.timings.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
        assert_eq!(config.timings.paste_cleanup_delay_ms, 1);
    }

    #[test]
    fn rejects_malformed_and_empty_endpoint() {
        let error = DashboardConfig::from_json("{not json").expect_err("expected error");
        assert!(matches!(error, ConfigError::InvalidJson(_)));

        let error =
            DashboardConfig::from_json(r#"{ "status_endpoint": "  " }"#).expect_err("expected error");
        assert_eq!(error, ConfigError::EmptyStatusEndpoint);
    }

    #[test]
    fn joined_selectors_cover_both_chat_fields() {
        let markers = PageMarkers::default();
        assert_eq!(
            markers.chat_field_selector(),
            "textarea[name=\"source_chats\"], textarea[name=\"target_chats\"]"
        );
        assert!(markers.confirm_link_selector().contains("onclick*=\"confirm\""));
    }
}
