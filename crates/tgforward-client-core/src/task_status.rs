use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::DashboardStrings;

pub const PLAY_ICON_HTML: &str = "<i class=\"fas fa-play\"></i>";
pub const PAUSE_ICON_HTML: &str = "<i class=\"fas fa-pause\"></i>";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskStatusError {
    #[error("task status request failed: {0}")]
    Network(String),
    #[error("task status request failed with status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("failed to decode task statuses: {0}")]
    Decode(String),
}

/// Task ids arrive as integers from the dashboard API, but string ids are
/// accepted so the row lookup only ever compares attribute text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Numeric(i64),
    Text(String),
}

impl TaskId {
    pub fn matches_attribute(&self, attribute: &str) -> bool {
        match self {
            Self::Numeric(id) => attribute == id.to_string(),
            Self::Text(id) => attribute == id.as_str(),
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatusSnapshot {
    pub id: TaskId,
    #[serde(default, deserialize_with = "deserialize_active_flag")]
    pub is_active: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ActiveFlag {
    Bool(bool),
    Integer(i64),
}

// Some task stores hand back the raw 0/1 column instead of a boolean, and
// a null flag reads as inactive.
fn deserialize_active_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Option::<ActiveFlag>::deserialize(deserializer)? {
        Some(ActiveFlag::Bool(flag)) => flag,
        Some(ActiveFlag::Integer(value)) => value != 0,
        None => false,
    })
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// One decoded poll. Records that fail to decode are kept as messages so the
/// rest of the batch still reaches the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStatusBatch {
    pub tasks: Vec<TaskStatusSnapshot>,
    pub skipped: Vec<String>,
}

/// Decodes a `/api/tasks` response. Non-2xx responses carry the server's
/// `error` text when the body has one. A body that is not an array fails
/// the whole poll; a bad element only drops itself.
pub fn decode_task_statuses(status: u16, raw: &str) -> Result<TaskStatusBatch, TaskStatusError> {
    if !(200..=299).contains(&status) {
        let parsed: Option<ApiErrorBody> = serde_json::from_str(raw).ok();
        let message = parsed
            .and_then(|body| body.error.or(body.message))
            .unwrap_or_else(|| format!("request failed with status {status}"));
        return Err(TaskStatusError::Rejected { status, message });
    }
    let records: Vec<serde_json::Value> =
        serde_json::from_str(raw).map_err(|error| TaskStatusError::Decode(error.to_string()))?;

    let mut batch = TaskStatusBatch::default();
    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<TaskStatusSnapshot>(record) {
            Ok(task) => batch.tasks.push(task),
            Err(error) => batch.skipped.push(format!("task record {index}: {error}")),
        }
    }
    Ok(batch)
}

/// Pairs each task with the first row whose id attribute matches it, in task
/// order. `row_ids` holds each row's attribute, `None` when it has none.
/// Tasks with no row on the page are left out.
pub fn rows_to_patch<'a>(
    tasks: &'a [TaskStatusSnapshot],
    row_ids: &[Option<String>],
) -> Vec<(usize, &'a TaskStatusSnapshot)> {
    tasks
        .iter()
        .filter_map(|task| {
            row_ids
                .iter()
                .position(|row_id| {
                    row_id
                        .as_deref()
                        .is_some_and(|attribute| task.id.matches_attribute(attribute))
                })
                .map(|row| (row, task))
        })
        .collect()
}

/// Markup and attributes for one task row, derived from its active flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskStatusPresentation {
    pub badge_class: &'static str,
    pub badge_html: String,
    pub toggle_class: &'static str,
    pub toggle_title: String,
    pub toggle_html: &'static str,
}

impl TaskStatusPresentation {
    pub fn for_state(is_active: bool, strings: &DashboardStrings) -> Self {
        if is_active {
            Self {
                badge_class: "badge bg-success",
                badge_html: format!("{PLAY_ICON_HTML} {}", strings.task_active),
                toggle_class: "btn btn-sm btn-secondary",
                toggle_title: strings.pause_task.clone(),
                toggle_html: PAUSE_ICON_HTML,
            }
        } else {
            Self {
                badge_class: "badge bg-danger",
                badge_html: format!("{PAUSE_ICON_HTML} {}", strings.task_inactive),
                toggle_class: "btn btn-sm btn-success",
                toggle_title: strings.resume_task.clone(),
                toggle_html: PLAY_ICON_HTML,
            }
        }
    }
}

impl TaskStatusSnapshot {
    pub fn presentation(&self, strings: &DashboardStrings) -> TaskStatusPresentation {
        TaskStatusPresentation::for_state(self.is_active, strings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_numeric_and_string_ids_and_ignores_extra_fields() {
        let raw = json!([
            { "id": 7, "name": "news mirror", "is_active": true, "source_chats": ["@abcde"] },
            { "id": "legacy-3", "is_active": false }
        ])
        .to_string();
        let batch = decode_task_statuses(200, &raw).expect("valid payload");
        assert!(batch.skipped.is_empty());
        let tasks = batch.tasks;
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, TaskId::Numeric(7));
        assert!(tasks[0].is_active);
        assert_eq!(tasks[1].id, TaskId::Text("legacy-3".to_string()));
        assert!(!tasks[1].is_active);
    }

    #[test]
    fn integer_null_and_missing_active_flags() {
        let raw = json!([
            { "id": 1, "is_active": 1 },
            { "id": 2, "is_active": 0 },
            { "id": 3 },
            { "id": 4, "is_active": null }
        ])
        .to_string();
        let tasks = decode_task_statuses(200, &raw).expect("valid payload").tasks;
        assert_eq!(tasks.len(), 4);
        assert!(tasks[0].is_active);
        assert!(!tasks[1].is_active);
        assert!(!tasks[2].is_active);
        assert!(!tasks[3].is_active);
    }

    #[test]
    fn bad_records_are_skipped_without_losing_the_batch() {
        let raw = r#"[
            {"id":1,"is_active":true},
            {"id":2,"is_active":"yes"},
            {"id":18446744073709551615,"is_active":true},
            "not a task",
            {"id":5,"is_active":false}
        ]"#;
        let batch = decode_task_statuses(200, raw).expect("array body");
        let ids: Vec<_> = batch.tasks.iter().map(|task| task.id.clone()).collect();
        assert_eq!(ids, vec![TaskId::Numeric(1), TaskId::Numeric(5)]);
        assert!(batch.tasks[0].is_active);
        assert_eq!(batch.skipped.len(), 3);
        assert!(batch.skipped[0].starts_with("task record 1:"));
        assert!(batch.skipped[2].starts_with("task record 3:"));
    }

    #[test]
    fn unauthorized_body_surfaces_server_message() {
        let raw = json!({ "error": "غير مسموح" }).to_string();
        let error = decode_task_statuses(401, &raw).expect_err("expected rejection");
        assert_eq!(
            error,
            TaskStatusError::Rejected {
                status: 401,
                message: "غير مسموح".to_string()
            }
        );
    }

    #[test]
    fn non_array_success_body_is_a_decode_error() {
        let error = decode_task_statuses(200, "{\"tasks\":[]}").expect_err("expected error");
        assert!(matches!(error, TaskStatusError::Decode(_)));
        let error = decode_task_statuses(502, "<html>").expect_err("expected error");
        assert_eq!(
            error.to_string(),
            "task status request failed with status 502: request failed with status 502"
        );
    }

    #[test]
    fn row_attribute_matching_compares_text() {
        assert!(TaskId::Numeric(12).matches_attribute("12"));
        assert!(!TaskId::Numeric(12).matches_attribute(" 12 "));
        assert!(!TaskId::Numeric(12).matches_attribute("120"));
        assert!(!TaskId::Numeric(7).matches_attribute("+7"));
        assert!(!TaskId::Numeric(7).matches_attribute("07"));
        assert!(TaskId::Numeric(-4).matches_attribute("-4"));
        assert!(TaskId::Text("a\"b".to_string()).matches_attribute("a\"b"));
        assert_eq!(TaskId::Numeric(-4).to_string(), "-4");
    }

    #[test]
    fn active_task_shows_pause_affordance() {
        let strings = DashboardStrings::default();
        let presentation = TaskStatusPresentation::for_state(true, &strings);
        assert_eq!(presentation.badge_class, "badge bg-success");
        assert_eq!(presentation.badge_html, format!("{PLAY_ICON_HTML} نشط"));
        assert_eq!(presentation.toggle_class, "btn btn-sm btn-secondary");
        assert_eq!(presentation.toggle_title, "تعطيل");
        assert_eq!(presentation.toggle_html, PAUSE_ICON_HTML);
    }

    #[test]
    fn inactive_task_shows_play_affordance() {
        let strings = DashboardStrings::default();
        let snapshot = TaskStatusSnapshot {
            id: TaskId::Numeric(1),
            is_active: false,
        };
        let presentation = snapshot.presentation(&strings);
        assert_eq!(presentation.badge_class, "badge bg-danger");
        assert_eq!(presentation.badge_html, format!("{PAUSE_ICON_HTML} معطل"));
        assert_eq!(presentation.toggle_class, "btn btn-sm btn-success");
        assert_eq!(presentation.toggle_title, "تفعيل");
        assert_eq!(presentation.toggle_html, PLAY_ICON_HTML);
    }

    fn snapshot(id: i64, is_active: bool) -> TaskStatusSnapshot {
        TaskStatusSnapshot {
            id: TaskId::Numeric(id),
            is_active,
        }
    }

    fn row_ids(ids: &[Option<&str>]) -> Vec<Option<String>> {
        ids.iter().map(|id| id.map(str::to_string)).collect()
    }

    #[test]
    fn unknown_task_ids_patch_nothing() {
        let tasks = vec![snapshot(99, true)];
        let rows = row_ids(&[Some("1"), None, Some("2")]);
        assert!(rows_to_patch(&tasks, &rows).is_empty());
        assert!(rows_to_patch(&tasks, &[]).is_empty());
    }

    #[test]
    fn known_tasks_pair_with_their_rows() {
        let tasks = vec![snapshot(2, false), snapshot(40, true), snapshot(1, true)];
        let rows = row_ids(&[Some("1"), None, Some("2")]);
        let plan = rows_to_patch(&tasks, &rows);
        assert_eq!(plan, vec![(2, &tasks[0]), (0, &tasks[2])]);
    }

    #[test]
    fn task_listed_twice_patches_its_row_twice_in_order() {
        let tasks = vec![snapshot(3, true), snapshot(3, false)];
        let rows = row_ids(&[Some("3"), Some("3")]);
        let plan = rows_to_patch(&tasks, &rows);
        assert_eq!(plan, vec![(0, &tasks[0]), (0, &tasks[1])]);
        assert!(!plan[plan.len() - 1].1.is_active);
    }
}
