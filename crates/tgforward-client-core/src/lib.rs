//! Target-independent logic behind the forwarding dashboard page: chat list
//! validation, task status decoding, and the settings the web shell reads.

pub mod chat_ids;
pub mod config;
pub mod guards;
pub mod suggestions;
pub mod task_status;
pub mod toast;

pub use chat_ids::{
    ChatIdentifierKind, ChatValidationReport, FieldFeedback, classify_chat_identifier,
    clean_chat_lines, is_valid_chat_identifier, validate_chat_lines,
};
pub use config::{ConfigError, DashboardConfig, DashboardStrings, DashboardTimings, PageMarkers};
pub use guards::{SubmitDecision, confirmed_navigation, decide_submit};
pub use task_status::{
    TaskId, TaskStatusBatch, TaskStatusError, TaskStatusPresentation, TaskStatusSnapshot,
    decode_task_statuses, rows_to_patch,
};
pub use toast::ToastKind;
