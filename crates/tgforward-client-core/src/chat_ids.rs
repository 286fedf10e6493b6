use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::config::DashboardStrings;

/// Accepted shapes for one line of a chat list field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatIdentifierKind {
    Username,
    PhoneNumber,
    ChatId,
    TelegramUrl,
}

impl ChatIdentifierKind {
    pub const ALL: [Self; 4] = [
        Self::Username,
        Self::PhoneNumber,
        Self::ChatId,
        Self::TelegramUrl,
    ];

    fn pattern(self) -> &'static str {
        match self {
            Self::Username => r"^@[A-Za-z][A-Za-z0-9_]{4,31}$",
            Self::PhoneNumber => r"^\+?[0-9]{10,15}$",
            Self::ChatId => r"^-?[0-9]+$",
            Self::TelegramUrl => r"^https?://t\.me/[A-Za-z0-9_]+$",
        }
    }
}

fn identifier_patterns() -> &'static [(ChatIdentifierKind, Regex)] {
    static PATTERNS: OnceLock<Vec<(ChatIdentifierKind, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        ChatIdentifierKind::ALL
            .iter()
            .filter_map(|kind| Regex::new(kind.pattern()).ok().map(|regex| (*kind, regex)))
            .collect()
    })
}

/// Classifies a single line. Surrounding whitespace is ignored; blank lines
/// are never an identifier.
pub fn classify_chat_identifier(line: &str) -> Option<ChatIdentifierKind> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    identifier_patterns()
        .iter()
        .find(|(_, regex)| regex.is_match(trimmed))
        .map(|(kind, _)| *kind)
}

pub fn is_valid_chat_identifier(line: &str) -> bool {
    classify_chat_identifier(line).is_some()
}

/// Result of validating the full value of a chat list field.
///
/// Line numbers are 1-based and count non-empty lines only, which is what the
/// user sees once blank lines are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChatValidationReport {
    pub checked_lines: usize,
    pub invalid_lines: Vec<usize>,
}

impl ChatValidationReport {
    pub fn is_empty(&self) -> bool {
        self.checked_lines == 0
    }

    pub fn has_invalid_lines(&self) -> bool {
        !self.invalid_lines.is_empty()
    }

    pub fn feedback(&self, strings: &DashboardStrings) -> FieldFeedback {
        if self.has_invalid_lines() {
            let lines = self
                .invalid_lines
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            FieldFeedback::Invalid {
                message: strings.invalid_lines_template.replace("{lines}", &lines),
            }
        } else if self.is_empty() {
            FieldFeedback::Cleared
        } else {
            FieldFeedback::Valid {
                message: strings
                    .validated_count_template
                    .replace("{count}", &self.checked_lines.to_string()),
            }
        }
    }
}

pub fn validate_chat_lines(value: &str) -> ChatValidationReport {
    let mut report = ChatValidationReport::default();
    for line in value.split('\n').map(str::trim).filter(|line| !line.is_empty()) {
        report.checked_lines += 1;
        if !is_valid_chat_identifier(line) {
            report.invalid_lines.push(report.checked_lines);
        }
    }
    report
}

/// Visual state applied to a chat list field and its feedback element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FieldFeedback {
    Invalid { message: String },
    Valid { message: String },
    Cleared,
}

impl FieldFeedback {
    pub const INVALID_CLASS: &'static str = "is-invalid";
    pub const VALID_CLASS: &'static str = "is-valid";

    pub fn class_to_add(&self) -> Option<&'static str> {
        match self {
            Self::Invalid { .. } => Some(Self::INVALID_CLASS),
            Self::Valid { .. } => Some(Self::VALID_CLASS),
            Self::Cleared => None,
        }
    }

    pub fn classes_to_remove(&self) -> &'static [&'static str] {
        match self {
            Self::Invalid { .. } => &[Self::VALID_CLASS],
            Self::Valid { .. } => &[Self::INVALID_CLASS],
            Self::Cleared => &[Self::INVALID_CLASS, Self::VALID_CLASS],
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Invalid { message } | Self::Valid { message } => message,
            Self::Cleared => "",
        }
    }
}

/// Trims every line, drops blanks and case-insensitive repeats. The first
/// spelling of a repeated identifier is the one kept.
pub fn clean_chat_lines(value: &str) -> String {
    let mut seen = HashSet::new();
    value
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(line.to_lowercase()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_compiles() {
        assert_eq!(identifier_patterns().len(), ChatIdentifierKind::ALL.len());
    }

    #[test]
    fn classifies_each_identifier_shape() {
        assert_eq!(
            classify_chat_identifier("@abcde"),
            Some(ChatIdentifierKind::Username)
        );
        assert_eq!(
            classify_chat_identifier("+201234567890"),
            Some(ChatIdentifierKind::PhoneNumber)
        );
        assert_eq!(
            classify_chat_identifier("-1001234567890"),
            Some(ChatIdentifierKind::ChatId)
        );
        assert_eq!(
            classify_chat_identifier("https://t.me/examplechannel"),
            Some(ChatIdentifierKind::TelegramUrl)
        );
        assert_eq!(
            classify_chat_identifier("http://t.me/some_group"),
            Some(ChatIdentifierKind::TelegramUrl)
        );
    }

    #[test]
    fn username_length_bounds() {
        assert!(!is_valid_chat_identifier("@ab"));
        assert!(!is_valid_chat_identifier("@abcd"));
        assert!(is_valid_chat_identifier(&format!("@a{}", "b".repeat(31))));
        assert!(!is_valid_chat_identifier(&format!("@a{}", "b".repeat(32))));
        assert!(!is_valid_chat_identifier("@1abcde"));
    }

    #[test]
    fn rejects_lookalikes() {
        for line in [
            "abcde",
            "@abc de",
            "+12345",
            "+١٢٣٤٥٦٧٨٩٠١",
            "--100",
            "https://t.me/",
            "https://telegram.me/channel",
            "ftp://t.me/channel",
        ] {
            assert!(!is_valid_chat_identifier(line), "{line} should be invalid");
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(is_valid_chat_identifier("  @abcde\r"));
        assert_eq!(classify_chat_identifier("   "), None);
    }

    #[test]
    fn all_valid_lines_report_exact_count() {
        let strings = DashboardStrings::default();
        let report = validate_chat_lines(
            "@abcde\n\n+201234567890\n   \n-1001234567890\nhttps://t.me/examplechannel\n",
        );
        assert_eq!(report.checked_lines, 4);
        assert!(report.invalid_lines.is_empty());
        assert_eq!(
            report.feedback(&strings),
            FieldFeedback::Valid {
                message: "تم التحقق من 4 محادثة".to_string()
            }
        );
    }

    #[test]
    fn invalid_line_numbers_skip_blank_lines() {
        let strings = DashboardStrings::default();
        let report = validate_chat_lines("@ab\n\n@abcde\nnot a chat\n\n12345");
        assert_eq!(report.checked_lines, 4);
        assert_eq!(report.invalid_lines, vec![1, 3]);
        let feedback = report.feedback(&strings);
        assert_eq!(feedback.message(), "أسطر غير صحيحة: 1, 3");
        assert_eq!(feedback.class_to_add(), Some(FieldFeedback::INVALID_CLASS));
        assert_eq!(feedback.classes_to_remove(), &[FieldFeedback::VALID_CLASS]);
    }

    #[test]
    fn blank_value_clears_feedback() {
        let feedback = validate_chat_lines(" \n\n\t").feedback(&DashboardStrings::default());
        assert_eq!(feedback, FieldFeedback::Cleared);
        assert_eq!(feedback.message(), "");
        assert_eq!(feedback.class_to_add(), None);
        assert_eq!(feedback.classes_to_remove().len(), 2);
    }

    #[test]
    fn cleanup_keeps_first_spelling_and_order() {
        assert_eq!(
            clean_chat_lines("@abcde\n@ABCDE\n@fghij"),
            "@abcde\n@fghij"
        );
        assert_eq!(
            clean_chat_lines("  -100123 \n\n@Zeta_chat\n-100123\n@zeta_CHAT\n@alpha1"),
            "-100123\n@Zeta_chat\n@alpha1"
        );
    }

    #[test]
    fn cleanup_keeps_invalid_lines() {
        assert_eq!(clean_chat_lines("@ab\n@ab\nhello"), "@ab\nhello");
    }

    #[test]
    fn cleanup_is_idempotent() {
        let input = "\n @One_chat\n+201234567890\n@one_chat\n\nhttps://t.me/x_y\n+201234567890 ";
        let once = clean_chat_lines(input);
        assert_eq!(clean_chat_lines(&once), once);
    }

    #[test]
    fn cleanup_of_blank_value_is_empty() {
        assert_eq!(clean_chat_lines("\n  \n"), "");
    }
}
