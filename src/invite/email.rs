use regex::Regex;
use std::sync::OnceLock;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("Email is required")]
    Required,
    #[error("Invalid email format")]
    InvalidFormat,
}

fn email_regex() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

/// Checks a single address as typed; no trimming is applied.
pub fn validate_email(email: &str) -> Result<(), EmailError> {
    if email.is_empty() {
        return Err(EmailError::Required);
    }
    match email_regex() {
        Some(pattern) if pattern.is_match(email) => Ok(()),
        _ => Err(EmailError::InvalidFormat),
    }
}

/// Splits a recipient list on commas or semicolons, dropping blanks.
pub fn parse_recipient_list(raw: &str) -> Vec<String> {
    raw.split([',', ';'])
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_email_reports_required_and_format_errors() {
        assert_eq!(validate_email("a@b.com"), Ok(()));
        assert_eq!(validate_email("bad"), Err(EmailError::InvalidFormat));
        assert_eq!(validate_email(""), Err(EmailError::Required));
        assert_eq!(validate_email("two words@b.com"), Err(EmailError::InvalidFormat));
        assert_eq!(validate_email("a@b"), Err(EmailError::InvalidFormat));
    }

    #[test]
    fn error_messages_match_form_copy() {
        assert_eq!(EmailError::Required.to_string(), "Email is required");
        assert_eq!(EmailError::InvalidFormat.to_string(), "Invalid email format");
    }

    #[test]
    fn parse_recipient_list_trims_and_filters_empty() {
        assert_eq!(
            parse_recipient_list(" a@b.com, ,c@d.io "),
            vec!["a@b.com".to_string(), "c@d.io".to_string()]
        );
    }
}
