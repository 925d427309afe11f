//! Raw text cleanup applied to every extracted field value.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Everything outside word chars, whitespace and basic punctuation
    // that survives in field values (@ . , / -).
    static ref DISALLOWED: Regex = Regex::new(r"[^\w\s@.,/-]").unwrap();
}

/// Strip special characters and collapse excess spacing.
///
/// Disallowed characters are deleted (not replaced), runs of whitespace
/// become a single space and the result is trimmed. Total over any
/// input; cleaning an already-clean string returns it unchanged.
pub fn clean_text(text: &str) -> String {
    let stripped = DISALLOWED.replace_all(text, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strips_special_characters() {
        assert_eq!(clean_text("Acme! Corp? (West)"), "Acme Corp West");
        assert_eq!(clean_text("$1,299.00"), "1,299.00");
    }

    #[test]
    fn test_keeps_field_punctuation() {
        assert_eq!(clean_text("jane.doe@example.com"), "jane.doe@example.com");
        assert_eq!(clean_text("03/15/2024"), "03/15/2024");
        assert_eq!(clean_text("QT-1001"), "QT-1001");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(clean_text("  Acme   Corp \n Inc  "), "Acme Corp Inc");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   \n\t "), "");
    }

    #[test]
    fn test_idempotent() {
        let once = clean_text("  Quote #: QT-1001 (final!) ");
        assert_eq!(clean_text(&once), once);
    }
}
