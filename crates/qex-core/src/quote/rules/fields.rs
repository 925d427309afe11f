//! Ordered-fallback field extraction.

use regex::Regex;

use super::text::clean_text;

/// Find the first rule match in an ordered rule list.
///
/// Rules are tried in order and the first match wins. A rule with a
/// capture group yields the cleaned content of group 1; a bare rule
/// yields the cleaned full match. Quote documents label the same value
/// in many ways ("Quote #", "Quote Number", a bare `QT123456` token),
/// so resilience comes from progressively looser rules rather than one
/// rigid grammar.
pub fn find_field(text: &str, rules: &[Regex]) -> Option<String> {
    for rule in rules {
        if let Some(caps) = rule.captures(text) {
            let matched = caps
                .get(1)
                .unwrap_or_else(|| caps.get(0).unwrap())
                .as_str();
            return Some(clean_text(matched));
        }
    }
    None
}

/// Extract one field, falling back to `default` when no rule matches.
///
/// The default is returned verbatim - defaults are already canonical
/// and never go through cleanup.
pub fn extract_field(text: &str, rules: &[Regex], default: &str) -> String {
    find_field(text, rules).unwrap_or_else(|| default.to_string())
}

/// Compile one extraction rule.
///
/// All schema rules are case-insensitive and multi-line, matching the
/// way quote PDFs mix labeling case and spread values across lines.
pub fn rule(pattern: &str) -> Regex {
    regex::RegexBuilder::new(pattern)
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_match_wins() {
        let rules = vec![
            rule(r"Quote\s*#?[:\s]+([A-Z0-9-]+)"),
            rule(r"Quote\s*Number[:\s]+([A-Z0-9-]+)"),
        ];
        assert_eq!(
            extract_field("Quote #: QT987654\nQuote Number: OTHER", &rules, ""),
            "QT987654"
        );
    }

    #[test]
    fn test_fallback_to_later_rule() {
        let rules = vec![
            rule(r"Quote\s*Number[:\s]+([A-Z0-9-]+)"),
            rule(r"QT[0-9]+"),
        ];
        // No label at all; the bare token rule has no capture group so
        // the full match is returned.
        assert_eq!(extract_field("ref QT123456 attached", &rules, ""), "QT123456");
    }

    #[test]
    fn test_case_insensitive() {
        let rules = vec![rule(r"Company[:\s]+([^\n]+)")];
        assert_eq!(
            extract_field("COMPANY: Acme Corp\n", &rules, ""),
            "Acme Corp"
        );
    }

    #[test]
    fn test_captured_value_is_cleaned() {
        let rules = vec![rule(r"Company[:\s]+([^\n]+)")];
        assert_eq!(
            extract_field("Company: Acme  Corp   (HQ)!\n", &rules, ""),
            "Acme Corp HQ"
        );
    }

    #[test]
    fn test_default_returned_verbatim() {
        let rules = vec![rule(r"Country[:\s]+([^\n]+)")];
        // The default bypasses cleanup entirely.
        assert_eq!(extract_field("no match here", &rules, "USA"), "USA");
        assert_eq!(extract_field("no match here", &rules, ""), "");
    }
}
