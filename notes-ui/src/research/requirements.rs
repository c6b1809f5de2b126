/// Longest suggested save title, in characters, before the ellipsis.
pub const TITLE_SUGGESTION_CHARS: usize = 50;

/// Trimmed, non-blank requirement texts in input order.
pub fn collect_requirements<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .map(|text| text.as_ref().trim())
        .filter(|text| !text.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Title offered by the save dialog: the first requirement, shortened.
pub fn suggested_title(requirements: &[String]) -> Option<String> {
    let first = requirements.first()?;

    let mut chars = first.chars();
    let head: String = chars.by_ref().take(TITLE_SUGGESTION_CHARS).collect();
    if chars.next().is_some() {
        Some(format!("{head}..."))
    } else {
        Some(head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blanks_are_dropped_and_order_kept() {
        let raw = ["  first ", "", "   ", "\tsecond\n", "third"];
        assert_eq!(
            collect_requirements(&raw[..]),
            vec!["first".to_string(), "second".to_string(), "third".to_string()]
        );
    }

    #[test]
    fn all_blank_collects_nothing() {
        let raw = [" ", "\n\t", ""];
        assert!(collect_requirements(&raw[..]).is_empty());
    }

    #[test]
    fn short_title_is_unchanged() {
        let requirements = vec!["History of the printing press".to_string()];
        assert_eq!(
            suggested_title(&requirements).as_deref(),
            Some("History of the printing press")
        );
    }

    #[test]
    fn long_title_is_truncated_with_ellipsis() {
        let requirements = vec!["x".repeat(51), "ignored".to_string()];
        let title = suggested_title(&requirements).unwrap();
        assert_eq!(title, format!("{}...", "x".repeat(50)));

        let exact = vec!["y".repeat(50)];
        assert_eq!(suggested_title(&exact).unwrap(), "y".repeat(50));
    }

    #[test]
    fn truncation_counts_characters() {
        let requirements = vec!["é".repeat(60)];
        let title = suggested_title(&requirements).unwrap();
        assert_eq!(title.chars().count(), 53);
        assert!(title.ends_with("..."));
    }

    #[test]
    fn no_requirements_no_title() {
        assert_eq!(suggested_title(&[]), None);
    }
}
