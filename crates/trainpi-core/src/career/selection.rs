//! Helpers for editing a learner's interest and skill selections.
//!
//! Selections compare case-insensitively, the same way the scoring engine
//! does, but keep the spelling the learner first entered.

use super::scoring::normalize_value;

/// True if `list` holds `value` ignoring case and surrounding whitespace.
pub fn contains_value<S: AsRef<str>>(list: &[S], value: &str) -> bool {
    let wanted = normalize_value(value);
    list.iter()
        .any(|item| normalize_value(item.as_ref()) == wanted)
}

/// Adds a trimmed value unless an equivalent entry already exists.
///
/// Returns `true` when the list grew. Blank values are ignored.
pub fn upsert_value(list: &mut Vec<String>, value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() || contains_value(list.as_slice(), trimmed) {
        return false;
    }
    list.push(trimmed.to_string());
    true
}

/// Builds a selection list from raw entries, dropping blanks and
/// case-insensitive repeats. The first spelling wins.
pub fn collect_selections<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    let mut list = Vec::with_capacity(values.len());
    for value in values {
        upsert_value(&mut list, value.as_ref());
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_skips_case_insensitive_duplicates() {
        let mut list = vec!["Data Analysis".to_string()];
        assert!(!upsert_value(&mut list, "  data analysis"));
        assert!(!upsert_value(&mut list, "   "));
        assert!(upsert_value(&mut list, " Design "));
        assert_eq!(list, vec!["Data Analysis", "Design"]);
    }

    #[test]
    fn test_collect_selections_folds_case() {
        let list = collect_selections(&["Design", " design ", "", "SEO", "seo", "Data"]);
        assert_eq!(list, vec!["Design", "SEO", "Data"]);
    }
}
