// web_app/filters/text.rs - String matching shared by every filter
//
// Record fields arrive as optional comma-separated strings. An absent
// field is simply "no tokens" and never matches anything.

/// Lowercased, trimmed form of user input. Empty means "match all".
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Case-insensitive substring test over an optional field.
///
/// `needle` must already be lowercased (see [`normalize_query`]).
pub fn field_contains(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(needle))
}

/// Split a comma-separated list into trimmed, non-empty tokens
pub fn tokens(field: Option<&str>) -> impl Iterator<Item = &str> {
    field
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// True if any token of the list contains `term` (case-insensitive)
pub fn list_contains(field: Option<&str>, term: &str) -> bool {
    let term = normalize_query(term);
    if term.is_empty() {
        return false;
    }
    tokens(field).any(|token| token.to_lowercase().contains(&term))
}

/// Every term must appear in the list. Blank terms impose nothing.
pub fn list_contains_all(field: Option<&str>, terms: &[String]) -> bool {
    non_blank(terms).all(|term| list_contains(field, term))
}

/// No term may appear in the list. Blank terms impose nothing.
pub fn list_contains_none(field: Option<&str>, terms: &[String]) -> bool {
    !non_blank(terms).any(|term| list_contains(field, term))
}

fn non_blank(terms: &[String]) -> impl Iterator<Item = &String> {
    terms.iter().filter(|term| !term.trim().is_empty())
}

/// Ordering used for "alphabetical" sorts: case-folded first, raw bytes as tiebreak
pub fn alphabetical(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_trim_and_skip_empty() {
        let collected: Vec<&str> = tokens(Some(" woody ,fresh,, ,citrus ")).collect();
        assert_eq!(collected, vec!["woody", "fresh", "citrus"]);
        assert_eq!(tokens(None).count(), 0);
    }

    #[test]
    fn test_list_contains_is_substring_and_case_insensitive() {
        assert!(list_contains(Some("Woody, Fresh Spicy"), "spicy"));
        assert!(list_contains(Some("woody"), "WOOD"));
        assert!(!list_contains(Some("floral"), "woody"));
        assert!(!list_contains(None, "woody"));
        assert!(!list_contains(Some("woody"), "  "));
    }

    #[test]
    fn test_all_and_none() {
        let field = Some("woody, fresh");
        let both = vec!["woody".to_string(), "fresh".to_string()];
        let mixed = vec!["woody".to_string(), "sweet".to_string()];
        assert!(list_contains_all(field, &both));
        assert!(!list_contains_all(field, &mixed));
        assert!(list_contains_all(None, &[]));
        assert!(list_contains_none(field, &["sweet".to_string()]));
        assert!(!list_contains_none(field, &mixed));
    }

    #[test]
    fn test_blank_terms_impose_nothing() {
        let blank = vec![String::new(), "  ".to_string()];
        assert!(list_contains_all(Some("woody"), &blank));
        assert!(list_contains_all(None, &blank));
        assert!(list_contains_none(Some("woody"), &blank));

        let padded = vec!["woody".to_string(), String::new()];
        assert!(list_contains_all(Some("woody, fresh"), &padded));
        assert!(!list_contains_all(Some("floral"), &padded));
    }

    #[test]
    fn test_field_contains_absent() {
        assert!(!field_contains(None, "rose"));
        assert!(field_contains(Some("Damask Rose"), "rose"));
    }

    #[test]
    fn test_alphabetical_ignores_case() {
        let mut names = vec!["vanilla", "Amber", "bergamot", "amber"];
        names.sort_by(|a, b| alphabetical(a, b));
        assert_eq!(names, vec!["Amber", "amber", "bergamot", "vanilla"]);
    }
}
