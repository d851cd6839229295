//! Comma-separated list normalization for dependency-style fields.

/// Splits `raw` on commas, trims each part, and drops empty parts.
/// Order is preserved; empty input yields an empty list.
pub fn parse_comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_empty_segments() {
        assert_eq!(parse_comma_list("a, b ,, c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_and_blank_inputs_yield_nothing() {
        assert!(parse_comma_list("").is_empty());
        assert!(parse_comma_list(" , ,").is_empty());
    }

    #[test]
    fn keeps_version_specifiers_intact() {
        assert_eq!(
            parse_comma_list("requests>=2.0,  click == 8.1.7"),
            vec!["requests>=2.0", "click == 8.1.7"]
        );
    }
}
