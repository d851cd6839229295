use proptest::prelude::*;
use setups_core::catalog::{License, VALID_LICENSES};
use setups_core::descriptor::parse_comma_list;
use setups_core::render::python_string_literal;

proptest! {
    #[test]
    fn list_parts_are_trimmed_and_non_empty(raw in "[a-z ,<>=.]{0,60}") {
        for part in parse_comma_list(&raw) {
            prop_assert!(!part.is_empty());
            prop_assert_eq!(part.trim(), part.as_str());
            prop_assert!(!part.contains(','));
        }
    }

    #[test]
    fn list_preserves_order(items in prop::collection::vec("[a-z][a-z0-9_-]{0,8}", 0..8)) {
        let raw = items
            .iter()
            .map(|i| format!("  {i} "))
            .collect::<Vec<_>>()
            .join(",,");
        prop_assert_eq!(parse_comma_list(&raw), items);
    }

    #[test]
    fn non_allow_listed_strings_are_rejected(s in ".{0,20}") {
        prop_assume!(!VALID_LICENSES.contains(&s.as_str()));
        prop_assert!(s.parse::<License>().is_err());
    }

    #[test]
    fn escaped_literal_has_no_raw_breakers(s in "\\PC*|[\"\\\\\n\r\t]{0,10}") {
        let lit = python_string_literal(&s);
        let body = &lit[1..lit.len() - 1];
        prop_assert!(lit.starts_with('"') && lit.ends_with('"'));
        prop_assert!(!body.contains('\n'));
        prop_assert!(!body.contains('\r'));
        // Every quote in the body is preceded by an odd run of backslashes.
        let bytes = body.as_bytes();
        for (i, b) in bytes.iter().enumerate() {
            if *b == b'"' {
                let run = bytes[..i].iter().rev().take_while(|c| **c == b'\\').count();
                prop_assert!(run % 2 == 1);
            }
        }
    }
}

#[test]
fn allow_list_round_trips_through_display() {
    for name in VALID_LICENSES {
        let license: License = name.parse().unwrap();
        assert_eq!(license.to_string(), name);
    }
}
