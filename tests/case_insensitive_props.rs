use proptest::prelude::*;
use scenario_lookup::symbol_table::SymbolTable;

fn vary_case(key: &str, mask: &[bool]) -> String {
    key.chars()
        .zip(mask.iter().cycle())
        .map(|(ch, upper)| {
            if *upper {
                ch.to_ascii_uppercase()
            } else {
                ch.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_any_casing_and_padding_finds_same_leaf(
        namespace in "[A-Za-z][A-Za-z0-9]{0,11}",
        name in "[A-Za-z][A-Za-z0-9_]{0,15}",
        value in "0x[0-9a-f]{40}",
        mask in proptest::collection::vec(any::<bool>(), 1..8),
        left in " {0,3}",
        right in " {0,3}",
    ) {
        let mut table = SymbolTable::new();
        table.set_path(&[namespace.as_str(), name.as_str(), "address"], value.as_str());

        let canonical = table
            .first_leaf(&[vec![namespace.clone(), name.clone(), "address".to_string()]])
            .map(str::to_string);
        prop_assert_eq!(canonical.as_deref(), Some(value.as_str()));

        let varied = vec![
            format!("{left}{}{right}", vary_case(&namespace, &mask)),
            format!("{left}{}{right}", vary_case(&name, &mask)),
            vary_case("address", &mask),
        ];
        prop_assert_eq!(table.first_leaf(&[varied]), canonical.as_deref());
    }

    #[test]
    fn prop_nested_map_candidate_never_returned(
        name in "[A-Za-z][A-Za-z0-9]{0,15}",
        value in "0x[0-9a-f]{40}",
    ) {
        let mut table = SymbolTable::new();
        table.set_path(&["Tokens", name.as_str(), "address"], value.as_str());

        let map_only = vec![vec!["Tokens".to_string(), name.clone()]];
        prop_assert_eq!(table.first_leaf(&map_only), None);

        let with_fallback = vec![
            vec!["Tokens".to_string(), name.clone()],
            vec!["Tokens".to_string(), name.clone(), "address".to_string()],
        ];
        prop_assert_eq!(table.first_leaf(&with_fallback), Some(value.as_str()));
    }
}
