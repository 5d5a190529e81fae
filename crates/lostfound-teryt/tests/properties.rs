use std::sync::LazyLock;

use lostfound_model::UnitKind;
use lostfound_teryt::{MAX_COMPLETIONS, TerytDirectory, UnitQuery};
use proptest::prelude::*;

static TERYT: LazyLock<TerytDirectory> =
    LazyLock::new(|| TerytDirectory::builtin().expect("load built-in TERYT data"));

fn voivodeship_queries() -> impl Strategy<Value = String> {
    let known: Vec<String> = TERYT
        .voivodeships()
        .iter()
        .flat_map(|v| [v.name.clone(), v.full_name.clone(), v.full_name.to_uppercase()])
        .collect();
    prop_oneof![prop::sample::select(known), "\\PC{0,16}"]
}

fn county_queries() -> impl Strategy<Value = String> {
    let known: Vec<String> = TERYT
        .counties()
        .iter()
        .flat_map(|c| [c.name.clone(), c.full_name.clone()])
        .collect();
    prop_oneof![prop::sample::select(known), "[a-zżółćęśąźń -]{0,12}"]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn canonicalize_agrees_with_find(query in voivodeship_queries()) {
        let canonical = TERYT.canonicalize(&UnitQuery::voivodeship(&query));
        match TERYT.find_voivodeship(&query) {
            Some(unit) => prop_assert_eq!(canonical, unit.name.clone()),
            None => prop_assert_eq!(canonical, query),
        }
    }

    #[test]
    fn resolving_a_canonical_name_is_stable(query in county_queries()) {
        if let Some(county) = TERYT.find_county(&query, None) {
            let again = TERYT.find_county(&county.name, Some(&county.voivodeship));
            prop_assert_eq!(again, Some(county));
        }
    }

    #[test]
    fn autocomplete_is_bounded(query in "\\PC{0,8}", county in any::<bool>()) {
        let kind = if county { UnitKind::County } else { UnitKind::Municipality };
        let found = TERYT.autocomplete(kind, &query, None);
        prop_assert!(found.len() <= MAX_COMPLETIONS);
        if query.chars().count() < 2 {
            prop_assert!(found.is_empty());
        }
    }
}
