//! Lookups against the built-in reference lists.

use lostfound_model::{CountyKind, UnitKind};
use lostfound_teryt::{SuggestScope, TerytDirectory, UnitQuery};

fn teryt() -> TerytDirectory {
    TerytDirectory::builtin().expect("load built-in TERYT data")
}

fn names(suggestions: &[lostfound_model::Suggestion]) -> Vec<&str> {
    suggestions.iter().map(|s| s.name.as_str()).collect()
}

#[test]
fn builtin_has_sixteen_voivodeships() {
    let teryt = teryt();
    assert_eq!(teryt.voivodeships().len(), 16);
    assert_eq!(teryt.voivodeships()[0].name, "dolnoslaskie");
}

#[test]
fn voivodeship_resolution_order() {
    let teryt = teryt();
    let name = |q: &str| teryt.find_voivodeship(q).map(|v| v.name.as_str());

    assert_eq!(name("śląskie"), Some("slaskie"));
    assert_eq!(name("Mazowieckie"), Some("mazowieckie"));
    assert_eq!(name("12"), Some("malopolskie"));
    assert_eq!(name("mazurskie"), Some("warminsko-mazurskie"));
    assert_eq!(name("kujawsko pomorskie"), Some("kujawsko-pomorskie"));
    assert_eq!(name("Swietokrzyskie"), Some("swietokrzyskie"));
    assert_eq!(name("  "), None);
    assert_eq!(name("Bawaria"), None);
}

#[test]
fn county_names_repeat_across_voivodeships() {
    let teryt = teryt();
    let code = |name: &str, voivodeship: Option<&str>| {
        teryt
            .find_county(name, voivodeship)
            .map(|c| c.code.as_str())
    };

    assert_eq!(code("grodziski", None), Some("1405"));
    assert_eq!(code("grodziski", Some("wielkopolskie")), Some("3005"));
    assert_eq!(code("bielski", Some("śląskie")), Some("2402"));
    assert_eq!(code("bielski", Some("podlaskie")), Some("2003"));
}

#[test]
fn county_exact_name_beats_substring() {
    let teryt = teryt();
    let city = teryt.find_county("krakow", None).expect("city county");
    assert_eq!(city.kind, CountyKind::CityCounty);

    let rural = teryt.find_county("krak", None).expect("rural county");
    assert_eq!(rural.name, "krakowski");
}

#[test]
fn unresolved_voivodeship_filter_yields_none() {
    let teryt = teryt();
    assert!(teryt.find_county("krakowski", Some("Atlantyda")).is_none());
    assert!(
        teryt
            .find_municipality("Wieliczka", None, Some("Atlantyda"))
            .is_none()
    );
    assert!(
        teryt
            .autocomplete(UnitKind::County, "kra", Some("Atlantyda"))
            .is_empty()
    );
}

#[test]
fn municipality_narrowed_by_county_and_voivodeship() {
    let teryt = teryt();

    let nowy_targ = teryt
        .find_municipality("Nowy Targ", Some("nowotarski"), Some("małopolskie"))
        .expect("nowy targ");
    assert_eq!(nowy_targ.code, "1211011");

    let swidnica = teryt
        .find_municipality("Świdnica", None, Some("lubuskie"))
        .expect("swidnica");
    assert_eq!(swidnica.county, "zielonogorski");

    let zakopane = teryt
        .find_municipality("zakopane", Some("Tatrzański"), None)
        .expect("county filter folds diacritics");
    assert_eq!(zakopane.code, "1217011");

    assert!(
        teryt
            .find_municipality("Kraków", Some("krakowski"), Some("malopolskie"))
            .is_none()
    );
}

#[test]
fn canonicalize_echoes_unresolved_input() {
    let teryt = teryt();
    let query = UnitQuery::municipality("Nieistniejąca Wieś", None, None);
    assert_eq!(teryt.canonicalize(&query), "Nieistniejąca Wieś");
    assert!(!teryt.validate(&query));

    let query = UnitQuery::municipality("Łódź", None, None);
    assert_eq!(teryt.canonicalize(&query), "lodz");
    assert!(teryt.validate(&query));
}

#[test]
fn find_dispatches_on_kind() {
    let teryt = teryt();
    let unit = teryt
        .find(&UnitQuery::county("poznański", Some("wielkopolskie")))
        .expect("county");
    assert_eq!(unit.kind(), UnitKind::County);
    assert_eq!(unit.name(), "poznanski");
    assert_eq!(unit.code(), "3021");
}

#[test]
fn autocomplete_prefers_prefix_and_sorts() {
    let teryt = teryt();

    let counties = teryt.autocomplete(UnitKind::County, "bi", None);
    assert_eq!(
        names(&counties),
        ["bialostocki", "bialystok", "bielski", "bielski", "bielsko-biala"]
    );

    let counties = teryt.autocomplete(UnitKind::County, "bi", Some("śląskie"));
    assert_eq!(names(&counties), ["bielski", "bielsko-biala"]);

    let counties = teryt.autocomplete(UnitKind::County, "Gdań", None);
    assert_eq!(names(&counties), ["gdansk", "gdanski"]);
}

#[test]
fn autocomplete_falls_back_to_contains() {
    let teryt = teryt();
    let found = teryt.autocomplete(UnitKind::Municipality, "sącz", None);
    assert_eq!(names(&found), ["nowy-sacz"]);
}

#[test]
fn autocomplete_is_capped_at_ten() {
    let teryt = teryt();
    let found = teryt.autocomplete(UnitKind::Municipality, "ow", None);
    assert_eq!(found.len(), 10);
    assert!(found.windows(2).all(|pair| pair[0].name <= pair[1].name));
    assert!(teryt.autocomplete(UnitKind::Municipality, "k", None).is_empty());
}

#[test]
fn suggestion_labels() {
    let teryt = teryt();
    let labels: Vec<String> = teryt
        .autocomplete(UnitKind::Municipality, "wiel", None)
        .into_iter()
        .chain(teryt.autocomplete(UnitKind::County, "gdy", None))
        .map(|s| s.label)
        .collect();
    insta::assert_debug_snapshot!(labels, @r#"
    [
        "wieliczka, pow. wielicki, woj. malopolskie",
        "wielka-wies, pow. krakowski, woj. malopolskie",
        "gdynia (miasto na prawach powiatu), woj. pomorskie",
    ]
    "#);
}

#[test]
fn suggest_all_lists_municipalities_first() {
    let teryt = teryt();
    let found = teryt.suggest(SuggestScope::All, "kra", None);
    let kinds: Vec<(UnitKind, &str)> = found.iter().map(|s| (s.kind, s.name.as_str())).collect();
    assert_eq!(
        kinds,
        [
            (UnitKind::Municipality, "krakow"),
            (UnitKind::County, "krakow"),
            (UnitKind::County, "krakowski"),
        ]
    );
}

#[test]
fn listings_follow_parents() {
    let teryt = teryt();
    assert_eq!(teryt.counties_in("małopolskie").len(), 6);
    assert!(teryt.counties_in("Atlantyda").is_empty());
    assert!(teryt.counties_in("").is_empty());

    let wielicki: Vec<&str> = teryt
        .municipalities_in(Some("wielicki"), Some("malopolskie"))
        .iter()
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(wielicki, ["biskupice", "niepolomice", "wieliczka"]);
    assert_eq!(
        teryt.municipalities_in(None, None).len(),
        teryt.municipalities().len()
    );
}

#[test]
fn location_info_resolves_each_level() {
    let teryt = teryt();
    let info = teryt.location_info("Wieliczka", "wielicki", "małopolskie");
    assert!(info.is_valid());
    assert_eq!(info.municipality.code.as_deref(), Some("1219053"));
    assert_eq!(info.municipality.kind.as_deref(), Some("urban-rural"));
    assert_eq!(info.county.kind.as_deref(), Some("county"));
    assert_eq!(info.voivodeship.capital.as_deref(), Some("Kraków"));
    assert_eq!(info.voivodeship.input, "małopolskie");

    let info = teryt.location_info("Wieliczka", "wielicki", "Atlantyda");
    assert!(!info.is_valid());
    assert!(!info.voivodeship.valid);
    assert!(!info.county.valid);
    assert_eq!(info.county.input, "wielicki");
}

#[test]
fn fingerprint_is_stable() {
    let a = teryt();
    let b = teryt();
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_eq!(a.fingerprint().len(), 64);
}
