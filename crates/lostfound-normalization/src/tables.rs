//! Reference tables driving the standardization rules.
//!
//! [`ReferenceTables::default`] holds the built-in Polish tables. Callers
//! that need different data (tests, other deployments) build their own
//! value and hand it to the standardizer.

/// Common misspellings and their corrections. Keys are lowercase.
pub const SPELLING_CORRECTIONS: &[(&str, &str)] = &[
    // colours
    ("czrny", "czarny"),
    ("bialy", "biały"),
    ("szry", "szary"),
    ("cerwony", "czerwony"),
    ("nibieski", "niebieski"),
    ("zielny", "zielony"),
    // common words
    ("tlefon", "telefon"),
    ("telfon", "telefon"),
    ("komurka", "komórka"),
    ("portfiel", "portfel"),
    ("dokumnty", "dokumenty"),
    ("dowod", "dowód"),
    // places
    ("dworzeć", "dworzec"),
    ("przymstanek", "przystanek"),
    ("sklęp", "sklep"),
];

/// Brand aliases in match order. The substring fallback takes the first
/// key found inside the input, so order matters.
pub const BRANDS: &[(&str, &str)] = &[
    // phones
    ("samsung", "Samsung"),
    ("apple", "Apple"),
    ("iphone", "Apple"),
    ("xiaomi", "Xiaomi"),
    ("redmi", "Xiaomi"),
    ("huawei", "Huawei"),
    ("honor", "Honor"),
    ("oneplus", "OnePlus"),
    ("google", "Google"),
    ("pixel", "Google"),
    ("motorola", "Motorola"),
    ("moto", "Motorola"),
    ("nokia", "Nokia"),
    ("lg", "LG"),
    ("sony", "Sony"),
    ("oppo", "Oppo"),
    ("realme", "Realme"),
    ("vivo", "Vivo"),
    ("asus", "Asus"),
    // laptops
    ("lenovo", "Lenovo"),
    ("hp", "HP"),
    ("dell", "Dell"),
    ("acer", "Acer"),
    ("msi", "MSI"),
    ("macbook", "Apple"),
    // cars
    ("audi", "Audi"),
    ("bmw", "BMW"),
    ("citroen", "Citroën"),
    ("citroën", "Citroën"),
    ("fiat", "Fiat"),
    ("ford", "Ford"),
    ("honda", "Honda"),
    ("hyundai", "Hyundai"),
    ("kia", "Kia"),
    ("mazda", "Mazda"),
    ("mercedes", "Mercedes-Benz"),
    ("nissan", "Nissan"),
    ("opel", "Opel"),
    ("peugeot", "Peugeot"),
    ("renault", "Renault"),
    ("seat", "Seat"),
    ("skoda", "Škoda"),
    ("škoda", "Škoda"),
    ("toyota", "Toyota"),
    ("volkswagen", "Volkswagen"),
    ("vw", "Volkswagen"),
    ("volvo", "Volvo"),
];

/// Colour names (Polish, unaccented Polish, English) to display form.
pub const COLORS: &[(&str, &str)] = &[
    ("czarny", "Czarny"),
    ("czrny", "Czarny"),
    ("black", "Czarny"),
    ("biały", "Biały"),
    ("bialy", "Biały"),
    ("white", "Biały"),
    ("szary", "Szary"),
    ("szry", "Szary"),
    ("gray", "Szary"),
    ("grey", "Szary"),
    ("niebieski", "Niebieski"),
    ("nibieski", "Niebieski"),
    ("blue", "Niebieski"),
    ("czerwony", "Czerwony"),
    ("cerwony", "Czerwony"),
    ("red", "Czerwony"),
    ("zielony", "Zielony"),
    ("zielny", "Zielony"),
    ("green", "Zielony"),
    ("żółty", "Żółty"),
    ("zolty", "Żółty"),
    ("yellow", "Żółty"),
    ("różowy", "Różowy"),
    ("rozowy", "Różowy"),
    ("pink", "Różowy"),
    ("fioletowy", "Fioletowy"),
    ("purple", "Fioletowy"),
    ("brązowy", "Brązowy"),
    ("brazowy", "Brązowy"),
    ("brown", "Brązowy"),
    ("srebrny", "Srebrny"),
    ("silver", "Srebrny"),
    ("złoty", "Złoty"),
    ("zloty", "Złoty"),
    ("gold", "Złoty"),
];

/// Voivodeship spellings understood without the TERYT directory.
pub const VOIVODESHIP_ALIASES: &[(&str, &str)] = &[
    ("dolnoslaskie", "dolnoslaskie"),
    ("dolnośląskie", "dolnoslaskie"),
    ("dolnoslask", "dolnoslaskie"),
    ("kujawsko-pomorskie", "kujawsko-pomorskie"),
    ("kujawsko pomorskie", "kujawsko-pomorskie"),
    ("lubelskie", "lubelskie"),
    ("lubuskie", "lubuskie"),
    ("lodzkie", "lodzkie"),
    ("łódzkie", "lodzkie"),
    ("malopolskie", "malopolskie"),
    ("małopolskie", "malopolskie"),
    ("mazowieckie", "mazowieckie"),
    ("opolskie", "opolskie"),
    ("podkarpackie", "podkarpackie"),
    ("podlaskie", "podlaskie"),
    ("pomorskie", "pomorskie"),
    ("slaskie", "slaskie"),
    ("śląskie", "slaskie"),
    ("swietokrzyskie", "swietokrzyskie"),
    ("świętokrzyskie", "swietokrzyskie"),
    ("warminsko-mazurskie", "warminsko-mazurskie"),
    ("warmińsko-mazurskie", "warminsko-mazurskie"),
    ("wielkopolskie", "wielkopolskie"),
    ("zachodniopomorskie", "zachodniopomorskie"),
    ("zachodnio-pomorskie", "zachodniopomorskie"),
];

/// Words kept lowercase by the capitalization rule, except at the start.
pub const LOWERCASE_WORDS: &[&str] = &[
    "i", "w", "z", "na", "do", "od", "po", "dla", "o", "u", "we", "ze",
];

/// Street-type abbreviations: canonical form and the spellings that map
/// to it at the start of an address.
pub const STREET_PREFIXES: &[(&str, &[&str])] = &[
    ("ul.", &["ulica", "ul"]),
    ("al.", &["aleja", "aleje", "al"]),
    ("pl.", &["plac", "pl"]),
    ("os.", &["osiedle", "os"]),
];

/// Street prefix group: every variant is rewritten to `canonical`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreetPrefix {
    /// Abbreviation with its trailing dot, e.g. `ul.`.
    pub canonical: String,
    /// Whole-word spellings, without a trailing dot.
    pub variants: Vec<String>,
}

/// All lookup tables used by the rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTables {
    pub spelling: Vec<(String, String)>,
    pub brands: Vec<(String, String)>,
    pub colors: Vec<(String, String)>,
    pub voivodeship_aliases: Vec<(String, String)>,
    pub lowercase_words: Vec<String>,
    pub street_prefixes: Vec<StreetPrefix>,
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self {
            spelling: owned_pairs(SPELLING_CORRECTIONS),
            brands: owned_pairs(BRANDS),
            colors: owned_pairs(COLORS),
            voivodeship_aliases: owned_pairs(VOIVODESHIP_ALIASES),
            lowercase_words: LOWERCASE_WORDS.iter().map(|w| (*w).to_string()).collect(),
            street_prefixes: STREET_PREFIXES
                .iter()
                .map(|(canonical, variants)| StreetPrefix {
                    canonical: (*canonical).to_string(),
                    variants: variants.iter().map(|v| (*v).to_string()).collect(),
                })
                .collect(),
        }
    }
}

impl ReferenceTables {
    /// Tables with every list empty. Rules then fall back to plain
    /// capitalization.
    pub fn empty() -> Self {
        Self {
            spelling: Vec::new(),
            brands: Vec::new(),
            colors: Vec::new(),
            voivodeship_aliases: Vec::new(),
            lowercase_words: Vec::new(),
            street_prefixes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_spelling(mut self, typo: &str, correction: &str) -> Self {
        self.spelling.push((typo.to_string(), correction.to_string()));
        self
    }

    #[must_use]
    pub fn with_brand(mut self, alias: &str, canonical: &str) -> Self {
        self.brands.push((alias.to_string(), canonical.to_string()));
        self
    }

    #[must_use]
    pub fn with_color(mut self, alias: &str, canonical: &str) -> Self {
        self.colors.push((alias.to_string(), canonical.to_string()));
        self
    }

    #[must_use]
    pub fn with_voivodeship_alias(mut self, alias: &str, canonical: &str) -> Self {
        self.voivodeship_aliases
            .push((alias.to_string(), canonical.to_string()));
        self
    }
}

fn owned_pairs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}
