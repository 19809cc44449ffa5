//! Static region taxonomy: provinces, their canonical regions, and the two
//! alias tables (postal codes and suburb names) that map geocoder output onto
//! those regions.
//!
//! Everything here is process-wide constant data. The alias tables are
//! indexed lazily on first lookup and never mutated afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

/// Top-level administrative division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Province {
    #[serde(rename = "Western Cape")]
    WesternCape,
    #[serde(rename = "Gauteng")]
    Gauteng,
    #[serde(rename = "Kwa Zulu Natal")]
    KwaZuluNatal,
    #[serde(rename = "Eastern Cape")]
    EasternCape,
    #[serde(rename = "Free State")]
    FreeState,
    #[serde(rename = "Limpopo")]
    Limpopo,
    #[serde(rename = "Mpumalanga")]
    Mpumalanga,
    #[serde(rename = "North West")]
    NorthWest,
    #[serde(rename = "Northern Cape")]
    NorthernCape,
}

impl Province {
    pub const ALL: [Province; 9] = [
        Province::WesternCape,
        Province::Gauteng,
        Province::KwaZuluNatal,
        Province::EasternCape,
        Province::FreeState,
        Province::Limpopo,
        Province::Mpumalanga,
        Province::NorthWest,
        Province::NorthernCape,
    ];

    /// Canonical display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Province::WesternCape => "Western Cape",
            Province::Gauteng => "Gauteng",
            Province::KwaZuluNatal => "Kwa Zulu Natal",
            Province::EasternCape => "Eastern Cape",
            Province::FreeState => "Free State",
            Province::Limpopo => "Limpopo",
            Province::Mpumalanga => "Mpumalanga",
            Province::NorthWest => "North West",
            Province::NorthernCape => "Northern Cape",
        }
    }

    /// Canonical regions of this province, in display order.
    #[must_use]
    pub fn regions(self) -> &'static [&'static str] {
        match self {
            Province::WesternCape => &[
                "Cape Town CBD",
                "Northern Suburbs",
                "Southern Suburbs",
                "Atlantic Seaboard",
                "Western Seaboard",
                "South Peninsula",
                "Cape Helderberg",
                "Cape Winelands",
                "Paarl/Wellington",
                "Stellenbosch",
                "Garden Route",
                "George/Knysna",
                "West Coast",
                "Overberg",
                "Central Karoo",
            ],
            Province::Gauteng => &[
                "Johannesburg CBD",
                "Sandton/Rivonia",
                "Randburg",
                "Roodepoort",
                "Soweto",
                "Midrand",
                "Pretoria/Tshwane CBD",
                "Centurion",
                "Pretoria East",
                "Pretoria North",
                "Ekurhuleni (East Rand)",
                "Kempton Park",
                "Brakpan/Benoni",
                "Sedibeng",
                "West Rand",
            ],
            Province::KwaZuluNatal => &[
                "Durban Central",
                "Umhlanga/Ballito",
                "Durban North",
                "Durban South",
                "Pinetown/Westville",
                "Amanzimtoti",
                "Pietermaritzburg",
                "uMgungundlovu",
                "King Cetshwayo/Richards Bay",
                "iLembe",
                "Ugu (South Coast)",
                "Newcastle",
            ],
            Province::EasternCape => &[
                "Gqeberha (Port Elizabeth)",
                "East London (Buffalo City)",
                "Mthatha",
                "Sarah Baartman",
                "Amatole",
                "Chris Hani",
                "Joe Gqabi",
            ],
            Province::FreeState => &[
                "Bloemfontein (Mangaung)",
                "Welkom",
                "Sasolburg",
                "Bethlehem",
                "Fezile Dabi",
                "Lejweleputswa",
                "Thabo Mofutsanyane",
            ],
            Province::Limpopo => &[
                "Polokwane (Capricorn)",
                "Thohoyandou (Vhembe)",
                "Tzaneen (Mopani)",
                "Sekhukhune",
                "Waterberg",
                "Bela-Bela",
            ],
            Province::Mpumalanga => &[
                "Nelspruit (Ehlanzeni)",
                "Witbank (Nkangala)",
                "Secunda (Gert Sibande)",
                "Middelburg",
                "White River",
            ],
            Province::NorthWest => &[
                "Rustenburg (Bojanala)",
                "Mahikeng",
                "Potchefstroom (Dr Kenneth Kaunda)",
                "Klerksdorp",
                "Brits",
            ],
            Province::NorthernCape => &[
                "Kimberley (Frances Baard)",
                "Upington",
                "John Taolo Gaetsewe",
                "Namakwa",
                "Pixley ka Seme",
            ],
        }
    }

    /// Match a provider-supplied province string, ignoring case and every
    /// non-letter character ("KwaZulu-Natal" matches "Kwa Zulu Natal").
    #[must_use]
    pub fn from_loose(raw: &str) -> Option<Province> {
        let wanted = letters_only(raw);
        if wanted.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|p| letters_only(p.name()) == wanted)
    }

    #[must_use]
    pub fn contains_region(self, region: &str) -> bool {
        self.regions().contains(&region)
    }
}

impl std::fmt::Display for Province {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn letters_only(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// Postal codes with a known region. Codes not listed here fall through to
/// the next resolution step.
pub(crate) const POSTAL_CODES: &[(&str, &str)] = &[
    // Western Cape
    ("7570", "Northern Suburbs"), // Kraaifontein, Scottsdene, Wallacedene
    ("7560", "Northern Suburbs"), // Brackenfell
    ("7550", "Northern Suburbs"), // Durbanville
    ("7500", "Northern Suburbs"), // Parow
    ("7460", "Northern Suburbs"), // Goodwood
    ("7580", "Northern Suburbs"), // Kuils River
    ("7441", "Western Seaboard"), // Milnerton, Table View, Parklands
    ("7446", "Western Seaboard"), // Blouberg
    ("7530", "Northern Suburbs"), // Bellville
    ("7535", "Northern Suburbs"), // Stikland
    ("8001", "Cape Town CBD"),
    ("8000", "Cape Town CBD"),
    ("7700", "Southern Suburbs"), // Rondebosch
    ("7708", "Southern Suburbs"), // Claremont
    ("7800", "Southern Suburbs"), // Plumstead
    ("7945", "South Peninsula"),  // Muizenberg
    ("7975", "South Peninsula"),  // Fish Hoek
    ("7130", "Cape Helderberg"),  // Somerset West
    ("7140", "Cape Helderberg"),  // Strand
    ("7600", "Stellenbosch"),
    ("7646", "Paarl/Wellington"),
    ("6850", "Cape Winelands"), // Worcester
    ("6835", "Cape Winelands"), // Ceres
    ("6705", "Cape Winelands"), // Robertson
    ("6720", "Cape Winelands"), // Montagu
    ("6875", "Cape Winelands"), // De Doorns
    ("6880", "Cape Winelands"), // Touws River
    ("7357", "West Coast"),     // Langebaan
    ("7380", "West Coast"),     // Vredenburg
    ("7395", "West Coast"),     // Saldanha
    ("7300", "West Coast"),     // Malmesbury
    ("7351", "West Coast"),     // Yzerfontein
    ("7345", "West Coast"),     // Darling
    ("7310", "West Coast"),     // Moorreesburg
    ("8160", "West Coast"),     // Vredendal
    ("6500", "Garden Route"),   // Mossel Bay
    ("6520", "Garden Route"),   // Hartenbos
    ("6670", "Garden Route"),   // Riversdale
    ("6674", "Garden Route"),   // Stilbaai
    ("6665", "Garden Route"),   // Heidelberg
    ("6529", "George/Knysna"),
    ("6530", "George/Knysna"),
    ("6560", "George/Knysna"), // Wilderness
    ("6570", "George/Knysna"),
    ("6571", "George/Knysna"),
    ("6573", "George/Knysna"), // Sedgefield
    ("6600", "George/Knysna"), // Plettenberg Bay
    ("7200", "Overberg"),      // Hermanus
    ("7230", "Overberg"),      // Caledon
    ("7280", "Overberg"),      // Bredasdorp
    ("6740", "Overberg"),      // Swellendam
    ("7220", "Overberg"),      // Gansbaai
    ("7215", "Overberg"),      // Kleinmond
    ("7160", "Overberg"),      // Grabouw
    ("7170", "Overberg"),      // Villiersdorp
    ("6970", "Central Karoo"), // Beaufort West
    ("6930", "Central Karoo"), // Prince Albert
    ("6900", "Central Karoo"), // Laingsburg
    // Gauteng
    ("2000", "Johannesburg CBD"),
    ("2001", "Johannesburg CBD"),
    ("2196", "Sandton/Rivonia"),
    ("2128", "Sandton/Rivonia"),
    ("2191", "Sandton/Rivonia"), // Bryanston
    ("2194", "Randburg"),
    ("1709", "Roodepoort"),
    ("1724", "Roodepoort"),
    ("1804", "Soweto"), // Orlando
    ("1818", "Soweto"), // Dobsonville
    ("1685", "Midrand"),
    ("0002", "Pretoria/Tshwane CBD"),
    ("0157", "Centurion"),
    ("0081", "Pretoria East"), // Lynnwood
    ("0182", "Pretoria North"),
    ("1459", "Ekurhuleni (East Rand)"), // Boksburg
    ("1401", "Ekurhuleni (East Rand)"), // Germiston
    ("1609", "Ekurhuleni (East Rand)"), // Edenvale
    ("1619", "Kempton Park"),
    ("1501", "Brakpan/Benoni"),
    ("1541", "Brakpan/Benoni"),
    ("1911", "Sedibeng"),  // Vanderbijlpark
    ("1939", "Sedibeng"),  // Vereeniging
    ("1739", "West Rand"), // Krugersdorp
    // Kwa Zulu Natal
    ("4001", "Durban Central"),
    ("4319", "Umhlanga/Ballito"),
    ("4420", "Umhlanga/Ballito"),
    ("4051", "Durban North"),
    ("4052", "Durban South"), // Bluff
    ("3610", "Pinetown/Westville"),
    ("3629", "Pinetown/Westville"),
    ("4126", "Amanzimtoti"),
    ("3201", "Pietermaritzburg"),
    ("3900", "King Cetshwayo/Richards Bay"),
    ("2940", "Newcastle"),
    // Eastern Cape
    ("6001", "Gqeberha (Port Elizabeth)"),
    ("5201", "East London (Buffalo City)"),
    ("5099", "Mthatha"),
    // Free State
    ("9301", "Bloemfontein (Mangaung)"),
    ("9459", "Welkom"),
    ("1947", "Sasolburg"),
    // North West
    ("0299", "Rustenburg (Bojanala)"),
    ("2745", "Mahikeng"),
    ("2531", "Potchefstroom (Dr Kenneth Kaunda)"),
    // Limpopo
    ("0699", "Polokwane (Capricorn)"),
    ("0700", "Polokwane (Capricorn)"),
    ("0950", "Thohoyandou (Vhembe)"),
    ("0850", "Tzaneen (Mopani)"),
    ("1390", "Tzaneen (Mopani)"), // Phalaborwa
    ("0480", "Bela-Bela"),
    ("0510", "Waterberg"),  // Modimolle
    ("0555", "Waterberg"),  // Lephalale
    ("1120", "Sekhukhune"), // Burgersfort
    // Mpumalanga
    ("1200", "Nelspruit (Ehlanzeni)"),
    ("1201", "Nelspruit (Ehlanzeni)"),
    ("1035", "Witbank (Nkangala)"),
    ("1034", "Witbank (Nkangala)"),
    ("2302", "Secunda (Gert Sibande)"),
    ("1050", "Middelburg"),
    ("1240", "White River"),
    // Northern Cape
    ("8301", "Kimberley (Frances Baard)"),
    ("8300", "Kimberley (Frances Baard)"),
    ("8801", "Upington"),
    ("8460", "John Taolo Gaetsewe"), // Kuruman
    ("8240", "Namakwa"),             // Springbok
    ("7000", "Pixley ka Seme"),      // De Aar
];

/// Lower-case suburb and place names with a known region. Many names share
/// one region; the same name is never listed twice.
pub(crate) const SUBURB_ALIASES: &[(&str, &str)] = &[
    // Western Cape
    ("brackenfell", "Northern Suburbs"),
    ("bellville", "Northern Suburbs"),
    ("durbanville", "Northern Suburbs"),
    ("parow", "Northern Suburbs"),
    ("goodwood", "Northern Suburbs"),
    ("kraaifontein", "Northern Suburbs"),
    ("kuils river", "Northern Suburbs"),
    ("century city", "Northern Suburbs"),
    ("edgemead", "Northern Suburbs"),
    ("bothasig", "Northern Suburbs"),
    ("monte vista", "Northern Suburbs"),
    ("plattekloof", "Northern Suburbs"),
    ("scottdene", "Northern Suburbs"),
    ("scottsdene", "Northern Suburbs"),
    ("northpine", "Northern Suburbs"),
    ("wallacedene", "Northern Suburbs"),
    ("bloekombos", "Northern Suburbs"),
    ("belmont park", "Northern Suburbs"),
    ("tyger valley", "Northern Suburbs"),
    ("welgemoed", "Northern Suburbs"),
    ("loevenstein", "Northern Suburbs"),
    ("morgen industria", "Northern Suburbs"),
    ("milnerton", "Western Seaboard"),
    ("table view", "Western Seaboard"),
    ("blouberg", "Western Seaboard"),
    ("parklands", "Western Seaboard"),
    ("sunningdale", "Western Seaboard"),
    ("west beach", "Western Seaboard"),
    ("big bay", "Western Seaboard"),
    ("sunset beach", "Western Seaboard"),
    ("melkbosstrand", "Western Seaboard"),
    ("claremont", "Southern Suburbs"),
    ("rondebosch", "Southern Suburbs"),
    ("newlands", "Southern Suburbs"),
    ("wynberg", "Southern Suburbs"),
    ("kenilworth", "Southern Suburbs"),
    ("observatory", "Southern Suburbs"),
    ("mowbray", "Southern Suburbs"),
    ("pinelands", "Southern Suburbs"),
    ("tokai", "Southern Suburbs"),
    ("constantia", "Southern Suburbs"),
    ("bergvliet", "Southern Suburbs"),
    ("plumstead", "Southern Suburbs"),
    ("sea point", "Atlantic Seaboard"),
    ("camps bay", "Atlantic Seaboard"),
    ("clifton", "Atlantic Seaboard"),
    ("green point", "Atlantic Seaboard"),
    ("hout bay", "Atlantic Seaboard"),
    ("mouille point", "Atlantic Seaboard"),
    ("gardens", "Cape Town CBD"),
    ("vredehoek", "Cape Town CBD"),
    ("fish hoek", "South Peninsula"),
    ("simon's town", "South Peninsula"),
    ("muizenberg", "South Peninsula"),
    ("noordhoek", "South Peninsula"),
    ("kommetjie", "South Peninsula"),
    ("kalk bay", "South Peninsula"),
    ("somerset west", "Cape Helderberg"),
    ("strand", "Cape Helderberg"),
    ("gordon's bay", "Cape Helderberg"),
    ("stellenbosch", "Stellenbosch"),
    ("paarl", "Paarl/Wellington"),
    ("wellington", "Paarl/Wellington"),
    // Gauteng
    ("sandton", "Sandton/Rivonia"),
    ("rivonia", "Sandton/Rivonia"),
    ("bryanston", "Sandton/Rivonia"),
    ("fourways", "Sandton/Rivonia"),
    ("lonehill", "Sandton/Rivonia"),
    ("sunninghill", "Sandton/Rivonia"),
    ("woodmead", "Sandton/Rivonia"),
    ("morningside", "Sandton/Rivonia"),
    ("randburg", "Randburg"),
    ("ferndale", "Randburg"),
    ("northcliff", "Randburg"),
    ("cresta", "Randburg"),
    ("midrand", "Midrand"),
    ("halfway house", "Midrand"),
    ("kyalami", "Midrand"),
    ("waterfall", "Midrand"),
    ("centurion", "Centurion"),
    ("lyttelton", "Centurion"),
    ("irene", "Centurion"),
    ("kempton park", "Kempton Park"),
    ("benoni", "Brakpan/Benoni"),
    ("brakpan", "Brakpan/Benoni"),
    ("boksburg", "Ekurhuleni (East Rand)"),
    ("germiston", "Ekurhuleni (East Rand)"),
    ("alberton", "Ekurhuleni (East Rand)"),
    ("edenvale", "Ekurhuleni (East Rand)"),
    ("bedfordview", "Ekurhuleni (East Rand)"),
    ("springs", "Ekurhuleni (East Rand)"),
    ("nigel", "Ekurhuleni (East Rand)"),
    ("roodepoort", "Roodepoort"),
    ("florida", "Roodepoort"),
    ("weltevreden park", "Roodepoort"),
    ("ruimsig", "Roodepoort"),
    ("little falls", "Roodepoort"),
    ("soweto", "Soweto"),
    ("diepkloof", "Soweto"),
    ("orlando", "Soweto"),
    ("dobsonville", "Soweto"),
    ("protea glen", "Soweto"),
    ("pimville", "Soweto"),
    ("jabulani", "Soweto"),
    ("braamfontein", "Johannesburg CBD"),
    ("newtown", "Johannesburg CBD"),
    ("marshalltown", "Johannesburg CBD"),
    ("hillbrow", "Johannesburg CBD"),
    ("faerie glen", "Pretoria East"),
    ("garsfontein", "Pretoria East"),
    ("lynnwood", "Pretoria East"),
    ("menlo park", "Pretoria East"),
    ("waterkloof", "Pretoria East"),
    ("montana", "Pretoria North"),
    ("sinoville", "Pretoria North"),
    ("wonderboom", "Pretoria North"),
    ("akamasia", "Pretoria North"),
    ("akasia", "Pretoria North"),
    ("krugersdorp", "West Rand"),
    ("randfontein", "West Rand"),
    ("muldersdrift", "West Rand"),
    ("mogale city", "West Rand"),
    ("vanderbijlpark", "Sedibeng"),
    ("vereeniging", "Sedibeng"),
    ("meyerton", "Sedibeng"),
    // Kwa Zulu Natal
    ("umhlanga", "Umhlanga/Ballito"),
    ("ballito", "Umhlanga/Ballito"),
    ("durban north", "Durban North"),
    ("westville", "Pinetown/Westville"),
    ("pinetown", "Pinetown/Westville"),
    ("hillcrest", "Pinetown/Westville"),
    ("kloof", "Pinetown/Westville"),
    ("berea", "Durban Central"),
    ("glenwood", "Durban Central"),
    ("amanzimtoti", "Amanzimtoti"),
    ("kingsburgh", "Amanzimtoti"),
    ("bluff", "Durban South"),
    ("chatsworth", "Durban South"),
    ("isipingo", "Durban South"),
    ("yellowwood park", "Durban South"),
    ("queensburgh", "Durban South"),
    ("pietermaritzburg", "Pietermaritzburg"),
    ("scottsville", "Pietermaritzburg"),
    ("northdale", "Pietermaritzburg"),
    ("hilton", "uMgungundlovu"),
    ("howick", "uMgungundlovu"),
    ("richards bay", "King Cetshwayo/Richards Bay"),
    ("empangeni", "King Cetshwayo/Richards Bay"),
    ("port shepstone", "Ugu (South Coast)"),
    ("margate", "Ugu (South Coast)"),
    ("shelly beach", "Ugu (South Coast)"),
    ("newcastle", "Newcastle"),
    ("madadeni", "Newcastle"),
    // Eastern Cape
    ("gqeberha", "Gqeberha (Port Elizabeth)"),
    ("summerstrand", "Gqeberha (Port Elizabeth)"),
    ("walmer", "Gqeberha (Port Elizabeth)"),
    ("newton park", "Gqeberha (Port Elizabeth)"),
    ("lorraine", "Gqeberha (Port Elizabeth)"),
    ("beacon bay", "East London (Buffalo City)"),
    ("gonubie", "East London (Buffalo City)"),
    ("vincent", "East London (Buffalo City)"),
    ("nahoon", "East London (Buffalo City)"),
    ("mthatha", "Mthatha"),
    ("jeffreys bay", "Sarah Baartman"),
    ("makhanda", "Sarah Baartman"),
    // Free State
    ("universitas", "Bloemfontein (Mangaung)"),
    ("langenhoven park", "Bloemfontein (Mangaung)"),
    ("fichardt park", "Bloemfontein (Mangaung)"),
    ("welkom", "Welkom"),
    ("sasolburg", "Sasolburg"),
    ("bethlehem", "Bethlehem"),
    ("parys", "Fezile Dabi"),
    // Limpopo
    ("bendor", "Polokwane (Capricorn)"),
    ("flora park", "Polokwane (Capricorn)"),
    ("seshego", "Polokwane (Capricorn)"),
    ("thohoyandou", "Thohoyandou (Vhembe)"),
    ("tzaneen", "Tzaneen (Mopani)"),
    ("phalaborwa", "Tzaneen (Mopani)"),
    ("bela-bela", "Bela-Bela"),
    ("modimolle", "Waterberg"),
    ("lephalale", "Waterberg"),
    // Mpumalanga
    ("mbombela", "Nelspruit (Ehlanzeni)"),
    ("west acres", "Nelspruit (Ehlanzeni)"),
    ("sonheuwel", "Nelspruit (Ehlanzeni)"),
    ("emalahleni", "Witbank (Nkangala)"),
    ("reyno ridge", "Witbank (Nkangala)"),
    ("secunda", "Secunda (Gert Sibande)"),
    ("middelburg", "Middelburg"),
    ("white river", "White River"),
    // North West
    ("geelhoutpark", "Rustenburg (Bojanala)"),
    ("baillie park", "Potchefstroom (Dr Kenneth Kaunda)"),
    ("klerksdorp", "Klerksdorp"),
    ("brits", "Brits"),
    ("hartbeespoort", "Brits"),
    // Northern Cape
    ("royldene", "Kimberley (Frances Baard)"),
    ("monument heights", "Kimberley (Frances Baard)"),
    ("upington", "Upington"),
    ("kathu", "John Taolo Gaetsewe"),
    ("kuruman", "John Taolo Gaetsewe"),
    ("springbok", "Namakwa"),
    ("de aar", "Pixley ka Seme"),
];

static POSTAL_CODE_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| POSTAL_CODES.iter().copied().collect());

static SUBURB_ALIAS_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| SUBURB_ALIASES.iter().copied().collect());

/// Canonical regions of `province`, in display order.
#[must_use]
pub fn list_regions(province: Province) -> &'static [&'static str] {
    province.regions()
}

/// Region for a known postal code. Surrounding whitespace is ignored.
#[must_use]
pub fn lookup_postal_code(code: &str) -> Option<&'static str> {
    POSTAL_CODE_INDEX.get(code.trim()).copied()
}

/// Region for a known suburb or place name, case-insensitively.
#[must_use]
pub fn lookup_suburb_alias(name: &str) -> Option<&'static str> {
    SUBURB_ALIAS_INDEX
        .get(name.trim().to_lowercase().as_str())
        .copied()
}

/// Province owning a canonical region name.
#[must_use]
pub fn province_of_region(region: &str) -> Option<Province> {
    Province::ALL
        .into_iter()
        .find(|p| p.contains_region(region))
}
