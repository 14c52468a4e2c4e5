//! Display names for panchanga elements.
//!
//! Engines produce bare indices. A [`NameTable`] turns them into names;
//! [`label`] falls back to `"<Element> <index>"` for anything the table
//! does not cover, so a partial or custom table never fails a render.

/// Element kinds that carry a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    Tithi,
    Nakshatra,
    Yoga,
    Karana,
    Vaara,
    Masa,
    Ritu,
    Samvatsara,
}

impl Element {
    pub const ALL: [Element; 8] = [
        Element::Tithi,
        Element::Nakshatra,
        Element::Yoga,
        Element::Karana,
        Element::Vaara,
        Element::Masa,
        Element::Ritu,
        Element::Samvatsara,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Tithi => "Tithi",
            Self::Nakshatra => "Nakshatra",
            Self::Yoga => "Yoga",
            Self::Karana => "Karana",
            Self::Vaara => "Vaara",
            Self::Masa => "Masa",
            Self::Ritu => "Ritu",
            Self::Samvatsara => "Samvatsara",
        }
    }

    /// One-sentence explanation for reports.
    pub fn description(self) -> &'static str {
        match self {
            Self::Tithi => "Lunar day: each 12° gained by the Moon over the Sun.",
            Self::Nakshatra => "Lunar mansion: the Moon's place among 27 sidereal divisions of 13°20′.",
            Self::Yoga => "Sum of the sidereal Sun and Moon longitudes, in 27 divisions.",
            Self::Karana => "Half of a tithi, 6° of Moon−Sun separation.",
            Self::Vaara => "Weekday, counted from sunrise.",
            Self::Masa => "Lunar month from new moon to new moon; adhika when the Sun stays in one sign.",
            Self::Ritu => "Season, two months each, six in a year.",
            Self::Samvatsara => "Name of the year in the 60-year cycle.",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Source of element names.
pub trait NameTable: Send + Sync {
    /// Name of `element` at `index`, using the element's own numbering.
    fn name(&self, element: Element, index: u32) -> Option<&str>;
}

/// Name or the synthetic `"<Element> <index>"` fallback.
pub fn label(table: &dyn NameTable, element: Element, index: u32) -> String {
    match table.name(element, index) {
        Some(name) => name.to_string(),
        None => format!("{element} {index}"),
    }
}

/// Masa label with the `"Adhika "` prefix for intercalary months.
pub fn masa_label(table: &dyn NameTable, masa: u8, is_leap: bool) -> String {
    let name = label(table, Element::Masa, u32::from(masa));
    if is_leap { format!("Adhika {name}") } else { name }
}

/// Built-in transliterated Sanskrit names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SanskritNames;

impl NameTable for SanskritNames {
    fn name(&self, element: Element, index: u32) -> Option<&str> {
        let i = index as usize;
        match element {
            Element::Tithi => one_based(&TITHI_NAMES, i),
            Element::Nakshatra => one_based(&NAKSHATRA_NAMES, i),
            Element::Yoga => one_based(&YOGA_NAMES, i),
            Element::Karana => karana_name(i),
            Element::Vaara => VAARA_NAMES.get(i).copied(),
            Element::Masa => one_based(&MASA_NAMES, i),
            Element::Ritu => RITU_NAMES.get(i).copied(),
            // Cycle position 0 is the last year of the previous cycle.
            Element::Samvatsara if i == 0 => SAMVATSARA_NAMES.last().copied(),
            Element::Samvatsara => one_based(&SAMVATSARA_NAMES, i),
        }
    }
}

fn one_based(table: &[&'static str], index: usize) -> Option<&'static str> {
    index.checked_sub(1).and_then(|i| table.get(i)).copied()
}

/// Karanas 1..=60: one fixed, seven movable repeating eight times, three fixed.
fn karana_name(index: usize) -> Option<&'static str> {
    match index {
        1 => Some("Kimstughna"),
        2..=57 => Some(MOVABLE_KARANAS[(index - 2) % MOVABLE_KARANAS.len()]),
        58 => Some("Shakuni"),
        59 => Some("Chatushpada"),
        60 => Some("Naga"),
        _ => None,
    }
}

const TITHI_NAMES: [&str; 30] = [
    "Shukla Pratipada",
    "Shukla Dwitiya",
    "Shukla Tritiya",
    "Shukla Chaturthi",
    "Shukla Panchami",
    "Shukla Shashthi",
    "Shukla Saptami",
    "Shukla Ashtami",
    "Shukla Navami",
    "Shukla Dashami",
    "Shukla Ekadashi",
    "Shukla Dwadashi",
    "Shukla Trayodashi",
    "Shukla Chaturdashi",
    "Purnima",
    "Krishna Pratipada",
    "Krishna Dwitiya",
    "Krishna Tritiya",
    "Krishna Chaturthi",
    "Krishna Panchami",
    "Krishna Shashthi",
    "Krishna Saptami",
    "Krishna Ashtami",
    "Krishna Navami",
    "Krishna Dashami",
    "Krishna Ekadashi",
    "Krishna Dwadashi",
    "Krishna Trayodashi",
    "Krishna Chaturdashi",
    "Amavasya",
];

const NAKSHATRA_NAMES: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishtha",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

const YOGA_NAMES: [&str; 27] = [
    "Vishkumbha",
    "Priti",
    "Ayushman",
    "Saubhagya",
    "Shobhana",
    "Atiganda",
    "Sukarma",
    "Dhriti",
    "Shula",
    "Ganda",
    "Vriddhi",
    "Dhruva",
    "Vyaghata",
    "Harshana",
    "Vajra",
    "Siddhi",
    "Vyatipata",
    "Variyan",
    "Parigha",
    "Shiva",
    "Siddha",
    "Sadhya",
    "Shubha",
    "Shukla",
    "Brahma",
    "Indra",
    "Vaidhriti",
];

const MOVABLE_KARANAS: [&str; 7] = ["Bava", "Balava", "Kaulava", "Taitila", "Garaja", "Vanija", "Vishti"];

const VAARA_NAMES: [&str; 7] = [
    "Ravivara",
    "Somavara",
    "Mangalavara",
    "Budhavara",
    "Guruvara",
    "Shukravara",
    "Shanivara",
];

const MASA_NAMES: [&str; 12] = [
    "Chaitra",
    "Vaishakha",
    "Jyeshtha",
    "Ashadha",
    "Shravana",
    "Bhadrapada",
    "Ashwin",
    "Kartika",
    "Margashirsha",
    "Pausha",
    "Magha",
    "Phalguna",
];

const RITU_NAMES: [&str; 6] = ["Vasanta", "Grishma", "Varsha", "Sharad", "Hemanta", "Shishira"];

const SAMVATSARA_NAMES: [&str; 60] = [
    "Prabhava",
    "Vibhava",
    "Shukla",
    "Pramodoota",
    "Prajothpatti",
    "Angirasa",
    "Shrimukha",
    "Bhava",
    "Yuva",
    "Dhaatu",
    "Eeshvara",
    "Bahudhanya",
    "Pramaathi",
    "Vikrama",
    "Vrisha",
    "Chitrabhanu",
    "Svabhanu",
    "Taarana",
    "Paarthiva",
    "Vyaya",
    "Sarvajit",
    "Sarvadhari",
    "Virodhi",
    "Vikruti",
    "Khara",
    "Nandana",
    "Vijaya",
    "Jaya",
    "Manmatha",
    "Durmukhi",
    "Hevilambi",
    "Vilambi",
    "Vikari",
    "Sharvari",
    "Plava",
    "Shubhakrut",
    "Shobhakrut",
    "Krodhi",
    "Vishvavasu",
    "Paraabhava",
    "Plavanga",
    "Keelaka",
    "Saumya",
    "Sadharana",
    "Virodhikrut",
    "Paridhavi",
    "Pramaadhi",
    "Aananda",
    "Raakshasa",
    "Naala",
    "Pingala",
    "Kaalayukti",
    "Siddharthi",
    "Raudri",
    "Durmathi",
    "Dundubhi",
    "Rudhirodgaari",
    "Raktaakshi",
    "Krodhana",
    "Akshaya",
];
