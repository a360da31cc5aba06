//! City registry - the fixed set of selectable cities
//!
//! Each city carries an IANA zone, bilingual display names, and a lat/lon
//! used to place its marker on the stylized map. The set is defined at
//! startup and validated once; selection always refers to a registered id.

use chrono_tz::Tz;

use crate::i18n::Language;
use crate::time_engine::parse_timezone;

/// A string with Korean and English renderings
#[derive(Debug, Clone)]
pub struct Localized {
    pub ko: String,
    pub en: String,
}

impl Localized {
    pub fn new(ko: &str, en: &str) -> Localized {
        Localized {
            ko: ko.to_string(),
            en: en.to_string(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Ko => &self.ko,
            Language::En => &self.en,
        }
    }
}

/// A selectable city
#[derive(Debug, Clone)]
pub struct City {
    /// Unique key, stable across languages
    pub id: String,
    /// IANA time zone, parsed and validated at registry construction
    pub time_zone: Tz,
    pub names: Localized,
    pub country: Localized,
    /// Latitude in degrees, north positive
    pub lat: f32,
    /// Longitude in degrees, east positive
    pub lon: f32,
}

/// Error raised while building a registry
#[derive(Debug)]
pub enum RegistryError {
    /// A city references a zone the tz database does not know
    UnsupportedZone { city_id: String, zone: String },
    /// Two cities share an id
    DuplicateId(String),
    /// The registry has no cities
    Empty,
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::UnsupportedZone { city_id, zone } => {
                write!(f, "City '{}' has unsupported time zone '{}'", city_id, zone)
            }
            RegistryError::DuplicateId(id) => write!(f, "Duplicate city id '{}'", id),
            RegistryError::Empty => write!(f, "City registry is empty"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Raw city definition before zone validation
struct CityDef {
    id: &'static str,
    zone: &'static str,
    name_ko: &'static str,
    name_en: &'static str,
    country_ko: &'static str,
    country_en: &'static str,
    lat: f32,
    lon: f32,
}

const CITY_DEFS: &[CityDef] = &[
    CityDef {
        id: "los-angeles",
        zone: "America/Los_Angeles",
        name_ko: "로스앤젤레스",
        name_en: "Los Angeles",
        country_ko: "미국",
        country_en: "USA",
        lat: 34.05,
        lon: -118.24,
    },
    CityDef {
        id: "new-york",
        zone: "America/New_York",
        name_ko: "뉴욕",
        name_en: "New York",
        country_ko: "미국",
        country_en: "USA",
        lat: 40.71,
        lon: -74.01,
    },
    CityDef {
        id: "saopaulo",
        zone: "America/Sao_Paulo",
        name_ko: "상파울루",
        name_en: "São Paulo",
        country_ko: "브라질",
        country_en: "Brazil",
        lat: -23.55,
        lon: -46.63,
    },
    CityDef {
        id: "london",
        zone: "Europe/London",
        name_ko: "런던",
        name_en: "London",
        country_ko: "영국",
        country_en: "United Kingdom",
        lat: 51.51,
        lon: -0.13,
    },
    CityDef {
        id: "paris",
        zone: "Europe/Paris",
        name_ko: "파리",
        name_en: "Paris",
        country_ko: "프랑스",
        country_en: "France",
        lat: 48.86,
        lon: 2.35,
    },
    CityDef {
        id: "dubai",
        zone: "Asia/Dubai",
        name_ko: "두바이",
        name_en: "Dubai",
        country_ko: "아랍에미리트",
        country_en: "United Arab Emirates",
        lat: 25.20,
        lon: 55.27,
    },
    CityDef {
        id: "mumbai",
        zone: "Asia/Kolkata",
        name_ko: "뭄바이",
        name_en: "Mumbai",
        country_ko: "인도",
        country_en: "India",
        lat: 19.08,
        lon: 72.88,
    },
    CityDef {
        id: "seoul",
        zone: "Asia/Seoul",
        name_ko: "서울",
        name_en: "Seoul",
        country_ko: "대한민국",
        country_en: "South Korea",
        lat: 37.57,
        lon: 126.98,
    },
    CityDef {
        id: "tokyo",
        zone: "Asia/Tokyo",
        name_ko: "도쿄",
        name_en: "Tokyo",
        country_ko: "일본",
        country_en: "Japan",
        lat: 35.68,
        lon: 139.69,
    },
    CityDef {
        id: "sydney",
        zone: "Australia/Sydney",
        name_ko: "시드니",
        name_en: "Sydney",
        country_ko: "호주",
        country_en: "Australia",
        lat: -33.87,
        lon: 151.21,
    },
];

/// Validated, ordered set of selectable cities
#[derive(Debug, Clone)]
pub struct CityRegistry {
    cities: Vec<City>,
}

impl CityRegistry {
    /// Build a registry, rejecting empty sets and duplicate ids.
    ///
    /// Zone validation happens before this point (a `City` already holds a
    /// parsed `Tz`); `with_default_cities` is where an unsupported zone
    /// string would surface.
    pub fn new(cities: Vec<City>) -> Result<CityRegistry, RegistryError> {
        if cities.is_empty() {
            return Err(RegistryError::Empty);
        }
        for (i, city) in cities.iter().enumerate() {
            if cities[..i].iter().any(|other| other.id == city.id) {
                return Err(RegistryError::DuplicateId(city.id.clone()));
            }
        }
        Ok(CityRegistry { cities })
    }

    /// Build the registry of the ten built-in cities
    pub fn with_default_cities() -> Result<CityRegistry, RegistryError> {
        let mut cities = Vec::with_capacity(CITY_DEFS.len());
        for def in CITY_DEFS {
            let time_zone = parse_timezone(def.zone).map_err(|_| {
                RegistryError::UnsupportedZone {
                    city_id: def.id.to_string(),
                    zone: def.zone.to_string(),
                }
            })?;
            cities.push(City {
                id: def.id.to_string(),
                time_zone,
                names: Localized::new(def.name_ko, def.name_en),
                country: Localized::new(def.country_ko, def.country_en),
                lat: def.lat,
                lon: def.lon,
            });
        }
        CityRegistry::new(cities)
    }

    /// Look up a city by id
    pub fn get(&self, id: &str) -> Option<&City> {
        self.cities.iter().find(|city| city.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Cities in registration order
    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// First registered city, used when no explicit default applies
    pub fn first(&self) -> &City {
        // Invariant: construction rejects empty registries
        &self.cities[0]
    }
}
