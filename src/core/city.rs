use serde::{Deserialize, Serialize};

/// Deserialize population from int, float or string (seed files are not consistent)
fn deserialize_population<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PopulationValue {
        Int(u64),
        Float(f64),
        String(String),
        Null,
    }

    match PopulationValue::deserialize(deserializer)? {
        PopulationValue::Int(i) => Ok(Some(i)),
        PopulationValue::Float(f) if f.is_finite() && f >= 0.0 => Ok(Some(f.round() as u64)),
        PopulationValue::Float(f) => Err(Error::custom(format!("Invalid population: {}", f))),
        PopulationValue::String(s) if s.trim().is_empty() => Ok(None),
        PopulationValue::String(s) => s.trim().parse::<u64>()
            .map(Some)
            .map_err(|_| Error::custom(format!("Invalid population string: {}", s))),
        PopulationValue::Null => Ok(None),
    }
}

/// Derive a URL-safe slug: lowercase, every run outside `[a-z0-9]` becomes one `-`,
/// no leading or trailing `-`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Slug for a city that ships without one
pub fn city_slug(name: &str, country_code: &str) -> String {
    slugify(&format!("{}-{}", name, country_code))
}

/// City record as it appears in the seed file, before ids and slugs are assigned
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CityRecord {
    #[serde(default)]
    pub id: Option<u64>,

    pub name: String,

    #[serde(default)]
    pub slug: Option<String>,

    pub country_code: String,

    pub lat: f64,

    pub lon: f64,

    #[serde(default)]
    #[serde(deserialize_with = "deserialize_population")]
    pub population: Option<u64>,
}

impl CityRecord {
    /// Create a record with the required fields
    pub fn new(name: impl Into<String>, country_code: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            slug: None,
            country_code: country_code.into(),
            lat,
            lon,
            population: None,
        }
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}

/// A city in a loaded catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct City {
    /// Unique within the catalog
    pub id: u64,

    /// Display name
    pub name: String,

    /// URL-safe identifier, unique within the catalog
    pub slug: String,

    /// ISO 3166-1 alpha-2 code, uppercase
    pub country_code: String,

    /// Latitude in degrees
    pub lat: f64,

    /// Longitude in degrees
    pub lon: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
}

impl City {
    /// Finalize a seed record at catalog position `index` (0-based)
    pub(crate) fn from_record(record: CityRecord, index: usize) -> Self {
        let country_code = record.country_code.trim().to_uppercase();
        let slug = match record.slug {
            Some(slug) if !slug.trim().is_empty() => slug.trim().to_string(),
            _ => city_slug(&record.name, &country_code),
        };

        Self {
            id: record.id.filter(|id| *id != 0).unwrap_or(index as u64 + 1),
            name: record.name.trim().to_string(),
            slug,
            country_code,
            lat: record.lat,
            lon: record.lon,
            population: record.population,
        }
    }

    /// Population, treating zero as unknown
    pub fn known_population(&self) -> Option<u64> {
        self.population.filter(|p| *p > 0)
    }

    /// Get display name (for logging/UI)
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.country_code)
    }
}
