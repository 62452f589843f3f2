//! Daily secret selection.
//!
//! The secret index is `HMAC-SHA256(salt, "YYYY-MM-DD")`, first 32 bits
//! big-endian, modulo the catalog size. Anyone with the same salt, date and
//! catalog order gets the same city, which also means the catalog order is
//! part of the puzzle (see [`crate::catalog::CityCatalog`]).

use chrono::NaiveDate;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::core::City;
use crate::error::{CoordleError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Salt used when none is configured
pub const DEFAULT_SALT: &str = "coordle-default-salt";

/// First 32 bits of the keyed date digest
pub fn date_digest(date: NaiveDate, salt: &str) -> Result<u32> {
    let mut mac = HmacSha256::new_from_slice(salt.as_bytes())
        .map_err(|e| CoordleError::Other(format!("Invalid HMAC key: {}", e)))?;
    mac.update(date.format("%Y-%m-%d").to_string().as_bytes());
    let digest = mac.finalize().into_bytes();

    Ok(u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]))
}

/// Index of the day's secret in a catalog of `len` cities
pub fn secret_index(date: NaiveDate, len: usize, salt: &str) -> Result<usize> {
    if len == 0 {
        return Err(CoordleError::EmptyCatalog);
    }

    Ok(date_digest(date, salt)? as usize % len)
}

/// Pick the day's secret city
pub fn select_secret<'a>(date: NaiveDate, cities: &'a [City], salt: &str) -> Result<&'a City> {
    let index = secret_index(date, cities.len(), salt)?;
    Ok(&cities[index])
}

/// Salted selector bound to a launch date for puzzle numbering
#[derive(Debug, Clone)]
pub struct DailyPuzzleSelector {
    salt: String,
    launch_date: NaiveDate,
}

impl DailyPuzzleSelector {
    pub fn new(salt: impl Into<String>, launch_date: NaiveDate) -> Self {
        Self {
            salt: salt.into(),
            launch_date,
        }
    }

    pub fn select<'a>(&self, date: NaiveDate, cities: &'a [City]) -> Result<&'a City> {
        select_secret(date, cities, &self.salt)
    }

    /// Puzzle number shown when sharing: 1 on launch day.
    ///
    /// Dates before launch give zero or negative numbers.
    pub fn share_tag(&self, date: NaiveDate) -> i64 {
        (date - self.launch_date).num_days() + 1
    }
}
