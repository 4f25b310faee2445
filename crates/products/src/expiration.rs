//! `DD/MM/YYYY` expiration dates.

use core::str::FromStr;

use chrono::NaiveDate;

use catalog_core::{DomainError, DomainResult};

const FORMAT: &str = "%d/%m/%Y";

/// A calendar date written as `DD/MM/YYYY`.
///
/// Parsing is strict about shape: two-digit day, two-digit month and a
/// four-digit year. `4/12/2022` and `04/12/22` are rejected even though they
/// name a real day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpirationDate(NaiveDate);

impl ExpirationDate {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        if !has_fixed_shape(raw) {
            return Err(DomainError::invalid_date(raw));
        }
        NaiveDate::parse_from_str(raw, FORMAT)
            .map(Self)
            .map_err(|_| DomainError::invalid_date(raw))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

// chrono accepts single-digit fields and signed years; the wire format does not.
fn has_fixed_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        })
}

impl FromStr for ExpirationDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl core::fmt::Display for ExpirationDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl From<NaiveDate> for ExpirationDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}
