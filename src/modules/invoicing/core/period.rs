use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A calendar month in the `YYYY-MM` form used as billing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BillingPeriod {
    year: i32,
    month: u32,
}

impl BillingPeriod {
    /// Strict parse: four digits, a dash, two digits, month 01..=12.
    pub fn parse(value: &str) -> Option<Self> {
        let bytes = value.as_bytes();
        if bytes.len() != 7 || bytes[4] != b'-' {
            return None;
        }
        let digits_ok = bytes[..4]
            .iter()
            .chain(&bytes[5..])
            .all(u8::is_ascii_digit);
        if !digits_ok {
            return None;
        }
        let year: i32 = value[..4].parse().ok()?;
        let month: u32 = value[5..].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl std::fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
