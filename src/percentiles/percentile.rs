use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::ExtractError;

const TENTHS_PER_UNIT: u32 = 10;
/// Suffixes above this value carry one implied decimal digit (`999` is 99.9).
const WHOLE_PERCENT_MAX: u32 = 100;
const MAX_SUFFIX_DIGITS: usize = 3;

/// A percentile label stored in tenths of a percent, so `99.9` is `999` and
/// `100` is `1000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percentile {
    tenths: u32,
}

impl Percentile {
    #[must_use]
    pub const fn from_tenths(tenths: u32) -> Self {
        Self { tenths }
    }

    #[must_use]
    pub const fn tenths(self) -> u32 {
        self.tenths
    }

    /// Reads the percentile encoded in the trailing digits of a query column
    /// name. Returns `Ok(None)` when the key has no trailing digits.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::UnsupportedSuffix`] for suffixes longer than
    /// three digits, which cannot be mapped onto a single decimal place.
    pub fn from_key(key: &str) -> Result<Option<Self>, ExtractError> {
        let prefix = key.trim_end_matches(|ch: char| ch.is_ascii_digit());
        let digits = key.strip_prefix(prefix).unwrap_or_default();
        if digits.is_empty() {
            return Ok(None);
        }
        if digits.len() > MAX_SUFFIX_DIGITS {
            return Err(ExtractError::UnsupportedSuffix {
                key: key.to_owned(),
                digits: digits.to_owned(),
            });
        }

        let number: u32 = digits
            .parse()
            .map_err(|_err| ExtractError::UnsupportedSuffix {
                key: key.to_owned(),
                digits: digits.to_owned(),
            })?;
        let tenths = if number > WHOLE_PERCENT_MAX {
            number
        } else {
            number.saturating_mul(TENTHS_PER_UNIT)
        };
        Ok(Some(Self::from_tenths(tenths)))
    }

    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.tenths > 0
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "Chart labels are plotted as plain numbers."
    )]
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.tenths) / f64::from(TENTHS_PER_UNIT)
    }

    /// Axis label, e.g. `99.9%`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{}%", self)
    }
}

impl fmt::Display for Percentile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.tenths.checked_div(TENTHS_PER_UNIT).unwrap_or(0);
        let frac = self.tenths.checked_rem(TENTHS_PER_UNIT).unwrap_or(0);
        if frac == 0 {
            write!(f, "{}", whole)
        } else {
            write!(f, "{}.{}", whole, frac)
        }
    }
}

impl Serialize for Percentile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.as_f64())
    }
}
