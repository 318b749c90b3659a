//! Integer money representation in minor currency units.
//!
//! Catalog and order amounts are whole numbers of the display unit (e.g.
//! whole rupees); the payment gateway expects amounts in the currency's
//! smallest subunit (paise), which is what [`Price::subunits`] produces.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};

/// A monetary amount in minor currency units.
///
/// Arithmetic is plain integer arithmetic; there is no fractional
/// representation anywhere in the order pipeline.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// A zero amount.
    pub const ZERO: Self = Self(0);

    /// Number of gateway subunits per minor unit (paise per rupee).
    pub const SUBUNIT_FACTOR: i64 = 100;

    /// Create a price from minor currency units.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// The amount in minor currency units.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// The amount in gateway subunits (e.g. paise for INR).
    #[must_use]
    pub const fn subunits(&self) -> i64 {
        self.0 * Self::SUBUNIT_FACTOR
    }

    /// Whether the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Apply a percentage rate, rounding half away from zero.
    ///
    /// Used for tax computation: `Price::new(2197).percent(18)` is 395.
    #[must_use]
    pub fn percent(&self, rate: u32) -> Self {
        let scaled = self.0 * i64::from(rate);
        // Integer round-half-up on a division by 100.
        Self((scaled + 50).div_euclid(100))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<i64> for Price {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Price {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <i64 as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <i64 as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Price {
    fn decode(
        value: sqlx::postgres::PgValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let amount = <i64 as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self(amount))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Price {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <i64 as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

/// ISO 4217 currency codes accepted by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    INR,
    USD,
}

impl CurrencyCode {
    /// The ISO 4217 code string.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::INR => "INR",
            Self::USD => "USD",
        }
    }

    /// The display symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::INR => "\u{20b9}",
            Self::USD => "$",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INR" => Ok(Self::INR),
            "USD" => Ok(Self::USD),
            _ => Err(format!("unsupported currency: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_and_scale() {
        let lines = [Price::new(799) * 2, Price::new(599) * 1];
        let subtotal: Price = lines.into_iter().sum();
        assert_eq!(subtotal, Price::new(2197));
    }

    #[test]
    fn test_percent_rounds_half_up() {
        // 2197 * 0.18 = 395.46 -> 395
        assert_eq!(Price::new(2197).percent(18), Price::new(395));
        // 1000 * 0.18 = 180 exactly
        assert_eq!(Price::new(1000).percent(18), Price::new(180));
        // 25 * 0.18 = 4.5 -> 5
        assert_eq!(Price::new(25).percent(18), Price::new(5));
        assert_eq!(Price::ZERO.percent(18), Price::ZERO);
    }

    #[test]
    fn test_subunits() {
        assert_eq!(Price::new(2691).subunits(), 269_100);
    }

    #[test]
    fn test_currency_code_parse() {
        assert_eq!("INR".parse::<CurrencyCode>(), Ok(CurrencyCode::INR));
        assert!("EUR".parse::<CurrencyCode>().is_err());
        assert_eq!(CurrencyCode::INR.code(), "INR");
    }
}
