//! Quoted amount value objects.
//!
//! Amounts are kept as fixed-point decimals in the base currency unit.
//! The persisted form is text, so a record read back from storage may hold
//! a value that never parsed; `StoredAmount` keeps such values verbatim
//! instead of failing the whole read.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

const FIELD: &str = "amount";

/// A non-negative currency amount no larger than [`Amount::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "Decimal", try_from = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    /// Largest quotable amount, 10^15 in the base currency unit.
    pub const MAX: Amount = Amount(Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0));

    /// Creates an amount, rejecting negative values and values above [`Amount::MAX`].
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ValidationError::invalid_format(
                FIELD,
                "amount must not be negative",
            ));
        }
        if value > Self::MAX.0 {
            return Err(ValidationError::invalid_format(
                FIELD,
                format!("amount must not exceed {}", Self::MAX.0),
            ));
        }
        Ok(Self(value))
    }

    /// Parses user or stored text such as `"1500"` or `"1499.50"`.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field(FIELD));
        }
        let value = Decimal::from_str(trimmed).map_err(|_| {
            ValidationError::invalid_format(FIELD, format!("'{}' is not a number", trimmed))
        })?;
        Self::new(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Amount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Amount as found on a persisted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredAmount {
    Valid(Amount),
    /// Raw text that does not parse as an amount in range.
    Invalid(String),
}

impl StoredAmount {
    /// Interprets persisted text, never failing.
    pub fn from_stored(raw: &str) -> Self {
        match Amount::parse(raw) {
            Ok(amount) => StoredAmount::Valid(amount),
            Err(_) => StoredAmount::Invalid(raw.to_string()),
        }
    }

    /// The parsed amount, if any.
    pub fn amount(&self) -> Option<Amount> {
        match self {
            StoredAmount::Valid(amount) => Some(*amount),
            StoredAmount::Invalid(_) => None,
        }
    }

    /// Value used for aggregation: invalid amounts count as zero.
    pub fn value_or_zero(&self) -> Decimal {
        self.amount().map(|a| a.value()).unwrap_or(Decimal::ZERO)
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, StoredAmount::Valid(_))
    }

    /// Text written to storage.
    pub fn as_stored(&self) -> String {
        match self {
            StoredAmount::Valid(amount) => amount.to_string(),
            StoredAmount::Invalid(raw) => raw.clone(),
        }
    }
}

impl From<Amount> for StoredAmount {
    fn from(amount: Amount) -> Self {
        StoredAmount::Valid(amount)
    }
}

impl Serialize for StoredAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_stored())
    }
}

impl<'de> Deserialize<'de> for StoredAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(StoredAmount::from_stored(&raw))
    }
}
