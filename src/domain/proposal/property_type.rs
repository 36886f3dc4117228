//! Kind of premises the work is carried out at.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Property type of the work address.
///
/// Serialized as the Swedish label shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    #[serde(rename = "Lägenhet")]
    Apartment,
    #[serde(rename = "Villa/Radhus")]
    House,
    #[serde(rename = "Kontor")]
    Office,
    #[serde(rename = "Restaurang")]
    Restaurant,
    #[serde(rename = "Annat")]
    Other,
}

impl PropertyType {
    pub const ALL: [PropertyType; 5] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Office,
        PropertyType::Restaurant,
        PropertyType::Other,
    ];

    /// Returns the stored label.
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Lägenhet",
            PropertyType::House => "Villa/Radhus",
            PropertyType::Office => "Kontor",
            PropertyType::Restaurant => "Restaurang",
            PropertyType::Other => "Annat",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PropertyType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| ValidationError::not_allowed("propertyType", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_swedish_label() {
        assert_eq!(
            serde_json::to_string(&PropertyType::House).unwrap(),
            "\"Villa/Radhus\""
        );
        let parsed: PropertyType = serde_json::from_str("\"Lägenhet\"").unwrap();
        assert_eq!(parsed, PropertyType::Apartment);
    }

    #[test]
    fn from_str_accepts_every_label() {
        for p in PropertyType::ALL {
            assert_eq!(p.label().parse::<PropertyType>().unwrap(), p);
        }
    }

    #[test]
    fn from_str_rejects_unknown_label() {
        let err = "Slott".parse::<PropertyType>().unwrap_err();
        assert_eq!(err.field(), "propertyType");
    }
}
