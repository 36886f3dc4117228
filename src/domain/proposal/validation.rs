//! Creation-time validation of proposal input.
//!
//! Every rule is checked and every failing field is reported, so the form
//! can mark all problems at once.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use validator::ValidateEmail;

use crate::domain::foundation::ValidationError;

use super::{is_known_category, Amount, PropertyType, ProposalDetails, StoredAmount};

/// Raw creation input as submitted by the contractor.
///
/// Text fields are taken verbatim; nothing here is trusted until
/// [`validate_for_creation`] has accepted it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProposalInput {
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub work_address: String,
    /// Sent as text (`"1500"`) or as a JSON number (`1500`).
    #[serde(deserialize_with = "amount_text")]
    pub amount: String,
    pub property_type: String,
    pub category: String,
    pub sub_category: String,
    pub include_materials: bool,
    #[serde(rename = "includeVAT")]
    pub include_vat: bool,
    pub general_info: String,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp; only the date part is used.
    pub start_date: Option<String>,
    pub validity_period: String,
}

/// Validates `input` against the creation rules.
///
/// `today` is the caller's current date; a start date earlier than it is
/// rejected. Text fields are stored trimmed.
pub fn validate_for_creation(
    input: &ProposalInput,
    today: NaiveDate,
) -> Result<ProposalDetails, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let client_name = required(&input.client_name, "clientName", &mut errors);

    let client_email = input.client_email.trim();
    if client_email.is_empty() {
        errors.push(ValidationError::empty_field("clientEmail"));
    } else if !client_email.validate_email() {
        errors.push(ValidationError::invalid_format(
            "clientEmail",
            "not a valid email address",
        ));
    }

    let client_phone = required(&input.client_phone, "clientPhone", &mut errors);
    let work_address = required(&input.work_address, "workAddress", &mut errors);

    let amount = Amount::parse(&input.amount)
        .map_err(|e| errors.push(e))
        .ok();

    let property_type = input
        .property_type
        .trim()
        .parse::<PropertyType>()
        .map_err(|e| errors.push(e))
        .ok();

    let category = input.category.trim();
    if category.is_empty() {
        errors.push(ValidationError::empty_field("category"));
    } else if !is_known_category(category) {
        errors.push(ValidationError::not_allowed("category", category));
    }

    let sub_category = required(&input.sub_category, "subCategory", &mut errors);
    let general_info = required(&input.general_info, "generalInfo", &mut errors);
    let validity_period = required(&input.validity_period, "validityPeriod", &mut errors);

    let start_date = match input.start_date.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match parse_date(raw) {
            Some(date) if date < today => {
                errors.push(ValidationError::before_minimum("startDate", today));
                None
            }
            Some(date) => Some(date),
            None => {
                errors.push(ValidationError::invalid_format(
                    "startDate",
                    "expected a date such as 2024-05-01",
                ));
                None
            }
        },
    };

    match (amount, property_type) {
        (Some(amount), Some(property_type)) if errors.is_empty() => Ok(ProposalDetails {
            client_name,
            client_email: client_email.to_string(),
            client_phone,
            work_address,
            amount: StoredAmount::from(amount),
            property_type,
            category: category.to_string(),
            sub_category,
            include_materials: input.include_materials,
            include_vat: input.include_vat,
            general_info,
            start_date,
            validity_period,
        }),
        _ => Err(errors),
    }
}

fn amount_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
        Missing,
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
        Raw::Missing => String::new(),
    })
}

fn required(value: &str, field: &str, errors: &mut Vec<ValidationError>) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(ValidationError::empty_field(field));
    }
    trimmed.to_string()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}
