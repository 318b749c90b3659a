//! Address domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use printforge_core::{AddressId, UserId};

/// A user's shipping address.
///
/// At most one address per user carries `is_default = true`; the repository
/// enforces this transactionally.
///
/// The full struct (ids included) is also what gets snapshotted as JSON onto
/// an order at checkout, so orders keep rendering the address the customer
/// chose even if the address book changes later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub user_id: UserId,
    pub full_name: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub phone: String,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields for creating an address.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAddress {
    pub full_name: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    /// Defaults to "IN" when omitted.
    pub country: Option<String>,
    pub phone: String,
    #[serde(default)]
    pub is_default: bool,
}

impl NewAddress {
    /// Names of required fields that are missing or blank.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        let required: [(&'static str, &str); 6] = [
            ("full_name", &self.full_name),
            ("address_line1", &self.address_line1),
            ("city", &self.city),
            ("state", &self.state),
            ("postal_code", &self.postal_code),
            ("phone", &self.phone),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                missing.push(name);
            }
        }
        missing
    }

    /// The country code, defaulting to India.
    #[must_use]
    pub fn country_or_default(&self) -> &str {
        self.country.as_deref().filter(|c| !c.is_empty()).unwrap_or("IN")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> NewAddress {
        NewAddress {
            full_name: "Asha Rao".to_owned(),
            address_line1: "12 MG Road".to_owned(),
            address_line2: None,
            city: "Bengaluru".to_owned(),
            state: "Karnataka".to_owned(),
            postal_code: "560001".to_owned(),
            country: None,
            phone: "+91 98765 43210".to_owned(),
            is_default: false,
        }
    }

    #[test]
    fn test_complete_address_has_no_missing_fields() {
        assert!(complete().missing_fields().is_empty());
    }

    #[test]
    fn test_blank_fields_are_reported() {
        let mut address = complete();
        address.city = "  ".to_owned();
        address.phone = String::new();
        assert_eq!(address.missing_fields(), vec!["city", "phone"]);
    }

    #[test]
    fn test_country_defaults_to_india() {
        assert_eq!(complete().country_or_default(), "IN");

        let mut address = complete();
        address.country = Some("US".to_owned());
        assert_eq!(address.country_or_default(), "US");
    }
}
