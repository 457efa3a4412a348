//! Contact model: the person the profile belongs to.

use crate::domain::{EmailAddress, PhoneNumber};
use serde::Serialize;

/// Validated contact details.
///
/// Immutable value type; editing the contact replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
}

impl Contact {
    /// Full name as "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contact_serializes_camel_case() {
        let contact = Contact {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: EmailAddress::new("john.doe@example.com").unwrap(),
            phone: PhoneNumber::new("1234567890").unwrap(),
        };

        assert_eq!(contact.full_name(), "John Doe");
        assert_eq!(
            serde_json::to_value(&contact).unwrap(),
            json!({
                "firstName": "John",
                "lastName": "Doe",
                "email": "john.doe@example.com",
                "phone": "1234567890"
            })
        );
    }
}
