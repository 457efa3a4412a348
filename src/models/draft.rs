//! Editable drafts held by the form while the user is typing.
//!
//! Drafts are flat and untyped on purpose: every input is a plain string so
//! a half-filled form can be represented. They become typed models only by
//! passing through the schemas in [`crate::schema`].

use super::{Address, AddressType, Contact, Country, Profile, Region};
use crate::domain::AddressId;
use crate::schema::{self, FieldErrors};
use serde_json::{json, Map, Value};

/// The in-progress address held by the editor while it is open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressDraft {
    pub id: Option<AddressId>,
    pub address_type: AddressType,
    country: Country,
    pub street_address: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub province: String,
    pub postal_code: String,
    pub postcode: String,
}

impl AddressDraft {
    pub fn country(&self) -> Country {
        self.country
    }

    /// Switch the draft to another country.
    ///
    /// Every region/postal input is cleared, whichever country it belonged
    /// to; the common inputs are left untouched.
    pub fn set_country(&mut self, country: Country) {
        self.country = country;
        self.state.clear();
        self.zip_code.clear();
        self.province.clear();
        self.postal_code.clear();
        self.postcode.clear();
    }

    /// Set a text input by its JSON key.
    ///
    /// Returns `false` when no such input exists. `country` and `addressType`
    /// are not text inputs and must go through their own setters.
    pub fn set_input(&mut self, name: &str, value: impl Into<String>) -> bool {
        let slot = match name {
            "streetAddress" => &mut self.street_address,
            "addressLine2" => &mut self.address_line2,
            "city" => &mut self.city,
            "state" => &mut self.state,
            "zipCode" => &mut self.zip_code,
            "province" => &mut self.province,
            "postalCode" => &mut self.postal_code,
            "postcode" => &mut self.postcode,
            _ => return false,
        };
        *slot = value.into();
        true
    }

    /// Current value of a text input by its JSON key.
    pub fn input(&self, name: &str) -> Option<&str> {
        let value = match name {
            "streetAddress" => &self.street_address,
            "addressLine2" => &self.address_line2,
            "city" => &self.city,
            "state" => &self.state,
            "zipCode" => &self.zip_code,
            "province" => &self.province,
            "postalCode" => &self.postal_code,
            "postcode" => &self.postcode,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// JSON form of the draft, as the address schema expects it.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        if let Some(id) = &self.id {
            map.insert("id".into(), json!(id.as_str()));
        }
        map.insert("addressType".into(), json!(self.address_type.as_str()));
        map.insert("country".into(), json!(self.country.as_str()));
        for name in [
            "streetAddress",
            "addressLine2",
            "city",
            "state",
            "zipCode",
            "province",
            "postalCode",
            "postcode",
        ] {
            if let Some(value) = self.input(name) {
                map.insert(name.into(), json!(value));
            }
        }
        Value::Object(map)
    }

    /// Run the address schema over the draft.
    pub fn validate(&self) -> Result<Address, FieldErrors> {
        schema::validate_address(&self.to_value())
    }
}

impl From<&Address> for AddressDraft {
    fn from(address: &Address) -> Self {
        let mut draft = AddressDraft {
            id: address.id.clone(),
            address_type: address.address_type,
            country: address.country(),
            street_address: address.street_address.clone(),
            address_line2: address.address_line2.clone().unwrap_or_default(),
            city: address.city.clone(),
            ..Default::default()
        };
        match &address.region {
            Region::Usa { state, zip_code } => {
                draft.state = state.clone();
                draft.zip_code = zip_code.clone();
            }
            Region::Canada {
                province,
                postal_code,
            } => {
                draft.province = province.clone();
                draft.postal_code = postal_code.clone();
            }
            Region::Uk { postcode } => draft.postcode = postcode.clone(),
            Region::Other { state, zip_code } => {
                draft.state = state.clone().unwrap_or_default();
                draft.zip_code = zip_code.clone().unwrap_or_default();
            }
        }
        draft
    }
}

/// Contact inputs and profile options, excluding the address collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub delivery_instructions: String,
    pub newsletter: bool,
}

impl ProfileDraft {
    /// JSON form of the whole profile, as the profile schema expects it.
    pub fn to_value(&self, addresses: &[Address]) -> Value {
        json!({
            "contact": {
                "firstName": self.first_name,
                "lastName": self.last_name,
                "email": self.email,
                "phone": self.phone,
            },
            "addresses": addresses,
            "deliveryInstructions": self.delivery_instructions,
            "newsletter": self.newsletter,
        })
    }
}

impl From<&Contact> for ProfileDraft {
    fn from(contact: &Contact) -> Self {
        ProfileDraft {
            first_name: contact.first_name.clone(),
            last_name: contact.last_name.clone(),
            email: contact.email.as_str().to_string(),
            phone: contact.phone.as_str().to_string(),
            ..Default::default()
        }
    }
}

impl From<&Profile> for ProfileDraft {
    fn from(profile: &Profile) -> Self {
        ProfileDraft {
            delivery_instructions: profile.delivery_instructions.clone().unwrap_or_default(),
            newsletter: profile.newsletter,
            ..ProfileDraft::from(&profile.contact)
        }
    }
}
