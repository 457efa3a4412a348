//! Address model: a tagged union keyed by country.

use crate::domain::AddressId;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Countries an address can belong to. This is the discriminant of [`Region`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum Country {
    #[default]
    #[serde(rename = "USA")]
    Usa,
    Canada,
    #[serde(rename = "UK")]
    Uk,
    Other,
}

impl Country {
    /// All countries in display order.
    pub const ALL: [Country; 4] = [Country::Usa, Country::Canada, Country::Uk, Country::Other];

    /// The wire/display literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Usa => "USA",
            Country::Canada => "Canada",
            Country::Uk => "UK",
            Country::Other => "Other",
        }
    }

    /// The inputs the address editor shows for this country, in order.
    pub fn fields(&self) -> &'static [InputField] {
        match self {
            Country::Usa => USA_FIELDS,
            Country::Canada => CANADA_FIELDS,
            Country::Uk => UK_FIELDS,
            Country::Other => OTHER_FIELDS,
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Country {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown country: {}", s))
    }
}

/// A visible input of the address editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputField {
    /// JSON key of the input
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
}

const fn input(name: &'static str, label: &'static str, required: bool) -> InputField {
    InputField {
        name,
        label,
        required,
    }
}

const USA_FIELDS: &[InputField] = &[
    input("streetAddress", "Street Address", true),
    input("city", "City", true),
    input("state", "State", true),
    input("zipCode", "ZIP Code", true),
];

const CANADA_FIELDS: &[InputField] = &[
    input("streetAddress", "Street Address", true),
    input("city", "City", true),
    input("province", "Province", true),
    input("postalCode", "Postal Code", true),
];

const UK_FIELDS: &[InputField] = &[
    input("streetAddress", "Street Address", true),
    input("city", "City", true),
    input("postcode", "Postcode", true),
];

const OTHER_FIELDS: &[InputField] = &[
    input("streetAddress", "Street Address", true),
    input("city", "City", true),
    input("state", "State/Province/Region (Optional)", false),
    input("zipCode", "ZIP/Postal Code (Optional)", false),
];

/// What an address is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum AddressType {
    #[default]
    Home,
    Work,
    Billing,
    Shipping,
}

impl AddressType {
    pub const ALL: [AddressType; 4] = [
        AddressType::Home,
        AddressType::Work,
        AddressType::Billing,
        AddressType::Shipping,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AddressType::Home => "Home",
            AddressType::Work => "Work",
            AddressType::Billing => "Billing",
            AddressType::Shipping => "Shipping",
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AddressType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown address type: {}", s))
    }
}

/// Country-specific part of an address.
///
/// Each variant carries exactly the region/postal fields its country uses,
/// so an address can never hold a stale field from another country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "country")]
pub enum Region {
    #[serde(rename = "USA", rename_all = "camelCase")]
    Usa { state: String, zip_code: String },

    #[serde(rename_all = "camelCase")]
    Canada {
        province: String,
        postal_code: String,
    },

    #[serde(rename = "UK")]
    Uk { postcode: String },

    #[serde(rename_all = "camelCase")]
    Other {
        #[serde(skip_serializing_if = "Option::is_none")]
        state: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        zip_code: Option<String>,
    },
}

impl Region {
    pub fn country(&self) -> Country {
        match self {
            Region::Usa { .. } => Country::Usa,
            Region::Canada { .. } => Country::Canada,
            Region::Uk { .. } => Country::Uk,
            Region::Other { .. } => Country::Other,
        }
    }
}

/// A validated address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Stable identity, assigned when the address is first added
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<AddressId>,

    pub address_type: AddressType,

    pub street_address: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,

    pub city: String,

    #[serde(flatten)]
    pub region: Region,
}

impl Address {
    pub fn country(&self) -> Country {
        self.region.country()
    }

    /// Whether two addresses point at the same place (street, city and country).
    pub fn same_location(&self, other: &Address) -> bool {
        self.street_address == other.street_address
            && self.city == other.city
            && self.country() == other.country()
    }

    /// Card heading, e.g. "Home Address".
    pub fn heading(&self) -> String {
        format!("{} Address", self.address_type)
    }

    /// One-line summary, e.g. "123 Main St, Anytown, USA".
    pub fn summary(&self) -> String {
        format!("{}, {}, {}", self.street_address, self.city, self.country())
    }
}
