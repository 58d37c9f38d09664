//! Shipment order payload sent with the `OrderShipment` command.
//!
//! Field names follow the carrier's PascalCase JSON. Address lines are
//! flattened into the address object as `AddressLine1..AddressLine3`.

use serde::Serialize;

use crate::AddressLines;

/// Contact details of a consignor or consignee, everything except the
/// street address.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Party {
    pub name: String,
    pub company: String,
    pub city: String,
    pub zip: String,
    /// ISO 3166-1 alpha-2 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub phone: String,
    pub email: String,
}

impl Party {
    pub fn new(name: impl Into<String>) -> Self {
        Party {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn zip(mut self, zip: impl Into<String>) -> Self {
        self.zip = zip.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }
}

/// A party together with its wrapped street address.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Address {
    #[serde(flatten)]
    pub party: Party,
    #[serde(flatten)]
    pub lines: AddressLines,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Shipment {
    pub label_format: String,
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipper_reference: Option<String>,
    /// Parcel weight in kilograms.
    pub weight: f64,
    /// Declared value of the contents.
    pub value: f64,
    pub consignor_address: Address,
    pub consignee_address: Address,
}
