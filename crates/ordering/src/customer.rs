//! Customer records.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use common::{CustomerId, OwnerId};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{FieldError, ValidationError};

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Company details entered before the catalog is opened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub company_name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub delivery_address: String,
    pub billing_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

impl NewCustomer {
    /// Lists every field that fails validation, in form order.
    pub fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        errors.extend(required(&self.company_name, "company_name", "Company name is required"));
        errors.extend(required(
            &self.contact_person,
            "contact_person",
            "Contact person is required",
        ));
        errors.extend(required(&self.phone, "phone", "Phone number is required"));
        match required(&self.email, "email", "Email is required") {
            Some(missing) => errors.push(missing),
            None if !is_valid_email(&self.email) => {
                errors.push(FieldError::new("email", "Email is invalid"));
            }
            None => {}
        }
        errors.extend(required(
            &self.delivery_address,
            "delivery_address",
            "Delivery address is required",
        ));
        errors.extend(required(
            &self.billing_address,
            "billing_address",
            "Billing address is required",
        ));
        errors
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let errors = self.field_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::InvalidFields(errors))
        }
    }

    fn normalized(self) -> Self {
        Self {
            company_name: self.company_name.trim().to_string(),
            contact_person: self.contact_person.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            delivery_address: self.delivery_address.trim().to_string(),
            billing_address: self.billing_address.trim().to_string(),
            special_instructions: self
                .special_instructions
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

fn required(value: &str, field: &'static str, message: &'static str) -> Option<FieldError> {
    value
        .trim()
        .is_empty()
        .then(|| FieldError::new(field, message))
}

/// Checks the basic `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email.trim())
}

/// A registered customer.
///
/// Only [`Customer::register`] builds one, so stored details are always
/// validated and trimmed. Input arrives as a [`NewCustomer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    id: CustomerId,
    owner_id: OwnerId,
    #[serde(flatten)]
    details: NewCustomer,
    created_at: DateTime<Utc>,
}

impl Customer {
    /// Registers validated customer details under a backend-assigned id.
    pub fn register(
        id: CustomerId,
        owner_id: OwnerId,
        details: NewCustomer,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        details.validate()?;
        Ok(Self {
            id,
            owner_id,
            details: details.normalized(),
            created_at,
        })
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    pub fn company_name(&self) -> &str {
        &self.details.company_name
    }

    pub fn contact_person(&self) -> &str {
        &self.details.contact_person
    }

    pub fn phone(&self) -> &str {
        &self.details.phone
    }

    pub fn email(&self) -> &str {
        &self.details.email
    }

    pub fn delivery_address(&self) -> &str {
        &self.details.delivery_address
    }

    pub fn billing_address(&self) -> &str {
        &self.details.billing_address
    }

    pub fn special_instructions(&self) -> Option<&str> {
        self.details.special_instructions.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
