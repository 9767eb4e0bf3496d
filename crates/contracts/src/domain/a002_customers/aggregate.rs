use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::list_view::{FieldValue, ListRecord};

// ============================================================================
// ID Type
// ============================================================================

/// Customer number, e.g. "CUS-001"
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub String);

impl CustomerId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Inactive,
    Blocked,
}

impl CustomerStatus {
    pub fn all() -> &'static [CustomerStatus] {
        &[
            CustomerStatus::Active,
            CustomerStatus::Inactive,
            CustomerStatus::Blocked,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "active",
            CustomerStatus::Inactive => "inactive",
            CustomerStatus::Blocked => "blocked",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CustomerStatus::Active => "Active",
            CustomerStatus::Inactive => "Inactive",
            CustomerStatus::Blocked => "Blocked",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|s| s.code().eq_ignore_ascii_case(code.trim()))
    }
}

// ============================================================================
// List record
// ============================================================================

/// Row of the customers list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub status: CustomerStatus,
    pub orders: u32,
    pub total_spend: f64,
    pub last_order: NaiveDate,
    pub registration_date: NaiveDate,
}

impl Customer {
    pub fn average_order_value(&self) -> f64 {
        if self.orders == 0 {
            0.0
        } else {
            self.total_spend / self.orders as f64
        }
    }
}

pub mod fields {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const STATUS: &str = "status";
    pub const ORDERS: &str = "orders";
    pub const TOTAL_SPEND: &str = "total_spend";
    pub const LAST_ORDER: &str = "last_order";
    pub const REGISTRATION_DATE: &str = "registration_date";
}

impl ListRecord for Customer {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            fields::ID => Some(FieldValue::Text(self.id.as_str())),
            fields::NAME => Some(FieldValue::Text(&self.name)),
            fields::EMAIL => Some(FieldValue::Text(&self.email)),
            fields::STATUS => Some(FieldValue::Status(self.status.code())),
            fields::ORDERS => Some(FieldValue::Number(self.orders as f64)),
            fields::TOTAL_SPEND => Some(FieldValue::Number(self.total_spend)),
            fields::LAST_ORDER => Some(FieldValue::Date(self.last_order)),
            fields::REGISTRATION_DATE => Some(FieldValue::Date(self.registration_date)),
            _ => None,
        }
    }
}
