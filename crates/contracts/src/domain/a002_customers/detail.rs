use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::aggregate::{CustomerId, CustomerStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub registration_date: NaiveDate,
    pub status: CustomerStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Addresses {
    pub billing: String,
    pub shipping: Vec<String>,
}

/// One line of the customer's order history tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: String,
    pub date: NaiveDate,
    pub total: f64,
    pub status: String,
    pub items: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerAnalytics {
    pub total_spend: f64,
    pub average_order_value: f64,
    pub orders_count: u32,
    pub last_order_date: NaiveDate,
    pub favorite_categories: Vec<String>,
    pub returns_count: u32,
}

impl CustomerAnalytics {
    /// Returned orders as a percentage of all orders
    pub fn return_rate_percent(&self) -> f64 {
        if self.orders_count == 0 {
            0.0
        } else {
            self.returns_count as f64 * 100.0 / self.orders_count as f64
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketingPreferences {
    pub email_subscribed: bool,
    pub sms_subscribed: bool,
    pub segments: Vec<String>,
    pub last_campaign: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Communication {
    pub date: NaiveDate,
    /// "email", "sms", "support"
    pub kind: String,
    pub subject: String,
    pub content: String,
}

/// Internal note left by staff on a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerNote {
    pub id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

impl CustomerNote {
    /// Blank notes are not created.
    pub fn new(content: &str, author: &str, now: DateTime<Utc>) -> Option<Self> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4(),
            content: content.to_string(),
            created_at: now,
            created_by: author.to_string(),
        })
    }

    /// "Sarah Johnson" -> "SJ"
    pub fn author_initials(&self) -> String {
        self.created_by
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect::<String>()
            .to_uppercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageChannel {
    #[default]
    Email,
    Sms,
}

impl MessageChannel {
    pub fn code(&self) -> &'static str {
        match self {
            MessageChannel::Email => "email",
            MessageChannel::Sms => "sms",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "sms" => MessageChannel::Sms,
            _ => MessageChannel::Email,
        }
    }
}

/// Outgoing message composed in the customer modal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerMessage {
    pub channel: MessageChannel,
    /// Only sent for email
    pub subject: String,
    pub content: String,
}

impl CustomerMessage {
    /// Address the message goes to: email or phone, depending on the channel.
    pub fn recipient<'a>(&self, info: &'a BasicInfo) -> &'a str {
        match self.channel {
            MessageChannel::Email => &info.email,
            MessageChannel::Sms => &info.phone,
        }
    }

    pub fn subject(&self) -> Option<&str> {
        match self.channel {
            MessageChannel::Email => Some(self.subject.as_str()),
            MessageChannel::Sms => None,
        }
    }
}

/// Full customer profile shown in the detail modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDetail {
    pub id: CustomerId,
    pub basic_info: BasicInfo,
    pub addresses: Addresses,
    pub order_history: Vec<OrderSummary>,
    pub analytics: CustomerAnalytics,
    pub marketing: MarketingPreferences,
    pub communications: Vec<Communication>,
    pub notes: Vec<CustomerNote>,
}

impl CustomerDetail {
    /// Export payload for the "Export" button
    pub fn to_export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn export_file_name(&self) -> String {
        format!("customer-{}.json", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_customers::fixtures;

    #[test]
    fn test_blank_note_is_rejected() {
        assert!(CustomerNote::new("   ", "Admin User", Utc::now()).is_none());
        let note = CustomerNote::new(" Call back ", "Sarah Johnson", Utc::now()).unwrap();
        assert_eq!(note.content, "Call back");
        assert_eq!(note.author_initials(), "SJ");
    }

    #[test]
    fn test_message_recipient_follows_channel() {
        let detail = fixtures::sample_customer_detail(&CustomerId::new("CUS-001"));
        let mut message = CustomerMessage {
            subject: "Hello".into(),
            content: "Hi".into(),
            ..Default::default()
        };
        assert_eq!(message.recipient(&detail.basic_info), "john@example.com");
        assert_eq!(message.subject(), Some("Hello"));

        message.channel = MessageChannel::Sms;
        assert_eq!(message.recipient(&detail.basic_info), "+1 (555) 123-4567");
        assert_eq!(message.subject(), None);
    }

    #[test]
    fn test_export_json() {
        let detail = fixtures::sample_customer_detail(&CustomerId::new("CUS-001"));
        let json = detail.to_export_json().unwrap();
        let back: CustomerDetail = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, detail.id);
        assert_eq!(detail.export_file_name(), "customer-CUS-001.json");
    }

    #[test]
    fn test_return_rate() {
        let detail = fixtures::sample_customer_detail(&CustomerId::new("CUS-001"));
        let rate = detail.analytics.return_rate_percent();
        assert!((rate - 100.0 / 15.0).abs() < 1e-9);
    }
}
