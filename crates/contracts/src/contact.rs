//! Contact form payload and its hand-off to the visitor's mail client.

use serde::{Deserialize, Serialize};

pub const CONTACT_TOPICS: &[&str] = &[
    "Prop-Firm Evaluation Coaching",
    "Custom NinjaTrader Tools",
    "Trade Plan & Discipline Systems",
    "Something else",
];

/// What the visitor typed. Every field is opaque text; nothing is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub topic: String,
    pub message: String,
}

impl ContactRequest {
    pub fn subject(&self) -> String {
        if self.topic.is_empty() {
            "Discovery call request".to_string()
        } else {
            format!("Discovery call: {}", self.topic)
        }
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nPhone: {}\nTopic: {}\n\n{}",
            self.name, self.email, self.phone, self.topic, self.message
        )
    }

    /// `mailto:` URL with subject and body percent-encoded.
    pub fn mailto_url(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&self.body())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ContactRequest {
        ContactRequest {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+1 555 0100".to_string(),
            topic: CONTACT_TOPICS[0].to_string(),
            message: "Two evals failed on drawdown & I need a plan.".to_string(),
        }
    }

    #[test]
    fn test_subject_uses_topic() {
        assert_eq!(sample().subject(), "Discovery call: Prop-Firm Evaluation Coaching");
        assert_eq!(ContactRequest::default().subject(), "Discovery call request");
    }

    #[test]
    fn test_mailto_url_is_encoded() {
        let url = sample().mailto_url("info@mkwtrading.com");
        assert!(url.starts_with(
            "mailto:info@mkwtrading.com?subject=Discovery%20call%3A%20Prop-Firm%20Evaluation%20Coaching&body="
        ));
        assert!(url.contains("Name%3A%20Jane%20Doe%0A"));
        assert!(url.contains("drawdown%20%26%20I"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_empty_request_still_builds_url() {
        let url = ContactRequest::default().mailto_url("info@mkwtrading.com");
        assert!(url.starts_with("mailto:info@mkwtrading.com?subject=Discovery%20call%20request"));
    }

    #[test]
    fn test_payload_serializes_with_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        for key in ["name", "email", "phone", "topic", "message"] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
    }
}
