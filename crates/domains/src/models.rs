//! # Domain Models
//!
//! Stored entities and the small value types shared across the workspace.
//! Identity is a server-assigned auto-increment integer and `submitted_at`
//! is stamped by the storage backend, so neither appears on the draft types
//! in [`crate::submission`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which audience a registration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    #[serde(rename = "USER")]
    User,
    #[serde(rename = "Creator")]
    Creator,
}

impl UserType {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "USER" => Some(Self::User),
            "Creator" => Some(Self::Creator),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Creator => "Creator",
        }
    }
}

/// Whether a feedback author agreed to a follow-up contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactWilling {
    #[serde(rename = "yes")]
    Yes,
    #[serde(rename = "no")]
    No,
}

impl ContactWilling {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

/// A stored registration. Immutable once created; there is no update or
/// delete path anywhere in the system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRegistration {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gender: Option<String>,
    pub profession: Option<String>,
    pub user_type: UserType,
    pub submitted_at: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// A stored feedback submission.
///
/// Every question is optional. Each of the six ratings sits next to its
/// free-text issue field; the pairing matters to the validation contract,
/// not to storage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feedback {
    pub id: i64,
    pub visual_design: Option<i32>,
    pub ease_of_navigation: Option<i32>,
    pub mobile_responsiveness: Option<i32>,
    pub overall_satisfaction: Option<i32>,
    pub ease_of_tasks: Option<i32>,
    pub quality_of_services: Option<i32>,
    pub visual_design_issue: Option<String>,
    pub ease_of_navigation_issue: Option<String>,
    pub mobile_responsiveness_issue: Option<String>,
    pub overall_satisfaction_issue: Option<String>,
    pub ease_of_tasks_issue: Option<String>,
    pub quality_of_services_issue: Option<String>,
    pub like_most: Option<String>,
    pub improvements: Option<String>,
    pub features: Option<String>,
    pub legal_challenges: Option<String>,
    pub additional_comments: Option<String>,
    pub contact_willing: Option<ContactWilling>,
    pub contact_email: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// Request provenance captured at the HTTP boundary and stored verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionMeta {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// Offset pagination window. Bounds (`page >= 1`, `per_page` in 1..=100) are
/// enforced at the HTTP boundary before a `Page` is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: u32,
    pub per_page: u32,
}

impl Page {
    pub fn offset(&self) -> u64 {
        u64::from(self.page).saturating_sub(1) * u64::from(self.per_page)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self { page: 1, per_page: 50 }
    }
}

/// One page of entities plus the total count across all pages.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Listing<T> {
    /// Number of pages the store spans at the given page size.
    pub fn page_count(&self, per_page: u32) -> u64 {
        if per_page == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(per_page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_type_round_trips_external_tokens() {
        assert_eq!(UserType::from_token("USER"), Some(UserType::User));
        assert_eq!(UserType::from_token("Creator"), Some(UserType::Creator));
        assert_eq!(UserType::from_token("creator"), None);
        assert_eq!(UserType::Creator.as_str(), "Creator");
    }

    #[test]
    fn user_type_serializes_as_external_token() {
        assert_eq!(
            serde_json::to_value(UserType::User).unwrap(),
            serde_json::json!("USER")
        );
        assert_eq!(
            serde_json::to_value(ContactWilling::Yes).unwrap(),
            serde_json::json!("yes")
        );
    }

    #[test]
    fn page_offset_is_zero_based() {
        let page = Page { page: 3, per_page: 10 };
        assert_eq!(page.offset(), 20);
        assert_eq!(Page::default().offset(), 0);
    }

    #[test]
    fn page_count_rounds_up() {
        let listing = Listing::<()> { items: vec![], total: 11 };
        assert_eq!(listing.page_count(10), 2);
        let exact = Listing::<()> { items: vec![], total: 10 };
        assert_eq!(exact.page_count(10), 1);
        let empty = Listing::<()> { items: vec![], total: 0 };
        assert_eq!(empty.page_count(10), 0);
    }

    #[test]
    fn absent_optionals_serialize_as_explicit_null() {
        let reg = UserRegistration {
            id: 1,
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "5551234".into(),
            gender: None,
            profession: None,
            user_type: UserType::User,
            submitted_at: Utc::now(),
            ip_address: None,
            user_agent: None,
        };
        let json = serde_json::to_value(&reg).unwrap();
        assert!(json["gender"].is_null());
        assert!(json.get("profession").is_some());
    }
}
