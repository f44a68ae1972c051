//! Wire-format types.
//!
//! Request bodies accept both the canonical snake_case names and the
//! camelCase tokens the original web forms send. Every field is optional at
//! this layer; presence rules belong to the validation contract, not to
//! deserialization.

use chrono::{DateTime, Utc};
use domains::{Feedback, FeedbackDraft, Page, RegistrationDraft, UserRegistration};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub profession: Option<String>,
    #[serde(alias = "userType")]
    pub user_type: Option<String>,
}

impl RegisterRequest {
    pub fn into_draft(self) -> RegistrationDraft {
        RegistrationDraft {
            name: self.name,
            email: self.email,
            phone: self.phone,
            gender: self.gender,
            profession: self.profession,
            user_type: self.user_type,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackRequest {
    #[serde(alias = "visualDesign")]
    pub visual_design: Option<i64>,
    #[serde(alias = "easeOfNavigation")]
    pub ease_of_navigation: Option<i64>,
    #[serde(alias = "mobileResponsiveness")]
    pub mobile_responsiveness: Option<i64>,
    #[serde(alias = "overallSatisfaction")]
    pub overall_satisfaction: Option<i64>,
    #[serde(alias = "easeOfTasks")]
    pub ease_of_tasks: Option<i64>,
    #[serde(alias = "qualityOfServices")]
    pub quality_of_services: Option<i64>,
    #[serde(alias = "visualDesignIssue")]
    pub visual_design_issue: Option<String>,
    #[serde(alias = "easeOfNavigationIssue")]
    pub ease_of_navigation_issue: Option<String>,
    #[serde(alias = "mobileResponsivenessIssue")]
    pub mobile_responsiveness_issue: Option<String>,
    #[serde(alias = "overallSatisfactionIssue")]
    pub overall_satisfaction_issue: Option<String>,
    #[serde(alias = "easeOfTasksIssue")]
    pub ease_of_tasks_issue: Option<String>,
    #[serde(alias = "qualityOfServicesIssue")]
    pub quality_of_services_issue: Option<String>,
    #[serde(alias = "likeMost")]
    pub like_most: Option<String>,
    pub improvements: Option<String>,
    pub features: Option<String>,
    #[serde(alias = "legalChallenges")]
    pub legal_challenges: Option<String>,
    #[serde(alias = "additionalComments")]
    pub additional_comments: Option<String>,
    #[serde(alias = "contactWilling")]
    pub contact_willing: Option<String>,
    #[serde(alias = "contactEmail")]
    pub contact_email: Option<String>,
}

impl FeedbackRequest {
    pub fn into_draft(self) -> FeedbackDraft {
        FeedbackDraft {
            visual_design: self.visual_design,
            ease_of_navigation: self.ease_of_navigation,
            mobile_responsiveness: self.mobile_responsiveness,
            overall_satisfaction: self.overall_satisfaction,
            ease_of_tasks: self.ease_of_tasks,
            quality_of_services: self.quality_of_services,
            visual_design_issue: self.visual_design_issue,
            ease_of_navigation_issue: self.ease_of_navigation_issue,
            mobile_responsiveness_issue: self.mobile_responsiveness_issue,
            overall_satisfaction_issue: self.overall_satisfaction_issue,
            ease_of_tasks_issue: self.ease_of_tasks_issue,
            quality_of_services_issue: self.quality_of_services_issue,
            like_most: self.like_most,
            improvements: self.improvements,
            features: self.features,
            legal_challenges: self.legal_challenges,
            additional_comments: self.additional_comments,
            contact_willing: self.contact_willing,
            contact_email: self.contact_email,
        }
    }
}

/// Pagination query params with the original defaults.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    50
}

impl PageQuery {
    /// Enforces the boundary bounds: `page >= 1`, `per_page` in 1..=100.
    pub fn into_page(self) -> Result<Page, ApiError> {
        if self.page < 1 {
            return Err(ApiError::BadRequest("page must be at least 1".into()));
        }
        if !(1..=100).contains(&self.per_page) {
            return Err(ApiError::BadRequest(
                "per_page must be between 1 and 100".into(),
            ));
        }
        Ok(Page {
            page: self.page,
            per_page: self.per_page,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct SuccessBody {
    pub message: String,
    pub id: i64,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct HealthBody {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct HomeBody {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct RegistrationListBody {
    pub total: u64,
    pub pages: u64,
    pub current_page: u32,
    pub per_page: u32,
    pub registrations: Vec<UserRegistration>,
}

#[derive(Debug, Serialize)]
pub struct FeedbackListBody {
    pub total: u64,
    pub pages: u64,
    pub current_page: u32,
    pub per_page: u32,
    pub feedback: Vec<Feedback>,
}
