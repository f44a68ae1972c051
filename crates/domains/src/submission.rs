//! # Submission validation
//!
//! The validation contract: raw drafts in, normalized records (or a full list
//! of field violations) out. Normalization runs first (free text is trimmed,
//! and a field that becomes empty is treated as absent), then every rule is
//! checked, so a caller sees all rejected fields in one pass rather than just
//! the first.

use validator::ValidateEmail;

use crate::error::{FieldViolation, ViolationKind};
use crate::models::{ContactWilling, UserType};

/// Rating/issue pairs in canonical order, with the label used in
/// justification messages.
const RATING_LABELS: [(&str, &str); 6] = [
    ("visual_design", "visual design"),
    ("ease_of_navigation", "ease of navigation"),
    ("mobile_responsiveness", "mobile responsiveness"),
    ("overall_satisfaction", "overall satisfaction"),
    ("ease_of_tasks", "ease of tasks"),
    ("quality_of_services", "quality of services"),
];

/// A registration as submitted, before any rule has run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub profession: Option<String>,
    pub user_type: Option<String>,
}

/// A registration that passed validation, ready for the persistence port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRegistration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gender: Option<String>,
    pub profession: Option<String>,
    pub user_type: UserType,
}

impl RegistrationDraft {
    /// Normalizes and validates the draft. On failure the returned list is
    /// non-empty and covers every rejected field.
    pub fn validate(self) -> Result<NewRegistration, Vec<FieldViolation>> {
        let mut errors = Vec::new();

        let name = required_text("name", self.name, 255, &mut errors);
        let email = match normalize(self.email) {
            None => {
                errors.push(required("email"));
                None
            }
            Some(v) if !v.validate_email() => {
                errors.push(FieldViolation::new(
                    "email",
                    ViolationKind::InvalidFormat,
                    "not a valid email address",
                ));
                None
            }
            Some(v) => Some(v),
        };
        let phone = required_text("phone", self.phone, 20, &mut errors);
        let gender = optional_text("gender", self.gender, 50, &mut errors);
        let profession = optional_text("profession", self.profession, 255, &mut errors);
        let user_type = match normalize(self.user_type) {
            None => {
                errors.push(required("user_type"));
                None
            }
            Some(token) => match UserType::from_token(&token) {
                Some(t) => Some(t),
                None => {
                    errors.push(FieldViolation::new(
                        "user_type",
                        ViolationKind::InvalidEnumValue,
                        format!("must be one of \"USER\" or \"Creator\", got \"{token}\""),
                    ));
                    None
                }
            },
        };

        match (name, email, phone, user_type) {
            (Some(name), Some(email), Some(phone), Some(user_type)) if errors.is_empty() => {
                Ok(NewRegistration {
                    name,
                    email,
                    phone,
                    gender,
                    profession,
                    user_type,
                })
            }
            _ => Err(errors),
        }
    }
}

/// A feedback submission as received. Ratings stay wide integers until the
/// range rule has narrowed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackDraft {
    pub visual_design: Option<i64>,
    pub ease_of_navigation: Option<i64>,
    pub mobile_responsiveness: Option<i64>,
    pub overall_satisfaction: Option<i64>,
    pub ease_of_tasks: Option<i64>,
    pub quality_of_services: Option<i64>,
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
    pub contact_willing: Option<String>,
    pub contact_email: Option<String>,
}

/// A validated feedback record, ready for the persistence port.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewFeedback {
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
}

impl FeedbackDraft {
    pub fn validate(self) -> Result<NewFeedback, Vec<FieldViolation>> {
        let mut errors = Vec::new();

        let ratings = [
            check_rating("visual_design", self.visual_design, &mut errors),
            check_rating("ease_of_navigation", self.ease_of_navigation, &mut errors),
            check_rating("mobile_responsiveness", self.mobile_responsiveness, &mut errors),
            check_rating("overall_satisfaction", self.overall_satisfaction, &mut errors),
            check_rating("ease_of_tasks", self.ease_of_tasks, &mut errors),
            check_rating("quality_of_services", self.quality_of_services, &mut errors),
        ];

        let issues = [
            normalize(self.visual_design_issue),
            normalize(self.ease_of_navigation_issue),
            normalize(self.mobile_responsiveness_issue),
            normalize(self.overall_satisfaction_issue),
            normalize(self.ease_of_tasks_issue),
            normalize(self.quality_of_services_issue),
        ];

        // A rating of 1 or 2 must come with an explanation. Ratings that are
        // absent or already rejected by the range rule are skipped here.
        for (i, (_, label)) in RATING_LABELS.iter().enumerate() {
            if matches!(ratings[i], Some(r) if r < 3) && issues[i].is_none() {
                errors.push(FieldViolation::new(
                    ISSUE_FIELDS[i],
                    ViolationKind::MissingJustification,
                    format!("please explain what you didn't like about {label} (rating below 3)"),
                ));
            }
        }

        let contact_willing = match normalize(self.contact_willing) {
            None => None,
            Some(token) => match ContactWilling::from_token(&token) {
                Some(c) => Some(c),
                None => {
                    errors.push(FieldViolation::new(
                        "contact_willing",
                        ViolationKind::InvalidEnumValue,
                        format!("must be one of \"yes\" or \"no\", got \"{token}\""),
                    ));
                    None
                }
            },
        };

        let contact_email = normalize(self.contact_email);
        if contact_willing == Some(ContactWilling::Yes) && contact_email.is_none() {
            errors.push(FieldViolation::new(
                "contact_email",
                ViolationKind::RequiredFieldMissing,
                "an email address is required when willing to be contacted",
            ));
        }
        if let Some(email) = &contact_email {
            if !email.as_str().validate_email() {
                errors.push(FieldViolation::new(
                    "contact_email",
                    ViolationKind::InvalidFormat,
                    "not a valid email address",
                ));
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let [visual_design, ease_of_navigation, mobile_responsiveness, overall_satisfaction, ease_of_tasks, quality_of_services] =
            ratings;
        let [visual_design_issue, ease_of_navigation_issue, mobile_responsiveness_issue, overall_satisfaction_issue, ease_of_tasks_issue, quality_of_services_issue] =
            issues;

        Ok(NewFeedback {
            visual_design,
            ease_of_navigation,
            mobile_responsiveness,
            overall_satisfaction,
            ease_of_tasks,
            quality_of_services,
            visual_design_issue,
            ease_of_navigation_issue,
            mobile_responsiveness_issue,
            overall_satisfaction_issue,
            ease_of_tasks_issue,
            quality_of_services_issue,
            like_most: normalize(self.like_most),
            improvements: normalize(self.improvements),
            features: normalize(self.features),
            legal_challenges: normalize(self.legal_challenges),
            additional_comments: normalize(self.additional_comments),
            contact_willing,
            contact_email,
        })
    }
}

/// Issue field names, index-aligned with [`RATING_LABELS`].
const ISSUE_FIELDS: [&str; 6] = [
    "visual_design_issue",
    "ease_of_navigation_issue",
    "mobile_responsiveness_issue",
    "overall_satisfaction_issue",
    "ease_of_tasks_issue",
    "quality_of_services_issue",
];

/// Trims the value; a field that becomes empty is treated as absent.
fn normalize(raw: Option<String>) -> Option<String> {
    let trimmed = raw?.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

fn required(field: &'static str) -> FieldViolation {
    FieldViolation::new(field, ViolationKind::RequiredFieldMissing, "this field is required")
}

fn required_text(
    field: &'static str,
    raw: Option<String>,
    max_chars: usize,
    errors: &mut Vec<FieldViolation>,
) -> Option<String> {
    match normalize(raw) {
        None => {
            errors.push(required(field));
            None
        }
        Some(v) if v.chars().count() > max_chars => {
            errors.push(too_long(field, max_chars));
            None
        }
        Some(v) => Some(v),
    }
}

fn optional_text(
    field: &'static str,
    raw: Option<String>,
    max_chars: usize,
    errors: &mut Vec<FieldViolation>,
) -> Option<String> {
    match normalize(raw) {
        Some(v) if v.chars().count() > max_chars => {
            errors.push(too_long(field, max_chars));
            None
        }
        other => other,
    }
}

fn too_long(field: &'static str, max_chars: usize) -> FieldViolation {
    FieldViolation::new(
        field,
        ViolationKind::LengthExceeded,
        format!("must be at most {max_chars} characters"),
    )
}

fn check_rating(
    field: &'static str,
    value: Option<i64>,
    errors: &mut Vec<FieldViolation>,
) -> Option<i32> {
    match value {
        None => None,
        Some(v) if (1..=5).contains(&v) => Some(v as i32),
        Some(v) => {
            errors.push(FieldViolation::new(
                field,
                ViolationKind::OutOfRange,
                format!("must be between 1 and 5, got {v}"),
            ));
            None
        }
    }
}
