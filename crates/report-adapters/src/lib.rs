//! # report-adapters
//!
//! Renders the full data set into an xlsx workbook: one sheet per entity
//! kind, styled header row, one row per stored record. Consumes the Query
//! Contract's enumeration only; it never talks to storage itself.

use chrono::{DateTime, Utc};
use domains::{Feedback, IntakeError, ReportRenderer, Result, UserRegistration};
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, XlsxError};

const REGISTRATION_HEADERS: [&str; 9] = [
    "ID",
    "Name",
    "Email",
    "Phone",
    "Gender",
    "Profession",
    "User Type",
    "Submitted At",
    "IP Address",
];

const FEEDBACK_HEADERS: [&str; 22] = [
    "ID",
    "Visual Design",
    "Visual Design Issue",
    "Ease of Navigation",
    "Navigation Issue",
    "Mobile Responsiveness",
    "Mobile Issue",
    "Overall Satisfaction",
    "Satisfaction Issue",
    "Ease of Tasks",
    "Tasks Issue",
    "Quality of Services",
    "Services Issue",
    "Like Most",
    "Improvements",
    "Features",
    "Legal Challenges",
    "Additional Comments",
    "Contact Willing",
    "Contact Email",
    "Submitted At",
    "IP Address",
];

pub struct XlsxReportRenderer;

impl ReportRenderer for XlsxReportRenderer {
    fn render(&self, registrations: &[UserRegistration], feedback: &[Feedback]) -> Result<Vec<u8>> {
        build_workbook(registrations, feedback).map_err(|e| {
            tracing::error!(error = ?e, "workbook rendering failed");
            IntakeError::report(e)
        })
    }
}

fn build_workbook(
    registrations: &[UserRegistration],
    feedback: &[Feedback],
) -> std::result::Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(0x366092))
        .set_align(FormatAlign::Center);

    let sheet = workbook.add_worksheet();
    sheet.set_name("User Registrations")?;
    for (col, title) in REGISTRATION_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &header_format)?;
    }
    for (i, reg) in registrations.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_number(row, 0, reg.id as f64)?;
        sheet.write_string(row, 1, &reg.name)?;
        sheet.write_string(row, 2, &reg.email)?;
        sheet.write_string(row, 3, &reg.phone)?;
        write_opt(sheet, row, 4, reg.gender.as_deref())?;
        write_opt(sheet, row, 5, reg.profession.as_deref())?;
        sheet.write_string(row, 6, reg.user_type.as_str())?;
        sheet.write_string(row, 7, timestamp(&reg.submitted_at))?;
        write_opt(sheet, row, 8, reg.ip_address.as_deref())?;
    }
    sheet.autofit();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Feedback Submissions")?;
    for (col, title) in FEEDBACK_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &header_format)?;
    }
    for (i, fb) in feedback.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_number(row, 0, fb.id as f64)?;
        write_rating(sheet, row, 1, fb.visual_design)?;
        write_opt(sheet, row, 2, fb.visual_design_issue.as_deref())?;
        write_rating(sheet, row, 3, fb.ease_of_navigation)?;
        write_opt(sheet, row, 4, fb.ease_of_navigation_issue.as_deref())?;
        write_rating(sheet, row, 5, fb.mobile_responsiveness)?;
        write_opt(sheet, row, 6, fb.mobile_responsiveness_issue.as_deref())?;
        write_rating(sheet, row, 7, fb.overall_satisfaction)?;
        write_opt(sheet, row, 8, fb.overall_satisfaction_issue.as_deref())?;
        write_rating(sheet, row, 9, fb.ease_of_tasks)?;
        write_opt(sheet, row, 10, fb.ease_of_tasks_issue.as_deref())?;
        write_rating(sheet, row, 11, fb.quality_of_services)?;
        write_opt(sheet, row, 12, fb.quality_of_services_issue.as_deref())?;
        write_opt(sheet, row, 13, fb.like_most.as_deref())?;
        write_opt(sheet, row, 14, fb.improvements.as_deref())?;
        write_opt(sheet, row, 15, fb.features.as_deref())?;
        write_opt(sheet, row, 16, fb.legal_challenges.as_deref())?;
        write_opt(sheet, row, 17, fb.additional_comments.as_deref())?;
        write_opt(sheet, row, 18, fb.contact_willing.map(|c| c.as_str()))?;
        write_opt(sheet, row, 19, fb.contact_email.as_deref())?;
        sheet.write_string(row, 20, timestamp(&fb.submitted_at))?;
        write_opt(sheet, row, 21, fb.ip_address.as_deref())?;
    }
    sheet.autofit();

    workbook.save_to_buffer()
}

fn write_opt(
    sheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    value: Option<&str>,
) -> std::result::Result<(), XlsxError> {
    if let Some(v) = value {
        sheet.write_string(row, col, v)?;
    }
    Ok(())
}

fn write_rating(
    sheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    value: Option<i32>,
) -> std::result::Result<(), XlsxError> {
    if let Some(v) = value {
        sheet.write_number(row, col, f64::from(v))?;
    }
    Ok(())
}

fn timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}
