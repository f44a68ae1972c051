//! MySQL-backed implementation of `FeedbackRepo`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domains::{
    ContactWilling, Feedback, FeedbackRepo, Listing, NewFeedback, Page, Result, SubmissionMeta,
};
use sqlx::mysql::{MySqlPool, MySqlRow};
use sqlx::Row;

use crate::db_error;

const COLUMNS: &str = "id, visual_design, ease_of_navigation, mobile_responsiveness, \
                       overall_satisfaction, ease_of_tasks, quality_of_services, \
                       visual_design_issue, ease_of_navigation_issue, mobile_responsiveness_issue, \
                       overall_satisfaction_issue, ease_of_tasks_issue, quality_of_services_issue, \
                       like_most, improvements, features, legal_challenges, additional_comments, \
                       contact_willing, contact_email, submitted_at, ip_address, user_agent";

pub struct MySqlFeedbackRepo {
    pool: MySqlPool,
}

impl MySqlFeedbackRepo {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackRepo for MySqlFeedbackRepo {
    async fn insert(&self, record: NewFeedback, meta: SubmissionMeta) -> Result<Feedback> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("feedback insert: begin", e))?;

        let result = sqlx::query(
            "INSERT INTO feedback \
             (visual_design, ease_of_navigation, mobile_responsiveness, overall_satisfaction, \
              ease_of_tasks, quality_of_services, visual_design_issue, ease_of_navigation_issue, \
              mobile_responsiveness_issue, overall_satisfaction_issue, ease_of_tasks_issue, \
              quality_of_services_issue, like_most, improvements, features, legal_challenges, \
              additional_comments, contact_willing, contact_email, ip_address, user_agent) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(record.visual_design)
        .bind(record.ease_of_navigation)
        .bind(record.mobile_responsiveness)
        .bind(record.overall_satisfaction)
        .bind(record.ease_of_tasks)
        .bind(record.quality_of_services)
        .bind(record.visual_design_issue)
        .bind(record.ease_of_navigation_issue)
        .bind(record.mobile_responsiveness_issue)
        .bind(record.overall_satisfaction_issue)
        .bind(record.ease_of_tasks_issue)
        .bind(record.quality_of_services_issue)
        .bind(record.like_most)
        .bind(record.improvements)
        .bind(record.features)
        .bind(record.legal_challenges)
        .bind(record.additional_comments)
        .bind(record.contact_willing.map(|c| c.as_str()))
        .bind(record.contact_email)
        .bind(meta.ip_address)
        .bind(meta.user_agent)
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("feedback insert", e))?;

        let id = result.last_insert_id() as i64;
        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM feedback WHERE id = ?"))
            .bind(id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| db_error("feedback insert: read back", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("feedback insert: commit", e))?;

        map_row(&row).map_err(|e| db_error("feedback insert: decode", e))
    }

    async fn list(&self, page: Page) -> Result<Listing<Feedback>> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| db_error("feedback list: acquire", e))?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM feedback")
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| db_error("feedback list: count", e))?;

        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM feedback ORDER BY submitted_at DESC, id DESC LIMIT ? OFFSET ?"
        ))
        .bind(i64::from(page.per_page))
        .bind(page.offset() as i64)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| db_error("feedback list", e))?;

        let items = rows
            .iter()
            .map(map_row)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| db_error("feedback list: decode", e))?;

        Ok(Listing {
            items,
            total: total as u64,
        })
    }

    async fn list_all(&self) -> Result<Vec<Feedback>> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM feedback ORDER BY submitted_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("feedback list_all", e))?;

        rows.iter()
            .map(map_row)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| db_error("feedback list_all: decode", e))
    }
}

fn map_row(row: &MySqlRow) -> anyhow::Result<Feedback> {
    let contact_willing = match row.try_get::<Option<String>, _>("contact_willing")? {
        None => None,
        Some(token) => Some(ContactWilling::from_token(&token).ok_or_else(|| {
            anyhow::anyhow!("unrecognized contact_willing {token:?} in stored row")
        })?),
    };
    let submitted_at: DateTime<Utc> = row.try_get("submitted_at")?;

    Ok(Feedback {
        id: row.try_get("id")?,
        visual_design: row.try_get("visual_design")?,
        ease_of_navigation: row.try_get("ease_of_navigation")?,
        mobile_responsiveness: row.try_get("mobile_responsiveness")?,
        overall_satisfaction: row.try_get("overall_satisfaction")?,
        ease_of_tasks: row.try_get("ease_of_tasks")?,
        quality_of_services: row.try_get("quality_of_services")?,
        visual_design_issue: row.try_get("visual_design_issue")?,
        ease_of_navigation_issue: row.try_get("ease_of_navigation_issue")?,
        mobile_responsiveness_issue: row.try_get("mobile_responsiveness_issue")?,
        overall_satisfaction_issue: row.try_get("overall_satisfaction_issue")?,
        ease_of_tasks_issue: row.try_get("ease_of_tasks_issue")?,
        quality_of_services_issue: row.try_get("quality_of_services_issue")?,
        like_most: row.try_get("like_most")?,
        improvements: row.try_get("improvements")?,
        features: row.try_get("features")?,
        legal_challenges: row.try_get("legal_challenges")?,
        additional_comments: row.try_get("additional_comments")?,
        contact_willing,
        contact_email: row.try_get("contact_email")?,
        submitted_at,
        ip_address: row.try_get("ip_address")?,
        user_agent: row.try_get("user_agent")?,
    })
}
