//! MySQL-backed implementation of `RegistrationRepo`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domains::{
    Listing, NewRegistration, Page, RegistrationRepo, Result, SubmissionMeta, UserRegistration,
    UserType,
};
use sqlx::mysql::{MySqlPool, MySqlRow};
use sqlx::Row;

use crate::db_error;

const COLUMNS: &str = "id, name, email, phone, gender, profession, user_type, \
                       submitted_at, ip_address, user_agent";

pub struct MySqlRegistrationRepo {
    pool: MySqlPool,
}

impl MySqlRegistrationRepo {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationRepo for MySqlRegistrationRepo {
    /// Insert and read-back run in one transaction so the caller either gets
    /// the stored entity (id and timestamp assigned by the database) or no
    /// row exists at all.
    async fn insert(
        &self,
        record: NewRegistration,
        meta: SubmissionMeta,
    ) -> Result<UserRegistration> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("registration insert: begin", e))?;

        let result = sqlx::query(
            "INSERT INTO user_registrations \
             (name, email, phone, gender, profession, user_type, ip_address, user_agent) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(record.name)
        .bind(record.email)
        .bind(record.phone)
        .bind(record.gender)
        .bind(record.profession)
        .bind(record.user_type.as_str())
        .bind(meta.ip_address)
        .bind(meta.user_agent)
        .execute(&mut *tx)
        .await
        .map_err(|e| db_error("registration insert", e))?;

        let id = result.last_insert_id() as i64;
        let row = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM user_registrations WHERE id = ?"
        ))
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| db_error("registration insert: read back", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("registration insert: commit", e))?;

        map_row(&row).map_err(|e| db_error("registration insert: decode", e))
    }

    async fn list(&self, page: Page) -> Result<Listing<UserRegistration>> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| db_error("registration list: acquire", e))?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_registrations")
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| db_error("registration list: count", e))?;

        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM user_registrations \
             ORDER BY submitted_at DESC, id DESC LIMIT ? OFFSET ?"
        ))
        .bind(i64::from(page.per_page))
        .bind(page.offset() as i64)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| db_error("registration list", e))?;

        let items = rows
            .iter()
            .map(map_row)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| db_error("registration list: decode", e))?;

        Ok(Listing {
            items,
            total: total as u64,
        })
    }

    async fn list_all(&self) -> Result<Vec<UserRegistration>> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM user_registrations ORDER BY submitted_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("registration list_all", e))?;

        rows.iter()
            .map(map_row)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| db_error("registration list_all: decode", e))
    }
}

fn map_row(row: &MySqlRow) -> anyhow::Result<UserRegistration> {
    let token: String = row.try_get("user_type")?;
    let user_type = UserType::from_token(&token)
        .ok_or_else(|| anyhow::anyhow!("unrecognized user_type {token:?} in stored row"))?;
    let submitted_at: DateTime<Utc> = row.try_get("submitted_at")?;

    Ok(UserRegistration {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        gender: row.try_get("gender")?,
        profession: row.try_get("profession")?,
        user_type,
        submitted_at,
        ip_address: row.try_get("ip_address")?,
        user_agent: row.try_get("user_agent")?,
    })
}
