//! Database access: a shared MySQL pool plus the read queries this
//! application issues. All statements are parameterized; user input is only
//! ever bound, never spliced into SQL text.

use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use sqlx::{mysql::MySqlPoolOptions, FromRow, MySqlPool};
use tracing::instrument;

/// One row of the externally-owned `patients` table. Optional fields
/// tolerate NULLs; the schema itself belongs to the database.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Patient {
    pub patient_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub language: Option<String>,
}

/// One row of the externally-owned `providers` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Provider {
    pub provider_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub provider_specialty: String,
    pub email_address: Option<String>,
    pub phone_number: Option<String>,
    pub date_joined: Option<NaiveDate>,
}

#[derive(Clone)]
pub struct Db {
    pub pool: MySqlPool,
}

impl Db {
    /// Build the pool without connecting. Connections are opened on first
    /// use, so an unreachable database surfaces at query time rather than
    /// killing startup.
    // SECURITY: never include raw DSNs in tracing spans (they may contain credentials).
    #[instrument(skip(database_url))]
    pub fn connect_lazy(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(600))
            .connect_lazy(database_url)?;
        Ok(Self { pool })
    }

    /// One-shot connectivity check. A failure leaves the pool in place;
    /// queries keep failing until the database becomes reachable.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn all_patients(&self) -> Result<Vec<Patient>> {
        let rows = sqlx::query_as::<_, Patient>("SELECT * FROM patients")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Substring match on first name. The pattern wraps the input in `%`;
    /// literal `%`/`_` inside the input act as SQL wildcards (see
    /// [`like_pattern`]).
    pub async fn search_patients(&self, first_name: &str) -> Result<Vec<Patient>> {
        let rows = sqlx::query_as::<_, Patient>("SELECT * FROM patients WHERE first_name LIKE ?")
            .bind(like_pattern(first_name))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn all_providers(&self) -> Result<Vec<Provider>> {
        let rows = sqlx::query_as::<_, Provider>("SELECT * FROM providers")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Exact match on specialty; no wildcard wrapping.
    pub async fn providers_by_specialty(&self, specialty: &str) -> Result<Vec<Provider>> {
        let rows =
            sqlx::query_as::<_, Provider>("SELECT * FROM providers WHERE provider_specialty = ?")
                .bind(specialty)
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }
}

/// Wrap user input in `%` wildcards for a LIKE substring match. An empty
/// input yields `%%`, which matches every row. Literal `%` and `_` in the
/// input are deliberately not escaped; they keep their SQL wildcard meaning.
pub fn like_pattern(input: &str) -> String {
    format!("%{input}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_input_in_wildcards() {
        assert_eq!(like_pattern("Jo"), "%Jo%");
    }

    #[test]
    fn empty_input_matches_everything() {
        assert_eq!(like_pattern(""), "%%");
    }

    #[test]
    fn literal_wildcards_pass_through_unescaped() {
        assert_eq!(like_pattern("a%b_c"), "%a%b_c%");
    }
}
