//! PostgreSQL implementation of ProposalStore.
//!
//! Persists proposals to the `proposals` table, one row per proposal.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, Row};

use crate::domain::foundation::{ProposalId, Timestamp, UserId};
use crate::domain::proposal::{
    NewProposal, PropertyType, Proposal, ProposalDetails, ProposalStatus, StoredAmount,
};
use crate::ports::{ProposalStore, StoreError};

const SELECT_COLUMNS: &str = r#"
    SELECT id, owner_id, client_name, client_email, client_phone, work_address,
           amount, property_type, category, sub_category, include_materials,
           include_vat, general_info, start_date, validity_period, status, created_at
    FROM proposals
"#;

/// PostgreSQL implementation of ProposalStore.
#[derive(Clone)]
pub struct PostgresProposalStore {
    pool: PgPool,
}

impl PostgresProposalStore {
    /// Creates a new PostgresProposalStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProposalStore for PostgresProposalStore {
    async fn create(&self, proposal: NewProposal) -> Result<Proposal, StoreError> {
        let id = ProposalId::generate();
        let d = &proposal.details;

        let row = sqlx::query(
            r#"
            INSERT INTO proposals (
                id, owner_id, client_name, client_email, client_phone, work_address,
                amount, property_type, category, sub_category, include_materials,
                include_vat, general_info, start_date, validity_period, status
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING created_at
            "#,
        )
        .bind(id.as_str())
        .bind(proposal.owner_id.as_str())
        .bind(&d.client_name)
        .bind(&d.client_email)
        .bind(&d.client_phone)
        .bind(&d.work_address)
        .bind(d.amount.as_stored())
        .bind(d.property_type.label())
        .bind(&d.category)
        .bind(&d.sub_category)
        .bind(d.include_materials)
        .bind(d.include_vat)
        .bind(&d.general_info)
        .bind(d.start_date)
        .bind(&d.validity_period)
        .bind(ProposalStatus::Draft.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to insert proposal");
            StoreError::Unavailable(format!("Failed to insert proposal: {}", e))
        })?;

        let created_at: Option<DateTime<Utc>> = row
            .try_get("created_at")
            .map_err(|e| corrupt("created_at", e))?;
        let created_at = created_at.map(Timestamp::from_datetime).unwrap_or_default();

        Ok(proposal.into_proposal(id, created_at))
    }

    async fn get_by_id(&self, id: &ProposalId) -> Result<Option<Proposal>, StoreError> {
        let query = format!("{} WHERE id = $1", SELECT_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, proposal_id = %id, "Failed to fetch proposal");
                StoreError::Unavailable(format!("Failed to fetch proposal: {}", e))
            })?;

        row.map(row_to_proposal).transpose()
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Proposal>, StoreError> {
        let query = format!("{} WHERE owner_id = $1", SELECT_COLUMNS);
        let rows = sqlx::query(&query)
            .bind(owner_id.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, owner_id = %owner_id, "Failed to list proposals");
                StoreError::Unavailable(format!("Failed to list proposals: {}", e))
            })?;

        rows.into_iter().map(row_to_proposal).collect()
    }

    async fn update_status(
        &self,
        id: &ProposalId,
        expected: ProposalStatus,
        new_status: ProposalStatus,
    ) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE proposals SET status = $3 WHERE id = $1 AND status = $2")
            .bind(id.as_str())
            .bind(expected.as_str())
            .bind(new_status.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, proposal_id = %id, "Failed to update proposal status");
                StoreError::Unavailable(format!("Failed to update proposal status: {}", e))
            })?;

        if result.rows_affected() == 1 {
            return Ok(());
        }

        // Nothing matched: either the row is gone or its status moved on.
        let current: Option<String> = sqlx::query_scalar("SELECT status FROM proposals WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?;

        match current {
            None => Err(StoreError::NotFound(id.clone())),
            Some(status) => Err(StoreError::Conflict {
                current: str_to_status(&status)?,
                requested: new_status,
            }),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn corrupt(column: &str, err: impl std::fmt::Display) -> StoreError {
    StoreError::Unavailable(format!("Invalid value in column {}: {}", column, err))
}

fn str_to_status(s: &str) -> Result<ProposalStatus, StoreError> {
    s.parse::<ProposalStatus>().map_err(|e| corrupt("status", e))
}

fn str_to_property_type(s: &str) -> Result<PropertyType, StoreError> {
    s.parse::<PropertyType>()
        .map_err(|e| corrupt("property_type", e))
}

fn get<'r, T>(row: &'r sqlx::postgres::PgRow, column: &str) -> Result<T, StoreError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(column).map_err(|e| corrupt(column, e))
}

fn row_to_proposal(row: sqlx::postgres::PgRow) -> Result<Proposal, StoreError> {
    let id: String = get(&row, "id")?;
    let owner_id: String = get(&row, "owner_id")?;
    let amount: String = get(&row, "amount")?;
    let property_type: String = get(&row, "property_type")?;
    let start_date: Option<NaiveDate> = get(&row, "start_date")?;
    let status: String = get(&row, "status")?;
    let created_at: Option<DateTime<Utc>> = get(&row, "created_at")?;

    let details = ProposalDetails {
        client_name: get(&row, "client_name")?,
        client_email: get(&row, "client_email")?,
        client_phone: get(&row, "client_phone")?,
        work_address: get(&row, "work_address")?,
        amount: StoredAmount::from_stored(&amount),
        property_type: str_to_property_type(&property_type)?,
        category: get(&row, "category")?,
        sub_category: get(&row, "sub_category")?,
        include_materials: get(&row, "include_materials")?,
        include_vat: get(&row, "include_vat")?,
        general_info: get(&row, "general_info")?,
        start_date,
        validity_period: get(&row, "validity_period")?,
    };

    Ok(Proposal::reconstitute(
        ProposalId::new(id).map_err(|e| corrupt("id", e))?,
        UserId::new(owner_id).map_err(|e| corrupt("owner_id", e))?,
        details,
        str_to_status(&status)?,
        created_at.map(Timestamp::from_datetime),
    ))
}
