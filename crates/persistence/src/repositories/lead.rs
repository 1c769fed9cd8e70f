//! Lead repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::LeadEntity;
use crate::metrics::QueryTimer;

/// Equality filters for listing leads. `None` means no filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadFilter {
    pub status_id: Option<Uuid>,
    pub assigned_to: Option<Uuid>,
}

/// Repository for lead database operations. Read-only.
#[derive(Clone)]
pub struct LeadRepository {
    pool: PgPool,
}

impl LeadRepository {
    /// Creates a new LeadRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Leads matching the filter, newest first.
    pub async fn list(&self, filter: LeadFilter) -> Result<Vec<LeadEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_leads");
        let result = sqlx::query_as::<_, LeadEntity>(
            r#"
            SELECT id, name, company, job_title, status_id, assigned_to, created_at
            FROM leads
            WHERE ($1::uuid IS NULL OR status_id = $1)
              AND ($2::uuid IS NULL OR assigned_to = $2)
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(filter.status_id)
        .bind(filter.assigned_to)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
