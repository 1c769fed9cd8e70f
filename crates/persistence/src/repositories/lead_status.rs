//! Lead status pipeline repository.

use sqlx::PgPool;

use crate::entities::LeadStatusEntity;
use crate::metrics::QueryTimer;

#[derive(Clone)]
pub struct LeadStatusRepository {
    pool: PgPool,
}

impl LeadStatusRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The pipeline ordered by `order_index`.
    pub async fn list_all(&self) -> Result<Vec<LeadStatusEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_lead_statuses");
        let result = sqlx::query_as::<_, LeadStatusEntity>(
            r#"
            SELECT id, name, order_index, color
            FROM lead_status_pipeline
            ORDER BY order_index ASC, name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
