//! Salesperson repository for database operations.

use sqlx::PgPool;

use crate::entities::SalesPersonEntity;
use crate::metrics::QueryTimer;

/// Repository for salesperson accounts. Read-only.
#[derive(Clone)]
pub struct SalesPersonRepository {
    pool: PgPool,
}

impl SalesPersonRepository {
    /// Creates a new SalesPersonRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All salespersons, newest first.
    pub async fn list_all(&self) -> Result<Vec<SalesPersonEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_sales_persons");
        let result = sqlx::query_as::<_, SalesPersonEntity>(
            r#"
            SELECT id, name, email, phone, status, created_at
            FROM sales_persons
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
