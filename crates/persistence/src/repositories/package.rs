//! Package repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::PackageEntity;
use crate::metrics::QueryTimer;

/// Repository for service packages. Read-only.
#[derive(Clone)]
pub struct PackageRepository {
    pool: PgPool,
}

impl PackageRepository {
    /// Creates a new PackageRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All packages, cheapest first.
    pub async fn list_all(&self) -> Result<Vec<PackageEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_packages");
        let result = sqlx::query_as::<_, PackageEntity>(
            r#"
            SELECT id, name, price_inr, description, features, success_metrics, created_at
            FROM packages
            ORDER BY price_inr ASC, name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<PackageEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_package_by_id");
        let result = sqlx::query_as::<_, PackageEntity>(
            r#"
            SELECT id, name, price_inr, description, features, success_metrics, created_at
            FROM packages
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}
