//! Database metrics: query durations and connection pool gauges.

use metrics::{gauge, histogram};
use sqlx::PgPool;
use std::time::{Duration, Instant};
use tracing::warn;

/// Queries slower than this are also logged.
const SLOW_QUERY_THRESHOLD: Duration = Duration::from_millis(500);

/// Records one query duration under the `query` label.
pub fn record_query_duration(query_name: &'static str, duration: Duration) {
    histogram!("database_query_duration_seconds", "query" => query_name)
        .record(duration.as_secs_f64());

    if duration >= SLOW_QUERY_THRESHOLD {
        warn!(
            query = query_name,
            duration_ms = duration.as_millis() as u64,
            "Slow database query"
        );
    }
}

/// Publishes connection pool gauges. Called on every metrics scrape.
pub fn record_pool_metrics(pool: &PgPool) {
    let size = pool.size() as usize;
    let idle = pool.num_idle();

    gauge!("database_connections_active").set(size.saturating_sub(idle) as f64);
    gauge!("database_connections_idle").set(idle as f64);
    gauge!("database_connections_total").set(size as f64);
}

/// Times one repository query.
///
/// ```ignore
/// let timer = QueryTimer::new("find_invoice_by_id");
/// let result = sqlx::query_as::<_, InvoiceEntity>(...).fetch_optional(&pool).await;
/// timer.record();
/// result
/// ```
pub struct QueryTimer {
    query_name: &'static str,
    start: Instant,
}

impl QueryTimer {
    pub fn new(query_name: &'static str) -> Self {
        Self {
            query_name,
            start: Instant::now(),
        }
    }

    /// Records the elapsed time and returns it.
    pub fn record(self) -> Duration {
        let elapsed = self.start.elapsed();
        record_query_duration(self.query_name, elapsed);
        elapsed
    }
}
