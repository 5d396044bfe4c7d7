//! `PostgreSQL` webinar repository.
//!
//! # Example
//!
//! ```no_run
//! use webinar_postgres::PostgresWebinarRepository;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repository = PostgresWebinarRepository::connect("postgresql://localhost/webinars").await?;
//! repository.migrate().await?;
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgRow};
use sqlx::Row;
use webinar_core::{
    Result, UserId, Webinar, WebinarError, WebinarId, WebinarProps, WebinarRepository,
};

/// `PostgreSQL` webinar repository.
///
/// Stores one row per webinar in the `webinars` table. Cheap to clone; clones
/// share the connection pool.
#[derive(Clone, Debug)]
pub struct PostgresWebinarRepository {
    /// `PostgreSQL` connection pool.
    pool: PgPool,
}

impl PostgresWebinarRepository {
    /// Create a repository over an existing pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` with default pool settings.
    ///
    /// # Errors
    ///
    /// Returns [`WebinarError::Storage`] if the connection fails.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url)
            .await
            .map_err(|e| storage("Failed to connect", &e))?;
        Ok(Self::new(pool))
    }

    /// The underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run database migrations.
    ///
    /// # Errors
    ///
    /// Returns [`WebinarError::Storage`] if migrations fail.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| storage("Migration failed", &e))?;
        Ok(())
    }

    /// Insert a new webinar.
    ///
    /// Scheduling is not part of the seat-change flow; this exists for seeding
    /// and tests.
    ///
    /// # Errors
    ///
    /// Returns [`WebinarError::Storage`] if the insert fails, including when
    /// the id is already taken.
    #[tracing::instrument(skip(self, webinar), fields(webinar_id = %webinar.id()))]
    pub async fn insert(&self, webinar: &Webinar) -> Result<()> {
        let props = webinar.props();

        sqlx::query(
            r"
            INSERT INTO webinars (id, organizer_id, title, start_date, end_date, seats)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(props.id.as_str())
        .bind(props.organizer_id.as_str())
        .bind(&props.title)
        .bind(props.start_date)
        .bind(props.end_date)
        .bind(seats_column(props.seats)?)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return WebinarError::Storage(format!(
                        "Webinar {} already exists",
                        props.id
                    ));
                }
            }
            storage("Failed to insert webinar", &e)
        })?;

        metrics::counter!("webinar_repository_queries_total", "operation" => "insert")
            .increment(1);
        Ok(())
    }
}

impl WebinarRepository for PostgresWebinarRepository {
    #[tracing::instrument(skip(self), fields(webinar_id = %id))]
    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>> {
        let row = sqlx::query(
            r"
            SELECT id, organizer_id, title, start_date, end_date, seats
            FROM webinars
            WHERE id = $1
            ",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage("Failed to get webinar", &e))?;

        metrics::counter!("webinar_repository_queries_total", "operation" => "find_by_id")
            .increment(1);

        row.as_ref().map(webinar_from_row).transpose()
    }

    #[tracing::instrument(skip(self, webinar), fields(webinar_id = %webinar.id()))]
    async fn update(&self, webinar: &Webinar) -> Result<()> {
        let props = webinar.props();

        let result = sqlx::query(
            r"
            UPDATE webinars
            SET organizer_id = $2,
                title = $3,
                start_date = $4,
                end_date = $5,
                seats = $6
            WHERE id = $1
            ",
        )
        .bind(props.id.as_str())
        .bind(props.organizer_id.as_str())
        .bind(&props.title)
        .bind(props.start_date)
        .bind(props.end_date)
        .bind(seats_column(props.seats)?)
        .execute(&self.pool)
        .await
        .map_err(|e| storage("Failed to update webinar", &e))?;

        metrics::counter!("webinar_repository_queries_total", "operation" => "update")
            .increment(1);

        if result.rows_affected() == 0 {
            return Err(WebinarError::NotFound);
        }

        Ok(())
    }
}

fn webinar_from_row(row: &PgRow) -> Result<Webinar> {
    let seats: i32 = row.try_get("seats").map_err(|e| storage("Bad seats column", &e))?;
    let seats = u32::try_from(seats)
        .map_err(|_| WebinarError::Storage(format!("Negative seat count in storage: {seats}")))?;

    let start_date: DateTime<Utc> = row
        .try_get("start_date")
        .map_err(|e| storage("Bad start_date column", &e))?;
    let end_date: DateTime<Utc> = row
        .try_get("end_date")
        .map_err(|e| storage("Bad end_date column", &e))?;

    let id: String = row.try_get("id").map_err(|e| storage("Bad id column", &e))?;
    let organizer_id: String = row
        .try_get("organizer_id")
        .map_err(|e| storage("Bad organizer_id column", &e))?;
    let title: String = row.try_get("title").map_err(|e| storage("Bad title column", &e))?;

    Webinar::new(WebinarProps {
        id: WebinarId::new(id),
        organizer_id: UserId::new(organizer_id),
        title,
        start_date,
        end_date,
        seats,
    })
}

fn seats_column(seats: u32) -> Result<i32> {
    i32::try_from(seats)
        .map_err(|_| WebinarError::Storage(format!("Seat count {seats} does not fit the seats column")))
}

fn storage(context: &str, err: &impl std::fmt::Display) -> WebinarError {
    WebinarError::Storage(format!("{context}: {err}"))
}
