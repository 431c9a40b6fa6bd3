//! Repository for the `movies` table.
//!
//! Writes take a [`MovieDraft`] that has already been normalized by the
//! validator or the seeder; the table itself only enforces column widths.

use cinelog_core::listing::contains_pattern;
use cinelog_core::movie::MovieDraft;
use cinelog_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::movie::{DirectorCount, Movie, MovieFilter};

/// Column list for `movies` queries.
const COLUMNS: &str = "id, title, director, year, rating, image_url, created_at, updated_at";

/// Search predicate shared by `count` and `list`; binds the pattern as `$1`.
const SEARCH_CLAUSE: &str = "WHERE title ILIKE $1 OR director ILIKE $1";

/// Provides data access for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the stored row with its assigned id.
    pub async fn create(pool: &PgPool, draft: &MovieDraft) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, director, year, rating, image_url) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&draft.title)
            .bind(&draft.director)
            .bind(draft.year)
            .bind(draft.rating)
            .bind(&draft.image_url)
            .fetch_one(pool)
            .await
    }

    /// Insert several movies on an existing connection (typically inside a
    /// transaction). Returns the number of rows written.
    pub async fn create_many(
        conn: &mut PgConnection,
        drafts: &[MovieDraft],
    ) -> Result<u64, sqlx::Error> {
        let mut inserted = 0;
        for draft in drafts {
            let result = sqlx::query(
                "INSERT INTO movies (title, director, year, rating, image_url) \
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(&draft.title)
            .bind(&draft.director)
            .bind(draft.year)
            .bind(draft.rating)
            .bind(&draft.image_url)
            .execute(&mut *conn)
            .await?;
            inserted += result.rows_affected();
        }
        Ok(inserted)
    }

    /// Find a movie by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Count every movie in the catalog.
    pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM movies")
            .fetch_one(pool)
            .await
    }

    /// Count movies matching the filter's search term (all movies if none).
    pub async fn count(pool: &PgPool, filter: &MovieFilter) -> Result<i64, sqlx::Error> {
        match &filter.search {
            None => Self::count_all(pool).await,
            Some(term) => {
                let query = format!("SELECT COUNT(*) FROM movies {SEARCH_CLAUSE}");
                sqlx::query_scalar(&query)
                    .bind(contains_pattern(term))
                    .fetch_one(pool)
                    .await
            }
        }
    }

    /// List one page of movies matching the filter.
    ///
    /// Rows with equal sort keys are ordered by id so pages never overlap.
    pub async fn list(
        pool: &PgPool,
        filter: &MovieFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let order_by = format!(
            "ORDER BY {} {}, id ASC",
            filter.sort.column(),
            filter.direction.keyword()
        );

        match &filter.search {
            None => {
                let query = format!("SELECT {COLUMNS} FROM movies {order_by} LIMIT $1 OFFSET $2");
                sqlx::query_as::<_, Movie>(&query)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
            Some(term) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM movies {SEARCH_CLAUSE} {order_by} LIMIT $2 OFFSET $3"
                );
                sqlx::query_as::<_, Movie>(&query)
                    .bind(contains_pattern(term))
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Replace every field of an existing movie.
    ///
    /// Returns `None` if no movie with the given ID exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        draft: &MovieDraft,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET \
                 title = $2, \
                 director = $3, \
                 year = $4, \
                 rating = $5, \
                 image_url = $6 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&draft.title)
            .bind(&draft.director)
            .bind(draft.year)
            .bind(draft.rating)
            .bind(&draft.image_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie by ID. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Mean rating across the catalog; `None` when it is empty.
    pub async fn average_rating(pool: &PgPool) -> Result<Option<f64>, sqlx::Error> {
        sqlx::query_scalar("SELECT AVG(rating)::float8 FROM movies")
            .fetch_one(pool)
            .await
    }

    /// The director credited with the most movies.
    ///
    /// Ties go to the director whose earliest movie has the lowest id.
    pub async fn top_director(pool: &PgPool) -> Result<Option<DirectorCount>, sqlx::Error> {
        sqlx::query_as::<_, DirectorCount>(
            "SELECT director, COUNT(*) AS movie_count \
             FROM movies \
             GROUP BY director \
             ORDER BY movie_count DESC, MIN(id) ASC \
             LIMIT 1",
        )
        .fetch_optional(pool)
        .await
    }
}
