//! First-run seeding of the movie catalog from a bundled JSON file.

use std::path::Path;

use cinelog_core::seed::parse_seed_file;
use sqlx::PgPool;

use crate::repositories::MovieRepo;

/// What [`ensure_seeded`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The catalog already held this many movies; nothing was written.
    AlreadyPopulated(i64),
    /// The seed file was missing, unreadable or not a JSON array.
    NoSeedData,
    /// This many movies were inserted in one transaction.
    Seeded(u64),
}

/// Seed the catalog from `seed_path` if, and only if, it is empty.
///
/// Safe to call repeatedly. Problems with the seed file itself are never
/// errors: a bad file seeds nothing and a bad entry is skipped. Only store
/// failures are returned.
pub async fn ensure_seeded(pool: &PgPool, seed_path: &Path) -> Result<SeedOutcome, sqlx::Error> {
    let existing = MovieRepo::count_all(pool).await?;
    if existing > 0 {
        tracing::debug!(existing, "Catalog already populated, skipping seed");
        return Ok(SeedOutcome::AlreadyPopulated(existing));
    }

    let contents = match tokio::fs::read_to_string(seed_path).await {
        Ok(contents) => contents,
        Err(e) => {
            tracing::warn!(path = %seed_path.display(), error = %e, "Seed file unavailable");
            return Ok(SeedOutcome::NoSeedData);
        }
    };

    let Some(drafts) = parse_seed_file(&contents) else {
        tracing::warn!(path = %seed_path.display(), "Seed file is not a JSON array");
        return Ok(SeedOutcome::NoSeedData);
    };

    let mut tx = pool.begin().await?;
    let inserted = MovieRepo::create_many(&mut *tx, &drafts).await?;
    tx.commit().await?;

    tracing::info!(count = inserted, path = %seed_path.display(), "Seeded movie catalog");
    Ok(SeedOutcome::Seeded(inserted))
}
