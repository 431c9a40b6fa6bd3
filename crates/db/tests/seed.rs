//! Integration tests for first-run seeding.

use std::io::Write;
use std::path::Path;

use cinelog_core::movie::{MovieDraft, PLACEHOLDER_IMAGE_URL};
use cinelog_db::models::movie::MovieFilter;
use cinelog_db::repositories::MovieRepo;
use cinelog_db::seed::{ensure_seeded, SeedOutcome};
use sqlx::PgPool;
use tempfile::NamedTempFile;

fn seed_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const SEED: &str = r#"[
    {"title": "Stalker", "director": "Andrei Tarkovsky", "year": 1979, "rating": 8.0},
    {"title": "Solaris", "director": "Andrei Tarkovsky", "year": "1972", "rating": "8.1",
     "image": "https://example.com/solaris.jpg"},
    {"title": "No Director"},
    {"title": "Bad Year", "director": "X", "year": "nineteen"},
    42,
    {"title": "Defaults", "director": "Anonymous"}
]"#;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seeds_valid_entries_into_empty_catalog(pool: PgPool) {
    let file = seed_file(SEED);

    let outcome = ensure_seeded(&pool, file.path()).await.unwrap();
    assert_eq!(outcome, SeedOutcome::Seeded(3));

    let movies = MovieRepo::list(&pool, &MovieFilter::default(), 10, 0)
        .await
        .unwrap();
    let titles: Vec<&str> = movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, ["Defaults", "Solaris", "Stalker"]);

    let defaults = &movies[0];
    assert_eq!(defaults.year, 2000);
    assert_eq!(defaults.rating, 0.0);
    assert_eq!(defaults.image_url, PLACEHOLDER_IMAGE_URL);
    assert_eq!(movies[1].image_url, "https://example.com/solaris.jpg");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seeding_is_noop_when_catalog_has_records(pool: PgPool) {
    MovieRepo::create(
        &pool,
        &MovieDraft {
            title: "Existing".into(),
            director: "Someone".into(),
            year: 2000,
            rating: 5.0,
            image_url: PLACEHOLDER_IMAGE_URL.into(),
        },
    )
    .await
    .unwrap();

    let file = seed_file(SEED);
    let outcome = ensure_seeded(&pool, file.path()).await.unwrap();

    assert_eq!(outcome, SeedOutcome::AlreadyPopulated(1));
    assert_eq!(MovieRepo::count_all(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seeding_twice_only_inserts_once(pool: PgPool) {
    let file = seed_file(SEED);

    ensure_seeded(&pool, file.path()).await.unwrap();
    let second = ensure_seeded(&pool, file.path()).await.unwrap();

    assert_eq!(second, SeedOutcome::AlreadyPopulated(3));
    assert_eq!(MovieRepo::count_all(&pool).await.unwrap(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_seed_file_seeds_nothing(pool: PgPool) {
    let outcome = ensure_seeded(&pool, Path::new("/nonexistent/movies.json"))
        .await
        .unwrap();
    assert_eq!(outcome, SeedOutcome::NoSeedData);
    assert_eq!(MovieRepo::count_all(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_seed_file_seeds_nothing(pool: PgPool) {
    for contents in ["{\"movies\": []}", "[{\"title\": ", ""] {
        let file = seed_file(contents);
        let outcome = ensure_seeded(&pool, file.path()).await.unwrap();
        assert_eq!(outcome, SeedOutcome::NoSeedData);
    }
    assert_eq!(MovieRepo::count_all(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bundled_dataset_seeds(pool: PgPool) {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/movies.json");

    let outcome = ensure_seeded(&pool, &path).await.unwrap();
    let SeedOutcome::Seeded(count) = outcome else {
        panic!("bundled dataset should seed, got {outcome:?}");
    };
    assert!(count > 0);
    assert_eq!(MovieRepo::count_all(&pool).await.unwrap(), count as i64);
}
