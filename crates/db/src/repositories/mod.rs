//! Data access for the `movies` table.

pub mod movie_repo;

pub use movie_repo::MovieRepo;
