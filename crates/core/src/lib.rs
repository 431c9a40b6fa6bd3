//! Domain rules for the Cinelog movie catalog.
//!
//! Pure logic only: validation, listing parameters, seed derivation and
//! statistics assembly. Persistence lives in `cinelog-db`.

pub mod error;
pub mod listing;
pub mod movie;
pub mod seed;
pub mod stats;
pub mod types;
