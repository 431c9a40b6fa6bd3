pub mod movies;
pub mod stats;
pub mod ui;
