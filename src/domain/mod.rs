pub mod tour;
pub mod types;
