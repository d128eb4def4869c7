pub mod health;
pub mod instruments;
pub mod interpretation;
pub mod reports;
pub mod scoring;
