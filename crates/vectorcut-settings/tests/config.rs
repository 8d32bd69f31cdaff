#[path = "config/persistence.rs"]
mod persistence;
