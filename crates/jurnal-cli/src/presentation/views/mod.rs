pub mod config;
pub mod dashboard;
pub mod listing;
pub mod record;
pub mod session;
