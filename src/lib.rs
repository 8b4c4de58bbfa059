pub mod cards;
pub mod client;
pub mod config;
pub mod models;
pub mod scrape;
pub mod session;
