pub mod config;
pub mod error;
pub mod models;
pub mod parsers;
pub mod scrapers;
pub mod session;
pub mod table;
pub mod utils;
