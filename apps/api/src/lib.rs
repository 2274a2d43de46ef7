pub mod analysis;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod extraction;
pub mod matching;
pub mod report;
pub mod routes;
pub mod state;
