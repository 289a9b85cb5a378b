pub mod buckets;
pub mod cache;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod gameweeks;
pub mod http_client;
pub mod model;
pub mod report;
pub mod source;
