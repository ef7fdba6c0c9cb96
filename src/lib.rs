pub mod analyzers;
pub mod api;
pub mod error;
pub mod output;
pub mod ratings;
pub mod server;
