pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod store;
pub mod utils;
