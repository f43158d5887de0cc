pub mod errors;
pub mod models;
pub mod ownership;
pub mod ports;
pub mod service;
