pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod infrastructure;
pub mod models;
pub mod schemas;
pub mod seed;
pub mod server;
pub mod services;
