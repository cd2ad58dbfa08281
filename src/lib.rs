// src/lib.rs

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod state;
pub mod store;
