pub mod calendar;
pub mod config;
pub mod db;
pub mod error;
pub mod grouping;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
