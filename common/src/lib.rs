//! Types and pure helpers shared by the Studium web frontend and its host server.

pub mod api;
pub mod config;
pub mod format;
pub mod model;
pub mod routes;
