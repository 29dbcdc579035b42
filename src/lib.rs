pub mod aggregate;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod geometry;
pub mod protocol;
pub mod scoring;
pub mod server;
pub mod session;
// cmd and reports are binary modules, see main.rs.
