//! Greenhouse Console - administrative web console for the greenhouse API
//!
//! This library exposes the core modules for testing and reuse.

pub mod api;
pub mod common;
pub mod config;
pub mod error;
pub mod pages;
pub mod routes;
pub mod services;
pub mod session;
pub mod views;
