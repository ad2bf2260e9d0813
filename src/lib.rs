//! API Avengers CI/CD pipeline demo service.
//!
//! A stateless JSON HTTP service with three routes, used to exercise a
//! build/test/deploy pipeline end to end.
//!
//! ```text
//! GET /        -> 200 {"message": "Hello World! ...", "status": "success", "version": "1.0.0"}
//! GET /health  -> 200 {"status": "healthy", "service": "demo-app"}
//! GET /info    -> 200 {"app": "API Avengers Demo", "environment": $ENV, "python_version": "3.9+"}
//! anything     -> 404
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: Route table and handlers
//! - [`server`]: Listener binding and serve loop
//! - [`utils`]: Shutdown signal handling

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
