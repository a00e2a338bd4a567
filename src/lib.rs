//! GoodSeva logistics client
//!
//! Ties the workspace crates together:
//!
//! - [`config`] - TOML configuration
//! - [`telemetry`] - `tracing` subscriber setup
//! - [`app`] - startup wiring of stores, providers and navigation
//!
//! # Example
//!
//! ```no_run
//! use goodseva::{App, AppConfig};
//!
//! let app = App::open(AppConfig::default())?;
//! println!("{}", app.theme.theme());
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod config;
pub mod telemetry;

pub use app::App;
pub use config::{AppConfig, ConfigError};
pub use telemetry::init_logging;
