//! CLI command implementations.
//!
//! - **predict**: score patients from a file, stdin or a built-in sample
//! - **init**: write the built-in tables to a config file
//! - **check-config**: validate a config file and list every issue

pub mod check_config;
pub mod init;
pub mod predict;

pub use check_config::check_config;
pub use init::init_config;
pub use predict::{handle_predict, PredictConfig};
