//! Batch configuration for the defarg overload generator.
//!
//! A configuration file lists several target methods that are generated into
//! one output, in file order. TOML is the default format; files ending in
//! `.json` are read as JSON with the same structure.
//!
//! # Example
//!
//! ```toml
//! # defarg.toml
//! output = "Overloads.java"
//!
//! [[method]]
//! name = "connect"
//! visibility = "public"
//! static = true
//! return_type = "Socket"
//!
//! [[method.argument]]
//! type = "String"
//! name = "host"
//!
//! [[method.argument]]
//! type = "int"
//! name = "port"
//! default = "8080"
//! ```

mod config;
mod error;

pub use config::{ArgumentConfig, GenConfig, MethodConfig};
pub use error::{ConfigError, Result};
