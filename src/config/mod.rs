//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → SdkConfig (validated, immutable)
//!     → ChainConfig owned by the client, TransportConfig by the executor
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; a new client is built for changes
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::ChainConfig;
pub use schema::ObservabilityConfig;
pub use schema::SdkConfig;
pub use schema::TransportConfig;
