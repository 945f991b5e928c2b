pub mod build;
pub mod config;
pub mod discovery;
pub mod error;
pub mod settings;
pub mod validation;

// Re-export main types
pub use build::*;
pub use config::*;
pub use error::*;
pub use settings::*;

// Re-export discovery and validation
pub use discovery::{discover, discover_with_profile, load_path, ConfigDiscovery};
pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
