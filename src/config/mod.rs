//! Settings for the `gather` binary.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use gather::config::load_settings;
//! use gather::strategy::CollisionPolicy;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".gather");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "collision: exactly_one").unwrap();
//!
//! let settings = load_settings(temp.path(), None).unwrap();
//! assert_eq!(settings.collision, CollisionPolicy::ExactlyOne);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_settings, load_settings_file, parse_settings, project_settings_path};
pub use schema::Settings;
