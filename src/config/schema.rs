//! Configuration schema definitions for gather.
//!
//! This module contains the struct definitions that map to the YAML
//! settings file.

use serde::{Deserialize, Serialize};

use crate::collector::strategy::CollisionPolicy;

/// Settings read from `.gather/config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How names registered more than once are resolved: one_of, exactly_one
    pub collision: CollisionPolicy,

    /// Enable debug logging
    #[serde(skip_serializing_if = "is_false")]
    pub debug: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}
