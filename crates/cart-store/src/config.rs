//! Store configuration.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`CART_*`)
//! 2. Defaults (this file)

use std::env;
use std::path::PathBuf;

use crate::error::{StoreError, StoreResult};

/// Default cart file, relative to the working directory.
pub const DEFAULT_CART_FILE: &str = "cart.txt";

/// Where and how the cart file is written.
///
/// ## Example
/// ```rust
/// use cart_store::StoreConfig;
///
/// let config = StoreConfig::new("/tmp/session/cart.txt").create_parent_dirs(true);
/// assert!(config.create_parent_dirs);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path of the record file. Overwritten on every save.
    pub cart_path: PathBuf,

    /// Create missing parent directories before writing.
    /// Default: false
    pub create_parent_dirs: bool,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            cart_path: path.into(),
            create_parent_dirs: false,
        }
    }

    pub fn create_parent_dirs(mut self, create: bool) -> Self {
        self.create_parent_dirs = create;
        self
    }

    /// Loads configuration from the process environment.
    ///
    /// - `CART_FILE`: record file path (default `cart.txt`)
    /// - `CART_CREATE_DIRS`: `true`/`false` (default `false`)
    pub fn from_env() -> StoreResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> StoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cart_path = lookup("CART_FILE")
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_CART_FILE.to_string());

        let create_parent_dirs = match lookup("CART_CREATE_DIRS") {
            Some(value) => value.parse().map_err(|_| StoreError::InvalidConfig {
                key: "CART_CREATE_DIRS".to_string(),
                value,
            })?,
            None => false,
        };

        Ok(StoreConfig::new(cart_path).create_parent_dirs(create_parent_dirs))
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::new(DEFAULT_CART_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StoreConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.cart_path, PathBuf::from("cart.txt"));
        assert!(!config.create_parent_dirs);
    }

    #[test]
    fn test_overrides() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            ("CART_FILE", "/var/lib/carts/today.txt"),
            ("CART_CREATE_DIRS", "true"),
        ]))
        .unwrap();
        assert_eq!(config.cart_path, PathBuf::from("/var/lib/carts/today.txt"));
        assert!(config.create_parent_dirs);
    }

    #[test]
    fn test_empty_path_falls_back_to_default() {
        let config = StoreConfig::from_lookup(lookup_from(&[("CART_FILE", "")])).unwrap();
        assert_eq!(config.cart_path, PathBuf::from(DEFAULT_CART_FILE));
    }

    #[test]
    fn test_invalid_bool() {
        let err = StoreConfig::from_lookup(lookup_from(&[("CART_CREATE_DIRS", "yes")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for CART_CREATE_DIRS: 'yes'");
    }
}
