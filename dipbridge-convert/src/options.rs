use std::env;

use log::warn;

/// Environment variable read by `ConversionOptions::from_env`.
pub const REVERSE_DIMENSIONS_VAR: &str = "DIPBRIDGE_REVERSE_DIMENSIONS";

/// Settings for conversions whose result depends on host conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionOptions {
    /// When set, dimensions cross the boundary reversed: the host lists them
    /// slowest-first, the library fastest-first.
    pub reverse_dimensions: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            reverse_dimensions: true,
        }
    }
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reverse_dimensions(mut self, reverse_dimensions: bool) -> Self {
        self.reverse_dimensions = reverse_dimensions;
        self
    }

    /// Defaults, overridden by `DIPBRIDGE_REVERSE_DIMENSIONS` when it holds a
    /// recognised boolean.
    pub fn from_env() -> Self {
        let mut options = Self::default();
        if let Ok(value) = env::var(REVERSE_DIMENSIONS_VAR) {
            match parse_flag(&value) {
                Some(flag) => options.reverse_dimensions = flag,
                None => warn!(
                    "Ignoring {}={:?}: expected a boolean, keeping {}",
                    REVERSE_DIMENSIONS_VAR, value, options.reverse_dimensions
                ),
            }
        }
        options
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
