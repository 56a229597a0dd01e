//! Deployment environment selection.

use serde::Serialize;
use std::fmt;

/// Deployment environment, selected by the `ENV` variable.
///
/// Only the exact value `prod` selects [`Environment::Production`];
/// anything else (unset, empty, `production`, `PROD`, ...) falls back
/// to [`Environment::Development`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development: fixed database profile, verbose SQL logging.
    #[default]
    Development,
    /// Production: database settings come from the `MYSQL_*` variables.
    Production,
}

impl Environment {
    /// Returns true for the production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Environment name for logs and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
