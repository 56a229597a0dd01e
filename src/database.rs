//! Database connection settings.

use serde::Serialize;

use crate::secret::{REDACTED, Secret};

/// Port the database listens on.
const MYSQL_PORT: u16 = 3306;

/// Database connection settings.
///
/// In production every field is read from its `MYSQL_*` variable;
/// outside production the whole section is the fixed local profile
/// from [`DatabaseConfig::local`].
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseConfig {
    /// Database user (from `MYSQL_USER`, default `root`).
    pub user: String,
    /// Database password (from `MYSQL_PASSWORD`, no production default).
    pub password: Option<Secret>,
    /// Database hostname (from `MYSQL_HOST`, default `mysql` in production).
    pub host: String,
    /// Database name (from `MYSQL_DATABASE`, default `motopp`).
    pub name: String,
    /// Log every SQL statement the application issues.
    pub log_statements: bool,
}

impl DatabaseConfig {
    /// Fixed profile for local development: `root:root@localhost/motopp`
    /// with statement logging enabled. The `MYSQL_*` variables are not
    /// consulted outside production.
    pub(crate) fn local() -> Self {
        DatabaseConfig {
            user: "root".to_string(),
            password: Some(Secret::new("root")),
            host: "localhost".to_string(),
            name: "motopp".to_string(),
            log_statements: true,
        }
    }

    /// Connection URL for the database.
    ///
    /// User, password and database name are percent-encoded. When no
    /// password is configured the password segment is omitted entirely.
    pub fn url(&self) -> String {
        let password = self
            .password
            .as_ref()
            .map(|p| urlencoding::encode(p.expose()).into_owned());
        self.compose_url(password)
    }

    /// Like [`DatabaseConfig::url`], with the password masked for logs.
    pub fn redacted_url(&self) -> String {
        let password = self.password.as_ref().map(|_| REDACTED.to_string());
        self.compose_url(password)
    }

    fn compose_url(&self, password: Option<String>) -> String {
        let user = urlencoding::encode(&self.user);
        let name = urlencoding::encode(&self.name);
        match password {
            Some(password) => format!(
                "mysql://{}:{}@{}:{}/{}",
                user, password, self.host, MYSQL_PORT, name
            ),
            None => format!("mysql://{}@{}:{}/{}", user, self.host, MYSQL_PORT, name),
        }
    }
}
