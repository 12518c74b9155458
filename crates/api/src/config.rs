use std::fmt;

use axum::http::HeaderValue;
use sqlx::postgres::PgConnectOptions;

/// Environment variables that must be present before the server starts.
pub const REQUIRED_DB_VARS: [&str; 4] = ["DB_USERNAME", "DB_PASSWORD", "DB_HOST", "DB_DBNAME"];

const DEFAULT_DB_PORT: u16 = 5432;

/// Startup configuration failure. Always fatal.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable(s): {}", .0.join(", "))]
    MissingVars(Vec<&'static str>),

    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Read a variable through `lookup`, treating empty or whitespace-only values as unset.
fn non_empty<F>(lookup: &F, var: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    present(lookup, var).map(|v| v.trim().to_string())
}

/// Like [`non_empty`] but returns the value untouched. Used for secrets.
fn present<F>(lookup: &F, var: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var).filter(|v| !v.trim().is_empty())
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    match non_empty(lookup, var) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: format!("'{raw}': {e}"),
        }),
    }
}

fn process_env(var: &str) -> Option<String> {
    std::env::var(var).ok()
}

// ---------------------------------------------------------------------------
// Database
// ---------------------------------------------------------------------------

/// Database credentials loaded from `DB_USERNAME`, `DB_PASSWORD`, `DB_HOST`
/// and `DB_DBNAME`.
///
/// `DB_HOST` may carry a `:port` suffix; the port defaults to 5432.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
}

impl DatabaseConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(process_env)
    }

    /// Load through an arbitrary variable lookup. Every missing variable is
    /// reported in a single error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let values: Vec<Option<String>> = REQUIRED_DB_VARS
            .iter()
            .map(|&var| match var {
                "DB_PASSWORD" => present(&lookup, var),
                _ => non_empty(&lookup, var),
            })
            .collect();

        let missing: Vec<&'static str> = REQUIRED_DB_VARS
            .iter()
            .zip(&values)
            .filter(|(_, value)| value.is_none())
            .map(|(var, _)| *var)
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingVars(missing));
        }

        let mut values = values.into_iter().flatten();
        let (Some(username), Some(password), Some(host_raw), Some(database)) =
            (values.next(), values.next(), values.next(), values.next())
        else {
            return Err(ConfigError::MissingVars(REQUIRED_DB_VARS.to_vec()));
        };

        let (host, port) = split_host_port(&host_raw)?;

        Ok(Self {
            username,
            password,
            host,
            port,
            database,
        })
    }

    /// Connect options for sqlx. Credentials are passed structurally so no
    /// URL escaping is involved.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.database)
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .finish()
    }
}

/// Split `DB_HOST` into host and port.
///
/// Accepts `host`, `host:port`, `[v6]`, `[v6]:port` and a bare IPv6 address
/// (more than one `:` without brackets), which takes the default port.
fn split_host_port(raw: &str) -> Result<(String, u16), ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        var: "DB_HOST",
        reason,
    };
    let parse_port = |port: &str| {
        port.parse::<u16>()
            .map_err(|e| invalid(format!("bad port in '{raw}': {e}")))
    };

    if let Some(rest) = raw.strip_prefix('[') {
        let Some((host, tail)) = rest.split_once(']') else {
            return Err(invalid(format!("unclosed '[' in '{raw}'")));
        };
        if host.is_empty() {
            return Err(invalid(format!("no host name in '{raw}'")));
        }
        let port = match tail {
            "" => DEFAULT_DB_PORT,
            _ => match tail.strip_prefix(':') {
                Some(port) => parse_port(port)?,
                None => return Err(invalid(format!("unexpected '{tail}' after ']' in '{raw}'"))),
            },
        };
        return Ok((host.to_string(), port));
    }

    if raw.matches(':').count() > 1 {
        return Ok((raw.to_string(), DEFAULT_DB_PORT));
    }

    match raw.split_once(':') {
        None => Ok((raw.to_string(), DEFAULT_DB_PORT)),
        Some((host, port)) => {
            let port = parse_port(port)?;
            if host.is_empty() {
                return Err(invalid(format!("no host name in '{raw}'")));
            }
            Ok((host.to_string(), port))
        }
    }
}

// ---------------------------------------------------------------------------
// Server
// ---------------------------------------------------------------------------

/// HTTP server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on pooled database connections (default: `10`).
    pub db_max_connections: u32,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DB_MAX_CONNECTIONS`   | `10`                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = non_empty(&lookup, "HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 8000u16)?;
        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30u64)?;
        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 10u32)?;

        let cors_origins = non_empty(&lookup, "CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|e| ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    reason: format!("'{origin}': {e}"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_max_connections,
        })
    }
}
