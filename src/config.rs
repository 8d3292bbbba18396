use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub reporting: ReportingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub secret: String,
    #[serde(default = "default_session_ttl")]
    pub ttl_seconds: i64,
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    #[serde(default)]
    pub secure_cookie: bool,
}

/// Accounts created at startup when missing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    pub admin_username: String,
    pub admin_password: String,
    #[serde(default)]
    pub operator_username: Option<String>,
    #[serde(default)]
    pub operator_password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportingConfig {
    /// Offset used to decide where "today", "this week" and "this month" start
    pub utc_offset_hours: i32,
}

fn default_session_ttl() -> i64 {
    28_800
}

fn default_cookie_name() -> String {
    "mbl_session".to_string()
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            admin_username: "admin".to_string(),
            admin_password: "admin123".to_string(),
            operator_username: None,
            operator_password: None,
        }
    }
}

impl Default for ReportingConfig {
    fn default() -> Self {
        // Colombia, no DST
        Self {
            utc_offset_hours: -5,
        }
    }
}

impl Config {
    pub fn from_toml() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        let mut config = match std::fs::read_to_string(&config_path) {
            Ok(config_str) => Self::parse(&config_str)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Self::from_defaults(),
            Err(e) => {
                return Err(format!("Failed to read config file {config_path}: {e}").into());
            }
        };

        config.apply_env_overrides();
        Ok(config)
    }

    pub fn parse(config_str: &str) -> Result<Self, Box<dyn std::error::Error>> {
        toml::from_str::<Config>(config_str).map_err(|e| format!("Failed to parse config file: {e}").into())
    }

    fn from_defaults() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            database: DatabaseConfig {
                url: mysql_url_from_env()
                    .unwrap_or_else(|| "sqlite://mbl.sqlite?mode=rwc".to_string()),
                max_connections: 10,
            },
            session: SessionConfig {
                secret: "change-me-in-production".to_string(),
                ttl_seconds: default_session_ttl(),
                cookie_name: default_cookie_name(),
                secure_cookie: false,
            },
            seed: SeedConfig::default(),
            reporting: ReportingConfig::default(),
        }
    }

    /// Environment variables win over file values
    fn apply_env_overrides(&mut self) {
        fn get_env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
            env::var(name).ok().and_then(|v| v.parse::<T>().ok())
        }

        if let Ok(v) = env::var("SERVER_HOST") {
            self.server.host = v;
        }
        if let Some(p) = get_env_parse("PORT").or_else(|| get_env_parse("SERVER_PORT")) {
            self.server.port = p;
        }
        if let Ok(v) = env::var("DATABASE_URL") {
            self.database.url = v;
        } else if let Some(url) = mysql_url_from_env() {
            self.database.url = url;
        }
        if let Some(mc) = get_env_parse("DB_MAX_CONNECTIONS") {
            self.database.max_connections = mc;
        }
        if let Ok(v) = env::var("SESSION_SECRET") {
            self.session.secret = v;
        }
        if let Some(ttl) = get_env_parse("SESSION_TTL") {
            self.session.ttl_seconds = ttl;
        }
        if let Some(secure) = get_env_parse("SESSION_SECURE_COOKIE") {
            self.session.secure_cookie = secure;
        }
        if let Ok(v) = env::var("MBL_ADMIN_USERNAME") {
            self.seed.admin_username = v;
        }
        if let Ok(v) = env::var("MBL_ADMIN_PASSWORD") {
            self.seed.admin_password = v;
        }
        if let Ok(v) = env::var("MBL_OPERATOR_USERNAME") {
            self.seed.operator_username = Some(v);
        }
        if let Ok(v) = env::var("MBL_OPERATOR_PASSWORD") {
            self.seed.operator_password = Some(v);
        }
        if let Some(offset) = get_env_parse("REPORT_UTC_OFFSET") {
            self.reporting.utc_offset_hours = offset;
        }
    }
}

/// Builds a MySQL URL from the MYSQL* variables set by the hosting platform.
fn mysql_url_from_env() -> Option<String> {
    let host = env::var("MYSQLHOST").ok()?;
    let user = env::var("MYSQLUSER").ok()?;
    let database = env::var("MYSQLDATABASE").ok()?;
    let password = env::var("MYSQLPASSWORD").unwrap_or_default();
    let port = env::var("MYSQLPORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3306);
    Some(format!(
        "mysql://{user}:{password}@{host}:{port}/{database}"
    ))
}
