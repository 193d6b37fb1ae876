use std::env;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub gemini: GeminiConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

/// Where the database lives and how the pool behaves.
///
/// `url` wins when `DATABASE_URL` is set; otherwise the discrete
/// `DB_*` parameters are assembled into connect options.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub ssl_mode: PgSslMode,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

/// Credentials and endpoint for the Gemini generative language API
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            gemini: GeminiConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    // Default values for database connection pool (conservative defaults for small-medium apps)
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").ok().filter(|s| !s.is_empty());

        let user = env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string());
        let password = env::var("DB_PASSWORD").unwrap_or_default();
        let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port = env::var("DB_PORT")
            .unwrap_or_else(|_| "5432".to_string())
            .parse::<u16>()
            .map_err(|_| "DB_PORT must be a valid port number".to_string())?;
        let database = env::var("DB_NAME").unwrap_or_else(|_| "postgres".to_string());

        let ssl_mode = env::var("DB_SSL_MODE")
            .unwrap_or_else(|_| "prefer".to_string())
            .parse::<PgSslMode>()
            .map_err(|e| format!("Invalid DB_SSL_MODE: {}", e))?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let min_connections = env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MIN_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        let idle_timeout_secs = env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        let max_lifetime_secs = env::var("DB_MAX_LIFETIME_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_LIFETIME_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_MAX_LIFETIME_SECS must be a valid number".to_string())?;

        Ok(Self {
            url,
            user,
            password,
            host,
            port,
            database,
            ssl_mode,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
        })
    }

    /// Build driver connect options from either the URL or the discrete parameters
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        match &self.url {
            Some(url) => url.parse::<PgConnectOptions>(),
            None => Ok(PgConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .username(&self.user)
                .password(&self.password)
                .database(&self.database)
                .ssl_mode(self.ssl_mode)),
        }
    }

    /// Connection target without credentials, safe for logs
    pub fn display_target(&self) -> String {
        match &self.url {
            Some(url) => url.split('@').next_back().unwrap_or("***").to_string(),
            None => format!("{}:{}/{}", self.host, self.port, self.database),
        }
    }
}

impl GeminiConfig {
    const DEFAULT_MODEL: &'static str = "gemini-2.5-flash";
    const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com/v1beta";

    pub fn from_env() -> Result<Self, String> {
        let api_key = env::var("API_KEY")
            .or_else(|_| env::var("GEMINI_API_KEY"))
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| "API_KEY environment variable is required".to_string())?;

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| Self::DEFAULT_MODEL.to_string());

        let base_url = env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            api_key,
            model,
            base_url,
        })
    }
}

// Keeps the API key out of startup logs
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"***")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "StudyHub API".to_string());
        let version =
            env::var("SWAGGER_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());
        let description = env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
            "Semesters, subjects, lab manuals, question papers, notes and AI answers".to_string()
        });

        Ok(Self {
            title,
            version,
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discrete_config() -> DatabaseConfig {
        DatabaseConfig {
            url: None,
            user: "reader".to_string(),
            password: "secret".to_string(),
            host: "db.internal".to_string(),
            port: 6543,
            database: "academics".to_string(),
            ssl_mode: PgSslMode::Require,
            max_connections: 10,
            min_connections: 1,
            acquire_timeout_secs: 5,
            idle_timeout_secs: 600,
            max_lifetime_secs: 1800,
        }
    }

    #[test]
    fn test_connect_options_from_discrete_parameters() {
        let options = discrete_config().connect_options().unwrap();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "reader");
        assert_eq!(options.get_database(), Some("academics"));
        assert!(matches!(options.get_ssl_mode(), PgSslMode::Require));
    }

    #[test]
    fn test_connect_options_prefers_url() {
        let mut config = discrete_config();
        config.url = Some("postgres://other:pw@url-host:5433/urldb".to_string());

        let options = config.connect_options().unwrap();
        assert_eq!(options.get_host(), "url-host");
        assert_eq!(options.get_port(), 5433);
        assert_eq!(options.get_database(), Some("urldb"));
    }

    #[test]
    fn test_display_target_hides_credentials() {
        let mut config = discrete_config();
        assert_eq!(config.display_target(), "db.internal:6543/academics");

        config.url = Some("postgres://other:pw@url-host:5433/urldb".to_string());
        let target = config.display_target();
        assert_eq!(target, "url-host:5433/urldb");
        assert!(!target.contains("pw"));
    }

    #[test]
    fn test_gemini_config_debug_redacts_key() {
        let config = GeminiConfig {
            api_key: "AIza-very-secret".to_string(),
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://example.test".to_string(),
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("gemini-2.5-flash"));
    }

    #[test]
    fn test_server_address() {
        let app = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            cors_allowed_origins: vec!["*".to_string()],
            max_request_body_size: 1024,
        };
        assert_eq!(app.server_address(), "127.0.0.1:8080");
    }
}
