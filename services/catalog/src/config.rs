/// Avatar fetched for accounts registered without one.
pub const DEFAULT_AVATAR_URL: &str = "https://www.artstation.com/artwork/6LOXLO";

/// Catalog service configuration loaded from environment variables.
#[derive(Debug)]
pub struct CatalogConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// HMAC secret for signing bearer tokens. Env var: `JWT_SECRET`.
    pub jwt_secret: String,
    /// TCP port for the HTTP server (default 3000). Env var: `SERVER_PORT`.
    pub server_port: u16,
    /// Env var: `DEFAULT_AVATAR_URL`.
    pub default_avatar_url: String,
    /// Apply pending migrations before serving (default true). Env var: `RUN_MIGRATIONS`.
    pub run_migrations: bool,
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            default_avatar_url: std::env::var("DEFAULT_AVATAR_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_AVATAR_URL.to_owned()),
            run_migrations: std::env::var("RUN_MIGRATIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}
