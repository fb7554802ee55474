use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    /// Human-readable item change log
    pub item_log_path: String,
    /// JSON-Lines snapshots of saved and deleted items
    pub item_backup_path: String,
    pub cors_allowed_origin: String,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenvy::dotenv().ok();

        Ok(Config {
            database_url: env::var("DATABASE_URL")?,
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            item_log_path: env::var("ITEM_LOG_PATH")
                .unwrap_or_else(|_| "item-changes.log".to_string()),
            item_backup_path: env::var("ITEM_BACKUP_PATH")
                .unwrap_or_else(|_| "backup.log".to_string()),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_addr() {
        let config = Config {
            database_url: "postgres://localhost/project".to_string(),
            server_host: "127.0.0.1".to_string(),
            server_port: 9000,
            item_log_path: "item-changes.log".to_string(),
            item_backup_path: "backup.log".to_string(),
            cors_allowed_origin: "http://localhost:3000".to_string(),
        };
        assert_eq!(config.server_addr(), "127.0.0.1:9000");
    }
}
