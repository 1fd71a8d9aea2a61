use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub filter: String,
    pub json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log: LogConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var("APP_PORT") {
            Ok(v) => v
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("invalid APP_PORT {:?}: {}", v, e))?,
            Err(_) => 8080,
        };
        let log = LogConfig {
            filter: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "lambstop=debug,axum=info,tower_http=info".into()),
            json: std::env::var("LOG_FORMAT")
                .map(|v| v == "json")
                .unwrap_or(false),
        };
        Ok(Self {
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port,
            log,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
