use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;

        // Without a configured secret, generate one for the lifetime of
        // this process. Outstanding tokens die with it on restart.
        let jwt_secret = match std::env::var("HOUSERENT_JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => generate_secret(),
        };

        let host: IpAddr = env_or("HOUSERENT_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid HOUSERENT_HOST: {e}"))?;

        let port: u16 = env_or("HOUSERENT_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid HOUSERENT_PORT: {e}"))?;

        let max_body_size: usize = env_or("HOUSERENT_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid HOUSERENT_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("HOUSERENT_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            jwt_secret,
            host,
            port,
            max_body_size,
            log_level,
        })
    }
}

fn generate_secret() -> String {
    let bytes: [u8; 64] = rand::random();
    hex::encode(bytes)
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
