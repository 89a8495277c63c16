use std::env;
use std::path::PathBuf;

/// Process configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub admin_token: String,
    pub recordings_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let admin_token =
            env::var("ADMIN_TOKEN").unwrap_or_else(|_| "supersecrettoken123".to_string());

        let recordings_dir = env::var("RECORDINGS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("recordings"));

        Self {
            port,
            admin_token,
            recordings_dir,
        }
    }
}
