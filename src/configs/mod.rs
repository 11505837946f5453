use std::path::PathBuf;

/// Process configuration, fixed at startup. Constructed once in `main` and
/// handed to route wiring so tests can substitute temporary directories.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Destination for accepted uploads. Must already exist; the gateway does
    /// not create it.
    pub upload_dir: PathBuf,
    /// Root of the pre-built static bundle.
    pub static_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let host = std::env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16 integer");
        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());
        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "dist".to_string());

        Self { host, port, upload_dir: upload_dir.into(), static_dir: static_dir.into() }
    }
}
