use std::path::PathBuf;

/// Server configuration. The defaults are the application's fixed values;
/// the struct exists so the port and database path are injected instead of
/// scattered through the code.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listening port.
    pub bind_port: u16,
    /// Path of the SQLite database file.
    pub db_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_port: 5000,
            db_path: PathBuf::from("todo.db"),
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bind_port(mut self, bind_port: u16) -> Self {
        self.bind_port = bind_port;
        self
    }

    pub fn with_db_path(mut self, db_path: impl Into<PathBuf>) -> Self {
        self.db_path = db_path.into();
        self
    }

    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.bind_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_values() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_port, 5000);
        assert_eq!(config.db_path, PathBuf::from("todo.db"));
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn builders_override_defaults() {
        let config = ServerConfig::new()
            .with_bind_port(8080)
            .with_db_path("/tmp/other.db");
        assert_eq!(config.bind_port, 8080);
        assert_eq!(config.db_path, PathBuf::from("/tmp/other.db"));
    }
}
