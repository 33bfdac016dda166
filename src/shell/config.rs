// Shell configuration from the environment.
//
// Purpose
// - Keep the bind address out of the code; everything else is wired in main.
//
// Responsibilities
// - Read HOST and PORT with sensible local defaults. A malformed PORT falls
//   back to the default rather than crashing the shell.

use std::env;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub host: String,
    pub port: u16,
}

impl ShellConfig {
    pub fn from_env() -> Self {
        Self::from_values(env::var("HOST").ok(), env::var("PORT").ok())
    }

    fn from_values(host: Option<String>, port: Option<String>) -> Self {
        Self {
            host: host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: port
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
