//! Transport configuration types.

use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

/// Transport configuration options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (default for MCP).
    #[cfg(feature = "stdio")]
    Stdio,

    /// HTTP transport with JSON-RPC over POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path for JSON-RPC endpoint.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(feature = "http")]
const DEFAULT_HTTP_PORT: u16 = 8787;

/// Bind address used when the port comes from a hosting platform's `PORT`.
#[cfg(feature = "http")]
const PLATFORM_HOST: &str = "0.0.0.0";

#[cfg(feature = "http")]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[cfg(feature = "http")]
fn default_rpc_path() -> String {
    "/mcp".to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            return Self::Stdio;
        }

        #[cfg(all(not(feature = "stdio"), feature = "http"))]
        {
            return Self::Http(HttpConfig::default());
        }

        #[cfg(not(any(feature = "stdio", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio or http");
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_HTTP_PORT,
            host: default_host(),
            rpc_path: default_rpc_path(),
            enable_cors: default_cors(),
        }
    }
}

impl TransportConfig {
    /// Load transport config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(
            |key| std::env::var(key).ok(),
            std::io::stdin().is_terminal(),
        )
    }

    /// Build the transport config from a variable lookup.
    ///
    /// `MCP_TRANSPORT` picks the transport explicitly. Without it, a `PORT`
    /// variable (set by most hosting platforms) selects HTTP on all
    /// interfaces. A server started from an interactive terminal has no MCP
    /// client on stdin and serves HTTP locally. Otherwise the default
    /// transport is used.
    #[cfg_attr(not(feature = "http"), allow(unused_variables))]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, interactive: bool) -> Self {
        let transport = lookup("MCP_TRANSPORT").unwrap_or_default().to_lowercase();

        match transport.as_str() {
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig::from_lookup(&lookup)),
            #[cfg(feature = "stdio")]
            "stdio" => Self::Stdio,
            #[cfg(feature = "http")]
            "" if lookup("PORT").is_some() => {
                let mut cfg = HttpConfig::from_lookup(&lookup);
                if lookup("MCP_HTTP_HOST").is_none() {
                    cfg.host = PLATFORM_HOST.to_string();
                }
                Self::Http(cfg)
            }
            #[cfg(feature = "http")]
            "" if interactive => Self::Http(HttpConfig::from_lookup(&lookup)),
            _ => Self::default(),
        }
    }

    /// Check that the transport settings are usable.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => Ok(()),
            #[cfg(feature = "http")]
            Self::Http(cfg) => cfg.validate(),
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}:{}{}", cfg.host, cfg.port, cfg.rpc_path),
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("MCP_HTTP_PORT")
            .or_else(|| lookup("PORT"))
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_HTTP_PORT);
        let host = lookup("MCP_HTTP_HOST").unwrap_or_else(default_host);
        let rpc_path = lookup("MCP_HTTP_PATH").unwrap_or_else(default_rpc_path);
        let enable_cors = lookup("MCP_HTTP_CORS")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true);

        Self {
            port,
            host,
            rpc_path,
            enable_cors,
        }
    }

    fn validate(&self) -> Result<(), String> {
        if !self.rpc_path.starts_with('/') {
            return Err(format!("HTTP path '{}' must start with '/'", self.rpc_path));
        }
        if self.rpc_path == "/" || self.rpc_path == "/health" {
            return Err(format!(
                "HTTP path '{}' collides with a built-in route",
                self.rpc_path
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[cfg(feature = "stdio")]
    #[test]
    fn test_defaults_to_stdio() {
        assert_eq!(TransportConfig::from_lookup(lookup(&[]), false), TransportConfig::Stdio);
        assert_eq!(TransportConfig::default(), TransportConfig::Stdio);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_explicit_http() {
        let config = TransportConfig::from_lookup(
            lookup(&[
                ("MCP_TRANSPORT", "HTTP"),
                ("MCP_HTTP_PORT", "9000"),
                ("MCP_HTTP_CORS", "false"),
            ]),
            false,
        );
        let TransportConfig::Http(cfg) = config else {
            panic!("expected HTTP transport");
        };
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.rpc_path, "/mcp");
        assert!(!cfg.enable_cors);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_platform_port_selects_http() {
        let config = TransportConfig::from_lookup(lookup(&[("PORT", "10000")]), false);
        assert_eq!(
            config,
            TransportConfig::Http(HttpConfig {
                port: 10000,
                host: "0.0.0.0".to_string(),
                ..Default::default()
            })
        );
    }

    #[cfg(all(feature = "http", feature = "stdio"))]
    #[test]
    fn test_explicit_stdio_wins_over_port() {
        let config =
            TransportConfig::from_lookup(lookup(&[("MCP_TRANSPORT", "stdio"), ("PORT", "10000")]), true);
        assert_eq!(config, TransportConfig::Stdio);
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_interactive_terminal_serves_http_locally() {
        let config = TransportConfig::from_lookup(lookup(&[]), true);
        assert_eq!(config, TransportConfig::Http(HttpConfig::default()));

        let config = TransportConfig::from_lookup(lookup(&[("PORT", "10000")]), true);
        let TransportConfig::Http(cfg) = config else {
            panic!("expected HTTP transport");
        };
        assert_eq!(cfg.host, "0.0.0.0");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_path_validation() {
        let mut cfg = HttpConfig::default();
        assert!(cfg.validate().is_ok());

        cfg.rpc_path = "mcp".to_string();
        assert!(cfg.validate().is_err());

        cfg.rpc_path = "/health".to_string();
        assert!(TransportConfig::Http(cfg).validate().is_err());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_description() {
        let config = TransportConfig::Http(HttpConfig::default());
        assert_eq!(config.description(), "HTTP on 127.0.0.1:8787/mcp");
    }
}
