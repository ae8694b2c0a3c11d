//! Server configuration.

/// Default bind address (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_PORT: u16 = 8765;

/// Runtime configuration of the relay server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port number to bind to
    pub port: u16,
    /// Value of the `server` field in echo replies
    pub banner: String,
}

impl ServerConfig {
    /// Banner used when none is configured
    pub fn default_banner() -> String {
        format!("Yamabiko WebSocket Server v{}", env!("CARGO_PKG_VERSION"))
    }

    /// `host:port` string passed to the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            banner: Self::default_banner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_listens_on_all_interfaces() {
        // テスト項目: デフォルトでは全インターフェースの固定ポートで待ち受ける
        // given (前提条件):
        let config = ServerConfig::default();

        // then (期待する結果):
        assert_eq!(config.bind_addr(), "0.0.0.0:8765");
        assert!(config.banner.starts_with("Yamabiko WebSocket Server v"));
    }

    #[test]
    fn test_bind_addr_joins_host_and_port() {
        // テスト項目: 待ち受けアドレスは host:port の形になる
        // given (前提条件):
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            ..ServerConfig::default()
        };

        // then (期待する結果):
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
    }
}
