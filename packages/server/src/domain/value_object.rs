//! Value objects.

use std::{fmt, net::SocketAddr};

use super::ValueObjectError;

/// Identifier of one open connection, rendered as `ip:port` of the remote peer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(String);

impl ConnectionId {
    /// Create a ConnectionId, validating the `host:port` shape
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::ConnectionIdEmpty);
        }

        match value.rsplit_once(':') {
            Some((host, port)) if !host.is_empty() && port.parse::<u16>().is_ok() => {
                Ok(Self(value))
            }
            _ => Err(ValueObjectError::ConnectionIdMalformed(value)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// IPv6 addresses are joined without brackets, e.g. `::1:52100`.
impl From<SocketAddr> for ConnectionId {
    fn from(addr: SocketAddr) -> Self {
        Self(format!("{}:{}", addr.ip(), addr.port()))
    }
}

impl TryFrom<String> for ConnectionId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Verbatim text of one inbound message.
///
/// Any string is accepted, including the empty one. The relay never rewrites it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageText(String);

impl MessageText {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for MessageText {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MessageText {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_connection_id_from_ipv4_socket_addr() {
        // テスト項目: IPv4 のソケットアドレスから ip:port 形式の ID が作られる
        // given (前提条件):
        let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 52100);

        // when (操作):
        let id = ConnectionId::from(addr);

        // then (期待する結果):
        assert_eq!(id.as_str(), "127.0.0.1:52100");
    }

    #[test]
    fn test_connection_id_from_ipv6_socket_addr_has_no_brackets() {
        // テスト項目: IPv6 のアドレスは角括弧なしで連結される
        // given (前提条件):
        let addr = SocketAddr::new(IpAddr::V6(Ipv6Addr::LOCALHOST), 8765);

        // when (操作):
        let id = ConnectionId::from(addr);

        // then (期待する結果):
        assert_eq!(id.as_str(), "::1:8765");
        assert!(ConnectionId::new(id.clone().into_string()).is_ok());
    }

    #[test]
    fn test_connection_id_rejects_empty() {
        // テスト項目: 空文字列は拒否される
        // given (前提条件):
        let value = String::new();

        // when (操作):
        let result = ConnectionId::try_from(value);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::ConnectionIdEmpty));
    }

    #[test]
    fn test_connection_id_rejects_missing_or_invalid_port() {
        // テスト項目: ポートがない、または不正な ID は拒否される
        // given (前提条件):
        let cases = ["localhost", "localhost:", ":8080", "127.0.0.1:99999", "host:abc"];

        for case in cases {
            // when (操作):
            let result = ConnectionId::new(case.to_string());

            // then (期待する結果):
            assert_eq!(
                result,
                Err(ValueObjectError::ConnectionIdMalformed(case.to_string())),
                "case: {}",
                case
            );
        }
    }

    #[test]
    fn test_message_text_keeps_text_verbatim() {
        // テスト項目: メッセージ本文は前後の空白や非 ASCII 文字も含めてそのまま保持される
        // given (前提条件):
        let raw = "  Сообщение с эмодзи 🚀  ";

        // when (操作):
        let text = MessageText::from(raw);

        // then (期待する結果):
        assert_eq!(text.as_str(), raw);
        assert_eq!(MessageText::new("").as_str(), "");
    }
}
