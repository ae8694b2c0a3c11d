//! Message formatting utilities for client display.

use super::message::ServerMessage;

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format a parsed server message as one display line
    pub fn format(message: &ServerMessage) -> String {
        match message {
            ServerMessage::Welcome { message } => format!("Server: {}", message),
            ServerMessage::Echo { original, .. } => format!("Echo: {}", original),
            ServerMessage::Broadcast { from, message, .. } => format!("[{}]: {}", from, message),
            ServerMessage::Periodic {
                message,
                active_clients,
            } => format!("{} (clients: {})", message, active_clients),
        }
    }

    /// Format a text frame, falling back to the raw text if it cannot be parsed
    pub fn format_text(text: &str) -> String {
        match ServerMessage::parse(text) {
            Some(message) => Self::format(&message),
            None => Self::format_raw_message(text),
        }
    }

    /// Format an unrecognised text frame
    pub fn format_raw_message(text: &str) -> String {
        format!("Received: {}", text)
    }

    /// Format a binary frame notification
    pub fn format_binary_message(byte_count: usize) -> String {
        format!("Received binary data ({} bytes)", byte_count)
    }

    /// Format a progress line for the scripted mode, truncating long messages to 50 characters
    pub fn format_sending(index: usize, total: usize, message: &str) -> String {
        let preview: String = message.chars().take(50).collect();
        format!("[{}/{}] Sending: {}...", index, total, preview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_echo_and_broadcast() {
        // テスト項目: エコーとブロードキャストが表示用の文字列になる
        // given (前提条件):
        let echo = r#"{"type":"echo","original":"hi","timestamp":"12:34:56","client":"a:1","server":"s"}"#;
        let broadcast = r#"{"type":"broadcast","from":"127.0.0.1:1000","message":"hi","timestamp":"12:34:56"}"#;

        // then (期待する結果):
        assert_eq!(MessageFormatter::format_text(echo), "Echo: hi");
        assert_eq!(
            MessageFormatter::format_text(broadcast),
            "[127.0.0.1:1000]: hi"
        );
    }

    #[test]
    fn test_format_periodic() {
        // テスト項目: periodic はクライアント数付きで表示される
        // given (前提条件):
        let periodic = r#"{"type":"periodic","message":"tick","active_clients":2}"#;

        // then (期待する結果):
        assert_eq!(MessageFormatter::format_text(periodic), "tick (clients: 2)");
    }

    #[test]
    fn test_format_unknown_falls_back_to_raw() {
        // テスト項目: 解釈できないテキストはそのまま表示される
        // then (期待する結果):
        assert_eq!(
            MessageFormatter::format_text("not json"),
            "Received: not json"
        );
    }

    #[test]
    fn test_format_sending_truncates_by_characters() {
        // テスト項目: 送信プレビューは文字単位で 50 文字に切り詰められる
        // given (前提条件):
        let message = "Ж".repeat(60);

        // when (操作):
        let line = MessageFormatter::format_sending(5, 5, &message);

        // then (期待する結果):
        assert_eq!(line, format!("[5/5] Sending: {}...", "Ж".repeat(50)));
    }
}
