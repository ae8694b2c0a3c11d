//! Built-in test script for the automatic mode.

use std::time::Duration;

/// Pause between two scripted messages
pub const SEND_INTERVAL: Duration = Duration::from_secs(2);

/// How long to keep listening for replies after the last scripted message
pub const REPLY_WAIT: Duration = Duration::from_secs(10);

/// Messages sent in automatic mode: plain text, a sentence, a JSON payload,
/// emoji and the full Cyrillic alphabet
pub fn test_messages() -> Vec<String> {
    vec![
        "Hello, server!".to_string(),
        "This is a test message for the relay".to_string(),
        serde_json::json!({"action": "test", "data": "JSON message"}).to_string(),
        "Message with emoji 🚀🔥💻".to_string(),
        "Cyrillic: АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ".to_string(),
    ]
}
