//! Terminal helpers for the client.

use std::io::Write;

use super::error::ClientError;

/// Prompt shown in manual mode
pub const PROMPT: &str = ">> ";

/// Print a line received from the server and redisplay the prompt
pub fn print_incoming(line: &str) {
    println!("\n{}", line);
    print!("{}", PROMPT);
    std::io::stdout().flush().ok();
}

/// Words that end manual mode
pub fn is_quit_command(line: &str) -> bool {
    matches!(line.to_lowercase().as_str(), "quit" | "exit" | "q")
}

/// The text to send for a line typed at the prompt.
///
/// Blank lines send nothing; anything else is sent as typed, surrounding
/// whitespace included.
pub fn outgoing_message(line: &str) -> Option<&str> {
    if line.trim().is_empty() {
        None
    } else {
        Some(line)
    }
}

/// Ask on stdin whether to run the scripted or the manual mode.
///
/// Returns `true` for the scripted mode (`1`).
pub async fn ask_scripted_mode() -> Result<bool, ClientError> {
    println!("Mode:");
    println!("1. Automatic (send the built-in test messages)");
    println!("2. Manual (type messages yourself)");
    print!("Choose a mode (1/2): ");
    std::io::stdout().flush().ok();

    let answer = tokio::task::spawn_blocking(|| {
        let mut line = String::new();
        std::io::stdin().read_line(&mut line).map(|_| line)
    })
    .await
    .map_err(|e| ClientError::Input(e.to_string()))?
    .map_err(|e| ClientError::Input(e.to_string()))?;

    Ok(answer.trim() == "1")
}
