//! WebSocket client session management.

use futures_util::{
    SinkExt, StreamExt,
    stream::{SplitSink, SplitStream},
};
use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::{net::TcpStream, sync::mpsc, task::JoinHandle};
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async, tungstenite::protocol::Message,
};

use super::{
    error::ClientError,
    formatter::MessageFormatter,
    script::{REPLY_WAIT, SEND_INTERVAL, test_messages},
    ui::{PROMPT, ask_scripted_mode, is_quit_command, outgoing_message, print_incoming},
};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;
type WsSink = SplitSink<WsStream, Message>;

/// How the client produces outgoing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Send the built-in test messages, then wait for replies
    Auto,
    /// Read messages from a prompt
    Manual,
}

/// Connect to `url` and run one session.
///
/// If `mode` is `None` the user is asked on stdin.
pub async fn run_client(url: String, mode: Option<Mode>) -> Result<(), ClientError> {
    tracing::info!("Connecting to {}...", url);

    let (ws_stream, _response) = connect_async(&url)
        .await
        .map_err(|e| ClientError::Connection(e.to_string()))?;

    tracing::info!("Connected!");

    let (mut write, read) = ws_stream.split();
    let mut read_task = spawn_reader(read);

    let mode = match mode {
        Some(mode) => mode,
        None => {
            if ask_scripted_mode().await? {
                Mode::Auto
            } else {
                Mode::Manual
            }
        }
    };

    // If the server goes away first, stop sending
    let result = tokio::select! {
        result = run_mode(mode, &mut write) => result,
        _ = &mut read_task => {
            println!("\nConnection closed by server");
            Ok(())
        }
    };

    // Best-effort close handshake
    write.send(Message::Close(None)).await.ok();
    read_task.abort();

    result
}

async fn run_mode(mode: Mode, write: &mut WsSink) -> Result<(), ClientError> {
    match mode {
        Mode::Auto => run_scripted(write).await,
        Mode::Manual => run_manual(write).await,
    }
}

/// Spawns a task printing every frame from the server until the connection closes
fn spawn_reader(mut read: SplitStream<WsStream>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    print_incoming(&MessageFormatter::format_text(text.as_str()));
                }
                Ok(Message::Binary(data)) => {
                    print_incoming(&MessageFormatter::format_binary_message(data.len()));
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("Server closed the connection");
                    break;
                }
                Err(e) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    break;
                }
                _ => {}
            }
        }
    })
}

async fn send_text(write: &mut WsSink, text: String) -> Result<(), ClientError> {
    write
        .send(Message::Text(text.into()))
        .await
        .map_err(|e| ClientError::Send(e.to_string()))
}

/// Send the built-in script, then keep listening for a while
async fn run_scripted(write: &mut WsSink) -> Result<(), ClientError> {
    let messages = test_messages();
    let total = messages.len();

    println!("\nSending test messages...\n");
    for (index, message) in messages.into_iter().enumerate() {
        tokio::time::sleep(SEND_INTERVAL).await;
        println!("{}", MessageFormatter::format_sending(index + 1, total, &message));
        send_text(write, message).await?;
    }

    println!("\nAll test messages sent!");
    println!("Waiting {} seconds for replies...", REPLY_WAIT.as_secs());
    tokio::time::sleep(REPLY_WAIT).await;

    Ok(())
}

/// Send every line typed at the prompt until a quit word, Ctrl+C or Ctrl+D
async fn run_manual(write: &mut WsSink) -> Result<(), ClientError> {
    println!("\nType a message and press Enter ('quit' to exit)\n");

    // rustyline is synchronous, so it runs on its own thread
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    let Some(message) = outgoing_message(&line) else {
                        continue;
                    };
                    rl.add_history_entry(message).ok();
                    if input_tx.send(message.to_string()).is_err() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    while let Some(line) = input_rx.recv().await {
        if is_quit_command(&line) {
            println!("Exiting...");
            break;
        }
        send_text(write, line).await?;
    }

    Ok(())
}
