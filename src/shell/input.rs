/*!
 * Input Reader
 * Forwards terminal lines to the scheduler task
 */

use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Read lines from stdin until EOF, sending each one to `commands`
pub fn spawn_stdin_reader(
    prompt: String,
    pacing: Duration,
    commands: mpsc::UnboundedSender<String>,
) -> JoinHandle<()> {
    tokio::spawn(forward_lines(
        BufReader::new(tokio::io::stdin()),
        prompt,
        pacing,
        commands,
    ))
}

/// Prompt, read a line, forward it, pause; repeat until EOF
///
/// Only EOF (or a read error) ends input. Dropping `commands` then tells
/// the scheduler task input is over.
pub async fn forward_lines<R>(
    reader: R,
    prompt: String,
    pacing: Duration,
    commands: mpsc::UnboundedSender<String>,
) where
    R: AsyncBufRead + Unpin,
{
    let mut reader = reader;
    let mut buf = Vec::new();

    loop {
        show_prompt(&prompt);

        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => {
                debug!("End of input");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "Failed to read input");
                break;
            }
        }

        // Undecodable bytes still make a line; the parser rejects it
        let line = String::from_utf8_lossy(&buf)
            .trim_end_matches(['\n', '\r'])
            .to_string();

        if commands.send(line).is_err() {
            debug!("Scheduler task gone, input reader stopping");
            break;
        }

        tokio::time::sleep(pacing).await;
    }
}

fn show_prompt(prompt: &str) {
    if prompt.is_empty() {
        return;
    }
    let mut stdout = std::io::stdout().lock();
    let _ = write!(stdout, "{}", prompt);
    let _ = stdout.flush();
}
