//! Line-based console chat over a single implicit session.

use crate::service::ChatService;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Session id the REPL uses for the whole process lifetime.
pub const REPL_SESSION_ID: &str = "repl";

const BANNER: &str = "Customer Support Agent - Command Line Version\n\
Type 'exit' to quit\n\
For the web interface, run: helpdesk --web\n";

/// Read lines from `input` until `exit` or end of input, answering each on `output`.
pub async fn run<R, W>(chat: &ChatService, input: R, mut output: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(BANNER.as_bytes()).await?;
    output.write_all(format!("{}\n", "-".repeat(50)).as_bytes()).await?;

    let mut lines = input.lines();
    loop {
        output.write_all(b"You: ").await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        // Stored as typed; only an exact `exit` (any case) quits.
        if line.eq_ignore_ascii_case("exit") {
            break;
        }

        let reply = chat.turn(REPL_SESSION_ID, &line).await;
        output.write_all(format!("Agent: {reply}\n").as_bytes()).await?;
    }
    output.write_all(b"\n").await?;
    output.flush().await
}
