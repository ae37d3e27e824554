use anyhow::{Context, Result};
use std::io::{self, IsTerminal, Read};
use std::time::Duration;
use tokio::sync::oneshot;

/// Read all of stdin. An interactive terminal counts as no input, and so does a pipe that
/// stays silent for longer than `wait`.
///
/// The read runs on a detached thread: a blocking stdin read cannot be cancelled, and the
/// process must be able to exit while the pipe is still open.
pub(crate) async fn read_stdin(wait: Option<Duration>) -> Result<String> {
    if io::stdin().is_terminal() {
        return Ok(String::new());
    }

    let (data_tx, data_rx) = oneshot::channel::<io::Result<String>>();
    std::thread::spawn(move || {
        let mut data = String::new();
        let result = io::stdin().lock().read_to_string(&mut data).map(|_| data);
        let _ = data_tx.send(result);
    });

    let received = match wait {
        Some(wait) => match tokio::time::timeout(wait, data_rx).await {
            Ok(received) => received,
            Err(_) => {
                log::warn!("Nothing arrived on stdin within {}ms", wait.as_millis());
                return Ok(String::new());
            }
        },
        None => data_rx.await,
    };

    received
        .context("stdin reader stopped")?
        .context("Failed to read stdin")
}
