//! Input-thread bootstrap so stdin reads stay off the event loop.

use std::io::{self, BufRead};
use std::thread;

use crossbeam_channel::Sender;
use tracing::{debug, warn};

pub(crate) fn spawn_input_thread(tx: Sender<String>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    warn!(%err, "stdin read error");
                    break;
                }
            };
            if tx.send(line).is_err() {
                return;
            }
        }
        debug!("stdin closed");
    })
}
