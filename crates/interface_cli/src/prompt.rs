//! Interactive confirmation on the terminal

use async_trait::async_trait;
use std::io::{self, BufRead, Write};

use domain_policy::ConfirmationGate;

/// Asks on stderr and reads a y/N answer from stdin
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirmation;

#[async_trait]
impl ConfirmationGate for StdinConfirmation {
    async fn confirm(&self, prompt: &str) -> bool {
        let prompt = prompt.to_string();
        let answer = tokio::task::spawn_blocking(move || {
            let mut stderr = io::stderr();
            write!(stderr, "{prompt} [y/N] ").ok();
            stderr.flush().ok();
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line).map(|_| line)
        })
        .await;

        match answer {
            Ok(Ok(line)) => is_yes(&line),
            _ => false,
        }
    }
}

/// Only an explicit "y" or "yes" confirms
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
