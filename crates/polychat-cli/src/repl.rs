//! Interactive REPL.
//!
//! Uses `rustyline` for readline-style editing. Input history stays in
//! memory; nothing from the session is written to disk.

use anyhow::Result;
use rustyline::config::Configurer;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, error};

use polychat_core::session::Transcript;
use polychat_providers::ChatProvider;

use crate::chat::{self, Input};
use crate::helpers;

/// Run the interactive REPL loop until `/exit`, Ctrl-C or Ctrl-D.
///
/// Exchange failures are reported and the loop continues.
pub async fn run(provider: &dyn ChatProvider, system_prompt: &str) -> Result<()> {
    helpers::print_banner(provider.provider());

    let mut editor = DefaultEditor::new()?;
    editor.set_max_history_size(1000)?;
    let mut transcript = Transcript::create(system_prompt);

    loop {
        let line = match editor.readline("You: ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Input error: {e}");
                break;
            }
        };

        match chat::parse_input(&line) {
            Input::Exit => break,
            Input::Clear => {
                transcript.clear();
                helpers::print_cleared();
            }
            Input::Message(text) => {
                let _ = editor.add_history_entry(text);
                helpers::print_thinking();

                let outcome = chat::send_turn(provider, &mut transcript, text).await;
                helpers::clear_thinking();
                match outcome {
                    Ok(result) => {
                        debug!(fallback = result.is_fallback(), "turn complete");
                        helpers::print_reply(&result.text);
                    }
                    Err(e) => {
                        error!(provider = %provider.provider(), error = %e, "exchange failed");
                        helpers::print_error(&e);
                    }
                }
            }
        }
    }

    Ok(())
}
