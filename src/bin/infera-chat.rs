//! Interactive chat application for conversing with Infera.
//!
//! This binary provides a REPL interface for chatting with Gemini models,
//! including markdown-aware display of replies and clipboard copying of
//! code blocks.
//!
//! # Usage
//!
//! ```bash
//! # Basic usage with default settings
//! infera-chat
//!
//! # Specify a model
//! infera-chat --model gemini-2.5-pro
//!
//! # Introduce yourself differently
//! infera-chat --user-name Ada --user-role Engineer
//!
//! # Disable colors (useful for piping output)
//! infera-chat --no-color
//! ```
//!
//! # Commands
//!
//! While chatting, you can use slash commands:
//! - `/new` - Start a new chat
//! - `/copy [n]` - Copy a code block from the last reply
//! - `/model <name>` - Change the model
//! - `/stats` - Show session statistics
//! - `/help` - Show available commands
//! - `/quit` - Exit the application

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use infera::chat::{
    AnsiRenderer, ChatArgs, ChatCommand, ChatConfig, ChatSession, Renderer, TurnOutcome,
    help_text, parse_command,
};
use infera::clipboard::{Clipboard, SystemClipboard};
use infera::markdown::code_blocks;
use infera::types::Sender;
use infera::{Gemini, Transport};

/// Main entry point for the infera-chat application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ChatArgs::from_command_line_relaxed("infera-chat [OPTIONS]");
    let config = ChatConfig::from(args);
    let use_color = config.use_color;

    let client = Gemini::new(None)?;
    let mut session = ChatSession::new(client, config);
    let mut renderer = AnsiRenderer::with_color(use_color);
    let mut clipboard = SystemClipboard::new();
    let mut rl = DefaultEditor::new()?;

    println!("Infera (model: {})", session.model());
    println!("Type /help for commands, /quit to exit\n");

    // Show the seeded introduction and greeting.
    for message in session.messages() {
        renderer.print_message(message);
    }

    loop {
        let readline = rl.readline("You: ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                // Check for slash commands
                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        ChatCommand::Quit => {
                            println!("Goodbye!");
                            break;
                        }
                        ChatCommand::New => {
                            session.reset();
                            renderer.print_info("Started a new chat.\n");
                            for message in session.messages() {
                                renderer.print_message(message);
                            }
                        }
                        ChatCommand::Copy(index) => {
                            copy_code_block(&session, &mut clipboard, &mut renderer, index);
                        }
                        ChatCommand::Model(model_name) => {
                            session.set_model(model_name.clone());
                            renderer.print_info(&format!("Model changed to: {}", model_name));
                        }
                        ChatCommand::Stats => {
                            print_stats(&session);
                        }
                        ChatCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        ChatCommand::Invalid(msg) => {
                            renderer.print_error(&msg);
                        }
                    }
                    continue;
                }

                session.update_draft(line);
                renderer.print_typing();
                let outcome = session.submit().await;

                if outcome != TurnOutcome::Ignored {
                    if let Some(reply) = session.messages().last() {
                        renderer.print_message(reply);
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("{err}"));
                break;
            }
        }
    }

    Ok(())
}

/// Copies the requested code block from the most recent bot reply.
fn copy_code_block<T: Transport>(
    session: &ChatSession<T>,
    clipboard: &mut dyn Clipboard,
    renderer: &mut dyn Renderer,
    index: Option<usize>,
) {
    let Some(reply) = session
        .messages()
        .iter()
        .rev()
        .find(|m| m.sender == Sender::Bot)
    else {
        renderer.print_error("No bot reply to copy from.");
        return;
    };

    let blocks = code_blocks(&reply.text);
    if blocks.is_empty() {
        renderer.print_error("The last reply has no code blocks.");
        return;
    }

    let (ordinal, block) = match index {
        Some(n) => match blocks.get(n - 1) {
            Some(block) => (n, block),
            None => {
                renderer.print_error(&format!(
                    "No code block {} (the last reply has {}).",
                    n,
                    blocks.len()
                ));
                return;
            }
        },
        None => (blocks.len(), blocks.last().expect("blocks is non-empty")),
    };

    if clipboard.copy(&block.code) {
        renderer.print_info(&format!("Copied code block {}.", ordinal));
    } else {
        renderer.print_error("Could not access the system clipboard.");
    }
}

/// Prints session statistics.
fn print_stats<T: Transport>(session: &ChatSession<T>) {
    let stats = session.stats();
    println!("Session stats:");
    println!("    Model: {}", stats.model);
    println!("    Messages: {}", stats.message_count);
    println!("    Turns: {}", stats.turn_count);
    println!("    Fallback replies: {}", stats.fallback_count);
    if let Some(err) = session.last_error() {
        println!("    Last error: {}", err);
    }
}
