//! Output rendering for the chat application.
//!
//! This module provides a trait-based rendering abstraction over the
//! presentation boundary. The default implementation prints to stdout and
//! uses ANSI escape codes to set the bot's name and code blocks apart from
//! regular text.

use std::io::{self, Stdout, Write};

use crate::markdown;
use crate::types::{BOT_NAME, Message, Sender};

/// ANSI escape code for dim text (used for code block bodies).
const ANSI_DIM: &str = "\x1b[2m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// ANSI escape code for cyan text (used for the bot name).
const ANSI_CYAN: &str = "\x1b[36m";

/// ANSI escape code for yellow text (used for code block labels).
const ANSI_YELLOW: &str = "\x1b[33m";

/// Trait for rendering chat output.
///
/// The renderer never mutates conversation state; it only observes
/// messages and session flags handed to it.
pub trait Renderer {
    /// Print one conversation message.
    fn print_message(&mut self, message: &Message);

    /// Print the typing indicator shown while a turn is in flight.
    fn print_typing(&mut self);

    /// Print an informational message.
    fn print_info(&mut self, info: &str);

    /// Print an error message.
    fn print_error(&mut self, error: &str);
}

/// Stdout renderer with optional ANSI styling.
///
/// Bot messages are scanned for code blocks; each block is printed dim,
/// indented, and labeled with its ordinal so `/copy n` can address it.
pub struct AnsiRenderer {
    stdout: Stdout,
    use_color: bool,
}

impl AnsiRenderer {
    /// Creates a new AnsiRenderer with ANSI colors enabled.
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            use_color: true,
        }
    }

    /// Creates a new AnsiRenderer with specified color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            use_color,
        }
    }

    fn flush(&mut self) {
        let _ = self.stdout.flush();
    }

    fn print_bot_body(&mut self, text: &str) {
        for line in bot_body_lines(text, self.use_color) {
            println!("{line}");
        }
    }
}

/// Lays out a bot reply for printing, one output line per element.
///
/// Code blocks are replaced by a numbered label followed by their indented
/// body. Blocks are found with [`markdown::code_block_spans`], the same
/// scan `/copy n` numbers against, so label N always names the block that
/// copying N yields.
fn bot_body_lines(text: &str, use_color: bool) -> Vec<String> {
    let mut lines = Vec::new();
    let mut cursor = 0usize;

    for (index, (span, block)) in markdown::code_block_spans(text).into_iter().enumerate() {
        for line in text[cursor..span.start].lines() {
            lines.push(line.to_string());
        }
        let ordinal = index + 1;
        if use_color {
            lines.push(format!("{ANSI_YELLOW}[code {ordinal}]{ANSI_RESET}"));
        } else {
            lines.push(format!("[code {ordinal}]"));
        }
        for line in block.code.lines() {
            if use_color {
                lines.push(format!("    {ANSI_DIM}{line}{ANSI_RESET}"));
            } else {
                lines.push(format!("    {line}"));
            }
        }
        cursor = span.end;
    }

    for line in text[cursor..].lines() {
        lines.push(line.to_string());
    }

    lines
}

impl Default for AnsiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for AnsiRenderer {
    fn print_message(&mut self, message: &Message) {
        match message.sender {
            Sender::User => {
                println!("You: {}", message.text);
            }
            Sender::Bot => {
                if self.use_color {
                    println!("{ANSI_CYAN}{BOT_NAME}:{ANSI_RESET}");
                } else {
                    println!("{BOT_NAME}:");
                }
                self.print_bot_body(&message.text);
            }
        }
        println!();
        self.flush();
    }

    fn print_typing(&mut self) {
        if self.use_color {
            println!("{ANSI_DIM}{BOT_NAME}: Typing...{ANSI_RESET}");
        } else {
            println!("{BOT_NAME}: Typing...");
        }
        self.flush();
    }

    fn print_info(&mut self, info: &str) {
        println!("{info}");
        self.flush();
    }

    fn print_error(&mut self, error: &str) {
        eprintln!("Error: {error}");
    }
}
