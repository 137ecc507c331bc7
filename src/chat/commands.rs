//! Slash command parsing for the chat application.
//!
//! This module handles parsing of special commands that start with `/`,
//! allowing users to control the chat session without sending messages
//! to the API.

/// A parsed chat command.
///
/// These commands control the chat session and are not sent to the API.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatCommand {
    /// Start a new chat (reseed the conversation).
    New,

    /// Copy a code block from the last bot reply to the clipboard.
    /// `None` means the most recent block.
    Copy(Option<usize>),

    /// Change the model.
    Model(String),

    /// Display session statistics (message count, current model, etc.).
    Stats,

    /// Display help information.
    Help,

    /// Exit the chat application.
    Quit,

    /// Report a parsing error back to the caller.
    Invalid(String),
}

/// Parses user input for slash commands.
///
/// Returns `Some(ChatCommand)` if the input is a command,
/// or `None` if it should be treated as a regular message.
///
/// # Examples
///
/// ```
/// # use infera::chat::parse_command;
/// assert!(parse_command("/quit").is_some());
/// assert!(parse_command("/copy 2").is_some());
/// assert!(parse_command("What is Rust?").is_none());
/// ```
pub fn parse_command(input: &str) -> Option<ChatCommand> {
    let input = input.trim();

    if !input.starts_with('/') {
        return None;
    }

    let mut parts = input[1..].splitn(2, ' ');
    let command = parts.next()?.to_lowercase();
    let argument = parts.next().map(|s| s.trim()).filter(|s| !s.is_empty());

    let result = match command.as_str() {
        "new" => ChatCommand::New,
        "copy" => match argument {
            Some(arg) => match arg.parse::<usize>() {
                Ok(n) if n >= 1 => ChatCommand::Copy(Some(n)),
                _ => ChatCommand::Invalid(
                    "/copy expects a block number starting at 1".to_string(),
                ),
            },
            None => ChatCommand::Copy(None),
        },
        "model" => match argument {
            Some(model) => ChatCommand::Model(model.to_string()),
            None => ChatCommand::Invalid("/model requires a model name".to_string()),
        },
        "stats" | "status" => ChatCommand::Stats,
        "help" | "?" => ChatCommand::Help,
        "quit" | "exit" | "q" => ChatCommand::Quit,
        _ => ChatCommand::Invalid(format!("Unknown command: /{command}")),
    };

    Some(result)
}

/// Returns the help text listing available commands.
pub fn help_text() -> &'static str {
    "Available commands:\n\
     /new              Start a new chat\n\
     /copy [n]         Copy code block n of the last reply (default: last)\n\
     /model <name>     Change the model\n\
     /stats            Show session statistics\n\
     /help             Show this help\n\
     /quit             Exit"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_not_a_command() {
        assert!(parse_command("hello there").is_none());
        assert!(parse_command("").is_none());
    }

    #[test]
    fn parses_simple_commands() {
        assert_eq!(parse_command("/new"), Some(ChatCommand::New));
        assert_eq!(parse_command("/quit"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("/exit"), Some(ChatCommand::Quit));
        assert_eq!(parse_command("/help"), Some(ChatCommand::Help));
        assert_eq!(parse_command("/stats"), Some(ChatCommand::Stats));
    }

    #[test]
    fn parses_copy_with_and_without_index() {
        assert_eq!(parse_command("/copy"), Some(ChatCommand::Copy(None)));
        assert_eq!(parse_command("/copy 2"), Some(ChatCommand::Copy(Some(2))));
        assert!(matches!(
            parse_command("/copy zero"),
            Some(ChatCommand::Invalid(_))
        ));
        assert!(matches!(
            parse_command("/copy 0"),
            Some(ChatCommand::Invalid(_))
        ));
    }

    #[test]
    fn parses_model_command() {
        assert_eq!(
            parse_command("/model gemini-2.5-pro"),
            Some(ChatCommand::Model("gemini-2.5-pro".to_string()))
        );
        assert!(matches!(
            parse_command("/model"),
            Some(ChatCommand::Invalid(_))
        ));
    }

    #[test]
    fn unknown_command_reports_invalid() {
        assert!(matches!(
            parse_command("/frobnicate"),
            Some(ChatCommand::Invalid(_))
        ));
    }

    #[test]
    fn commands_are_case_insensitive() {
        assert_eq!(parse_command("/NEW"), Some(ChatCommand::New));
        assert_eq!(parse_command("/Quit"), Some(ChatCommand::Quit));
    }
}
