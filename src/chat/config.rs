//! Configuration types for the chat application.
//!
//! This module provides CLI argument parsing via `arrrg` and configuration
//! structures for controlling chat behavior.

use arrrg_derive::CommandLine;

/// Default model for conversations.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default user display name used in the seed introduction.
pub const DEFAULT_USER_NAME: &str = "User 1";

/// Default user role used in the seed introduction.
pub const DEFAULT_USER_ROLE: &str = "Boss";

/// Command-line arguments for the infera-chat tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// Model to use for chat.
    #[arrrg(optional, "Model to use (default: gemini-2.0-flash)", "MODEL")]
    pub model: Option<String>,

    /// Name the user introduces themselves with.
    #[arrrg(optional, "Your display name (default: User 1)", "NAME")]
    pub user_name: Option<String>,

    /// Role the user introduces themselves with.
    #[arrrg(optional, "Your role in the introduction (default: Boss)", "ROLE")]
    pub user_role: Option<String>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,
}

/// Configuration for a chat session.
///
/// This struct holds the resolved configuration values after processing
/// command-line arguments with appropriate defaults.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// The model to use for generating responses.
    pub model: String,

    /// The user's display name, woven into the seed introduction.
    pub user_name: String,

    /// The user's role, woven into the seed introduction.
    pub user_role: String,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,
}

impl ChatConfig {
    /// Creates a new ChatConfig with default values.
    pub fn new() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            user_name: DEFAULT_USER_NAME.to_string(),
            user_role: DEFAULT_USER_ROLE.to_string(),
            use_color: true,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the user's display name.
    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }

    /// Sets the user's role.
    pub fn with_user_role(mut self, user_role: impl Into<String>) -> Self {
        self.user_role = user_role.into();
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ChatArgs> for ChatConfig {
    fn from(args: ChatArgs) -> Self {
        ChatConfig {
            model: args.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            user_name: args
                .user_name
                .unwrap_or_else(|| DEFAULT_USER_NAME.to_string()),
            user_role: args
                .user_role
                .unwrap_or_else(|| DEFAULT_USER_ROLE.to_string()),
            use_color: !args.no_color,
        }
    }
}
