// CLI module
// Argument parsing, command handlers and terminal rendering

mod args;
mod commands;
mod render;

pub use args::{Cli, Commands};
pub use commands::{build_service, handle_command};
pub use render::{format_digest, format_post, format_posts, format_sanitized, format_state};
