// CLI module
// Interactive chat and terminal rendering

mod commands;
mod input;
mod render;
mod repl;

pub use commands::{Command, HELP_TEXT};
pub use input::{is_remembered, InputHandler, HISTORY_FILE};
pub use render::{
    render_classification, render_content, render_countries, render_journal_entry,
    render_post, render_profile, render_week,
};
pub use repl::ChatRepl;
