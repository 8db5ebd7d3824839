// Chat prompt backed by rustyline
//
// Chat messages can contain crisis disclosures, so they are never written to
// the history file. Only slash commands are remembered between sessions.

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};
use std::fs;
use std::path::PathBuf;

/// History file name inside the data directory
pub const HISTORY_FILE: &str = "command_history.txt";

/// Slash commands kept across sessions
const MAX_REMEMBERED_COMMANDS: usize = 100;

pub const PROMPT: &str = "you> ";

/// True when a line may be stored in persistent history
pub fn is_remembered(line: &str) -> bool {
    line.starts_with('/') && !line.contains(char::is_control)
}

pub struct InputHandler {
    editor: DefaultEditor,
    history_path: PathBuf,
}

impl InputHandler {
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        let config = Config::builder()
            .max_history_size(MAX_REMEMBERED_COMMANDS)
            .context("Invalid history size")?
            .auto_add_history(false)
            .build();
        let mut editor =
            DefaultEditor::with_config(config).context("Failed to initialize chat prompt")?;

        let history_path = data_dir.join(HISTORY_FILE);
        if history_path.exists() {
            if let Err(e) = editor.load_history(&history_path) {
                tracing::debug!("Ignoring unreadable history {}: {}", history_path.display(), e);
            }
        }

        Ok(Self {
            editor,
            history_path,
        })
    }

    /// Next trimmed line, or `None` on Ctrl+C / Ctrl+D
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let line = match self.editor.readline(PROMPT) {
            Ok(line) => line.trim().to_string(),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
            Err(err) => return Err(err).context("Failed to read chat input"),
        };

        if is_remembered(&line) {
            self.editor
                .add_history_entry(line.as_str())
                .context("Failed to record command")?;
        }
        Ok(Some(line))
    }

    /// Write remembered commands to the data directory
    pub fn save_history(&mut self) -> Result<()> {
        if let Some(parent) = self.history_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        self.editor
            .save_history(&self.history_path)
            .with_context(|| format!("Failed to save history to {}", self.history_path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_commands_remembered() {
        assert!(is_remembered("/country GB"));
        assert!(is_remembered("/help"));
        assert!(!is_remembered("I feel hopeless tonight"));
        assert!(!is_remembered(""));
    }

    #[test]
    fn test_control_characters_not_remembered() {
        assert!(!is_remembered("/country\u{1b}[2J"));
    }
}
