// Slash command parsing for the chat REPL

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    /// Clear the crisis flag for this conversation
    Clear,
    /// Show contacts for the session's country
    Contacts,
    /// Switch the session to another country code
    Country(String),
    /// List supported country codes
    Countries,
}

impl Command {
    /// Parse a slash command. `None` for anything unrecognised.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();

        match trimmed {
            "/help" => return Some(Command::Help),
            "/quit" | "/exit" => return Some(Command::Quit),
            "/clear" | "/reset" => return Some(Command::Clear),
            "/contacts" | "/sos" => return Some(Command::Contacts),
            "/countries" | "/country" => return Some(Command::Countries),
            _ => {}
        }

        // /country <CODE>; codes are matched case-sensitively downstream,
        // so normalise to the upper-case form the table uses
        if let Some(rest) = trimmed.strip_prefix("/country ") {
            let code = rest.trim();
            if !code.is_empty() {
                return Some(Command::Country(code.to_uppercase()));
            }
        }

        None
    }
}

pub const HELP_TEXT: &str = "Available commands:
  /help           - Show this help message
  /contacts       - Show crisis contacts for your country
  /country <CODE> - Switch country (e.g. /country GB)
  /countries      - List supported countries
  /clear          - Dismiss the crisis banner
  /quit           - Exit";
