// Interactive support chat
//
// Reads lines with rustyline when attached to a terminal, plain stdin
// otherwise. Slash commands are handled locally; everything else goes to
// the ChatBot.

use anyhow::Result;
use std::io::{self, BufRead, IsTerminal, Write};

use super::commands::{Command, HELP_TEXT};
use super::input::{InputHandler, PROMPT};
use super::render::{render_countries, render_profile};
use crate::chatbot::{ChatBot, ChatSession, ReplyKind};
use crate::config::Config;
use crate::crisis::lookup;
use crate::errors::unknown_country_message;

pub struct ChatRepl {
    bot: ChatBot,
    session: ChatSession,
    input_handler: Option<InputHandler>,
}

impl ChatRepl {
    pub fn new(config: &Config) -> Result<Self> {
        let bot = ChatBot::new(config.classifier()?);
        let session = ChatSession::new(config.country.clone());

        let input_handler = if io::stdin().is_terminal() {
            match InputHandler::new(config.data_dir.clone()) {
                Ok(handler) => Some(handler),
                Err(e) => {
                    tracing::warn!("Readline unavailable, using plain stdin: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Ok(Self {
            bot,
            session,
            input_handler,
        })
    }

    pub fn run(mut self) -> Result<()> {
        println!("{}", self.bot.greeting());
        println!("(Type /help for commands, /quit to exit)\n");

        loop {
            let line = match self.read_line()? {
                Some(line) => line,
                None => break,
            };

            if line.is_empty() {
                continue;
            }

            if line.starts_with('/') {
                match Command::parse(&line) {
                    Some(Command::Quit) => break,
                    Some(command) => self.handle_command(command),
                    None => {
                        eprintln!("Unknown command: {}", line);
                        eprintln!("Type /help for available commands");
                    }
                }
                continue;
            }

            if let Some(reply) = self.bot.reply(&mut self.session, &line) {
                println!("\n{}\n", reply.text);
                if reply.kind == ReplyKind::Crisis {
                    if let Some(banner) = self.bot.crisis_banner(&self.session) {
                        println!("\x1b[1;31m{}\x1b[0m\n", banner);
                    }
                }
            }
        }

        if let Some(handler) = &mut self.input_handler {
            if let Err(e) = handler.save_history() {
                tracing::warn!("Could not save chat history: {}", e);
            }
        }

        println!("Take care of yourself. Goodbye!");
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        if let Some(handler) = &mut self.input_handler {
            return handler.read_line();
        }

        print!("{}", PROMPT);
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Help => println!("{}", HELP_TEXT),
            Command::Clear => {
                self.session.reset();
                println!("Crisis banner dismissed.");
            }
            Command::Contacts => println!("{}", render_profile(self.session.profile())),
            Command::Countries => println!("{}", render_countries()),
            Command::Country(code) => {
                if lookup(&code).is_none() {
                    eprintln!("{}", unknown_country_message(&code, self.session.profile().code));
                    return;
                }
                self.session.set_country(code);
                println!("Country set to {}", self.session.profile().country_name);
            }
            Command::Quit => {}
        }
    }
}
