// Mindhaven - local-first mental wellness companion
// Main entry point

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Read};
use std::path::Path;
use tracing_subscriber::prelude::*;

use mindhaven::cli::{
    render_classification, render_content, render_countries, render_journal_entry,
    render_post, render_profile, render_week, ChatRepl,
};
use mindhaven::community::{self, category_filter, NewPost, PostCategory};
use mindhaven::config::{default_data_dir, load_config, Config};
use mindhaven::content::{self, ContentCategory};
use mindhaven::crisis::{lookup, resolve_crisis_contacts};
use mindhaven::errors::{config_parse_error, store_error, unknown_country_message, MindhavenError};
use mindhaven::journal::{self, NewJournalEntry};
use mindhaven::mood::{weekly_overview, MoodEntry};
use mindhaven::store::{EntryStore, JsonlStore};

#[derive(Parser, Debug)]
#[command(name = "mindhaven")]
#[command(about = "Mood journal, support chat and crisis contacts", version)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Parser, Debug)]
enum Command {
    /// Classify text (reads stdin when no text is given)
    Classify {
        text: Vec<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show crisis contacts
    Contacts {
        /// Country code, e.g. GB (defaults to the configured country)
        #[arg(long)]
        country: Option<String>,
    },
    /// List supported countries
    Countries,
    /// Journal entries
    Journal {
        #[command(subcommand)]
        journal_command: JournalCommand,
    },
    /// Daily mood check-ins
    Mood {
        #[command(subcommand)]
        mood_command: MoodCommand,
    },
    /// Recommend a guided session
    Recommend {
        /// Current mood word, e.g. sad
        #[arg(long)]
        mood: Option<String>,
        /// Stress level
        #[arg(long, default_value_t = 0)]
        stress: u8,
    },
    /// Browse the guided content library
    Library {
        #[arg(long)]
        category: Option<ContentCategory>,
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Community board posts
    Community {
        #[command(subcommand)]
        community_command: CommunityCommand,
    },
    /// Interactive support chat (default)
    Chat,
}

#[derive(Parser, Debug)]
enum CommunityCommand {
    /// Publish a post
    Post {
        #[arg(long)]
        title: String,
        /// Category name or slug, e.g. "Anxiety Support" or anxiety-support
        #[arg(long, default_value_t = PostCategory::GeneralDiscussion)]
        category: PostCategory,
        /// Post under your display name instead of anonymously
        #[arg(long)]
        named: bool,
        content: Vec<String>,
    },
    /// Show posts, newest first
    List {
        /// Category name, or All
        #[arg(long, default_value = "All")]
        category: String,
        #[arg(long, default_value = "")]
        search: String,
    },
}

#[derive(Parser, Debug)]
enum JournalCommand {
    /// Write a new entry
    Add {
        #[arg(long)]
        title: String,
        /// Entry date (YYYY-MM-DD), today when omitted
        #[arg(long)]
        date: Option<NaiveDate>,
        content: Vec<String>,
    },
    /// Show recent entries
    List {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

#[derive(Parser, Debug)]
enum MoodCommand {
    /// Record a check-in
    Log {
        /// Mood 1-5
        #[arg(long)]
        mood: u8,
        /// Hours slept
        #[arg(long)]
        sleep: u8,
        /// Activity 1-5
        #[arg(long)]
        activity: u8,
        /// Stress 1-5
        #[arg(long)]
        stress: u8,
        #[arg(long)]
        notes: Option<String>,
        /// Check-in date (YYYY-MM-DD), today when omitted
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Seven-day overview ending today
    Week,
}

fn main() {
    let args = Args::parse();

    // Config is read before tracing so debug_logging can raise the level
    let config = load_config();
    init_tracing(config.as_ref().map_or(false, |c| c.debug_logging));
    let data_dir = config
        .as_ref()
        .map(|c| c.data_dir.clone())
        .unwrap_or_else(|_| default_data_dir());

    let result = config.and_then(|config| run(args, &config));
    if let Err(e) = result {
        eprintln!("{}", describe_error(&e, &data_dir));
        std::process::exit(1);
    }
}

fn run(args: Args, config: &Config) -> Result<()> {
    match args.command {
        Some(Command::Classify { text, json }) => run_classify(config, text, json),
        Some(Command::Contacts { country }) => {
            run_contacts(country.as_deref().unwrap_or(&config.country));
            Ok(())
        }
        Some(Command::Countries) => {
            println!("{}", render_countries());
            Ok(())
        }
        Some(Command::Journal { journal_command }) => run_journal(config, journal_command),
        Some(Command::Mood { mood_command }) => run_mood(config, mood_command),
        Some(Command::Recommend { mood, stress }) => run_recommend(config, mood, stress),
        Some(Command::Library { category, search }) => {
            for item in content::search(&content::library(), category, &search) {
                println!("{}  {} ({}, {})", item.id, item.title, item.category, item.duration);
            }
            Ok(())
        }
        Some(Command::Community { community_command }) => {
            run_community(config, community_command)
        }
        Some(Command::Chat) => ChatRepl::new(config)?.run(),
        None => {
            if !io::stdin().is_terminal() {
                return classify_lines(config);
            }
            ChatRepl::new(config)?.run()
        }
    }
}

/// Classify each non-blank line of piped input
fn classify_lines(config: &Config) -> Result<()> {
    let classifier = config.classifier()?;
    for line in io::stdin().lock().lines() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        println!("{}", render_classification(text, &classifier.classify(text)));
    }
    Ok(())
}

fn run_classify(config: &Config, words: Vec<String>, json: bool) -> Result<()> {
    let text = if words.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        input
    } else {
        words.join(" ")
    };

    let result = config.classifier()?.classify(&text);
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render_classification(text.trim(), &result));
    }

    if result.crisis_flag {
        print_contacts_hint(&config.country);
    }
    Ok(())
}

fn run_contacts(country: &str) {
    if lookup(country).is_none() {
        eprintln!("{}\n", unknown_country_message(country, resolve_crisis_contacts(country).code));
    }
    println!("{}", render_profile(resolve_crisis_contacts(country)));
}

fn run_journal(config: &Config, command: JournalCommand) -> Result<()> {
    let mut store = open_store(config)?;

    match command {
        JournalCommand::Add {
            title,
            date,
            content,
        } => {
            let content = content.join(" ");
            if content.trim().is_empty() {
                anyhow::bail!("Journal entry is empty");
            }

            let classifier = config.classifier()?;
            let entry = NewJournalEntry {
                date: date.unwrap_or_else(|| Local::now().date_naive()),
                title,
                content,
            };
            let stored =
                journal::record_entry(&mut store, &classifier, entry, &mut rand::thread_rng())?;

            println!("{}", render_journal_entry(&stored));
            if stored.crisis_flag {
                print_contacts_hint(&config.country);
            }
        }
        JournalCommand::List { limit } => {
            let entries = store.journal_entries()?;
            if entries.is_empty() {
                println!("No journal entries yet.");
            }
            for entry in entries.iter().take(limit) {
                println!("{}\n", render_journal_entry(entry));
            }
        }
    }

    Ok(())
}

fn run_mood(config: &Config, command: MoodCommand) -> Result<()> {
    let mut store = open_store(config)?;
    let today = Local::now().date_naive();

    match command {
        MoodCommand::Log {
            mood,
            sleep,
            activity,
            stress,
            notes,
            date,
        } => {
            let entry = MoodEntry::new(date.unwrap_or(today), mood, sleep, activity, stress, notes)?;
            store.save_mood(&entry)?;
            tracing::info!("Saved mood check-in {}", entry.id);
            println!("Check-in saved for {}.", entry.date);
        }
        MoodCommand::Week => {
            let entries = store.mood_entries()?;
            println!("{}", render_week(&weekly_overview(&entries, today)));
        }
    }

    Ok(())
}

fn run_community(config: &Config, command: CommunityCommand) -> Result<()> {
    let mut store = open_store(config)?;

    match command {
        CommunityCommand::Post {
            title,
            category,
            named,
            content,
        } => {
            let post = NewPost {
                title,
                content: content.join(" "),
                category,
                is_anonymous: !named,
            };
            let post = community::publish(&mut store, post, &config.display_name)?;
            println!("{}", render_post(&post));

            if post.category.is_crisis() || config.classifier()?.is_crisis(&post.content) {
                print_contacts_hint(&config.country);
            }
        }
        CommunityCommand::List { category, search } => {
            let category = category_filter(&category).map_err(anyhow::Error::msg)?;
            let posts = store.posts()?;
            let shown = community::filter_posts(&posts, category, &search);
            if shown.is_empty() {
                println!("No posts found.");
            }
            for post in shown {
                println!("{}\n", render_post(post));
            }
        }
    }

    Ok(())
}

fn run_recommend(config: &Config, mood: Option<String>, stress: u8) -> Result<()> {
    let store = open_store(config)?;
    let recent = store.journal_entries()?;

    let mood = mood.unwrap_or_else(|| {
        recent
            .first()
            .and_then(|e| e.emotions.first())
            .map(|e| e.as_str().to_string())
            .unwrap_or_default()
    });
    let journal_text: Vec<String> = recent.iter().take(5).map(|e| e.content.clone()).collect();

    let item = content::recommend(&mood.to_lowercase(), &journal_text, stress);
    println!("{}", render_content(&item));
    Ok(())
}

fn open_store(config: &Config) -> Result<JsonlStore> {
    JsonlStore::open(config.data_dir.clone())
}

fn print_contacts_hint(country: &str) {
    let profile = resolve_crisis_contacts(country);
    let primary = profile.primary_contact();
    eprintln!(
        "\n\x1b[1;33mIf you are in crisis, help is available:\x1b[0m {} ({}), emergency {}.\n\
        Run \x1b[36mmindhaven contacts\x1b[0m for more options.",
        primary.name, primary.number, profile.emergency_number
    );
}

/// User-facing text for an error, with suggestions for the common cases
fn describe_error(error: &anyhow::Error, data_dir: &Path) -> String {
    match error.downcast_ref::<MindhavenError>() {
        Some(MindhavenError::ConfigParse { path, message }) => config_parse_error(path, message),
        Some(MindhavenError::Store(message)) => store_error(data_dir, message),
        _ => format!("\x1b[1;31mError:\x1b[0m {:#}", error),
    }
}

fn init_tracing(debug_logging: bool) {
    let show_debug = debug_logging
        || std::env::var("MINDHAVEN_DEBUG")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);
    let default_level = if show_debug { "debug" } else { "warn" };

    // RUST_LOG wins over both the config flag and MINDHAVEN_DEBUG
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    // Logs go to stderr so stdout stays clean for piped output
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();

    // Bridge log crate -> tracing
    tracing_log::LogTracer::init().ok();
}
