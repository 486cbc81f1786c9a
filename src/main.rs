use std::collections::BTreeSet;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use chatlex::core::config;
use chatlex::core::index::{SortMode, WordIndex};
use chatlex::core::pos::{PosLexicon, WordClass};
use chatlex::core::saved::SavedWords;
use chatlex::{ingest, store, term};

#[derive(Parser)]
#[command(name = "chatlex", about = "Chat-log word indexer with quick-select navigation")]
struct Args {
    /// Chat JSON file or a folder of chat JSON files
    chat: Option<PathBuf>,

    /// Only list words containing this substring
    #[arg(long)]
    search: Option<String>,

    /// Word list ordering
    #[arg(long, value_enum)]
    sort: Option<SortMode>,

    /// Only list words from the nouns vocabulary
    #[arg(long)]
    nouns: bool,

    /// Only list words from the adjectives vocabulary
    #[arg(long)]
    adjectives: bool,

    /// Only list saved words
    #[arg(long)]
    saved_only: bool,

    /// Print the messages containing this word instead of the word list
    #[arg(long)]
    word: Option<String>,

    /// Omit usernames when printing messages
    #[arg(long)]
    hide_authors: bool,

    /// Browse interactively with keyboard quick-select
    #[arg(short, long)]
    interactive: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to chatlex.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("chatlex.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("chatlex starting up");

    let loaded = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = config::resolve(&loaded, args.sort);

    let Some(chat) = args.chat.as_deref() else {
        eprintln!("no chat file or folder given (see --help)");
        return ExitCode::FAILURE;
    };
    let comments = match ingest::load_path(chat) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if args.interactive {
        return match term::run(&resolved, comments, args.hide_authors).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("terminal error: {e}");
                ExitCode::FAILURE
            }
        };
    }

    // One-shot listing mode.
    let blacklist = store::load_words(&resolved.blacklist_path);
    let mut index = WordIndex::new();
    index.build(comments, &blacklist);

    if let Some(word) = args.word.as_deref() {
        let word = word.to_lowercase();
        for comment in index.occurrences(&word) {
            if args.hide_authors {
                println!("{}", comment.message);
            } else {
                println!("{}: {}", comment.author, comment.message);
            }
        }
        return ExitCode::SUCCESS;
    }

    let lexicon = PosLexicon::new(
        store::load_words(&resolved.nouns_path),
        store::load_words(&resolved.adjectives_path),
    );
    let saved = SavedWords::new(
        store::load_words_sorted(&resolved.saved_words_path),
        // Listing mode never mutates; persistence stays a no-op.
        Box::new(|_: &BTreeSet<String>| {}),
    );

    let mut classes = Vec::new();
    if args.nouns {
        classes.push(WordClass::Noun);
    }
    if args.adjectives {
        classes.push(WordClass::Adjective);
    }
    let pos_filter = lexicon.combined_filter(&classes);
    let predicate = |word: &str| pos_filter(word) && (!args.saved_only || saved.contains(word));

    let search = args.search.as_deref().unwrap_or("");
    for word in index.filtered_sorted(predicate, search, resolved.sort) {
        let marker = if saved.contains(word) { "*" } else { " " };
        println!("{marker} {word} ({})", index.count(word));
    }
    ExitCode::SUCCESS
}
