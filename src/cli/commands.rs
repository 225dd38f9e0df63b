//! Command implementations for the Wordwise CLI.

use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::dictionary::WordList;
use crate::error::{Result, WordwiseError};
use crate::suggest::{SuggestionConfig, SuggestionEngine};

/// Execute a CLI command.
pub fn execute_command(args: WordwiseArgs) -> Result<()> {
    match &args.command {
        Command::Suggest(suggest_args) => suggest_word(suggest_args.clone(), &args),
        Command::Repl(repl_args) => run_repl(repl_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Load and validate a dictionary file.
fn load_dictionary(path: &Path) -> Result<WordList> {
    debug!("loading dictionary from {}", path.display());
    let dictionary = WordList::load_from_file(path)?;

    if dictionary.is_empty() {
        return Err(WordwiseError::dictionary(format!(
            "no words loaded from {}",
            path.display()
        )));
    }

    info!("loaded {} dictionary words", dictionary.len());
    Ok(dictionary)
}

/// Suggest corrections for a single word.
fn suggest_word(args: SuggestArgs, cli_args: &WordwiseArgs) -> Result<()> {
    let word = args.word.trim().to_lowercase();
    if word.is_empty() {
        return Err(WordwiseError::invalid_argument("word must not be empty"));
    }

    let dictionary = load_dictionary(&args.dictionary)?;
    let dictionary_words = dictionary.len();

    let config = SuggestionConfig {
        max_suggestions: args.limit,
        parallel: args.parallel,
    };
    let engine = SuggestionEngine::with_config(dictionary, config);

    let start_time = Instant::now();
    let suggestions = engine.suggest(&word);
    let duration_ms = start_time.elapsed().as_millis() as u64;

    output_result(
        &format!("Suggestions for '{word}':"),
        &SuggestResult {
            input: word,
            suggestions,
            dictionary_words,
            duration_ms,
        },
        cli_args,
    )
}

/// Run the interactive suggestion loop.
fn run_repl(args: ReplArgs, cli_args: &WordwiseArgs) -> Result<()> {
    let dictionary = load_dictionary(&args.dictionary)?;

    let config = SuggestionConfig {
        max_suggestions: args.limit,
        ..Default::default()
    };
    let word_count = dictionary.len();
    let engine = SuggestionEngine::with_config(dictionary, config);

    if cli_args.verbosity() > 0 {
        println!(
            "wordwise repl - dictionary: {} ({word_count} words)",
            args.dictionary.display()
        );
        println!("type a word for suggestions, :q to quit");
    }

    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }

        let word = input.trim().to_lowercase();
        if word == ":q" {
            break;
        }
        if word.is_empty() {
            continue;
        }

        for (i, suggestion) in engine.suggest(&word).iter().enumerate() {
            println!("{:2}. {} (penalty {})", i + 1, suggestion.word, suggestion.penalty);
        }
    }

    Ok(())
}

/// Show statistics about a dictionary file.
fn show_stats(args: StatsArgs, cli_args: &WordwiseArgs) -> Result<()> {
    let dictionary = load_dictionary(&args.dictionary)?;

    let lengths: Vec<usize> = dictionary.iter().map(|word| word.chars().count()).collect();
    let total_length: usize = lengths.iter().sum();

    let stats = DictionaryStats {
        path: args.dictionary.to_string_lossy().to_string(),
        word_count: dictionary.len(),
        shortest_word: lengths.iter().copied().min().unwrap_or(0),
        longest_word: lengths.iter().copied().max().unwrap_or(0),
        average_length: total_length as f64 / lengths.len() as f64,
    };

    output_result("Dictionary statistics:", &stats, cli_args)
}
