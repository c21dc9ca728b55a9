//! Boggle Solver - CLI
//!
//! Solves Boggle grids from the command line: a built-in demo, grids given as
//! text or files, and freshly rolled dice.

use anyhow::{Context, Result};
use boggle_solver::{
    commands::{SolveConfig, roll_grid, solve_grid, trace_word},
    core::{Dictionary, Grid},
    output::{print_grid, print_solve_result, print_trace_result},
    solver::TraversalType,
    wordlists::{WORDS, loader::words_from_slice},
};
use clap::{Args, Parser, Subcommand};
use std::fs;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(
    name = "boggle_solver",
    about = "Finds every dictionary word hidden in a Boggle grid",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the built-in sample grid (default)
    Demo {
        #[command(flatten)]
        solve: SolveArgs,
    },

    /// Solve a grid given as text, a file, or rolled dice
    Solve {
        /// Grid text: rows split by '/', e.g. "tape/erso/nild/qste" or "Qu a/st e"
        grid: Option<String>,

        /// Read the grid from a file, one row per line
        #[arg(short, long, conflicts_with = "grid")]
        file: Option<String>,

        /// Roll the classic dice instead of giving a grid
        #[arg(short, long, conflicts_with_all = ["grid", "file"])]
        random: bool,

        /// Seed for --random
        #[arg(long, requires = "random")]
        seed: Option<u64>,

        #[command(flatten)]
        solve: SolveArgs,
    },

    /// Show where a word lies on a grid
    Trace {
        /// The word to trace
        word: String,

        /// Grid text (defaults to the sample grid)
        #[arg(short, long)]
        grid: Option<String>,
    },

    /// Roll the classic dice and print the grid
    Roll {
        /// Seed for a reproducible grid
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args)]
struct SolveArgs {
    /// Traversal: stack (default) or recursive
    #[arg(short, long, default_value = "stack")]
    traversal: String,

    /// Walk root cells in parallel
    #[arg(short, long)]
    parallel: bool,

    /// Show dictionary size and timing
    #[arg(long)]
    stats: bool,
}

impl SolveArgs {
    fn config(&self, grid: Grid) -> SolveConfig {
        let mut config = SolveConfig::new(grid);
        config.traversal = TraversalType::from_name(&self.traversal);
        config.parallel = self.parallel;
        config
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the word list based on the -w flag
///
/// - "builtin": the embedded list
/// - "<path>": custom list from file
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<String>> {
    use boggle_solver::wordlists::loader::load_from_file;

    let words = match wordlist_mode {
        "builtin" => words_from_slice(WORDS),
        path => load_from_file(path).with_context(|| format!("Failed to read wordlist {path}"))?,
    };
    info!(words = words.len(), source = wordlist_mode, "wordlist loaded");
    Ok(words)
}

fn parse_grid(text: &str) -> Result<Grid> {
    Grid::parse(text).with_context(|| format!("Invalid grid '{text}'"))
}

fn read_grid_file(path: &str) -> Result<Grid> {
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read grid {path}"))?;
    Grid::parse(&text).with_context(|| format!("Invalid grid in {path}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Default to the demo if no command given
    let command = cli.command.unwrap_or(Commands::Demo {
        solve: SolveArgs {
            traversal: "stack".to_string(),
            parallel: false,
            stats: false,
        },
    });

    match command {
        Commands::Demo { solve } => {
            let words = load_wordlist(&cli.wordlist)?;
            run_solve_command(SolveConfig::demo().grid, &solve, &words);
            Ok(())
        }
        Commands::Solve {
            grid,
            file,
            random,
            seed,
            solve,
        } => {
            let grid = match (grid, file) {
                _ if random => roll_grid(seed)?,
                (Some(text), _) => parse_grid(&text)?,
                (None, Some(path)) => read_grid_file(&path)?,
                (None, None) => anyhow::bail!("Give a grid, --file or --random"),
            };
            let words = load_wordlist(&cli.wordlist)?;
            run_solve_command(grid, &solve, &words);
            Ok(())
        }
        Commands::Trace { word, grid } => {
            let grid = match grid {
                Some(text) => parse_grid(&text)?,
                None => SolveConfig::demo().grid,
            };
            let words = load_wordlist(&cli.wordlist)?;
            run_trace_command(&word, grid, &words)
        }
        Commands::Roll { seed } => {
            let grid = roll_grid(seed)?;
            println!();
            print_grid(&grid, &[]);
            println!("\n   {}", grid.to_string().replace('\n', " / "));
            Ok(())
        }
    }
}

fn run_solve_command(grid: Grid, args: &SolveArgs, words: &[String]) {
    let result = solve_grid(args.config(grid), words);
    print_solve_result(&result, args.stats);
}

fn run_trace_command(word: &str, grid: Grid, words: &[String]) -> Result<()> {
    let dictionary = Dictionary::from_words(words);
    let result = trace_word(word, grid, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
    print_trace_result(&result);
    Ok(())
}
