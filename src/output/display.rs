//! Display functions for command results

use super::formatters::{pad_tile, path_to_string, tile_width, word_columns};
use crate::commands::{SolveResult, TraceResult};
use crate::core::Grid;
use colored::Colorize;

const WORD_COLUMNS: usize = 6;

/// Print a grid, highlighting the cells of `path`
pub fn print_grid(grid: &Grid, path: &[(usize, usize)]) {
    let width = tile_width(grid);
    for (row, tiles) in grid.row_iter().enumerate() {
        let line: Vec<String> = tiles
            .iter()
            .enumerate()
            .map(|(col, tile)| {
                let cell = pad_tile(tile, width);
                match path.iter().position(|&step| step == (row, col)) {
                    Some(0) => cell.black().on_bright_yellow().bold().to_string(),
                    Some(_) => cell.black().on_green().bold().to_string(),
                    None => cell.bright_white().to_string(),
                }
            })
            .collect();
        println!("   {}", line.join(" "));
    }
}

/// Print the result of solving a grid
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {}", "BOGGLE GRID".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());
    println!();
    print_grid(&result.grid, &[]);

    println!("\n📖 {}", "Words found:".bright_cyan().bold());
    if result.words.is_empty() {
        println!("   {}", "(none)".bright_black());
    } else {
        let words: Vec<&str> = result.words.iter().map(|w| w.word.as_str()).collect();
        for line in word_columns(&words, WORD_COLUMNS) {
            println!("   {line}");
        }
    }

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!(
        "   Words:        {}",
        format!("{}", result.words.len()).bright_yellow().bold()
    );
    println!(
        "   Score:        {}",
        format!("{}", result.total_score).green().bold()
    );
    if let Some(longest) = result.longest() {
        println!(
            "   Longest:      {} ({} pts)",
            longest.word.to_uppercase().bright_yellow(),
            longest.points
        );
    }

    if verbose {
        println!("   Dictionary:   {} words", result.dictionary_size);
        println!("   Time taken:   {:.3}s", result.duration.as_secs_f64());
    }
}

/// Print the result of tracing a word
pub fn print_trace_result(result: &TraceResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "TRACE:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!();

    match &result.path {
        Some(path) => {
            print_grid(&result.grid, path);
            println!("\n   Path:        {}", path_to_string(path));
        }
        None => {
            print_grid(&result.grid, &[]);
            println!("\n   Path:        {}", "not on this grid".red());
        }
    }

    let listed = if result.in_dictionary {
        "yes".green()
    } else {
        "no".red()
    };
    println!("   Dictionary:  {listed}");
    println!("   Points:      {}", result.points);

    println!();
    if result.would_be_found() {
        println!("{}", "✅ The solver reports this word".green().bold());
    } else {
        println!("{}", "❌ The solver does not report this word".red().bold());
    }
}
