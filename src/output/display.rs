//! Display functions for command results

use super::formatters::{create_progress_bar, format_columns, plural};
use crate::commands::{BenchmarkResult, DictionaryStats, FindResult};
use colored::Colorize;

/// Print the result of a search
///
/// Matches go to stdout one grid per call; with `count_only` just the number.
pub fn print_find_result(result: &FindResult<'_>, columns: usize, count_only: bool) {
    if count_only {
        println!("{}", result.total);
        return;
    }

    if !result.conflicts.is_empty() {
        let letters: String = result.conflicts.iter().collect();
        eprintln!(
            "{} {} required and excluded at once",
            "warning:".yellow().bold(),
            letters.bright_white().bold()
        );
    }

    if result.words.is_empty() {
        eprintln!("{}", format!("No matches for {}", result.query).red());
        return;
    }

    println!("{}", format_columns(&result.words, columns));

    if result.truncated() {
        eprintln!(
            "{}",
            format!("... showing {} of {} matches", result.words.len(), result.total)
                .bright_black()
        );
    }
    eprintln!(
        "{} {} in {:.2}ms",
        result.total.to_string().bright_cyan().bold(),
        plural(result.total, "match", "matches"),
        result.duration.as_secs_f64() * 1000.0
    );
}

/// Print dictionary statistics
pub fn print_stats(stats: &DictionaryStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DICTIONARY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Words:           {}",
        stats.total_words.to_string().bright_yellow().bold()
    );
    if let (Some(shortest), Some(longest)) = (stats.shortest, stats.longest) {
        println!("   Lengths:         {shortest}-{longest}");
    }
    println!("   Average length:  {:.2}", stats.average_length);

    let max_count = stats
        .distribution
        .iter()
        .map(|&(_, count)| count)
        .max()
        .unwrap_or(0);

    println!("\n📈 {}", "Words per length:".bright_cyan().bold());
    for &(len, count) in &stats.distribution {
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {len:3}: {} {count:7}", bar.green());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Queries run:      {}", result.total_queries);
    println!(
        "   Average matches:  {}",
        format!("{:.2}", result.average_matches)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fewest matches:   {}",
        format!("{}", result.min_matches).green()
    );
    println!(
        "   Most matches:     {}",
        format!("{}", result.max_matches).yellow()
    );
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());
    println!("   Queries/second:   {:.1}", result.queries_per_second);

    println!("\n📈 {}", "Queries by length:".bright_cyan().bold());
    let mut lengths: Vec<(&usize, &usize)> = result.by_length.iter().collect();
    lengths.sort_unstable();
    for (len, &count) in lengths {
        let pct = (count as f64 / result.total_queries as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {len:3}: {} {count:6} ({pct:5.1}%)", bar.green());
    }
}
