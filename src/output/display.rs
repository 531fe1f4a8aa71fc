//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar};
use crate::commands::{CheckResult, VocabularySummary};
use crate::core::row_to_emoji;
use crate::interactive::Statistics;
use crate::vocabulary::WordEntry;
use colored::Colorize;

/// Print the result of checking a guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Target: {}   Guess: {}",
        result.target.bright_yellow().bold(),
        result.guess.bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n  {}", colored_row(&result.guess, &result.states));
    println!("  {}\n", row_to_emoji(&result.states));

    println!(
        "  Letters: {} typed, {} expected",
        result.guess_letters, result.target_letters
    );
    if result.solved {
        println!("{}", "  ✅ Exact match".green().bold());
    } else if result.accepted {
        println!("  Valid guess, not a match");
    } else {
        println!(
            "{}",
            format!("  ❌ Word must be {} letters!", result.target_letters)
                .red()
                .bold()
        );
    }
}

/// Print the vocabulary overview followed by every entry
pub fn print_vocabulary(summary: &VocabularySummary, entries: &[&WordEntry]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "VOCABULARY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n  {} entries ({} phrases), {}-{} characters",
        summary.total, summary.phrases, summary.shortest, summary.longest
    );
    println!("  Alphabet: {}\n", summary.alphabet.bright_white());

    for entry in entries {
        println!(
            "  {:<14} {:>2}  {}",
            entry.word.text().bright_yellow(),
            entry.word.len(),
            entry.definition.bright_black()
        );
    }
    println!();
}

/// Print session statistics
pub fn print_statistics(stats: &Statistics) {
    if stats.total_games == 0 {
        return;
    }

    println!("\n📊 {}", "Session:".bright_cyan().bold());
    println!("   Games played:  {}", stats.total_games);
    println!(
        "   Win rate:      {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar = create_progress_bar(count as f64, most as f64, 30);
        println!("   {guesses}: {} {count}", bar.green());
    }
}
