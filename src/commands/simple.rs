//! Simple interactive CLI mode
//!
//! Text-based game without TUI. Guesses go through the same game rules and
//! reveal sequencer as the full-screen mode, printed tile by tile.

use crate::core::{TileState, row_to_emoji};
use crate::game::{Game, GameStatus, KeyboardLayout, SubmitOutcome, key_statuses};
use crate::interactive::Statistics;
use crate::output::display::print_statistics;
use crate::output::formatters::{colored_tile, word_outline};
use crate::reveal::{RevealEvent, RevealRequest, RevealSequencer, RevealTimer, TimerQueue};
use crate::vocabulary::WordProvider;
use colored::Colorize;
use std::io::{self, Write};
use std::thread;

enum Command {
    Quit,
    NewGame,
    Guess(String),
}

fn parse_command(input: &str) -> Command {
    match input.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "new" | "n" => Command::NewGame,
        _ => Command::Guess(input.to_string()),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// vocabulary is empty.
pub fn run_simple<P: WordProvider>(provider: &mut P) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Lenape Word Game - Simple Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the Lenape word in six tries. After each guess:");
    println!("  {} letter in the right place", colored_tile('A', TileState::Correct));
    println!("  {} letter elsewhere in the word", colored_tile('A', TileState::Present));
    println!("  {} letter not in the word\n", colored_tile('A', TileState::Absent));
    println!("Spaces between words are filled in for you.");
    println!("Commands: 'quit' to exit, 'new' for new game\n");

    let layout = KeyboardLayout::from_alphabet(provider.alphabet());
    let mut stats = Statistics::default();

    loop {
        let word = provider.random_word().ok_or("No words available")?;
        let definition = provider.definition(&word);
        let mut game = Game::new(word, definition);

        println!("────────────────────────────────────────────────────────────");
        let target = game.target();
        println!(
            "New word: {}  ({} letters)",
            word_outline(target.len(), |p| target.is_space(p)),
            target.effective_len()
        );
        if !game.definition().is_empty() {
            println!("Meaning:  {}", game.definition().italic());
        }
        println!("────────────────────────────────────────────────────────────\n");

        if !play_round(&mut game, &layout)? {
            print_statistics(&stats);
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        if game.is_over() {
            stats.record(game.status(), game.guesses_used());
            print_result(&game);

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => println!("\n🔄 New game started!\n"),
                _ => {
                    print_statistics(&stats);
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        } else {
            println!("\n🔄 New game started!\n");
        }
    }
}

/// Play until the game ends or the player asks for another word
///
/// Returns `false` when the player wants to quit.
fn play_round(game: &mut Game, layout: &KeyboardLayout) -> Result<bool, String> {
    while !game.is_over() {
        let prompt = format!("Guess {}/{}", game.current_row() + 1, crate::game::MAX_ROWS);
        let guess = match parse_command(&get_user_input(&prompt)?) {
            Command::Quit => return Ok(false),
            Command::NewGame => return Ok(true),
            Command::Guess(guess) => guess,
        };

        while game.delete_letter() {}
        for letter in guess.chars() {
            game.type_letter(letter);
        }

        match game.submit() {
            Ok(SubmitOutcome::Committed { row }) => {
                reveal_row(game, row)?;
                game.complete_reveal();
                print_keyboard(game, layout);
            }
            Ok(SubmitOutcome::Ignored) => {}
            Err(err) => println!("❌ {err}\n"),
        }
    }
    Ok(true)
}

/// Print a committed row tile by tile as the sequencer reveals it
fn reveal_row(game: &Game, row: usize) -> Result<(), String> {
    let guess = game.row(row).unwrap_or_default();
    let letters: Vec<char> = guess.chars().collect();
    let mut sequencer = RevealSequencer::new();
    let mut timers: TimerQueue<RevealTimer> = TimerQueue::new();
    let mut printed = 0;

    let request = RevealRequest::Row {
        row,
        guess,
        target: game.target(),
    };
    let mut done = sequencer.reveal_row(request, &mut timers).is_some();

    print!("   ");
    while !done || printed < letters.len() {
        while let Some(tile) = sequencer.tile(row, printed).filter(|tile| tile.revealed) {
            let letter = letters.get(printed).copied().unwrap_or(' ');
            print!("{}", colored_tile(letter, tile.state));
            printed += 1;
        }
        io::stdout().flush().map_err(|e| e.to_string())?;

        if done {
            break;
        }
        if let Some(wait) = timers.time_until_next() {
            thread::sleep(wait);
        }
        while let Some(timer) = timers.pop_due() {
            if let Some(RevealEvent::RowComplete { .. }) = sequencer.on_timer(timer, &mut timers) {
                done = true;
            }
        }
    }

    let states: Vec<TileState> = (0..game.target().len())
        .map(|column| sequencer.tile(row, column).map_or(TileState::Unset, |t| t.state))
        .collect();
    println!("   {}\n", row_to_emoji(&states));
    Ok(())
}

fn print_keyboard(game: &Game, layout: &KeyboardLayout) {
    let rows: Vec<&str> = game.submitted_rows().collect();
    let statuses = key_statuses(layout, rows.iter().copied(), game.target());
    let keys: String = layout
        .letters()
        .map(|letter| {
            let status = statuses.get(&letter).copied().unwrap_or_default();
            colored_tile(letter, status).to_string()
        })
        .collect();
    println!("   {keys}\n");
}

fn print_result(game: &Game) {
    let word = game.target().text().bright_white().bold();
    match game.status() {
        GameStatus::Won => {
            let guesses = game.guesses_used();
            println!("\n{}", "═".repeat(62).bright_cyan());
            println!("{}", "  🎉 Congratulations!".bright_green().bold());
            println!(
                "  Found {word} in {} {}",
                guesses.to_string().bright_cyan().bold(),
                if guesses == 1 { "guess" } else { "guesses" }
            );
        }
        GameStatus::Lost | GameStatus::InProgress => {
            println!("\n{}", "═".repeat(62).bright_cyan());
            println!("{}", "  😔 Out of guesses".bright_red().bold());
            println!("  The word was {word}");
        }
    }
    if !game.definition().is_empty() {
        println!("  Meaning: {}", game.definition());
    }
    println!("{}\n", "═".repeat(62).bright_cyan());
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_case_insensitive() {
        assert!(matches!(parse_command("QUIT"), Command::Quit));
        assert!(matches!(parse_command("n"), Command::NewGame));
        assert!(matches!(parse_command("sipu"), Command::Guess(g) if g == "sipu"));
    }

    #[test]
    fn reveal_row_completes_on_real_clock() {
        colored::control::set_override(false);
        let mut game = Game::new(crate::core::TargetWord::new("mbi").unwrap(), "Water");
        for letter in "MBI".chars() {
            game.type_letter(letter);
        }
        game.submit().unwrap();
        reveal_row(&game, 0).unwrap();
        assert_eq!(game.complete_reveal(), GameStatus::Won);
    }
}
