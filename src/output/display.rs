//! Display functions for game state and command results

use super::formatters::{
    colored_guess, create_progress_bar, format_average, hidden_guess, keyboard_lines,
};
use crate::commands::{Evaluation, SimulationResult};
use crate::core::{Feedback, MAX_GUESSES, MISS_PENALTY, WORD_LENGTH, Word};
use crate::engine::{GameScore, LetterStates, raw_round_score};
use crate::game::{Game, Player};
use colored::Colorize;
use std::io::{self, Write};

/// Write a single evaluated guess with its keyboard hints
///
/// # Errors
/// Propagates write failures.
pub fn write_evaluation<W: Write>(out: &mut W, evaluation: &Evaluation) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(40).cyan())?;
    writeln!(
        out,
        "{} against {}",
        evaluation.guess.text().to_uppercase().bright_white().bold(),
        evaluation.target.text().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(40).cyan())?;
    writeln!(
        out,
        "\n  {}   {}",
        colored_guess(&evaluation.guess, &evaluation.feedback),
        evaluation.feedback.to_emoji()
    )?;
    writeln!(out)?;
    write_keyboard(out, &evaluation.keyboard)
}

/// Write one player's board
///
/// With `reveal` false only the colors are shown, as other players see it.
///
/// # Errors
/// Propagates write failures.
pub fn write_board<W: Write>(
    out: &mut W,
    name: &str,
    guesses: &[Word],
    target: &Word,
    reveal: bool,
) -> io::Result<()> {
    writeln!(out, "  {}", name.bright_cyan().bold())?;
    for row in 0..MAX_GUESSES {
        let line = match guesses.get(row) {
            Some(guess) => {
                let feedback = Feedback::evaluate(Some(guess), target);
                if reveal {
                    colored_guess(guess, &feedback)
                } else {
                    hidden_guess(&feedback)
                }
            }
            None => " · ".repeat(WORD_LENGTH),
        };
        writeln!(out, "    {line}")?;
    }
    Ok(())
}

/// Write the colored keyboard
///
/// # Errors
/// Propagates write failures.
pub fn write_keyboard<W: Write>(out: &mut W, states: &LetterStates) -> io::Result<()> {
    for line in keyboard_lines(states) {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}

/// Write how each player did in the current round
///
/// # Errors
/// Propagates write failures.
pub fn write_round_result<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    let Some(round) = game.current_round() else {
        return Ok(());
    };

    writeln!(
        out,
        "\nRound {} word: {}",
        game.round_number(),
        round.target().text().to_uppercase().bright_yellow().bold()
    )?;
    for player in game.players() {
        let guesses = round.guesses_of(&player.id).unwrap_or_default();
        let score = raw_round_score(guesses, round.target());
        let verdict = if score == MISS_PENALTY {
            "missed".red().to_string()
        } else {
            format!("solved in {score}").green().to_string()
        };
        writeln!(out, "  {:<16} {verdict}", player.display_name())?;
    }
    Ok(())
}

/// Write final standings: ranking, averages and winners
///
/// # Errors
/// Propagates write failures.
pub fn write_summary<W: Write>(out: &mut W, game: &Game, score: &GameScore) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(50).cyan())?;
    writeln!(out, " {} ", "GAME SUMMARY".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(50).cyan())?;
    writeln!(out, "\n  Rounds played: {}", game.round_number())?;
    writeln!(out, "  {}", "Missed words count as a round with 8 guesses.".italic())?;
    writeln!(out)?;

    for (place, id) in score.ranking.iter().enumerate() {
        let name = game.player(id).map_or(id.as_str(), Player::display_name);
        let average = score.average_of(id).unwrap_or(f64::from(MISS_PENALTY));
        let marker = if score.winners.contains(id) { "🏆" } else { "  " };
        writeln!(
            out,
            "  {marker} {}. {name:<16} {} guesses / round",
            place + 1,
            format_average(average).bright_yellow().bold()
        )?;
    }

    let names: Vec<&str> = score
        .winners
        .iter()
        .map(|id| game.player(id).map_or(id.as_str(), Player::display_name))
        .collect();
    let label = if names.len() > 1 { "Winners" } else { "Winner" };
    writeln!(out, "\n  {label}: {}", names.join(", ").green().bold())
}

/// Write aggregate statistics for a bot simulation
///
/// # Errors
/// Propagates write failures.
pub fn write_simulation_result<W: Write>(out: &mut W, result: &SimulationResult) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} ", "SIMULATION RESULTS".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    writeln!(out, "\n📊 {}", "Games:".bright_cyan().bold())?;
    writeln!(out, "   Games played:     {}", result.games)?;
    writeln!(out, "   Rounds played:    {}", result.rounds)?;
    writeln!(
        out,
        "   Solve rate:       {}",
        format!("{:.1}%", result.solve_rate() * 100.0)
            .bright_yellow()
            .bold()
    )?;
    writeln!(
        out,
        "   Winning average:  {}",
        format!("{:.2}", result.average_winning_score()).green()
    )?;
    writeln!(out, "   Tied games:       {}", result.tied_games)?;
    writeln!(out, "   Time taken:       {:.2}s", result.duration.as_secs_f64())?;

    writeln!(out, "\n📈 {}", "Guess distribution:".bright_cyan().bold())?;
    let attempts = result.attempts().max(1) as f64;
    for (i, &count) in result.distribution.iter().enumerate() {
        let pct = count as f64 / attempts * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        writeln!(out, "   {}: {} {count:6} ({pct:5.1}%)", i + 1, bar.green())?;
    }
    let pct = result.missed as f64 / attempts * 100.0;
    let bar = create_progress_bar(pct, 100.0, 40);
    writeln!(out, "   X: {} {:6} ({pct:5.1}%)", bar.red(), result.missed)
}
