//! Simple text-mode game
//!
//! Hot-seat play without the TUI: players share one terminal and take turns
//! typing guesses until everyone is done with the round.

use crate::core::{MAX_GUESSES, PlayerId, Word};
use crate::engine::LetterStates;
use crate::game::{Game, GameError, GameStatus, Player, open_local_game};
use crate::output::display::{write_board, write_keyboard, write_round_result, write_summary};
use crate::output::formatters::colored_guess;
use crate::wordlists::{Dictionary, WordBank};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

enum Flow {
    Continue,
    Quit,
}

/// Run a hot-seat game over `input` and `out`
///
/// Players are added to a fresh lobby in the order given. Typing `quit`
/// during a round stops the game where it is. The game is returned in
/// whatever state it reached so it can be saved.
///
/// # Errors
///
/// Returns an error on I/O failure, an empty player list, or a blank name.
pub fn run_simple<R, W, G>(
    bank: &WordBank,
    names: &[String],
    input: &mut R,
    out: &mut W,
    rng: &mut G,
) -> Result<Game>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut game = open_local_game(names, rng)?;

    writeln!(out, "\n╔══════════════════════════════════════════════╗")?;
    writeln!(out, "║             Wordle Party - Hot Seat          ║")?;
    writeln!(out, "╚══════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Game {} with {} players. Type 'quit' to stop.\n",
        game.code().bright_yellow().bold(),
        game.players().len()
    )?;

    game.start(draw_target(bank, rng)?)?;

    loop {
        writeln!(out, "{}", format!("── Round {} ──", game.round_number()).cyan())?;
        if let Flow::Quit = play_round(&mut game, bank, input, out)? {
            writeln!(out, "\nGame stopped.")?;
            return Ok(game);
        }
        write_round_result(out, &game)?;

        loop {
            let choice = prompt(input, out, "\n[n]ext round or [e]nd game")?;
            match choice.as_deref().map(str::to_lowercase).as_deref() {
                Some("n" | "next") => {
                    game.next_round(draw_target(bank, rng)?)?;
                    break;
                }
                Some("e" | "end") | None => {
                    game.finish()?;
                    break;
                }
                _ => {}
            }
        }

        if game.status() == GameStatus::Finished {
            break;
        }
    }

    let score = game.summary()?;
    write_summary(out, &game, &score)?;
    Ok(game)
}

fn draw_target<G: Rng + ?Sized>(bank: &WordBank, rng: &mut G) -> Result<Word> {
    bank.random_target(rng).context("word list has no targets")
}

fn play_round<R, W, D>(game: &mut Game, dictionary: &D, input: &mut R, out: &mut W) -> Result<Flow>
where
    R: BufRead,
    W: Write,
    D: Dictionary + ?Sized,
{
    let ids = game.player_ids();

    while !game.is_round_finished()? {
        for id in &ids {
            if game.progress_of(id)?.terminal {
                continue;
            }
            show_boards(out, game, id)?;

            loop {
                let name = game.player(id).map_or("?", Player::display_name).to_string();
                let number = game
                    .current_round()
                    .and_then(|r| r.guesses_of(id))
                    .map_or(0, <[Word]>::len)
                    + 1;
                let Some(line) =
                    prompt(input, out, &format!("{name}, guess {number}/{MAX_GUESSES}"))?
                else {
                    return Ok(Flow::Quit);
                };
                if line.eq_ignore_ascii_case("quit") {
                    return Ok(Flow::Quit);
                }

                match game.submit_guess(id, &line, dictionary) {
                    Ok(outcome) => {
                        let guess = Word::new(line.trim())?;
                        writeln!(out, "  {}", colored_guess(&guess, &outcome.feedback))?;
                        if outcome.progress.won {
                            writeln!(out, "  {}", "Solved!".green().bold())?;
                        } else if outcome.progress.terminal {
                            writeln!(out, "  {}", "Out of guesses.".red())?;
                        }
                        break;
                    }
                    Err(e @ (GameError::InvalidWord(_) | GameError::NotInWordList(_))) => {
                        writeln!(out, "  {}", e.to_string().red())?;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }
    }

    Ok(Flow::Continue)
}

/// The active player's board with letters, everyone else's as colors only
fn show_boards<W: Write>(out: &mut W, game: &Game, active: &PlayerId) -> Result<()> {
    let round = game.current_round().context("no round in progress")?;
    writeln!(out)?;
    for player in game.players() {
        let guesses = round.guesses_of(&player.id).unwrap_or_default();
        write_board(
            out,
            player.display_name(),
            guesses,
            round.target(),
            &player.id == active,
        )?;
    }

    let own = round.guesses_of(active).unwrap_or_default();
    writeln!(out)?;
    write_keyboard(out, &LetterStates::from_guesses(own, round.target()))?;
    Ok(())
}

/// Prompt for one line; `None` once input is exhausted
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn single_target_bank() -> WordBank {
        WordBank::new(words_from_slice(&["crane"]), words_from_slice(&["slate", "irate"]))
    }

    fn play(names: &[&str], script: &str) -> (Game, String) {
        let names: Vec<String> = names.iter().map(|n| (*n).to_string()).collect();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(3);
        let game = run_simple(&single_target_bank(), &names, &mut input, &mut out, &mut rng).unwrap();
        (game, String::from_utf8(out).unwrap())
    }

    #[test]
    fn two_players_one_round() {
        // Ann solves first try, Ben fumbles a word then solves in two
        let (game, text) = play(&["Ann", "Ben"], "crane\nzzzzz\nslate\ncrane\ne\n");

        assert_eq!(game.status(), GameStatus::Finished);
        assert_eq!(game.round_number(), 1);
        assert!(text.contains("\"ZZZZZ\" is not in word list"));
        assert!(text.contains("guesses / round"));

        let score = game.summary().unwrap();
        assert_eq!(score.average_of(&PlayerId::from("p1")), Some(1.0));
        assert_eq!(score.average_of(&PlayerId::from("p2")), Some(2.0));
        assert_eq!(score.winners, vec![PlayerId::from("p1")]);
    }

    #[test]
    fn next_round_then_end() {
        let (game, _) = play(&["Solo"], "slate\ncrane\nn\ncrane\ne\n");

        assert_eq!(game.round_number(), 2);
        let score = game.summary().unwrap();
        assert_eq!(score.average_of(&PlayerId::from("p1")), Some(1.5));
    }

    #[test]
    fn quit_mid_round_leaves_game_in_progress() {
        let (game, text) = play(&["Ann", "Ben"], "slate\nquit\n");
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(text.contains("Game stopped."));
    }

    #[test]
    fn end_of_input_at_round_prompt_ends_game() {
        let (game, _) = play(&["Ann"], "crane\n");
        assert_eq!(game.status(), GameStatus::Finished);
    }

    #[test]
    fn names_are_required() {
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);
        let bank = single_target_bank();
        let mut input = Cursor::new(Vec::new());

        assert!(run_simple(&bank, &[], &mut input, &mut out, &mut rng).is_err());
        let blank = vec!["Ann".to_string(), "  ".to_string()];
        assert!(run_simple(&bank, &blank, &mut input, &mut out, &mut rng).is_err());
    }
}
