//! TUI rendering with ratatui
//!
//! Boards for every player, the active player's keyboard, and the summary.

use super::app::{App, MessageStyle, Screen};
use crate::core::{Feedback, LetterResult, MAX_GUESSES, MISS_PENALTY, WORD_LENGTH, Word};
use crate::engine::{KEYBOARD_ROWS, LetterStates};
use crate::output::formatters::format_average;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    if app.screen() == Screen::Summary {
        render_summary(f, app, chunks[1]);
    } else {
        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(65), // Boards
                Constraint::Percentage(35), // Keyboard and messages
            ])
            .split(chunks[1]);

        render_boards(f, app, main_chunks[0]);
        render_info_panel(f, app, main_chunks[1]);
    }

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn tile_style(result: LetterResult) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match result {
        LetterResult::Correct => base.fg(Color::Black).bg(Color::Green),
        LetterResult::WrongLocation => base.fg(Color::Black).bg(Color::Yellow),
        LetterResult::Incorrect => base.fg(Color::White).bg(Color::DarkGray),
        LetterResult::Empty => Style::default().fg(Color::DarkGray),
    }
}

fn tile(letter: char, result: LetterResult) -> Span<'static> {
    Span::styled(format!(" {letter} "), tile_style(result))
}

/// One board row; letters are hidden unless `reveal` is set
fn board_row(guess: Option<&Word>, target: &Word, reveal: bool) -> Line<'static> {
    let Some(guess) = guess else {
        return Line::from(vec![tile('·', LetterResult::Empty); WORD_LENGTH]);
    };
    let feedback = Feedback::evaluate(Some(guess), target);
    let spans: Vec<Span> = guess
        .text()
        .chars()
        .zip(feedback.results())
        .map(|(letter, &result)| {
            let shown = if reveal { letter.to_ascii_uppercase() } else { ' ' };
            tile(shown, result)
        })
        .collect();
    Line::from(spans)
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🎯 WORDLE PARTY | Game {} | Round {}",
        app.game.code(),
        app.game.round_number()
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_boards(f: &mut Frame, app: &App, area: Rect) {
    let Some(round) = app.game.current_round() else {
        return;
    };
    let players = app.game.players();
    if players.is_empty() {
        return;
    }

    let count = u32::try_from(players.len()).unwrap_or(u32::MAX);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(players.iter().map(|_| Constraint::Ratio(1, count)))
        .split(area);

    let round_over = app.screen() == Screen::RoundOver;
    for (index, (player, column)) in players.iter().zip(columns.iter()).enumerate() {
        let guesses = app.guesses_of(&player.id);
        let is_active = index == app.active;

        let mut lines: Vec<Line> = (0..MAX_GUESSES)
            .map(|row| board_row(guesses.get(row), round.target(), is_active || round_over))
            .collect();

        if round_over {
            let score = crate::engine::raw_round_score(guesses, round.target());
            lines.push(Line::from(""));
            lines.push(if score == MISS_PENALTY {
                Line::styled("missed", Style::default().fg(Color::Red))
            } else {
                Line::styled(format!("solved in {score}"), Style::default().fg(Color::Green))
            });
        }

        let border = if is_active && !round_over {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        let board = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(format!(" {} ", player.display_name()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(border),
        );
        f.render_widget(board, *column);
    }
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, &app.keyboard(), chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, states: &LetterStates, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.bytes()
                    .map(|key| tile(char::from(key.to_ascii_uppercase()), states.get(key)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_summary(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(format!("Rounds played: {}", app.game.round_number())),
        Line::styled(
            "Missed words count as a round with 8 guesses.",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ),
        Line::from(""),
    ];

    if let Some(score) = app.summary() {
        for (place, id) in score.ranking.iter().enumerate() {
            let name = app
                .game
                .player(id)
                .map_or(id.as_str(), crate::game::Player::display_name);
            let average = score.average_of(id).unwrap_or(f64::from(MISS_PENALTY));
            let winner = score.winners.contains(id);
            let style = if winner {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::raw(if winner { "🏆 " } else { "   " }),
                Span::styled(format!("{}. {name:<16}", place + 1), style),
                Span::styled(
                    format_average(average),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" guesses / round"),
            ]));
        }
    }

    let summary = Paragraph::new(lines).block(
        Block::default()
            .title(" Final Scores ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(summary, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match (app.screen(), &app.notice) {
        (Screen::Summary, _) => (
            " 🎉 Game over! | Press 'q' to quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        (Screen::RoundOver, _) => (
            " Round over | 'n' next round, 'e' end game ".to_string(),
            String::new(),
            Color::Green,
        ),
        (Screen::Playing, Some(notice)) => (
            format!(" {} ", notice.text),
            app.input.to_uppercase(),
            Color::Red,
        ),
        (Screen::Playing, None) => {
            let name = app
                .game
                .players()
                .get(app.active)
                .map_or("?", crate::game::Player::display_name);
            (
                format!(" {name}, enter your guess "),
                app.input.to_uppercase(),
                Color::Yellow,
            )
        }
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let players = format!("Players: {}", app.game.players().len());
    f.render_widget(
        Paragraph::new(players).alignment(Alignment::Center),
        chunks[0],
    );

    let help_text = match app.screen() {
        Screen::Playing => {
            "Esc: Quit | Tab: Switch Player | Enter: Submit | Ctrl+Backspace: Clear"
        }
        Screen::RoundOver => "Esc: Quit | n: Next Round | e: End Game",
        Screen::Summary => "q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordBank;
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn other_boards_hide_letters() {
        let bank = WordBank::new(words_from_slice(&["crane"]), words_from_slice(&["slate"]));
        let names = vec!["Ann".to_string(), "Ben".to_string()];
        let mut app = App::new(&bank, &names, 1).unwrap();
        app.input = "slate".to_string();
        app.submit(std::time::Instant::now());
        app.switch_player();

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("WORDLE PARTY"));
        assert!(text.contains("Ben, enter your guess"));
        assert!(!text.contains(" S  L "));
    }

    #[test]
    fn summary_screen_shows_averages() {
        let bank = WordBank::new(words_from_slice(&["crane"]), Vec::new());
        let names = vec!["Ann".to_string()];
        let mut app = App::new(&bank, &names, 1).unwrap();
        app.input = "crane".to_string();
        app.submit(std::time::Instant::now());
        app.end_game();

        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Final Scores"));
        assert!(text.contains("guesses / round"));
        assert!(text.contains("1.0"));
    }
}
