//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{MAX_LIVES, PLACEHOLDER};
use crate::engine::GameStatus;
use crate::output::formatters::{format_guesses, lives_label};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Gallows drawn one stroke per lost life
const GALLOWS: [&str; 7] = [
    "  +---+  ",
    "  |   |  ",
    "  {h}   |  ",
    " {la}{b}{ra}  |  ",
    " {ll} {rl}  |  ",
    "      |  ",
    "=========",
];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN")
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Clue
            Constraint::Min(9),    // Gallows
            Constraint::Length(4), // Guesses
        ])
        .split(area);

    render_clue(f, app, chunks[0]);
    render_gallows(f, app, chunks[1]);
    render_guesses(f, app, chunks[2]);
}

fn render_clue(f: &mut Frame, app: &App, area: Rect) {
    // On a loss, show the code with the missed letters in red
    let reveal = app.status == GameStatus::Lost;

    let spans: Vec<Span> = app
        .state
        .clue()
        .slots()
        .iter()
        .zip(app.state.code().letters())
        .flat_map(|(&slot, &letter)| {
            let span = if slot != PLACEHOLDER {
                Span::styled(
                    slot.to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else if reveal {
                Span::styled(letter.to_string(), Style::default().fg(Color::Red))
            } else {
                Span::raw(PLACEHOLDER.to_string())
            };
            [span, Span::raw(" ")]
        })
        .collect();

    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(spans)])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Code ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

/// The gallows for `lives_left`, with parts appearing as lives are lost
fn gallows_lines(lives_left: u8) -> Vec<String> {
    let lost = MAX_LIVES.saturating_sub(lives_left);
    let part = |threshold: u8, drawn: &str| {
        if lost >= threshold {
            drawn.to_string()
        } else {
            " ".repeat(drawn.chars().count())
        }
    };

    GALLOWS
        .iter()
        .map(|line| {
            line.replace("{h}", &part(1, "O"))
                .replace("{b}", &part(2, "|"))
                .replace("{la}", &part(3, "/"))
                .replace("{ra}", &part(4, "\\"))
                .replace("{ll}", &part(5, "/"))
                .replace("{rl}", &part(6, "\\"))
        })
        .collect()
}

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let lives_left = app.state.lives_left();
    let color = match lives_left {
        0..=2 => Color::Red,
        3..=5 => Color::Yellow,
        _ => Color::Green,
    };

    let lines: Vec<Line> = gallows_lines(lives_left)
        .into_iter()
        .map(|l| Line::styled(l, Style::default().fg(color)))
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" {} left ", lives_label(lives_left)))
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_guesses(f: &mut Frame, app: &App, area: Rect) {
    let guesses = app.state.previous_guesses();
    let text = if guesses.is_empty() {
        "No guesses yet".to_string()
    } else {
        format_guesses(guesses)
    };

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .title(format!(" Guesses ({}) ", guesses.len()))
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Lives gauge
            Constraint::Length(3), // Progress gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_lives(f, app, chunks[0]);
    render_progress(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_lives(f: &mut Frame, app: &App, area: Rect) {
    let lives_left = app.state.lives_left();
    let pct = u16::from(lives_left.min(MAX_LIVES)) * 100 / u16::from(MAX_LIVES);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Lives ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Red))
        .percent(pct)
        .label(format!("{lives_left}/{MAX_LIVES}"));
    f.render_widget(gauge, area);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let clue = app.state.clue();
    let total = clue.len().max(1);
    let revealed = clue.len() - clue.hidden_count();
    let pct = (revealed * 100 / total) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Revealed ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(pct)
        .label(format!("{revealed}/{} letters", clue.len()));
    f.render_widget(gauge, area);
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Guess => (" Enter a letter or the whole word ", Color::Yellow),
        InputMode::SaveName => (" Save name | Esc to cancel ", Color::Cyan),
        InputMode::Finished => (" Game over | n: new game  q: quit ", Color::Green),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
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
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Won: {}",
        app.stats.total_games, app.stats.games_won
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help = Paragraph::new("Enter: guess | Ctrl-S: save | Esc: quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
