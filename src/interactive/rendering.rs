//! TUI rendering with ratatui

use super::app::{InputMode, MessageStyle, ViewState};
use crate::core::{ClassifiedLetter, LetterClassification};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const GREY: Color = Color::Rgb(0x66, 0x66, 0x66);

/// Main UI rendering function
pub fn ui(f: &mut Frame, view: &ViewState) {
    let board_height = (view.config.total_guesses as u16).saturating_add(2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Length(board_height), // Attempts
            Constraint::Length(3),            // Letter statuses
            Constraint::Min(4),               // Messages
            Constraint::Length(3),            // Input area
            Constraint::Length(1),            // Status bar
        ])
        .split(f.area());

    render_header(f, view, chunks[0]);
    render_board(f, view, chunks[1]);
    render_letters(f, view, chunks[2]);
    render_messages(f, view, chunks[3]);
    render_input(f, view, chunks[4]);
    render_status(f, view, chunks[5]);
}

/// Colours for a letter with the given status; unknown letters stay plain
fn letter_style(status: Option<LetterClassification>) -> Style {
    match status {
        Some(LetterClassification::Correct) => Style::default()
            .fg(Color::White)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterClassification::Misplaced) => Style::default()
            .fg(Color::White)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterClassification::Wrong) => Style::default().fg(Color::White).bg(GREY),
        Some(LetterClassification::Unfilled) => Style::default().add_modifier(Modifier::DIM),
        None => Style::default(),
    }
}

fn render_header(f: &mut Frame, view: &ViewState, area: Rect) {
    let headline = view
        .frame
        .as_ref()
        .map_or("WURDEL", |frame| frame.headline.as_str());

    let header = Paragraph::new(format!("🔠 {headline} 🔠"))
        .style(
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Blue)),
        );
    f.render_widget(header, area);
}

fn attempt_line(row: &[ClassifiedLetter]) -> Line<'static> {
    let spans: Vec<Span> = row
        .iter()
        .flat_map(|classified| {
            [
                Span::styled(
                    format!(" {} ", classified.letter),
                    letter_style(Some(classified.classification)),
                ),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn render_board(f: &mut Frame, view: &ViewState, area: Rect) {
    let lines: Vec<Line> = view
        .frame
        .as_ref()
        .map(|frame| frame.rows.iter().map(|row| attempt_line(row)).collect())
        .unwrap_or_default();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Attempts ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_letters(f: &mut Frame, view: &ViewState, area: Rect) {
    let spans: Vec<Span> = view
        .frame
        .as_ref()
        .map(|frame| {
            frame
                .letters
                .iter()
                .map(|&(letter, status)| Span::styled(letter.to_string(), letter_style(status)))
                .collect()
        })
        .unwrap_or_default();

    let letters = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Letters ").borders(Borders::ALL));
    f.render_widget(letters, area);
}

fn render_messages(f: &mut Frame, view: &ViewState, area: Rect) {
    let messages: Vec<ListItem> = view
        .messages
        .iter()
        .rev()
        .take(10)
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

fn render_input(f: &mut Frame, view: &ViewState, area: Rect) {
    let (title, content, color) = match view.input_mode {
        InputMode::GameOver => (
            " Game Over | Press 'n' for new game or 'q' to quit ".to_string(),
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            format!(
                " Guess word ({} letters) | Enter to submit | Esc to give up ",
                view.config.word_length
            ),
            view.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content.to_uppercase())
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

fn render_status(f: &mut Frame, view: &ViewState, area: Rect) {
    let stats_text = format!(
        "Games: {} | Won: {} | Win Rate: {:.0}%",
        view.stats.total_games,
        view.stats.games_won,
        view.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(stats, area);
}
