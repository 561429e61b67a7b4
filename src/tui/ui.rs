//! Stateless rendering of the trivia board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app::{Status, TriviaApp};
use crate::trivia::{CategorySource, Mode};

/// Draws the whole screen.
pub fn draw<S: CategorySource>(frame: &mut Frame, app: &TriviaApp<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + score
            Constraint::Min(8),    // Board
            Constraint::Length(6), // Active clue
            Constraint::Length(3), // Status
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_board(frame, chunks[1], app);
    draw_active_clue(frame, chunks[2], app);
    draw_status(frame, chunks[3], app);
}

fn draw_header<S: CategorySource>(frame: &mut Frame, area: Rect, app: &TriviaApp<S>) {
    let header = Line::from(vec![
        Span::styled(
            "Strictly Trivia",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Total Score: ${}", app.game().session().score()),
            Style::default().fg(Color::Yellow),
        ),
    ]);
    let paragraph = Paragraph::new(header)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_board<S: CategorySource>(frame: &mut Frame, area: Rect, app: &TriviaApp<S>) {
    let categories = app.game().session().board().categories();
    if categories.is_empty() {
        let text = if app.game().started() {
            "Board cleared!"
        } else {
            "Press n to start"
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, area);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, categories.len() as u32);
            categories.len()
        ])
        .split(area);

    let (cursor_col, cursor_row) = app.cursor();
    let idle = app.game().mode() == Mode::Idle;

    for (col, (category, column_area)) in categories.iter().zip(columns.iter()).enumerate() {
        let lines: Vec<Line> = category
            .clues()
            .iter()
            .enumerate()
            .map(|(row, clue)| {
                let mut style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
                if idle && col == cursor_col && row == cursor_row {
                    style = style.bg(Color::White).fg(Color::Black);
                }
                Line::from(Span::styled(format!("${}", clue.value()), style))
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                category.title().to_string(),
                Style::default().fg(Color::White).bg(Color::Blue),
            ));
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, *column_area);
    }
}

fn draw_active_clue<S: CategorySource>(frame: &mut Frame, area: Rect, app: &TriviaApp<S>) {
    let session = app.game().session();
    let lines = match (session.mode(), session.active_clue()) {
        (Mode::AwaitingAnswer, Some(clue)) => vec![
            Line::from(Span::styled(
                clue.question().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Your Answer: ", Style::default().fg(Color::DarkGray)),
                Span::raw(app.answer_input().to_string()),
                Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
            ]),
        ],
        (Mode::ShowingResult, _) => {
            let correct = session.shown_outcome().is_some_and(|o| o.correct);
            let color = if correct { Color::Green } else { Color::Red };
            vec![Line::from(Span::styled(
                app.feedback().unwrap_or_default(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))]
        }
        _ => Vec::new(),
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Clue"));
    frame.render_widget(paragraph, area);
}

fn draw_status<S: CategorySource>(frame: &mut Frame, area: Rect, app: &TriviaApp<S>) {
    let (text, color) = match app.status() {
        Status::Welcome => (format!("n: {}   q: quit", app.play_label()), Color::Yellow),
        Status::Loading => ("Loading board...".to_string(), Color::Cyan),
        Status::Failed(reason) => (
            format!("Could not start: {}   n: try again   q: quit", reason),
            Color::Red,
        ),
        Status::Playing => match app.game().mode() {
            Mode::Idle => (
                format!("arrows: move   enter: open   n: {}   q: quit", app.play_label()),
                Color::Yellow,
            ),
            Mode::AwaitingAnswer => ("type your answer, enter: submit".to_string(), Color::Yellow),
            Mode::ShowingResult => ("enter: continue".to_string(), Color::Yellow),
        },
    };
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
