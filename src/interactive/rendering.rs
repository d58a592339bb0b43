//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::game::{Phase, Snapshot};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let snapshot = app.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Letters and progress
            Constraint::Percentage(40), // Words and messages
        ])
        .split(chunks[1]);

    render_letter_panel(f, &snapshot, main_chunks[0]);
    render_side_panel(f, app, &snapshot, main_chunks[1]);

    render_input(f, &snapshot, chunks[2]);
    render_status(f, &snapshot, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 SCRAMBLED - Use every letter")
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

fn render_letter_panel(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Tiles
            Constraint::Length(3), // Progress gauge
            Constraint::Min(4),    // Solution reveal
        ])
        .split(area);

    render_tiles(f, snapshot, chunks[0]);
    render_progress(f, snapshot, chunks[1]);
    render_solution(f, snapshot, chunks[2]);
}

fn render_tiles(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let tile_style = Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let content = if snapshot.letters.is_empty() {
        vec![Line::from(Span::styled(
            "All letters in use",
            Style::default().fg(Color::Green),
        ))]
    } else {
        let spans: Vec<Span> = snapshot
            .letters
            .iter()
            .flat_map(|l| [Span::styled(format!(" {l} "), tile_style), Span::raw(" ")])
            .collect();
        vec![Line::from(""), Line::from(spans)]
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(format!(" Letters ({} left) ", snapshot.letters.len()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(paragraph, area);
}

fn render_progress(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let used = snapshot.total - snapshot.remaining;
    let percent = if snapshot.total == 0 {
        0
    } else {
        (used * 100 / snapshot.total) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Letters Used ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{} letters", snapshot.total));

    f.render_widget(gauge, area);
}

fn render_solution(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let content = match &snapshot.solution {
        Some(words) => vec![
            Line::from(Span::styled(
                "🎉 Solved!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("Our solution: {}", words.join(", "))),
        ],
        None => vec![Line::from(Span::styled(
            "Revealed when the puzzle is solved",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let paragraph = Paragraph::new(content).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" Solution ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_side_panel(f: &mut Frame, app: &App, snapshot: &Snapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Accepted words
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_words(f, app, snapshot, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_words(f: &mut Frame, app: &App, snapshot: &Snapshot, area: Rect) {
    let items: Vec<ListItem> = snapshot
        .used_words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let item = ListItem::new(format!("{}. {word}", i + 1));
            if app.selected == Some(i) {
                item.style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                item.style(Style::default().fg(Color::Green))
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Your Words ({}) ", snapshot.used_words.len()))
            .borders(Borders::ALL),
    );

    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages()
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

fn render_input(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let (title, color) = match snapshot.phase {
        Phase::Completed => (" 🎉 CONGRATULATIONS! | Ctrl-N for a new puzzle ", Color::Green),
        Phase::Idle | Phase::Typing => (" Type a word | Enter submit | Esc cancel ", Color::Yellow),
    };

    let input = Paragraph::new(snapshot.pending.as_str())
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

fn render_status(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
        ])
        .split(area);

    let phase = match snapshot.phase {
        Phase::Idle => "Ready",
        Phase::Typing => "Typing",
        Phase::Completed => "Solved",
    };
    let mode = Paragraph::new(format!("State: {phase}")).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let words = Paragraph::new(format!("Words: {}", snapshot.used_words.len()))
        .alignment(Alignment::Center);
    f.render_widget(words, chunks[1]);

    let remaining = Paragraph::new(format!("Remaining: {}", snapshot.remaining))
        .alignment(Alignment::Center);
    f.render_widget(remaining, chunks[2]);

    let help_text = if snapshot.phase == Phase::Completed {
        "^N: New Puzzle | ^Q: Quit"
    } else {
        "↑↓: Select | Del: Remove | ^N: New | ^Q: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
