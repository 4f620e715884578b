//! Modal popups: failure notices and the image path prompt

use super::super::state::{DashboardState, InputMode, Notice};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

/// Render whichever popup is active. Notices take priority.
pub fn render_popups(f: &mut Frame, state: &DashboardState) {
    if let Some(notice) = state.notice() {
        render_notice(f, notice);
    } else if let InputMode::EditingPath(buffer) = state.input_mode() {
        render_path_prompt(f, buffer, state.tick);
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

fn render_notice(f: &mut Frame, notice: &Notice) {
    let area = centered(f.area(), 70, 9);
    let lines = vec![
        Line::from(Span::styled(
            notice.message.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            notice.detail.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled("[Enter] OK", Style::default().fg(Color::Cyan))),
    ];

    let title = match notice.action {
        Some(action) => format!("NOTICE: {}", action.label()),
        None => "NOTICE".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Red))
        .padding(Padding::horizontal(1));

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

fn render_path_prompt(f: &mut Frame, buffer: &str, tick: usize) {
    let area = centered(f.area(), 70, 5);
    let cursor = if tick % 10 < 5 { "_" } else { " " };
    let lines = vec![
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::raw(format!("{}{}", buffer, cursor)),
        ]),
        Line::from(Span::styled(
            "[Enter] Select  [Esc] Cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title("IMAGE PATH")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(block), area);
}
