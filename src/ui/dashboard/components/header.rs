//! Dashboard header component
//!
//! Renders the title and the upload card

use super::super::state::DashboardState;
use super::super::utils::format_uptime;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render header with title, backend and selected image.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("AI SMART KITCHEN DASHBOARD v{}", version))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let image_span = match &state.selected_image {
        Some(image) => Span::styled(
            format!("{} ({})", image.file_name(), image.format_size()),
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled("No image selected", Style::default().fg(Color::DarkGray)),
    };

    let upload_line = Line::from(vec![
        Span::styled("Backend: ", Style::default().fg(Color::Gray)),
        Span::styled(
            state.environment.backend_url(),
            Style::default().fg(Color::LightBlue),
        ),
        Span::styled("  |  Image: ", Style::default().fg(Color::Gray)),
        image_span,
        Span::styled("  [I] Select image", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("  |  Uptime: {}", format_uptime(state.start_time.elapsed())),
            Style::default().fg(Color::Gray),
        ),
    ]);

    let upload = Paragraph::new(upload_line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(upload, header_chunks[1]);
}
