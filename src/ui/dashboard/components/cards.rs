//! Dashboard card components
//!
//! The six passive views. Each card is a pure function of one slot.

use super::super::state::DashboardState;
use crate::kitchen::{Action, KitchenState, SpoilageStatus};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub const INVENTORY_PLACEHOLDER: &str = "No inventory data available";
pub const SPOILAGE_PROMPT: &str = "Upload image to check.";
pub const SPOILED_MESSAGE: &str = "Spoiled items detected.";
pub const NOT_SPOILED_MESSAGE: &str = "No spoilage found.";
pub const FORECAST_PLACEHOLDER: &str = "No forecast data available";
pub const WASTE_PLACEHOLDER: &str = "No waste analysis data available";
pub const RECIPES_PLACEHOLDER: &str = "No recipe suggestions available";
pub const MENU_PLACEHOLDER: &str = "No menu suggestions available";

/// Rendered content of one card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardContent {
    pub lines: Vec<String>,
    pub color: Color,
    /// Whether `lines` is the placeholder text
    pub placeholder: bool,
}

impl CardContent {
    fn list(lines: Vec<String>, placeholder: &str) -> Self {
        if lines.is_empty() {
            Self {
                lines: vec![placeholder.to_string()],
                color: Color::DarkGray,
                placeholder: true,
            }
        } else {
            Self {
                lines,
                color: Color::White,
                placeholder: false,
            }
        }
    }
}

pub fn card_title(action: Action) -> &'static str {
    match action {
        Action::Detect => "Inventory Items",
        Action::Spoilage => "Spoilage Check",
        Action::Forecast => "Forecasted Demand",
        Action::Waste => "Waste Analysis",
        Action::Recipes => "AI Recipe Suggestions",
        Action::MenuSuggestions => "Menu Optimization",
    }
}

/// Content of the card fed by `action`.
pub fn card_content(action: Action, kitchen: &KitchenState) -> CardContent {
    match action {
        Action::Detect => CardContent::list(kitchen.inventory.items().to_vec(), INVENTORY_PLACEHOLDER),
        Action::Spoilage => {
            let (message, color) = spoilage_message(kitchen.spoilage_status());
            CardContent {
                lines: vec![message.to_string()],
                color,
                placeholder: kitchen.spoilage_status() == SpoilageStatus::Unknown,
            }
        }
        Action::Forecast => CardContent::list(
            kitchen
                .forecast
                .items()
                .iter()
                .map(|point| format!("{}: {}", point.ds, point.rounded_yhat()))
                .collect(),
            FORECAST_PLACEHOLDER,
        ),
        Action::Waste => CardContent::list(
            kitchen
                .waste_log
                .items()
                .iter()
                .map(|entry| format!("{}: {}kg", entry.category, entry.amount))
                .collect(),
            WASTE_PLACEHOLDER,
        ),
        Action::Recipes => CardContent::list(kitchen.recipes.items().to_vec(), RECIPES_PLACEHOLDER),
        Action::MenuSuggestions => {
            CardContent::list(kitchen.menu_suggestions.items().to_vec(), MENU_PLACEHOLDER)
        }
    }
}

/// "#id HH:MM:SS" of the response the card currently shows.
pub fn card_stamp(action: Action, kitchen: &KitchenState) -> Option<String> {
    let (request_id, updated_at) = match action {
        Action::Detect => (kitchen.inventory.request_id(), kitchen.inventory.updated_at()),
        Action::Spoilage => (kitchen.spoilage.request_id(), kitchen.spoilage.updated_at()),
        Action::Forecast => (kitchen.forecast.request_id(), kitchen.forecast.updated_at()),
        Action::Waste => (kitchen.waste_log.request_id(), kitchen.waste_log.updated_at()),
        Action::Recipes => (kitchen.recipes.request_id(), kitchen.recipes.updated_at()),
        Action::MenuSuggestions => (
            kitchen.menu_suggestions.request_id(),
            kitchen.menu_suggestions.updated_at(),
        ),
    };
    let time = updated_at?.rsplit(' ').next()?;
    Some(format!("#{} {}", request_id?, time))
}

pub fn spoilage_message(status: SpoilageStatus) -> (&'static str, Color) {
    match status {
        SpoilageStatus::Unknown => (SPOILAGE_PROMPT, Color::Gray),
        SpoilageStatus::Spoiled => (SPOILED_MESSAGE, Color::Red),
        SpoilageStatus::NotSpoiled => (NOT_SPOILED_MESSAGE, Color::Green),
    }
}

/// Key that triggers each action.
pub fn action_key(action: Action) -> char {
    match action {
        Action::Detect => 'd',
        Action::Spoilage => 's',
        Action::Waste => 'w',
        Action::Forecast => 'f',
        Action::Recipes => 'r',
        Action::MenuSuggestions => 'm',
    }
}

/// Render the six cards as a 3x2 grid.
pub fn render_cards(f: &mut Frame, area: Rect, state: &DashboardState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let grid = [
        [Action::Detect, Action::Spoilage],
        [Action::Forecast, Action::Waste],
        [Action::Recipes, Action::MenuSuggestions],
    ];

    for (row_area, row_actions) in rows.iter().zip(grid) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row_area);
        for (column_area, action) in columns.iter().zip(row_actions) {
            render_card(f, *column_area, state, action);
        }
    }
}

fn render_card(f: &mut Frame, area: Rect, state: &DashboardState, action: Action) {
    let content = card_content(action, &state.kitchen);
    let bullet = action != Action::Spoilage && !content.placeholder;

    let lines: Vec<Line> = content
        .lines
        .into_iter()
        .map(|text| {
            let text = if bullet { format!("• {}", text) } else { text };
            Line::from(Span::styled(text, Style::default().fg(content.color)))
        })
        .collect();

    let loading = state.in_flight(action) > 0;
    let mut title = vec![Span::styled(
        card_title(action).to_uppercase(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if loading {
        let spinner = ["|", "/", "-", "\\"][state.tick % 4];
        title.push(Span::styled(
            format!(" {} loading", spinner),
            Style::default().fg(Color::LightYellow),
        ));
    }

    let hint = format!(" [{}] {} ", action_key(action).to_ascii_uppercase(), action.label());
    let border_color = if loading { Color::LightYellow } else { Color::Cyan };

    let mut block = Block::default().title(Line::from(title));
    if let Some(stamp) = card_stamp(action, &state.kitchen) {
        block = block.title_top(
            Line::from(Span::styled(
                format!(" {} ", stamp),
                Style::default().fg(Color::DarkGray),
            ))
            .right_aligned(),
        );
    }
    let block = block
        .title_bottom(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        )))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .padding(Padding::horizontal(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
