use super::controller::{Modal, WizardController};
use super::host::{marker_symbol, WizardView};
use crate::invite::TeamRoster;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, List, ListItem, Padding, Paragraph};
use ratatui::Frame;

pub fn tail_for_display(value: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= max_chars {
        return value.to_string();
    }
    chars[chars.len() - max_chars..].iter().collect()
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

fn selected_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Sidebar lines: marker, title and the optional badge.
pub fn sidebar_lines(view: &WizardView) -> Vec<String> {
    view.sidebar
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let mut line = format!("{} {}. {}", marker_symbol(row.marker), index + 1, row.label);
            if let Some(detail) = &row.detail {
                line.push_str(&format!(" ({detail})"));
            }
            line
        })
        .collect()
}

pub fn draw_wizard(
    frame: &mut Frame,
    view: &WizardView,
    controller: &WizardController,
    teams: &[TeamRoster],
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let header = Paragraph::new(vec![
        Line::from(Span::styled(view.title.clone(), title_style())),
        Line::from(view.headline.clone()),
    ])
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(view.percent.min(100));
    frame.render_widget(gauge, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(38), Constraint::Min(20)])
        .split(chunks[2]);

    let sidebar_items: Vec<ListItem> = sidebar_lines(view)
        .into_iter()
        .map(|line| ListItem::new(Line::from(line)))
        .collect();
    frame.render_widget(
        List::new(sidebar_items).block(Block::default().borders(Borders::ALL).title("Steps")),
        body[0],
    );

    let mut lines: Vec<Line> = view.intro.iter().map(|line| Line::from(line.clone())).collect();
    if !view.intro.is_empty() {
        lines.push(Line::from(""));
    }
    for (index, item) in view.items.iter().enumerate() {
        if view.focused == Some(index) {
            lines.push(Line::from(Span::styled(format!("» {item}"), selected_style())));
        } else {
            lines.push(Line::from(format!("  {item}")));
        }
    }
    if !view.details.is_empty() {
        lines.push(Line::from(""));
        lines.extend(view.details.iter().map(|line| Line::from(line.clone())));
    }
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .padding(Padding::new(1, 1, 0, 0)),
        ),
        body[1],
    );

    let footer = Paragraph::new(vec![
        Line::from(view.hint.clone()),
        Line::from(format!("Status: {}", controller.status_text)),
    ])
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, chunks[3]);

    match &controller.modal {
        Modal::None => {}
        Modal::SelectTeam { selected } => draw_team_picker(frame, teams, *selected),
        Modal::Text { target, value } => draw_text_prompt(frame, &target.prompt(), value),
    }
}

fn draw_team_picker(frame: &mut Frame, teams: &[TeamRoster], selected: usize) {
    let area = centered_rect(60, 40, frame.area());
    frame.render_widget(Clear, area);
    let items: Vec<ListItem> = teams
        .iter()
        .enumerate()
        .map(|(index, roster)| {
            let item = ListItem::new(Line::from(roster.badge()));
            if index == selected {
                item.style(selected_style())
            } else {
                item
            }
        })
        .collect();
    frame.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Invite team | Enter select, Esc cancel"),
        ),
        area,
    );
}

fn draw_text_prompt(frame: &mut Frame, prompt: &str, value: &str) {
    let area = centered_rect(70, 30, frame.area());
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .padding(Padding::new(2, 2, 1, 1));
    frame.render_widget(block.clone(), area);
    let inner = block.inner(area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);
    let max_input_width = rows[2].width.saturating_sub(2) as usize;
    let display_value = tail_for_display(value, max_input_width);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(prompt.to_string(), title_style()))),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(format!("> {display_value}"))),
        rows[2],
    );
    frame.render_widget(Paragraph::new("Enter apply, Esc cancel"), rows[3]);
    frame.set_cursor_position((
        rows[2].x + 2 + display_value.chars().count() as u16,
        rows[2].y,
    ));
}
