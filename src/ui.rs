//! View compositor - draws the current state, never mutates it

use ratatui::{prelude::*, widgets::*};

use crate::app::{AppState, Panel};
use crate::constants::{APP_NAME, CURSOR_MARKER};
use crate::models::EndpointDefinition;

const FOCUSED_BORDER: Color = Color::Rgb(0x00, 0xff, 0x7f);
const DEFAULT_BORDER: Color = Color::Rgb(0xcf, 0x64, 0x00);
const SELECTED_ITEM: Color = Color::Rgb(0x00, 0xff, 0x7f);
const ITEM: Color = Color::Rgb(0x82, 0x82, 0x82);

const HELP_TEXT: &str = "[enter] send · [tab] panel · [q] quit";

/// Draw the whole screen, clipped to the last known viewport
pub fn draw(f: &mut Frame, state: &AppState) {
    let viewport = Rect::new(0, 0, state.viewport.width, state.viewport.height);
    let area = f.area().intersection(viewport);
    if area.is_empty() {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let title = Paragraph::new(APP_NAME)
        .alignment(Alignment::Center)
        .style(Style::default().bold().underlined());
    f.render_widget(title, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[1]);

    draw_catalog(f, state, columns[0]);
    draw_detail(f, state, right[0]);
    draw_response(f, state, right[1]);
}

fn panel_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { FOCUSED_BORDER } else { DEFAULT_BORDER };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(color))
        .title(title)
        .padding(Padding::horizontal(1))
}

fn draw_catalog(f: &mut Frame, state: &AppState, area: Rect) {
    let mut lines = catalog_lines(state);
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray))));

    let focused = state.focus.panel() == Panel::Catalog;
    let visible = area.height.saturating_sub(2);
    let list = Paragraph::new(lines)
        .block(panel_block(" Endpoints ", focused))
        .scroll((catalog_scroll(state.focus.cursor(), visible), 0));
    f.render_widget(list, area);
}

/// First row to show so the cursor row stays inside `visible` rows
fn catalog_scroll(cursor: usize, visible: u16) -> u16 {
    let last_visible = usize::from(visible.saturating_sub(1));
    u16::try_from(cursor.saturating_sub(last_visible)).unwrap_or(u16::MAX)
}

/// One line per endpoint: marker, method padded to 7, URL template.
///
/// The armed row shows the spinner while its request is in flight.
pub fn catalog_lines(state: &AppState) -> Vec<Line<'static>> {
    let cursor = state.focus.cursor();
    let armed = state
        .lifecycle
        .armed_index()
        .filter(|_| state.lifecycle.in_flight());

    state
        .catalog
        .iter()
        .enumerate()
        .map(|(i, ep)| {
            let marker = if armed == Some(i) {
                state.lifecycle.spinner_glyph()
            } else if i == cursor {
                CURSOR_MARKER
            } else {
                " "
            };
            let style = if i == cursor {
                Style::default().fg(SELECTED_ITEM).bold()
            } else {
                Style::default().fg(ITEM)
            };
            Line::from(vec![
                Span::raw(format!("{} ", marker)),
                Span::styled(format!("{:<7} ", ep.method.as_str()), style),
                Span::styled(ep.url.clone(), style),
            ])
        })
        .collect()
}

fn draw_detail(f: &mut Frame, state: &AppState, area: Rect) {
    let lines = state
        .selected_endpoint()
        .map(detail_lines)
        .unwrap_or_default();
    let focused = state.focus.panel() == Panel::Detail;
    let detail = Paragraph::new(lines)
        .block(panel_block(" Endpoint ", focused))
        .wrap(Wrap { trim: false });
    f.render_widget(detail, area);
}

fn detail_lines(ep: &EndpointDefinition) -> Vec<Line<'static>> {
    let label = Style::default().fg(ITEM);
    let mut lines = vec![
        Line::from(Span::styled(ep.name.clone(), Style::default().bold())),
        Line::from(vec![
            Span::styled("method ", label),
            Span::styled(ep.method.as_str(), Style::default().fg(method_color(ep.method.as_str()))),
        ]),
        Line::from(vec![Span::styled("url    ", label), Span::raw(ep.url.clone())]),
    ];

    for name in &ep.path_params {
        let value = ep.params.get(name).map(String::as_str).unwrap_or("<unbound>");
        lines.push(Line::from(vec![
            Span::styled("path   ", label),
            Span::raw(format!("{} = {}", name, value)),
        ]));
    }
    for (key, value) in &ep.query {
        lines.push(Line::from(vec![
            Span::styled("query  ", label),
            Span::raw(format!("{} = {}", key, value)),
        ]));
    }
    if let Some(body) = &ep.body {
        lines.push(Line::from(vec![Span::styled("body   ", label), Span::raw(body.clone())]));
    }

    lines
}

fn draw_response(f: &mut Frame, state: &AppState, area: Rect) {
    let message = state.lifecycle.last_message();
    let text = if message.is_empty() {
        Text::from(Span::styled("No response yet", Style::default().fg(Color::DarkGray)))
    } else {
        Text::from(message.to_string())
    };
    let focused = state.focus.panel() == Panel::Response;
    let response = Paragraph::new(text)
        .block(panel_block(" Response ", focused))
        .wrap(Wrap { trim: false });
    f.render_widget(response, area);
}

/// Method color
pub fn method_color(method: &str) -> Color {
    match method {
        "GET" => Color::Green,
        "POST" => Color::Yellow,
        "PUT" => Color::Blue,
        "DELETE" => Color::Red,
        _ => Color::White,
    }
}
