use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, InputMode, ListPhase};
use crate::router::Route;
use crate::ui_core::layout;
use crate::util_text::truncate_end;

// ===============================
// Top-level draw
// ===============================
pub fn draw(f: &mut Frame, app: &mut App) {
    // Advance spinner animation on each render
    app.tick_spinner();

    // Show warning if terminal is too small to be usable
    const MIN_WIDTH: u16 = 60;
    const MIN_HEIGHT: u16 = 15;

    let area = f.area();
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let warning_text = format!(
            "Terminal too small!\n\nMinimum size: {}×{}\nCurrent size: {}×{}\n\nPlease resize your terminal.",
            MIN_WIDTH, MIN_HEIGHT, area.width, area.height
        );

        let warning = Paragraph::new(warning_text)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(app.theme().toast_error)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(app.theme().toast_error)),
            );

        // Center the warning box
        let vertical_center = Layout::vertical([
            Constraint::Percentage(40),
            Constraint::Length(7),
            Constraint::Percentage(40),
        ])
        .split(area);

        let horizontal_center = Layout::horizontal([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(vertical_center[1]);

        f.render_widget(Clear, area);
        f.render_widget(warning, horizontal_center[1]);
        return;
    }

    let chrome = layout::chrome(area, app.filter_expanded(), app.debug_panel_visible());

    header(f, chrome.header, app);
    if let Some(area) = chrome.filter {
        filter_bar(f, area, app);
    }
    body(f, chrome.body, app);
    if let Some(area) = chrome.debug {
        debug_panel(f, area, app);
    }
    footer(f, chrome.footer, app);

    // Overlays render last
    if app.toast_message().is_some() {
        draw_toast_modal(f, app);
    }
}

// ===============================
// Header / Filter
// ===============================
fn header(f: &mut Frame, area: Rect, app: &App) {
    let spans = vec![
        Span::styled(
            "apix",
            Style::default()
                .fg(app.theme().focus_border)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" · APIs.guru explorer"),
        Span::styled(
            format!("  {}", app.route().path()),
            Style::default().fg(app.theme().text_dim),
        ),
    ];
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn filter_bar(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.input_mode() == InputMode::Filter;
    let filter_text = app.filter_query();

    let border_color = if focused {
        app.theme().focus_border
    } else {
        app.theme().unfocused_border
    };

    // Placeholder hint until the first character lands
    let hint = "(Type to filter providers)";
    let showing_hint = filter_text.is_empty();
    let text = if showing_hint { hint } else { filter_text };
    let text_color = if showing_hint {
        app.theme().text_dim
    } else if focused {
        app.theme().focus_border
    } else {
        app.theme().text
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(text_color))
        .block(
            Block::default()
                .title(" Filter ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        );

    f.render_widget(paragraph, area);

    if focused && area.width > 2 {
        // Cursor inside the input box
        let cols = filter_text
            .chars()
            .count()
            .min(area.width.saturating_sub(2) as usize);
        f.set_cursor_position((area.x + 1 + cols as u16, area.y + 1));
    }
}

// ===============================
// Body
// ===============================
fn body(f: &mut Frame, area: Rect, app: &mut App) {
    let route = app.route().clone();
    match route {
        Route::Home => render_home(f, area, app),
        Route::ApiDetails { provider } => render_details(f, area, app, &provider),
    }
}

fn render_home(f: &mut Frame, area: Rect, app: &mut App) {
    let home = layout::home_layout(area, app.panel_open());

    match app.list_phase() {
        ListPhase::Loading => {
            let text = format!("{} Loading providers...", app.spinner_char());
            let p = Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(Style::default().fg(app.theme().text_dim));
            f.render_widget(p, centered_line(home.content));
        }
        ListPhase::Empty => {
            let p = Paragraph::new("No providers found")
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(app.theme().toast_error)
                        .add_modifier(Modifier::BOLD),
                );
            f.render_widget(p, centered_line(home.content));
        }
        ListPhase::Ready => {
            render_show_button(f, home.button, app);
            if let Some(panel_area) = home.panel {
                render_provider_panel(f, panel_area, app);
            }
        }
    }
}

fn render_show_button(f: &mut Frame, area: Rect, app: &App) {
    // Disabled look while the panel is open
    let enabled = !app.panel_open();
    let (border_color, text_style) = if enabled {
        (
            app.theme().focus_border,
            Style::default()
                .fg(app.theme().text)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            app.theme().unfocused_border,
            Style::default().fg(app.theme().text_dim),
        )
    };

    let button = Paragraph::new("Show Providers")
        .alignment(Alignment::Center)
        .style(text_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(if enabled {
                    BorderType::Double
                } else {
                    BorderType::Rounded
                })
                .border_style(Style::default().fg(border_color)),
        );
    f.render_widget(button, area);
}

fn render_provider_panel(f: &mut Frame, area: Rect, app: &mut App) {
    let filtered = app.filtered_providers();
    let total = app.providers_len();

    let title = if filtered.len() < total {
        format!(" [ Providers ({} / {}) ] ", filtered.len(), total)
    } else {
        format!(" [ Providers ({}) ] ", total)
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = filtered
        .iter()
        .map(|id| ListItem::new(truncate_end(id, inner_width)))
        .collect();

    let mut st = ListState::default().with_offset(app.panel_offset());
    if !filtered.is_empty() {
        st.select(Some(app.panel_selection().min(filtered.len() - 1)));
    }

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(app.theme().selection_bg)
                .fg(app.theme().selection_fg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("")
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(
                    Style::default()
                        .fg(app.theme().focus_border)
                        .add_modifier(Modifier::BOLD),
                )
                .style(Style::default().bg(app.theme().background_focused)),
        );

    f.render_stateful_widget(list, area, &mut st);

    // The List widget adjusts its offset to keep the selection visible;
    // mouse hit-testing needs the value it settled on
    app.set_panel_offset(st.offset());
}

fn render_details(f: &mut Frame, area: Rect, app: &mut App, provider: &str) {
    let spec = match app.spec() {
        Some(s) => s.clone(),
        None => {
            // Waiting on the catalog. Failed fetches have no retry; Esc
            // returns home
            let text = format!("{} Loading spec for {provider}...", app.spinner_char());
            let p = Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(Style::default().fg(app.theme().text_dim));
            f.render_widget(p, centered_line(area));
            return;
        }
    };

    let rows = Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).split(area);

    // Title block: API title, then provider id and version badge
    let title_text = if spec.title.is_empty() { "(untitled)" } else { spec.title.as_str() };
    let head_lines = vec![
        Line::from(Span::styled(
            title_text.to_string(),
            Style::default()
                .fg(app.theme().text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(provider.to_string(), Style::default().fg(app.theme().text_dim)),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", spec.version),
                Style::default()
                    .fg(app.theme().badge)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    let head = Paragraph::new(head_lines).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Plain)
            .border_style(Style::default().fg(app.theme().unfocused_border)),
    );
    f.render_widget(head, rows[0]);

    // Description fills the rest; viewport height feeds scroll clamping
    app.set_details_viewport_height(rows[1].height.saturating_sub(2));

    let description = if spec.description.is_empty() {
        "(no description)".to_string()
    } else {
        spec.description.clone()
    };

    let desc = Paragraph::new(description)
        .wrap(Wrap { trim: false })
        .scroll((app.details_scroll(), 0))
        .block(
            Block::default()
                .title(" Description ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(app.theme().unfocused_border)),
        );
    f.render_widget(desc, rows[1]);
}

// ===============================
// Footer / Debug
// ===============================
fn footer(f: &mut Frame, area: Rect, app: &App) {
    let accent = app.theme().focus_border;
    let mut spans: Vec<Span> = Vec::with_capacity(24);

    match app.route() {
        Route::Home => {
            if app.panel_open() {
                spans.push(Span::styled("↑/↓", Style::default().fg(accent)));
                spans.push(Span::raw(" select │ "));
                spans.push(Span::styled("Enter", Style::default().fg(accent)));
                spans.push(Span::raw(" open │ "));
                spans.push(Span::styled("/", Style::default().fg(accent)));
                spans.push(Span::raw(" filter │ "));
                spans.push(Span::styled("c", Style::default().fg(accent)));
                spans.push(Span::raw(" copy │ "));
                spans.push(Span::styled("Esc", Style::default().fg(accent)));
                spans.push(Span::raw(" close"));
            } else {
                spans.push(Span::styled("s", Style::default().fg(accent)));
                spans.push(Span::raw("/"));
                spans.push(Span::styled("Enter", Style::default().fg(accent)));
                spans.push(Span::raw(" show providers"));
            }
        }
        Route::ApiDetails { .. } => {
            spans.push(Span::styled("↑/↓", Style::default().fg(accent)));
            spans.push(Span::raw(" scroll │ "));
            spans.push(Span::styled("c", Style::default().fg(accent)));
            spans.push(Span::raw(" copy │ "));
            spans.push(Span::styled("Esc", Style::default().fg(accent)));
            spans.push(Span::raw(" back"));
        }
    }

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled("q", Style::default().fg(accent)));
    spans.push(Span::raw(" quit"));

    if app.debug_visible() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            "[DEBUG]",
            Style::default().fg(app.theme().debug_indicator),
        ));
    }
    spans.push(Span::raw(format!(" │ FPS {}", app.fps())));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn debug_panel(f: &mut Frame, area: Rect, app: &App) {
    let log = app.debug_log();
    let lines_to_show = area.height.saturating_sub(2) as usize; // inner height
    let start = log.len().saturating_sub(lines_to_show);
    let lines: Vec<Line> = log[start..]
        .iter()
        .map(|msg| Line::from(Span::raw(msg.as_str())))
        .collect();

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(app.theme().text_dim))
        .block(
            Block::default()
                .title(" Debug ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(app.theme().text_dim)),
        );

    f.render_widget(paragraph, area);
}

// ===============================
// Overlays
// ===============================
fn draw_toast_modal(f: &mut Frame, app: &App) {
    let message = app.toast_message().unwrap_or("");

    // Small centered box (40% width, 3 lines height)
    let area = f.area();
    let width = (area.width as u32 * 2 / 5) as u16;
    let height = 3;
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    let overlay = Rect { x, y, width, height };

    f.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(app.theme().toast_success));

    let text = Paragraph::new(format!("✓ {message}"))
        .style(
            Style::default()
                .fg(app.theme().toast_success)
                .add_modifier(Modifier::BOLD),
        )
        .block(block);

    f.render_widget(text, overlay);
}

// ===============================
// Helpers
// ===============================
/// Single centered row inside `area` (for short status lines)
fn centered_line(area: Rect) -> Rect {
    let y = (area.y + area.height / 2).min(area.y + area.height.saturating_sub(1));
    Rect::new(area.x, y, area.width, 1)
}
