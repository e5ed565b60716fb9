//! UI rendering for the store deck.
//!
//! Two screens share one frame layout:
//! - Orders: the synced order list with status and totals
//! - Product Settings: the publish and more-options sections for the
//!   loaded product
//!
//! Rendering is stateless; everything drawn comes from [`App`].

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Screen};
use crate::models::{Order, OrderStatus};
use crate::settings::{self, ProductSettingsSection};
use crate::widgets::SectionHeader;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color - white for titles
pub const COLOR_HEADER: Color = Color::White;

/// Active/healthy elements - bright green
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Orders => render_orders_screen(frame, app),
        Screen::ProductSettings => render_settings_screen(frame, app),
    }
}

/// Get inner rect with margin
fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// Frame shared by both screens: outer border, title bar, body, hints.
fn render_chrome(frame: &mut Frame, app: &App, title: &str) -> Rect {
    let size = frame.area();

    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(outer_block, size);

    let inner = inner_rect(size, 1);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title bar
            Constraint::Min(3),    // Body
            Constraint::Length(1), // Keybind hints
        ])
        .split(inner);

    render_title_bar(frame, chunks[0], app, title);
    render_keybind_hints(frame, chunks[2]);

    chunks[1]
}

fn render_title_bar(frame: &mut Frame, area: Rect, app: &App, title: &str) {
    let (status_icon, status_text, status_color) = if app.note_feed_connected {
        ("●", "Connected", COLOR_ACTIVE)
    } else {
        ("○", "Disconnected", Color::Red)
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" SHOPDECK  {}", title),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("[", Style::default().fg(COLOR_DIM)),
        Span::styled(status_icon, Style::default().fg(status_color)),
        Span::styled("] ", Style::default().fg(COLOR_DIM)),
        Span::styled(status_text, Style::default().fg(status_color)),
        Span::raw("  "),
        Span::styled(
            format!("site {}", app.config.site_id),
            Style::default().fg(COLOR_DIM),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_keybind_hints(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" "),
        Span::styled("[Q]", Style::default().fg(COLOR_ACCENT)),
        Span::styled(" Quit  ", Style::default().fg(COLOR_DIM)),
        Span::styled("[R]", Style::default().fg(COLOR_ACCENT)),
        Span::styled(" Refresh  ", Style::default().fg(COLOR_DIM)),
        Span::styled("[TAB]", Style::default().fg(COLOR_ACCENT)),
        Span::styled(" Switch screen  ", Style::default().fg(COLOR_DIM)),
        Span::styled("[1]", Style::default().fg(COLOR_ACCENT)),
        Span::styled(" Orders  ", Style::default().fg(COLOR_DIM)),
        Span::styled("[2]", Style::default().fg(COLOR_ACCENT)),
        Span::styled(" Settings", Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(hints), area);
}

// ============================================================================
// Orders Screen
// ============================================================================

fn render_orders_screen(frame: &mut Frame, app: &App) {
    let body = render_chrome(frame, app, "Orders");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Section header
            Constraint::Min(1),    // Order rows
        ])
        .split(body);

    let detail = if app.orders_loading {
        "syncing...".to_string()
    } else {
        match app.order_list.filter().status {
            Some(status) => format!("{} · {}", app.orders.len(), status),
            None => format!("{} orders", app.orders.len()),
        }
    };
    let header = SectionHeader::new().left(" ORDERS").right(detail);
    frame.render_widget(header, chunks[0]);

    let mut lines: Vec<Line> = Vec::new();

    if let Some(error) = &app.last_sync_error {
        lines.push(Line::from(vec![
            Span::styled(" ✗ ", Style::default().fg(Color::Red)),
            Span::styled(error.as_str(), Style::default().fg(Color::Red)),
        ]));
        lines.push(Line::from(""));
    }

    if app.orders.is_empty() && app.last_sync_error.is_none() {
        let placeholder = if app.orders_loading {
            "Fetching orders from the store..."
        } else {
            "No orders to show. Press R to refresh."
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" {}", placeholder),
            Style::default().fg(COLOR_DIM),
        )));
    }

    let visible_rows = chunks[1].height as usize;
    for order in app.orders.iter().take(visible_rows.saturating_sub(lines.len())) {
        lines.push(order_line(order, chunks[1].width));
    }

    frame.render_widget(Paragraph::new(lines), chunks[1]);
}

/// One order as a single row: number, date, status, customer note
/// marker, total right-aligned.
fn order_line(order: &Order, width: u16) -> Line<'static> {
    let number = format!(" #{:<8}", order.number);
    let date = order.date_created.format("%b %d %H:%M").to_string();
    let status = order.status.to_string();
    let note_marker = if order.customer_note.is_some() {
        " ✎"
    } else {
        ""
    };
    let total = order.total_display();

    let left_len = number.len() + 2 + date.len() + 2 + status.len() + note_marker.len();
    let pad = (width as usize)
        .saturating_sub(left_len + total.len() + 1)
        .max(1);

    Line::from(vec![
        Span::styled(number, Style::default().fg(COLOR_ACCENT)),
        Span::raw("  "),
        Span::styled(date, Style::default().fg(COLOR_DIM)),
        Span::raw("  "),
        Span::styled(status, Style::default().fg(status_color(order.status))),
        Span::styled(note_marker, Style::default().fg(COLOR_DIM)),
        Span::raw(" ".repeat(pad)),
        Span::styled(total, Style::default().fg(COLOR_ACCENT)),
    ])
}

fn status_color(status: OrderStatus) -> Color {
    match status {
        OrderStatus::Processing => COLOR_ACTIVE,
        OrderStatus::Pending | OrderStatus::OnHold => Color::Yellow,
        OrderStatus::Completed => COLOR_DIM,
        OrderStatus::Cancelled | OrderStatus::Refunded | OrderStatus::Failed => Color::Red,
    }
}

// ============================================================================
// Product Settings Screen
// ============================================================================

fn render_settings_screen(frame: &mut Frame, app: &App) {
    let body = render_chrome(frame, app, "Product Settings");

    let sections = settings::build_sections(
        &app.product_settings,
        app.product_type,
        app.config.downloadable_products_enabled,
    );

    // One chunk per section: a header line plus one line per row,
    // separated by a blank line.
    let mut constraints: Vec<Constraint> = Vec::new();
    for section in &sections {
        constraints.push(Constraint::Length(section.rows.len() as u16 + 2));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(body);

    for (section, chunk) in sections.iter().zip(chunks.iter()) {
        render_settings_section(frame, *chunk, section);
    }
}

fn render_settings_section(frame: &mut Frame, area: Rect, section: &ProductSettingsSection) {
    if area.height == 0 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    let header = SectionHeader::new()
        .left(format!(" {}", section.title.to_uppercase()))
        .right(format!("{} rows", section.rows.len()));
    frame.render_widget(header, chunks[0]);

    let lines: Vec<Line> = section
        .rows
        .iter()
        .map(|row| {
            let value = if row.value.is_empty() {
                Span::styled("—".to_string(), Style::default().fg(COLOR_DIM))
            } else {
                Span::styled(row.value.clone(), Style::default().fg(COLOR_ACCENT))
            };
            Line::from(vec![
                Span::styled(
                    format!("   {:<22}", row.kind.title()),
                    Style::default().fg(COLOR_DIM),
                ),
                value,
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), chunks[1]);
}
