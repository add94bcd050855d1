use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::App;
use super::charts;
use super::theme;

pub(crate) const TITLE: &str = "Monthly Expenditures and Forecast";

/// Rows used by everything except the chart area.
pub(crate) const CHROME_HEIGHT: u16 = 3;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(3),    // Charts
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Message bar
        ])
        .split(f.area());

    render_title(f, chunks[0]);
    charts::render(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);
    render_message_bar(f, chunks[3], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::raw(format!(" {TITLE} "))))
        .style(theme::header_style());
    f.render_widget(title, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let (mode_label, mode_bg) = if app.loading {
        (" LOADING ", theme::YELLOW)
    } else {
        (" READY ", theme::ACCENT)
    };
    let mode_style = Style::default()
        .fg(theme::HEADER_BG)
        .bg(mode_bg)
        .add_modifier(Modifier::BOLD);

    let months = app.month_count();
    let mut info = format!(
        " {} | {} actual, {} forecast | {months} months",
        app.api_url,
        app.state.actuals().len(),
        app.state.forecast().len()
    );
    if months > app.visible_charts {
        let last = (app.scroll + app.visible_charts).min(months);
        info.push_str(&format!(" ({}-{last})", app.scroll + 1));
    }
    if let Some(at) = app.last_loaded {
        info.push_str(&format!(" | updated {}", at.format("%H:%M:%S")));
    }

    let right = " j/k scroll | r reload | ? help | q quit ";

    let available = area.width as usize;
    let used = mode_label.len() + info.chars().count() + right.len();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(mode_label, mode_style),
        Span::styled(info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_message_bar(f: &mut Frame, area: Rect, app: &App) {
    let content = if app.status_message.is_empty() {
        Line::from(Span::styled(" Press ? for help", theme::dim_style()))
    } else {
        Line::from(Span::styled(
            format!(" {}", app.status_message),
            theme::command_bar_style(),
        ))
    };
    let bar = Paragraph::new(content).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let section = |name: &'static str| {
        Line::from(Span::styled(
            name,
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let row = |text: &'static str| Line::from(Span::styled(text, theme::normal_style()));

    let help_text = vec![
        Line::from(Span::styled(
            " SpendView Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section(" Navigation"),
        row("  j/k or Up/Down   Scroll one month      g/G        Top/Bottom"),
        row("  Ctrl-d/u         Page Down/Up          q, Ctrl-q  Quit"),
        Line::from(""),
        section(" Data"),
        row("  r               Reload actuals and forecast"),
        Line::from(""),
        Line::from(Span::styled(" Press any key to close ", theme::dim_style())),
    ];

    // Center the popup, clamped to terminal height
    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 68.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}
