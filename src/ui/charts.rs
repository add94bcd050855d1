use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;

use super::app::App;
use super::palette::Palette;
use super::theme;
use super::util::{format_amount, truncate};
use crate::series::MonthEntry;

/// Rows taken by one month's chart, borders included.
pub(crate) const CHART_HEIGHT: u16 = 12;

const MIN_BAR_WIDTH: u16 = 3;
const MAX_BAR_WIDTH: u16 = 14;
const BAR_GAP: u16 = 1;

pub(crate) fn charts_per_page(height: u16) -> usize {
    usize::from((height / CHART_HEIGHT).max(1))
}

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let entries = app.state.series().entries();
    if entries.is_empty() {
        render_placeholder(f, area, app.loading);
        return;
    }

    let visible: Vec<&MonthEntry> = entries
        .iter()
        .skip(app.scroll)
        .take(charts_per_page(area.height))
        .collect();

    let mut constraints = vec![Constraint::Length(CHART_HEIGHT); visible.len()];
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (entry, row) in visible.into_iter().zip(rows.iter()) {
        render_month(f, *row, entry, &app.palette);
    }
}

fn render_month(f: &mut Frame, area: Rect, entry: &MonthEntry, palette: &Palette) {
    let width = bar_width(area.width.saturating_sub(2), entry.amounts().len());

    let bars: Vec<Bar> = entry
        .amounts()
        .iter()
        .map(|(category, amount)| {
            let color = palette.get(category);
            Bar::default()
                .value(amount.round().to_u64().unwrap_or(0))
                .text_value(format_amount(*amount))
                .label(Line::from(truncate(category, usize::from(width))))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(Span::styled(format!(" {} ", entry.label()), theme::title_style()))
        .title_bottom(
            Line::from(Span::styled(
                format!(" total {} ", format_amount(entry.total())),
                theme::dim_style(),
            ))
            .right_aligned(),
        );

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(width)
        .bar_gap(BAR_GAP)
        .label_style(theme::normal_style());

    f.render_widget(chart, area);
}

fn render_placeholder(f: &mut Frame, area: Rect, loading: bool) {
    let text = if loading {
        "Loading…"
    } else {
        "No expenditure data. Press r to reload"
    };
    let msg = Paragraph::new(Line::from(Span::styled(text, theme::dim_style())))
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border_style()),
        );
    f.render_widget(msg, area);
}

/// Widest bar that lets every category fit in `inner_width`, within bounds.
pub(crate) fn bar_width(inner_width: u16, bars: usize) -> u16 {
    if bars == 0 {
        return MAX_BAR_WIDTH;
    }
    let per_bar = inner_width / u16::try_from(bars).unwrap_or(u16::MAX);
    per_bar
        .saturating_sub(BAR_GAP)
        .clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH)
}
