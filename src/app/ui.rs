use chrono::{Datelike, NaiveDate};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Cell, Chart, Clear, Dataset, GraphType,
        List, ListItem, Paragraph, Row, Table, Wrap,
    },
};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use rust_decimal_macros::dec;
use strum::IntoEnumIterator;

use crate::{
    app::{
        App,
        app::{InputField, InputMode},
    },
    models::{ApiProvider, DashboardReport, PricePoint},
};

const SERIES_COLORS: [Color; 8] = [
    Color::Cyan,
    Color::Yellow,
    Color::Magenta,
    Color::Green,
    Color::Blue,
    Color::LightRed,
    Color::LightCyan,
    Color::LightMagenta,
];

pub fn render(frame: &mut Frame, app: &mut App) {
    let notices: Vec<String> = app
        .report
        .as_ref()
        .map(|report| report.notices().clone())
        .unwrap_or_default();
    let notice_height = if notices.is_empty() {
        0
    } else {
        notices.len().min(4) as u16 + 2
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(notice_height),
            Constraint::Min(0),
        ])
        .split(frame.area());

    let title = Paragraph::new(format!(
        "Stock Analysis Dashboard ({})",
        app.dashboard.provider().api().to_str()
    ))
    .style(Style::default().fg(Color::Cyan))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(title, chunks[0]);

    render_inputs(frame, app, chunks[1]);
    render_help(frame, app, chunks[2]);

    if let Some(report) = app.report.as_ref() {
        let status = surface_status(
            report,
            app.show_table,
            app.show_line_chart,
            app.show_bar_chart,
        );
        frame.render_widget(
            Paragraph::new(status.join("  ")).style(Style::default().fg(Color::Green)),
            chunks[3],
        );
    }

    if !notices.is_empty() {
        let items: Vec<ListItem> = notices
            .iter()
            .map(|notice| ListItem::new(notice.as_str()).style(Style::default().fg(Color::Red)))
            .collect();
        let notices = List::new(items).block(Block::default().title("Notices").borders(Borders::ALL));
        frame.render_widget(notices, chunks[4]);
    }

    render_surfaces(frame, app, chunks[5]);

    if app.show_api_popup {
        render_api_popup(frame, app);
    }

    if let Some(message) = &app.popup_message {
        render_message_popup(frame, message, Color::Cyan, "Please wait", false);
    }

    if let Some(message) = &app.error_popup {
        render_message_popup(frame, message, Color::Red, "Error", true);
    }
}

fn render_inputs(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let style_for = |field: InputField| {
        if app.input_mode == InputMode::Editing && app.focus == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        }
    };

    let symbols = Paragraph::new(app.symbols_input.as_str())
        .style(style_for(InputField::Symbols))
        .block(
            Block::default()
                .title("Stock Symbols (comma-separated)")
                .borders(Borders::ALL),
        );
    let lookback = Paragraph::new(app.lookback_input.as_str())
        .style(style_for(InputField::Lookback))
        .block(
            Block::default()
                .title("Comparison Length (max 252)")
                .borders(Borders::ALL),
        );

    frame.render_widget(symbols, chunks[0]);
    frame.render_widget(lookback, chunks[1]);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let check = |on: bool| if on { "[x]" } else { "[ ]" };
    let text = match app.input_mode {
        InputMode::Editing => String::from("Enter: apply  Tab: switch field  Esc: stop editing"),
        InputMode::Normal => format!(
            "{} 1 Table  {} 2 Line  {} 3 Bar  | s/l: edit  r: refresh  c: clear all  p: provider  q: quit",
            check(app.show_table),
            check(app.show_line_chart),
            check(app.show_bar_chart)
        ),
    };
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_surfaces(frame: &mut Frame, app: &mut App, area: Rect) {
    let enabled = [app.show_table, app.show_line_chart, app.show_bar_chart]
        .iter()
        .filter(|on| **on)
        .count() as u32;

    if enabled == 0 {
        return;
    }

    let constraints = (0..enabled).map(|_| Constraint::Ratio(1, enabled));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut next = chunks.iter().copied();
    let Some(report) = app.report.as_ref() else {
        return;
    };

    if app.show_table {
        if let Some(chunk) = next.next() {
            render_table(frame, report, &mut app.table_state, chunk);
        }
    }
    if app.show_line_chart {
        if let Some(chunk) = next.next() {
            render_line_chart(frame, report, chunk);
        }
    }
    if app.show_bar_chart {
        if let Some(chunk) = next.next() {
            render_bar_chart(frame, report, chunk);
        }
    }
}

/// Success lines for the enabled surfaces that have data to show.
pub fn surface_status(
    report: &DashboardReport,
    show_table: bool,
    show_line_chart: bool,
    show_bar_chart: bool,
) -> Vec<&'static str> {
    let mut status = Vec::new();
    if show_table && report.has_table_data() {
        status.push("Table generated successfully.");
    }
    if show_line_chart && !report.chart_series().is_empty() {
        status.push("Line chart generated successfully.");
    }
    if show_bar_chart && !percent_bars(report).is_empty() {
        status.push("Bar chart generated successfully.");
    }
    status
}

fn render_unavailable(frame: &mut Frame, surface: &str, area: Rect) {
    let message = Paragraph::new(format!(
        "Failed to generate {}. No data available.",
        surface
    ))
    .style(Style::default().fg(Color::Red))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(message, area);
}

fn gain_color(value: Decimal) -> Color {
    if value >= Decimal::ZERO {
        Color::Green
    } else {
        Color::Red
    }
}

fn render_table(
    frame: &mut Frame,
    report: &DashboardReport,
    table_state: &mut ratatui::widgets::TableState,
    area: Rect,
) {
    if !report.has_table_data() {
        render_unavailable(frame, "table", area);
        return;
    }

    let change_title = report.change_column_title();
    let header_cells = ["Symbol", "Price", change_title.as_str(), "Change in %"]
        .into_iter()
        .map(|h| Cell::from(h.to_string()).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).style(Style::default()).height(1);

    let rows = report.rows().iter().map(|row| {
        let result = row.result();
        let missing = || Cell::from("n/a").style(Style::default().fg(Color::DarkGray));

        let price = match result.latest_price() {
            Some(price) => Cell::from(format!("{:.2}", price)),
            None => missing(),
        };
        let change = match result.change_absolute() {
            Some(change) => Cell::from(format!("{:.2}", change))
                .style(Style::default().fg(gain_color(*change))),
            None => missing(),
        };
        let change_percent = match result.change_percent() {
            Some(percent) => Cell::from(format!("{:.2}%", percent))
                .style(Style::default().fg(gain_color(*percent))),
            None => missing(),
        };

        Row::new([
            Cell::from(result.symbol().clone()),
            price,
            change,
            change_percent,
        ])
        .height(1)
    });

    let widths = [
        Constraint::Length(12),
        Constraint::Length(15),
        Constraint::Length(22),
        Constraint::Length(15),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title("Stock Data").borders(Borders::ALL))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(table, area, table_state);
}

fn day_number(date: &NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Chart points for each series as (day number, close).
pub fn line_points(series: &[(&str, &[PricePoint])]) -> Vec<Vec<(f64, f64)>> {
    series
        .iter()
        .map(|(_, window)| {
            window
                .iter()
                .filter_map(|point| Some((day_number(point.date()), point.close().to_f64()?)))
                .collect()
        })
        .collect()
}

fn render_line_chart(frame: &mut Frame, report: &DashboardReport, area: Rect) {
    let series = report.chart_series();
    if series.is_empty() {
        render_unavailable(frame, "line chart", area);
        return;
    }

    let points = line_points(&series);
    let all = points.iter().flatten();
    let x_min = all.clone().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let x_max = all.clone().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
    let y_min = all.clone().map(|p| p.1).fold(f64::INFINITY, f64::min) * 0.95;
    let y_max = all.map(|p| p.1).fold(f64::NEG_INFINITY, f64::max) * 1.05;
    let x_max = if x_max > x_min { x_max } else { x_min + 1.0 };

    let first_date = series
        .iter()
        .filter_map(|(_, window)| window.first().map(|point| *point.date()))
        .min();
    let last_date = series
        .iter()
        .filter_map(|(_, window)| window.last().map(|point| *point.date()))
        .max();
    let date_label = |date: Option<NaiveDate>| {
        date.map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    };

    let datasets = series
        .iter()
        .zip(points.iter())
        .enumerate()
        .map(|(i, ((symbol, _), data))| {
            Dataset::default()
                .name(symbol.to_string())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(SERIES_COLORS[i % SERIES_COLORS.len()]))
                .data(data)
        })
        .collect::<Vec<_>>();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(
                    "Closing Prices for Selected Stocks over the last {} days",
                    report.lookback()
                )),
        )
        .x_axis(
            Axis::default()
                .title("Date")
                .style(Style::default().fg(Color::Gray))
                .bounds([x_min, x_max])
                .labels([date_label(first_date), date_label(last_date)]),
        )
        .y_axis(
            Axis::default()
                .title("Close")
                .style(Style::default().fg(Color::Gray))
                .bounds([y_min, y_max])
                .labels([
                    format!("{:.1}", y_min),
                    format!("{:.1}", (y_min + y_max) / 2.0),
                    format!("{:.1}", y_max),
                ]),
        );

    frame.render_widget(chart, area);
}

/// Bars carry magnitudes in basis points; the sign lives in color and label.
pub fn percent_bars(report: &DashboardReport) -> Vec<Bar<'static>> {
    report
        .rows()
        .iter()
        .filter_map(|row| {
            let percent = (*row.result().change_percent())?;
            let magnitude = (percent.abs() * dec!(100)).round().to_u64().unwrap_or(0);
            let sign = if percent > Decimal::ZERO { "+" } else { "" };
            Some(
                Bar::default()
                    .value(magnitude)
                    .label(Line::from(row.result().symbol().clone()))
                    .text_value(format!("{}{:.2}%", sign, percent))
                    .style(Style::default().fg(gain_color(percent))),
            )
        })
        .collect()
}

fn render_bar_chart(frame: &mut Frame, report: &DashboardReport, area: Rect) {
    let bars = percent_bars(report);
    if bars.is_empty() {
        render_unavailable(frame, "bar chart", area);
        return;
    }

    let chart = BarChart::default()
        .block(
            Block::default()
                .title("Percentage Change Over Comparison Interval")
                .borders(Borders::ALL),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(2);

    frame.render_widget(chart, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}

fn render_message_popup(
    frame: &mut Frame,
    message: &str,
    color: Color,
    title: &str,
    dismissible: bool,
) {
    let area = centered_rect(60, 5, frame.area());
    let mut lines = vec![Line::from(Span::styled(message, Style::default().fg(color)))];
    if dismissible {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Enter/Esc to dismiss",
            Style::default().fg(Color::DarkGray),
        )));
    }
    let popup = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(title).borders(Borders::ALL));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn render_api_popup(frame: &mut Frame, app: &mut App) {
    let count = ApiProvider::iter().len() as u16;
    let area = centered_rect(50, count + 2, frame.area());

    let items: Vec<ListItem> = ApiProvider::iter()
        .map(|api| {
            let missing_key = api
                .api_key_var()
                .is_some_and(|var| std::env::var(var).is_err());
            let label = if missing_key {
                format!("{} (API key missing)", api.to_str())
            } else {
                api.to_str().to_string()
            };
            ListItem::new(label)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title("Price Provider")
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut app.default_api_state);
}
