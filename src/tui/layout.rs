//! Viewer layout and figure drawing.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Widget};

use super::runtime::App;
use super::style;
use crate::render::{Alignment, Figure};

/// Draws a figure as a bordered line chart.
impl Widget for &Figure {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let x_bounds = self.axes.x_bounds();
        let y_bounds = self.axes.y_bounds();

        let grid = if self.axes.grid {
            style::grid_lines(x_bounds, y_bounds)
        } else {
            Vec::new()
        };

        // Grid first so the series draw over it; unnamed datasets stay out of the legend.
        let mut datasets: Vec<Dataset<'_>> = grid
            .iter()
            .map(|segment| {
                Dataset::default()
                    .marker(symbols::Marker::Dot)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(style::GRID_COLOR))
                    .data(segment)
            })
            .collect();

        datasets.extend(self.axes.series.iter().map(|series| {
            Dataset::default()
                .name(series.label.as_str())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(style::series_color(series.color)))
                .data(&series.points)
        }));

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title(format!(" {} ", self.title))
                    .borders(Borders::ALL),
            )
            .legend_position(Some(style::legend_position(self.axes.legend_position)))
            .x_axis(
                Axis::default()
                    .title(self.axes.x_label.as_str())
                    .bounds(x_bounds)
                    .labels(vec![
                        format!("{}", x_bounds[0]),
                        format!("{}", x_bounds[1]),
                    ]),
            )
            .y_axis(
                Axis::default()
                    .title(self.axes.y_label.as_str())
                    .bounds(y_bounds)
                    .labels(vec![
                        format!("{:.1}", y_bounds[0]),
                        format!("{:.1}", y_bounds[1]),
                    ]),
            );

        chart.render(area, buf);
    }
}

/// Renders the full viewer frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(10),   // chart
            Constraint::Length(3), // status panel
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    let figure = app.figure();
    frame.render_widget(&figure, chunks[1]);
    render_status(frame, app, chunks[2]);
    render_footer(frame, chunks[3]);
}

/// Header bar: mode, horizon and displayed window.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mode = match app.request.alignment {
        Alignment::TimeAligned => "TIME-ALIGNED",
        Alignment::Overlap => "OVERLAP",
    };
    let (begin, end) = app.window();

    let header = Line::from(vec![
        Span::styled(
            " FORECAST-COMPARE ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(mode, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!(
            " │ horizon={} │ window=[{begin}, {end}) of {} ",
            app.aligner().horizon(),
            app.aligner().len(),
        )),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Common-view summary for the whole series.
fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let view = app.aligner().common_points();
    let line = if view.is_exact_match() {
        Line::from(Span::styled(
            format!("  common points={}  forecast matches actual", view.len()),
            Style::default().fg(style::MATCH_COLOR),
        ))
    } else {
        Line::from(format!("  common points={}", view.len()))
    };

    let block = Block::default().title(" Common view ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Quit  o:Overlap  ←/→:Pan  +/-:Zoom  r:Reset",
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}
