use betsim::chart::{bounds, series};
use betsim::graph::Graph;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

const LINE_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::LightRed,
    Color::LightBlue,
];

pub fn draw_chart_panel(f: &mut Frame, area: Rect, graph: Option<&Graph>) {
    let Some(graph) = graph else {
        let hint = Paragraph::new("No graph selected.\n\n[^N] New graph    [^L] Load from list")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Balance Change Over Time "),
            );
        f.render_widget(hint, area);
        return;
    };

    let all_series = series(graph);
    let b = bounds(graph);

    // Dotted zero line, one point every other bet
    let zero_line: Vec<(f64, f64)> = (0..=b.x[1] as usize)
        .step_by(2)
        .map(|x| (x as f64, 0.0))
        .collect();

    let mut datasets = vec![Dataset::default()
        .marker(symbols::Marker::Dot)
        .graph_type(GraphType::Scatter)
        .style(Style::default().fg(Color::DarkGray))
        .data(&zero_line)];

    for (i, s) in all_series.iter().enumerate() {
        datasets.push(
            Dataset::default()
                .name(s.name.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(LINE_COLORS[i % LINE_COLORS.len()]))
                .data(&s.points),
        );
    }

    let label_style = Style::default().fg(Color::Gray);
    let x_labels = vec![
        Span::styled("0", label_style),
        Span::styled(format!("{}", b.x[1] as i64), label_style),
    ];
    let y_labels = vec![
        Span::styled(format!("{}", b.y[0] as i64), label_style),
        Span::styled(format!("{}", ((b.y[0] + b.y[1]) / 2.0) as i64), label_style),
        Span::styled(format!("{}", b.y[1] as i64), label_style),
    ];

    let title = format!(" {} ({} runs) ", graph.name, graph.run_count());
    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    title,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
        )
        .x_axis(
            Axis::default()
                .title("Number of Bets")
                .style(label_style)
                .bounds(b.x)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Balance")
                .style(label_style)
                .bounds(b.y)
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}
