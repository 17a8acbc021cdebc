pub mod chart_panel;
pub mod form_panel;
pub mod graph_list;
pub mod name_prompt;

use crate::input::{Panel, UiState};
use betsim::app::{App, StatusMessage};
use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Main UI drawing function
pub fn draw_ui<R: Rng>(frame: &mut Frame, app: &App<R>, ui: &UiState) {
    let size = frame.size();

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Footer
        ])
        .split(size);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(38), // Form
            Constraint::Min(20),    // Chart
            Constraint::Length(24), // Graph list
        ])
        .split(v_chunks[0]);

    let overlay_open = ui.name_prompt.is_some() || app.message.is_some();

    form_panel::draw_form_panel(
        frame,
        chunks[0],
        &app.form,
        ui.panel == Panel::Form && !overlay_open,
    );
    chart_panel::draw_chart_panel(frame, chunks[1], app.selected_graph());
    ui.graph_list.draw(
        frame,
        chunks[2],
        app.store.list_graph_names(),
        app.store.selection().name(),
        ui.panel == Panel::GraphList && !overlay_open,
    );

    draw_footer(frame, v_chunks[1], ui.panel);

    if let Some(prompt) = &ui.name_prompt {
        prompt.draw(frame);
    }

    // Errors draw last so they sit above everything else
    if let Some(message) = &app.message {
        draw_message(frame, message);
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, panel: Panel) {
    let keys = match panel {
        Panel::Form => {
            "[Tab] Next  [^R/Enter] Run  [^A] Add outcome  [^D] Remove outcome  [^N] New graph  [^G] Graphs  [^Q] Quit"
        }
        Panel::GraphList => "[↑/↓] Choose  [Enter/^L] Load  [^N] New graph  [^G/Esc] Back  [^Q] Quit",
    };
    let footer = Paragraph::new(keys)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn draw_message(frame: &mut Frame, message: &StatusMessage) {
    let size = frame.size();
    let width = 56.min(size.width.saturating_sub(4));
    let height = 8.min(size.height.saturating_sub(2));
    let x = (size.width.saturating_sub(width)) / 2;
    let y = (size.height.saturating_sub(height)) / 2;
    let area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(message.body.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter/Esc] OK",
            Style::default().fg(Color::Gray),
        )),
    ];

    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(Span::styled(
                    format!(" {} ", message.title),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
        );
    frame.render_widget(popup, area);
}
