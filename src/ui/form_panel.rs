use betsim::form::{FormField, SimulationForm};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn field_style(focused: bool, active: bool) -> Style {
    if focused && active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    }
}

fn text_value(text: &str, focused: bool, active: bool) -> Span<'static> {
    let shown = if focused && active {
        format!("{}_", text)
    } else if text.is_empty() {
        "·".to_string()
    } else {
        text.to_string()
    };
    Span::styled(shown, field_style(focused, active))
}

/// Draws the simulation inputs. `active` is false while another panel has
/// keyboard focus, so the cursor is hidden.
pub fn draw_form_panel(f: &mut Frame, area: Rect, form: &SimulationForm, active: bool) {
    let focus = form.focus();
    let label = Style::default().fg(Color::Gray);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Starting Balance: ", label),
            text_value(&form.start_balance, focus == FormField::StartBalance, active),
        ]),
        Line::from(vec![
            Span::styled("Wager:            ", label),
            text_value(&form.wager, focus == FormField::Wager, active),
        ]),
        Line::from(vec![
            Span::styled("Number of Bets:   ", label),
            text_value(&form.bet_count, focus == FormField::BetCount, active),
        ]),
        Line::from(vec![
            Span::styled("Allow Broke:      ", label),
            Span::styled(
                if form.allow_broke { "[x]" } else { "[ ]" },
                field_style(focus == FormField::AllowBroke, active),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Outcomes (reward / probability):",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    if form.outcomes().is_empty() {
        lines.push(Line::from(Span::styled(
            "  none - [^A] to add",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (i, row) in form.outcomes().iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>2}. ", i + 1), label),
            text_value(&row.reward, focus == FormField::Reward(row.id), active),
            Span::styled(" / ", label),
            text_value(
                &row.probability,
                focus == FormField::Probability(row.id),
                active,
            ),
        ]));
    }

    let border = if active { Color::Cyan } else { Color::DarkGray };
    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" Simulation "),
    );
    f.render_widget(panel, area);
}
