use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Cursor over the sidebar list of graph names.
pub struct GraphListState {
    pub selected_index: usize,
}

impl GraphListState {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.selected_index + 1 < len {
            self.selected_index += 1;
        }
    }

    /// Keeps the cursor inside a list that may have shrunk or grown.
    pub fn clamp(&mut self, len: usize) {
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    /// Points the cursor at `name` if it is in the list.
    pub fn select_name(&mut self, names: &[String], name: &str) {
        if let Some(idx) = names.iter().position(|n| n == name) {
            self.selected_index = idx;
        }
    }

    pub fn current<'a>(&self, names: &'a [String]) -> Option<&'a str> {
        names.get(self.selected_index).map(String::as_str)
    }

    pub fn draw(
        &self,
        f: &mut Frame,
        area: Rect,
        names: &[String],
        loaded: Option<&str>,
        active: bool,
    ) {
        let mut lines = Vec::new();

        if names.is_empty() {
            lines.push(Line::from(Span::styled(
                "No saved graphs",
                Style::default().fg(Color::DarkGray),
            )));
        }

        for (i, name) in names.iter().enumerate() {
            let is_cursor = active && i == self.selected_index;
            let is_loaded = loaded == Some(name.as_str());

            let prefix = if is_cursor { "> " } else { "  " };
            let mut style = if is_loaded {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            if is_cursor {
                style = style.bg(Color::DarkGray);
            }

            lines.push(Line::from(Span::styled(format!("{}{}", prefix, name), style)));
        }

        let border = if active { Color::Cyan } else { Color::DarkGray };
        let list = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(" Graphs "),
        );
        f.render_widget(list, area);
    }
}
