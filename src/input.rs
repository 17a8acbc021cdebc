//! Key handling for the main screen.
//!
//! Dispatches through a priority chain: open message, name prompt, global
//! shortcuts, then the focused panel.

use crate::ui::graph_list::GraphListState;
use crate::ui::name_prompt::NamePromptScreen;
use betsim::app::App;
use betsim::form::FormField;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;

/// Which panel receives plain keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Form,
    GraphList,
}

pub struct UiState {
    pub panel: Panel,
    pub graph_list: GraphListState,
    pub name_prompt: Option<NamePromptScreen>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            panel: Panel::Form,
            graph_list: GraphListState::new(),
            name_prompt: None,
        }
    }
}

pub enum InputResult {
    Continue,
    Quit,
}

fn ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

pub fn handle_key<R: Rng>(key: KeyEvent, app: &mut App<R>, ui: &mut UiState) -> InputResult {
    // 1. Error popup (blocks all other input)
    if app.message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_message();
        }
        return InputResult::Continue;
    }

    // 2. New graph prompt
    if ui.name_prompt.is_some() {
        handle_name_prompt(key, app, ui);
        return InputResult::Continue;
    }

    // 3. Global shortcuts
    if ctrl(&key, 'q') || ctrl(&key, 'c') {
        return InputResult::Quit;
    }
    if ctrl(&key, 'n') {
        ui.name_prompt = Some(NamePromptScreen::new());
        return InputResult::Continue;
    }
    if ctrl(&key, 'g') {
        ui.panel = match ui.panel {
            Panel::Form => Panel::GraphList,
            Panel::GraphList => Panel::Form,
        };
        return InputResult::Continue;
    }
    if ctrl(&key, 'r') {
        app.run_simulation();
        return InputResult::Continue;
    }
    if ctrl(&key, 'l') {
        load_cursor_graph(app, ui);
        return InputResult::Continue;
    }

    // 4. Focused panel
    match ui.panel {
        Panel::Form => handle_form(key, app),
        Panel::GraphList => handle_graph_list(key, app, ui),
    }
    InputResult::Continue
}

fn handle_name_prompt<R: Rng>(key: KeyEvent, app: &mut App<R>, ui: &mut UiState) {
    let Some(prompt) = ui.name_prompt.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Esc => ui.name_prompt = None,
        KeyCode::Enter => {
            if prompt.is_valid() {
                let name = prompt.get_name();
                if app.create_graph(&name) {
                    ui.name_prompt = None;
                    ui.graph_list
                        .select_name(app.store.list_graph_names(), &name);
                }
            }
        }
        KeyCode::Backspace => prompt.handle_backspace(),
        KeyCode::Left => prompt.move_cursor_left(),
        KeyCode::Right => prompt.move_cursor_right(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            prompt.handle_char_input(c)
        }
        _ => {}
    }
}

fn handle_form<R: Rng>(key: KeyEvent, app: &mut App<R>) {
    if ctrl(&key, 'a') {
        app.form.add_outcome();
        return;
    }
    if ctrl(&key, 'd') {
        app.form.remove_focused_outcome();
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => app.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.form.focus_prev(),
        KeyCode::Enter => {
            app.run_simulation();
        }
        KeyCode::Char(' ') if app.form.focus() == FormField::AllowBroke => {
            app.form.toggle_allow_broke()
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form.handle_char_input(c)
        }
        KeyCode::Backspace => app.form.handle_backspace(),
        _ => {}
    }
}

fn handle_graph_list<R: Rng>(key: KeyEvent, app: &mut App<R>, ui: &mut UiState) {
    let len = app.store.list_graph_names().len();
    match key.code {
        KeyCode::Up => ui.graph_list.move_up(),
        KeyCode::Down => ui.graph_list.move_down(len),
        KeyCode::Enter => load_cursor_graph(app, ui),
        KeyCode::Esc => ui.panel = Panel::Form,
        _ => {}
    }
}

fn load_cursor_graph<R: Rng>(app: &mut App<R>, ui: &mut UiState) {
    let names = app.store.list_graph_names();
    ui.graph_list.clamp(names.len());
    if let Some(name) = ui.graph_list.current(names).map(str::to_string) {
        if app.load_graph(&name) {
            ui.panel = Panel::Form;
        }
    }
}
