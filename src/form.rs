//! Editable simulation inputs.
//!
//! Every field is kept as the text the user typed and only parsed when a run
//! is requested. Outcome rows carry a generated id so they can be edited and
//! removed without relying on their position.

use crate::constants::{DEFAULT_BET_COUNT, DEFAULT_START_BALANCE, DEFAULT_WAGER};
use crate::distribution::{Distribution, Outcome};
use crate::error::{BetsimError, Result};
use crate::simulation::BetParams;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeRow {
    pub id: u64,
    pub reward: String,
    pub probability: String,
}

/// A focusable form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    StartBalance,
    Wager,
    BetCount,
    AllowBroke,
    Reward(u64),
    Probability(u64),
}

#[derive(Debug, Clone)]
pub struct SimulationForm {
    pub start_balance: String,
    pub wager: String,
    pub bet_count: String,
    pub allow_broke: bool,
    outcomes: Vec<OutcomeRow>,
    next_id: u64,
    focus: FormField,
}

impl Default for SimulationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationForm {
    /// Default inputs with one empty outcome row.
    pub fn new() -> Self {
        let mut form = Self {
            start_balance: DEFAULT_START_BALANCE.to_string(),
            wager: DEFAULT_WAGER.to_string(),
            bet_count: DEFAULT_BET_COUNT.to_string(),
            allow_broke: false,
            outcomes: Vec::new(),
            next_id: 0,
            focus: FormField::StartBalance,
        };
        form.add_outcome();
        form.focus = FormField::StartBalance;
        form
    }

    pub fn outcomes(&self) -> &[OutcomeRow] {
        &self.outcomes
    }

    pub fn outcome_mut(&mut self, id: u64) -> Option<&mut OutcomeRow> {
        self.outcomes.iter_mut().find(|row| row.id == id)
    }

    /// Adds an empty row, focuses its reward field and returns its id.
    pub fn add_outcome(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.outcomes.push(OutcomeRow {
            id,
            reward: String::new(),
            probability: String::new(),
        });
        self.focus = FormField::Reward(id);
        id
    }

    /// Removes the row with `id`. Unknown ids are ignored.
    pub fn remove_outcome(&mut self, id: u64) {
        let fields = self.fields();
        let focus_idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);

        self.outcomes.retain(|row| row.id != id);

        if matches!(self.focus, FormField::Reward(f) | FormField::Probability(f) if f == id) {
            // Step back to the nearest field that still exists
            let remaining = self.fields();
            self.focus = fields[..focus_idx]
                .iter()
                .rev()
                .find(|f| remaining.contains(f))
                .copied()
                .unwrap_or(FormField::StartBalance);
        }
    }

    /// Removes the row holding the focused field, if any.
    pub fn remove_focused_outcome(&mut self) {
        if let FormField::Reward(id) | FormField::Probability(id) = self.focus {
            self.remove_outcome(id);
        }
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    /// All focusable fields in display order.
    pub fn fields(&self) -> Vec<FormField> {
        let mut fields = vec![
            FormField::StartBalance,
            FormField::Wager,
            FormField::BetCount,
            FormField::AllowBroke,
        ];
        for row in &self.outcomes {
            fields.push(FormField::Reward(row.id));
            fields.push(FormField::Probability(row.id));
        }
        fields
    }

    pub fn focus_next(&mut self) {
        let fields = self.fields();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(idx + 1) % fields.len()];
    }

    pub fn focus_prev(&mut self) {
        let fields = self.fields();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(idx + fields.len() - 1) % fields.len()];
    }

    pub fn toggle_allow_broke(&mut self) {
        self.allow_broke = !self.allow_broke;
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::StartBalance => Some(&mut self.start_balance),
            FormField::Wager => Some(&mut self.wager),
            FormField::BetCount => Some(&mut self.bet_count),
            FormField::AllowBroke => None,
            FormField::Reward(id) => self.outcome_mut(id).map(|row| &mut row.reward),
            FormField::Probability(id) => self.outcome_mut(id).map(|row| &mut row.probability),
        }
    }

    /// Types a character into the focused field. Only characters that can
    /// appear in a number are accepted.
    pub fn handle_char_input(&mut self, c: char) {
        if !(c.is_ascii_digit() || c == '-' || c == '.') {
            return;
        }
        if let Some(text) = self.focused_text_mut() {
            text.push(c);
        }
    }

    pub fn handle_backspace(&mut self) {
        if let Some(text) = self.focused_text_mut() {
            text.pop();
        }
    }

    /// Parses the form into run parameters and a distribution. The
    /// distribution is not validated here.
    pub fn parse(&self) -> Result<(BetParams, Distribution)> {
        let start_balance = parse_whole("Starting balance", &self.start_balance)?;
        let wager = parse_whole("Wager", &self.wager)?;
        let bet_count = self.bet_count.trim().parse::<u32>().map_err(|_| {
            BetsimError::invalid_input("Number of bets", "a non-negative whole number", &self.bet_count)
        })?;

        let mut outcomes = Vec::with_capacity(self.outcomes.len());
        for (i, row) in self.outcomes.iter().enumerate() {
            let value = parse_whole(&format!("Reward in row {}", i + 1), &row.reward)?;
            let probability = row.probability.trim().parse::<f64>().map_err(|_| {
                BetsimError::invalid_input(
                    &format!("Probability in row {}", i + 1),
                    "a number",
                    &row.probability,
                )
            })?;
            outcomes.push(Outcome::new(value, probability));
        }

        let params = BetParams {
            start_balance,
            wager,
            bet_count,
            allow_broke: self.allow_broke,
        };
        Ok((params, Distribution::new(outcomes)))
    }
}

fn parse_whole(field: &str, text: &str) -> Result<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| BetsimError::invalid_input(field, "a whole number", text))
}
