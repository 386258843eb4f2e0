use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ts_scaffold::Question;

#[derive(Debug, PartialEq)]
pub enum InputMode {
    Editing,
    Confirm,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ConfirmAction {
    Yes,
    No,
}

#[derive(Debug, PartialEq)]
pub enum Outcome {
    Pending,
    Submitted,
    Cancelled,
}

/// State of the single question currently on screen.
pub struct App {
    /// Question text shown above the input.
    pub message: String,
    /// Value used when the input is submitted blank.
    pub default: Option<String>,
    /// Current input string.
    pub input: String,
    /// Text entry or yes/no.
    pub input_mode: InputMode,
    /// Validation message from the previous attempt.
    pub error: Option<String>,
    /// Currently selected answer in the confirm modal.
    pub confirm_action: ConfirmAction,
    pub outcome: Outcome,
}

impl App {
    pub fn ask(question: &Question) -> Self {
        Self {
            message: question.message.to_string(),
            default: question.default.clone(),
            input: String::new(),
            input_mode: InputMode::Editing,
            error: question.error.clone(),
            confirm_action: ConfirmAction::Yes,
            outcome: Outcome::Pending,
        }
    }

    pub fn confirm(message: &str, default: bool) -> Self {
        Self {
            message: message.to_string(),
            default: None,
            input: String::new(),
            input_mode: InputMode::Confirm,
            error: None,
            confirm_action: if default {
                ConfirmAction::Yes
            } else {
                ConfirmAction::No
            },
            outcome: Outcome::Pending,
        }
    }

    pub fn is_done(&self) -> bool {
        self.outcome != Outcome::Pending
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.outcome = Outcome::Cancelled;
            return;
        }

        match self.input_mode {
            InputMode::Editing => match key.code {
                KeyCode::Char(c) => {
                    self.error = None;
                    self.input.push(c);
                }
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Tab if self.input.is_empty() => {
                    if let Some(default) = &self.default {
                        self.input = default.clone();
                    }
                }
                KeyCode::Enter => self.outcome = Outcome::Submitted,
                _ => {}
            },
            InputMode::Confirm => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Left => {
                    self.confirm_action = ConfirmAction::Yes;
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Right => {
                    self.confirm_action = ConfirmAction::No;
                }
                KeyCode::Enter => self.outcome = Outcome::Submitted,
                _ => {}
            },
        }
    }

    /// The typed answer, falling back to the default for blank input.
    pub fn answer(&self) -> String {
        if self.input.trim().is_empty() {
            self.default.clone().unwrap_or_default()
        } else {
            self.input.clone()
        }
    }

    pub fn confirmed(&self) -> bool {
        self.confirm_action == ConfirmAction::Yes
    }
}
