//! Presentation-agnostic controller shared by the TUI and the CLI.
//!
//! A `Session` owns the registry and the random source, holds the raw text
//! typed into the id field, and turns each user action into a [`ViewState`]
//! that a front-end only has to draw.

use tracing::info;

use crate::domain::YieldOutcome;
use crate::registry::Registry;
use crate::report::{format_age, format_liters, format_teats, format_yield};
use crate::rules::{RandomSource, compute_yield, is_valid_id, maybe_lose_teat, maybe_regrow_teat};

pub const MSG_INVALID_ID: &str = "Invalid ID. Must be 8 digits and not start with 0.";
pub const MSG_GOAT_FOUND: &str = "This is a goat! You can kick it back to the mountain.";
pub const MSG_CANNOT_YIELD: &str = "Cannot yield milk. Ensure the cow has 4 teats.";
pub const MSG_CANNOT_KICK: &str = "Cannot kick back. Only goats can be kicked back to the mountain.";
pub const MSG_PROMPT: &str = "Enter an 8-digit animal ID and press Enter.";

/// The single action button that may be visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    YieldMilk,
    KickBack,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::YieldMilk => "Yield milk",
            Action::KickBack => "Kick back to the mountain",
        }
    }
}

/// Display strings for the details panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Details {
    pub id: String,
    pub age: String,
    pub teats: String,
    pub milk: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub message: String,
    /// `None` while the details panel is hidden.
    pub details: Option<Details>,
    pub action: Option<Action>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            message: MSG_PROMPT.to_string(),
            details: None,
            action: None,
        }
    }
}

pub struct Session {
    registry: Registry,
    rng: Box<dyn RandomSource>,
    input: String,
    view: ViewState,
}

impl Session {
    pub fn new(registry: Registry, rng: Box<dyn RandomSource>) -> Self {
        Self {
            registry,
            rng,
            input: String::new(),
            view: ViewState::default(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, raw: impl Into<String>) {
        self.input = raw.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Look up the animal named by the input and show what can be done with it.
    pub fn check(&mut self) -> &ViewState {
        let id = self.input.clone();

        if !is_valid_id(&id) {
            // Panel and buttons keep whatever they showed before.
            self.view.message = MSG_INVALID_ID.to_string();
            return &self.view;
        }

        let Some(record) = self.registry.find_by_id(&id) else {
            self.view = ViewState {
                message: format!("No cow or goat found with ID: {id}"),
                details: None,
                action: None,
            };
            self.input.clear();
            return &self.view;
        };

        let outcome = compute_yield(record);
        let details = Details {
            id: record.id().to_string(),
            age: format_age(record),
            teats: format_teats(record),
            milk: format_yield(outcome),
        };

        self.view = match outcome {
            YieldOutcome::NotApplicableGoat => ViewState {
                message: MSG_GOAT_FOUND.to_string(),
                details: Some(details),
                action: Some(Action::KickBack),
            },
            YieldOutcome::Value(_) => ViewState {
                message: format!("Cow with ID {id} found."),
                details: Some(details),
                action: Some(Action::YieldMilk),
            },
            YieldOutcome::NotMilkable => {
                // Regrowth is silent: the panel still shows the 3-teat cow.
                maybe_regrow_teat(&mut self.registry, &id, self.rng.as_mut());
                ViewState {
                    message: format!("Cow with ID {id} has 3 teats. Cannot be milked."),
                    details: Some(details),
                    action: None,
                }
            }
        };
        &self.view
    }

    /// Milk the cow named by the input. Ends the interaction either way.
    pub fn yield_milk(&mut self) -> &ViewState {
        let id = self.input.clone();
        let outcome = self.registry.find_by_id(&id).map(compute_yield);

        let message = match outcome {
            Some(YieldOutcome::Value(liters)) => {
                info!(id = %id, liters, "milk yielded");
                if maybe_lose_teat(&mut self.registry, &id, self.rng.as_mut()) {
                    format!("Oops! Cow with ID {id} lost a teat. Now has 3 teats.")
                } else {
                    format!("Milk yielded: {}.", format_liters(liters))
                }
            }
            _ => MSG_CANNOT_YIELD.to_string(),
        };

        self.finish(message);
        &self.view
    }

    /// Send the goat named by the input back to the mountain.
    pub fn kick_back(&mut self) -> &ViewState {
        let id = self.input.clone();
        let is_goat = self.registry.find_by_id(&id).is_some_and(|r| r.is_goat());

        let message = if is_goat {
            info!(id = %id, "goat kicked back");
            format!("Goat with ID {id} has been kicked back to the mountain.")
        } else {
            MSG_CANNOT_KICK.to_string()
        };

        self.finish(message);
        &self.view
    }

    fn finish(&mut self, message: String) {
        self.input.clear();
        self.view = ViewState {
            message,
            details: None,
            action: None,
        };
    }
}
