use chrono::{NaiveTime, Timelike};
use std::sync::Arc;

use crate::traits::Translate;

/// Replaces each `{name}` placeholder in `template`
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    values.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{}}}", name), value)
    })
}

/// Single-text form of a turn for backends without a separate system field
pub fn compose_turn(system_instruction: &str, user_text: &str) -> String {
    format!("{}\n\nUser: \"{}\"", system_instruction, user_text)
}

/// Coarse part of the day used by the opening greeting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    LateNight,
}

impl TimeOfDay {
    /// Morning 05–12, afternoon 12–17, evening 17–22, late night otherwise
    pub fn at(time: NaiveTime) -> Self {
        match time.hour() {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=21 => TimeOfDay::Evening,
            _ => TimeOfDay::LateNight,
        }
    }

    fn greeting_key(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "GREETING_MORNING",
            TimeOfDay::Afternoon => "GREETING_AFTERNOON",
            TimeOfDay::Evening => "GREETING_EVENING",
            TimeOfDay::LateNight => "GREETING_LATE_NIGHT",
        }
    }
}

/// Resolves localized lines and assembles model instructions
#[derive(Clone)]
pub struct PromptBuilder {
    catalog: Arc<dyn Translate>,
}

impl PromptBuilder {
    pub fn new(catalog: Arc<dyn Translate>) -> Self {
        Self { catalog }
    }

    pub fn line(&self, key: &str) -> String {
        self.catalog.translate(key)
    }

    pub fn line_with(&self, key: &str, values: &[(&str, &str)]) -> String {
        fill(&self.catalog.translate(key), values)
    }

    /// A system instruction with the reply-language suffix appended
    pub fn system_instruction(&self, key: &str) -> String {
        format!("{}{}", self.line(key), self.line("RESPOND_LANG"))
    }

    /// A system instruction that quotes the prompt it refers to
    pub fn system_instruction_about(&self, key: &str, prompt: &str) -> String {
        format!(
            "{}{}",
            self.line_with(key, &[("prompt", prompt)]),
            self.line("RESPOND_LANG")
        )
    }

    /// The model input sent when a permission was just granted
    pub fn confirmation_input(&self, key: &str, subject: &str) -> String {
        self.line_with(key, &[("prompt", subject)])
    }

    /// The opening line, which depends on the local time
    pub fn greeting(&self, now: NaiveTime) -> String {
        let greeting = self.line(TimeOfDay::at(now).greeting_key());
        self.line_with("AURA_GREETING", &[("greeting", &greeting)])
    }

    pub fn connection_error(&self, detail: &str) -> String {
        self.line_with("CONN_ERROR", &[("e", detail)])
    }
}
