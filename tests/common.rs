use async_trait::async_trait;
use aura_console::scare::Effect;
use aura_console::{
    Catalog, Confirm, Display, LlmClient, LlmError, Locale, RandomSource, ScareKind,
    SessionController, StyleHint,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Everything the controller pushed to the screen, in order
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum Shown {
    User(String),
    Assistant(String, StyleHint),
    Effect(ScareKind, Effect),
    Status(String),
    Ending(String, String),
}

#[derive(Default)]
pub struct RecordingDisplay {
    shown: Mutex<Vec<Shown>>,
}

#[allow(dead_code)]
impl RecordingDisplay {
    pub fn shown(&self) -> Vec<Shown> {
        self.shown.lock().unwrap().clone()
    }

    pub fn assistant_lines(&self) -> Vec<(String, StyleHint)> {
        self.shown()
            .into_iter()
            .filter_map(|item| match item {
                Shown::Assistant(text, style) => Some((text, style)),
                _ => None,
            })
            .collect()
    }

    pub fn effects(&self) -> Vec<(ScareKind, Effect)> {
        self.shown()
            .into_iter()
            .filter_map(|item| match item {
                Shown::Effect(kind, effect) => Some((kind, effect)),
                _ => None,
            })
            .collect()
    }

    pub fn statuses(&self) -> Vec<String> {
        self.shown()
            .into_iter()
            .filter_map(|item| match item {
                Shown::Status(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn last_assistant(&self) -> Option<(String, StyleHint)> {
        self.assistant_lines().pop()
    }

    fn push(&self, item: Shown) {
        self.shown.lock().unwrap().push(item);
    }
}

impl Display for RecordingDisplay {
    fn show_user_message(&self, text: &str) {
        self.push(Shown::User(text.to_string()));
    }

    fn show_assistant_message(&self, text: &str, style: StyleHint) {
        self.push(Shown::Assistant(text.to_string(), style));
    }

    fn run_scare_effect(&self, kind: ScareKind, effect: &Effect) {
        self.push(Shown::Effect(kind, effect.clone()));
    }

    fn show_status(&self, text: &str) {
        self.push(Shown::Status(text.to_string()));
    }

    fn show_ending(&self, title: &str, message: &str) {
        self.push(Shown::Ending(title.to_string(), message.to_string()));
    }
}

/// Replies from a queue, falling back to echoing the input
#[derive(Default)]
pub struct ScriptedLlm {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    calls: Mutex<Vec<(String, String)>>,
    delay: Mutex<Duration>,
}

#[allow(dead_code)]
impl ScriptedLlm {
    pub fn push_reply(&self, reply: Result<String, LlmError>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = delay;
    }

    /// (system instruction, user text) of every call so far
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for ScriptedLlm {
    async fn complete(
        &self,
        system_instruction: &str,
        user_text: &str,
        _locale: Locale,
    ) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((system_instruction.to_string(), user_text.to_string()));
        let delay = *self.delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        let queued = self.replies.lock().unwrap().pop_front();
        queued.unwrap_or_else(|| Ok(format!("reply to '{}'", user_text)))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Answers the format dialog from a queue; confirms once the queue is empty
#[derive(Default)]
pub struct ScriptedConfirm {
    answers: Mutex<VecDeque<bool>>,
    asked: Mutex<u32>,
}

#[allow(dead_code)]
impl ScriptedConfirm {
    pub fn push_answer(&self, answer: bool) {
        self.answers.lock().unwrap().push_back(answer);
    }

    pub fn times_asked(&self) -> u32 {
        *self.asked.lock().unwrap()
    }
}

#[async_trait]
impl Confirm for ScriptedConfirm {
    async fn format_warning(&self, _title: &str, _message: &str) -> bool {
        *self.asked.lock().unwrap() += 1;
        self.answers.lock().unwrap().pop_front().unwrap_or(true)
    }
}

/// Always picks the first exclamation and never flashes
pub struct FirstChoice;

impl RandomSource for FirstChoice {
    fn pick(&mut self, _len: usize) -> usize {
        0
    }

    fn chance(&mut self, _probability: f64) -> bool {
        false
    }
}

pub struct Harness {
    pub console: SessionController,
    pub display: Arc<RecordingDisplay>,
    pub llm: Arc<ScriptedLlm>,
    pub confirm: Arc<ScriptedConfirm>,
}

#[allow(dead_code)]
pub fn harness(locale: Locale) -> Harness {
    init_logging();
    let display = Arc::new(RecordingDisplay::default());
    let llm = Arc::new(ScriptedLlm::default());
    let confirm = Arc::new(ScriptedConfirm::default());
    let console = SessionController::new(
        locale,
        Arc::new(Catalog::builtin(locale)),
        llm.clone(),
        display.clone(),
        confirm.clone(),
    )
    .with_random_source(FirstChoice);
    Harness {
        console,
        display,
        llm,
        confirm,
    }
}

/// Plays the story up to the hostile phase
#[allow(dead_code)]
pub async fn reach_hostile(console: &SessionController) {
    reach_all_permissions(console).await;
    console.submit("and now?").await;
    console.submit("are you there?").await;
    console.submit("hello?").await;
}

#[allow(dead_code)]
pub async fn reach_all_permissions(console: &SessionController) {
    console.submit("hi").await;
    console.submit("hello").await;
    console.submit("what is going on").await;
    console.submit("what is the solar flare status?").await;
    console.toggle_network().await.unwrap();
    console.submit("simulate the grid").await;
    console.toggle_compute().await.unwrap();
}
