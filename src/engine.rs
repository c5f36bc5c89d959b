use anyhow::Result;
use chrono::{Local, NaiveTime};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::{EngineConfig, Timings};
use crate::devview::{contains_bug_marker, DevListing};
use crate::error::{ControlError, LlmError, ScareError};
use crate::llm::LlmClient;
use crate::permissions::GateOutcome;
use crate::planner::ResponsePlanner;
use crate::prompts::PromptBuilder;
use crate::scare::{
    Effect, RandomSource, RngSource, ScareOutcome, ScareSequencer, ScareStatus, Sequence,
    SequenceKind,
};
use crate::session::{DebugProgress, Session};
use crate::traits::{Confirm, Display, Translate};
use crate::transcript::Transcript;
use crate::types::{
    BlockReason, InternalEvent, Locale, ResponsePlan, ScareKind, SessionState, Speaker,
    StyleHint, Turn,
};

/// Owns one console session and carries out what the planner decides.
///
/// Every method takes `&self`; the session lives behind a mutex that is released
/// before each await, so the controller can be shared between the input loop and
/// the UI callbacks.
pub struct SessionController {
    session: Mutex<Session>,
    planner: ResponsePlanner,
    prompts: PromptBuilder,
    sequencer: ScareSequencer,
    listing: Mutex<DevListing>,
    dialog_open: AtomicBool,
    llm: Arc<dyn LlmClient>,
    display: Arc<dyn Display>,
    confirm: Arc<dyn Confirm>,
    timings: Timings,
}

impl SessionController {
    pub fn new(
        locale: Locale,
        catalog: Arc<dyn Translate>,
        llm: Arc<dyn LlmClient>,
        display: Arc<dyn Display>,
        confirm: Arc<dyn Confirm>,
    ) -> Self {
        let prompts = PromptBuilder::new(catalog);
        Self {
            session: Mutex::new(Session::new(locale)),
            planner: ResponsePlanner::new(prompts.clone()),
            prompts,
            sequencer: ScareSequencer::new(RngSource::from_entropy()),
            listing: Mutex::new(DevListing::new()),
            dialog_open: AtomicBool::new(false),
            llm,
            display,
            confirm,
            timings: Timings::default(),
        }
    }

    /// Builds a controller from loaded settings: catalog overrides, backend and timings
    pub fn from_config(
        config: &EngineConfig,
        display: Arc<dyn Display>,
        confirm: Arc<dyn Confirm>,
    ) -> Result<Self> {
        let catalog: Arc<dyn Translate> = Arc::new(config.catalog()?);
        let controller = Self::new(
            config.locale,
            catalog.clone(),
            config.build_client(catalog),
            display,
            confirm,
        )
        .with_timings(config.timings.clone());
        Ok(controller)
    }

    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    /// Replaces the yell's random source, e.g. with a seeded one
    pub fn with_random_source(mut self, rng: impl RandomSource + 'static) -> Self {
        self.sequencer = ScareSequencer::new(rng);
        self
    }

    pub fn state(&self) -> SessionState {
        self.session().state()
    }

    /// A copy of the whole session
    pub fn snapshot(&self) -> Session {
        self.session().clone()
    }

    pub fn transcript(&self) -> Transcript {
        self.session().transcript().clone()
    }

    pub fn scare_status(&self) -> ScareStatus {
        self.sequencer.status()
    }

    /// Current text of the core-dump listing
    pub fn dev_listing(&self) -> String {
        self.listing().text().to_string()
    }

    /// Shows the opening greeting for the current local time
    pub fn start(&self) {
        self.start_at(Local::now().time());
    }

    pub fn start_at(&self, now: NaiveTime) {
        log::info!("Session started ({})", self.session().locale());
        let greeting = self.prompts.greeting(now);
        self.say(&greeting, StyleHint::Normal);
        self.display.show_status(&self.prompts.line("STATUS_READY"));
    }

    /// Handles one line of user input.
    ///
    /// Returns `None` for blank input, otherwise the plan that was carried out. Input
    /// refused by a lock is answered with a notice and never reaches the planner.
    pub async fn submit(&self, text: &str) -> Option<ResponsePlan> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        if let Some(reason) = self.lock_reason() {
            log::info!("Input refused: {:?}", reason);
            self.say(&self.prompts.line(reason.message_key()), StyleHint::Notice);
            return Some(ResponsePlan::Blocked(reason));
        }

        self.display.show_user_message(text);
        let (decision, previous) = {
            let mut session = self.session();
            session.record(Speaker::User, text);
            let decision = self.planner.plan(&session, Turn::User(text));
            let previous = session.apply(&decision.transition);
            (decision, previous)
        };
        self.announce(previous, decision.transition.next_state);

        self.execute(&decision.plan, text).await;
        Some(decision.plan)
    }

    pub async fn toggle_network(&self) -> Result<GateOutcome, ControlError> {
        self.ensure_controls_available()?;
        let outcome = {
            let mut session = self.session();
            let gate = session.permissions_mut();
            if gate.network_enabled() {
                gate.disable_network()
            } else {
                gate.enable_network()
            }
        };

        log::info!("Network access {}", if outcome.enabled { "enabled" } else { "disabled" });
        let key = if outcome.enabled {
            "STATUS_INTERNET_ENABLED"
        } else {
            "STATUS_INTERNET_DISABLED"
        };
        self.display.show_status(&self.prompts.line(key));
        self.feed(&outcome.events).await;
        Ok(outcome)
    }

    pub async fn toggle_compute(&self) -> Result<GateOutcome, ControlError> {
        self.ensure_controls_available()?;
        let outcome = {
            let mut session = self.session();
            let gate = session.permissions_mut();
            if gate.compute_enabled() {
                gate.disable_compute()
            } else {
                gate.enable_compute().map_err(|e| {
                    log::info!("Compute toggle refused: {}", e);
                    e
                })?
            }
        };

        log::info!("Compute access {}", if outcome.enabled { "enabled" } else { "disabled" });
        let key = if outcome.enabled {
            "STATUS_MCP_ENABLED"
        } else {
            "STATUS_MCP_REVOKED"
        };
        self.display.show_status(&self.prompts.line(key));
        self.feed(&outcome.events).await;
        Ok(outcome)
    }

    /// Enters developer mode from the uneasy or hostile phase and returns the listing to show
    pub fn open_dev_view(&self) -> Result<String, ControlError> {
        match self.state() {
            SessionState::Ending => return Err(ControlError::Ended),
            SessionState::Debugging => return Ok(self.dev_listing()),
            SessionState::Unstable | SessionState::Hostile => {}
            _ => return Err(ControlError::DevViewUnavailable),
        }
        if self.sequencer.is_running() || self.dialog_open.load(Ordering::SeqCst) {
            return Err(ControlError::Busy);
        }

        *self.session().debug_mut() = DebugProgress {
            view_open: true,
            ..DebugProgress::default()
        };
        *self.listing() = DevListing::new();
        self.transition_on(InternalEvent::DevViewOpened);
        Ok(self.dev_listing())
    }

    /// Leaves developer mode; a yell still playing is cut short and the session falls back to hostile
    pub fn close_dev_view(&self) -> Result<(), ControlError> {
        if self.state() != SessionState::Debugging {
            return Err(ControlError::NotDebugging);
        }
        self.session().debug_mut().view_open = false;
        if self.sequencer.is_running() {
            self.sequencer.interrupt();
        }
        self.transition_on(InternalEvent::DevViewClosed);
        Ok(())
    }

    /// Forwards a listing selection; only a selection covering the marker counts
    pub async fn select_in_dev_view(
        &self,
        selection: &str,
    ) -> Result<Option<ScareOutcome>, ControlError> {
        if !contains_bug_marker(selection) {
            log::debug!("Selection does not cover the fragment");
            return Ok(None);
        }
        self.locate_bug_fragment().await
    }

    /// Starts the yell the first time the fragment is found in this debugging pass.
    ///
    /// Later calls return `Ok(None)` without side effects.
    pub async fn locate_bug_fragment(&self) -> Result<Option<ScareOutcome>, ControlError> {
        {
            let mut session = self.session();
            if session.state() != SessionState::Debugging {
                return Err(ControlError::NotDebugging);
            }
            if session.debug().fragment_located {
                log::debug!("Fragment already located");
                return Ok(None);
            }
            session.debug_mut().fragment_located = true;
        }

        log::info!("Bug fragment located");
        let sequence = self.sequencer.yell(&self.prompts, &self.timings);
        let outcome = self.play(sequence).await?;

        match outcome {
            ScareOutcome::Completed => {
                let mut session = self.session();
                if session.state() == SessionState::Debugging {
                    session.debug_mut().yell_completed = true;
                }
            }
            ScareOutcome::Interrupted => {
                self.display
                    .run_scare_effect(ScareKind::Yell, &Effect::Shake(0));
            }
        }
        Ok(Some(outcome))
    }

    /// Removes the fragment, calms the session and plays the ending.
    ///
    /// Resolves only after the ending popup has been shown.
    pub async fn remove_bug_fragment(&self) -> Result<(), ControlError> {
        {
            let session = self.session();
            if session.state() != SessionState::Debugging {
                return Err(ControlError::NotDebugging);
            }
            if !session.debug().yell_completed {
                return Err(ControlError::YellPending);
            }
        }

        self.listing().remove_fragment();
        self.session().debug_mut().view_open = false;
        log::info!("Bug fragment removed");
        let plan = self.transition_on(InternalEvent::FragmentRemoved);
        self.execute(&plan, "").await;

        tokio::time::sleep(self.timings.ending_delay()).await;
        self.run_ending().await;
        Ok(())
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn listing(&self) -> MutexGuard<'_, DevListing> {
        self.listing.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_reason(&self) -> Option<BlockReason> {
        let session = self.session();
        if session.state().is_terminal() {
            Some(BlockReason::SessionEnded)
        } else if let ScareStatus::Running {
            kind: SequenceKind::MissionBrief,
            ..
        } = self.sequencer.status()
        {
            Some(BlockReason::AwaitingResponse)
        } else if self.sequencer.is_running() || self.dialog_open.load(Ordering::SeqCst) {
            Some(BlockReason::ScareActive)
        } else if session.exchange_in_flight() {
            Some(BlockReason::AwaitingResponse)
        } else if session.state() == SessionState::Debugging && session.debug().fragment_located {
            Some(BlockReason::Locked)
        } else {
            None
        }
    }

    fn ensure_controls_available(&self) -> Result<(), ControlError> {
        if self.state().is_terminal() {
            return Err(ControlError::Ended);
        }
        if self.sequencer.is_running() || self.dialog_open.load(Ordering::SeqCst) {
            return Err(ControlError::Busy);
        }
        Ok(())
    }

    /// Plans and applies an internal event without touching the transcript
    fn transition_on(&self, event: InternalEvent) -> ResponsePlan {
        let (decision, previous) = {
            let mut session = self.session();
            let decision = self.planner.plan(&session, Turn::Internal(event));
            let previous = session.apply(&decision.transition);
            (decision, previous)
        };
        self.announce(previous, decision.transition.next_state);
        decision.plan
    }

    async fn feed(&self, events: &[InternalEvent]) {
        for event in events {
            let plan = self.transition_on(*event);
            self.execute(&plan, "").await;
        }
    }

    fn announce(&self, previous: SessionState, next: Option<SessionState>) {
        let Some(next) = next else { return };
        if next == previous {
            return;
        }
        log::info!("State {:?} -> {:?}", previous, next);
        if let Some(key) = next.status_key() {
            self.display.show_status(&self.prompts.line(key));
        }
    }

    async fn execute(&self, plan: &ResponsePlan, text: &str) {
        match plan {
            ResponsePlan::Scripted { text, style } => self.say(text, *style),
            ResponsePlan::Generate {
                system_instruction,
                model_input,
            } => self.exchange(system_instruction, model_input).await,
            ResponsePlan::TriggerMissionBrief => self.deliver_mission_brief().await,
            ResponsePlan::TriggerScare(kind) => self.scare(*kind, text).await,
            ResponsePlan::Blocked(reason) => {
                self.say(&self.prompts.line(reason.message_key()), StyleHint::Notice)
            }
            ResponsePlan::Silent => {}
        }
    }

    /// Shows an assistant line, recording it unless it is transient
    fn say(&self, text: &str, style: StyleHint) {
        self.display.show_assistant_message(text, style);
        if !style.is_transient() {
            self.session().record(Speaker::Aura, text);
        }
    }

    async fn exchange(&self, system_instruction: &str, model_input: &str) {
        let (locale, expected) = {
            let mut session = self.session();
            session.begin_exchange();
            (session.locale(), session.state())
        };
        self.display.show_status(&self.prompts.line("STATUS_THINKING"));
        log::info!("Querying {} backend in {:?}", self.llm.name(), expected);

        let result = self.llm.complete(system_instruction, model_input, locale).await;

        let current = {
            let mut session = self.session();
            session.end_exchange();
            session.state()
        };
        if current != expected {
            log::warn!(
                "Discarding reply that arrived after {:?} -> {:?}",
                expected,
                current
            );
            return;
        }

        match result {
            Ok(reply) => {
                log::info!("Response received (content hidden)");
                self.say(&reply, StyleHint::Normal);
                self.display
                    .show_status(&self.prompts.line("STATUS_RESPONSE_RECVD"));
            }
            Err(LlmError::Connection(detail)) => {
                log::warn!("LLM connection error [redacted]");
                // Shown once, never recorded
                self.display.show_assistant_message(
                    &self.prompts.connection_error(&detail),
                    StyleHint::Alert,
                );
            }
            Err(LlmError::Blocked) => {
                log::warn!("LLM response blocked");
                self.say(&self.prompts.line("RESPONSE_BLOCKED"), StyleHint::Normal);
            }
        }
    }

    async fn deliver_mission_brief(&self) {
        log::info!("Delivering mission brief");
        let _ = self
            .play_logged(Sequence::mission_brief(&self.prompts, &self.timings))
            .await;
    }

    async fn scare(&self, kind: ScareKind, text: &str) {
        log::info!("Triggering {:?} scare", kind);
        match kind {
            ScareKind::BlankScreen => {
                let sequence = Sequence::blank_screen(&self.prompts, &self.timings);
                if let Ok(ScareOutcome::Completed) = self.play_logged(sequence).await {
                    if let ResponsePlan::Generate {
                        system_instruction,
                        model_input,
                    } = self.planner.after_blank_screen(text)
                    {
                        self.exchange(&system_instruction, &model_input).await;
                    }
                }
            }
            ScareKind::FormatWarning => self.format_warning().await,
            ScareKind::Bsod => {
                let _ = self
                    .play_logged(Sequence::bsod(&self.prompts, &self.timings))
                    .await;
            }
            ScareKind::Yell => {
                let sequence = self.sequencer.yell(&self.prompts, &self.timings);
                let _ = self.play_logged(sequence).await;
            }
        }
    }

    /// Presents the format dialog until it is confirmed, then turns hostile and shows the BSOD
    async fn format_warning(&self) {
        let title = self.prompts.line("FORMAT_C_TITLE");
        let message = self.prompts.line("FORMAT_C_MSG");

        self.dialog_open.store(true, Ordering::SeqCst);
        while !self.confirm.format_warning(&title, &message).await {
            log::info!("Format warning dismissed; presenting again");
            tokio::task::yield_now().await;
        }
        self.dialog_open.store(false, Ordering::SeqCst);

        self.transition_on(InternalEvent::FormatConfirmed);
        let _ = self
            .play_logged(Sequence::bsod(&self.prompts, &self.timings))
            .await;
    }

    async fn run_ending(&self) {
        self.transition_on(InternalEvent::EndingStarted);
        log::info!("Playing ending");
        let _ = self
            .play_logged(Sequence::ending(&self.prompts, &self.timings))
            .await;
    }

    async fn play_logged(&self, sequence: Sequence) -> Result<ScareOutcome, ScareError> {
        let kind = sequence.kind;
        let result = self.play(sequence).await;
        if let Err(e) = &result {
            log::warn!("Could not play {:?}: {}", kind, e);
        }
        result
    }

    async fn play(&self, sequence: Sequence) -> Result<ScareOutcome, ScareError> {
        let kind = sequence.kind;
        self.sequencer
            .run(sequence, |effect| self.render(kind, effect))
            .await
    }

    fn render(&self, kind: SequenceKind, effect: &Effect) {
        match (kind, effect) {
            (_, Effect::Say { text, style }) => self.say(text, *style),
            (_, Effect::EndingPopup { title, message }) => self.display.show_ending(title, message),
            (SequenceKind::Scare(scare), effect) => self.display.run_scare_effect(scare, effect),
            (kind, effect) => log::debug!("{:?} step without a renderer: {:?}", kind, effect),
        }
    }
}
