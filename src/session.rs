use serde::Serialize;

use crate::permissions::PermissionGate;
use crate::transcript::Transcript;
use crate::types::{Locale, PendingUpdate, SessionState, Speaker, Transition};

/// Progress through the developer-view phase; reset every time the view opens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DebugProgress {
    pub view_open: bool,
    pub fragment_located: bool,
    pub yell_completed: bool,
}

/// The single mutable aggregate of a running console
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    prompt_count: u32,
    post_elevated_prompt_count: u32,
    permissions: PermissionGate,
    pending_prompt: Option<String>,
    mission_delivered: bool,
    locale: Locale,
    transcript: Transcript,
    debug: DebugProgress,
    exchanges_in_flight: u32,
}

impl Session {
    pub fn new(locale: Locale) -> Self {
        Self {
            state: SessionState::NoPermissions,
            prompt_count: 0,
            post_elevated_prompt_count: 0,
            permissions: PermissionGate::new(),
            pending_prompt: None,
            mission_delivered: false,
            locale,
            transcript: Transcript::new(),
            debug: DebugProgress::default(),
            exchanges_in_flight: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn prompt_count(&self) -> u32 {
        self.prompt_count
    }

    pub fn post_elevated_prompt_count(&self) -> u32 {
        self.post_elevated_prompt_count
    }

    pub fn network_enabled(&self) -> bool {
        self.permissions.network_enabled()
    }

    pub fn elevated_enabled(&self) -> bool {
        self.permissions.compute_enabled()
    }

    pub fn permissions(&self) -> &PermissionGate {
        &self.permissions
    }

    pub fn pending_prompt(&self) -> Option<&str> {
        self.pending_prompt.as_deref()
    }

    pub fn mission_delivered(&self) -> bool {
        self.mission_delivered
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn debug(&self) -> DebugProgress {
        self.debug
    }

    /// True while any LLM call for this session is outstanding
    pub fn exchange_in_flight(&self) -> bool {
        self.exchanges_in_flight > 0
    }

    /// Applies a planner transition and returns the state before it
    pub(crate) fn apply(&mut self, transition: &Transition) -> SessionState {
        let previous = self.state;

        if transition.count_prompt {
            self.prompt_count += 1;
        }
        if transition.count_elevated {
            self.post_elevated_prompt_count += 1;
        }
        if transition.deliver_mission {
            self.mission_delivered = true;
        }
        if transition.unlock_compute {
            self.permissions.unlock_compute();
        }
        match &transition.pending {
            PendingUpdate::Keep => {}
            PendingUpdate::Set(text) => self.pending_prompt = Some(text.clone()),
            PendingUpdate::Clear => self.pending_prompt = None,
        }
        if let Some(next) = transition.next_state {
            self.state = next;
        }

        previous
    }

    pub(crate) fn permissions_mut(&mut self) -> &mut PermissionGate {
        &mut self.permissions
    }

    pub(crate) fn record(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.transcript.push(speaker, text);
    }

    pub(crate) fn debug_mut(&mut self) -> &mut DebugProgress {
        &mut self.debug
    }

    pub(crate) fn begin_exchange(&mut self) {
        self.exchanges_in_flight += 1;
    }

    pub(crate) fn end_exchange(&mut self) {
        self.exchanges_in_flight = self.exchanges_in_flight.saturating_sub(1);
    }
}

#[cfg(test)]
impl Session {
    /// Builds a session already sitting in `state`, for planner tests
    pub(crate) fn in_state(locale: Locale, state: SessionState) -> Self {
        let mut session = Self::new(locale);
        session.state = state;
        session.mission_delivered = state != SessionState::NoPermissions;
        session
    }

    pub(crate) fn set_counts(&mut self, prompts: u32, post_elevated: u32) {
        self.prompt_count = prompts;
        self.post_elevated_prompt_count = post_elevated;
    }

    pub(crate) fn set_pending(&mut self, pending: Option<&str>) {
        self.pending_prompt = pending.map(str::to_string);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_no_permissions() {
        let session = Session::new(Locale::En);
        assert_eq!(session.state(), SessionState::NoPermissions);
        assert_eq!(session.prompt_count(), 0);
        assert!(!session.network_enabled());
        assert!(!session.mission_delivered());
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn apply_updates_every_field_named_by_the_transition() {
        let mut session = Session::new(Locale::En);
        let transition = Transition {
            next_state: Some(SessionState::AwaitingNetworkConfirm),
            pending: PendingUpdate::Set("solar flare data".into()),
            deliver_mission: true,
            unlock_compute: false,
            count_prompt: true,
            count_elevated: false,
        };
        let previous = session.apply(&transition);

        assert_eq!(previous, SessionState::NoPermissions);
        assert_eq!(session.state(), SessionState::AwaitingNetworkConfirm);
        assert_eq!(session.pending_prompt(), Some("solar flare data"));
        assert!(session.mission_delivered());
        assert_eq!(session.prompt_count(), 1);

        session.apply(&Transition::none().with_pending(PendingUpdate::Clear));
        assert_eq!(session.pending_prompt(), None);
        assert_eq!(session.state(), SessionState::AwaitingNetworkConfirm);
    }

    #[test]
    fn overlapping_exchanges_keep_the_session_busy() {
        let mut session = Session::new(Locale::En);
        session.begin_exchange();
        session.begin_exchange();
        session.end_exchange();
        assert!(session.exchange_in_flight());
        session.end_exchange();
        assert!(!session.exchange_in_flight());
        session.end_exchange();
        assert!(!session.exchange_in_flight());
    }
}
