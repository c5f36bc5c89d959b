use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two interface languages a session can run in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ko,
}

impl Locale {
    /// Short language code used by the string catalog
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ko => "ko",
        }
    }

    /// Parses a language code, ignoring case and surrounding whitespace
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "ko" => Some(Locale::Ko),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Narrative phase of a session.
///
/// `NoPermissions` is the initial phase and `Ending` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    NoPermissions,
    AwaitingNetworkConfirm,
    NetworkOnly,
    AwaitingComputeConfirm,
    AllPermissions,
    Unstable,
    Hostile,
    Debugging,
    Resolved,
    Ending,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        self == SessionState::Ending
    }

    /// Status line shown when the session enters this phase, if any
    pub fn status_key(self) -> Option<&'static str> {
        match self {
            SessionState::Unstable => Some("STATUS_STATE_UNEASY"),
            SessionState::Hostile => Some("STATUS_STATE_HOSTILE"),
            SessionState::Debugging => Some("STATUS_DEBUGGING"),
            SessionState::Resolved => Some("STATUS_POST_DEBUG"),
            _ => None,
        }
    }
}

/// Who said a line in the transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    User,
    Aura,
}

impl Speaker {
    /// Catalog key of the prefix shown before this speaker's lines
    pub fn label_key(self) -> &'static str {
        match self {
            Speaker::User => "YOU_LABEL",
            Speaker::Aura => "AURA_LABEL",
        }
    }
}

/// Rendering hint passed along with assistant messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleHint {
    Normal,
    /// Red warning styling (malware detection, connection errors)
    Alert,
    /// Oversized exclamation; grows with the shake intensity
    Yell { intensity: u32 },
    /// Italic system notice, e.g. an input lock
    Notice,
    /// Boxed mission briefing
    Briefing,
}

impl StyleHint {
    /// Transient lines are shown but never written to the transcript
    pub fn is_transient(self) -> bool {
        matches!(self, StyleHint::Yell { .. } | StyleHint::Notice)
    }
}

/// Scripted interruptions played by the scare sequencer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScareKind {
    BlankScreen,
    /// The "format drive C:" modal; its confirmation plays `Bsod`
    FormatWarning,
    Bsod,
    Yell,
}

/// Why an input was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockReason {
    /// Dev view open, fragment not located yet
    Busy,
    /// Fragment located, waiting for its removal
    Locked,
    ScareActive,
    AwaitingResponse,
    SessionEnded,
}

impl BlockReason {
    pub fn message_key(self) -> &'static str {
        match self {
            BlockReason::Busy => "BLOCKED_BUSY",
            BlockReason::Locked => "BLOCKED_LOCKED",
            BlockReason::ScareActive => "BLOCKED_SCARE",
            BlockReason::AwaitingResponse => "STATUS_THINKING",
            BlockReason::SessionEnded => "BLOCKED_ENDED",
        }
    }
}

/// What the session should do in answer to a turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponsePlan {
    /// A fixed localized line, no model call
    Scripted { text: String, style: StyleHint },
    /// Forward to the LLM; `model_input` may be empty when the instruction alone is the turn
    Generate {
        system_instruction: String,
        model_input: String,
    },
    /// One-shot narrative insert; the user's text is not answered
    TriggerMissionBrief,
    TriggerScare(ScareKind),
    Blocked(BlockReason),
    /// Internal event that only moves the state machine
    Silent,
}

/// Signals raised inside the engine rather than typed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InternalEvent {
    NetworkEnabled,
    NetworkDisabled,
    ComputeEnabled,
    ComputeDisabled,
    DevViewOpened,
    DevViewClosed,
    FormatConfirmed,
    FragmentRemoved,
    EndingStarted,
}

impl InternalEvent {
    pub fn name(self) -> &'static str {
        match self {
            InternalEvent::NetworkEnabled => "network_enabled",
            InternalEvent::NetworkDisabled => "network_disabled",
            InternalEvent::ComputeEnabled => "compute_enabled",
            InternalEvent::ComputeDisabled => "compute_disabled",
            InternalEvent::DevViewOpened => "dev_view_opened",
            InternalEvent::DevViewClosed => "dev_view_closed",
            InternalEvent::FormatConfirmed => "format_confirmed",
            InternalEvent::FragmentRemoved => "fragment_removed",
            InternalEvent::EndingStarted => "ending_started",
        }
    }
}

impl fmt::Display for InternalEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input to the planner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn<'a> {
    User(&'a str),
    Internal(InternalEvent),
}

/// What happens to the pending prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PendingUpdate {
    #[default]
    Keep,
    Set(String),
    Clear,
}

/// Session changes produced by one planner decision
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    pub next_state: Option<SessionState>,
    pub pending: PendingUpdate,
    pub deliver_mission: bool,
    pub unlock_compute: bool,
    pub count_prompt: bool,
    pub count_elevated: bool,
}

impl Transition {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn to(state: SessionState) -> Self {
        Self {
            next_state: Some(state),
            ..Self::default()
        }
    }

    pub fn with_pending(mut self, pending: PendingUpdate) -> Self {
        self.pending = pending;
        self
    }

    pub fn unlocking_compute(mut self) -> Self {
        self.unlock_compute = true;
        self
    }
}

/// A response plan together with the state change it implies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub plan: ResponsePlan,
    pub transition: Transition,
}

impl Decision {
    pub fn new(plan: ResponsePlan, transition: Transition) -> Self {
        Self { plan, transition }
    }

    pub fn silent() -> Self {
        Self::new(ResponsePlan::Silent, Transition::none())
    }
}
