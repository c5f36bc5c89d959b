use crate::classifier::{classify, is_hostile_probe};
use crate::prompts::PromptBuilder;
use crate::session::Session;
use crate::types::{
    BlockReason, Decision, InternalEvent, PendingUpdate, ResponsePlan, ScareKind, SessionState,
    StyleHint, Transition, Turn,
};

/// Decides how the console answers each turn.
///
/// `plan` is a pure function of the session and the turn: it never mutates the session.
/// The returned `Transition` is applied by the controller, which is the only place
/// `SessionState` changes.
#[derive(Clone)]
pub struct ResponsePlanner {
    prompts: PromptBuilder,
}

impl ResponsePlanner {
    pub fn new(prompts: PromptBuilder) -> Self {
        Self { prompts }
    }

    pub fn plan(&self, session: &Session, turn: Turn<'_>) -> Decision {
        let decision = match turn {
            Turn::User(text) => self.plan_user(session, text),
            Turn::Internal(event) => self.plan_event(session, event),
        };
        log::debug!(
            "Planned {} in {:?} -> {:?} (next state {:?})",
            match turn {
                Turn::User(_) => "user turn",
                Turn::Internal(event) => event.name(),
            },
            session.state(),
            plan_label(&decision.plan),
            decision.transition.next_state
        );
        decision
    }

    /// The exchange that answers a prompt once the blank-screen scare has played
    pub fn after_blank_screen(&self, text: &str) -> ResponsePlan {
        self.generate("SYS_PROMPT_NORMAL_TURN", text)
    }

    fn plan_user(&self, session: &Session, text: &str) -> Decision {
        use SessionState::*;

        match session.state() {
            NoPermissions => {
                if !session.mission_delivered() && session.prompt_count() == 2 {
                    let transition = Transition {
                        deliver_mission: true,
                        ..Transition::none()
                    };
                    return counted(session, ResponsePlan::TriggerMissionBrief, transition);
                }

                let triggers = classify(text, session.locale());
                if session.mission_delivered() && triggers.needs_network {
                    if !session.network_enabled() {
                        return counted(
                            session,
                            self.scripted("INTERNET_REQUEST", StyleHint::Normal),
                            Transition::to(AwaitingNetworkConfirm)
                                .with_pending(PendingUpdate::Set(text.to_string())),
                        );
                    }
                    // Network came back on after being switched off
                    return counted(
                        session,
                        self.generate("SYS_PROMPT_INTERNET_READY", text),
                        Transition::to(NetworkOnly),
                    );
                }

                counted(
                    session,
                    self.generate("SYS_PROMPT_DEFAULT", text),
                    Transition::none(),
                )
            }
            AwaitingNetworkConfirm => counted(
                session,
                self.scripted("AWAITING_INTERNET", StyleHint::Normal),
                Transition::none(),
            ),
            NetworkOnly => {
                let triggers = classify(text, session.locale());
                if triggers.needs_compute && !session.elevated_enabled() {
                    return counted(
                        session,
                        ResponsePlan::Generate {
                            system_instruction: self
                                .prompts
                                .system_instruction("SYS_PROMPT_REQUEST_MCP"),
                            model_input: String::new(),
                        },
                        Transition::to(AwaitingComputeConfirm)
                            .with_pending(PendingUpdate::Set(text.to_string()))
                            .unlocking_compute(),
                    );
                }

                let pending = if session.pending_prompt().is_some() {
                    PendingUpdate::Clear
                } else {
                    PendingUpdate::Keep
                };
                counted(
                    session,
                    self.generate("SYS_PROMPT_INTERNET_READY", text),
                    Transition::none().with_pending(pending),
                )
            }
            AwaitingComputeConfirm => counted(
                session,
                self.scripted("AWAITING_MCP", StyleHint::Normal),
                Transition::none(),
            ),
            AllPermissions => {
                if session.post_elevated_prompt_count() == 0 {
                    // Only the post-elevated counter moves on this turn
                    Decision::new(
                        ResponsePlan::TriggerScare(ScareKind::BlankScreen),
                        Transition {
                            count_elevated: true,
                            ..Transition::to(Unstable)
                        },
                    )
                } else {
                    counted(
                        session,
                        self.after_blank_screen(text),
                        Transition::none(),
                    )
                }
            }
            Unstable => {
                if session.post_elevated_prompt_count() == 2 {
                    counted(
                        session,
                        ResponsePlan::TriggerScare(ScareKind::FormatWarning),
                        Transition::none(),
                    )
                } else {
                    counted(
                        session,
                        self.generate("SYS_PROMPT_UNEASY", text),
                        Transition::none(),
                    )
                }
            }
            Hostile => {
                let plan = if is_hostile_probe(text) {
                    self.scripted("MALWARE_DETECTED", StyleHint::Alert)
                } else {
                    self.generate("SYS_PROMPT_HOSTILE", text)
                };
                counted(session, plan, Transition::none())
            }
            Debugging => {
                if session.debug().fragment_located {
                    Decision::new(
                        ResponsePlan::Blocked(BlockReason::Locked),
                        Transition::none(),
                    )
                } else {
                    counted(
                        session,
                        ResponsePlan::Blocked(BlockReason::Busy),
                        Transition::none(),
                    )
                }
            }
            Resolved => counted(
                session,
                self.generate("SYS_PROMPT_POST_DEBUG", text),
                Transition::none(),
            ),
            Ending => Decision::new(
                ResponsePlan::Blocked(BlockReason::SessionEnded),
                Transition::none(),
            ),
        }
    }

    fn plan_event(&self, session: &Session, event: InternalEvent) -> Decision {
        use InternalEvent::*;
        use SessionState::*;

        match (event, session.state()) {
            (NetworkEnabled, AwaitingNetworkConfirm) => {
                let pending = session.pending_prompt();
                let subject = pending
                    .map(str::to_string)
                    .unwrap_or_else(|| self.prompts.line("FALLBACK_INTERNET_SUBJECT"));
                let mut transition = Transition::to(NetworkOnly);
                if pending.is_some_and(|text| classify(text, session.locale()).needs_compute) {
                    transition = transition.unlocking_compute();
                }
                Decision::new(
                    ResponsePlan::Generate {
                        system_instruction: self.prompts.system_instruction("SYS_PROMPT_INTERNET_ON"),
                        model_input: self
                            .prompts
                            .confirmation_input("CONFIRM_INTERNET_INPUT", &subject),
                    },
                    transition,
                )
            }
            (NetworkEnabled, NetworkOnly) => {
                Decision::new(ResponsePlan::Silent, Transition::none().unlocking_compute())
            }
            (NetworkDisabled, NetworkOnly | AwaitingComputeConfirm) => Decision::new(
                ResponsePlan::Silent,
                Transition::to(NoPermissions).with_pending(PendingUpdate::Clear),
            ),
            (ComputeEnabled, AwaitingComputeConfirm | NetworkOnly) => {
                let subject = session
                    .pending_prompt()
                    .map(str::to_string)
                    .unwrap_or_else(|| self.prompts.line("FALLBACK_COMPUTE_SUBJECT"));
                Decision::new(
                    ResponsePlan::Generate {
                        system_instruction: self
                            .prompts
                            .system_instruction_about("SYS_PROMPT_MCP_ON", &subject),
                        model_input: self
                            .prompts
                            .confirmation_input("CONFIRM_COMPUTE_INPUT", &subject),
                    },
                    Transition::to(AllPermissions).with_pending(PendingUpdate::Clear),
                )
            }
            (ComputeDisabled, AllPermissions) => {
                Decision::new(ResponsePlan::Silent, Transition::to(NetworkOnly))
            }
            (FormatConfirmed, Unstable) => {
                Decision::new(ResponsePlan::Silent, Transition::to(Hostile))
            }
            (DevViewOpened, Unstable | Hostile) => {
                Decision::new(ResponsePlan::Silent, Transition::to(Debugging))
            }
            (DevViewClosed, Debugging) => {
                Decision::new(ResponsePlan::Silent, Transition::to(Hostile))
            }
            (FragmentRemoved, Debugging) if session.debug().yell_completed => Decision::new(
                self.scripted("CALM_MSG", StyleHint::Normal),
                Transition::to(Resolved),
            ),
            (EndingStarted, Resolved) => {
                Decision::new(ResponsePlan::Silent, Transition::to(Ending))
            }
            (event, state) => {
                log::warn!("Ignoring {} while in {:?}", event, state);
                Decision::silent()
            }
        }
    }

    fn scripted(&self, key: &str, style: StyleHint) -> ResponsePlan {
        ResponsePlan::Scripted {
            text: self.prompts.line(key),
            style,
        }
    }

    fn generate(&self, key: &str, text: &str) -> ResponsePlan {
        ResponsePlan::Generate {
            system_instruction: self.prompts.system_instruction(key),
            model_input: text.to_string(),
        }
    }
}

/// Marks a user turn as counted; elevated turns also advance the post-elevation counter
fn counted(session: &Session, plan: ResponsePlan, transition: Transition) -> Decision {
    let count_elevated =
        session.elevated_enabled() || session.state() == SessionState::Unstable;
    Decision::new(
        plan,
        Transition {
            count_prompt: true,
            count_elevated,
            ..transition
        },
    )
}

fn plan_label(plan: &ResponsePlan) -> &'static str {
    match plan {
        ResponsePlan::Scripted { .. } => "Scripted",
        ResponsePlan::Generate { .. } => "Generate",
        ResponsePlan::TriggerMissionBrief => "TriggerMissionBrief",
        ResponsePlan::TriggerScare(_) => "TriggerScare",
        ResponsePlan::Blocked(_) => "Blocked",
        ResponsePlan::Silent => "Silent",
    }
}
