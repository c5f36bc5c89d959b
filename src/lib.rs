//! # AURA Console
//!
//! Session engine for the AURA narrative chat console: a scripted assistant that drifts
//! from calm to hostile as the player grants it network and compute access.
//!
//! ## Features
//!
//! - **Session Controller**: single entry point for input, permission toggles and developer mode
//! - **Response Planner**: pure state machine deciding scripted lines, LLM turns, scares and refusals
//! - **Permission Gate**: network and elevated-compute flags with the compute-needs-network invariant
//! - **Scare Sequencer**: declarative timed effect lists (blank screen, BSOD, yell, ending)
//! - **LLM Integration**: Gemini, Ollama and an offline placeholder behind one trait
//! - **Bilingual Strings**: built-in English/Korean table with on-disk overrides
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use aura_console::{Confirm, Display, EngineConfig, ScareKind, SessionController, StyleHint};
//! use aura_console::scare::Effect;
//!
//! struct Terminal;
//!
//! impl Display for Terminal {
//!     fn show_user_message(&self, text: &str) { println!("You: {}", text) }
//!     fn show_assistant_message(&self, text: &str, _style: StyleHint) { println!("AURA: {}", text) }
//!     fn run_scare_effect(&self, _kind: ScareKind, _effect: &Effect) {}
//!     fn show_status(&self, text: &str) { println!("[{}]", text) }
//!     fn show_ending(&self, title: &str, message: &str) { println!("== {} == {}", title, message) }
//! }
//!
//! struct AlwaysConfirm;
//!
//! #[async_trait::async_trait]
//! impl Confirm for AlwaysConfirm {
//!     async fn format_warning(&self, _title: &str, _message: &str) -> bool { true }
//! }
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = EngineConfig::load("aura.json")?;
//! let console = SessionController::from_config(&config, Arc::new(Terminal), Arc::new(AlwaysConfirm))?;
//!
//! console.start();
//! console.submit("hello").await;
//! console.toggle_network().await?;
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod config;
pub mod devview;
pub mod engine;
pub mod error;
pub mod llm;
pub mod permissions;
pub mod planner;
pub mod prompts;
pub mod scare;
pub mod session;
pub mod traits;
pub mod transcript;
pub mod types;

// Re-export main types for convenience
pub use config::{Backend, EngineConfig, Timings};
pub use engine::SessionController;
pub use error::{ControlError, GateError, LlmError, ScareError};
pub use llm::{GeminiClient, LlmClient, OfflineClient, OllamaClient};
pub use permissions::{GateOutcome, PermissionGate};
pub use planner::ResponsePlanner;
pub use prompts::{Catalog, CatalogLoader, PromptBuilder};
pub use scare::{RandomSource, RngSource, ScareOutcome, ScareSequencer, ScareStatus};
pub use session::{DebugProgress, Session};
pub use traits::{Confirm, Display, Translate};
pub use transcript::{Transcript, TranscriptEntry};
pub use types::{
    BlockReason, Decision, InternalEvent, Locale, ResponsePlan, ScareKind, SessionState,
    Speaker, StyleHint, Transition, Turn,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
