use async_trait::async_trait;

use crate::scare::Effect;
use crate::types::{ScareKind, StyleHint};

/// Resolves user-facing text keys; unknown keys come back as `[key]`
pub trait Translate: Send + Sync {
    fn translate(&self, key: &str) -> String;
}

/// Everything the engine needs from the window that renders it.
///
/// All calls are fire-and-forget; the engine never inspects rendering state.
pub trait Display: Send + Sync {
    fn show_user_message(&self, text: &str);

    fn show_assistant_message(&self, text: &str, style: StyleHint);

    /// Called once per non-message step of a scare; spoken lines arrive through
    /// `show_assistant_message` instead
    fn run_scare_effect(&self, kind: ScareKind, effect: &Effect);

    /// Transient status-bar text
    fn show_status(&self, text: &str);

    /// Final popup; the UI should close input for good after showing it
    fn show_ending(&self, title: &str, message: &str);
}

/// The blocking "format drive" modal
#[async_trait]
pub trait Confirm: Send + Sync {
    /// Resolves to `true` when the user confirmed the format
    async fn format_warning(&self, title: &str, message: &str) -> bool;
}
