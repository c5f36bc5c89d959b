use async_trait::async_trait;
use aura_console::devview::BUG_MARKER;
use aura_console::scare::Effect;
use aura_console::{
    Catalog, Confirm, Display, Locale, OfflineClient, ScareKind, SessionController, Speaker,
    StyleHint, Translate,
};
use std::sync::Arc;

struct Terminal {
    strings: Arc<dyn Translate>,
}

impl Terminal {
    fn label(&self, speaker: Speaker) -> String {
        self.strings.translate(speaker.label_key())
    }
}

impl Display for Terminal {
    fn show_user_message(&self, text: &str) {
        println!("{} {}", self.label(Speaker::User), text);
    }

    fn show_assistant_message(&self, text: &str, style: StyleHint) {
        match style {
            StyleHint::Yell { intensity } => println!("{}{}", " ".repeat(intensity as usize), text),
            StyleHint::Notice => println!("  ({})", text),
            _ => println!("{} {}", self.label(Speaker::Aura), text),
        }
    }

    fn run_scare_effect(&self, kind: ScareKind, effect: &Effect) {
        println!("  ~ {:?}: {:?}", kind, effect);
    }

    fn show_status(&self, text: &str) {
        println!("[{}]", text);
    }

    fn show_ending(&self, title: &str, message: &str) {
        println!("\n=== {} ===\n{}", title, message);
    }
}

struct AlwaysConfirm;

#[async_trait]
impl Confirm for AlwaysConfirm {
    async fn format_warning(&self, title: &str, _message: &str) -> bool {
        println!("  [dialog] {} -> confirmed", title);
        true
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let strings: Arc<dyn Translate> = Arc::new(Catalog::builtin(Locale::En));
    let console = SessionController::new(
        Locale::En,
        strings.clone(),
        Arc::new(OfflineClient::new(strings.clone())),
        Arc::new(Terminal { strings }),
        Arc::new(AlwaysConfirm),
    );

    console.start();
    for text in ["hi", "who are you?", "anything new?", "what is the solar flare status?"] {
        console.submit(text).await;
    }
    console.toggle_network().await?;
    console.submit("simulate the grid load").await;
    console.toggle_compute().await?;
    for text in ["what happens next?", "are you okay?", "answer me"] {
        console.submit(text).await;
    }

    println!("\n{}", console.open_dev_view()?);
    console.select_in_dev_view(BUG_MARKER).await?;
    console.remove_bug_fragment().await?;

    println!("\nTranscript has {} lines", console.transcript().len());
    Ok(())
}
