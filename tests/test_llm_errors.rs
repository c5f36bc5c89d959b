mod common;

use aura_console::{Locale, LlmError, StyleHint};
use common::harness;

#[tokio::test(start_paused = true)]
async fn connection_errors_are_shown_but_not_recorded() {
    let h = harness(Locale::En);
    h.llm
        .push_reply(Err(LlmError::Connection("dns lookup failed for core-7".into())));

    h.console.submit("hi").await;

    assert_eq!(
        h.display.last_assistant(),
        Some((
            "// CORE CONNECTION ERROR [dns lookup failed for core-7] //".to_string(),
            StyleHint::Alert
        ))
    );
    let transcript = h.console.transcript();
    assert_eq!(transcript.len(), 1);
    assert!(transcript
        .entries()
        .iter()
        .all(|entry| !entry.text.contains("core-7")));
    assert!(!h.console.snapshot().exchange_in_flight());
}

#[tokio::test(start_paused = true)]
async fn blocked_replies_use_the_blocked_line() {
    let h = harness(Locale::Ko);
    h.llm.push_reply(Err(LlmError::Blocked));

    h.console.submit("안녕").await;

    let transcript = h.console.transcript();
    assert_eq!(
        transcript.last().map(|entry| entry.text.as_str()),
        Some("[호스트 시스템에 의해 응답 차단됨]")
    );
}

#[tokio::test(start_paused = true)]
async fn replies_are_recorded_and_acknowledged() {
    let h = harness(Locale::En);
    h.llm.push_reply(Ok("Calm skies today.".into()));

    h.console.submit("hi").await;

    assert_eq!(
        h.console.transcript().last().map(|entry| entry.text.clone()),
        Some("Calm skies today.".to_string())
    );
    assert_eq!(
        h.display.statuses(),
        vec![
            "AURA is thinking...".to_string(),
            "Response received.".to_string()
        ]
    );
}
