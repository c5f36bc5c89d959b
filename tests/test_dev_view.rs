mod common;

use aura_console::devview::BUG_MARKER;
use aura_console::scare::Effect;
use aura_console::{ControlError, Locale, ScareKind, ScareOutcome, SessionState, StyleHint};
use common::{harness, reach_all_permissions, reach_hostile};
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn dev_view_is_unavailable_before_the_story_turns() {
    let h = harness(Locale::En);
    assert_eq!(
        h.console.open_dev_view(),
        Err(ControlError::DevViewUnavailable)
    );
    reach_all_permissions(&h.console).await;
    assert_eq!(
        h.console.open_dev_view(),
        Err(ControlError::DevViewUnavailable)
    );
    assert_eq!(h.console.close_dev_view(), Err(ControlError::NotDebugging));
    assert_eq!(
        h.console.locate_bug_fragment().await,
        Err(ControlError::NotDebugging)
    );
}

#[tokio::test(start_paused = true)]
async fn dev_view_opens_while_uneasy_and_closes_to_hostile() {
    let h = harness(Locale::En);
    reach_all_permissions(&h.console).await;
    h.console.submit("and now?").await;
    assert_eq!(h.console.state(), SessionState::Unstable);

    let listing = h.console.open_dev_view().unwrap();
    assert!(listing.contains(BUG_MARKER));
    assert_eq!(h.console.state(), SessionState::Debugging);

    h.console.close_dev_view().unwrap();
    assert_eq!(h.console.state(), SessionState::Hostile);
}

#[tokio::test(start_paused = true)]
async fn removal_waits_for_the_yell() {
    let h = harness(Locale::En);
    reach_hostile(&h.console).await;
    h.console.open_dev_view().unwrap();

    assert_eq!(
        h.console.remove_bug_fragment().await,
        Err(ControlError::YellPending)
    );
    assert_eq!(h.console.state(), SessionState::Debugging);
    assert!(h.console.dev_listing().contains(BUG_MARKER));
}

#[tokio::test(start_paused = true)]
async fn partial_selection_is_not_a_find() {
    let h = harness(Locale::En);
    reach_hostile(&h.console).await;
    h.console.open_dev_view().unwrap();

    assert_eq!(
        h.console.select_in_dev_view("XENOS_ALPHA_CORE").await,
        Ok(None)
    );
    assert!(!h.console.snapshot().debug().fragment_located);
}

#[tokio::test(start_paused = true)]
async fn locating_twice_plays_one_yell() {
    let h = harness(Locale::En);
    reach_hostile(&h.console).await;
    h.console.open_dev_view().unwrap();

    let first = h.console.locate_bug_fragment();
    let second = async {
        tokio::time::sleep(Duration::from_millis(500)).await;
        h.console.locate_bug_fragment().await
    };
    let (first, second) = tokio::join!(first, second);

    assert_eq!(first, Ok(Some(ScareOutcome::Completed)));
    assert_eq!(second, Ok(None));

    let yells = h
        .display
        .assistant_lines()
        .into_iter()
        .filter(|(_, style)| matches!(style, StyleHint::Yell { .. }))
        .count();
    assert_eq!(yells, 12);

    let shakes: Vec<u32> = h
        .display
        .effects()
        .into_iter()
        .filter_map(|(kind, effect)| match (kind, effect) {
            (ScareKind::Yell, Effect::Shake(amount)) => Some(amount),
            _ => None,
        })
        .collect();
    assert_eq!(shakes.first(), Some(&1));
    assert_eq!(shakes.last(), Some(&0));
    assert!(shakes[..12].windows(2).all(|pair| pair[0] < pair[1]));
}

#[tokio::test(start_paused = true)]
async fn closing_mid_yell_falls_back_to_hostile() {
    let h = harness(Locale::En);
    reach_hostile(&h.console).await;
    h.console.open_dev_view().unwrap();

    let yell = h.console.select_in_dev_view(BUG_MARKER);
    let close = async {
        tokio::time::sleep(Duration::from_millis(1000)).await;
        h.console.close_dev_view()
    };
    let (outcome, closed) = tokio::join!(yell, close);

    assert_eq!(closed, Ok(()));
    assert_eq!(outcome, Ok(Some(ScareOutcome::Interrupted)));
    assert_eq!(h.console.state(), SessionState::Hostile);
    assert!(!h.console.snapshot().debug().yell_completed);
    assert_eq!(
        h.display.effects().last(),
        Some(&(ScareKind::Yell, Effect::Shake(0)))
    );
    assert_eq!(
        h.console.remove_bug_fragment().await,
        Err(ControlError::NotDebugging)
    );

    // A fresh pass starts from scratch and can finish
    h.console.open_dev_view().unwrap();
    let debug = h.console.snapshot().debug();
    assert!(debug.view_open && !debug.fragment_located && !debug.yell_completed);
    assert_eq!(
        h.console.locate_bug_fragment().await,
        Ok(Some(ScareOutcome::Completed))
    );
    h.console.remove_bug_fragment().await.unwrap();
    assert_eq!(h.console.state(), SessionState::Ending);
}

#[tokio::test(start_paused = true)]
async fn controls_close_once_the_story_ends() {
    let h = harness(Locale::En);
    reach_hostile(&h.console).await;
    h.console.open_dev_view().unwrap();
    h.console.locate_bug_fragment().await.unwrap();
    h.console.remove_bug_fragment().await.unwrap();

    assert_eq!(h.console.toggle_network().await, Err(ControlError::Ended));
    assert_eq!(h.console.open_dev_view(), Err(ControlError::Ended));
}
