//! Drives the navigation controller through the real tokio timer with
//! virtual time, covering the double-tap window end to end.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use chatlex::core::nav::{NavAction, NavKey, NavState, NavigationController};
use chatlex::term::RuntimeEvent;
use chatlex::term::timer::TokioTapTimer;

const WINDOW: Duration = Duration::from_millis(350);

type Controller = NavigationController<&'static str, TokioTapTimer>;

fn controller(tx: mpsc::UnboundedSender<RuntimeEvent>) -> Controller {
    let targets = Arc::new(vec!["search", "words", "messages"]);
    NavigationController::new(targets, TokioTapTimer::new(tx)).with_window(WINDOW)
}

/// Forwards any queued timer fires to the controller, dropping stale ones,
/// the same way the interactive loop does.
fn drain_timer(nav: &mut Controller, rx: &mut mpsc::UnboundedReceiver<RuntimeEvent>) {
    while let Ok(RuntimeEvent::TapTimeout(generation)) = rx.try_recv() {
        if generation == nav.timer().generation() {
            nav.on_timer_elapsed();
        }
    }
}

#[tokio::test(start_paused = true)]
async fn slow_second_tap_does_not_arm() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut nav = controller(tx);

    assert!(nav.handle_key(NavKey::Trigger).is_empty());
    tokio::time::sleep(WINDOW + Duration::from_millis(1)).await;
    drain_timer(&mut nav, &mut rx);
    assert_eq!(nav.state(), NavState::Idle);

    // The late second tap reads as a fresh first tap.
    assert!(nav.handle_key(NavKey::Trigger).is_empty());
    assert_eq!(nav.state(), NavState::ArmedFirstTap);
}

#[tokio::test(start_paused = true)]
async fn fast_double_tap_arms_and_digit_focuses() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut nav = controller(tx);

    nav.handle_key(NavKey::Trigger);
    tokio::time::sleep(Duration::from_millis(100)).await;
    drain_timer(&mut nav, &mut rx);

    let actions = nav.handle_key(NavKey::Trigger);
    assert!(matches!(actions.as_slice(), [NavAction::Arm(_)]));
    assert_eq!(nav.state(), NavState::AwaitingDigit);

    // The cancelled window must not fire later and knock us out of the mode.
    tokio::time::sleep(WINDOW * 2).await;
    drain_timer(&mut nav, &mut rx);
    assert_eq!(nav.state(), NavState::AwaitingDigit);

    let actions = nav.handle_key(NavKey::Digit(1));
    assert_eq!(actions, vec![NavAction::Disarm, NavAction::Focus(1)]);
    assert_eq!(nav.state(), NavState::Idle);
}

#[tokio::test(start_paused = true)]
async fn out_of_range_digit_disarms_without_focus() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut nav = controller(tx);

    nav.handle_key(NavKey::Trigger);
    nav.handle_key(NavKey::Trigger);
    drain_timer(&mut nav, &mut rx);

    let actions = nav.handle_key(NavKey::Digit(9));
    assert_eq!(actions, vec![NavAction::Disarm]);
    assert_eq!(nav.state(), NavState::Idle);
}

#[tokio::test(start_paused = true)]
async fn cancel_during_window_suppresses_the_fire() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut nav = controller(tx);

    nav.handle_key(NavKey::Trigger);
    let actions = nav.handle_key(NavKey::Cancel);
    assert_eq!(actions, vec![NavAction::Disarm, NavAction::ClearSelection]);

    tokio::time::sleep(WINDOW * 2).await;
    // Whatever arrived is stale; the controller must stay Idle and a new
    // double-tap must still work.
    drain_timer(&mut nav, &mut rx);
    assert_eq!(nav.state(), NavState::Idle);

    nav.handle_key(NavKey::Trigger);
    let actions = nav.handle_key(NavKey::Trigger);
    assert!(matches!(actions.as_slice(), [NavAction::Arm(_)]));
}
