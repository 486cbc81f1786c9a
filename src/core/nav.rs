//! # Quick-Select Navigation
//!
//! A finite-state machine that turns a double-tap of the trigger key into a
//! numeric quick-select mode over a fixed registry of focus targets.
//!
//! ```text
//!            trigger              trigger (within window)
//!   Idle ──────────────► ArmedFirstTap ──────────────► AwaitingDigit
//!    ▲                        │                             │
//!    │       timer fires      │         digit / other key   │
//!    └────────────────────────┘◄────────────────────────────┘
//!              (cancel key returns to Idle from anywhere)
//! ```
//!
//! The controller knows nothing about terminals or widgets. It consumes
//! abstract [`NavKey`] events, owns one cancellable [`TapTimer`], and emits
//! [`NavAction`]s for the display layer to realize. Target handles are
//! opaque; the registry is fixed at construction.

use std::sync::Arc;
use std::time::Duration;

/// Double-tap window matching the original behavior tuning.
pub const DEFAULT_DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(350);

/// Abstract key events fed into the controller. The host maps its real key
/// codes onto these; anything that is not the trigger, a digit, or the
/// cancel key arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Trigger,
    Digit(u8),
    Cancel,
    Other,
}

/// Everything the controller can ask the display layer to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction<H> {
    /// Quick-select armed: show positional labels for these targets.
    Arm(Arc<Vec<H>>),
    /// Quick-select disarmed: hide the labels.
    Disarm,
    /// Focus the target at this registry position.
    Focus(usize),
    /// Host-defined reset (clear selection, search box, message view).
    ClearSelection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Idle,
    ArmedFirstTap,
    AwaitingDigit,
}

/// A cancellable single-shot timer owned by the controller.
///
/// Contract: `arm` replaces any pending timer (at most one is ever pending),
/// and after `cancel` the host must not deliver the timeout. Hosts that
/// cannot guarantee the latter (e.g. a fire already in flight when cancel
/// runs) must filter stale fires before calling
/// [`NavigationController::on_timer_elapsed`].
pub trait TapTimer {
    fn arm(&mut self, window: Duration);
    fn cancel(&mut self);
}

pub struct NavigationController<H, T: TapTimer> {
    state: NavState,
    tap_count: u32,
    window: Duration,
    timer: T,
    targets: Arc<Vec<H>>,
}

impl<H: Clone, T: TapTimer> NavigationController<H, T> {
    pub fn new(targets: Arc<Vec<H>>, timer: T) -> Self {
        Self {
            state: NavState::Idle,
            tap_count: 0,
            window: DEFAULT_DOUBLE_TAP_WINDOW,
            timer,
            targets,
        }
    }

    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Feeds one key event through the machine and returns the actions the
    /// display layer must apply, in order.
    pub fn handle_key(&mut self, key: NavKey) -> Vec<NavAction<H>> {
        match (self.state, key) {
            // Cancel wins from any state: back to Idle, full reset.
            (_, NavKey::Cancel) => {
                self.timer.cancel();
                self.tap_count = 0;
                self.state = NavState::Idle;
                vec![NavAction::Disarm, NavAction::ClearSelection]
            }
            // First tap: start the double-tap window.
            (NavState::Idle, NavKey::Trigger) => {
                self.tap_count = 1;
                self.timer.arm(self.window);
                self.state = NavState::ArmedFirstTap;
                Vec::new()
            }
            // Second tap inside the window: arm quick-select.
            (NavState::ArmedFirstTap, NavKey::Trigger) => {
                self.timer.cancel();
                self.tap_count = 0;
                self.state = NavState::AwaitingDigit;
                vec![NavAction::Arm(Arc::clone(&self.targets))]
            }
            // Digit selects a target; out-of-range digits still disarm.
            (NavState::AwaitingDigit, NavKey::Digit(digit)) => {
                self.state = NavState::Idle;
                let mut actions = vec![NavAction::Disarm];
                let index = digit as usize;
                if index < self.targets.len() {
                    actions.push(NavAction::Focus(index));
                }
                actions
            }
            // Any other key while awaiting a digit is an implicit cancel.
            // This includes the trigger key itself.
            (NavState::AwaitingDigit, _) => {
                self.state = NavState::Idle;
                vec![NavAction::Disarm]
            }
            // Digits and other keys while Idle or ArmedFirstTap: ignored,
            // the pending double-tap window (if any) keeps running.
            _ => Vec::new(),
        }
    }

    /// The double-tap window elapsed with only one tap seen. A single tap
    /// alone does nothing; a fire in any other state is stale and ignored.
    pub fn on_timer_elapsed(&mut self) {
        if self.state == NavState::ArmedFirstTap {
            self.tap_count = 0;
            self.state = NavState::Idle;
        }
    }
}
