//! Tooltip visibility state machine
//!
//! Decides whether the tip is shown; the placement engine only ever sees
//! the resulting boolean. The machine is timer-free: hover changes ask the
//! host to schedule a timer and the host reports back when it fires.
//!
//! ## States
//! - Hidden: tip not rendered
//! - Visible: tip rendered
//! - PendingHoverOn: pointer entered, waiting out the hover delay
//! - PendingHoverOff: pointer left, waiting out the hover delay

pub mod triggers;

pub use triggers::{EventSource, InteractionConfig};

use serde::{Deserialize, Serialize};

use crate::models::TooltipProps;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VisibilityState {
    #[default]
    Hidden,
    Visible,
    PendingHoverOn,
    PendingHoverOff,
}

/// Inputs to the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibilityEvent {
    Show,
    Hide,
    Toggle,
    HoverStart,
    HoverEnd,
    /// A timer requested through `Effect::ScheduleTimer` fired
    TimerExpired { generation: u64 },
}

/// Work the host has to do after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    None,
    /// Start a timer and send `TimerExpired { generation }` when it fires
    ScheduleTimer { delay_ms: u32, generation: u64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityMachine {
    state: VisibilityState,
    hover_delay_ms: u32,
    /// Bumped on every schedule; older timers are ignored
    generation: u64,
    /// Externally controlled open flag, overrides the machine when set
    is_open: Option<bool>,
}

impl VisibilityMachine {
    pub fn new(hover_delay_ms: u32) -> Self {
        Self {
            state: VisibilityState::Hidden,
            hover_delay_ms,
            generation: 0,
            is_open: None,
        }
    }

    pub fn state(&self) -> VisibilityState {
        self.state
    }

    pub fn set_is_open(&mut self, is_open: Option<bool>) {
        self.is_open = is_open;
    }

    /// Whether the tip should be rendered right now
    pub fn is_visible(&self) -> bool {
        match self.is_open {
            Some(open) => open,
            None => matches!(
                self.state,
                VisibilityState::Visible | VisibilityState::PendingHoverOff
            ),
        }
    }

    fn schedule(&mut self, next: VisibilityState) -> Effect {
        self.generation += 1;
        self.state = next;
        Effect::ScheduleTimer {
            delay_ms: self.hover_delay_ms,
            generation: self.generation,
        }
    }

    fn settle(&mut self, next: VisibilityState) -> Effect {
        self.state = next;
        Effect::None
    }

    /// Apply one event
    pub fn handle(&mut self, event: VisibilityEvent) -> Effect {
        use VisibilityEvent::*;
        use VisibilityState::*;

        match (self.state, event) {
            (_, Show) => self.settle(Visible),
            (_, Hide) => self.settle(Hidden),

            (Visible | PendingHoverOff, Toggle) => self.settle(Hidden),
            (Hidden | PendingHoverOn, Toggle) => self.settle(Visible),

            (Hidden, HoverStart) => self.schedule(PendingHoverOn),
            (PendingHoverOff, HoverStart) => self.settle(Visible),
            (Visible | PendingHoverOn, HoverStart) => Effect::None,

            (Visible, HoverEnd) => self.schedule(PendingHoverOff),
            (PendingHoverOn, HoverEnd) => self.settle(Hidden),
            (Hidden | PendingHoverOff, HoverEnd) => Effect::None,

            (PendingHoverOn, TimerExpired { generation }) if generation == self.generation => {
                self.settle(Visible)
            }
            (PendingHoverOff, TimerExpired { generation }) if generation == self.generation => {
                self.settle(Hidden)
            }
            (_, TimerExpired { generation }) => {
                log::debug!(
                    "Ignoring stale tooltip timer {} (current {})",
                    generation,
                    self.generation
                );
                Effect::None
            }
        }
    }
}

impl From<&TooltipProps> for VisibilityMachine {
    fn from(props: &TooltipProps) -> Self {
        let mut machine = Self::new(props.hover_delay);
        machine.set_is_open(props.is_open);
        machine
    }
}

impl Default for VisibilityMachine {
    fn default() -> Self {
        Self::new(200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expire(machine: &mut VisibilityMachine, effect: Effect) -> Effect {
        match effect {
            Effect::ScheduleTimer { generation, .. } => {
                machine.handle(VisibilityEvent::TimerExpired { generation })
            }
            Effect::None => panic!("expected a timer to be scheduled"),
        }
    }

    #[test]
    fn test_hover_shows_after_delay() {
        let mut machine = VisibilityMachine::new(200);
        let effect = machine.handle(VisibilityEvent::HoverStart);
        assert_eq!(effect, Effect::ScheduleTimer { delay_ms: 200, generation: 1 });
        assert!(!machine.is_visible());

        expire(&mut machine, effect);
        assert_eq!(machine.state(), VisibilityState::Visible);
        assert!(machine.is_visible());
    }

    #[test]
    fn test_hover_end_hides_after_delay() {
        let mut machine = VisibilityMachine::new(100);
        machine.handle(VisibilityEvent::Show);

        let effect = machine.handle(VisibilityEvent::HoverEnd);
        assert_eq!(machine.state(), VisibilityState::PendingHoverOff);
        assert!(machine.is_visible(), "stays visible while the delay runs");

        expire(&mut machine, effect);
        assert!(!machine.is_visible());
    }

    #[test]
    fn test_reentering_cancels_pending_hide() {
        let mut machine = VisibilityMachine::new(100);
        machine.handle(VisibilityEvent::Show);
        let leave = machine.handle(VisibilityEvent::HoverEnd);
        machine.handle(VisibilityEvent::HoverStart);
        assert_eq!(machine.state(), VisibilityState::Visible);

        expire(&mut machine, leave);
        assert!(machine.is_visible());
    }

    #[test]
    fn test_stale_timer_is_ignored() {
        let mut machine = VisibilityMachine::new(100);
        let first = machine.handle(VisibilityEvent::HoverStart);
        machine.handle(VisibilityEvent::HoverEnd);
        let second = machine.handle(VisibilityEvent::HoverStart);

        expire(&mut machine, first);
        assert_eq!(machine.state(), VisibilityState::PendingHoverOn);

        expire(&mut machine, second);
        assert_eq!(machine.state(), VisibilityState::Visible);
    }

    #[test]
    fn test_toggle_and_hide() {
        let mut machine = VisibilityMachine::default();
        machine.handle(VisibilityEvent::Toggle);
        assert!(machine.is_visible());
        machine.handle(VisibilityEvent::Toggle);
        assert!(!machine.is_visible());

        machine.handle(VisibilityEvent::HoverStart);
        machine.handle(VisibilityEvent::Hide);
        assert_eq!(machine.state(), VisibilityState::Hidden);
    }

    #[test]
    fn test_is_open_overrides_state() {
        let mut machine = VisibilityMachine::default();
        machine.set_is_open(Some(true));
        assert!(machine.is_visible());

        machine.handle(VisibilityEvent::Show);
        machine.set_is_open(Some(false));
        assert!(!machine.is_visible());

        machine.set_is_open(None);
        assert!(machine.is_visible());
    }

    #[test]
    fn test_from_props() {
        let props = TooltipProps {
            hover_delay: 50,
            is_open: Some(true),
            ..TooltipProps::default()
        };
        let mut machine = VisibilityMachine::from(&props);
        assert!(machine.is_visible());
        machine.set_is_open(None);
        assert_eq!(
            machine.handle(VisibilityEvent::HoverStart),
            Effect::ScheduleTimer { delay_ms: 50, generation: 1 }
        );
    }
}
