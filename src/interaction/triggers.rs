//! Mapping from host DOM events to visibility events
//!
//! Event names are the host's handler names (`onClick`, `onMouseOver`, ...).
//! Each name maps to at most one handler; when several props name the same
//! event, toggle/hover handlers win over `event_on`, which wins over
//! `event_off`.

use serde::{Deserialize, Serialize};

use crate::models::TooltipProps;
use super::VisibilityEvent;

/// Element an event was raised on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventSource {
    /// The anchor element
    Target,
    /// The tip element itself
    Tip,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionConfig {
    #[serde(default)]
    pub event_on: Option<String>,
    #[serde(default)]
    pub event_off: Option<String>,
    /// When set, hover handling is disabled
    #[serde(default)]
    pub event_toggle: Option<String>,
    #[serde(default)]
    pub use_hover: bool,
    #[serde(default)]
    pub tip_content_hover: bool,
}

impl InteractionConfig {
    /// Plain hover tooltip
    pub fn hover() -> Self {
        Self {
            use_hover: true,
            ..Self::default()
        }
    }

    fn hover_enabled(&self) -> bool {
        self.event_toggle.is_none() && self.use_hover
    }

    /// Visibility event for a DOM event, if any handler is attached
    pub fn event_for(&self, source: EventSource, dom_event: &str) -> Option<VisibilityEvent> {
        match source {
            EventSource::Target => self.target_event(dom_event),
            EventSource::Tip => self.tip_event(dom_event),
        }
    }

    fn target_event(&self, dom_event: &str) -> Option<VisibilityEvent> {
        if self.event_toggle.as_deref() == Some(dom_event) {
            return Some(VisibilityEvent::Toggle);
        }

        if self.hover_enabled() {
            match dom_event {
                "onMouseOver" => return Some(VisibilityEvent::HoverStart),
                "onMouseOut" if self.tip_content_hover => return Some(VisibilityEvent::HoverEnd),
                "onMouseOut" => return Some(VisibilityEvent::Hide),
                "onTouchStart" => return Some(VisibilityEvent::Toggle),
                _ => {}
            }
        }

        if self.event_on.as_deref() == Some(dom_event) {
            Some(VisibilityEvent::Show)
        } else if self.event_off.as_deref() == Some(dom_event) {
            Some(VisibilityEvent::Hide)
        } else {
            None
        }
    }

    fn tip_event(&self, dom_event: &str) -> Option<VisibilityEvent> {
        if !(self.hover_enabled() && self.tip_content_hover) {
            return None;
        }
        match dom_event {
            "onMouseEnter" => Some(VisibilityEvent::HoverStart),
            "onMouseLeave" => Some(VisibilityEvent::HoverEnd),
            _ => None,
        }
    }
}

impl From<&TooltipProps> for InteractionConfig {
    fn from(props: &TooltipProps) -> Self {
        Self {
            event_on: props.event_on.clone(),
            event_off: props.event_off.clone(),
            event_toggle: props.event_toggle.clone(),
            use_hover: props.use_hover,
            tip_content_hover: props.tip_content_hover,
        }
    }
}
