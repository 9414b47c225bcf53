//! Drawer open/close lifecycle shared by dropdowns and modals.
//!
//! A drawer moves between two stable states through two transient ones. The
//! transient states exist so the caller can render the animation classes and
//! advance to the stable state once the host reports the animation finished.
//! Nothing here schedules that report.

use std::fmt;
use std::str::FromStr;

use semantic_markup::ClassList;
use serde::{Deserialize, Serialize};

use crate::TokenParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Open/close lifecycle state of a drawer.
pub enum DrawerState {
    /// Hidden. Initial state.
    Closed,
    /// Opening animation in progress.
    Opening,
    /// Fully open.
    Opened,
    /// Closing animation in progress.
    Closing,
}

impl Default for DrawerState {
    fn default() -> Self {
        Self::Closed
    }
}

impl DrawerState {
    /// All states, in lifecycle order.
    pub const ALL: [DrawerState; 4] = [Self::Closed, Self::Opening, Self::Opened, Self::Closing];

    /// Whether the drawer is open or opening.
    pub fn is_toggled(self) -> bool {
        matches!(self, Self::Opening | Self::Opened)
    }

    /// Whether an animation is in progress.
    pub fn is_transitioning(self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }

    /// Whether any part of the drawer is on screen.
    pub fn is_visible(self) -> bool {
        self != Self::Closed
    }

    /// Next state after an open (`true`) or close (`false`) request.
    ///
    /// Redundant requests leave the state unchanged.
    pub fn toggle(self, requested_open: bool) -> Self {
        match (requested_open, self.is_toggled()) {
            (true, false) => Self::Opening,
            (false, true) => Self::Closing,
            _ => self,
        }
    }

    /// Next state once the host reports the running animation finished.
    pub fn complete_transition(self) -> Self {
        match self {
            Self::Opening => Self::Opened,
            Self::Closing => Self::Closed,
            stable => stable,
        }
    }

    /// Stable token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Opening => "opening",
            Self::Opened => "opened",
            Self::Closing => "closing",
        }
    }

    /// Direction word of the running animation, if any.
    pub fn direction(self) -> Option<&'static str> {
        match self {
            Self::Opening => Some("in"),
            Self::Closing => Some("out"),
            Self::Closed | Self::Opened => None,
        }
    }

    /// Root classes derived from the state (`active`, `visible`).
    pub fn root_classes(self) -> ClassList {
        ClassList::new()
            .add_if(self.is_toggled(), "active")
            .add_if(self.is_visible(), "visible")
    }

    /// Animated-region classes: `transition`, `visible`/`hidden`, and for
    /// transient states `animating <transition> in|out`.
    pub fn transition_classes(self, transition: Transition) -> ClassList {
        let classes = ClassList::from("transition")
            .add(if self.is_visible() { "visible" } else { "hidden" });
        match self.direction() {
            Some(direction) => classes
                .add("animating")
                .add(transition.class())
                .add(direction),
            None => classes,
        }
    }
}

/// Free-function form of [`DrawerState::toggle`].
pub fn toggle(current: DrawerState, requested_open: bool) -> DrawerState {
    current.toggle(requested_open)
}

/// Free-function form of [`DrawerState::complete_transition`].
pub fn complete_transition(current: DrawerState) -> DrawerState {
    current.complete_transition()
}

impl fmt::Display for DrawerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for DrawerState {
    type Err = TokenParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.token() == input.trim())
            .ok_or_else(|| TokenParseError::unknown("drawer state", input))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Interaction that opens and closes a drawer. Fixed per widget instance.
pub enum ToggleEvent {
    /// Click toggles.
    #[serde(rename = "click")]
    OnClick,
    /// Pointer enter opens, pointer leave closes.
    #[serde(rename = "hover")]
    OnHover,
    /// Focus opens, blur closes.
    #[serde(rename = "focus")]
    OnFocus,
}

impl Default for ToggleEvent {
    fn default() -> Self {
        Self::OnClick
    }
}

impl ToggleEvent {
    /// Stable token.
    pub fn token(self) -> &'static str {
        match self {
            Self::OnClick => "click",
            Self::OnHover => "hover",
            Self::OnFocus => "focus",
        }
    }
}

impl FromStr for ToggleEvent {
    type Err = TokenParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim() {
            "click" => Ok(Self::OnClick),
            "hover" => Ok(Self::OnHover),
            "focus" => Ok(Self::OnFocus),
            _ => Err(TokenParseError::unknown("toggle event", input)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Animation played while a drawer opens or closes.
pub enum Transition {
    /// `slide down`
    SlideDown,
    /// `slide up`
    SlideUp,
    /// `fade`
    Fade,
    /// `scale`
    Scale,
    /// `drop`
    Drop,
}

impl Default for Transition {
    fn default() -> Self {
        Self::SlideDown
    }
}

impl Transition {
    /// Animation class words.
    pub fn class(self) -> &'static str {
        match self {
            Self::SlideDown => "slide down",
            Self::SlideUp => "slide up",
            Self::Fade => "fade",
            Self::Scale => "scale",
            Self::Drop => "drop",
        }
    }

    /// Stable token (`slide-down`).
    pub fn token(self) -> &'static str {
        match self {
            Self::SlideDown => "slide-down",
            Self::SlideUp => "slide-up",
            Self::Fade => "fade",
            Self::Scale => "scale",
            Self::Drop => "drop",
        }
    }
}

impl FromStr for Transition {
    type Err = TokenParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        [
            Self::SlideDown,
            Self::SlideUp,
            Self::Fade,
            Self::Scale,
            Self::Drop,
        ]
        .into_iter()
        .find(|transition| transition.token() == input.trim())
        .ok_or_else(|| TokenParseError::unknown("transition", input))
    }
}
