//! Pointer and keyboard events consumed by the interaction controller.
//!
//! Positions are screen pixels relative to the canvas container's top-left corner.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Ctrl on most platforms, Cmd on macOS.
    pub fn is_multi_select(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Pointer event on the canvas background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Up {
        position: Point,
    },
    Move {
        position: Point,
    },
    Scroll {
        position: Point,
        delta: Vec2,
    },
    /// The pointer left the canvas or window.
    Leave,
}

/// Keyboard event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "key", rename_all = "snake_case")]
pub enum KeyEvent {
    Pressed(String),
    Released(String),
}
