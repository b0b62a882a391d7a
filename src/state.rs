//! Canonical gamepad read model.
//!
//! [`GamepadState`] is the device-independent representation every adapter
//! driver decodes into: ordered axes normalized to `[-1.0, 1.0]` and ordered
//! button states. Consumers never see the live structure a driver mutates;
//! they receive **owned copies** via [`Driver::snapshot`](crate::Driver::snapshot),
//! so a reader on another thread can never observe a half-decoded frame.
//!
//! # Conventions
//! - Axis and button order is fixed by the device layout and stable for the
//!   lifetime of a driver instance.
//! - A button's `value` is `1` exactly when `pressed` is true, mirroring the
//!   browser gamepad model the downstream renderer consumes.

use serde::{Deserialize, Serialize};

/// Pressed/value pair for a single button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonState {
    pub pressed: bool,
    pub value: u8,
}

impl ButtonState {
    /// The asserted state (`pressed`, `value == 1`).
    pub const ON: ButtonState = ButtonState {
        pressed: true,
        value: 1,
    };

    /// The released state (`!pressed`, `value == 0`).
    pub const OFF: ButtonState = ButtonState {
        pressed: false,
        value: 0,
    };
}

/// Snapshot of one controller: ordered axes and ordered buttons.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GamepadState {
    pub axes: Vec<f32>,
    pub buttons: Vec<ButtonState>,
}

impl GamepadState {
    /// Creates an all-neutral state with the given channel counts.
    pub fn neutral(axis_count: usize, button_count: usize) -> Self {
        Self {
            axes: vec![0.0; axis_count],
            buttons: vec![ButtonState::OFF; button_count],
        }
    }

    /// Returns every axis to center and every button to released.
    pub fn clear(&mut self) {
        self.axes.fill(0.0);
        self.buttons.fill(ButtonState::OFF);
    }

    /// Gets the value of an axis (0.0 if out of range).
    #[inline]
    pub fn axis(&self, idx: usize) -> f32 {
        self.axes.get(idx).copied().unwrap_or(0.0)
    }

    /// Gets the pressed flag of a button (false if out of range).
    #[inline]
    pub fn button(&self, idx: usize) -> bool {
        self.buttons.get(idx).map(|b| b.pressed).unwrap_or(false)
    }
}
