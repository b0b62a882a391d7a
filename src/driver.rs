//! Adapter drivers: one telemetry line in, canonical state out.

use log::trace;

use crate::decode::{decode_axis, decode_button};
use crate::layout::DeviceLayout;
use crate::policy::{AxisPolicy, ButtonPolicy, DecodePolicy};
use crate::state::{ButtonState, GamepadState};

/// Capability contract shared by every adapter driver.
///
/// `read` and `reset` mutate the internally owned state; `snapshot` and
/// `describe` are pure reads. `read` must stay total: any line, including
/// an empty one, folds into the state without failing.
pub trait Driver: Send + std::fmt::Debug {
    fn read(&mut self, line: &str);
    fn snapshot(&self) -> GamepadState;
    fn reset(&mut self);
    fn describe(&self) -> &str;
}

/// Table-driven [`Driver`] covering every adapter whose frame is described
/// by a [`DeviceLayout`].
///
/// Devices whose decoding genuinely differs get a layout variant (see
/// [`AxisEncoding`](crate::layout::AxisEncoding)), not a new driver type.
#[derive(Debug)]
pub struct LayoutDriver {
    layout: DeviceLayout,
    policy: DecodePolicy,
    state: GamepadState,
    info: String,
}

impl LayoutDriver {
    /// Creates a driver with the reference-compatible [`DecodePolicy`].
    pub fn new(layout: DeviceLayout) -> Self {
        Self::with_policy(layout, DecodePolicy::default())
    }

    pub fn with_policy(layout: DeviceLayout, policy: DecodePolicy) -> Self {
        let info = format!(
            "{}. {} Buttons, {} Axes",
            layout.name,
            layout.button_count(),
            layout.axis_count()
        );
        let state = GamepadState::neutral(layout.axis_count(), layout.button_count());
        Self {
            layout,
            policy,
            state,
            info,
        }
    }

    pub fn layout(&self) -> &DeviceLayout {
        &self.layout
    }

    pub fn policy(&self) -> DecodePolicy {
        self.policy
    }
}

impl Driver for LayoutDriver {
    fn read(&mut self, line: &str) {
        for (idx, &bit) in self.layout.button_bits.iter().enumerate() {
            if decode_button(line, bit) {
                self.state.buttons[idx] = ButtonState::ON;
            } else if self.policy.buttons == ButtonPolicy::FrameAuthoritative {
                self.state.buttons[idx] = ButtonState::OFF;
            }
        }

        for (idx, frame) in self.layout.axis_frames.iter().enumerate() {
            let value = decode_axis(line, frame, self.layout.axis_base, self.layout.axis_encoding);
            // A centered decode is skipped under SkipZero; the previous
            // value stands until a frame moves the axis or reset runs.
            if value != 0.0 || self.policy.axes == AxisPolicy::FrameAuthoritative {
                self.state.axes[idx] = value;
            }
        }

        trace!("{}: folded {}-char frame", self.layout.id, line.len());
    }

    fn snapshot(&self) -> GamepadState {
        self.state.clone()
    }

    fn reset(&mut self) {
        self.state.clear();
    }

    fn describe(&self) -> &str {
        &self.info
    }
}
