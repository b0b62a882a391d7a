//! Frame application policies.
//!
//! The RetroSpy-family adapters this crate grew up on have a quirk: a frame
//! only ever *asserts* state. A button bit that reads clear does not release
//! the button, and an axis field that decodes to center does not re-center
//! the axis; only an explicit reset does either. Whether that is protocol
//! intent or a firmware accident is unresolved upstream, so the behavior is
//! kept as the default for wire compatibility and exposed here as a policy a
//! profile can override instead of being baked into the driver.

use serde::{Deserialize, Serialize};

/// How `read` treats a button bit that is not set in a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonPolicy {
    /// A button observed pressed stays pressed until reset, even when later
    /// frames show the bit clear. Reference-adapter behavior.
    #[default]
    Latching,
    /// Every frame carries the full button state; a clear bit releases.
    FrameAuthoritative,
}

/// How `read` treats an axis field that decodes to exactly `0.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AxisPolicy {
    /// A centered decode leaves the axis at its previous value; only reset
    /// re-centers. Reference-adapter behavior.
    #[default]
    SkipZero,
    /// Every frame carries the full axis state; a centered decode re-centers.
    FrameAuthoritative,
}

/// Per-driver pairing of button and axis policies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecodePolicy {
    pub buttons: ButtonPolicy,
    pub axes: AxisPolicy,
}

impl DecodePolicy {
    /// Both channels re-asserted from every frame.
    pub const FRAME_AUTHORITATIVE: DecodePolicy = DecodePolicy {
        buttons: ButtonPolicy::FrameAuthoritative,
        axes: AxisPolicy::FrameAuthoritative,
    };
}
