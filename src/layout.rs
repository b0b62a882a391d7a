//! Declarative device layouts.
//!
//! A [`DeviceLayout`] is the complete description of how one adapter type
//! packs controller state into a telemetry line: which character positions
//! carry button flags, where each fixed-width axis field sits, the raw value
//! that means "centered", and whether an axis is wired inverted. Layouts are
//! plain data: new adapter types are added by writing a table (in code or in
//! a profile file), not by writing a new driver.
//!
//! Layouts are immutable once handed to a driver; button and axis counts are
//! derived from the table lengths, so the state a driver allocates always
//! matches its layout.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How a device packs an analog axis into its frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AxisEncoding {
    /// Unsigned field centered on `axis_base`: `(raw - base) / base`.
    #[default]
    OffsetBinary,
    /// Sign-extended field scaled by `axis_base`; center transmits raw 0.
    TwosComplement,
}

/// Fixed-position bit field carrying one axis value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AxisFrame {
    /// Character offset of the field's first bit.
    pub offset: usize,
    /// Field width in characters.
    pub width: usize,
    /// Negate the normalized value.
    #[serde(default)]
    pub invert: bool,
}

/// Frame format of one adapter type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceLayout {
    /// Identifier the registry and configuration layer select drivers by.
    pub id: String,
    /// User-facing adapter name.
    pub name: String,
    /// Bit position of each button flag, index-aligned with the button order.
    pub button_bits: Vec<usize>,
    /// Axis fields, index-aligned with the axis order.
    #[serde(default)]
    pub axis_frames: Vec<AxisFrame>,
    /// Raw integer corresponding to an axis's physical center.
    #[serde(default = "default_axis_base")]
    pub axis_base: u32,
    #[serde(default)]
    pub axis_encoding: AxisEncoding,
}

/// Center value of the common 8-bit unsigned axis field.
fn default_axis_base() -> u32 {
    128
}

impl DeviceLayout {
    #[inline]
    pub fn button_count(&self) -> usize {
        self.button_bits.len()
    }

    #[inline]
    pub fn axis_count(&self) -> usize {
        self.axis_frames.len()
    }

    /// Checks a layout loaded from external data.
    ///
    /// Tables written in code are trusted; profile files are hand-edited, so
    /// fields that would make decoding meaningless (empty axis fields, a zero
    /// center value) are rejected here instead of surfacing as dead axes.
    pub fn validate(&self) -> Result<(), Error> {
        if self.id.is_empty() {
            return Err(Error::InvalidLayout {
                id: self.name.clone(),
                reason: "empty device id".into(),
            });
        }
        for (idx, frame) in self.axis_frames.iter().enumerate() {
            if frame.width == 0 || frame.width > 32 {
                return Err(Error::InvalidLayout {
                    id: self.id.clone(),
                    reason: format!("axis {idx} has unusable width {}", frame.width),
                });
            }
        }
        if !self.axis_frames.is_empty() && self.axis_base == 0 {
            return Err(Error::InvalidLayout {
                id: self.id.clone(),
                reason: "axis_base must be non-zero for a device with axes".into(),
            });
        }
        Ok(())
    }
}
