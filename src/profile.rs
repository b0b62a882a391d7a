//! Adapter profiles: layout tables loaded from disk.
//!
//! The hosting application keeps its adapter definitions in a profile file
//! next to the rest of its configuration: JSON in the classic store, TOML
//! for hand-written setups. A profile is just a list of [`DeviceLayout`]
//! tables with an optional [`DecodePolicy`] each, so third-party adapters
//! can be added without touching this crate.
//!
//! Unknown keys are rejected at load time; a typo in a hand-edited profile
//! should fail loudly, not show up later as an axis that never moves.
//!
//! # Example (TOML)
//! ```toml
//! [[devices]]
//! [devices.layout]
//! id = "vintage-pad"
//! name = "Vintage Pad"
//! button_bits = [0, 1, 2]
//! axis_frames = [{ offset = 8, width = 8 }]
//!
//! [devices.policy]
//! buttons = "frame-authoritative"
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::layout::DeviceLayout;
use crate::policy::DecodePolicy;
use crate::registry::Registry;

/// One profile entry: a layout plus the policy its driver should run under.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceEntry {
    pub layout: DeviceLayout,
    #[serde(default)]
    pub policy: DecodePolicy,
}

/// A loadable set of adapter definitions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutProfile {
    #[serde(default)]
    pub devices: Vec<DeviceEntry>,
}

impl LayoutProfile {
    /// Parses and validates a JSON profile.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        let profile: Self = serde_json::from_str(text)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Parses and validates a TOML profile.
    pub fn from_toml(text: &str) -> Result<Self, Error> {
        let profile: Self = toml::from_str(text)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Loads a profile file, picking the format by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let text = fs::read_to_string(path)?;
        let profile = match ext.as_str() {
            "json" => Self::from_json(&text)?,
            "toml" => Self::from_toml(&text)?,
            other => return Err(Error::UnsupportedFormat(other.to_string())),
        };
        debug!(
            "loaded profile `{}` with {} device(s)",
            path.display(),
            profile.devices.len()
        );
        Ok(profile)
    }

    fn validate(&self) -> Result<(), Error> {
        for entry in &self.devices {
            entry.layout.validate()?;
        }
        Ok(())
    }

    /// Registers every entry, replacing any same-id registration.
    pub fn register_into(&self, registry: &mut Registry) {
        for entry in &self.devices {
            registry.register_layout_with_policy(entry.layout.clone(), entry.policy);
        }
    }
}
