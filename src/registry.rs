//! Driver registry: device id strings to driver factories.

use std::collections::HashMap;

use log::debug;

use crate::driver::{Driver, LayoutDriver};
use crate::error::Error;
use crate::layout::DeviceLayout;
use crate::policy::DecodePolicy;

/// Factory producing a fresh, all-neutral driver instance.
pub type DriverFactory = Box<dyn Fn() -> Box<dyn Driver> + Send + Sync>;

/// Maps the device identifier coming from configuration to the driver that
/// decodes that adapter type.
///
/// The registry holds no telemetry state of its own; every call to
/// [`create`](Registry::create) yields an independent driver, so any number
/// of physical devices of the same or different type can run side by side.
#[derive(Default)]
pub struct Registry {
    factories: HashMap<String, DriverFactory>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Associates a device id with a driver factory.
    ///
    /// Re-registering an id replaces the previous factory, which is what lets
    /// a reloaded profile swap driver sets without restarting.
    pub fn register(&mut self, id: impl Into<String>, factory: DriverFactory) {
        let id = id.into();
        if self.factories.insert(id.clone(), factory).is_some() {
            debug!("replaced driver registration for `{id}`");
        } else {
            debug!("registered driver `{id}`");
        }
    }

    /// Registers a table-driven driver under the layout's own id, with the
    /// reference-compatible policy.
    pub fn register_layout(&mut self, layout: DeviceLayout) {
        self.register_layout_with_policy(layout, DecodePolicy::default());
    }

    pub fn register_layout_with_policy(&mut self, layout: DeviceLayout, policy: DecodePolicy) {
        let id = layout.id.clone();
        self.register(
            id,
            Box::new(move || Box::new(LayoutDriver::with_policy(layout.clone(), policy))),
        );
    }

    /// Builds a fresh driver for `id`.
    pub fn create(&self, id: &str) -> Result<Box<dyn Driver>, Error> {
        let factory = self
            .factories
            .get(id)
            .ok_or_else(|| Error::UnknownDevice(id.to_string()))?;
        debug!("creating driver for `{id}`");
        Ok(factory())
    }

    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    /// Registered ids, sorted for stable display.
    pub fn device_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
