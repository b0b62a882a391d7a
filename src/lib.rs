//! RetroTap — canonical gamepad state from controller-bus telemetry.
//!
//! Hardware adapters that tap retro console controller buses stream noisy,
//! line-oriented telemetry; each adapter type packs buttons and axes with its
//! own bit framing. RetroTap decodes those lines behind one stable driver
//! abstraction and hands consumers a normalized, device-independent
//! [`GamepadState`], so rendering, remapping and broadcast layers never need
//! to know which adapter produced the data.
//!
//! ```
//! use retrotap::devices::builtin_registry;
//! use retrotap::Driver;
//!
//! let registry = builtin_registry();
//! let mut driver = registry.create("retrospy-gc").unwrap();
//! driver.read("001000000000000");
//! assert!(driver.snapshot().button(0));
//! ```

pub mod decode;
pub mod devices;
pub mod driver;
pub mod error;
pub mod layout;
pub mod policy;
pub mod profile;
pub mod registry;
pub mod state;

pub use driver::*;
pub use error::*;
pub use layout::*;
pub use policy::*;
pub use registry::*;
pub use state::*;
