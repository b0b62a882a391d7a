//! Built-in adapter layouts.
//!
//! Concrete device tables for the adapter families this crate ships support
//! for. Everything here is data handed to the shared
//! [`LayoutDriver`](crate::driver::LayoutDriver); adding an adapter type
//! means adding a table, not a driver.

pub mod retrospy;

use crate::registry::Registry;

/// Registry pre-populated with every built-in adapter type.
pub fn builtin_registry() -> Registry {
    let mut registry = Registry::new();
    retrospy::register(&mut registry);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_cover_the_retrospy_family() {
        let registry = builtin_registry();
        for id in [
            retrospy::GAMECUBE,
            retrospy::NINTENDO_64,
            retrospy::SUPER_NES,
            retrospy::NES,
        ] {
            assert!(registry.contains(id), "missing builtin `{id}`");
            assert!(registry.create(id).is_ok());
        }
    }
}
