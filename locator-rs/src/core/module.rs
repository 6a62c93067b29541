//! Module: register into a locator. A module stages and executes its own commands.

use crate::LocatorError;

use super::locator::Locator;

/// Module: bulk registration of constructors into a locator (usually one scope per module).
pub trait Module {
    fn register_into(&mut self, locator: &mut Locator) -> Result<(), LocatorError>;
}
