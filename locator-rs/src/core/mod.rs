//! Core: Locator and the Module trait.

pub mod locator;
pub mod module;

pub use locator::Locator;
pub use module::Module;
