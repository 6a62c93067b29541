//! Scope modules: build a scope's constructors in one place, then `locator.register(module)`.

pub mod constructible;
pub mod scope_module;

pub use constructible::Constructible;
pub use scope_module::ScopeModule;
