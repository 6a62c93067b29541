//! Locator: one container as explicit process-scoped state, with init and teardown.

use locator_core::{ArgList, Command, Container, Factory};
use tracing::{debug, info};

use crate::config::LocatorConfig;
use crate::scope::Constructible;
use crate::LocatorError;

use super::module::Module;

/// Owns the container for the lifetime of the process (or test). Create it with `init`,
/// pass it (or `&Locator`) to whoever registers and resolves, end it with `teardown`.
/// There is no hidden global instance.
pub struct Locator {
    pub(crate) name: String,
    pub(crate) container: Container,
}

impl Locator {
    /// Empty locator with the default config.
    pub fn new() -> Self {
        Self {
            name: LocatorConfig::default().name,
            container: Container::new(),
        }
    }

    /// Build a locator from config. Every configured scope starts out with an empty factory,
    /// so method registrations can target it right away.
    pub fn init(config: &LocatorConfig) -> Result<Self, LocatorError> {
        config.validate()?;
        let mut container = Container::new();
        for scope in &config.scopes {
            let cmd = container.register_factory(scope.as_str(), Factory::new());
            container.execute(&cmd)?;
        }
        info!(locator = %config.name, scopes = config.scopes.len(), "locator initialised");
        Ok(Self {
            name: config.name.clone(),
            container,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut Container {
        &mut self.container
    }

    /// Register a module (usually one scope). Like `app.register(module)`.
    pub fn register(&mut self, module: &mut dyn Module) -> Result<(), LocatorError> {
        module.register_into(self)
    }

    pub fn execute<C: Command + ?Sized>(&mut self, command: &C) -> Result<(), LocatorError> {
        self.container.execute(command).map_err(Into::into)
    }

    pub fn resolve<R: 'static, Args: ArgList>(
        &self,
        scope: &str,
        name: &str,
        args: Args,
    ) -> Result<R, LocatorError> {
        self.container.resolve(scope, name, args).map_err(Into::into)
    }

    /// Resolve `T` by its own object name (see [`Constructible`]).
    pub fn construct<T, Args>(&self, scope: &str, args: Args) -> Result<T, LocatorError>
    where
        T: Constructible + 'static,
        Args: ArgList,
    {
        self.resolve(scope, T::object_name(), args)
    }

    /// Drop every scope. Returns how many were dropped.
    pub fn teardown(self) -> usize {
        let scopes = self.container.scope_count();
        for scope in self.container.scopes() {
            debug!(locator = %self.name, scope = %scope, "dropping scope");
        }
        info!(locator = %self.name, scopes, "locator torn down");
        scopes
    }
}

impl Default for Locator {
    fn default() -> Self {
        Self::new()
    }
}
