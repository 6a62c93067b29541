//! Container: scope name -> Factory. Registration returns commands; resolution constructs.
//!
//! Not synchronized. Construction references are `Rc`-based, so the container is `!Send` and
//! callers that need sharing must serialize access themselves.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::command::{
    Command, RegisterFactoryCommand, RegisterFactoryMethodCommand, RegistrationCommand,
};
use crate::construction::{ConstructionRef, FactoryMethod};
use crate::factory::Factory;
use crate::signature::ArgList;
use crate::ContainerError;

/// One argument of a dynamic-shape registration.
#[derive(Clone, Debug)]
pub enum RegisterArg {
    Factory(Factory),
    Name(String),
    Construction(ConstructionRef),
}

impl RegisterArg {
    fn kind(&self) -> &'static str {
        match self {
            RegisterArg::Factory(_) => "factory",
            RegisterArg::Name(_) => "name",
            RegisterArg::Construction(_) => "construction",
        }
    }
}

impl From<Factory> for RegisterArg {
    fn from(f: Factory) -> Self {
        RegisterArg::Factory(f)
    }
}

impl From<&Factory> for RegisterArg {
    fn from(f: &Factory) -> Self {
        RegisterArg::Factory(f.clone())
    }
}

impl From<&str> for RegisterArg {
    fn from(s: &str) -> Self {
        RegisterArg::Name(s.to_owned())
    }
}

impl From<String> for RegisterArg {
    fn from(s: String) -> Self {
        RegisterArg::Name(s)
    }
}

impl From<ConstructionRef> for RegisterArg {
    fn from(c: ConstructionRef) -> Self {
        RegisterArg::Construction(c)
    }
}

/// Per-scope entry of [`Container::summary`].
#[derive(Clone, Debug, Serialize)]
pub struct ScopeSummary {
    pub scope: String,
    pub methods: Vec<MethodSummary>,
}

#[derive(Clone, Debug, Serialize)]
pub struct MethodSummary {
    pub name: String,
    pub signature: String,
    pub args: Vec<String>,
    pub result: String,
}

/// Scoped factory registry.
#[derive(Debug, Default)]
pub struct Container {
    scopes: HashMap<String, Factory>,
}

impl Container {
    pub fn new() -> Self {
        Self {
            scopes: HashMap::new(),
        }
    }

    /// Build a registration command from an argument list: `[factory]` installs a whole factory,
    /// `[name, construction]` adds one method to an existing scope. The container is not touched.
    pub fn register<S: Into<String>>(
        &self,
        scope: S,
        args: Vec<RegisterArg>,
    ) -> Result<RegistrationCommand, ContainerError> {
        let scope = scope.into();
        let mut args = args.into_iter();
        match (args.next(), args.next(), args.next()) {
            (Some(RegisterArg::Factory(factory)), None, None) => {
                Ok(self.register_factory(scope, factory))
            }
            (Some(RegisterArg::Name(name)), Some(RegisterArg::Construction(c)), None) => {
                Ok(self.register_method(scope, name, c))
            }
            (first, second, third) => {
                let shape = [first, second, third]
                    .iter()
                    .flatten()
                    .map(RegisterArg::kind)
                    .chain(args.map(|a| a.kind()))
                    .collect::<Vec<_>>()
                    .join(", ");
                warn!(scope = %scope, shape = %shape, "rejected registration");
                Err(ContainerError::InvalidRegistration {
                    scope,
                    shape: format!("[{}]", shape),
                })
            }
        }
    }

    /// Command installing `factory` under `scope`. The factory is captured by value.
    pub fn register_factory<S: Into<String>>(&self, scope: S, factory: Factory) -> RegistrationCommand {
        let cmd = RegisterFactoryCommand::new(scope, factory);
        debug!(
            command = %cmd.command_type(),
            scope = %cmd.scope(),
            replaces = self.has_scope(cmd.scope()),
            "staged"
        );
        cmd.into()
    }

    /// Command adding `construction` as `name` to the factory of `scope`.
    /// The scope is looked up when the command executes, not now.
    pub fn register_method<S: Into<String>, N: Into<String>>(
        &self,
        scope: S,
        name: N,
        construction: ConstructionRef,
    ) -> RegistrationCommand {
        let cmd = RegisterFactoryMethodCommand::new(scope, name, construction);
        debug!(
            command = %cmd.command_type(),
            scope = %cmd.scope(),
            name = %cmd.name(),
            scope_present = self.has_scope(cmd.scope()),
            "staged"
        );
        cmd.into()
    }

    pub fn execute<C: Command + ?Sized>(&mut self, command: &C) -> Result<(), ContainerError> {
        command.execute(self)
    }

    /// Construct `name` from `scope` with `args`. `R` and `Args` must match the registered signature.
    pub fn resolve<R: 'static, Args: ArgList>(
        &self,
        scope: &str,
        name: &str,
        args: Args,
    ) -> Result<R, ContainerError> {
        let method = self.factory_method::<R, Args>(scope, name)?;
        debug!(scope = %scope, name = %name, "resolve");
        Ok(method.call(args))
    }

    /// Typed constructor for `name` in `scope`, without invoking it.
    pub fn factory_method<R: 'static, Args: ArgList>(
        &self,
        scope: &str,
        name: &str,
    ) -> Result<FactoryMethod<R, Args>, ContainerError> {
        let factory = self.scopes.get(scope).ok_or_else(|| {
            warn!(scope = %scope, name = %name, "unknown scope");
            ContainerError::UnknownScope(scope.to_owned())
        })?;
        factory.get_factory_method::<R, Args>(name).map_err(|e| {
            warn!(scope = %scope, name = %name, error = %e, "lookup failed");
            e
        })
    }

    pub fn factory(&self, scope: &str) -> Option<&Factory> {
        self.scopes.get(scope)
    }

    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes.contains_key(scope)
    }

    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    /// Scope names, sorted.
    pub fn scopes(&self) -> Vec<&str> {
        let mut scopes: Vec<&str> = self.scopes.keys().map(String::as_str).collect();
        scopes.sort_unstable();
        scopes
    }

    /// Every scope with its methods and their signatures, sorted by name.
    pub fn summary(&self) -> Vec<ScopeSummary> {
        let mut out: Vec<ScopeSummary> = self
            .scopes
            .iter()
            .map(|(scope, factory)| {
                let mut methods: Vec<MethodSummary> = factory
                    .iter()
                    .map(|(name, c)| {
                        let signature = c.signature();
                        MethodSummary {
                            name: name.clone(),
                            signature: signature.to_string(),
                            args: signature.args().iter().map(|t| t.name().to_string()).collect(),
                            result: signature.result().name().to_string(),
                        }
                    })
                    .collect();
                methods.sort_by(|a, b| a.name.cmp(&b.name));
                ScopeSummary {
                    scope: scope.clone(),
                    methods,
                }
            })
            .collect();
        out.sort_by(|a, b| a.scope.cmp(&b.scope));
        out
    }

    /// Summary as JSON: `{ "scopes": [ { "scope", "methods": [ { "name", "signature", "args", "result" } ] } ] }`.
    pub fn manifest(&self) -> serde_json::Value {
        serde_json::json!({ "scopes": self.summary() })
    }

    pub(crate) fn install_factory(&mut self, scope: &str, factory: Factory) -> Option<Factory> {
        self.scopes.insert(scope.to_owned(), factory)
    }

    pub(crate) fn factory_mut(&mut self, scope: &str) -> Result<&mut Factory, ContainerError> {
        self.scopes
            .get_mut(scope)
            .ok_or_else(|| ContainerError::UnknownScope(scope.to_owned()))
    }
}
