//! Deferred registration commands. Built by the container, executed by the caller.

use std::fmt;

use tracing::debug;

use crate::construction::ConstructionRef;
use crate::container::Container;
use crate::factory::Factory;
use crate::ContainerError;

/// Diagnostic tag of a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandType {
    RegisterFactory,
    RegisterFactoryMethod,
}

impl CommandType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandType::RegisterFactory => "RegisterFactory",
            CommandType::RegisterFactoryMethod => "RegisterFactoryMethod",
        }
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pending registration. Nothing changes until `execute`; executing twice reapplies the same write.
pub trait Command {
    fn execute(&self, container: &mut Container) -> Result<(), ContainerError>;

    fn command_type(&self) -> CommandType;

    /// Scope the command writes to.
    fn scope(&self) -> &str;
}

/// Install a whole factory under a scope, replacing whatever was there.
#[derive(Clone, Debug)]
pub struct RegisterFactoryCommand {
    scope: String,
    factory: Factory,
}

impl RegisterFactoryCommand {
    pub fn new<S: Into<String>>(scope: S, factory: Factory) -> Self {
        Self {
            scope: scope.into(),
            factory,
        }
    }
}

impl Command for RegisterFactoryCommand {
    fn execute(&self, container: &mut Container) -> Result<(), ContainerError> {
        let replaced = container.install_factory(&self.scope, self.factory.clone());
        debug!(
            command = %self.command_type(),
            scope = %self.scope,
            methods = self.factory.size(),
            replaced = replaced.is_some(),
            "executed"
        );
        Ok(())
    }

    fn command_type(&self) -> CommandType {
        CommandType::RegisterFactory
    }

    fn scope(&self) -> &str {
        &self.scope
    }
}

/// Install one named constructor into the factory of an existing scope.
#[derive(Clone, Debug)]
pub struct RegisterFactoryMethodCommand {
    scope: String,
    name: String,
    construction: ConstructionRef,
}

impl RegisterFactoryMethodCommand {
    pub fn new<S: Into<String>, N: Into<String>>(
        scope: S,
        name: N,
        construction: ConstructionRef,
    ) -> Self {
        Self {
            scope: scope.into(),
            name: name.into(),
            construction,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Command for RegisterFactoryMethodCommand {
    fn execute(&self, container: &mut Container) -> Result<(), ContainerError> {
        let factory = container.factory_mut(&self.scope)?;
        let replaced = factory.register(self.name.clone(), self.construction.clone());
        let unchanged = replaced
            .as_ref()
            .is_some_and(|previous| previous.same_as(&self.construction));
        debug!(
            command = %self.command_type(),
            scope = %self.scope,
            name = %self.name,
            replaced = replaced.is_some(),
            unchanged,
            "executed"
        );
        Ok(())
    }

    fn command_type(&self) -> CommandType {
        CommandType::RegisterFactoryMethod
    }

    fn scope(&self) -> &str {
        &self.scope
    }
}

/// The closed set of commands the container hands out.
#[derive(Clone, Debug)]
pub enum RegistrationCommand {
    RegisterFactory(RegisterFactoryCommand),
    RegisterFactoryMethod(RegisterFactoryMethodCommand),
}

impl Command for RegistrationCommand {
    fn execute(&self, container: &mut Container) -> Result<(), ContainerError> {
        match self {
            RegistrationCommand::RegisterFactory(c) => c.execute(container),
            RegistrationCommand::RegisterFactoryMethod(c) => c.execute(container),
        }
    }

    fn command_type(&self) -> CommandType {
        match self {
            RegistrationCommand::RegisterFactory(c) => c.command_type(),
            RegistrationCommand::RegisterFactoryMethod(c) => c.command_type(),
        }
    }

    fn scope(&self) -> &str {
        match self {
            RegistrationCommand::RegisterFactory(c) => c.scope(),
            RegistrationCommand::RegisterFactoryMethod(c) => c.scope(),
        }
    }
}

impl From<RegisterFactoryCommand> for RegistrationCommand {
    fn from(c: RegisterFactoryCommand) -> Self {
        RegistrationCommand::RegisterFactory(c)
    }
}

impl From<RegisterFactoryMethodCommand> for RegistrationCommand {
    fn from(c: RegisterFactoryMethodCommand) -> Self {
        RegistrationCommand::RegisterFactoryMethod(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_command_creates_scope() {
        let mut container = Container::new();
        let cmd = RegisterFactoryCommand::new("A", Factory::new().with("one", || 1));
        assert_eq!(cmd.command_type(), CommandType::RegisterFactory);
        assert_eq!(cmd.scope(), "A");
        cmd.execute(&mut container).unwrap();
        assert_eq!(container.factory("A").unwrap().size(), 1);
    }

    #[test]
    fn method_command_needs_scope() {
        let mut container = Container::new();
        let cmd = RegisterFactoryMethodCommand::new("A", "one", ConstructionRef::new(|| 1));
        match cmd.execute(&mut container) {
            Err(ContainerError::UnknownScope(scope)) => assert_eq!(scope, "A"),
            _ => panic!("expected UnknownScope"),
        }
        assert_eq!(container.scope_count(), 0);
    }

    #[test]
    fn method_command_reexecutes_the_same_reference() {
        let mut container = Container::new();
        RegisterFactoryCommand::new("A", Factory::new())
            .execute(&mut container)
            .unwrap();
        let construction = ConstructionRef::new(|| 5u8);
        let cmd = RegisterFactoryMethodCommand::new("A", "five", construction.clone());
        cmd.execute(&mut container).unwrap();
        cmd.execute(&mut container).unwrap();

        let factory = container.factory("A").unwrap();
        assert_eq!(factory.size(), 1);
        assert_eq!(cmd.name(), "five");
        assert_eq!(factory.get_factory_method::<u8, ()>("five").unwrap().call(()), 5);
        assert!(construction.same_as(&construction.clone()));
    }

    #[test]
    fn tags_display() {
        assert_eq!(CommandType::RegisterFactory.to_string(), "RegisterFactory");
        let cmd: RegistrationCommand =
            RegisterFactoryMethodCommand::new("A", "x", ConstructionRef::new(|| ())).into();
        assert_eq!(cmd.command_type().to_string(), "RegisterFactoryMethod");
        assert_eq!(cmd.scope(), "A");
    }
}
