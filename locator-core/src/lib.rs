//! Locator core: scoped factories, deferred registration commands, signature-checked resolution.

pub mod command;
pub mod construction;
pub mod container;
pub mod factory;
pub mod signature;

pub use command::{
    Command, CommandType, RegisterFactoryCommand, RegisterFactoryMethodCommand,
    RegistrationCommand,
};
pub use construction::{ConstructionRef, FactoryMethod, IntoConstruction};
pub use container::{Container, MethodSummary, RegisterArg, ScopeSummary};
pub use factory::Factory;
pub use signature::{ArgList, Signature, TypeTag};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContainerError {
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("unknown scope: {0}")]
    UnknownScope(String),
    #[error("wrong registration type for scope {scope}: {shape}")]
    InvalidRegistration { scope: String, shape: String },
    #[error("signature mismatch for {name}: registered {registered}, requested {requested}")]
    SignatureMismatch {
        name: String,
        registered: String,
        requested: String,
    },
}

/// Stage a registration: `register!(c, scope, factory)` or `register!(c, scope, name, f)`.
/// Returns the command; nothing changes until it is executed.
#[macro_export]
macro_rules! register {
    ($container:expr, $scope:expr, $factory:expr) => {
        $container.register_factory($scope, $factory)
    };
    ($container:expr, $scope:expr, $name:expr, $f:expr) => {
        $container.register_method($scope, $name, $crate::ConstructionRef::new($f))
    };
}

/// Construct with loose arguments: `resolve!(c, "A", "int", 2, 33.0)`.
#[macro_export]
macro_rules! resolve {
    ($container:expr, $scope:expr, $name:expr $(, $arg:expr)* $(,)?) => {
        $container.resolve($scope, $name, ($($arg,)*))
    };
}
