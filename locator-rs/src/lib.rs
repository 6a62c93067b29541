//! Locator Rust facade: Locator, Module trait, scope modules, config and logging on locator-core.

extern crate self as locator_rs;

pub mod config;
pub mod core;
pub mod logging;
pub mod scope;

pub use config::LocatorConfig;
pub use crate::core::{Locator, Module};
pub use scope::{Constructible, ScopeModule};
pub use locator_core::{
    register, resolve, ArgList, Command, CommandType, ConstructionRef, Container, ContainerError,
    Factory, FactoryMethod, RegisterArg, RegistrationCommand, Signature,
};
pub use locator_rs_macros::Constructible;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocatorError {
    #[error(transparent)]
    Container(#[from] ContainerError),
    #[error("invalid config JSON: {0}")]
    Config(#[from] serde_json::Error),
    #[error("config read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("logging init failed: {0}")]
    Logging(String),
}
