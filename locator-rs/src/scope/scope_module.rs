//! Scope module: `.method()` / `.constructible()` then `locator.register(&mut module)`.

use locator_core::{ArgList, ConstructionRef, Factory, IntoConstruction};
use tracing::debug;

use crate::core::{Locator, Module};
use crate::scope::Constructible;
use crate::LocatorError;

/// Constructors for one scope. By default registering replaces the scope with a fresh factory
/// holding exactly these methods; `.extend()` adds them to the scope already in the locator.
pub struct ScopeModule {
    pub(crate) scope: String,
    pub(crate) methods: Vec<(String, ConstructionRef)>,
    pub(crate) extend: bool,
}

impl ScopeModule {
    pub fn new(scope: &str) -> Self {
        Self {
            scope: scope.to_string(),
            methods: Vec::new(),
            extend: false,
        }
    }

    /// Add a constructor under `name`.
    pub fn method<Args, R, F>(mut self, name: &str, f: F) -> Self
    where
        Args: ArgList,
        R: 'static,
        F: IntoConstruction<Args, R>,
    {
        self.methods.push((name.to_string(), ConstructionRef::new(f)));
        self
    }

    /// Add an already erased constructor.
    pub fn construction(mut self, name: &str, construction: ConstructionRef) -> Self {
        self.methods.push((name.to_string(), construction));
        self
    }

    /// Add a constructor for `T` under `T::object_name()`.
    pub fn constructible<T, Args, F>(self, f: F) -> Self
    where
        T: Constructible + 'static,
        Args: ArgList,
        F: IntoConstruction<Args, T>,
    {
        let name = T::object_name();
        self.method(name, f)
    }

    /// Add to the existing scope instead of replacing it. The scope must exist at register time.
    pub fn extend(mut self) -> Self {
        self.extend = true;
        self
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }
}

impl Module for ScopeModule {
    fn register_into(&mut self, locator: &mut Locator) -> Result<(), LocatorError> {
        let count = self.methods.len();
        if self.extend {
            for (name, construction) in &self.methods {
                let cmd = locator.container().register_method(
                    self.scope.as_str(),
                    name.as_str(),
                    construction.clone(),
                );
                locator.execute(&cmd)?;
            }
        } else {
            let mut factory = Factory::new();
            for (name, construction) in &self.methods {
                factory.register(name.as_str(), construction.clone());
            }
            let cmd = locator.container().register_factory(self.scope.as_str(), factory);
            locator.execute(&cmd)?;
        }
        debug!(scope = %self.scope(), methods = count, extend = self.extend, "module registered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use locator_core::ContainerError;

    #[derive(Debug, PartialEq)]
    struct Widget(u32);

    impl Constructible for Widget {
        fn object_name() -> &'static str {
            "widget"
        }
    }

    #[test]
    fn replace_mode_installs_a_fresh_factory() {
        let mut locator = Locator::new();
        let mut first = ScopeModule::new("A").method("old", || 0u32);
        locator.register(&mut first).unwrap();
        let mut second = ScopeModule::new("A")
            .method("new", || 1u32)
            .constructible::<Widget, _, _>(Widget);
        locator.register(&mut second).unwrap();

        let factory = locator.container().factory("A").unwrap();
        assert_eq!(factory.names(), vec!["new", "widget"]);
        let w: Widget = locator.construct("A", (7u32,)).unwrap();
        assert_eq!(w, Widget(7));
    }

    #[test]
    fn extend_mode_needs_the_scope() {
        let mut locator = Locator::new();
        let mut module = ScopeModule::new("A").method("one", || 1).extend();
        match locator.register(&mut module) {
            Err(LocatorError::Container(ContainerError::UnknownScope(scope))) => {
                assert_eq!(scope, "A")
            }
            _ => panic!("expected UnknownScope"),
        }
        assert_eq!(locator.container().scope_count(), 0);
    }

    #[test]
    fn registering_twice_keeps_the_methods() {
        let mut locator = Locator::new();
        let mut module = ScopeModule::new("A").method("one", || 1i32);
        locator.register(&mut module).unwrap();
        locator.register(&mut module).unwrap();

        assert_eq!(locator.container().factory("A").unwrap().size(), 1);
        let one: i32 = locator.resolve("A", "one", ()).unwrap();
        assert_eq!(one, 1);
    }

    #[test]
    fn extend_retry_after_scope_exists() {
        let mut locator = Locator::new();
        let mut module = ScopeModule::new("A")
            .method("one", || 1i32)
            .method("two", || 2i32)
            .extend();
        assert!(locator.register(&mut module).is_err());

        let mut base = ScopeModule::new("A");
        locator.register(&mut base).unwrap();
        locator.register(&mut module).unwrap();

        assert_eq!(locator.container().factory("A").unwrap().names(), vec!["one", "two"]);
        let two: i32 = locator.resolve("A", "two", ()).unwrap();
        assert_eq!(two, 2);
    }
}
