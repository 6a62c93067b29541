//! Factory: object name -> construction reference, within one scope.

use std::collections::HashMap;

use crate::construction::{ConstructionRef, FactoryMethod, IntoConstruction};
use crate::signature::{ArgList, Signature};
use crate::ContainerError;

/// Named construction entry points. Re-registering a name replaces the previous reference.
/// `Clone` is a value snapshot of the map; constructors themselves are shared and immutable.
#[derive(Clone, Debug, Default)]
pub struct Factory {
    methods: HashMap<String, ConstructionRef>,
}

impl Factory {
    pub fn new() -> Self {
        Self {
            methods: HashMap::new(),
        }
    }

    /// Store `construction` under `name`. Returns the reference it replaced, if any.
    pub fn register<N: Into<String>>(
        &mut self,
        name: N,
        construction: ConstructionRef,
    ) -> Option<ConstructionRef> {
        self.methods.insert(name.into(), construction)
    }

    pub fn register_fn<N, Args, R, F>(&mut self, name: N, f: F) -> Option<ConstructionRef>
    where
        N: Into<String>,
        Args: ArgList,
        R: 'static,
        F: IntoConstruction<Args, R>,
    {
        self.register(name, ConstructionRef::new(f))
    }

    /// Builder form of `register_fn`: `Factory::new().with("int", make_int)`.
    pub fn with<N, Args, R, F>(mut self, name: N, f: F) -> Self
    where
        N: Into<String>,
        Args: ArgList,
        R: 'static,
        F: IntoConstruction<Args, R>,
    {
        self.register_fn(name, f);
        self
    }

    /// Constructor registered under `name`, typed as `fn(Args) -> R`.
    /// The requested signature must be the one used at registration.
    pub fn get_factory_method<R: 'static, Args: ArgList>(
        &self,
        name: &str,
    ) -> Result<FactoryMethod<R, Args>, ContainerError> {
        let construction = self
            .methods
            .get(name)
            .ok_or_else(|| ContainerError::NotFound(name.to_owned()))?;
        construction
            .typed::<R, Args>()
            .ok_or_else(|| ContainerError::SignatureMismatch {
                name: name.to_owned(),
                registered: construction.signature().to_string(),
                requested: Signature::of::<R, Args>().to_string(),
            })
    }

    pub fn signature(&self, name: &str) -> Option<&Signature> {
        self.methods.get(name).map(ConstructionRef::signature)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Number of registered object names.
    pub fn size(&self) -> usize {
        self.methods.len()
    }

    pub fn len(&self) -> usize {
        self.size()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&String, &ConstructionRef)> {
        self.methods.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_int(i: i32, x: f64) -> i32 {
        i + x as i32
    }

    #[test]
    fn register_and_get() {
        let factory = Factory::new().with("int", make_int);
        let method = factory.get_factory_method::<i32, (i32, f64)>("int").unwrap();
        assert_eq!(method.call((2, 33.0)), 35);
        assert_eq!(factory.size(), 1);
        assert!(factory.contains("int"));
    }

    #[test]
    fn overwrite_keeps_size_and_last_write() {
        let mut factory = Factory::new();
        assert!(factory.register_fn("n", || 1).is_none());
        let replaced = factory.register_fn("n", || 2);
        assert!(replaced.is_some());
        assert_eq!(factory.size(), 1);
        assert_eq!(factory.get_factory_method::<i32, ()>("n").unwrap().call(()), 2);
    }

    #[test]
    fn missing_name() {
        let factory = Factory::new();
        match factory.get_factory_method::<i32, ()>("nope") {
            Err(ContainerError::NotFound(name)) => assert_eq!(name, "nope"),
            _ => panic!("expected NotFound"),
        }
    }

    #[test]
    fn mismatch_reports_both_signatures() {
        let factory = Factory::new().with("int", make_int);
        match factory.get_factory_method::<i64, (i32, f64)>("int") {
            Err(ContainerError::SignatureMismatch {
                name,
                registered,
                requested,
            }) => {
                assert_eq!(name, "int");
                assert_eq!(registered, "fn(i32, f64) -> i32");
                assert_eq!(requested, "fn(i32, f64) -> i64");
            }
            _ => panic!("expected SignatureMismatch"),
        }
    }

    #[test]
    fn names_are_sorted() {
        let factory = Factory::new().with("b", || 0u8).with("a", || 0u8);
        assert_eq!(factory.names(), vec!["a", "b"]);
        assert_eq!(factory.signature("a").unwrap().to_string(), "fn() -> u8");
    }
}
