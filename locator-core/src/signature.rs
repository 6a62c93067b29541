//! Signature tags: what a construction reference was registered with, checked at resolve time.

use std::any::{type_name, TypeId};
use std::fmt;

/// One type in a signature: id for comparison, name for diagnostics.
#[derive(Clone, Copy, Debug)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Argument list of a constructor, as a tuple: `()`, `(A,)`, `(A, B)`, ... up to six.
pub trait ArgList: 'static {
    fn type_tags() -> Vec<TypeTag>;
}

macro_rules! impl_arg_list {
    ($($arg:ident),*) => {
        impl<$($arg: 'static),*> ArgList for ($($arg,)*) {
            fn type_tags() -> Vec<TypeTag> {
                vec![$(TypeTag::of::<$arg>()),*]
            }
        }
    };
}

impl_arg_list!();
impl_arg_list!(A1);
impl_arg_list!(A1, A2);
impl_arg_list!(A1, A2, A3);
impl_arg_list!(A1, A2, A3, A4);
impl_arg_list!(A1, A2, A3, A4, A5);
impl_arg_list!(A1, A2, A3, A4, A5, A6);

/// Call signature `fn(args..) -> result`. Equal iff every type id matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    args: Vec<TypeTag>,
    result: TypeTag,
}

impl Signature {
    pub fn of<R: 'static, Args: ArgList>() -> Self {
        Self {
            args: Args::type_tags(),
            result: TypeTag::of::<R>(),
        }
    }

    pub fn args(&self) -> &[TypeTag] {
        &self.args
    }

    pub fn result(&self) -> TypeTag {
        self.result
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ") -> {}", self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_like_a_fn_pointer() {
        let sig = Signature::of::<i32, (i32, f64)>();
        assert_eq!(sig.to_string(), "fn(i32, f64) -> i32");
        assert_eq!(Signature::of::<u8, ()>().to_string(), "fn() -> u8");
    }

    #[test]
    fn equality_follows_type_ids() {
        assert_eq!(Signature::of::<i32, (i32,)>(), Signature::of::<i32, (i32,)>());
        assert_ne!(Signature::of::<i32, (i32,)>(), Signature::of::<i64, (i32,)>());
        assert_ne!(Signature::of::<i32, (i32,)>(), Signature::of::<i32, (i32, i32)>());
        let sig = Signature::of::<(), (u8, u16)>();
        assert_eq!(sig.args().len(), 2);
        assert_eq!(sig.args()[1].name(), "u16");
        assert_eq!(sig.result().name(), "()");
    }
}
