//! Construction references: one non-generic handle over constructors of any signature.
//!
//! `ConstructionRef::new` erases `Fn(A, B, ..) -> R` to `Box<dyn Fn((A, B, ..)) -> R>` behind
//! `Rc<dyn Any>` and records its [`Signature`]. Getting it back as a [`FactoryMethod`] is a
//! checked downcast: asking with the wrong `R`/`Args` yields `None`, never a bad call.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::signature::{ArgList, Signature};

/// Storage shape of a constructor once its parameters are folded into one tuple.
pub type ErasedConstructor<R, Args> = Box<dyn Fn(Args) -> R>;

/// Constructor shapes accepted at registration: any `Fn` of arity 0 to 6.
/// `Args` is the tuple of its parameter types.
pub trait IntoConstruction<Args, R>: 'static {
    fn into_erased(self) -> ErasedConstructor<R, Args>;
}

macro_rules! impl_into_construction {
    ($($arg:ident),*) => {
        impl<F, R, $($arg),*> IntoConstruction<($($arg,)*), R> for F
        where
            F: Fn($($arg),*) -> R + 'static,
            R: 'static,
            $($arg: 'static,)*
        {
            #[allow(non_snake_case)]
            fn into_erased(self) -> ErasedConstructor<R, ($($arg,)*)> {
                Box::new(move |($($arg,)*)| self($($arg),*))
            }
        }
    };
}

impl_into_construction!();
impl_into_construction!(A1);
impl_into_construction!(A1, A2);
impl_into_construction!(A1, A2, A3);
impl_into_construction!(A1, A2, A3, A4);
impl_into_construction!(A1, A2, A3, A4, A5);
impl_into_construction!(A1, A2, A3, A4, A5, A6);

/// Opaque, cheaply clonable reference to a constructor plus the signature it was registered with.
#[derive(Clone)]
pub struct ConstructionRef {
    callable: Rc<dyn Any>,
    signature: Rc<Signature>,
}

impl ConstructionRef {
    pub fn new<Args, R, F>(f: F) -> Self
    where
        Args: ArgList,
        R: 'static,
        F: IntoConstruction<Args, R>,
    {
        let erased: ErasedConstructor<R, Args> = f.into_erased();
        Self {
            callable: Rc::new(erased),
            signature: Rc::new(Signature::of::<R, Args>()),
        }
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Typed view of this constructor, or `None` when `R`/`Args` differ from the registered ones.
    pub fn typed<R: 'static, Args: ArgList>(&self) -> Option<FactoryMethod<R, Args>> {
        Rc::clone(&self.callable)
            .downcast::<ErasedConstructor<R, Args>>()
            .ok()
            .map(|callable| FactoryMethod {
                callable,
                _args: PhantomData,
            })
    }

    /// True when both handles point at the same registered constructor.
    pub fn same_as(&self, other: &ConstructionRef) -> bool {
        Rc::ptr_eq(&self.callable, &other.callable)
    }
}

impl fmt::Debug for ConstructionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConstructionRef")
            .field(&format_args!("{}", self.signature))
            .finish()
    }
}

/// Constructor recovered with its concrete signature. Call with the argument tuple.
pub struct FactoryMethod<R, Args> {
    callable: Rc<ErasedConstructor<R, Args>>,
    _args: PhantomData<fn(Args) -> R>,
}

impl<R, Args> FactoryMethod<R, Args> {
    pub fn call(&self, args: Args) -> R {
        (self.callable)(args)
    }
}

impl<R, Args> Clone for FactoryMethod<R, Args> {
    fn clone(&self) -> Self {
        Self {
            callable: Rc::clone(&self.callable),
            _args: PhantomData,
        }
    }
}
