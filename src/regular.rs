//! Predicates classifying types that behave like values.
//!
//! The traits are meant as bounds in generic code. The `is_*!` macros answer the
//! same questions for a concrete type as a `bool`, picking between a preferred
//! impl that only applies when the bound holds and a fallback impl one
//! auto-reference further away.
//!
//! ```
//! use sumvariant::{is_equality_comparable, is_regular};
//!
//! #[derive(Default, Clone)]
//! struct Opaque;
//!
//! assert!(is_equality_comparable!(String));
//! assert!(!is_equality_comparable!(Opaque));
//! assert!(is_regular!(Vec<u8>));
//! assert!(!is_regular!(Opaque));
//! ```

use std::marker::PhantomData;

/// Types for which `value == value` is well-formed.
pub trait EqualityComparable: PartialEq {}

impl<T: PartialEq + ?Sized> EqualityComparable for T {}

/// Types that can be default-constructed, copied, copy-assigned and compared.
///
/// Move construction and move assignment are available for every sized type,
/// and copy assignment is [`Clone::clone_from`].
pub trait Regular: Default + Clone + EqualityComparable {}

impl<T: Default + Clone + PartialEq> Regular for T {}

#[doc(hidden)]
pub struct Probe<T: ?Sized>(PhantomData<T>);

impl<T: ?Sized> Probe<T> {
    #[inline]
    pub const fn new() -> Self {
        Probe(PhantomData)
    }
}

#[doc(hidden)]
pub trait ViaEqualityComparable {
    #[inline]
    fn is_equality_comparable(&self) -> bool {
        true
    }
}

impl<T: EqualityComparable + ?Sized> ViaEqualityComparable for Probe<T> {}

#[doc(hidden)]
pub trait NotEqualityComparable {
    #[inline]
    fn is_equality_comparable(&self) -> bool {
        false
    }
}

impl<T: ?Sized> NotEqualityComparable for &Probe<T> {}

#[doc(hidden)]
pub trait ViaRegular {
    #[inline]
    fn is_regular(&self) -> bool {
        true
    }
}

impl<T: Regular> ViaRegular for Probe<T> {}

#[doc(hidden)]
pub trait NotRegular {
    #[inline]
    fn is_regular(&self) -> bool {
        false
    }
}

impl<T: ?Sized> NotRegular for &Probe<T> {}

/// Evaluates to `true` if the given type implements `PartialEq` for itself.
///
/// Only meaningful for concrete types: inside generic code the answer follows the
/// bounds in scope, not the type the code is instantiated with.
#[macro_export]
macro_rules! is_equality_comparable {
    ($t:ty) => {{
        #[allow(unused_imports)]
        use $crate::regular::{NotEqualityComparable as _, ViaEqualityComparable as _};
        (&$crate::regular::Probe::<$t>::new()).is_equality_comparable()
    }};
}

/// Evaluates to `true` if the given type is [`Regular`](crate::regular::Regular).
#[macro_export]
macro_rules! is_regular {
    ($t:ty) => {{
        #[allow(unused_imports)]
        use $crate::regular::{NotRegular as _, ViaRegular as _};
        (&$crate::regular::Probe::<$t>::new()).is_regular()
    }};
}
