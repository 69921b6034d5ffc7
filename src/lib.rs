//! A tagged union over a closed list of alternative types.
//!
//! The list of alternatives is a tuple: `Variant<(i32, String)>` holds either
//! nothing, an `i32` or a `String`. The value lives inline, in storage sized for
//! the largest alternative, next to a discriminant naming the active one.
//!
//! Asking for a type that is not part of the list, or using a list that names a
//! type twice, is a compile error. Asking for the wrong alternative at runtime
//! either panics (`get`, `apply`, ...) or returns an [`AccessError`]
//! (`try_get`, `try_apply`, ...).

#[macro_use]
mod macros;

pub mod error;
pub mod regular;
pub mod variant;

pub use typelist_core::index::*;
pub use typelist_core::{
    index_of, Apply, ApplyMut, At, CloneList, DebugList, EqList, Find, Select, Selector,
    TotalEqList, TypeList, Visitor, VisitorMut,
};

pub use error::AccessError;
pub use regular::{EqualityComparable, Regular};
pub use variant::{Variant, EMPTY};
