//! This crate works on tuples of types as closed, ordered lists of alternatives.
//! It provides the compile-time lookups (position of a type, type at a position),
//! union storage large enough for any alternative, and the per-index dispatch
//! tables used to destroy, copy, compare and visit a value held in that storage.

#[macro_use]
mod dispatch;

pub mod index;
pub mod select;
pub mod union;

pub use select::{
    index_of, Apply, ApplyMut, At, CloneList, DebugList, EqList, Find, Select, Selector,
    TotalEqList, TypeList, Visitor, VisitorMut,
};
