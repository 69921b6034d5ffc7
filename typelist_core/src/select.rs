use std::any::TypeId;
use std::fmt;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Helper trait to index into a tuple of alternatives.
///
/// Implemented by [`Type1`](crate::index::Type1) to [`Type10`](crate::index::Type10)
/// only. Storage is read and written at `INDEX`, so no other crate may add selectors:
///
/// ```compile_fail
/// use typelist_core::Selector;
///
/// struct Forged;
///
/// impl Selector for Forged {
///     const INDEX: usize = 0;
/// }
/// ```
pub trait Selector: sealed::Sealed {
    /// The zero-based position this selector stands for.
    const INDEX: usize;
}

/// Helper trait to 'select' an alternative out of a tuple of alternatives.
///
/// Only in-range positions are implemented, so asking for a position past the
/// end of the list fails to compile.
pub trait Select<S: Selector> {
    /// The selected alternative.
    type Output: 'static;
}

/// The alternative of `L` at position `S`.
pub type At<L, S> = <L as Select<S>>::Output;

/// `L: Find<T, S>` holds when `T` sits at position `S` of the list `L`.
///
/// Callers leave `S` to inference. When `T` is not part of `L` no impl applies,
/// and when `T` occurs more than once the impls are ambiguous, so both are
/// rejected at compile time.
///
/// The impls for tuples are the only ones there are. An impl naming another
/// output than the alternative at `S` fails the `Select` supertrait:
///
/// ```compile_fail
/// use typelist_core::{index::Type1, Find};
///
/// struct Bytes([u8; 8]);
///
/// impl Find<Bytes, Type1> for (u64, Bytes) {}
/// ```
pub trait Find<T, S: Selector>: Select<S, Output = T> {}

/// Returns the position of `T` within `L`, as found by [`Find`].
#[inline]
pub const fn index_of<L, T, S>() -> usize
where
    L: Find<T, S>,
    S: Selector,
{
    S::INDEX
}

/// A closed, ordered list of alternatives.
///
/// # Safety
///
/// `Storage` must be large and aligned enough to hold any alternative at offset 0,
/// and `destroy` must drop exactly the alternative found at `index`.
pub unsafe trait TypeList: Sized + 'static {
    /// Untyped storage for any one alternative.
    type Storage;

    /// The number of alternatives.
    const LEN: usize;

    /// The size of the largest alternative.
    const MAX_SIZE: usize;

    /// Returns the `TypeId` of the alternative at `index`.
    fn type_id_at(index: usize) -> Option<TypeId>;

    /// Returns the name of the alternative at `index`.
    fn type_name_at(index: usize) -> Option<&'static str>;

    /// Returns the position of `T`, or `None` if `T` is not one of the alternatives.
    #[inline]
    fn find<T: 'static>() -> Option<usize> {
        let id = TypeId::of::<T>();
        (0..Self::LEN).position(|index| Self::type_id_at(index) == Some(id))
    }

    /// Returns `true` if `T` is one of the alternatives.
    #[inline]
    fn contains<T: 'static>() -> bool {
        Self::find::<T>().is_some()
    }

    /// Returns `true` if any alternative occurs more than once.
    fn has_duplicates() -> bool {
        (0..Self::LEN).any(|lhs| {
            (lhs + 1..Self::LEN).any(|rhs| Self::type_id_at(lhs) == Self::type_id_at(rhs))
        })
    }

    /// Drops the alternative at `index` in place.
    /// Returns `false` and does nothing if `index` is out of range.
    ///
    /// # Safety
    ///
    /// `storage` must hold a live value of the alternative at `index`.
    unsafe fn destroy(index: usize, storage: *mut Self::Storage) -> bool;
}

/// Dispatch table copying the alternative at an index, for lists of `Clone` types.
///
/// # Safety
///
/// Implementations must construct exactly the alternative at `index` in `dst`.
pub unsafe trait CloneList: TypeList {
    /// Writes a clone of the value in `src` into `dst`.
    /// Returns `false` and writes nothing if `index` is out of range.
    ///
    /// # Safety
    ///
    /// `src` must hold a live value of the alternative at `index`, and `dst` must
    /// not hold a live value.
    unsafe fn copy_construct(index: usize, dst: *mut Self::Storage, src: *const Self::Storage)
        -> bool;
}

/// Dispatch table comparing two values of the alternative at an index.
///
/// # Safety
///
/// Implementations must only read the alternative at `index`.
pub unsafe trait EqList: TypeList {
    /// Returns `false` if `index` is out of range.
    ///
    /// # Safety
    ///
    /// Both `lhs` and `rhs` must hold a live value of the alternative at `index`.
    unsafe fn equal(index: usize, lhs: *const Self::Storage, rhs: *const Self::Storage) -> bool;
}

/// Lists whose alternatives are all `Eq`, making [`EqList::equal`] an equivalence.
pub trait TotalEqList: EqList {}

/// Dispatch table exposing the alternative at an index as `dyn Debug`.
///
/// # Safety
///
/// Implementations must only read the alternative at `index`.
pub unsafe trait DebugList: TypeList {
    /// # Safety
    ///
    /// `storage` must hold a live value of the alternative at `index`, and stay
    /// valid for `'a`.
    unsafe fn debug<'a>(index: usize, storage: *const Self::Storage)
        -> Option<&'a dyn fmt::Debug>;
}

/// A visitor handling a shared reference to `T`.
///
/// A visitor over a list implements this once per alternative, with the same
/// `Output` every time.
pub trait Visitor<T> {
    type Output;

    fn visit(&mut self, value: &T) -> Self::Output;
}

/// A visitor handling a mutable reference to `T`.
pub trait VisitorMut<T> {
    type Output;

    fn visit_mut(&mut self, value: &mut T) -> Self::Output;
}

impl<'v, T, V> Visitor<T> for &'v mut V
where
    V: Visitor<T> + ?Sized,
{
    type Output = V::Output;

    #[inline]
    fn visit(&mut self, value: &T) -> Self::Output {
        (**self).visit(value)
    }
}

impl<'v, T, V> VisitorMut<T> for &'v mut V
where
    V: VisitorMut<T> + ?Sized,
{
    type Output = V::Output;

    #[inline]
    fn visit_mut(&mut self, value: &mut T) -> Self::Output {
        (**self).visit_mut(value)
    }
}

/// Dispatch table handing the alternative at an index to a visitor.
///
/// # Safety
///
/// Implementations must call the visitor with exactly the alternative at `index`.
pub unsafe trait Apply<V>: TypeList {
    /// The result shared by every `Visitor` impl of `V`.
    type Output;

    /// Returns `None` without calling the visitor if `index` is out of range.
    ///
    /// # Safety
    ///
    /// `storage` must hold a live value of the alternative at `index`.
    unsafe fn apply(index: usize, storage: *const Self::Storage, visitor: &mut V)
        -> Option<Self::Output>;
}

/// Dispatch table handing the alternative at an index to a mutable visitor.
///
/// # Safety
///
/// Implementations must call the visitor with exactly the alternative at `index`.
pub unsafe trait ApplyMut<V>: TypeList {
    type Output;

    /// Returns `None` without calling the visitor if `index` is out of range.
    ///
    /// # Safety
    ///
    /// `storage` must hold a live value of the alternative at `index`.
    unsafe fn apply_mut(index: usize, storage: *mut Self::Storage, visitor: &mut V)
        -> Option<Self::Output>;
}
