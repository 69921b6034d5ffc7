use std::fmt;
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ptr;

use typelist_core::{
    Apply, ApplyMut, At, CloneList, DebugList, EqList, Find, Select, Selector, TotalEqList,
    TypeList,
};

use crate::error::AccessError;

/// The discriminant of a variant without a live value.
pub const EMPTY: isize = -1;

const UNKNOWN: &str = "<unknown>";

/// A tagged union holding at most one value out of the closed list of alternatives `L`.
///
/// `L` is a tuple such as `(i32, String)`. The alternatives must be distinct;
/// a typed operation on a list naming a type twice does not compile, and
/// creating a variant over such a list panics.
///
/// # Examples
///
/// ```
/// use sumvariant::Variant;
///
/// let mut v = Variant::<(i32, String)>::new(5);
/// assert!(v.is::<i32, _>());
/// assert_eq!(*v.get::<i32, _>(), 5);
///
/// v.set(String::from("hi"));
/// assert!(v.is::<String, _>());
/// assert!(!v.is::<i32, _>());
/// assert_eq!(v.get::<String, _>(), "hi");
/// ```
///
/// Types outside of the list are rejected at compile time:
///
/// ```compile_fail
/// use sumvariant::Variant;
///
/// let v = Variant::<(i32, String)>::new(1.5f64);
/// ```
///
/// So is a list that names an alternative twice:
///
/// ```compile_fail
/// use sumvariant::Variant;
///
/// let v = Variant::<(i32, i32)>::new(1i32);
/// ```
///
/// Positions come from the `Type1` to `Type10` selectors only:
///
/// ```compile_fail
/// use sumvariant::Selector;
///
/// struct Forged;
///
/// impl Selector for Forged {
///     const INDEX: usize = 0;
/// }
/// ```
pub struct Variant<L: TypeList> {
    storage: MaybeUninit<L::Storage>,
    index: isize,
    marker: PhantomData<L>,
}

impl<L: TypeList> Variant<L> {
    /// Creates a variant without a live value.
    ///
    /// # Panics
    ///
    /// Panics if `L` names the same alternative more than once.
    #[inline]
    pub fn empty() -> Self {
        assert!(!L::has_duplicates(), "Variant has duplicated type");

        Self::vacant()
    }

    /// An empty variant for a list already known to be free of duplicates,
    /// because a variant over it exists.
    #[inline]
    fn vacant() -> Self {
        Self {
            storage: MaybeUninit::uninit(),
            index: EMPTY,
            marker: PhantomData,
        }
    }

    /// Creates a variant holding `value`.
    #[inline]
    pub fn new<T, S>(value: T) -> Self
    where
        L: Find<T, S>,
        S: Selector,
    {
        let mut variant = Self::empty();
        variant.write::<T, S>(value);
        variant
    }

    /// Creates a variant holding `value` as the alternative at position `S`.
    ///
    /// ```
    /// use sumvariant::{Type2, Variant};
    ///
    /// let v = Variant::<(u8, u16)>::new_at::<Type2>(7);
    /// assert_eq!(v.index(), Some(1));
    /// ```
    #[inline]
    pub fn new_at<S>(value: At<L, S>) -> Self
    where
        L: Select<S>,
        S: Selector,
    {
        let mut variant = Self::empty();
        unsafe { ptr::write(variant.storage.as_mut_ptr().cast::<At<L, S>>(), value) };
        variant.index = S::INDEX as isize;
        variant
    }

    /// Writes `value` into storage that holds no live value.
    #[inline]
    fn write<T, S>(&mut self, value: T)
    where
        L: Find<T, S>,
        S: Selector,
    {
        debug_assert!(self.is_empty());

        unsafe { ptr::write(self.storage.as_mut_ptr().cast::<T>(), value) };
        self.index = S::INDEX as isize;
    }

    /// Replaces the current value, if any, with `value`.
    /// The previous value is dropped before `value` is moved in.
    #[inline]
    pub fn set<T, S>(&mut self, value: T)
    where
        L: Find<T, S>,
        S: Selector,
    {
        self.clear();
        self.write::<T, S>(value);
    }

    /// Replaces the current value with `value`, returning the previous content.
    #[inline]
    pub fn replace<T, S>(&mut self, value: T) -> Self
    where
        L: Find<T, S>,
        S: Selector,
    {
        let previous = self.take();
        self.write::<T, S>(value);
        previous
    }

    /// Moves the content out, leaving `self` empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::vacant())
    }

    /// Returns the raw discriminant, [`EMPTY`] if there is no live value.
    #[inline]
    pub fn get_index(&self) -> isize {
        self.index
    }

    /// Returns the position of the active alternative.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        usize::try_from(self.index).ok()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index == EMPTY
    }

    /// Returns `true` if the active alternative is `T`.
    #[inline]
    pub fn is<T, S>(&self) -> bool
    where
        L: Find<T, S>,
        S: Selector,
    {
        self.index == S::INDEX as isize
    }

    /// Returns `true` if the active alternative is the one at position `S`.
    #[inline]
    pub fn holds<S>(&self) -> bool
    where
        L: Select<S>,
        S: Selector,
    {
        self.index == S::INDEX as isize
    }

    /// Returns the name of the active alternative.
    #[inline]
    pub fn type_name(&self) -> Option<&'static str> {
        self.index().and_then(L::type_name_at)
    }

    /// Drops the live value, if any. Calling this on an empty variant does nothing.
    pub fn clear(&mut self) {
        if let Some(index) = self.index() {
            // Marked empty first, so a panicking destructor can not run twice.
            self.index = EMPTY;

            #[cfg(feature = "tracing")]
            tracing::trace!(
                index,
                alternative = L::type_name_at(index).unwrap_or(UNKNOWN),
                "destroying active alternative"
            );

            unsafe {
                L::destroy(index, self.storage.as_mut_ptr());
            }
        }
    }

    fn check<S: Selector>(&self) -> Result<(), AccessError> {
        match self.index() {
            None => Err(AccessError::Empty),
            Some(held) if held == S::INDEX => Ok(()),
            Some(held) => Err(AccessError::Mismatch {
                requested: S::INDEX,
                requested_name: L::type_name_at(S::INDEX).unwrap_or(UNKNOWN),
                held,
                held_name: L::type_name_at(held).unwrap_or(UNKNOWN),
            }),
        }
    }

    /// Returns a reference to the value, if the active alternative is `T`.
    ///
    /// ```
    /// use sumvariant::{AccessError, Variant};
    ///
    /// let v = Variant::<(i32, String)>::empty();
    /// assert_eq!(v.try_get::<i32, _>(), Err(AccessError::Empty));
    /// ```
    #[inline]
    pub fn try_get<T, S>(&self) -> Result<&T, AccessError>
    where
        L: Find<T, S>,
        S: Selector,
    {
        self.check::<S>()?;
        Ok(unsafe { &*self.storage.as_ptr().cast::<T>() })
    }

    #[inline]
    pub fn try_get_mut<T, S>(&mut self) -> Result<&mut T, AccessError>
    where
        L: Find<T, S>,
        S: Selector,
    {
        self.check::<S>()?;
        Ok(unsafe { &mut *self.storage.as_mut_ptr().cast::<T>() })
    }

    /// Returns a reference to the value.
    ///
    /// # Panics
    ///
    /// Panics if the variant is empty or the active alternative is not `T`.
    #[inline]
    #[track_caller]
    pub fn get<T, S>(&self) -> &T
    where
        L: Find<T, S>,
        S: Selector,
    {
        match self.try_get::<T, S>() {
            Ok(value) => value,
            Err(error) => precondition_violated(error),
        }
    }

    /// # Panics
    ///
    /// Panics if the variant is empty or the active alternative is not `T`.
    #[inline]
    #[track_caller]
    pub fn get_mut<T, S>(&mut self) -> &mut T
    where
        L: Find<T, S>,
        S: Selector,
    {
        match self.try_get_mut::<T, S>() {
            Ok(value) => value,
            Err(error) => precondition_violated(error),
        }
    }

    /// Returns a reference to the value, if the active alternative is the one at position `S`.
    #[inline]
    pub fn try_get_at<S>(&self) -> Result<&At<L, S>, AccessError>
    where
        L: Select<S>,
        S: Selector,
    {
        self.check::<S>()?;
        Ok(unsafe { &*self.storage.as_ptr().cast::<At<L, S>>() })
    }

    #[inline]
    pub fn try_get_at_mut<S>(&mut self) -> Result<&mut At<L, S>, AccessError>
    where
        L: Select<S>,
        S: Selector,
    {
        self.check::<S>()?;
        Ok(unsafe { &mut *self.storage.as_mut_ptr().cast::<At<L, S>>() })
    }

    /// Returns a reference to the alternative at position `S`.
    ///
    /// # Panics
    ///
    /// Panics if the variant is empty or holds another alternative.
    ///
    /// Positions past the end of the list do not compile:
    ///
    /// ```compile_fail
    /// use sumvariant::{Type3, Variant};
    ///
    /// let v = Variant::<(u8, u16)>::new(1u8);
    /// v.get_at::<Type3>();
    /// ```
    #[inline]
    #[track_caller]
    pub fn get_at<S>(&self) -> &At<L, S>
    where
        L: Select<S>,
        S: Selector,
    {
        match self.try_get_at::<S>() {
            Ok(value) => value,
            Err(error) => precondition_violated(error),
        }
    }

    /// # Panics
    ///
    /// Panics if the variant is empty or holds another alternative.
    #[inline]
    #[track_caller]
    pub fn get_at_mut<S>(&mut self) -> &mut At<L, S>
    where
        L: Select<S>,
        S: Selector,
    {
        match self.try_get_at_mut::<S>() {
            Ok(value) => value,
            Err(error) => precondition_violated(error),
        }
    }

    /// Moves the value out if the active alternative is `T`, and hands `self` back otherwise.
    pub fn into_inner<T, S>(mut self) -> Result<T, Self>
    where
        L: Find<T, S>,
        S: Selector,
    {
        if !self.is::<T, S>() {
            return Err(self);
        }

        self.index = EMPTY;
        Ok(unsafe { ptr::read(self.storage.as_ptr().cast::<T>()) })
    }

    /// Calls the visitor with the active alternative.
    ///
    /// `V` has to implement [`Visitor`](typelist_core::Visitor) for every
    /// alternative of `L`, all with the same output.
    #[inline]
    pub fn try_apply<V>(&self, mut visitor: V) -> Result<<L as Apply<V>>::Output, AccessError>
    where
        L: Apply<V>,
    {
        let index = self.index().ok_or(AccessError::Empty)?;

        let output = unsafe { L::apply(index, self.storage.as_ptr(), &mut visitor) };
        output.ok_or(AccessError::OutOfRange { index, len: L::LEN })
    }

    #[inline]
    pub fn try_apply_mut<V>(
        &mut self,
        mut visitor: V,
    ) -> Result<<L as ApplyMut<V>>::Output, AccessError>
    where
        L: ApplyMut<V>,
    {
        let index = self.index().ok_or(AccessError::Empty)?;

        let output = unsafe { L::apply_mut(index, self.storage.as_mut_ptr(), &mut visitor) };
        output.ok_or(AccessError::OutOfRange { index, len: L::LEN })
    }

    /// # Panics
    ///
    /// Panics if the variant is empty.
    #[inline]
    #[track_caller]
    pub fn apply<V>(&self, visitor: V) -> <L as Apply<V>>::Output
    where
        L: Apply<V>,
    {
        match self.try_apply(visitor) {
            Ok(output) => output,
            Err(error) => precondition_violated(error),
        }
    }

    /// # Panics
    ///
    /// Panics if the variant is empty.
    #[inline]
    #[track_caller]
    pub fn apply_mut<V>(&mut self, visitor: V) -> <L as ApplyMut<V>>::Output
    where
        L: ApplyMut<V>,
    {
        match self.try_apply_mut(visitor) {
            Ok(output) => output,
            Err(error) => precondition_violated(error),
        }
    }
}

#[cold]
#[track_caller]
fn precondition_violated(error: AccessError) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(%error, "variant access precondition violated");

    panic!("{}", error)
}

impl<L: CloneList> Variant<L> {
    /// Copies the live value of `source` into `self`, which must be empty.
    fn copy_from(&mut self, source: &Self) {
        debug_assert!(self.is_empty());

        if let Some(index) = source.index() {
            let copied =
                unsafe { L::copy_construct(index, self.storage.as_mut_ptr(), source.storage.as_ptr()) };
            debug_assert!(copied, "discriminant {} out of range", index);

            if copied {
                self.index = source.index;
            }
        }
    }
}

impl<L: CloneList> Clone for Variant<L> {
    #[inline]
    fn clone(&self) -> Self {
        let mut copy = Self::vacant();
        copy.copy_from(self);
        copy
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.copy_from(source);
    }
}

impl<L: EqList> PartialEq for Variant<L> {
    fn eq(&self, other: &Self) -> bool {
        match (self.index(), other.index()) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) if lhs == rhs => unsafe {
                L::equal(lhs, self.storage.as_ptr(), other.storage.as_ptr())
            },
            _ => false,
        }
    }
}

/// Available when every alternative is `Eq`:
///
/// ```compile_fail
/// fn key<K: Eq>() {}
///
/// key::<sumvariant::Variant<(f64, i32)>>();
/// ```
impl<L: TotalEqList> Eq for Variant<L> {}

impl<L: TypeList> Default for Variant<L> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<L: DebugList> fmt::Debug for Variant<L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let index = match self.index() {
            Some(index) => index,
            None => return f.write_str("Variant(<empty>)"),
        };

        match unsafe { L::debug(index, self.storage.as_ptr()) } {
            Some(value) => f.debug_tuple("Variant").field(&index).field(value).finish(),
            None => f.write_str("Variant(<empty>)"),
        }
    }
}

impl<L: TypeList> Drop for Variant<L> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;
    use typelist_core::index::*;
    use typelist_core::{Visitor, VisitorMut};

    type Number = Variant<(i32, String, Vec<u8>)>;

    #[derive(Debug, Clone, PartialEq)]
    struct Tracked {
        id: u32,
        drops: Rc<Cell<usize>>,
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    struct Len;

    impl Visitor<i32> for Len {
        type Output = usize;

        fn visit(&mut self, _: &i32) -> usize {
            4
        }
    }

    impl Visitor<String> for Len {
        type Output = usize;

        fn visit(&mut self, value: &String) -> usize {
            value.len()
        }
    }

    impl Visitor<Vec<u8>> for Len {
        type Output = usize;

        fn visit(&mut self, value: &Vec<u8>) -> usize {
            value.len()
        }
    }

    struct Grow;

    impl VisitorMut<i32> for Grow {
        type Output = ();

        fn visit_mut(&mut self, value: &mut i32) {
            *value *= 2;
        }
    }

    impl VisitorMut<String> for Grow {
        type Output = ();

        fn visit_mut(&mut self, value: &mut String) {
            let copy = value.clone();
            value.push_str(&copy);
        }
    }

    impl VisitorMut<Vec<u8>> for Grow {
        type Output = ();

        fn visit_mut(&mut self, value: &mut Vec<u8>) {
            value.push(0);
        }
    }

    #[test]
    fn test_empty() {
        let v = Number::empty();
        assert!(v.is_empty());
        assert_eq!(v.get_index(), EMPTY);
        assert_eq!(v.index(), None);
        assert_eq!(v.type_name(), None);
        assert!(!v.is::<i32, _>());

        let d = Number::default();
        assert!(d.is_empty());
    }

    #[test]
    fn test_new_and_get() {
        let v = Number::new(String::from("text"));
        assert!(!v.is_empty());
        assert_eq!(v.get_index(), 1);
        assert!(v.is::<String, _>());
        assert!(!v.is::<i32, _>());
        assert!(!v.is::<Vec<u8>, _>());
        assert!(v.holds::<Type2>());
        assert_eq!(v.get::<String, _>(), "text");
        assert_eq!(v.get_at::<Type2>(), "text");

        let by_inference: &String = v.get();
        assert_eq!(by_inference, "text");
    }

    #[test]
    fn test_new_at() {
        let v = Number::new_at::<Type3>(vec![1, 2]);
        assert!(v.is::<Vec<u8>, _>());
        assert_eq!(v.get::<Vec<u8>, _>(), &vec![1, 2]);
    }

    #[test]
    fn test_get_mut() {
        let mut v = Number::new(10);
        *v.get_mut::<i32, _>() += 1;
        assert_eq!(*v.get::<i32, _>(), 11);

        *v.get_at_mut::<Type1>() += 1;
        assert_eq!(*v.get_at::<Type1>(), 12);
    }

    #[test]
    fn test_try_get() {
        let mut v = Number::empty();
        assert_eq!(v.try_get::<i32, _>(), Err(AccessError::Empty));
        assert_eq!(v.try_get_at::<Type3>().err(), Some(AccessError::Empty));

        v.set(3);
        assert_eq!(v.try_get::<i32, _>(), Ok(&3));
        assert_eq!(
            v.try_get::<String, _>(),
            Err(AccessError::Mismatch {
                requested: 1,
                requested_name: std::any::type_name::<String>(),
                held: 0,
                held_name: "i32",
            })
        );

        if let Ok(value) = v.try_get_mut::<i32, _>() {
            *value = 4;
        }
        assert_eq!(v.try_get_at::<Type1>(), Ok(&4));
        assert!(v.try_get_at_mut::<Type2>().is_err());
    }

    #[test]
    #[should_panic(expected = "the variant object is empty")]
    fn test_get_empty_panics() {
        let v = Number::empty();
        v.get::<i32, _>();
    }

    #[test]
    #[should_panic(expected = "stored type is not access type")]
    fn test_get_mismatch_panics() {
        let v = Number::new(1);
        v.get::<String, _>();
    }

    #[test]
    #[should_panic(expected = "stored type is not access type")]
    fn test_get_at_mismatch_panics() {
        let mut v = Number::new(1);
        v.get_at_mut::<Type3>();
    }

    #[test]
    #[should_panic(expected = "Variant has duplicated type")]
    fn test_duplicates_rejected() {
        Variant::<(i32, String, i32)>::empty();
    }

    #[test]
    #[should_panic(expected = "Variant has duplicated type")]
    fn test_duplicates_rejected_by_value_constructor() {
        // `u8` is unique, the check still covers the whole list.
        Variant::<(u8, String, String)>::new(1u8);
    }

    #[test]
    fn test_set_destroys_previous_once() {
        let drops = Rc::new(Cell::new(0));
        let mut v = Variant::<(Tracked, i32)>::new(Tracked {
            id: 1,
            drops: Rc::clone(&drops),
        });

        v.set(5);
        assert_eq!(drops.get(), 1);
        assert_eq!(*v.get::<i32, _>(), 5);

        drop(v);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let drops = Rc::new(Cell::new(0));
        let mut v = Variant::<(Tracked, i32)>::new(Tracked {
            id: 1,
            drops: Rc::clone(&drops),
        });

        v.clear();
        assert!(v.is_empty());
        assert_eq!(drops.get(), 1);

        v.clear();
        assert!(v.is_empty());
        assert_eq!(drops.get(), 1);

        drop(v);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_drop_destroys_value() {
        let drops = Rc::new(Cell::new(0));
        {
            let _v = Variant::<(i32, Tracked)>::new(Tracked {
                id: 9,
                drops: Rc::clone(&drops),
            });
        }
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_replace() {
        let mut v = Number::new(1);
        let previous = v.replace(String::from("now"));

        assert_eq!(*previous.get::<i32, _>(), 1);
        assert_eq!(v.get::<String, _>(), "now");
    }

    #[test]
    fn test_take_leaves_source_empty() {
        let mut a = Number::new(String::from("moved"));
        let b = a.take();

        assert!(a.is_empty());
        assert_eq!(b.get::<String, _>(), "moved");
    }

    #[test]
    fn test_into_inner() {
        let v = Number::new(vec![3u8]);
        let v = v.into_inner::<i32, _>().unwrap_err();
        assert_eq!(v.into_inner::<Vec<u8>, _>().ok(), Some(vec![3u8]));
    }

    #[test]
    fn test_into_inner_does_not_drop_value() {
        let drops = Rc::new(Cell::new(0));
        let v = Variant::<(i32, Tracked)>::new(Tracked {
            id: 2,
            drops: Rc::clone(&drops),
        });

        let tracked = v.into_inner::<Tracked, _>().ok();
        assert_eq!(drops.get(), 0);
        assert_eq!(tracked.as_ref().map(|tracked| tracked.id), Some(2));

        drop(tracked);
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Number::new(String::from("abc"));
        let copy = original.clone();
        assert_eq!(copy, original);

        original.get_mut::<String, _>().push('d');
        assert_eq!(copy.get::<String, _>(), "abc");
        assert_eq!(original.get::<String, _>(), "abcd");
        assert_ne!(copy, original);
    }

    #[test]
    fn test_clone_empty() {
        let v = Number::empty();
        assert!(v.clone().is_empty());
    }

    #[test]
    fn test_clone_keeps_active_alternative() {
        let originals = [
            Number::new(7),
            Number::new(String::from("s")),
            Number::new(vec![1u8]),
        ];
        for original in originals {
            let copy = original.clone();
            assert_eq!(copy.get_index(), original.get_index());
            assert_eq!(copy.type_name(), original.type_name());
            assert_eq!(copy, original);
        }

        let mut target = Number::new(1);
        target.clone_from(&Number::new(vec![2u8]));
        assert!(target.holds::<Type3>());
        assert_eq!(target.get_at::<Type3>(), &vec![2u8]);
    }

    #[test]
    fn test_clone_from_destroys_previous() {
        let drops = Rc::new(Cell::new(0));
        let mut target = Variant::<(Tracked, i32)>::new(Tracked {
            id: 1,
            drops: Rc::clone(&drops),
        });
        let source = Variant::<(Tracked, i32)>::new(7);

        target.clone_from(&source);
        assert_eq!(drops.get(), 1);
        assert_eq!(*target.get::<i32, _>(), 7);
        assert_eq!(*source.get::<i32, _>(), 7);
    }

    #[test]
    fn test_equality() {
        assert_eq!(Number::empty(), Number::empty());
        assert_eq!(Number::new(1), Number::new(1));
        assert_ne!(Number::new(1), Number::new(2));
        assert_ne!(Number::new(1), Number::empty());
        assert_ne!(Number::new(String::new()), Number::new(Vec::new()));
    }

    #[test]
    fn test_total_equality() {
        fn count<K: Eq + Clone>(keys: &[K]) -> usize {
            let mut distinct: Vec<K> = Vec::new();
            for key in keys {
                if !distinct.contains(key) {
                    distinct.push(key.clone());
                }
            }
            distinct.len()
        }

        let keys = [
            Number::new(1),
            Number::new(1),
            Number::new(String::from("1")),
            Number::empty(),
        ];
        assert_eq!(count(&keys), 3);
    }

    #[test]
    fn test_equality_ignores_matching_bytes() {
        // Same bit pattern, different alternatives.
        let lhs = Variant::<(u32, i32)>::new(0u32);
        let rhs = Variant::<(u32, i32)>::new(0i32);
        assert_ne!(lhs, rhs);
    }

    #[test]
    fn test_apply() {
        assert_eq!(Number::new(1).apply(Len), 4);
        assert_eq!(Number::new(String::from("hello")).apply(Len), 5);
        assert_eq!(Number::new(vec![1u8, 2, 3]).apply(Len), 3);
        assert_eq!(Number::empty().try_apply(Len), Err(AccessError::Empty));
    }

    #[test]
    fn test_apply_mut() {
        let mut v = Number::new(String::from("ab"));
        v.apply_mut(Grow);
        assert_eq!(v.get::<String, _>(), "abab");

        let mut v = Number::new(21);
        v.apply_mut(&mut Grow);
        assert_eq!(*v.get::<i32, _>(), 42);

        let mut empty = Number::empty();
        assert_eq!(empty.try_apply_mut(Grow), Err(AccessError::Empty));
    }

    #[test]
    #[should_panic(expected = "the variant object is empty")]
    fn test_apply_empty_panics() {
        Number::empty().apply(Len);
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Number::empty()), "Variant(<empty>)");
        assert_eq!(format!("{:?}", Number::new(3)), "Variant(0, 3)");
        assert_eq!(format!("{:?}", Number::new(String::from("x"))), "Variant(1, \"x\")");
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Number::new(3).type_name(), Some("i32"));
    }
}
