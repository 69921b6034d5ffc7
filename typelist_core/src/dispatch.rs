//! Per-index dispatch tables.
//!
//! Each table is a `match` on the discriminant, with one arm per alternative
//! casting the untyped storage to that alternative. Indices past the end of the
//! list fall through to a no-op arm.

macro_rules! dispatch {
    ($($generic:ident = $index:literal),*) => (
        unsafe impl<$($generic),*> $crate::select::CloneList for ($($generic,)*)
        where
            $($generic: Clone + 'static),*
        {
            #[inline]
            unsafe fn copy_construct(
                index: usize,
                dst: *mut Self::Storage,
                src: *const Self::Storage,
            ) -> bool {
                match index {
                    $(
                        $index => {
                            let copy = (*src.cast::<$generic>()).clone();
                            ::std::ptr::write(dst.cast::<$generic>(), copy);
                            true
                        }
                    )*
                    _ => false,
                }
            }
        }

        unsafe impl<$($generic),*> $crate::select::EqList for ($($generic,)*)
        where
            $($generic: PartialEq + 'static),*
        {
            #[inline]
            unsafe fn equal(
                index: usize,
                lhs: *const Self::Storage,
                rhs: *const Self::Storage,
            ) -> bool {
                match index {
                    $($index => *lhs.cast::<$generic>() == *rhs.cast::<$generic>(),)*
                    _ => false,
                }
            }
        }

        impl<$($generic),*> $crate::select::TotalEqList for ($($generic,)*)
        where
            $($generic: Eq + 'static),*
        {}

        unsafe impl<$($generic),*> $crate::select::DebugList for ($($generic,)*)
        where
            $($generic: ::std::fmt::Debug + 'static),*
        {
            #[inline]
            unsafe fn debug<'a>(
                index: usize,
                storage: *const Self::Storage,
            ) -> Option<&'a dyn ::std::fmt::Debug> {
                match index {
                    $($index => Some(&*storage.cast::<$generic>() as &dyn ::std::fmt::Debug),)*
                    _ => None,
                }
            }
        }

        unsafe impl<V, R, $($generic),*> $crate::select::Apply<V> for ($($generic,)*)
        where
            $($generic: 'static,)*
            $(V: $crate::select::Visitor<$generic, Output = R>,)*
        {
            type Output = R;

            #[inline]
            unsafe fn apply(index: usize, storage: *const Self::Storage, visitor: &mut V) -> Option<R> {
                match index {
                    $(
                        $index => Some(<V as $crate::select::Visitor<$generic>>::visit(
                            visitor,
                            &*storage.cast::<$generic>(),
                        )),
                    )*
                    _ => None,
                }
            }
        }

        unsafe impl<V, R, $($generic),*> $crate::select::ApplyMut<V> for ($($generic,)*)
        where
            $($generic: 'static,)*
            $(V: $crate::select::VisitorMut<$generic, Output = R>,)*
        {
            type Output = R;

            #[inline]
            unsafe fn apply_mut(index: usize, storage: *mut Self::Storage, visitor: &mut V) -> Option<R> {
                match index {
                    $(
                        $index => Some(<V as $crate::select::VisitorMut<$generic>>::visit_mut(
                            visitor,
                            &mut *storage.cast::<$generic>(),
                        )),
                    )*
                    _ => None,
                }
            }
        }
    );
}
