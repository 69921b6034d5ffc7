use std::any::{self, TypeId};
use std::mem::{self, ManuallyDrop};
use std::ptr;

use crate::select::TypeList;

macro_rules! doc_comment {
    ($x:expr, $($tt:tt)*) => {
        #[doc = $x]
        $($tt)*
    };
}

macro_rules! Union {
    (
        pub union $name:ident {
        $($fieldname:ident: $generic:ident = $index:literal),*
    }) => (
        doc_comment!(
            concat!("Storage for exactly one of the following alternatives: ", stringify!($($generic),*)),
            #[repr(C)]
            pub union $name<$($generic),*> {
                $($fieldname: ManuallyDrop<$generic>,)*
            }
        );

        unsafe impl<$($generic),*> TypeList for ($($generic,)*)
        where
            $($generic: 'static),*
        {
            type Storage = $name<$($generic),*>;

            const LEN: usize = [$(stringify!($generic)),*].len();

            const MAX_SIZE: usize = {
                let mut max = 0;
                $(
                    if mem::size_of::<$generic>() > max {
                        max = mem::size_of::<$generic>();
                    }
                )*
                max
            };

            #[inline]
            fn type_id_at(index: usize) -> Option<TypeId> {
                match index {
                    $($index => Some(TypeId::of::<$generic>()),)*
                    _ => None,
                }
            }

            #[inline]
            fn type_name_at(index: usize) -> Option<&'static str> {
                match index {
                    $($index => Some(any::type_name::<$generic>()),)*
                    _ => None,
                }
            }

            #[inline]
            unsafe fn destroy(index: usize, storage: *mut Self::Storage) -> bool {
                match index {
                    $(
                        $index => {
                            ptr::drop_in_place(storage.cast::<$generic>());
                            true
                        }
                    )*
                    _ => false,
                }
            }
        }

        dispatch!($($generic = $index),*);
    )
}

Union!(pub union Union1 { _a: A = 0 });
Union!(pub union Union2 { _a: A = 0, _b: B = 1 });
Union!(pub union Union3 { _a: A = 0, _b: B = 1, _c: C = 2 });
Union!(pub union Union4 {
    _a: A = 0, _b: B = 1, _c: C = 2, _d: D = 3
});
Union!(pub union Union5 {
    _a: A = 0, _b: B = 1, _c: C = 2, _d: D = 3, _e: E = 4
});
Union!(pub union Union6 {
    _a: A = 0, _b: B = 1, _c: C = 2, _d: D = 3, _e: E = 4, _f: F = 5
});
Union!(pub union Union7 {
    _a: A = 0, _b: B = 1, _c: C = 2, _d: D = 3, _e: E = 4, _f: F = 5, _g: G = 6
});
Union!(pub union Union8 {
    _a: A = 0, _b: B = 1, _c: C = 2, _d: D = 3, _e: E = 4, _f: F = 5, _g: G = 6, _h: H = 7
});
Union!(pub union Union9 {
    _a: A = 0, _b: B = 1, _c: C = 2, _d: D = 3, _e: E = 4, _f: F = 5, _g: G = 6, _h: H = 7,
    _i: I = 8
});
Union!(pub union Union10 {
    _a: A = 0, _b: B = 1, _c: C = 2, _d: D = 3, _e: E = 4, _f: F = 5, _g: G = 6, _h: H = 7,
    _i: I = 8, _j: J = 9
});
