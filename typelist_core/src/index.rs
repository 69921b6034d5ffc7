use crate::select::{sealed::Sealed, Find, Select, Selector};

macro_rules! IndexStruct {
    ($name:ident = $index:expr $(, $names:ident = $indices:expr)*) => (
        /// This type is used to 'index' into a tuple of alternatives.
        /// See [`Select`] what alternative it selects.
        #[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
        pub struct $name;

        impl Sealed for $name {}

        impl Selector for $name {
            const INDEX: usize = $index;
        }

        IndexStruct!($($names = $indices),*);
    );

    () => ();
}

IndexStruct!(
    Type1 = 0,
    Type2 = 1,
    Type3 = 2,
    Type4 = 3,
    Type5 = 4,
    Type6 = 5,
    Type7 = 6,
    Type8 = 7,
    Type9 = 8,
    Type10 = 9
);

macro_rules! impl_select {
    (
        NAMES = [$name:ident $(,$names:ident)*],
        GENERICS = [$current:tt $(,$generics:tt)*],
        COPIES = [$($copies:tt),*]
    ) => (
        impl<$($copies),*> Select<$name> for ($($copies,)*)
        where
            $($copies: 'static),*
        {
            type Output = $current;
        }

        impl<$($copies),*> Find<$current, $name> for ($($copies,)*)
        where
            $($copies: 'static),*
        {}

        impl_select!(
            NAMES = [$($names),*],
            GENERICS = [$($generics),*],
            COPIES = [$($copies),*]
        );
    );

    (
        NAMES = [],
        GENERICS = [],
        COPIES = [$($copies:tt),*]
    ) => ();
}

macro_rules! select {
    (
        NAMES = [$($names:ident),*],
        GENERICS = [$($generics:tt),*]
    ) => (
        select!(
            NAMES = [$($names),*],
            GENERICS = [$($generics),*],
            ALL_GENERICS = [$($generics),*]
        );
    );

    (
        NAMES = [$($names:ident),*],
        GENERICS = [$current:tt $(,$gens:tt)*],
        ALL_GENERICS = [$($all_generics:tt),*]
    ) => (
        impl_select!(
            NAMES = [$($names),*],
            GENERICS = [$current $(,$gens)*],
            COPIES = [$($all_generics),*]
        );
    );
}

select!(NAMES = [Type1], GENERICS = [A]);
select!(NAMES = [Type1, Type2], GENERICS = [A, B]);
select!(NAMES = [Type1, Type2, Type3], GENERICS = [A, B, C]);
select!(
    NAMES = [Type1, Type2, Type3, Type4],
    GENERICS = [A, B, C, D]
);
select!(
    NAMES = [Type1, Type2, Type3, Type4, Type5],
    GENERICS = [A, B, C, D, E]
);
select!(
    NAMES = [Type1, Type2, Type3, Type4, Type5, Type6],
    GENERICS = [A, B, C, D, E, F]
);
select!(
    NAMES = [Type1, Type2, Type3, Type4, Type5, Type6, Type7],
    GENERICS = [A, B, C, D, E, F, G]
);
select!(
    NAMES = [Type1, Type2, Type3, Type4, Type5, Type6, Type7, Type8],
    GENERICS = [A, B, C, D, E, F, G, H]
);
select!(
    NAMES = [Type1, Type2, Type3, Type4, Type5, Type6, Type7, Type8, Type9],
    GENERICS = [A, B, C, D, E, F, G, H, I]
);
select!(
    NAMES = [Type1, Type2, Type3, Type4, Type5, Type6, Type7, Type8, Type9, Type10],
    GENERICS = [A, B, C, D, E, F, G, H, I, J]
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::{index_of, At};

    #[test]
    fn test_selector_indices() {
        assert_eq!(Type1::INDEX, 0);
        assert_eq!(Type5::INDEX, 4);
        assert_eq!(Type10::INDEX, 9);
    }

    #[test]
    fn test_find_infers_position() {
        type List = (bool, char, u32, String, Vec<u8>, i64, u8, u16, i8, ());

        assert_eq!(index_of::<List, bool, _>(), 0);
        assert_eq!(index_of::<List, String, _>(), 3);
        assert_eq!(index_of::<List, (), _>(), 9);
    }

    #[test]
    fn test_select_single() {
        let value: At<(String,), Type1> = String::from("only");
        assert_eq!(value, "only");
    }
}
