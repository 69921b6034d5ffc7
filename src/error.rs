use thiserror::Error;

/// The reasons a typed access into a [`Variant`](crate::Variant) can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AccessError {
    #[error("the variant object is empty")]
    Empty,

    #[error(
        "stored type is not access type: requested alternative {requested} (`{requested_name}`), \
         but alternative {held} (`{held_name}`) is active"
    )]
    Mismatch {
        requested: usize,
        requested_name: &'static str,
        held: usize,
        held_name: &'static str,
    },

    #[error("discriminant {index} is out of range for a list of {len} alternatives")]
    OutOfRange { index: usize, len: usize },
}
