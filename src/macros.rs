/// Names the [`Variant`](crate::Variant) type over the given alternatives.
///
/// ```
/// use sumvariant::Variant;
///
/// let v: Variant![u8, String] = Variant::new(String::from("named"));
/// assert!(v.is::<String, _>());
/// ```
#[macro_export]
macro_rules! Variant {
    [$($alternative:ty),+ $(,)?] => [$crate::Variant<($($alternative,)+)>];
}
