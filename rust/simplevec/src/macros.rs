/// Creates a [`DynamicArray`](crate::DynamicArray) from a literal list of
/// values, the way `vec!` does for `Vec`.
///
/// - `dynarray![]` creates an empty array;
/// - `dynarray![a, b, c]` creates an array holding the values in order, with
///   the capacity equal to the number of values;
/// - `dynarray![value; n]` creates an array of `n` clones of `value`.
///
/// ```
/// use simplevec::dynarray;
///
/// let v = dynarray![1, 2, 3];
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.capacity(), 3);
///
/// let zeros = dynarray![0u8; 4];
/// assert_eq!(zeros.as_slice(), &[0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! dynarray {
    () => {
        $crate::DynamicArray::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::DynamicArray::from_elem($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::DynamicArray::from([$($x),+])
    };
}
