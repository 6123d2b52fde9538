use std::ops::{Deref, DerefMut};

/// An owned, ordered array of one element type, used for image sizes,
/// strides, coordinates, pixel sizes and the like.
///
/// Elements are stored by value; handing an array across the boundary copies
/// it, so no reference into the original survives a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DimensionArray<T>(Vec<T>);

pub type UnsignedArray = DimensionArray<usize>;
pub type IntegerArray = DimensionArray<isize>;
pub type FloatArray = DimensionArray<f64>;
pub type BooleanArray = DimensionArray<bool>;
pub type StringArray = DimensionArray<String>;

impl<T> DimensionArray<T> {
    pub fn new() -> Self {
        DimensionArray(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        DimensionArray(Vec::with_capacity(capacity))
    }

    /// Reverses the element order in place.
    pub fn reverse(&mut self) {
        self.0.reverse();
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T: Clone> DimensionArray<T> {
    /// An array of `len` copies of `value`.
    pub fn filled(len: usize, value: T) -> Self {
        DimensionArray(vec![value; len])
    }
}

impl DimensionArray<usize> {
    /// Product of all elements; 1 for an empty array. Saturates at `usize::MAX`.
    pub fn product(&self) -> usize {
        self.checked_product().unwrap_or(usize::MAX)
    }

    /// Product of all elements, or `None` if it does not fit in a `usize`.
    /// Any zero element makes the product 0.
    pub fn checked_product(&self) -> Option<usize> {
        if self.0.contains(&0) {
            return Some(0);
        }
        self.0.iter().try_fold(1usize, |acc, &n| acc.checked_mul(n))
    }
}

impl<T> Deref for DimensionArray<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for DimensionArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<Vec<T>> for DimensionArray<T> {
    fn from(values: Vec<T>) -> Self {
        DimensionArray(values)
    }
}

impl<T: Clone> From<&[T]> for DimensionArray<T> {
    fn from(values: &[T]) -> Self {
        DimensionArray(values.to_vec())
    }
}

impl<T> FromIterator<T> for DimensionArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        DimensionArray(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for DimensionArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DimensionArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
