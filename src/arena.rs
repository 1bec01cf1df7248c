//! Fixed-capacity, allocation-free storage for per-triangle scratch data.

use crate::error::CapacityError;

/// A vector with inline storage for at most `N` items.
///
/// Pushing past the capacity fails with [`CapacityError`] instead of
/// growing, so the clipper never allocates and never writes out of bounds.
#[derive(Clone, Copy, Debug)]
pub struct FixedVec<T: Copy + Default, const N: usize> {
    items: [T; N],
    len: usize,
}

impl<T: Copy + Default, const N: usize> FixedVec<T, N> {
    pub fn new() -> Self {
        Self {
            items: [T::default(); N],
            len: 0,
        }
    }

    /// Builds a full prefix from `items`. Fails to compile if `M > N`.
    pub fn from_array<const M: usize>(items: [T; M]) -> Self {
        const { assert!(M <= N, "array longer than FixedVec capacity") };
        let mut storage = [T::default(); N];
        storage[..M].copy_from_slice(&items);
        Self {
            items: storage,
            len: M,
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push(&mut self, item: T) -> Result<(), CapacityError> {
        let slot = self
            .items
            .get_mut(self.len)
            .ok_or(CapacityError { capacity: N })?;
        *slot = item;
        self.len += 1;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<T: Copy + Default, const N: usize> Default for FixedVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Copy + Default, const N: usize> IntoIterator for &'a FixedVec<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_until_full() {
        let mut v: FixedVec<u8, 2> = FixedVec::new();
        assert!(v.push(1).is_ok());
        assert!(v.push(2).is_ok());
        assert_eq!(v.push(3), Err(CapacityError { capacity: 2 }));
        assert_eq!(v.as_slice(), &[1, 2]);
    }

    #[test]
    fn from_array_fills_prefix() {
        let v: FixedVec<u8, 4> = FixedVec::from_array([3, 1, 2]);
        assert_eq!(v.len(), 3);
        assert_eq!(v.as_slice(), &[3, 1, 2]);

        let mut full: FixedVec<u8, 2> = FixedVec::from_array([1, 2]);
        assert_eq!(full.push(3), Err(CapacityError { capacity: 2 }));
    }

    #[test]
    fn clear_reuses_storage() {
        let mut v: FixedVec<u8, 2> = FixedVec::new();
        v.push(7).unwrap();
        v.clear();
        assert!(v.is_empty());
        v.push(9).unwrap();
        assert_eq!(v.as_slice(), &[9]);
    }
}
