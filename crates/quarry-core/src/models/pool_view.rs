use std::ops::Index;

/// Borrowed view over the working pool of one step.
///
/// Either the whole pool, or a subset addressed through `positions`, where
/// local index `i` refers to `items[positions[i]]`. No sample is copied.
pub struct PoolView<'a, T> {
    items: &'a [T],
    positions: Option<&'a [usize]>,
}

impl<'a, T> PoolView<'a, T> {
    /// View over every item, in order.
    pub fn full(items: &'a [T]) -> Self {
        Self {
            items,
            positions: None,
        }
    }

    /// View over `items[positions[0]], items[positions[1]], ...`.
    ///
    /// Positions must be in range for `items`; out-of-range positions are
    /// skipped by `get` and `iter`.
    pub fn subset(items: &'a [T], positions: &'a [usize]) -> Self {
        Self {
            items,
            positions: Some(positions),
        }
    }

    pub fn len(&self) -> usize {
        match self.positions {
            Some(positions) => positions.len(),
            None => self.items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Item at local index `i`.
    pub fn get(&self, i: usize) -> Option<&'a T> {
        match self.positions {
            Some(positions) => positions.get(i).and_then(|&p| self.items.get(p)),
            None => self.items.get(i),
        }
    }

    /// Items in local order.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// Positions into the underlying pool, `None` for a full view.
    pub fn positions(&self) -> Option<&'a [usize]> {
        self.positions
    }

    /// Whether this view restricts the underlying pool.
    pub fn is_subset(&self) -> bool {
        self.positions.is_some()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Clone for PoolView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PoolView<'_, T> {}

impl<T> Index<usize> for PoolView<'_, T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        match self.get(i) {
            Some(item) => item,
            None => panic!("pool view index {i} out of range for length {}", self.len()),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for PoolView<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
