//! Swap moves tracked by the tabu memory.

/// An unordered pair of path positions to exchange.
///
/// Stored normalized so that `first < second`; `SwapMove::new(3, 7)` and
/// `SwapMove::new(7, 3)` are equal.
///
/// # Examples
///
/// ```
/// use u_salesman::tabu::SwapMove;
///
/// assert_eq!(SwapMove::new(7, 3), SwapMove::new(3, 7));
/// assert_eq!(SwapMove::new(7, 3).first(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapMove {
    first: usize,
    second: usize,
}

impl SwapMove {
    /// Creates a move between two distinct positions.
    ///
    /// # Panics
    /// Panics if `a == b`.
    pub fn new(a: usize, b: usize) -> Self {
        assert_ne!(a, b, "a swap needs two distinct positions");
        Self {
            first: a.min(b),
            second: a.max(b),
        }
    }

    /// The lower position.
    pub fn first(&self) -> usize {
        self.first
    }

    /// The higher position.
    pub fn second(&self) -> usize {
        self.second
    }

    /// Applies the swap to `nodes`.
    #[inline]
    pub fn apply(&self, nodes: &mut [usize]) {
        nodes.swap(self.first, self.second);
    }
}

/// A candidate move together with the cycle length it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    /// The swap.
    pub mv: SwapMove,
    /// Path length after applying the swap.
    pub length: u64,
}
