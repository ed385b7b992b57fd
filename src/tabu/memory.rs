//! Short-term tabu memory.

use super::types::SwapMove;

/// Fixed-capacity ring buffer of recently applied moves.
///
/// Inserting into a full memory overwrites the oldest entry. Unused slots
/// (after construction or [`clear`](Self::clear)) hold `None`. Each tabu
/// worker owns its memory exclusively.
///
/// # Examples
///
/// ```
/// use u_salesman::tabu::{SwapMove, TabuMemory};
///
/// let mut memory = TabuMemory::new(2);
/// memory.insert(SwapMove::new(1, 2));
/// memory.insert(SwapMove::new(1, 3));
/// memory.insert(SwapMove::new(2, 3)); // evicts (1, 2)
/// assert!(!memory.contains(SwapMove::new(1, 2)));
/// assert!(memory.contains(SwapMove::new(3, 1)));
/// assert_eq!(memory.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TabuMemory {
    slots: Vec<Option<SwapMove>>,
    cursor: usize,
}

impl TabuMemory {
    /// Creates an empty memory holding up to `capacity` moves.
    ///
    /// # Panics
    /// Panics if `capacity == 0`.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "tabu capacity must be positive");
        Self {
            slots: vec![None; capacity],
            cursor: 0,
        }
    }

    /// Maximum number of moves remembered.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Whether no move is currently tabu.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Whether `mv` is currently tabu.
    pub fn contains(&self, mv: SwapMove) -> bool {
        self.slots.iter().any(|s| *s == Some(mv))
    }

    /// Records `mv`, overwriting the oldest entry when full.
    pub fn insert(&mut self, mv: SwapMove) {
        self.slots[self.cursor] = Some(mv);
        self.cursor = (self.cursor + 1) % self.slots.len();
    }

    /// Forgets every move and rewinds the insertion cursor.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
        self.cursor = 0;
    }

    /// Iterates occupied slots in storage order.
    pub fn iter(&self) -> impl Iterator<Item = SwapMove> + '_ {
        self.slots.iter().flatten().copied()
    }
}
