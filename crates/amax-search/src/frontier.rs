use amax_core::AmaxError;

/// Depth-indexed candidate frontiers with explicit per-level lengths.
///
/// Slot `level + 1` is only ever written from slot `level`, so a frame at
/// depth `k` never sees its own slot overwritten by a descendant. Slot
/// buffers keep their capacity across siblings; they only grow the first
/// time a level needs more room.
#[derive(Debug, Clone, Default)]
pub struct FrontierArena {
    slots: Vec<Vec<usize>>,
    lengths: Vec<usize>,
}

impl FrontierArena {
    /// Reserves room for `levels` depth slots.
    pub fn with_levels(levels: usize) -> Result<Self, AmaxError> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(levels)?;
        let mut lengths = Vec::new();
        lengths.try_reserve_exact(levels)?;
        Ok(Self { slots, lengths })
    }

    /// Installs the level-0 candidates.
    pub fn seed(&mut self, candidates: &[usize]) -> Result<(), AmaxError> {
        self.ensure(0, candidates.len())?;
        self.slots[0][..candidates.len()].copy_from_slice(candidates);
        self.lengths[0] = candidates.len();
        Ok(())
    }

    /// Writes `slot[level + 1]` from the entries of `slot[level]` at or
    /// after `from` that `keep` accepts, preserving their order.
    pub fn fill_child<F>(&mut self, level: usize, from: usize, mut keep: F) -> Result<usize, AmaxError>
    where
        F: FnMut(usize) -> bool,
    {
        let child_level = level + 1;
        let parent_len = self.lengths[level];
        self.ensure(child_level, parent_len.saturating_sub(from))?;
        let (head, tail) = self.slots.split_at_mut(child_level);
        let child = &mut tail[0];
        let mut count = 0;
        for &entry in &head[level][from..parent_len] {
            if keep(entry) {
                child[count] = entry;
                count += 1;
            }
        }
        self.lengths[child_level] = count;
        Ok(count)
    }

    /// Active length of `level`.
    #[inline]
    pub fn len(&self, level: usize) -> usize {
        self.lengths[level]
    }

    /// Candidate at `position` of `level`.
    #[inline]
    pub fn get(&self, level: usize, position: usize) -> usize {
        self.slots[level][position]
    }

    /// Active candidates of `level`.
    pub fn slot(&self, level: usize) -> &[usize] {
        &self.slots[level][..self.lengths[level]]
    }

    /// Number of levels allocated so far.
    pub fn levels(&self) -> usize {
        self.slots.len()
    }

    fn ensure(&mut self, level: usize, capacity: usize) -> Result<(), AmaxError> {
        while self.slots.len() <= level {
            self.slots.try_reserve(1)?;
            self.lengths.try_reserve(1)?;
            self.slots.push(Vec::new());
            self.lengths.push(0);
        }
        let slot = &mut self.slots[level];
        if slot.len() < capacity {
            slot.try_reserve_exact(capacity - slot.len())?;
            slot.resize(capacity, 0);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_is_ordered_suffix_subset_of_parent() {
        let mut arena = FrontierArena::with_levels(3).unwrap();
        arena.seed(&[0, 2, 3, 5, 8, 9]).unwrap();
        let count = arena.fill_child(0, 2, |entry| entry % 2 == 1).unwrap();
        assert_eq!(count, 3);
        assert_eq!(arena.slot(1), &[3, 5, 9]);
        assert_eq!(arena.slot(0), &[0, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn sibling_overwrites_only_child_slot() {
        let mut arena = FrontierArena::with_levels(3).unwrap();
        arena.seed(&[1, 2, 3, 4]).unwrap();
        arena.fill_child(0, 0, |_| true).unwrap();
        arena.fill_child(1, 1, |entry| entry > 2).unwrap();
        assert_eq!(arena.slot(2), &[3, 4]);
        arena.fill_child(0, 3, |_| true).unwrap();
        assert_eq!(arena.slot(1), &[4]);
        assert_eq!(arena.slot(0), &[1, 2, 3, 4]);
        assert_eq!(arena.levels(), 3);
    }

    #[test]
    fn empty_suffix_gives_empty_child() {
        let mut arena = FrontierArena::with_levels(1).unwrap();
        arena.seed(&[7]).unwrap();
        assert_eq!(arena.fill_child(0, 1, |_| true).unwrap(), 0);
        assert!(arena.slot(1).is_empty());
    }
}
