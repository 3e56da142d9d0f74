use std::fmt;

/// A set of integers in the range `0..capacity`. Sets start full and only shrink.
#[derive(Clone, PartialEq)]
pub struct RangeSet {
    len: usize,
    members: Vec<bool>,
}

impl RangeSet {
    /// Creates a set containing every value below `capacity`
    pub fn with_all(capacity: usize) -> RangeSet {
        RangeSet {
            len: capacity,
            members: vec![true; capacity],
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if `n` was in the set
    pub fn remove(&mut self, n: usize) -> bool {
        match self.members.get_mut(n) {
            Some(member) if *member => {
                *member = false;
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, n: usize) -> bool {
        self.members.get(n).copied().unwrap_or(false)
    }

    /// Removes every value for which `f` returns false. Returns the number of values removed.
    pub fn retain(&mut self, mut f: impl FnMut(usize) -> bool) -> usize {
        let mut removed = 0;
        for (n, member) in self.members.iter_mut().enumerate() {
            if *member && !f(n) {
                *member = false;
                removed += 1;
            }
        }
        self.len -= removed;
        removed
    }

    pub fn single_value(&self) -> Option<usize> {
        match self.len {
            1 => self.iter().next(),
            _ => None,
        }
    }

    /// Values in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter(|&(_, &member)| member)
            .map(|(n, _)| n)
    }
}

impl fmt::Debug for RangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
