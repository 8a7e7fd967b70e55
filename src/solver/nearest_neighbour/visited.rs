/// Visited flags for one construction run, indexed by location position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedSet {
    flags: Vec<bool>,
}

impl VisitedSet {
    /// All locations start unvisited.
    pub fn new(size: usize) -> Self {
        VisitedSet {
            flags: vec![false; size],
        }
    }

    /// Marks `index` as visited. Returns false if it already was.
    pub fn mark(&mut self, index: usize) -> bool {
        if self.flags[index] {
            return false;
        }
        self.flags[index] = true;
        true
    }

    pub fn contains(&self, index: usize) -> bool {
        self.flags[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marking_twice_is_reported() {
        let mut visited = VisitedSet::new(3);

        assert!(visited.mark(1));
        assert!(!visited.mark(1));
        assert!(visited.contains(1));
        assert!(!visited.contains(0));
        assert!(!visited.contains(2));
    }
}
