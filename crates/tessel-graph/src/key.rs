//! Orientation-free key for interaction metadata.

/// An unordered node pair.
///
/// `InteractionKey::new(a, b) == InteractionKey::new(b, a)`, so metadata
/// stored under one orientation is found under the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InteractionKey<N> {
    lo: N,
    hi: N,
}

impl<N: Ord> InteractionKey<N> {
    /// Build the key for the pair `{a, b}`.
    pub fn new(a: N, b: N) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// The smaller endpoint.
    pub fn lo(&self) -> &N {
        &self.lo
    }

    /// The larger endpoint.
    pub fn hi(&self) -> &N {
        &self.hi
    }

    /// `true` if `node` is either endpoint.
    pub fn touches(&self, node: &N) -> bool {
        self.lo == *node || self.hi == *node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_does_not_matter() {
        assert_eq!(InteractionKey::new(4, 1), InteractionKey::new(1, 4));
        let k = InteractionKey::new(9, 2);
        assert_eq!((*k.lo(), *k.hi()), (2, 9));
    }

    #[test]
    fn touches_either_endpoint() {
        let k = InteractionKey::new("a", "b");
        assert!(k.touches(&"a"));
        assert!(k.touches(&"b"));
        assert!(!k.touches(&"c"));
    }
}
