/// Newtype that represents a node in a k-mer graph. IDs are dense and
/// assigned in insertion order, starting from zero.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct NodeId(pub u64);

impl NodeId {
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    #[inline]
    fn from(num: u64) -> Self {
        NodeId(num)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(num: usize) -> Self {
        NodeId(num as u64)
    }
}

impl From<NodeId> for u64 {
    #[inline]
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(id: NodeId) -> Self {
        id.0 as usize
    }
}

impl From<i32> for NodeId {
    #[inline]
    fn from(num: i32) -> Self {
        NodeId(num as u64)
    }
}

/// Index of an edge in the edge vector owned by a graph. Nodes refer
/// to their departing edges through these, never by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct EdgeIx(pub usize);

impl EdgeIx {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for EdgeIx {
    #[inline]
    fn from(ix: usize) -> Self {
        EdgeIx(ix)
    }
}

impl std::fmt::Display for EdgeIx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "e{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_conversions() {
        let id = NodeId::from(42usize);
        assert_eq!(u64::from(id), 42);
        assert_eq!(usize::from(id), 42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::from(42i32), id);
        assert!(NodeId::default().is_zero());
    }

    #[test]
    fn ids_display() {
        assert_eq!(NodeId(7).to_string(), "7");
        assert_eq!(EdgeIx(3).to_string(), "e3");
    }
}
