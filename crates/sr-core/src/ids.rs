//! Node identifier.
//!
//! `NodeId` orders like its inner integer, so comparing two tours as
//! `Vec<NodeId>` is the lexicographic comparison the exact search breaks ties
//! with.  The inner `u32` is `pub`; prefer [`NodeId::index`] for slicing.

use std::fmt;

/// Index of a network node.  Ids are dense, `0..node_count`, and stable for
/// the lifetime of a network.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    /// The conventional depot: the first node added.
    pub const DEPOT: NodeId = NodeId(0);

    /// Placeholder for "no node".
    pub const INVALID: NodeId = NodeId(u32::MAX);

    /// Row / column of this node in dense per-network tables.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<NodeId> for usize {
    #[inline(always)]
    fn from(id: NodeId) -> usize {
        id.index()
    }
}

impl TryFrom<usize> for NodeId {
    type Error = std::num::TryFromIntError;

    fn try_from(n: usize) -> Result<NodeId, Self::Error> {
        u32::try_from(n).map(NodeId)
    }
}
