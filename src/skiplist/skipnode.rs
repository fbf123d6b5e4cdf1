// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

/// Stable index of a node inside the list's arena. Nodes are never removed,
/// so an id stays valid for the life of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        NodeId(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// One slot of an express-lane row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lane {
    /// The row does not take part in this lane.
    Vacant,
    /// The row takes part in this lane. `None` means it is the last element
    /// of the lane.
    Linked(Option<NodeId>),
}

impl Lane {
    #[cfg(test)]
    pub(crate) fn is_linked(self) -> bool {
        matches!(self, Lane::Linked(_))
    }

    /// The successor on this lane, if any.
    pub(crate) fn target(self) -> Option<NodeId> {
        match self {
            | Lane::Linked(target) => target,
            | Lane::Vacant => None,
        }
    }
}

/// A fixed-length row of lanes. The head row and every node row have one
/// slot per express lane and are never resized.
pub(crate) type Row = Box<[Lane]>;

/// The head takes part in every lane from the start.
pub(crate) fn head_row(lanes: usize) -> Row {
    vec![Lane::Linked(None); lanes].into_boxed_slice()
}

/// A fresh node takes part in no lane until it is promoted.
pub(crate) fn node_row(lanes: usize) -> Row {
    vec![Lane::Vacant; lanes].into_boxed_slice()
}

/// SkipNodes make up the SkipList. The base link `next` is the owning chain
/// holding every value in order; the lanes only point further along it.
#[derive(Debug)]
pub(crate) struct SkipNode<T> {
    pub(crate) value: T,
    pub(crate) next: Option<NodeId>,
    pub(crate) lanes: Row,
}

impl<T> SkipNode<T> {
    pub(crate) fn new(value: T, next: Option<NodeId>, lanes: usize) -> Self {
        SkipNode {
            value,
            next,
            lanes: node_row(lanes),
        }
    }

    /// How many express lanes this node has been promoted into.
    #[cfg(test)]
    pub(crate) fn level(&self) -> usize {
        self.lanes.iter().take_while(|lane| lane.is_linked()).count()
    }
}
