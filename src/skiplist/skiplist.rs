// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

use std::fmt::{
    self,
    Debug,
};

use tracing::{
    debug,
    error,
    instrument,
    trace,
};

use crate::{
    config::{
        SkipListConfig,
        MIN_HEIGHT,
    },
    errs::SkipListError,
    skiplist::{
        level_generator::{
            BinomialLevelGenerator,
            LevelGenerator,
        },
        skipnode::{
            head_row,
            Lane,
            NodeId,
            Row,
            SkipNode,
        },
    },
};

/// Outcome of trying to link a node into one lane of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Raise {
    /// The row has no such lane, the promotion ran past the top.
    OutOfLanes,
    /// The row does not take part in the lane. Whoever is further up the
    /// descent has to link it instead.
    NotOwned,
    Linked,
}

/// Either the head row or the row of a given node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowRef {
    Head,
    Node(NodeId),
}

/// A freshly inserted node on its way up: the next lane to link it into and
/// how many promotions it still has left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Promotion {
    pub(crate) node: NodeId,
    pub(crate) level: usize,
    pub(crate) remaining: usize,
}

/// An ordered multiset backed by a skip list with a fixed number of express
/// lanes.
///
/// Every value lives on the base chain in non-decreasing order. Each node can
/// additionally be promoted into the express lanes above it, which the
/// insertion path uses to skip over long runs of the base chain. Equal values
/// are all kept, the most recently inserted one in front.
pub struct SkipList<T, G = BinomialLevelGenerator> {
    pub(super) height: usize,
    pub(super) head: Row,
    pub(super) first: Option<NodeId>,
    pub(super) nodes: Vec<SkipNode<T>>,
    generator: G,
}

impl<T> SkipList<T> {
    /// Create a list with `height` levels, base included, using the default
    /// promotion probability.
    pub fn new(height: usize) -> Result<Self, SkipListError> {
        Self::with_config(SkipListConfig::default().with_height(height))
    }

    #[instrument(level = "debug")]
    pub fn with_config(config: SkipListConfig) -> Result<Self, SkipListError> {
        config.validate()?;
        let generator = match config.seed() {
            | Some(seed) => {
                BinomialLevelGenerator::with_seed(config.lanes(), config.probability(), seed)?
            },
            | None => BinomialLevelGenerator::new(config.lanes(), config.probability())?,
        };
        Self::with_generator(config.height(), generator)
    }
}

impl<T, G: LevelGenerator> SkipList<T, G> {
    /// Create a list that draws promotion counts from `generator`.
    #[instrument(level = "debug", skip(generator))]
    pub fn with_generator(height: usize, generator: G) -> Result<Self, SkipListError> {
        if height < MIN_HEIGHT {
            return Err(SkipListError::InvalidHeight(height));
        }
        debug!(height, lanes = height - 1, "creating skiplist");

        Ok(SkipList {
            height,
            head: head_row(height - 1),
            first: None,
            nodes: Vec::new(),
            generator,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    #[inline]
    pub(super) fn node(&self, id: NodeId) -> &SkipNode<T> {
        &self.nodes[id.index()]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut SkipNode<T> {
        &mut self.nodes[id.index()]
    }

    pub(super) fn row(&self, row: RowRef) -> &[Lane] {
        match row {
            | RowRef::Head => &self.head[..],
            | RowRef::Node(id) => &self.node(id).lanes[..],
        }
    }

    fn row_mut(&mut self, row: RowRef) -> &mut [Lane] {
        match row {
            | RowRef::Head => &mut self.head[..],
            | RowRef::Node(id) => &mut self.node_mut(id).lanes[..],
        }
    }

    fn alloc(&mut self, value: T, next: Option<NodeId>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(SkipNode::new(value, next, self.height - 1));
        id
    }
}

impl<T: Ord + Debug, G: LevelGenerator> SkipList<T, G> {
    /// Insert `value`, keeping any equal values already present.
    ///
    /// # Panics
    ///
    /// Panics if the express lanes were ever linked out of order. That can
    /// only happen through a bug in the list itself.
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, value: T) {
        let promotion = match self.lane_entry(RowRef::Head, &value) {
            | Some(start) => self.fast_insert(start, value),
            | None => {
                let (node, remaining) = self.insert_at_base(value);
                Promotion {
                    node,
                    level: 0,
                    remaining,
                }
            },
        };

        let promotion = self.promote(RowRef::Head, promotion);
        trace!(
            node = promotion.node.index(),
            level = promotion.level,
            unused = promotion.remaining,
            "inserted"
        );
    }

    /// Handles the base entry point when no head lane can skip ahead.
    fn insert_at_base(&mut self, value: T) -> (NodeId, usize) {
        let first = self.first;
        match first {
            | Some(first) if value > self.node(first).value => self.insert_linear(first, value),
            | first => {
                let node = self.alloc(value, first);
                self.first = Some(node);
                (node, self.generator.random())
            },
        }
    }

    /// Walks the base chain from `from` and splices `value` in front of the
    /// first node that is not smaller than it. Returns the new node and its
    /// promotion count.
    pub(crate) fn insert_linear(&mut self, from: NodeId, value: T) -> (NodeId, usize) {
        let mut current = from;
        while let Some(next) = self.node(current).next {
            if value <= self.node(next).value {
                break;
            }
            current = next;
        }

        let successor = self.node(current).next;
        let node = self.alloc(value, successor);
        self.node_mut(current).next = Some(node);
        (node, self.generator.random())
    }

    /// Descends through the express lanes starting at `start`, inserts on the
    /// base chain once no lane can skip further, then links the new node into
    /// the lanes of every row it passed on the way down, deepest first.
    pub(crate) fn fast_insert(&mut self, start: NodeId, value: T) -> Promotion {
        let mut path = Vec::with_capacity(self.height - 1);
        let mut current = start;
        loop {
            path.push(current);
            match self.lane_entry(RowRef::Node(current), &value) {
                | Some(next) => current = next,
                | None => break,
            }
        }

        let (node, remaining) = self.insert_linear(current, value);
        path.into_iter().rev().fold(
            Promotion {
                node,
                level: 0,
                remaining,
            },
            |promotion, frame| self.promote(RowRef::Node(frame), promotion),
        )
    }

    /// The target of the highest lane in `row` that is strictly smaller than
    /// `value`.
    fn lane_entry(&self, row: RowRef, value: &T) -> Option<NodeId> {
        self.row(row)
            .iter()
            .rev()
            .filter_map(|lane| lane.target())
            .find(|&target| self.node(target).value < *value)
    }

    /// Links the node into consecutive lanes of `row` until it runs out of
    /// promotions, lanes, or lanes this row takes part in.
    pub(crate) fn promote(&mut self, row: RowRef, mut promotion: Promotion) -> Promotion {
        while promotion.remaining > 0 {
            match self.raise(row, promotion) {
                | Raise::Linked => {
                    promotion.level += 1;
                    promotion.remaining -= 1;
                },
                | Raise::OutOfLanes | Raise::NotOwned => break,
            }
        }
        promotion
    }

    /// Makes the node the successor of `row` on lane `promotion.level`,
    /// taking over the row's previous successor on that lane.
    pub(crate) fn raise(&mut self, row: RowRef, promotion: Promotion) -> Raise {
        let Promotion {
            node,
            level,
            remaining,
        } = promotion;

        let successor = match self.row(row).get(level).copied() {
            | None => return Raise::OutOfLanes,
            | Some(Lane::Vacant) => return Raise::NotOwned,
            | Some(Lane::Linked(successor)) => successor,
        };

        if let Some(successor) = successor {
            let source = &self.node(node).value;
            let target = &self.node(successor).value;
            if source > target {
                error!(?source, ?target, level, remaining, "backward express lane");
                panic!(
                    "raising {:?} to point at {:?} on lane {} would create a backward lane ({} \
                     promotions remaining)",
                    source, target, level, remaining
                );
            }
        }

        self.node_mut(node).lanes[level] = Lane::Linked(successor);
        self.row_mut(row)[level] = Lane::Linked(Some(node));
        trace!(node = node.index(), level, "raised");
        Raise::Linked
    }
}

impl<T: Debug, G> Debug for SkipList<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipList")
            .field("height", &self.height)
            .field("len", &self.nodes.len())
            .field("first", &self.first.map(|id| &self.nodes[id.index()].value))
            .finish()
    }
}

#[cfg(test)]
impl<T: Ord + Debug, G> SkipList<T, G> {
    /// Values along the base chain.
    pub(crate) fn base_values(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.nodes.len());
        let mut cursor = self.first;
        while let Some(id) = cursor {
            let node = &self.nodes[id.index()];
            values.push(&node.value);
            cursor = node.next;
        }
        values
    }

    /// Walks the base chain and every lane and asserts the ordering rules.
    pub(crate) fn check_invariants(&self) {
        let lanes = self.height - 1;
        assert_eq!(self.head.len(), lanes);

        let mut position = vec![None; self.nodes.len()];
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut cursor = self.first;
        while let Some(id) = cursor {
            assert!(position[id.index()].is_none(), "base chain loops at {:?}", id);
            position[id.index()] = Some(order.len());
            order.push(id);
            cursor = self.nodes[id.index()].next;
        }
        assert_eq!(order.len(), self.nodes.len(), "every node is on the base chain");
        for pair in order.windows(2) {
            assert!(self.nodes[pair[0].index()].value <= self.nodes[pair[1].index()].value);
        }

        for node in self.nodes.iter() {
            assert_eq!(node.lanes.len(), lanes);
            // towers are contiguous from the bottom lane
            assert!(node.lanes[node.level()..].iter().all(|lane| !lane.is_linked()));
        }

        for level in 0..lanes {
            let mut previous: Option<NodeId> = None;
            let mut cursor = self.head[level];
            let mut seen = 0;
            while let Lane::Linked(Some(id)) = cursor {
                let node = &self.nodes[id.index()];
                if let Some(prev) = previous {
                    let prev_node = &self.nodes[prev.index()];
                    assert!(
                        position[prev.index()] < position[id.index()],
                        "lane {} goes backwards on the base chain",
                        level
                    );
                    assert!(prev_node.value <= node.value, "lane {} is out of order", level);
                }
                previous = Some(id);
                seen += 1;
                cursor = node.lanes[level];
            }
            assert_eq!(cursor, Lane::Linked(None), "lane {} ends on a vacant slot", level);

            let members = self.nodes.iter().filter(|node| node.lanes[level].is_linked()).count();
            assert_eq!(seen, members, "lane {} has unreachable members", level);
        }
    }
}
