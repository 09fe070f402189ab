//! Block storage for the deque: an arena of fixed-capacity blocks linked
//! into a doubly-linked chain, addressed by copyable cursors.
//!
//! # Implementation details
//! - **Index handles**: blocks reference their neighbours through
//!   `Option<BlockId>` instead of pointers, so the chain has no aliasing and
//!   no unsafe link surgery.
//! - **Free list**: detached blocks are recycled through an intrusive free
//!   list rather than shrinking the arena.
//! - **Pure cursors**: a [`Cursor`] is a plain `(block, index)` value; moving
//!   it produces a fresh cursor and crossing past the end of the chain is an
//!   explicit `None`, never an out-of-range index.

/// Handle to a block inside a [`Chain`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct BlockId(u32);

impl BlockId {
    #[inline(always)]
    fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Direction of travel along the chain. `Forward` runs from the left end
/// toward the right end.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Direction {
    Forward,
    Backward,
}

/// A fixed-capacity run of slots plus links to the neighbouring blocks.
///
/// A slot holds `Some(element)` or nothing; the chain never stores an
/// element outside the occupied span, so emptiness of a slot is meaningful.
struct Block<T> {
    slots: Box<[Option<T>]>,
    prev: Option<BlockId>,
    next: Option<BlockId>,
}

/// An arena node: either a live block or a vacant slot threaded onto the
/// free list.
enum Node<T> {
    Block(Block<T>),
    Vacant(Option<BlockId>),
}

/// The arena owning every block of one deque, plus the block capacity shared
/// by all of them.
pub(crate) struct Chain<T> {
    nodes: Vec<Node<T>>,
    free_head: Option<BlockId>,
    capacity: usize,
}

/// A position in the chain: one slot of one block.
///
/// Cursors are immutable values. Stepping never mutates; it returns a new
/// cursor, or `None` when there is no adjacent position.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Cursor {
    pub(crate) block: BlockId,
    pub(crate) index: usize,
}

impl Cursor {
    /// The next position, crossing into the following block when this cursor
    /// sits on its block's last slot.
    pub(crate) fn next<T>(self, chain: &Chain<T>) -> Option<Cursor> {
        if self.index + 1 < chain.capacity {
            Some(Cursor {
                block: self.block,
                index: self.index + 1,
            })
        } else {
            chain.next_block(self.block).map(|block| Cursor { block, index: 0 })
        }
    }

    /// The previous position, crossing into the preceding block when this
    /// cursor sits on its block's first slot.
    pub(crate) fn prev<T>(self, chain: &Chain<T>) -> Option<Cursor> {
        if self.index > 0 {
            Some(Cursor {
                block: self.block,
                index: self.index - 1,
            })
        } else {
            chain.prev_block(self.block).map(|block| Cursor {
                block,
                index: chain.capacity - 1,
            })
        }
    }

    /// `next` or `prev`, selected by `dir`.
    pub(crate) fn step<T>(self, chain: &Chain<T>, dir: Direction) -> Option<Cursor> {
        match dir {
            Direction::Forward => self.next(chain),
            Direction::Backward => self.prev(chain),
        }
    }
}

impl<T> Chain<T> {
    /// Creates a chain holding a single unlinked block and returns it
    /// alongside the block's handle.
    pub(crate) fn new(capacity: usize) -> (Self, BlockId) {
        let mut chain = Self {
            nodes: Vec::new(),
            free_head: None,
            capacity,
        };
        let root = chain.alloc(None, None);
        (chain, root)
    }

    /// Discards every block and restores the single-fresh-block shape of a
    /// newly built chain. Any remaining elements are dropped.
    pub(crate) fn reset(&mut self) -> BlockId {
        self.nodes.clear();
        self.free_head = None;
        self.alloc(None, None)
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// The slot index where the first element of an empty deque lands.
    #[inline(always)]
    pub(crate) fn center(&self) -> usize {
        (self.capacity - 1) / 2
    }

    /// Number of live (non-vacant) blocks. Test observability.
    pub(crate) fn live_blocks(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node, Node::Block(_)))
            .count()
    }

    // --- Linkage ---

    pub(crate) fn next_block(&self, id: BlockId) -> Option<BlockId> {
        self.block(id).next
    }

    pub(crate) fn prev_block(&self, id: BlockId) -> Option<BlockId> {
        self.block(id).prev
    }

    /// Appends a fresh block past `end`, the outermost block in direction
    /// `dir`, and returns the new end block.
    pub(crate) fn grow(&mut self, end: BlockId, dir: Direction) -> BlockId {
        match dir {
            Direction::Forward => {
                let id = self.alloc(Some(end), None);
                self.block_mut(end).next = Some(id);
                id
            }
            Direction::Backward => {
                let id = self.alloc(None, Some(end));
                self.block_mut(end).prev = Some(id);
                id
            }
        }
    }

    /// Unlinks `end`, the outermost block in direction `dir`, recycles its
    /// node, and returns the block that becomes the new end.
    pub(crate) fn trim(&mut self, end: BlockId, dir: Direction) -> BlockId {
        let neighbour = match dir {
            Direction::Forward => self.block(end).prev,
            Direction::Backward => self.block(end).next,
        };
        let neighbour = match neighbour {
            Some(neighbour) => neighbour,
            None => unreachable!("trimming the only block in the chain"),
        };
        match dir {
            Direction::Forward => self.block_mut(neighbour).next = None,
            Direction::Backward => self.block_mut(neighbour).prev = None,
        }
        self.release(end);
        neighbour
    }

    // --- Slot access ---

    pub(crate) fn get(&self, at: Cursor) -> Option<&T> {
        self.block(at.block).slots[at.index].as_ref()
    }

    pub(crate) fn take(&mut self, at: Cursor) -> Option<T> {
        self.block_mut(at.block).slots[at.index].take()
    }

    pub(crate) fn put(&mut self, at: Cursor, value: T) {
        self.block_mut(at.block).slots[at.index] = Some(value);
    }

    /// Moves the contents of slot `from` into slot `to`, leaving `from`
    /// empty.
    pub(crate) fn shift(&mut self, from: Cursor, to: Cursor) {
        let value = self.block_mut(from.block).slots[from.index].take();
        self.block_mut(to.block).slots[to.index] = value;
    }

    // --- Arena internals ---

    fn alloc(&mut self, prev: Option<BlockId>, next: Option<BlockId>) -> BlockId {
        let block = Block {
            slots: (0..self.capacity).map(|_| None).collect(),
            prev,
            next,
        };
        match self.free_head {
            Some(id) => {
                let next_free = match &self.nodes[id.as_usize()] {
                    Node::Vacant(next_free) => *next_free,
                    Node::Block(_) => unreachable!("free list points at a live block"),
                };
                self.free_head = next_free;
                self.nodes[id.as_usize()] = Node::Block(block);
                id
            }
            None => {
                let id = BlockId(self.nodes.len() as u32);
                self.nodes.push(Node::Block(block));
                id
            }
        }
    }

    fn release(&mut self, id: BlockId) {
        self.nodes[id.as_usize()] = Node::Vacant(self.free_head);
        self.free_head = Some(id);
    }

    fn block(&self, id: BlockId) -> &Block<T> {
        match &self.nodes[id.as_usize()] {
            Node::Block(block) => block,
            Node::Vacant(_) => unreachable!("block handle addresses a vacant arena node"),
        }
    }

    fn block_mut(&mut self, id: BlockId) -> &mut Block<T> {
        match &mut self.nodes[id.as_usize()] {
            Node::Block(block) => block,
            Node::Vacant(_) => unreachable!("block handle addresses a vacant arena node"),
        }
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_cursor_steps_within_block() {
        let (chain, root): (Chain<i32>, _) = Chain::new(4);
        let at = Cursor { block: root, index: 1 };

        let next = at.next(&chain).unwrap();
        assert_eq!(next, Cursor { block: root, index: 2 });

        let prev = at.prev(&chain).unwrap();
        assert_eq!(prev, Cursor { block: root, index: 0 });

        assert_eq!(at.step(&chain, Direction::Forward), Some(next));
        assert_eq!(at.step(&chain, Direction::Backward), Some(prev));
    }

    #[test]
    fn test_chain_cursor_stops_at_chain_edges() {
        let (chain, root): (Chain<i32>, _) = Chain::new(4);

        let last = Cursor { block: root, index: 3 };
        assert_eq!(last.next(&chain), None);

        let first = Cursor { block: root, index: 0 };
        assert_eq!(first.prev(&chain), None);
    }

    #[test]
    fn test_chain_cursor_crosses_block_boundary() {
        let (mut chain, root): (Chain<i32>, _) = Chain::new(4);
        let right = chain.grow(root, Direction::Forward);

        let last_of_root = Cursor { block: root, index: 3 };
        assert_eq!(last_of_root.next(&chain), Some(Cursor { block: right, index: 0 }));

        let first_of_right = Cursor { block: right, index: 0 };
        assert_eq!(first_of_right.prev(&chain), Some(last_of_root));
    }

    #[test]
    fn test_chain_grow_links_both_directions() {
        let (mut chain, root): (Chain<i32>, _) = Chain::new(2);

        let right = chain.grow(root, Direction::Forward);
        assert_eq!(chain.next_block(root), Some(right));
        assert_eq!(chain.prev_block(right), Some(root));
        assert_eq!(chain.next_block(right), None);

        let left = chain.grow(root, Direction::Backward);
        assert_eq!(chain.prev_block(root), Some(left));
        assert_eq!(chain.next_block(left), Some(root));
        assert_eq!(chain.prev_block(left), None);

        assert_eq!(chain.live_blocks(), 3);
    }

    #[test]
    fn test_chain_trim_detaches_and_recycles() {
        let (mut chain, root): (Chain<i32>, _) = Chain::new(2);
        let right = chain.grow(root, Direction::Forward);

        let new_end = chain.trim(right, Direction::Forward);
        assert_eq!(new_end, root);
        assert_eq!(chain.next_block(root), None);
        assert_eq!(chain.live_blocks(), 1);

        // The vacant node is reused before the arena grows again.
        let reused = chain.grow(root, Direction::Backward);
        assert_eq!(reused, right);
        assert_eq!(chain.live_blocks(), 2);
    }

    #[test]
    fn test_chain_slot_access_and_shift() {
        let (mut chain, root): (Chain<i32>, _) = Chain::new(4);
        let a = Cursor { block: root, index: 0 };
        let b = Cursor { block: root, index: 3 };

        chain.put(a, 7);
        assert_eq!(chain.get(a), Some(&7));
        assert_eq!(chain.get(b), None);

        chain.shift(a, b);
        assert_eq!(chain.get(a), None);
        assert_eq!(chain.get(b), Some(&7));

        assert_eq!(chain.take(b), Some(7));
        assert_eq!(chain.take(b), None);
    }

    #[test]
    fn test_chain_reset_restores_single_block() {
        let (mut chain, root): (Chain<i32>, _) = Chain::new(2);
        chain.put(Cursor { block: root, index: 0 }, 1);
        chain.grow(root, Direction::Forward);
        chain.grow(root, Direction::Backward);
        assert_eq!(chain.live_blocks(), 3);

        let fresh = chain.reset();
        assert_eq!(chain.live_blocks(), 1);
        assert_eq!(chain.next_block(fresh), None);
        assert_eq!(chain.prev_block(fresh), None);
        assert_eq!(chain.get(Cursor { block: fresh, index: 0 }), None);
    }

    #[test]
    fn test_chain_center_is_unbiased() {
        assert_eq!(Chain::<i32>::new(8).0.center(), 3);
        assert_eq!(Chain::<i32>::new(3).0.center(), 1);
        assert_eq!(Chain::<i32>::new(1).0.center(), 0);
    }
}
