use std::fmt;
use std::mem;

use crate::error::{HolderError, Result};
use crate::list_node::{Iter, Link, ListNode};

// =============================================================================
// Queue contract
// =============================================================================

/// First-in-first-out holder of strings.
///
/// Only the earliest enqueued value is observable. `deq` and `next` fail
/// with [`HolderError::EmptyCollection`] on an empty queue; `enq` fails with
/// [`HolderError::CapacityExceeded`] when the queue reports full.
pub trait Queue {
    fn enq(&mut self, value: String) -> Result<()>;
    fn deq(&mut self) -> Result<()>;
    fn next(&self) -> Result<String>;
    fn is_empty(&self) -> bool;
    fn is_full(&self) -> bool;
    fn len(&self) -> usize;

    /// Writes the values from front to rear, each followed by a space.
    fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result;
}

// =============================================================================
// ArrayQueue: circular buffer with one sentinel slot
// =============================================================================

/// Bounded queue over `capacity + 1` slots.
///
/// The live values occupy `[front, rear)` modulo the slot count. One slot is
/// always left unused, so `front == rear` means empty and
/// `(rear + 1) % slots == front` means full.
#[derive(Debug)]
pub struct ArrayQueue {
    buf: Box<[String]>,
    front: usize,
    rear: usize,
}

impl ArrayQueue {
    pub const NAME: &'static str = "AQ";

    /// # Panics
    ///
    /// Panics if `capacity + 1` slots cannot be counted in a `usize`.
    pub fn new(capacity: usize) -> Self {
        let slots = capacity
            .checked_add(1)
            .unwrap_or_else(|| panic!("ArrayQueue capacity {capacity} leaves no room for the sentinel slot"));
        ArrayQueue {
            buf: vec![String::new(); slots].into_boxed_slice(),
            front: 0,
            rear: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots() - 1
    }

    fn slots(&self) -> usize {
        self.buf.len()
    }

    fn advance(&self, index: usize) -> usize {
        (index + 1) % self.slots()
    }
}

impl Queue for ArrayQueue {
    fn enq(&mut self, value: String) -> Result<()> {
        if self.is_full() {
            return Err(HolderError::full(Self::NAME, "enq", self.capacity()));
        }
        self.buf[self.rear] = value;
        self.rear = self.advance(self.rear);
        Ok(())
    }

    fn deq(&mut self) -> Result<()> {
        if self.is_empty() {
            return Err(HolderError::empty(Self::NAME, "deq"));
        }
        drop(mem::take(&mut self.buf[self.front]));
        self.front = self.advance(self.front);
        Ok(())
    }

    fn next(&self) -> Result<String> {
        if self.is_empty() {
            return Err(HolderError::empty(Self::NAME, "next"));
        }
        Ok(self.buf[self.front].clone())
    }

    fn is_empty(&self) -> bool {
        self.front == self.rear
    }

    fn is_full(&self) -> bool {
        self.advance(self.rear) == self.front
    }

    fn len(&self) -> usize {
        (self.rear + self.slots() - self.front) % self.slots()
    }

    fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        let mut i = self.front;
        while i != self.rear {
            write!(out, "{} ", self.buf[i])?;
            i = self.advance(i);
        }
        Ok(())
    }
}

impl fmt::Display for ArrayQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f)
    }
}

// =============================================================================
// LinkedQueue: owning head, non-owning tail
// =============================================================================

#[derive(Debug, Default)]
pub struct LinkedQueue {
    // Owns every node reachable from here.
    head: Link,
    // Last node of the chain owned by `head`; None iff the chain is empty.
    tail: Link,
    len: usize,
}

impl LinkedQueue {
    pub const NAME: &'static str = "LQ";

    pub fn new() -> Self {
        LinkedQueue {
            head: None,
            tail: None,
            len: 0,
        }
    }

    fn nodes(&self) -> Iter<'_> {
        // SAFETY: the chain is owned by self and only mutated through &mut self.
        unsafe { ListNode::iter(self.head) }
    }
}

impl Queue for LinkedQueue {
    fn enq(&mut self, value: String) -> Result<()> {
        let node = ListNode::alloc(value, None);

        match self.tail {
            None => self.head = Some(node),
            Some(tail) => {
                // SAFETY: tail is the live last node of the chain this queue owns,
                // and &mut self rules out any outstanding reference into it.
                unsafe { (*tail.as_ptr()).next = Some(node) };
            }
        }

        self.tail = Some(node);
        self.len += 1;
        Ok(())
    }

    fn deq(&mut self) -> Result<()> {
        let old_head = self.head.ok_or_else(|| HolderError::empty(Self::NAME, "deq"))?;
        // SAFETY: old_head came from ListNode::alloc and is unlinked right here,
        // so it is released exactly once.
        let node = unsafe { ListNode::release(old_head) };
        self.head = node.next;
        self.len -= 1;

        if self.head.is_none() {
            self.tail = None;
        }
        Ok(())
    }

    fn next(&self) -> Result<String> {
        self.nodes()
            .next()
            .map(|node| node.data.clone())
            .ok_or_else(|| HolderError::empty(Self::NAME, "next"))
    }

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn is_full(&self) -> bool {
        false
    }

    fn len(&self) -> usize {
        self.len
    }

    fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        ListNode::print_chain(self.nodes(), out)
    }
}

impl fmt::Display for LinkedQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f)
    }
}

impl Drop for LinkedQueue {
    fn drop(&mut self) {
        self.tail = None;
        // SAFETY: every node in the chain is owned by self and still live.
        unsafe { ListNode::delete_list(self.head.take()) };
    }
}

// SAFETY: LinkedQueue exclusively owns its chain; `tail` only aliases a node
// inside that chain, so moving the queue moves every node with it.
unsafe impl Send for LinkedQueue {}

// SAFETY: &LinkedQueue only reads the chain; all mutation needs &mut self.
unsafe impl Sync for LinkedQueue {}

// =============================================================================
// Tests
// =============================================================================
