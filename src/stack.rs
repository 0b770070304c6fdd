use std::fmt;
use std::mem;

use crate::error::{HolderError, Result};
use crate::list_node::{Iter, Link, ListNode};

// =============================================================================
// Stack contract
// =============================================================================

/// Last-in-first-out holder of strings.
///
/// Only the most recently pushed value is observable. `pop` and `top` fail
/// with [`HolderError::EmptyCollection`] on an empty stack; `push` fails with
/// [`HolderError::CapacityExceeded`] when the stack reports full.
pub trait Stack {
    fn push(&mut self, value: String) -> Result<()>;
    fn pop(&mut self) -> Result<()>;
    fn top(&self) -> Result<String>;
    fn is_empty(&self) -> bool;
    fn is_full(&self) -> bool;
    fn len(&self) -> usize;

    /// Writes the values from top to bottom, each followed by a space.
    fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result;
}

// =============================================================================
// ArrayStack: fixed capacity, contiguous buffer
// =============================================================================

#[derive(Debug)]
pub struct ArrayStack {
    buf: Box<[String]>,
    size: usize,
}

impl ArrayStack {
    pub const NAME: &'static str = "AS";

    pub fn new(capacity: usize) -> Self {
        ArrayStack {
            buf: vec![String::new(); capacity].into_boxed_slice(),
            size: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }
}

impl Stack for ArrayStack {
    fn push(&mut self, value: String) -> Result<()> {
        if self.is_full() {
            return Err(HolderError::full(Self::NAME, "push", self.capacity()));
        }
        self.buf[self.size] = value;
        self.size += 1;
        Ok(())
    }

    fn pop(&mut self) -> Result<()> {
        if self.is_empty() {
            return Err(HolderError::empty(Self::NAME, "pop"));
        }
        self.size -= 1;
        // Release the string now rather than when the slot is overwritten
        drop(mem::take(&mut self.buf[self.size]));
        Ok(())
    }

    fn top(&self) -> Result<String> {
        if self.is_empty() {
            return Err(HolderError::empty(Self::NAME, "top"));
        }
        Ok(self.buf[self.size - 1].clone())
    }

    fn is_empty(&self) -> bool {
        self.size == 0
    }

    fn is_full(&self) -> bool {
        self.size == self.capacity()
    }

    fn len(&self) -> usize {
        self.size
    }

    fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        for word in self.buf[..self.size].iter().rev() {
            write!(out, "{word} ")?;
        }
        Ok(())
    }
}

impl fmt::Display for ArrayStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f)
    }
}

// =============================================================================
// LinkedStack: unbounded, push/pop at the head of a chain
// =============================================================================

#[derive(Debug, Default)]
pub struct LinkedStack {
    // Owns every node reachable from here.
    head: Link,
    len: usize,
}

impl LinkedStack {
    pub const NAME: &'static str = "LS";

    pub fn new() -> Self {
        LinkedStack { head: None, len: 0 }
    }

    fn nodes(&self) -> Iter<'_> {
        // SAFETY: the chain is owned by self and only mutated through &mut self.
        unsafe { ListNode::iter(self.head) }
    }
}

impl Stack for LinkedStack {
    fn push(&mut self, value: String) -> Result<()> {
        self.head = Some(ListNode::alloc(value, self.head));
        self.len += 1;
        Ok(())
    }

    fn pop(&mut self) -> Result<()> {
        let old_head = self.head.ok_or_else(|| HolderError::empty(Self::NAME, "pop"))?;
        // SAFETY: old_head came from ListNode::alloc and is unlinked right here,
        // so it is released exactly once.
        let node = unsafe { ListNode::release(old_head) };
        self.head = node.next;
        self.len -= 1;
        Ok(())
    }

    fn top(&self) -> Result<String> {
        self.nodes()
            .next()
            .map(|node| node.data.clone())
            .ok_or_else(|| HolderError::empty(Self::NAME, "top"))
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

impl fmt::Display for LinkedStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f)
    }
}

impl Drop for LinkedStack {
    fn drop(&mut self) {
        // SAFETY: every node in the chain is owned by self and still live.
        unsafe { ListNode::delete_list(self.head.take()) };
    }
}

// SAFETY: LinkedStack exclusively owns its chain, so moving it moves every node.
unsafe impl Send for LinkedStack {}

// SAFETY: &LinkedStack only reads the chain; all mutation needs &mut self.
unsafe impl Sync for LinkedStack {}

// =============================================================================
// Tests
// =============================================================================
