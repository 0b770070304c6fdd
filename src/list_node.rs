use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// Link to the next cell; `None` ends the chain.
pub type Link = Option<NonNull<ListNode>>;

/// One cell of a singly-linked chain.
///
/// Links are raw pointers produced by [`ListNode::alloc`]. The container
/// holding the head owns every node reachable from it and frees each one
/// exactly once through [`ListNode::release`] or [`ListNode::delete_list`].
#[derive(Debug)]
pub struct ListNode {
    pub data: String,
    pub next: Link,
}

impl ListNode {
    /// Allocates a node on the heap; ownership passes to the returned pointer.
    pub fn alloc(data: String, next: Link) -> NonNull<ListNode> {
        NonNull::from(Box::leak(Box::new(ListNode { data, next })))
    }

    /// Frees a node and hands back its contents.
    ///
    /// # Safety
    ///
    /// `node` must come from [`ListNode::alloc`], must not have been released
    /// already, and no reference into it may outlive this call.
    pub unsafe fn release(node: NonNull<ListNode>) -> ListNode {
        *Box::from_raw(node.as_ptr())
    }

    /// Frees a whole chain, one node at a time.
    ///
    /// # Safety
    ///
    /// Every node reachable from `head` must satisfy the contract of
    /// [`ListNode::release`].
    pub unsafe fn delete_list(mut head: Link) {
        while let Some(node) = head {
            head = Self::release(node).next;
        }
    }

    /// Iterates the chain starting at `head`.
    ///
    /// # Safety
    ///
    /// Every node reachable from `head` must stay allocated and unmodified for `'a`.
    pub unsafe fn iter<'a>(head: Link) -> Iter<'a> {
        Iter {
            current: head,
            _chain: PhantomData,
        }
    }

    /// Writes this node's value followed by a single space.
    pub fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{} ", self.data)
    }

    /// Prints every node yielded by `nodes`, in order.
    pub fn print_chain<'a>(
        nodes: impl Iterator<Item = &'a ListNode>,
        out: &mut dyn fmt::Write,
    ) -> fmt::Result {
        for node in nodes {
            node.print(out)?;
        }
        Ok(())
    }
}

pub struct Iter<'a> {
    current: Link,
    _chain: PhantomData<&'a ListNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ListNode;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            // SAFETY: Iter is only built by ListNode::iter, whose caller keeps
            // the chain alive and unmodified for 'a.
            let node: &'a ListNode = unsafe { &*node.as_ptr() };
            self.current = node.next;
            node
        })
    }
}
