use crate::error::Result;
use crate::queue::{ArrayQueue, LinkedQueue, Queue};
use crate::stack::{ArrayStack, LinkedStack, Stack};

/// Uniform view over the four containers for the benchmark driver.
///
/// Stacks map `insert`/`remove` to `push`/`pop`, queues to `enq`/`deq`.
pub trait Holder {
    /// Short tag used in reports: "AS", "LS", "AQ" or "LQ".
    fn name(&self) -> &'static str;
    fn insert(&mut self, value: String) -> Result<()>;
    fn remove(&mut self) -> Result<()>;
    fn is_empty(&self) -> bool;
}

macro_rules! impl_holder {
    ($ty:ty, $contract:ident, $insert:ident, $remove:ident) => {
        impl Holder for $ty {
            fn name(&self) -> &'static str {
                <$ty>::NAME
            }

            fn insert(&mut self, value: String) -> Result<()> {
                $contract::$insert(self, value)
            }

            fn remove(&mut self) -> Result<()> {
                $contract::$remove(self)
            }

            fn is_empty(&self) -> bool {
                $contract::is_empty(self)
            }
        }
    };
}

impl_holder!(ArrayStack, Stack, push, pop);
impl_holder!(LinkedStack, Stack, push, pop);
impl_holder!(ArrayQueue, Queue, enq, deq);
impl_holder!(LinkedQueue, Queue, enq, deq);

/// Which of the four containers to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum HolderKind {
    #[serde(rename = "AS")]
    ArrayStack,
    #[serde(rename = "LS")]
    LinkedStack,
    #[serde(rename = "AQ")]
    ArrayQueue,
    #[serde(rename = "LQ")]
    LinkedQueue,
}

impl HolderKind {
    /// Default measurement order.
    pub const ALL: [HolderKind; 4] = [
        HolderKind::ArrayStack,
        HolderKind::LinkedStack,
        HolderKind::ArrayQueue,
        HolderKind::LinkedQueue,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            HolderKind::ArrayStack => ArrayStack::NAME,
            HolderKind::LinkedStack => LinkedStack::NAME,
            HolderKind::ArrayQueue => ArrayQueue::NAME,
            HolderKind::LinkedQueue => LinkedQueue::NAME,
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(tag.trim()))
    }

    /// Builds an empty holder; `capacity` only applies to the array variants.
    pub fn build(self, capacity: usize) -> Box<dyn Holder> {
        match self {
            HolderKind::ArrayStack => Box::new(ArrayStack::new(capacity)),
            HolderKind::LinkedStack => Box::new(LinkedStack::new()),
            HolderKind::ArrayQueue => Box::new(ArrayQueue::new(capacity)),
            HolderKind::LinkedQueue => Box::new(LinkedQueue::new()),
        }
    }
}
