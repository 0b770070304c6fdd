//! Fixed-capacity and linked stacks and queues of strings, plus a small
//! harness that times bulk insert/remove rounds over a word list.

pub mod bench;
pub mod config;
pub mod error;
pub mod holder;
pub mod list_node;
pub mod queue;
pub mod report;
pub mod stack;

pub use bench::{measure_holder, measure_holders, BenchReport, HolderReport, RoundTiming, WordList};
pub use config::BenchConfig;
pub use error::{BenchError, HolderError};
pub use holder::{Holder, HolderKind};
pub use list_node::ListNode;
pub use queue::{ArrayQueue, LinkedQueue, Queue};
pub use stack::{ArrayStack, LinkedStack, Stack};
