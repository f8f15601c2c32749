mod binary_heap;
mod error;
pub mod input;
mod ordering;
mod priority_queue;

pub use binary_heap::BinaryHeap;
pub use error::{HeapError, Result};
pub use input::Initial;
pub use ordering::HeapOrdering;
pub use priority_queue::PriorityQueue;
