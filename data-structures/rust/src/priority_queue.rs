use serde::Serialize;
use serde_json::Value;

use crate::binary_heap::BinaryHeap;
use crate::error::Result;
use crate::input::{self, Initial};
use crate::ordering::HeapOrdering;

/// Integer priority queue backed by a [`BinaryHeap`]. Unlike the bare heap,
/// it defaults to max ordering: the largest integer is served first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PriorityQueue {
    heap: BinaryHeap,
}

impl PriorityQueue {
    pub fn new() -> Self {
        Self::with_ordering(HeapOrdering::Max)
    }

    pub fn with_ordering(ordering: HeapOrdering) -> Self {
        PriorityQueue {
            heap: BinaryHeap::with_ordering(ordering),
        }
    }

    pub fn try_new(initial: impl Into<Initial>, ordering: Option<&str>) -> Result<Self> {
        let ordering = HeapOrdering::resolve(ordering, HeapOrdering::Max)?;
        Ok(PriorityQueue {
            heap: BinaryHeap::from_vec(initial.into().into_vec(), ordering),
        })
    }

    pub fn from_json(values: &Value, ordering: Option<&Value>) -> Result<Self> {
        let initial = Initial::try_from(values)?;
        let ordering = input::ordering_from_value(ordering, HeapOrdering::Max)?;
        Ok(PriorityQueue {
            heap: BinaryHeap::from_vec(initial.into_vec(), ordering),
        })
    }

    pub fn enqueue(&mut self, value: i64) {
        self.heap.insert(value);
    }

    pub fn enqueue_value(&mut self, value: &Value) -> Result<()> {
        self.heap.insert_value(value)
    }

    pub fn dequeue(&mut self) -> Option<i64> {
        self.heap.poll()
    }

    pub fn first(&self) -> Option<i64> {
        self.heap.peek()
    }

    pub fn data(&self) -> Vec<i64> {
        self.heap.data()
    }

    pub fn ordering(&self) -> HeapOrdering {
        self.heap.ordering()
    }

    pub fn queue_type(&self) -> &'static str {
        match self.heap.ordering() {
            HeapOrdering::Min => "Min Priority Queue (Smallest integer takes highest priority).",
            HeapOrdering::Max => "Max Priority Queue (Largest integer takes highest priority).",
        }
    }

    pub fn size(&self) -> usize {
        self.heap.size()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl Default for PriorityQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<i64> for PriorityQueue {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        PriorityQueue {
            heap: BinaryHeap::from_vec(iter.into_iter().collect(), HeapOrdering::Max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HeapError;
    use serde_json::json;

    #[test]
    fn new_queue_is_empty_max_queue() {
        let pq = PriorityQueue::new();
        assert!(pq.is_empty());
        assert_eq!(pq.size(), 0);
        assert_eq!(pq.ordering(), HeapOrdering::Max);
        assert_eq!(pq.data(), Vec::<i64>::new());
    }

    #[test]
    fn first_and_dequeue_on_empty_return_none() {
        let mut pq = PriorityQueue::new();
        assert_eq!(pq.first(), None);
        assert_eq!(pq.dequeue(), None);
        assert!(pq.is_empty());
    }

    #[test]
    fn single_value_initialization() {
        let pq = PriorityQueue::try_new(5i64, None).unwrap();
        assert_eq!(pq.first(), Some(5));
        assert_eq!(pq.size(), 1);
        assert_eq!(pq.ordering(), HeapOrdering::Max);
    }

    #[test]
    fn max_queue_serves_largest_first() {
        let mut pq = PriorityQueue::try_new(vec![3i64, 17, 8, 1], None).unwrap();
        assert_eq!(pq.first(), Some(17));
        pq.enqueue(20);
        assert_eq!(pq.dequeue(), Some(20));
        assert_eq!(pq.dequeue(), Some(17));
        assert_eq!(pq.dequeue(), Some(8));
        assert_eq!(pq.size(), 2);
    }

    #[test]
    fn min_queue_serves_smallest_first() {
        let mut pq = PriorityQueue::try_new(vec![3i64, 17, 8], Some("min")).unwrap();
        pq.enqueue(-1);
        assert_eq!(pq.dequeue(), Some(-1));
        assert_eq!(pq.dequeue(), Some(3));
        assert_eq!(pq.first(), Some(8));
    }

    #[test]
    fn queue_type_labels() {
        assert_eq!(
            PriorityQueue::new().queue_type(),
            "Max Priority Queue (Largest integer takes highest priority)."
        );
        assert_eq!(
            PriorityQueue::with_ordering(HeapOrdering::Min).queue_type(),
            "Min Priority Queue (Smallest integer takes highest priority)."
        );
    }

    #[test]
    fn rejects_invalid_initialization() {
        let cases = [
            (json!("invalid"), None),
            (json!([1, 2, "invalid"]), None),
            (json!(null), None),
            (json!(null), Some(json!("min"))),
            (json!({}), None),
            (json!(null), Some(json!({}))),
            (json!([1, 2]), Some(json!(null))),
            (json!({}), Some(json!("max"))),
        ];
        for (values, ordering) in cases {
            assert!(matches!(
                PriorityQueue::from_json(&values, ordering.as_ref()),
                Err(HeapError::InvalidArgument(_))
            ));
        }
        assert!(PriorityQueue::try_new(vec![1i64], Some("high")).is_err());
    }

    #[test]
    fn from_json_defaults_to_max() {
        let pq = PriorityQueue::from_json(&json!([4, 9, 2]), None).unwrap();
        assert_eq!(pq.first(), Some(9));
        let pq = PriorityQueue::from_json(&json!([4, 9, 2]), Some(&json!("min"))).unwrap();
        assert_eq!(pq.first(), Some(2));
    }

    #[test]
    fn enqueue_value_rejects_non_integers() {
        let mut pq = PriorityQueue::new();
        assert!(pq.enqueue_value(&json!(1.5)).is_err());
        assert!(pq.enqueue_value(&json!("7")).is_err());
        assert!(pq.is_empty());
        pq.enqueue_value(&json!(7)).unwrap();
        assert_eq!(pq.first(), Some(7));
    }

    #[test]
    fn data_is_a_copy() {
        let pq: PriorityQueue = vec![1, 2, 3].into_iter().collect();
        let mut data = pq.data();
        data.clear();
        assert_eq!(pq.size(), 3);
        assert_eq!(pq.first(), Some(3));
    }

    #[test]
    fn clear_empties_queue() {
        let mut pq = PriorityQueue::default();
        pq.enqueue(1);
        pq.enqueue(2);
        pq.clear();
        assert!(pq.is_empty());
        assert_eq!(pq.first(), None);
    }

    #[test]
    fn serializes_like_the_heap() {
        let pq = PriorityQueue::try_new(vec![1i64, 2], None).unwrap();
        let snapshot = serde_json::to_value(&pq).unwrap();
        assert_eq!(snapshot, json!({ "data": [2, 1], "ordering": "max" }));
    }
}
