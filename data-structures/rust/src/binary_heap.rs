use std::cmp::Ordering;

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::input::{self, Initial};
use crate::ordering::HeapOrdering;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinaryHeap {
    data: Vec<i64>,
    ordering: HeapOrdering,
}

impl BinaryHeap {
    pub fn new() -> Self {
        Self::with_ordering(HeapOrdering::Min)
    }

    pub fn with_ordering(ordering: HeapOrdering) -> Self {
        BinaryHeap {
            data: Vec::new(),
            ordering,
        }
    }

    pub fn from_vec(vec: Vec<i64>, ordering: HeapOrdering) -> Self {
        log::debug!("building {} from {} elements", ordering.label(), vec.len());
        let mut heap = BinaryHeap {
            data: vec,
            ordering,
        };
        heap.heapify();
        heap
    }

    /// Builds a heap from an initial value or values and an optional
    /// `"min"`/`"max"` token. `None` selects a min-heap.
    pub fn try_new(initial: impl Into<Initial>, ordering: Option<&str>) -> Result<Self> {
        let ordering = HeapOrdering::resolve(ordering, HeapOrdering::Min)?;
        Ok(Self::from_vec(initial.into().into_vec(), ordering))
    }

    /// Builds a heap from untyped JSON input. `values` must be an integer or
    /// an array of integers; `ordering`, when given, must be `"min"` or
    /// `"max"`. No heap is built unless both check out.
    pub fn from_json(values: &Value, ordering: Option<&Value>) -> Result<Self> {
        let initial = Initial::try_from(values)?;
        let ordering = input::ordering_from_value(ordering, HeapOrdering::Min)?;
        Ok(Self::from_vec(initial.into_vec(), ordering))
    }

    pub fn peek(&self) -> Option<i64> {
        self.data.first().copied()
    }

    pub fn insert(&mut self, value: i64) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    pub fn insert_value(&mut self, value: &Value) -> Result<()> {
        let value = input::integer_from_value(value)?;
        self.insert(value);
        Ok(())
    }

    pub fn poll(&mut self) -> Option<i64> {
        let last = self.data.pop()?;
        if self.data.is_empty() {
            return Some(last);
        }
        let root = std::mem::replace(&mut self.data[0], last);
        self.sift_down(0);
        Some(root)
    }

    /// Returns a copy of the backing array in heap order.
    pub fn data(&self) -> Vec<i64> {
        self.data.clone()
    }

    pub fn ordering(&self) -> HeapOrdering {
        self.ordering
    }

    pub fn heap_type(&self) -> &'static str {
        self.ordering.label()
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    fn higher_priority(&self, a: usize, b: usize) -> bool {
        self.ordering.compare(self.data[a], self.data[b]) == Ordering::Less
    }

    fn heapify(&mut self) {
        if self.data.len() <= 1 {
            return;
        }
        let last_parent = (self.data.len() - 2) / 2;
        log::trace!("heapify: sifting down from index {last_parent}");
        for i in (0..=last_parent).rev() {
            self.sift_down(i);
        }
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.higher_priority(idx, parent) {
                self.data.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.data.len();
        let mut left = 2 * idx + 1;
        while left < len {
            let right = left + 1;
            // Equal children keep the left one.
            let target = if right < len && self.higher_priority(right, left) {
                right
            } else {
                left
            };

            if !self.higher_priority(target, idx) {
                break;
            }
            self.data.swap(idx, target);
            idx = target;
            left = 2 * idx + 1;
        }
    }
}

impl Default for BinaryHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<i64> for BinaryHeap {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        BinaryHeap::from_vec(iter.into_iter().collect(), HeapOrdering::Min)
    }
}

impl Extend<i64> for BinaryHeap {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}
