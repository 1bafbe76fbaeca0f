use std::{cmp::Reverse, collections::BinaryHeap};

use crate::Error;

#[derive(Debug)]
struct Entry<T> {
    priority: i64,
    seq: u64,
    data: T,
}

impl<T> Entry<T> {
    fn key(&self) -> (i64, u64) {
        (self.priority, self.seq)
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key().cmp(&other.key())
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T> Eq for Entry<T> {}

// Lowest priority first, earliest inserted first among equal priorities.
#[derive(Debug)]
pub struct MinPriorityQueue<T> {
    entries: BinaryHeap<Reverse<Entry<T>>>,
    next_seq: u64,
}

impl<T> Default for MinPriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MinPriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            entries: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn enqueue(&mut self, data: T, priority: i64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Reverse(Entry {
            priority,
            seq,
            data,
        }));
    }

    pub fn enqueue_float(&mut self, data: T, priority: f64) -> Result<(), Error> {
        if !priority.is_finite()
            || priority.fract() != 0.0
            || priority < i64::MIN as f64
            || priority >= i64::MAX as f64
        {
            return Err(Error::NonIntegerPriority(priority));
        }

        self.enqueue(data, priority as i64);
        Ok(())
    }

    pub fn dequeue(&mut self) -> Result<T, Error> {
        self.entries
            .pop()
            .map(|Reverse(entry)| entry.data)
            .ok_or(Error::EmptyQueue)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
