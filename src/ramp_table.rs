use core::ops::Range;
use log::debug;

/// A compact representation of a `key -> [values]` multimap, stored as a
/// flat values array plus an index of where each key's slice begins.
///
/// Used here as the CSR-style adjacency structure described in spec.md §9:
/// `up`/`down` neighbor projections are each one `RampTable<Neighbor>`,
/// indexed directly by vertex id.
#[derive(Clone, Eq, PartialEq)]
pub struct RampTable<T> {
    /// contains the index into values[] where each entry starts
    pub index: Vec<u32>,
    pub values: Vec<T>,
}

impl<T> RampTable<T> {
    pub fn new() -> Self {
        Self {
            index: vec![0],
            values: Vec::new(),
        }
    }

    pub fn with_capacity(keys_capacity: usize, values_capacity: usize) -> Self {
        let mut table = Self {
            index: Vec::with_capacity(keys_capacity + 1),
            values: Vec::with_capacity(values_capacity),
        };
        table.index.push(0);
        table
    }

    pub fn push_value(&mut self, value: T) {
        self.values.push(value);
    }

    pub fn finish_key(&mut self) {
        self.index.push(self.values.len() as u32);
    }

    pub fn entry_values_range(&self, index: usize) -> Range<usize> {
        self.index[index] as usize..self.index[index + 1] as usize
    }

    pub fn entry_values(&self, index: usize) -> &[T] {
        &self.values[self.entry_values_range(index)]
    }

    /// Returns the number of distinct keys in the table.
    pub fn num_keys(&self) -> usize {
        self.index.len() - 1
    }
}

/// Helps with constructing a RampTable from a sequence of (key, value) pairs.
/// The caller may report 'key' values in any order; keys with no values
/// still get an (empty) entry, up through the largest key reported.
#[derive(Debug)]
pub struct RampTableBuilder<T> {
    items: Vec<(u32, T)>,
}

impl<T> RampTableBuilder<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, key: u32, value: T) {
        self.items.push((key, value));
    }

    pub fn finish(mut self) -> RampTable<T> {
        let mut items = core::mem::replace(&mut self.items, Vec::new());
        items.sort_by_key(move |&(key, ref _value)| key);
        if items.is_empty() {
            return RampTable::new();
        }
        debug!("RampTableBuilder: finish(): sorting {} items", items.len());
        let num_keys = items.last().unwrap().0 as usize + 1;
        let num_values = items.len();

        let mut table: RampTable<T> = RampTable::with_capacity(num_keys, num_values);
        for (key, value) in items.into_iter() {
            while table.num_keys() < (key as usize) {
                table.finish_key();
            }
            table.push_value(value);
        }
        while table.num_keys() < num_keys {
            table.finish_key();
        }
        debug!("table.len = {}", table.num_keys());
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_gaps() {
        let mut b: RampTableBuilder<u32> = RampTableBuilder::new();
        b.push(3, 100);
        b.push(0, 10);
        b.push(3, 101);
        let table = b.finish();
        assert_eq!(table.num_keys(), 4);
        assert_eq!(table.entry_values(0), &[10]);
        assert_eq!(table.entry_values(1), &[] as &[u32]);
        assert_eq!(table.entry_values(2), &[] as &[u32]);
        assert_eq!(table.entry_values(3), &[100, 101]);
    }

    #[test]
    fn empty_builder() {
        let b: RampTableBuilder<u32> = RampTableBuilder::new();
        let table = b.finish();
        assert_eq!(table.num_keys(), 0);
    }
}
