//! Partitioning of data rows by the value of the identifying column
//!
//! Rows are accumulated through an explicit map from key to group slot.
//! Groups come out in order of the first appearance of their key; rows
//! inside a group keep document order.

use std::collections::HashMap;

use crate::app::models::{Document, Group};
use crate::{Error, Result};

/// Distinct groups produced from one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Groups {
    groups: Vec<Group>,
    index: HashMap<String, usize>,
}

impl Groups {
    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of rows across all groups
    pub fn row_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// Group for a given key
    pub fn get(&self, key: &str) -> Option<&Group> {
        self.index.get(key).map(|&slot| &self.groups[slot])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    /// Keys in delivery order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.key.as_str())
    }
}

impl IntoIterator for Groups {
    type Item = Group;
    type IntoIter = std::vec::IntoIter<Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a> IntoIterator for &'a Groups {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Partition the rows from `data_start` onwards by the value at `column`
///
/// Every data row ends up in exactly one group. A row too short for
/// `column` fails the whole partition.
pub fn partition(document: Document, data_start: usize, column: usize) -> Result<Groups> {
    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (line, row) in document.into_rows_with_lines().skip(data_start) {
        let key = row
            .get(column)
            .ok_or_else(|| Error::row_access(line, column, row.len()))?;

        let slot = match index.get(key.as_str()) {
            Some(&slot) => slot,
            None => {
                let slot = groups.len();
                index.insert(key.clone(), slot);
                groups.push(Group::new(key.as_str()));
                slot
            }
        };

        groups[slot].rows.push(row);
    }

    Ok(Groups { groups, index })
}
