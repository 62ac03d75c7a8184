use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Anything that can be sorted into a category bucket.
pub trait Categorized {
    fn category(&self) -> &str;
}

impl<T: Categorized> Categorized for &T {
    fn category(&self) -> &str {
        (*self).category()
    }
}

/// Records bucketed by category.
///
/// Keys keep the order in which a category was first seen, and each bucket
/// keeps the order of the records that went into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryGroups<T> {
    groups: IndexMap<String, Vec<T>>,
}

impl<T> Default for CategoryGroups<T> {
    fn default() -> Self {
        CategoryGroups {
            groups: IndexMap::new(),
        }
    }
}

impl<T> CategoryGroups<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, category: &str, record: T) {
        match self.groups.get_mut(category) {
            Some(bucket) => bucket.push(record),
            None => {
                self.groups.insert(category.to_string(), vec![record]);
            }
        }
    }

    pub fn ensure(&mut self, category: &str) {
        if !self.groups.contains_key(category) {
            self.groups.insert(category.to_string(), vec![]);
        }
    }

    pub fn get(&self, category: &str) -> Option<&[T]> {
        self.groups.get(category).map(|v| v.as_slice())
    }

    pub fn contains(&self, category: &str) -> bool {
        self.groups.contains_key(category)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of category keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of records across all buckets.
    pub fn total(&self) -> usize {
        self.groups.values().map(|v| v.len()).sum()
    }

    /// Concatenates buckets in key order.
    pub fn flatten(self) -> Vec<T> {
        self.groups.into_values().flatten().collect()
    }
}

impl<T> IntoIterator for CategoryGroups<T> {
    type Item = (String, Vec<T>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

pub fn group_by_category<T, I>(records: I) -> CategoryGroups<T>
where
    T: Categorized,
    I: IntoIterator<Item = T>,
{
    let mut groups = CategoryGroups::new();
    for record in records {
        let category = record.category().to_string();
        groups.push(&category, record);
    }
    groups
}
