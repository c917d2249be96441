// crates/domain/src/grouping.rs
//! Hierarchical grouping of flat count rows into a sunburst tree.
//!
//! Rows are partitioned by the first grouping field, each partition is
//! grouped by the next field, and so on until the field list runs out; the
//! rows themselves end up in the leaves. Every node carries the sum of the
//! `count` of all rows beneath it.

use std::collections::HashMap;

use luminosity_shared_kernel::{COUNT_FIELD, DomainError, DomainResult, FieldValue, Record, Tally};
use serde::{Serialize, Serializer, ser::SerializeStruct};

/// How malformed rows are handled while building a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GroupingMode {
    /// Never fails. An unparseable `count` makes every enclosing size
    /// [`Tally::Invalid`]; a missing grouping field yields an unlabeled group.
    #[default]
    Permissive,
    /// Rejects rows whose `count` is not a whole base-10 integer and rows
    /// missing any grouping field.
    Strict,
}

/// A node of the grouping tree.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupNode {
    name: Option<String>,
    size: Tally,
    grouped_by: Option<String>,
    records: Vec<Record>,
    children: Vec<GroupNode>,
}

impl GroupNode {
    /// Label shared by every row of this group. `None` only for the bucket
    /// of rows that lack the grouping field.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn size(&self) -> Tally {
        self.size
    }

    /// Field whose values split this node into its children; `None` at leaves.
    pub fn grouped_by(&self) -> Option<&str> {
        self.grouped_by.as_deref()
    }

    /// Rows assigned to this node. Empty unless this is a leaf.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn children(&self) -> &[GroupNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.grouped_by.is_none()
    }

    pub fn child(&self, name: &str) -> Option<&GroupNode> {
        self.children.iter().find(|c| c.name() == Some(name))
    }

    /// Number of grouping levels below this node.
    pub fn depth(&self) -> usize {
        if self.is_leaf() {
            0
        } else {
            1 + self.children.iter().map(Self::depth).max().unwrap_or(0)
        }
    }

    /// All leaves, left to right.
    pub fn leaves(&self) -> Vec<&GroupNode> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a GroupNode>) {
        if self.is_leaf() {
            out.push(self);
        } else {
            for child in &self.children {
                child.collect_leaves(out);
            }
        }
    }
}

// Inner nodes serialize their children, leaves their rows under "data".
impl Serialize for GroupNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut node = serializer.serialize_struct("GroupNode", 3)?;
        node.serialize_field("name", &self.name)?;
        node.serialize_field("size", &self.size)?;
        if self.is_leaf() {
            node.serialize_field("data", &self.records)?;
        } else {
            node.serialize_field("children", &self.children)?;
        }
        node.end()
    }
}

/// Groups `records` into a tree rooted at `label`, one level per entry of
/// `groupby` (outermost first). Malformed rows are tolerated.
pub fn build_tree<S: AsRef<str>>(label: impl Into<String>, records: Vec<Record>, groupby: &[S]) -> GroupNode {
    build_node(Some(label.into()), records, groupby)
}

/// Same as [`build_tree`], validating every row first when `mode` is strict.
///
/// # Errors
///
/// In [`GroupingMode::Strict`], returns [`DomainError::InvalidCount`] or
/// [`DomainError::MissingGroupField`] for the first offending row.
pub fn build_tree_with_mode<S: AsRef<str>>(
    label: impl Into<String>,
    records: Vec<Record>,
    groupby: &[S],
    mode: GroupingMode,
) -> DomainResult<GroupNode> {
    if mode == GroupingMode::Strict {
        validate(&records, groupby)?;
    }
    Ok(build_tree(label, records, groupby))
}

fn build_node<S: AsRef<str>>(name: Option<String>, records: Vec<Record>, groupby: &[S]) -> GroupNode {
    let size = records.iter().map(Record::count).sum();

    let Some((field, rest)) = groupby.split_first() else {
        return GroupNode { name, size, grouped_by: None, records, children: Vec::new() };
    };

    let field = field.as_ref();
    let children = partition(records, field)
        .into_iter()
        .map(|(key, group)| build_node(key, group, rest))
        .collect();

    GroupNode {
        name,
        size,
        grouped_by: Some(field.to_string()),
        records: Vec::new(),
        children,
    }
}

/// Splits rows by the value of `field`, keeping groups in first-seen order.
fn partition(records: Vec<Record>, field: &str) -> Vec<(Option<String>, Vec<Record>)> {
    let mut index: HashMap<Option<String>, usize> = HashMap::new();
    let mut groups: Vec<(Option<String>, Vec<Record>)> = Vec::new();

    for record in records {
        let key = record.get(field).map(|v| v.as_key().into_owned());
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            groups.push((key, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(record);
    }
    groups
}

fn validate<S: AsRef<str>>(records: &[Record], groupby: &[S]) -> DomainResult<()> {
    for (index, record) in records.iter().enumerate() {
        let count = record.get(COUNT_FIELD);
        let exact = match count {
            Some(FieldValue::Integer(_)) => true,
            Some(other) => Tally::parse_exact(&other.as_key()).is_some(),
            None => false,
        };
        if !exact {
            return Err(DomainError::InvalidCount {
                index,
                value: count.map(ToString::to_string),
            });
        }
        if let Some(field) = groupby.iter().map(|f| f.as_ref()).find(|f| !record.contains(f)) {
            return Err(DomainError::MissingGroupField { index, field: field.to_string() });
        }
    }
    Ok(())
}
