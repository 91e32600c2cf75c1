use core::fmt::{self, Display, Write as _};

use tracing::trace;

use crate::prelude_internal::*;

/// Form data regrouped by decoded key path.
///
/// Keys are folded before decoding when case-insensitive matching is on, so
/// the segments stored here are the ones a [`crate::RecordSchema`] is looked up
/// with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueTree {
    nodes: IndexMap<String, ValueNode>,
}

/// One path segment. It can hold values, deeper segments, or both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueNode {
    leaf: Option<LeafValues>,
    children: Option<ValueTree>,
}

/// Values collected at one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafValues {
    key: String,
    values: Vec<String>,
}

impl LeafValues {
    /// The first input key that reached this path, as submitted.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl ValueTree {
    pub fn build(values: &FormValues, case_insensitive: bool, decode: Option<DecodeKeyFn>) -> Self {
        let mut flat: IndexMap<String, LeafValues> = IndexMap::new();
        for (key, key_values) in values.iter() {
            let folded = if case_insensitive {
                key.to_lowercase()
            } else {
                key.clone()
            };
            match flat.entry(folded) {
                indexmap::map::Entry::Occupied(entry) => {
                    trace!(key = %key, merged_into = %entry.get().key, "merging folded key");
                    entry.into_mut().values.extend(key_values.iter().cloned());
                }
                indexmap::map::Entry::Vacant(entry) => {
                    entry.insert(LeafValues {
                        key: key.clone(),
                        values: key_values.clone(),
                    });
                }
            }
        }

        let mut tree = ValueTree::default();
        for (folded, leaf) in flat {
            let path = match decode {
                Some(decode) => decode(&folded),
                None => KeyPath::single(folded),
            };
            trace!(key = %leaf.key, path = %path, "decoded key");
            tree.insert(path.segments(), leaf);
        }
        tree
    }

    fn insert(&mut self, segments: &[String], leaf: LeafValues) {
        // key paths are never empty
        let Some((last, parents)) = segments.split_last() else {
            return;
        };
        let mut current = self;
        for segment in parents {
            current = current
                .nodes
                .entry(segment.clone())
                .or_default()
                .children
                .get_or_insert_with(ValueTree::default);
        }
        let node = current.nodes.entry(last.clone()).or_default();
        match node.leaf {
            Some(ref mut existing) => existing.values.extend(leaf.values),
            None => node.leaf = Some(leaf),
        }
    }

    pub fn get(&self, segment: &str) -> Option<&ValueNode> {
        self.nodes.get(segment)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, ValueNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        for (segment, node) in &self.nodes {
            for _ in 0..depth {
                f.write_str("  ")?;
            }
            write!(f, "{segment:?}")?;
            if let Some(leaf) = &node.leaf {
                write!(f, " = {:?}", leaf.values)?;
                if leaf.key != *segment {
                    write!(f, " (from {:?})", leaf.key)?;
                }
            }
            f.write_char('\n')?;
            if let Some(children) = &node.children {
                children.write_indented(f, depth + 1)?;
            }
        }
        Ok(())
    }
}

impl Display for ValueTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

impl ValueNode {
    pub fn leaf(&self) -> Option<&LeafValues> {
        self.leaf.as_ref()
    }

    pub fn children(&self) -> Option<&ValueTree> {
        self.children.as_ref()
    }

    /// The first leaf at or below this node, in insertion order.
    pub fn first_leaf(&self) -> Option<&LeafValues> {
        self.leaf.as_ref().or_else(|| {
            self.children
                .as_ref()?
                .nodes
                .values()
                .find_map(ValueNode::first_leaf)
        })
    }
}
