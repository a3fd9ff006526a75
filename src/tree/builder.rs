// src/tree/builder.rs — Flat records → forest
//
// Each record, in input order, looks for its parent by a breadth-first scan
// of the forest as it stands at that moment. Nodes live in an arena and
// sibling lists are index vectors, so relocation is an index move.

use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use tracing::{debug, trace};

use super::key::MatchKey;
use crate::infra::errors::HelperError;
use crate::record::{Forest, Record};

/// Converts flat records carrying id/parent fields into a forest.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    id_field: String,
    parent_field: String,
    children_field: String,
    detect_cycles: bool,
}

impl TreeBuilder {
    pub fn new(id_field: &str, parent_field: &str, children_field: &str) -> Self {
        Self {
            id_field: id_field.to_string(),
            parent_field: parent_field.to_string(),
            children_field: children_field.to_string(),
            detect_cycles: true,
        }
    }

    /// Reject parent chains that loop (A → B → A) before building. On by default.
    pub fn detect_cycles(mut self, enabled: bool) -> Self {
        self.detect_cycles = enabled;
        self
    }

    /// Build the forest.
    ///
    /// Records that find no parent stay top-level in their original order;
    /// adopted records are appended to their parent's children. A record
    /// whose parent is itself is never adopted by itself.
    ///
    /// Every input record must carry the id field (non-null) and the parent
    /// field, otherwise `HelperError::MissingField` names the record index.
    pub fn build(&self, records: Vec<Record>) -> Result<Forest, HelperError> {
        let total = records.len();
        let mut arena = Arena::new(&self.children_field);

        for (index, record) in records.into_iter().enumerate() {
            let id = match record.get(&self.id_field) {
                Some(v) if !v.is_null() => MatchKey::from_value(v),
                _ => return Err(self.missing(index, &self.id_field)),
            };
            let parent = record
                .get(&self.parent_field)
                .map(MatchKey::from_value)
                .ok_or_else(|| self.missing(index, &self.parent_field))?;

            let node = arena.insert(record, index, &self.id_field)?;
            arena.nodes[node].parent = Some(parent);
            arena.nodes[node].id = Some(id);
            arena.roots.push(node);
            arena.subjects.push(node);
        }

        if self.detect_cycles {
            arena.check_cycles()?;
        }

        for position in 0..arena.subjects.len() {
            let subject = arena.subjects[position];
            if let Some(parent) = arena.find_parent(subject) {
                trace!(
                    id = %arena.label(subject),
                    parent = %arena.label(parent),
                    "relocating record under parent"
                );
                arena.relocate(subject, parent);
            }
        }

        let forest = arena.into_forest();
        debug!(records = total, roots = forest.len(), "tree built");
        Ok(forest)
    }

    fn missing(&self, index: usize, field: &str) -> HelperError {
        HelperError::MissingField {
            index,
            field: field.to_string(),
        }
    }
}

/// Build a forest from flat records using the given field names.
///
/// Shorthand for `TreeBuilder::new(..).build(records)` with cycle
/// detection enabled.
pub fn build_tree(
    records: Vec<Record>,
    id_field: &str,
    parent_field: &str,
    children_field: &str,
) -> Result<Forest, HelperError> {
    TreeBuilder::new(id_field, parent_field, children_field).build(records)
}

struct Node {
    /// The record; an existing children array has been moved into `children`.
    record: Record,
    id: Option<MatchKey>,
    parent: Option<MatchKey>,
    children: Vec<usize>,
    /// The input carried a children array, keep the key even if it ends up empty.
    keeps_children_field: bool,
}

#[derive(Clone, Copy, PartialEq)]
enum Mark {
    Fresh,
    Active,
    Done,
}

struct Arena<'a> {
    children_field: &'a str,
    nodes: Vec<Node>,
    roots: Vec<usize>,
    /// Top-level input records in input order.
    subjects: Vec<usize>,
}

impl<'a> Arena<'a> {
    fn new(children_field: &'a str) -> Self {
        Self {
            children_field,
            nodes: Vec::new(),
            roots: Vec::new(),
            subjects: Vec::new(),
        }
    }

    /// Move a record (and any children it already carries) into the arena.
    fn insert(
        &mut self,
        mut record: Record,
        index: usize,
        id_field: &str,
    ) -> Result<usize, HelperError> {
        let existing = match record.get_mut(self.children_field) {
            Some(Value::Array(items)) => Some(std::mem::take(items)),
            Some(Value::Null) | None => None,
            Some(_) => return Err(self.invalid_children(index)),
        };

        let keeps_children_field = existing.is_some();
        let mut children = Vec::new();
        for item in existing.into_iter().flatten() {
            let Value::Object(child) = item else {
                return Err(self.invalid_children(index));
            };
            // Nested records only act as parents; a missing id just never matches.
            let id = child
                .get(id_field)
                .filter(|v| !v.is_null())
                .map(MatchKey::from_value);
            let child_index = self.insert(child, index, id_field)?;
            self.nodes[child_index].id = id;
            children.push(child_index);
        }

        self.nodes.push(Node {
            record,
            id: None,
            parent: None,
            children,
            keeps_children_field,
        });
        Ok(self.nodes.len() - 1)
    }

    fn invalid_children(&self, index: usize) -> HelperError {
        HelperError::InvalidChildren {
            index,
            field: self.children_field.to_string(),
        }
    }

    /// Breadth-first search of the live forest for the subject's parent.
    ///
    /// Candidates sharing the subject's id are skipped along with their
    /// subtrees, which is what keeps a record out of its own descendants.
    fn find_parent(&self, subject: usize) -> Option<usize> {
        let node = &self.nodes[subject];
        let subject_id = node.id.as_ref()?;
        let parent_id = node.parent.as_ref()?;

        let mut queue: VecDeque<&[usize]> = VecDeque::new();
        queue.push_back(&self.roots);

        while let Some(level) = queue.pop_front() {
            for &candidate in level {
                let candidate_node = &self.nodes[candidate];
                let Some(candidate_id) = candidate_node.id.as_ref() else {
                    if !candidate_node.children.is_empty() {
                        queue.push_back(&candidate_node.children);
                    }
                    continue;
                };
                if candidate_id == subject_id {
                    continue;
                }
                if candidate_id == parent_id {
                    return Some(candidate);
                }
                if !candidate_node.children.is_empty() {
                    queue.push_back(&candidate_node.children);
                }
            }
        }
        None
    }

    fn relocate(&mut self, subject: usize, parent: usize) {
        if let Some(position) = self.roots.iter().position(|&r| r == subject) {
            self.roots.remove(position);
        }
        self.nodes[parent].children.push(subject);
    }

    /// Walk every parent chain through the first record holding each id.
    fn check_cycles(&self) -> Result<(), HelperError> {
        let mut by_id: HashMap<&MatchKey, usize> = HashMap::new();
        for &subject in &self.subjects {
            if let Some(id) = &self.nodes[subject].id {
                by_id.entry(id).or_insert(subject);
            }
        }

        let mut marks = vec![Mark::Fresh; self.nodes.len()];
        for &start in &self.subjects {
            let mut path = Vec::new();
            let mut current = start;
            loop {
                match marks[current] {
                    Mark::Done => break,
                    Mark::Active => {
                        let from = path.iter().position(|&p| p == current).unwrap_or(0);
                        let mut chain: Vec<String> =
                            path[from..].iter().map(|&p| self.label(p)).collect();
                        chain.push(self.label(current));
                        return Err(HelperError::CycleDetected { chain });
                    }
                    Mark::Fresh => {}
                }
                marks[current] = Mark::Active;
                path.push(current);

                let node = &self.nodes[current];
                let next = node
                    .parent
                    .as_ref()
                    .and_then(|p| by_id.get(p).copied())
                    .filter(|&n| self.nodes[n].id != node.id);
                match next {
                    Some(n) => current = n,
                    None => break,
                }
            }
            for p in path {
                marks[p] = Mark::Done;
            }
        }
        Ok(())
    }

    fn label(&self, node: usize) -> String {
        self.nodes[node]
            .id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_else(|| format!("#{node}"))
    }

    fn into_forest(mut self) -> Forest {
        let roots = std::mem::take(&mut self.roots);
        roots.into_iter().map(|r| self.take_record(r)).collect()
    }

    fn take_record(&mut self, index: usize) -> Record {
        let children = std::mem::take(&mut self.nodes[index].children);
        let keeps_field = self.nodes[index].keeps_children_field;
        let mut record = std::mem::take(&mut self.nodes[index].record);

        if !children.is_empty() || keeps_field {
            let mut nested = Vec::with_capacity(children.len());
            for child in children {
                nested.push(Value::Object(self.take_record(child)));
            }
            record.insert(self.children_field.to_string(), Value::Array(nested));
        }
        record
    }
}
