//! The module dependency graph and its single-pass builder.
//!
//! [`ModuleGraph`] is created empty, populated by exactly one
//! [`parse`](ModuleGraph::parse) pass over the edge stream, then read by the
//! renderer. It is not designed for repeated parsing passes: a second pass
//! would keep appending to the same id sequence, never reset it. Callers
//! needing a fresh graph construct a new instance.

use std::collections::BTreeMap;
use std::fmt;
use std::io::BufRead;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::filter::KeywordFilter;

/// Dense node identifier, assigned in first-seen order starting at 0.
///
/// Only records that survive the keyword filter consume ids; a discarded
/// record never advances the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The raw index value.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One distinct module encountered in the edge stream.
///
/// Identity is the module name, which is the graph's map key. Nodes are
/// immutable once created: the id and highlight flag never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleNode {
    /// Unique id in first-seen order among kept records.
    pub id: NodeId,
    /// Whether this module's own name matched the keyword at creation time.
    ///
    /// Decided per node: a module pulled in only because its counterpart
    /// matched is not highlighted.
    pub highlighted: bool,
}

/// A malformed edge record skipped during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    /// 1-based line number in the input stream.
    pub line: usize,
    /// The offending line, trimmed.
    pub content: String,
}

/// Outcome of one parse pass.
///
/// Malformed records are collected here, not surfaced as errors: a single
/// bad line never aborts the parse.
#[derive(Debug, Default, Clone)]
pub struct ParseSummary {
    /// Total lines consumed from the stream.
    pub lines: usize,
    /// Records kept after filtering.
    pub kept: usize,
    /// Malformed records that were skipped.
    pub skipped: Vec<MalformedLine>,
}

/// Directed module dependency graph, filtered edge-by-edge as it is built.
#[derive(Debug)]
pub struct ModuleGraph {
    filter: KeywordFilter,
    /// Module name -> node, in insertion order.
    modules: IndexMap<String, ModuleNode>,
    /// Source id -> target ids, in per-source insertion order. A node with no
    /// outgoing edges is absent, not present with an empty sequence.
    /// Duplicate edges are kept.
    deps: BTreeMap<NodeId, Vec<NodeId>>,
}

impl ModuleGraph {
    /// Create an empty graph with the given filter configuration.
    #[must_use]
    pub fn new(filter: KeywordFilter) -> Self {
        Self {
            filter,
            modules: IndexMap::new(),
            deps: BTreeMap::new(),
        }
    }

    /// The filter configuration this graph was built with.
    #[must_use]
    pub fn filter(&self) -> &KeywordFilter {
        &self.filter
    }

    /// Modules in insertion order, keyed by name.
    #[must_use]
    pub fn modules(&self) -> &IndexMap<String, ModuleNode> {
        &self.modules
    }

    /// Adjacency map from source id to target ids, keyed in ascending id
    /// order.
    #[must_use]
    pub fn deps(&self) -> &BTreeMap<NodeId, Vec<NodeId>> {
        &self.deps
    }

    /// Look up a module by name.
    #[must_use]
    pub fn node(&self, name: &str) -> Option<&ModuleNode> {
        self.modules.get(name)
    }

    /// Number of distinct modules.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.modules.len()
    }

    /// Number of stored edges, duplicates included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.deps.values().map(Vec::len).sum()
    }

    /// Consume the edge stream line by line, one pass, no lookahead.
    ///
    /// Each line must split into exactly two non-empty whitespace-separated
    /// tokens: source module and target module. A record is kept only if the
    /// filter matches either endpoint; a discarded record adds nothing to
    /// the graph. Malformed lines are skipped and reported in the returned
    /// [`ParseSummary`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Stream`] if the reader fails mid-parse. The graph
    /// state accumulated up to that point remains valid and renderable; the
    /// error tells the caller the parse was incomplete.
    pub fn parse<R: BufRead>(&mut self, reader: R) -> Result<ParseSummary> {
        let mut summary = ParseSummary::default();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(Error::Stream)?;
            summary.lines += 1;

            let mut tokens = line.split_whitespace();
            let (Some(source), Some(target), None) =
                (tokens.next(), tokens.next(), tokens.next())
            else {
                tracing::warn!(
                    "skipping malformed edge record at line {}: {:?}",
                    index + 1,
                    line.trim()
                );
                summary.skipped.push(MalformedLine {
                    line: index + 1,
                    content: line.trim().to_string(),
                });
                continue;
            };

            if !self.filter.matches(source) && !self.filter.matches(target) {
                continue;
            }

            let from = self.intern(source);
            let to = self.intern(target);
            self.deps.entry(from).or_default().push(to);
            summary.kept += 1;
        }

        tracing::debug!(
            "parse pass complete: {} modules, {} edges",
            self.node_count(),
            self.edge_count()
        );
        Ok(summary)
    }

    /// Resolve a module name to its node id, materializing a new node with
    /// the next id when the name has not been seen before.
    fn intern(&mut self, name: &str) -> NodeId {
        if let Some(node) = self.modules.get(name) {
            return node.id;
        }
        let node = ModuleNode {
            id: NodeId(self.modules.len()),
            highlighted: self.filter.matches(name),
        };
        self.modules.insert(name.to_string(), node);
        node.id
    }
}
