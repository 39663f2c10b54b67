//! Graphviz DOT serialization of a module graph.
//!
//! Rendering is a pure function of the graph value: no hidden state, no
//! further filtering. Output is deterministic given an unmodified graph.

use std::io::{self, Write};

use crate::error::{Error, Result};
use crate::graph::ModuleGraph;

/// Write `graph` as a Graphviz DOT document.
///
/// Node declarations appear in insertion order; edge statements in ascending
/// source id order, then per-source insertion order. The `rankdir=LR` layout
/// directive is emitted iff the adjacency map is non-empty, i.e. at least one
/// node has an outgoing edge.
///
/// # Errors
///
/// Returns [`Error::Sink`] as soon as the sink rejects a write. Rendering is
/// not retried.
pub fn render<W: Write>(graph: &ModuleGraph, out: &mut W) -> Result<()> {
    write_dot(graph, out).map_err(Error::Sink)
}

/// Render `graph` into an owned string.
///
/// # Errors
///
/// Never fails in practice; shares [`render`]'s signature so callers handle
/// one error path.
pub fn render_to_string(graph: &ModuleGraph) -> Result<String> {
    let mut buf = Vec::new();
    render(graph, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_dot<W: Write>(graph: &ModuleGraph, out: &mut W) -> io::Result<()> {
    writeln!(out, "digraph {{")?;
    if !graph.deps().is_empty() {
        writeln!(out, "    rankdir=LR;")?;
    }
    writeln!(out, "    node [shape=box];")?;

    for (name, node) in graph.modules() {
        if node.highlighted {
            writeln!(
                out,
                "    {} [style=filled, fillcolor={}, label=\"{}\"];",
                node.id,
                graph.filter().fill_color(),
                escape_label(name)
            )?;
        } else {
            writeln!(out, "    {} [label=\"{}\"];", node.id, escape_label(name))?;
        }
    }

    for (from, targets) in graph.deps() {
        for to in targets {
            writeln!(out, "    {from} -> {to};")?;
        }
    }

    writeln!(out, "}}")
}

/// Escape a module name for use inside a double-quoted DOT label.
fn escape_label(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}
