//! Modot - filtered module dependency graphs as Graphviz DOT.
//!
//! Modot consumes a line-oriented stream of dependency edge records
//! ("A B" meaning module A requires module B, the format emitted by
//! `go mod graph`), keeps only the edges touching modules whose name
//! contains a keyword, and serializes the surviving subgraph as a DOT
//! document with matching nodes highlighted.
//!
//! The pipeline is a single synchronous pass:
//!
//! 1. [`EdgeSource`] opens the raw edge stream (subprocess, file, or stdin).
//! 2. [`ModuleGraph::parse`] filters records and accumulates the graph.
//! 3. [`render`] writes the DOT document to a byte sink.

#![forbid(unsafe_code)]

pub mod error;
pub mod filter;
pub mod graph;
pub mod render;
pub mod source;

pub use error::{Error, Result};
pub use filter::KeywordFilter;
pub use graph::{MalformedLine, ModuleGraph, ModuleNode, NodeId, ParseSummary};
pub use render::{render, render_to_string};
pub use source::EdgeSource;
