//! Edge-stream acquisition.
//!
//! The graph builder consumes any line-oriented reader; this module supplies
//! the readers the CLI knows about. The default matches the classic workflow:
//! run `go mod graph` in the current directory and consume its stdout.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

/// Command invoked when no input path is given.
const GO_MOD_GRAPH: &[&str] = &["go", "mod", "graph"];

/// Where the raw edge records come from.
#[derive(Debug, Clone)]
pub enum EdgeSource {
    /// Invoke `go mod graph` in the current directory and consume its stdout.
    GoModGraph,
    /// Read edge records from a file.
    File(PathBuf),
    /// Read edge records from standard input.
    Stdin,
}

impl EdgeSource {
    /// Map an optional CLI input path to a source: no path runs
    /// `go mod graph`, `-` reads stdin, anything else is a file path.
    #[must_use]
    pub fn from_input(input: Option<&Path>) -> Self {
        match input {
            None => Self::GoModGraph,
            Some(path) if path.as_os_str() == "-" => Self::Stdin,
            Some(path) => Self::File(path.to_path_buf()),
        }
    }

    /// Open the source as a buffered line reader.
    ///
    /// The subprocess variant runs to completion before returning, so the
    /// reader it yields never fails mid-stream.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Command`] if the subprocess cannot be run,
    /// [`Error::CommandStatus`] if it exits unsuccessfully, and
    /// [`Error::OpenInput`] if an input file cannot be opened.
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            Self::GoModGraph => {
                let command = GO_MOD_GRAPH.join(" ");
                tracing::debug!("running `{command}`");
                let output = Command::new(GO_MOD_GRAPH[0])
                    .args(&GO_MOD_GRAPH[1..])
                    .output()
                    .map_err(|source| Error::Command {
                        command: command.clone(),
                        source,
                    })?;
                if !output.status.success() {
                    return Err(Error::CommandStatus {
                        command,
                        status: output.status,
                        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                    });
                }
                Ok(Box::new(Cursor::new(output.stdout)))
            }
            Self::File(path) => {
                let file = File::open(path).map_err(|source| Error::OpenInput {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
            Self::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
        }
    }
}
