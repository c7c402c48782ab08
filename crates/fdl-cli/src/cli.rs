// FDL - Flow Definition Language
//
// Copyright (c) 2025 FDL contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI command definitions and execution.

use crate::error::CliError;
use clap::Subcommand;
use fdl_core::{parse, Document};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Top-level CLI commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse a document and report success or the first diagnostic.
    Check {
        /// The FDL file to check, or `-` for stdin.
        file: PathBuf,
    },
    /// Parse a document and print its node/query outline.
    Print {
        /// The FDL file to print, or `-` for stdin.
        file: PathBuf,
    },
}

impl Commands {
    /// Executes the command.
    pub fn execute(&self) -> Result<(), CliError> {
        match self {
            Self::Check { file } => {
                let doc = load(file)?;
                println!("OK: {} node(s), {} query(ies)", doc.nodes.len(), doc.queries.len());
                Ok(())
            }
            Self::Print { file } => {
                let doc = load(file)?;
                print_outline(&doc);
                Ok(())
            }
        }
    }
}

/// Reads and parses one source file; `-` reads stdin.
fn load(file: &Path) -> Result<Document, CliError> {
    let source = read_source(file)?;
    Ok(parse(&source)?)
}

fn read_source(file: &Path) -> Result<String, CliError> {
    if file.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| CliError::io(file, e))?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(file).map_err(|e| CliError::io(file, e))
    }
}

/// Prints the document outline: one header line per node/query, one
/// tab-indented line per member.
fn print_outline(doc: &Document) {
    for node in &doc.nodes {
        println!("### Node: {}", doc.resolve_name(node.name));
        for variable in &node.variables {
            println!("\tVariable: {}", doc.resolve_name(variable.name));
        }
        for event in &node.events {
            println!("\tEvent: {}", doc.resolve_name(event.name));
        }
    }
    for query in &doc.queries {
        println!("### Query: {}", doc.resolve_name(query.name));
        for variable in &query.variables {
            println!("\tVariable: {}", doc.resolve_name(variable.name));
        }
        for event in &query.events {
            println!("\tEvent: {}", doc.resolve_name(event.name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_rejects_missing_file() {
        let err = load(Path::new("definitely_missing.fdl")).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }

    #[test]
    fn test_load_propagates_diagnostics() {
        let dir = std::env::temp_dir();
        let path = dir.join("fdl_cli_unit_bad_input.fdl");
        std::fs::write(&path, "node 5").unwrap();
        let err = load(&path).unwrap_err();
        assert!(matches!(err, CliError::Parse(_)));
        std::fs::remove_file(&path).ok();
    }
}
