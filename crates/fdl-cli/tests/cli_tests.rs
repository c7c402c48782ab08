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

//! Integration tests for the `fdl` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

const SOUND_NODE: &str = "node SoundNode\n\
                          {\n\
                          \tin event Play;\n\
                          \tout event Stopped;\n\
                          \tbool boolean_value;\n\
                          \tfloat float_value = 1;\n\
                          }\n\
                          query Test\n\
                          {\n\
                          \tout event Status;\n\
                          \tout bool boolean_value;\n\
                          }\n";

fn write_temp(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_check_valid_document() {
    let file = write_temp(SOUND_NODE);
    Command::cargo_bin("fdl")
        .unwrap()
        .arg("check")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: 1 node(s), 1 query(ies)"));
}

#[test]
fn test_check_invalid_document_reports_diagnostic() {
    let file = write_temp("query Bad { in event X; }");
    Command::cargo_bin("fdl")
        .unwrap()
        .arg("check")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "UNEXPECTED KEYWORD_IN at (Ln: 0, Col: 14)",
        ));
}

#[test]
fn test_print_outline() {
    let file = write_temp(SOUND_NODE);
    Command::cargo_bin("fdl")
        .unwrap()
        .arg("print")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("### Node: SoundNode"))
        .stdout(predicate::str::contains("\tVariable: float_value"))
        .stdout(predicate::str::contains("\tEvent: Play"))
        .stdout(predicate::str::contains("### Query: Test"))
        .stdout(predicate::str::contains("\tEvent: Status"));
}

#[test]
fn test_check_reads_stdin_with_dash() {
    Command::cargo_bin("fdl")
        .unwrap()
        .arg("check")
        .arg("-")
        .write_stdin("node X { }")
        .assert()
        .success();
}

#[test]
fn test_missing_file_is_io_error() {
    Command::cargo_bin("fdl")
        .unwrap()
        .arg("check")
        .arg("no_such_file.fdl")
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}
