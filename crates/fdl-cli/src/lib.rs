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

//! Command-line interface for FDL.
//!
//! A thin consumer of `fdl-core`: it reads one source file, calls
//! [`fdl_core::parse`], and either walks the resulting document or reports
//! the diagnostic.

pub mod cli;
pub mod error;

pub use cli::Commands;
pub use error::CliError;
