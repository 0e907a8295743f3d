// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for the state crate.
//!
//! State set operations themselves never fail; only loading configuration does.

use std::fmt;

/// An error raised while loading render-state configuration.
#[derive(Debug)]
pub enum StateError {
    /// The configuration document could not be parsed.
    InvalidConfig {
        /// What was being loaded.
        what: &'static str,
        /// The underlying parse error.
        source: serde_json::Error,
    },
    /// The configuration parsed but names an empty render bin.
    EmptyBinName,
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::InvalidConfig { what, source } => {
                write!(f, "Invalid {what} configuration: {source}")
            }
            StateError::EmptyBinName => {
                write!(f, "A render bin policy must name the transparent bin")
            }
        }
    }
}

impl std::error::Error for StateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StateError::InvalidConfig { source, .. } => Some(source),
            StateError::EmptyBinName => None,
        }
    }
}
