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

//! # Khora State
//!
//! Sparse render-state containers for the scene graph.
//!
//! A [`StateSet`] records the rendering modes and attributes explicitly set at a
//! node. Anything not recorded is inherited from ancestor state while the scene
//! is traversed; the traversal and the merge themselves live outside this crate.
//! State sets are totally ordered so that render queues can sort and cache on them.

#![warn(missing_docs)]

pub mod attribute;
pub mod color;
pub mod compile;
pub mod error;
pub mod mode;
pub mod mode_table;
mod ordering;
pub mod pipeline;
pub mod render_bin;
pub mod state_set;

pub use attribute::{
    AttributeCategory, AttributePair, AttributeRef, AttributeTable, StateAttribute,
};
pub use color::LinearRgba;
pub use compile::{CompileTarget, PipelineStateCompiler, StateOp};
pub use error::StateError;
pub use mode::{Mode, ModeValue};
pub use mode_table::ModeTable;
pub use render_bin::{RenderBinMode, RenderBinPolicy, RenderBinSpec, RenderingHint};
pub use state_set::StateSet;
