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

//! The depth test attribute.

use std::cmp::Ordering;

use super::{compare_peer, AttributeCategory, StateAttribute};
use crate::compile::{CompileTarget, StateOp};
use crate::mode::{Mode, ModeValue};
use crate::pipeline::{CompareFunction, DepthStateDescriptor};
use crate::state_set::StateSet;

/// Configures the depth test and depth writes. Drives [`Mode::DEPTH_TEST`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Depth {
    /// The comparison used by the depth test.
    pub function: CompareFunction,
    /// If `true`, passing fragments write their depth.
    pub write_mask: bool,
    /// The near end of the depth range mapping.
    pub z_near: f32,
    /// The far end of the depth range mapping.
    pub z_far: f32,
}

impl Depth {
    /// Creates a depth attribute over the full `[0, 1]` range.
    pub fn new(function: CompareFunction, write_mask: bool) -> Self {
        Self {
            function,
            write_mask,
            ..Self::default()
        }
    }

    /// Returns the descriptor this attribute compiles to.
    pub fn descriptor(&self) -> DepthStateDescriptor {
        DepthStateDescriptor {
            depth_write_enabled: self.write_mask,
            depth_compare: self.function,
            z_near: self.z_near,
            z_far: self.z_far,
        }
    }
}

impl Default for Depth {
    fn default() -> Self {
        Self {
            function: CompareFunction::Less,
            write_mask: true,
            z_near: 0.0,
            z_far: 1.0,
        }
    }
}

impl StateAttribute for Depth {
    fn category(&self) -> AttributeCategory {
        AttributeCategory::Depth
    }

    fn compare(&self, other: &dyn StateAttribute) -> Ordering {
        compare_peer(self, other, |lhs, rhs| {
            lhs.function
                .cmp(&rhs.function)
                .then_with(|| lhs.write_mask.cmp(&rhs.write_mask))
                .then_with(|| lhs.z_near.total_cmp(&rhs.z_near))
                .then_with(|| lhs.z_far.total_cmp(&rhs.z_far))
        })
    }

    fn apply_mode_effects(&self, state_set: &mut StateSet, value: ModeValue) {
        state_set.set_mode(Mode::DEPTH_TEST, value);
    }

    fn compile(&self, target: &mut dyn CompileTarget) {
        target.submit(self.category(), StateOp::Depth(self.descriptor()));
    }
}
