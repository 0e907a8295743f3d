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

//! The face culling attribute.

use std::cmp::Ordering;

use super::{compare_peer, AttributeCategory, StateAttribute};
use crate::compile::{CompileTarget, StateOp};
use crate::mode::{Mode, ModeValue};
use crate::pipeline::CullMode;
use crate::state_set::StateSet;

/// Selects which faces are culled. Drives [`Mode::CULL_FACE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CullFace {
    /// The faces to cull.
    pub mode: CullMode,
}

impl CullFace {
    /// Creates a cull attribute for `mode`.
    pub fn new(mode: CullMode) -> Self {
        Self { mode }
    }
}

impl StateAttribute for CullFace {
    fn category(&self) -> AttributeCategory {
        AttributeCategory::CullFace
    }

    fn compare(&self, other: &dyn StateAttribute) -> Ordering {
        compare_peer(self, other, |lhs, rhs| lhs.mode.cmp(&rhs.mode))
    }

    fn apply_mode_effects(&self, state_set: &mut StateSet, value: ModeValue) {
        state_set.set_mode(Mode::CULL_FACE, value);
    }

    fn compile(&self, target: &mut dyn CompileTarget) {
        target.submit(self.category(), StateOp::CullFace(self.mode));
    }
}
