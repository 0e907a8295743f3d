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

//! The front-face winding attribute.

use std::cmp::Ordering;

use super::{compare_peer, AttributeCategory, StateAttribute};
use crate::compile::{CompileTarget, StateOp};
use crate::pipeline;

/// Selects the winding order of front-facing polygons.
///
/// Winding has no on/off switch, so this attribute implies no modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrontFace {
    /// The front-facing winding order.
    pub winding: pipeline::FrontFace,
}

impl FrontFace {
    /// Creates a winding attribute.
    pub fn new(winding: pipeline::FrontFace) -> Self {
        Self { winding }
    }
}

impl StateAttribute for FrontFace {
    fn category(&self) -> AttributeCategory {
        AttributeCategory::FrontFace
    }

    fn compare(&self, other: &dyn StateAttribute) -> Ordering {
        compare_peer(self, other, |lhs, rhs| lhs.winding.cmp(&rhs.winding))
    }

    fn compile(&self, target: &mut dyn CompileTarget) {
        target.submit(self.category(), StateOp::FrontFace(self.winding));
    }
}
