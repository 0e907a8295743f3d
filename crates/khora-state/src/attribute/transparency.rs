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

//! The blend function attribute.

use std::cmp::Ordering;

use super::{compare_peer, AttributeCategory, StateAttribute};
use crate::compile::{CompileTarget, StateOp};
use crate::mode::{Mode, ModeValue};
use crate::pipeline::{BlendComponentDescriptor, BlendStateDescriptor};
use crate::state_set::StateSet;

/// Blends fragments with the framebuffer. Drives [`Mode::BLEND`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transparency {
    /// The blend equation for the color channels.
    pub color: BlendComponentDescriptor,
    /// The blend equation for the alpha channel.
    pub alpha: BlendComponentDescriptor,
}

impl Transparency {
    /// Uses the same equation for color and alpha.
    pub fn new(equation: BlendComponentDescriptor) -> Self {
        Self {
            color: equation,
            alpha: equation,
        }
    }
}

impl Default for Transparency {
    fn default() -> Self {
        Self::new(BlendComponentDescriptor::ALPHA_BLENDING)
    }
}

impl StateAttribute for Transparency {
    fn category(&self) -> AttributeCategory {
        AttributeCategory::Transparency
    }

    fn compare(&self, other: &dyn StateAttribute) -> Ordering {
        compare_peer(self, other, |lhs, rhs| {
            lhs.color.cmp(&rhs.color).then_with(|| lhs.alpha.cmp(&rhs.alpha))
        })
    }

    fn apply_mode_effects(&self, state_set: &mut StateSet, value: ModeValue) {
        state_set.set_mode(Mode::BLEND, value);
    }

    fn compile(&self, target: &mut dyn CompileTarget) {
        target.submit(
            self.category(),
            StateOp::Blend(BlendStateDescriptor {
                color: self.color,
                alpha: self.alpha,
            }),
        );
    }
}
