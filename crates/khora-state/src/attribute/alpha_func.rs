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

//! The alpha test attribute.

use std::cmp::Ordering;

use super::{compare_peer, AttributeCategory, StateAttribute};
use crate::compile::{CompileTarget, StateOp};
use crate::mode::{Mode, ModeValue};
use crate::pipeline::CompareFunction;
use crate::state_set::StateSet;

/// Discards fragments whose alpha fails `function` against `reference`.
///
/// Installing it with modes toggles [`Mode::ALPHA_TEST`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphaFunc {
    /// The comparison applied to each fragment's alpha.
    pub function: CompareFunction,
    /// The reference alpha value.
    pub reference: f32,
}

impl AlphaFunc {
    /// Creates an alpha test with the given comparison and reference value.
    pub fn new(function: CompareFunction, reference: f32) -> Self {
        Self {
            function,
            reference,
        }
    }
}

impl Default for AlphaFunc {
    fn default() -> Self {
        Self {
            function: CompareFunction::Always,
            reference: 1.0,
        }
    }
}

impl StateAttribute for AlphaFunc {
    fn category(&self) -> AttributeCategory {
        AttributeCategory::AlphaFunc
    }

    fn compare(&self, other: &dyn StateAttribute) -> Ordering {
        compare_peer(self, other, |lhs, rhs| {
            lhs.function
                .cmp(&rhs.function)
                .then_with(|| lhs.reference.total_cmp(&rhs.reference))
        })
    }

    fn apply_mode_effects(&self, state_set: &mut StateSet, value: ModeValue) {
        state_set.set_mode(Mode::ALPHA_TEST, value);
    }

    fn compile(&self, target: &mut dyn CompileTarget) {
        target.submit(
            self.category(),
            StateOp::AlphaTest {
                function: self.function,
                reference: self.reference,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_func_default() {
        let alpha = AlphaFunc::default();
        assert_eq!(alpha.function, CompareFunction::Always);
        assert_eq!(alpha.reference, 1.0);
    }

    #[test]
    fn test_reference_breaks_function_ties() {
        let low = AlphaFunc::new(CompareFunction::Greater, 0.25);
        let high = AlphaFunc::new(CompareFunction::Greater, 0.75);
        assert_eq!(low.compare(&high), Ordering::Less);
        assert_eq!(high.compare(&low), Ordering::Greater);
        assert_eq!(low.compare(&low), Ordering::Equal);
    }
}
