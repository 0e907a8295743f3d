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

//! The polygon rasterization attribute.

use std::cmp::Ordering;

use super::{compare_peer, AttributeCategory, StateAttribute};
use crate::compile::{CompileTarget, StateOp};
use crate::pipeline;

/// Selects how polygons are rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PolygonMode {
    /// Fill, outline or point rasterization.
    pub mode: pipeline::PolygonMode,
}

impl PolygonMode {
    /// Creates a polygon mode attribute.
    pub fn new(mode: pipeline::PolygonMode) -> Self {
        Self { mode }
    }
}

impl StateAttribute for PolygonMode {
    fn category(&self) -> AttributeCategory {
        AttributeCategory::PolygonMode
    }

    fn compare(&self, other: &dyn StateAttribute) -> Ordering {
        compare_peer(self, other, |lhs, rhs| lhs.mode.cmp(&rhs.mode))
    }

    fn compile(&self, target: &mut dyn CompileTarget) {
        target.submit(self.category(), StateOp::PolygonMode(self.mode));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mode, ModeValue, StateSet};

    #[test]
    fn test_polygon_mode_implies_no_modes() {
        let mut state_set = StateSet::new();
        PolygonMode::new(pipeline::PolygonMode::Line)
            .apply_mode_effects(&mut state_set, ModeValue::ON);
        assert!(state_set.mode_table().is_empty());
        assert_eq!(state_set.get_mode(Mode::BLEND), ModeValue::INHERIT);
    }
}
