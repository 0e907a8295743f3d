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

//! The lighting material attribute.

use std::cmp::Ordering;

use super::{compare_peer, AttributeCategory, StateAttribute};
use crate::color::LinearRgba;
use crate::compile::{CompileTarget, StateOp};
use crate::mode::{Mode, ModeValue};
use crate::state_set::StateSet;

/// Which material colors track the incoming vertex color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ColorMode {
    /// The ambient color tracks the vertex color.
    Ambient,
    /// The diffuse color tracks the vertex color.
    Diffuse,
    /// The specular color tracks the vertex color.
    Specular,
    /// The emission color tracks the vertex color.
    Emission,
    /// Both ambient and diffuse colors track the vertex color.
    AmbientAndDiffuse,
    /// No material color tracks the vertex color.
    #[default]
    Off,
}

/// Surface coloring used by fixed-function style lighting.
///
/// When `color_mode` is anything other than [`ColorMode::Off`], installing the
/// material with modes also toggles [`Mode::COLOR_MATERIAL`].
///
/// # Examples
///
/// ```
/// use khora_state::attribute::{ColorMode, Material};
///
/// let tracking = Material::default().with_color_mode(ColorMode::AmbientAndDiffuse);
/// assert_eq!(tracking.color_mode, ColorMode::AmbientAndDiffuse);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Which colors follow the vertex color.
    pub color_mode: ColorMode,
    /// Ambient reflectance.
    pub ambient: LinearRgba,
    /// Diffuse reflectance.
    pub diffuse: LinearRgba,
    /// Specular reflectance.
    pub specular: LinearRgba,
    /// Emitted color.
    pub emission: LinearRgba,
    /// Specular exponent.
    pub shininess: f32,
}

impl Material {
    /// Returns a copy of this material with `color_mode` replaced.
    #[must_use]
    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }

    /// Packs the material into its uniform block layout.
    pub fn uniforms(&self) -> MaterialUniforms {
        MaterialUniforms {
            ambient: self.ambient,
            diffuse: self.diffuse,
            specular: self.specular,
            emission: self.emission,
            shininess: self.shininess,
            color_mode: self.color_mode as u32,
            _padding: [0; 2],
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Off,
            ambient: LinearRgba::rgb(0.2, 0.2, 0.2),
            diffuse: LinearRgba::rgb(0.8, 0.8, 0.8),
            specular: LinearRgba::BLACK,
            emission: LinearRgba::BLACK,
            shininess: 0.0,
        }
    }
}

impl StateAttribute for Material {
    fn category(&self) -> AttributeCategory {
        AttributeCategory::Material
    }

    fn compare(&self, other: &dyn StateAttribute) -> Ordering {
        compare_peer(self, other, |lhs, rhs| {
            lhs.color_mode
                .cmp(&rhs.color_mode)
                .then_with(|| lhs.ambient.total_cmp(&rhs.ambient))
                .then_with(|| lhs.diffuse.total_cmp(&rhs.diffuse))
                .then_with(|| lhs.specular.total_cmp(&rhs.specular))
                .then_with(|| lhs.emission.total_cmp(&rhs.emission))
                .then_with(|| lhs.shininess.total_cmp(&rhs.shininess))
        })
    }

    fn apply_mode_effects(&self, state_set: &mut StateSet, value: ModeValue) {
        if self.color_mode != ColorMode::Off {
            state_set.set_mode(Mode::COLOR_MATERIAL, value);
        }
    }

    fn compile(&self, target: &mut dyn CompileTarget) {
        target.submit(self.category(), StateOp::Material(self.uniforms()));
    }
}

/// Material data formatted for GPU consumption.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniforms {
    /// Ambient reflectance.
    pub ambient: LinearRgba,
    /// Diffuse reflectance.
    pub diffuse: LinearRgba,
    /// Specular reflectance.
    pub specular: LinearRgba,
    /// Emitted color.
    pub emission: LinearRgba,
    /// Specular exponent.
    pub shininess: f32,
    /// The [`ColorMode`] discriminant.
    pub color_mode: u32,
    _padding: [u32; 2],
}
