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

//! The compile pass contract between attributes and the state-application layer.
//!
//! Compiling a state set walks its attributes in ascending category order and
//! lets each one describe itself to a [`CompileTarget`]. Nothing here issues
//! graphics commands; a backend consumes the result later.

use crate::attribute::{AttributeCategory, MaterialUniforms};
use crate::pipeline::{
    BlendStateDescriptor, CompareFunction, CullMode, DepthStateDescriptor, FrontFace,
    PolygonMode, PrimitiveStateDescriptor,
};

/// A single attribute operation handed to a compile target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateOp {
    /// Configure the alpha test.
    AlphaTest {
        /// The comparison applied to fragment alpha.
        function: CompareFunction,
        /// The reference alpha value.
        reference: f32,
    },
    /// Select the culled faces.
    CullFace(CullMode),
    /// Select the front-face winding.
    FrontFace(FrontFace),
    /// Upload material colors.
    Material(MaterialUniforms),
    /// Select polygon rasterization.
    PolygonMode(PolygonMode),
    /// Configure blending.
    Blend(BlendStateDescriptor),
    /// Configure the depth test.
    Depth(DepthStateDescriptor),
}

/// Receives the operations produced while compiling a state set.
///
/// The target is opaque to state sets; they only forward it to their attributes.
pub trait CompileTarget {
    /// Accepts one operation from the attribute installed under `category`.
    fn submit(&mut self, category: AttributeCategory, op: StateOp);
}

/// A compile target that folds attribute operations into pipeline descriptors.
///
/// Later operations for the same piece of state replace earlier ones, so a
/// compiler can be reused across several state sets to accumulate state.
#[derive(Debug, Clone, Default)]
pub struct PipelineStateCompiler {
    primitive: PrimitiveStateDescriptor,
    depth: Option<DepthStateDescriptor>,
    blend: Option<BlendStateDescriptor>,
    alpha_test: Option<(CompareFunction, f32)>,
    material: Option<MaterialUniforms>,
    ops: Vec<(AttributeCategory, StateOp)>,
}

impl PipelineStateCompiler {
    /// Creates a compiler with default rasterization state and nothing else.
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated rasterization state.
    pub fn primitive(&self) -> &PrimitiveStateDescriptor {
        &self.primitive
    }

    /// The compiled depth state, if a depth attribute was compiled.
    pub fn depth(&self) -> Option<&DepthStateDescriptor> {
        self.depth.as_ref()
    }

    /// The compiled blend state, if a blend attribute was compiled.
    pub fn blend(&self) -> Option<&BlendStateDescriptor> {
        self.blend.as_ref()
    }

    /// The compiled alpha test as `(function, reference)`.
    pub fn alpha_test(&self) -> Option<(CompareFunction, f32)> {
        self.alpha_test
    }

    /// The compiled material block.
    pub fn material(&self) -> Option<&MaterialUniforms> {
        self.material.as_ref()
    }

    /// The compiled material block as raw bytes, ready for upload.
    pub fn material_bytes(&self) -> Option<&[u8]> {
        self.material.as_ref().map(bytemuck::bytes_of)
    }

    /// Every operation received, in submission order.
    pub fn ops(&self) -> &[(AttributeCategory, StateOp)] {
        &self.ops
    }
}

impl CompileTarget for PipelineStateCompiler {
    fn submit(&mut self, category: AttributeCategory, op: StateOp) {
        log::trace!("Compiling {category:?}: {op:?}");
        match op {
            StateOp::AlphaTest {
                function,
                reference,
            } => self.alpha_test = Some((function, reference)),
            StateOp::CullFace(mode) => self.primitive.cull_mode = Some(mode),
            StateOp::FrontFace(winding) => self.primitive.front_face = winding,
            StateOp::Material(uniforms) => self.material = Some(uniforms),
            StateOp::PolygonMode(mode) => self.primitive.polygon_mode = mode,
            StateOp::Blend(blend) => self.blend = Some(blend),
            StateOp::Depth(depth) => self.depth = Some(depth),
        }
        self.ops.push((category, op));
    }
}
