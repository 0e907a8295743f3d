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

use anyhow::Result;
use approx::assert_relative_eq;

use khora_state::attribute::{AlphaFunc, ColorMode, Material};
use khora_state::pipeline::{CompareFunction, CullMode, FrontFace, PolygonMode};
use khora_state::{
    AttributeCategory, AttributeRef, ModeValue, PipelineStateCompiler, RenderBinPolicy,
    RenderingHint, StateError, StateSet,
};

#[test]
fn test_compile_walks_attributes_in_category_order() {
    let state_set = StateSet::with_global_defaults();
    let mut compiler = PipelineStateCompiler::new();

    state_set.compile(&mut compiler);

    let categories: Vec<AttributeCategory> =
        compiler.ops().iter().map(|(category, _)| *category).collect();
    let mut sorted = categories.clone();
    sorted.sort();
    assert_eq!(categories, sorted);
    assert_eq!(categories.len(), 7);
}

#[test]
fn test_compile_defaults_into_pipeline_descriptors() {
    let state_set = StateSet::with_global_defaults();
    let mut compiler = PipelineStateCompiler::new();
    state_set.compile(&mut compiler);

    let primitive = compiler.primitive();
    assert_eq!(primitive.cull_mode, Some(CullMode::Back));
    assert_eq!(primitive.front_face, FrontFace::Ccw);
    assert_eq!(primitive.polygon_mode, PolygonMode::Fill);

    let depth = compiler.depth().expect("Depth should be compiled");
    assert_eq!(depth.depth_compare, CompareFunction::Less);
    assert!(depth.depth_write_enabled);
    assert_relative_eq!(depth.z_far, 1.0);

    assert!(compiler.blend().is_some());

    let material = compiler.material().expect("Material should be compiled");
    assert_eq!(material.color_mode, ColorMode::AmbientAndDiffuse as u32);
    assert_relative_eq!(material.diffuse.r, 0.8);
    assert_eq!(compiler.material_bytes().map(<[u8]>::len), Some(80));
}

#[test]
fn test_compile_does_not_touch_the_state_set() {
    let mut state_set = StateSet::new();
    state_set.set_attribute_and_modes(
        AttributeRef::new(AlphaFunc::new(CompareFunction::Greater, 0.3)),
        ModeValue::ON,
    );
    state_set.set_attribute(
        AttributeRef::new(Material::default().with_color_mode(ColorMode::Emission)),
        ModeValue::ON,
    );
    let before = state_set.clone();

    let mut compiler = PipelineStateCompiler::new();
    state_set.compile(&mut compiler);

    assert_eq!(state_set, before);
    let (function, reference) = compiler.alpha_test().expect("Alpha test should be compiled");
    assert_eq!(function, CompareFunction::Greater);
    assert_relative_eq!(reference, 0.3);
}

#[test]
fn test_policy_from_json_moves_transparent_bin() -> Result<()> {
    let policy = RenderBinPolicy::from_json_str(
        r#"{ "transparent_bin_index": 20, "transparent_bin_name": "SortedBackToFront" }"#,
    )?;
    let mut state_set = StateSet::new();
    state_set.set_rendering_hint_with(RenderingHint::TransparentBin, &policy);

    assert_eq!(state_set.render_bin().index, 20);
    assert_eq!(state_set.render_bin().name, "SortedBackToFront");
    Ok(())
}

#[test]
fn test_policy_from_json_can_decouple_hint() -> Result<()> {
    let policy = RenderBinPolicy::from_json_str(r#"{ "couple_transparent_hint": false }"#)?;
    let mut state_set = StateSet::new();
    state_set.set_rendering_hint_with(RenderingHint::TransparentBin, &policy);

    assert!(!state_set.uses_render_bin_details());
    Ok(())
}

#[test]
fn test_malformed_policy_reports_source() {
    let err = RenderBinPolicy::from_json_str("{ not json").expect_err("Should fail to parse");
    assert!(matches!(err, StateError::InvalidConfig { .. }));
    assert!(std::error::Error::source(&err).is_some());
    assert!(err.to_string().starts_with("Invalid render bin policy configuration"));
}
