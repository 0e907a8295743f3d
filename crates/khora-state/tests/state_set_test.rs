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

use std::cmp::Ordering;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::Arc;

use khora_state::attribute::{compare_peer, CullFace, Depth, Material, Transparency};
use khora_state::pipeline::{CompareFunction, CullMode};
use khora_state::{
    AttributeCategory, AttributeRef, Mode, ModeValue, RenderBinMode, RenderingHint,
    StateAttribute, StateSet,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A cull attribute that counts how often its mode hook runs.
#[derive(Debug)]
struct CountingCullFace {
    inner: CullFace,
    hook_calls: Arc<AtomicUsize>,
}

impl StateAttribute for CountingCullFace {
    fn category(&self) -> AttributeCategory {
        AttributeCategory::CullFace
    }

    fn compare(&self, other: &dyn StateAttribute) -> Ordering {
        compare_peer(self, other, |lhs, rhs| lhs.inner.mode.cmp(&rhs.inner.mode))
    }

    fn apply_mode_effects(&self, state_set: &mut StateSet, value: ModeValue) {
        self.hook_calls.fetch_add(1, AtomicOrdering::SeqCst);
        self.inner.apply_mode_effects(state_set, value);
    }
}

#[test]
fn test_mode_set_and_inherit() {
    init_logging();
    let mut state_set = StateSet::new();

    state_set.set_mode(Mode::FOG, ModeValue::ON);
    assert_eq!(state_set.get_mode(Mode::FOG), ModeValue::ON);

    for value in [
        ModeValue::INHERIT,
        ModeValue::INHERIT | ModeValue::ON,
        ModeValue::INHERIT | ModeValue::OVERRIDE,
    ] {
        state_set.set_mode(Mode::FOG, ModeValue::ON);
        state_set.set_mode(Mode::FOG, value);
        assert_eq!(
            state_set.get_mode(Mode::FOG),
            ModeValue::INHERIT,
            "{value:?} should reset the mode to inherit"
        );
    }
}

#[test]
fn test_set_mode_to_inherit_is_idempotent() {
    init_logging();
    let mut once = StateSet::new();
    once.set_mode(Mode::LIGHTING, ModeValue::ON);
    once.set_mode(Mode::FOG, ModeValue::OFF);
    let mut twice = once.clone();

    once.set_mode_to_inherit(Mode::LIGHTING);
    twice.set_mode_to_inherit(Mode::LIGHTING);
    twice.set_mode_to_inherit(Mode::LIGHTING);

    assert_eq!(once.compare(&twice), Ordering::Equal);
    assert_eq!(twice.get_mode(Mode::LIGHTING), ModeValue::INHERIT);
    assert_eq!(twice.get_mode(Mode::FOG), ModeValue::OFF);
}

#[test]
fn test_one_attribute_per_category() {
    init_logging();
    let first = AttributeRef::new(CullFace::new(CullMode::Back));
    let second = AttributeRef::new(CullFace::new(CullMode::Front));
    let mut state_set = StateSet::new();

    state_set.set_attribute(first.clone(), ModeValue::ON);
    state_set.set_attribute(second.clone(), ModeValue::ON);

    let installed = state_set
        .get_attribute(AttributeCategory::CullFace)
        .expect("CullFace should be installed");
    assert!(installed.ptr_eq(&second));
    assert_eq!(first.strong_count(), 1, "Replaced attribute should be released");
    assert_eq!(state_set.attributes().count(), 1);
}

#[test]
fn test_override_sorts_after_plain_value() {
    init_logging();
    let mut plain = StateSet::new();
    plain.set_mode(Mode::CULL_FACE, ModeValue::ON);
    let mut overriding = StateSet::new();
    overriding.set_mode(Mode::CULL_FACE, ModeValue::ON | ModeValue::OVERRIDE);

    assert_eq!(plain.compare(&overriding), Ordering::Less);
    assert_eq!(overriding.compare(&plain), Ordering::Greater);
    assert_eq!(plain.compare(&overriding) as i32, -1);
}

#[test]
fn test_ordering_is_total_and_transitive() {
    init_logging();
    let empty = StateSet::new();

    let mut lit = StateSet::new();
    lit.set_mode(Mode::LIGHTING, ModeValue::ON);

    let mut lit_and_fogged = lit.clone();
    lit_and_fogged.set_mode(Mode::FOG, ModeValue::ON);

    let mut culled = StateSet::new();
    culled.set_attribute(AttributeRef::new(CullFace::default()), ModeValue::ON);

    let mut culled_front = StateSet::new();
    culled_front.set_attribute(AttributeRef::new(CullFace::new(CullMode::Front)), ModeValue::ON);

    let mut depth_read_only = StateSet::new();
    depth_read_only.set_attribute(
        AttributeRef::new(Depth::new(CompareFunction::LessEqual, false)),
        ModeValue::ON | ModeValue::OVERRIDE,
    );

    let defaults = StateSet::with_global_defaults();

    let batch = [
        empty,
        lit,
        lit_and_fogged,
        culled,
        culled_front,
        depth_read_only,
        defaults,
    ];

    for x in &batch {
        assert_eq!(x.compare(x), Ordering::Equal, "compare must be reflexive");
        for y in &batch {
            assert_eq!(
                x.compare(y),
                y.compare(x).reverse(),
                "compare must be antisymmetric"
            );
            for z in &batch {
                if x.compare(y) == Ordering::Less && y.compare(z) == Ordering::Less {
                    assert_eq!(x.compare(z), Ordering::Less, "compare must be transitive");
                }
            }
        }
    }

    let mut sorted = batch.to_vec();
    sorted.sort();
    for window in sorted.windows(2) {
        assert_ne!(window[0].compare(&window[1]), Ordering::Greater);
    }
}

#[test]
fn test_comparison_ignores_insertion_order_and_render_bin() {
    init_logging();
    let mut a = StateSet::new();
    a.set_attribute(AttributeRef::new(Depth::default()), ModeValue::ON);
    a.set_attribute(AttributeRef::new(CullFace::default()), ModeValue::ON);
    a.set_mode(Mode::BLEND, ModeValue::OFF);
    a.set_mode(Mode::FOG, ModeValue::ON);
    a.set_rendering_hint(RenderingHint::TransparentBin);

    let mut b = StateSet::new();
    b.set_mode(Mode::FOG, ModeValue::ON);
    b.set_mode(Mode::BLEND, ModeValue::OFF);
    b.set_attribute(AttributeRef::new(CullFace::default()), ModeValue::ON);
    b.set_attribute(AttributeRef::new(Depth::default()), ModeValue::ON);

    assert_eq!(a.compare(&b), Ordering::Equal);
    assert_eq!(a, b);
}

#[test]
fn test_global_defaults_baseline() {
    init_logging();
    let state_set = StateSet::with_global_defaults();

    for mode in [
        Mode::LIGHTING,
        Mode::FOG,
        Mode::POINT_SMOOTH,
        Mode::TEXTURE_2D,
        Mode::TEXTURE_GEN_S,
        Mode::TEXTURE_GEN_T,
        Mode::TEXTURE_GEN_R,
        Mode::TEXTURE_GEN_Q,
        Mode::ALPHA_TEST,
        Mode::BLEND,
    ] {
        assert_eq!(state_set.get_mode(mode), ModeValue::OFF, "{mode:?} should be off");
    }
    for mode in [Mode::CULL_FACE, Mode::DEPTH_TEST, Mode::COLOR_MATERIAL] {
        assert_eq!(state_set.get_mode(mode), ModeValue::ON, "{mode:?} should be on");
    }

    assert!(state_set.get_attribute(AttributeCategory::Material).is_some());
    let categories: Vec<AttributeCategory> =
        state_set.attributes().map(|(category, _)| category).collect();
    assert_eq!(
        categories,
        vec![
            AttributeCategory::AlphaFunc,
            AttributeCategory::CullFace,
            AttributeCategory::FrontFace,
            AttributeCategory::Material,
            AttributeCategory::PolygonMode,
            AttributeCategory::Transparency,
            AttributeCategory::Depth,
        ]
    );
    assert!(state_set.attributes().all(|(_, pair)| !pair.is_override()));
    assert!(!state_set.uses_render_bin_details());
}

#[test]
fn test_transparent_hint_assigns_depth_sorted_bin() {
    init_logging();
    let mut state_set = StateSet::new();
    state_set.set_rendering_hint(RenderingHint::TransparentBin);

    let bin = state_set.render_bin();
    assert_eq!(bin.mode, RenderBinMode::UseRenderBinDetails);
    assert_eq!(bin.index, 1);
    assert_eq!(bin.name, "DepthSortedBin");

    state_set.set_render_bin_to_inherit();
    assert_eq!(state_set.render_bin().mode, RenderBinMode::Inherit);
    assert_eq!(state_set.render_bin().index, 0);
    assert!(state_set.render_bin().name.is_empty());
    assert_eq!(state_set.rendering_hint(), RenderingHint::TransparentBin);
}

#[test]
fn test_attribute_removal_reverts_implied_modes() {
    init_logging();
    let hook_calls = Arc::new(AtomicUsize::new(0));
    let cull = AttributeRef::new(CountingCullFace {
        inner: CullFace::default(),
        hook_calls: hook_calls.clone(),
    });
    let mut state_set = StateSet::new();

    state_set.set_attribute_and_modes(cull, ModeValue::ON);
    assert_eq!(hook_calls.load(AtomicOrdering::SeqCst), 1);
    assert_eq!(state_set.get_mode(Mode::CULL_FACE), ModeValue::ON);

    state_set.set_attribute_to_inherit(AttributeCategory::CullFace);
    assert!(state_set.get_attribute(AttributeCategory::CullFace).is_none());
    assert_eq!(hook_calls.load(AtomicOrdering::SeqCst), 2);
    assert_eq!(state_set.get_mode(Mode::CULL_FACE), ModeValue::INHERIT);
    assert!(state_set.is_empty());
}

#[test]
fn test_shared_attribute_lives_until_last_state_set() {
    init_logging();
    let transparency = AttributeRef::new(Transparency::default());
    let mut a = StateSet::new();
    let mut b = StateSet::new();
    a.set_attribute_and_modes(transparency.clone(), ModeValue::ON);
    b.set_attribute_and_modes(transparency.clone(), ModeValue::ON);
    assert_eq!(transparency.strong_count(), 3);

    a.set_attribute_to_inherit(AttributeCategory::Transparency);
    assert_eq!(transparency.strong_count(), 2);
    assert_eq!(b.get_mode(Mode::BLEND), ModeValue::ON, "Other state sets are untouched");

    drop(b);
    assert_eq!(transparency.strong_count(), 1);
}

#[test]
fn test_material_override_flag_from_mode_value() {
    init_logging();
    let mut state_set = StateSet::new();
    state_set.set_attribute_and_modes(
        AttributeRef::new(Material::default()),
        ModeValue::ON | ModeValue::OVERRIDE,
    );
    let pair = state_set
        .get_attribute_pair(AttributeCategory::Material)
        .expect("Material should be installed");
    assert!(pair.is_override());
}
