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

//! The `StateSet` container.
//!
//! A state set records the modes and attributes explicitly set at one node of
//! the scene graph, plus the node's render bin placement. It never walks the
//! hierarchy itself: an external state accumulator merges state sets along the
//! ancestor chain, honouring the override flags stored here.
//!
//! State sets are plain values. They may be read from many threads once built,
//! but mutation needs exclusive access.

use std::cmp::Ordering;

use crate::attribute::{
    AlphaFunc, AttributeCategory, AttributePair, AttributeRef, AttributeTable, ColorMode,
    CullFace, Depth, FrontFace, Material, PolygonMode, StateAttribute, Transparency,
};
use crate::compile::CompileTarget;
use crate::mode::{Mode, ModeValue};
use crate::mode_table::ModeTable;
use crate::render_bin::{RenderBinMode, RenderBinPolicy, RenderBinSpec, RenderingHint};

/// A sparse, mergeable set of rendering modes and attributes.
///
/// Anything not set inherits from ancestor state. State sets are totally
/// ordered by their modes and then their attributes, so they can be used as
/// sort and cache keys by the renderer. The rendering hint and render bin are
/// not part of that order.
///
/// # Examples
///
/// ```
/// use khora_state::attribute::CullFace;
/// use khora_state::{AttributeCategory, AttributeRef, Mode, ModeValue, StateSet};
///
/// let mut state_set = StateSet::new();
/// state_set.set_attribute_and_modes(AttributeRef::new(CullFace::default()), ModeValue::ON);
/// assert_eq!(state_set.get_mode(Mode::CULL_FACE), ModeValue::ON);
///
/// state_set.set_attribute_to_inherit(AttributeCategory::CullFace);
/// assert_eq!(state_set.get_mode(Mode::CULL_FACE), ModeValue::INHERIT);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StateSet {
    modes: ModeTable,
    attributes: AttributeTable,
    rendering_hint: RenderingHint,
    render_bin: RenderBinSpec,
}

impl StateSet {
    /// Creates a state set that inherits everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state set holding the global default baseline.
    ///
    /// Every call builds fresh attribute instances; nothing is shared between
    /// the returned state sets.
    pub fn with_global_defaults() -> Self {
        let mut state_set = Self::new();
        state_set.set_global_defaults();
        state_set
    }

    /// Orders two state sets: modes first, then attributes.
    ///
    /// Both tables are walked in ascending key order. Insertion order never
    /// matters, and the rendering hint and render bin are ignored.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.modes
            .compare(&other.modes)
            .then_with(|| self.attributes.compare(&other.attributes))
    }

    /// Applies the global default baseline on top of the current contents.
    ///
    /// Resets the hint and render bin, forces the common fixed-function modes
    /// off and installs default attributes with their implied modes. Existing
    /// entries for other modes and categories are kept. Changing this baseline
    /// changes rendering for every consumer.
    pub fn set_global_defaults(&mut self) {
        log::debug!("Applying global default render state.");
        self.rendering_hint = RenderingHint::DefaultBin;
        self.set_render_bin_to_inherit();

        self.set_mode(Mode::LIGHTING, ModeValue::OFF);
        self.set_mode(Mode::FOG, ModeValue::OFF);
        self.set_mode(Mode::POINT_SMOOTH, ModeValue::OFF);

        self.set_mode(Mode::TEXTURE_2D, ModeValue::OFF);

        self.set_mode(Mode::TEXTURE_GEN_S, ModeValue::OFF);
        self.set_mode(Mode::TEXTURE_GEN_T, ModeValue::OFF);
        self.set_mode(Mode::TEXTURE_GEN_R, ModeValue::OFF);
        self.set_mode(Mode::TEXTURE_GEN_Q, ModeValue::OFF);

        self.set_attribute_and_modes(AttributeRef::new(AlphaFunc::default()), ModeValue::OFF);
        self.set_attribute_and_modes(AttributeRef::new(CullFace::default()), ModeValue::ON);
        self.set_attribute_and_modes(AttributeRef::new(FrontFace::default()), ModeValue::ON);

        let material = Material::default().with_color_mode(ColorMode::AmbientAndDiffuse);
        self.set_attribute_and_modes(AttributeRef::new(material), ModeValue::ON);

        self.set_attribute_and_modes(AttributeRef::new(PolygonMode::default()), ModeValue::OFF);
        self.set_attribute_and_modes(AttributeRef::new(Transparency::default()), ModeValue::OFF);

        self.set_attribute_and_modes(AttributeRef::new(Depth::default()), ModeValue::ON);
    }

    /// Resets everything to inherit: hint, render bin, modes and attributes.
    ///
    /// Attributes are dropped without running their mode side effects.
    pub fn set_all_to_inherit(&mut self) {
        self.rendering_hint = RenderingHint::DefaultBin;
        self.set_render_bin_to_inherit();
        self.modes.clear();
        self.attributes.clear();
    }

    /// Returns `true` if no mode or attribute is set.
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty() && self.attributes.is_empty()
    }

    // --- Modes ---

    /// Stores `value` for `mode`. A value carrying `INHERIT` removes the entry instead.
    pub fn set_mode(&mut self, mode: Mode, value: ModeValue) {
        self.modes.set(mode, value);
    }

    /// Removes any explicit value for `mode`.
    pub fn set_mode_to_inherit(&mut self, mode: Mode) {
        self.modes.set_to_inherit(mode);
    }

    /// Returns the value stored for `mode`, or `INHERIT` when unset.
    pub fn get_mode(&self, mode: Mode) -> ModeValue {
        self.modes.get(mode)
    }

    /// Iterates over the explicit modes in ascending order.
    pub fn modes(&self) -> impl Iterator<Item = (Mode, ModeValue)> + '_ {
        self.modes.iter()
    }

    /// The underlying mode table.
    pub fn mode_table(&self) -> &ModeTable {
        &self.modes
    }

    // --- Attributes ---

    /// Installs `attribute` under its category without touching any modes.
    ///
    /// `None` is ignored. If `value` carries `INHERIT`, the attribute's category
    /// is reset to inherit instead. Only the `OVERRIDE` bit of `value` is kept.
    pub fn set_attribute(&mut self, attribute: impl Into<Option<AttributeRef>>, value: ModeValue) {
        let Some(attribute) = attribute.into() else {
            return;
        };
        if value.is_inherit() {
            self.set_attribute_to_inherit(attribute.category());
        } else {
            self.attributes
                .insert(AttributePair::new(attribute, value.is_override()));
        }
    }

    /// Installs `attribute` and then lets it set the modes it implies.
    ///
    /// `None` is ignored. The attribute's [`StateAttribute::apply_mode_effects`]
    /// hook runs with `value`, so installing a blend attribute can also enable
    /// blending in the same call.
    pub fn set_attribute_and_modes(
        &mut self,
        attribute: impl Into<Option<AttributeRef>>,
        value: ModeValue,
    ) {
        let Some(attribute) = attribute.into() else {
            return;
        };
        self.attributes
            .insert(AttributePair::new(attribute.clone(), value.is_override()));
        attribute.apply_mode_effects(self, value);
    }

    /// Removes the attribute stored for `category`.
    ///
    /// The removed attribute's mode hook runs first with `INHERIT`, clearing
    /// the modes it set when it was installed.
    pub fn set_attribute_to_inherit(&mut self, category: AttributeCategory) {
        let Some(attribute) = self.attributes.get(category).cloned() else {
            return;
        };
        attribute.apply_mode_effects(self, ModeValue::INHERIT);
        self.attributes.remove(category);
    }

    /// Removes `attribute` only if that exact instance is installed.
    ///
    /// Returns `true` if it was removed.
    pub fn remove_attribute(&mut self, attribute: &AttributeRef) -> bool {
        let category = attribute.category();
        let installed = self
            .attributes
            .get(category)
            .is_some_and(|current| current.ptr_eq(attribute));
        if installed {
            self.set_attribute_to_inherit(category);
        }
        installed
    }

    /// Returns the attribute stored for `category`.
    pub fn get_attribute(&self, category: AttributeCategory) -> Option<&AttributeRef> {
        self.attributes.get(category)
    }

    /// Returns the attribute stored for `category` as a concrete `T`.
    pub fn get_attribute_as<T: StateAttribute + 'static>(
        &self,
        category: AttributeCategory,
    ) -> Option<&T> {
        self.get_attribute(category)?.downcast_ref::<T>()
    }

    /// Returns the attribute and override flag stored for `category`.
    pub fn get_attribute_pair(&self, category: AttributeCategory) -> Option<&AttributePair> {
        self.attributes.get_pair(category)
    }

    /// Mutable variant of [`Self::get_attribute_pair`], for editing the override flag.
    pub fn get_attribute_pair_mut(
        &mut self,
        category: AttributeCategory,
    ) -> Option<&mut AttributePair> {
        self.attributes.get_pair_mut(category)
    }

    /// Iterates over the installed attributes in ascending category order.
    pub fn attributes(&self) -> impl Iterator<Item = (AttributeCategory, &AttributePair)> + '_ {
        self.attributes.iter()
    }

    /// The underlying attribute table.
    pub fn attribute_table(&self) -> &AttributeTable {
        &self.attributes
    }

    /// Asks every installed attribute, in ascending category order, to compile
    /// itself against `target`.
    pub fn compile(&self, target: &mut dyn CompileTarget) {
        for (category, pair) in self.attributes.iter() {
            log::trace!("Compiling attribute {category:?}.");
            pair.attribute().compile(&mut *target);
        }
    }

    // --- Render bin ---

    /// Stores `hint` using the default [`RenderBinPolicy`].
    ///
    /// [`RenderingHint::TransparentBin`] also assigns the depth-sorted bin at
    /// index `1`.
    pub fn set_rendering_hint(&mut self, hint: RenderingHint) {
        self.set_rendering_hint_with(hint, &RenderBinPolicy::default());
    }

    /// Stores `hint`, assigning the transparent bin from `policy` if the hint
    /// is [`RenderingHint::TransparentBin`] and the policy couples them.
    pub fn set_rendering_hint_with(&mut self, hint: RenderingHint, policy: &RenderBinPolicy) {
        self.rendering_hint = hint;
        if hint == RenderingHint::TransparentBin {
            if let Some(bin) = policy.transparent_bin() {
                log::debug!(
                    "Transparent hint assigns render bin '{}' ({}).",
                    bin.name,
                    bin.index
                );
                self.render_bin = bin;
            }
        }
    }

    /// The current rendering hint.
    pub fn rendering_hint(&self) -> RenderingHint {
        self.rendering_hint
    }

    /// Assigns the render bin directly. The rendering hint is left untouched.
    pub fn set_render_bin_details(
        &mut self,
        index: i32,
        name: impl Into<String>,
        mode: RenderBinMode,
    ) {
        self.render_bin = RenderBinSpec::new(index, name, mode);
    }

    /// Defers render bin selection to ancestors: mode `Inherit`, index `0`, no name.
    pub fn set_render_bin_to_inherit(&mut self) {
        self.render_bin = RenderBinSpec::inherit();
    }

    /// The current render bin assignment.
    pub fn render_bin(&self) -> &RenderBinSpec {
        &self.render_bin
    }

    /// Returns `true` if this node assigns its own render bin.
    pub fn uses_render_bin_details(&self) -> bool {
        self.render_bin.uses_render_bin_details()
    }
}

impl PartialEq for StateSet {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for StateSet {}

impl PartialOrd for StateSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StateSet {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}
