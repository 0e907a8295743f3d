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

//! Render bin placement: hints, bin specs and the transparent-bin policy.

use serde::{Deserialize, Serialize};

use crate::error::StateError;

/// A coarse classifier for where a node's geometry belongs in the draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RenderingHint {
    /// No preference; use the default bin.
    #[default]
    DefaultBin,
    /// Opaque geometry.
    OpaqueBin,
    /// Transparent geometry that must be depth sorted.
    TransparentBin,
}

/// How a node's render bin is resolved during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RenderBinMode {
    /// Defer to the nearest ancestor that specifies a bin.
    #[default]
    Inherit,
    /// Use this node's bin index and name.
    UseRenderBinDetails,
    /// Use this node's bin and force it on descendants.
    OverrideRenderBinDetails,
    /// Use this node's bin and ignore ancestor overrides.
    ProtectedRenderBinDetails,
    /// Both override descendants and ignore ancestor overrides.
    OverrideProtectedRenderBinDetails,
}

/// The draw-order bucket assigned to a node.
///
/// `index` orders bins: lower indices draw first within the resolved scope.
/// `name` is resolved to a bin implementation by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RenderBinSpec {
    /// How the bin is resolved.
    pub mode: RenderBinMode,
    /// The bin's draw-order index.
    pub index: i32,
    /// The name of the bin implementation.
    pub name: String,
}

impl RenderBinSpec {
    /// The inherit state: mode `Inherit`, index `0`, no name.
    pub fn inherit() -> Self {
        Self::default()
    }

    /// An explicit bin assignment.
    pub fn new(index: i32, name: impl Into<String>, mode: RenderBinMode) -> Self {
        Self {
            mode,
            index,
            name: name.into(),
        }
    }

    /// Returns `true` if this spec carries its own bin rather than inheriting.
    pub fn uses_render_bin_details(&self) -> bool {
        self.mode != RenderBinMode::Inherit
    }
}

/// Controls the bin assigned when a node is hinted as transparent.
///
/// Setting [`RenderingHint::TransparentBin`] has historically also forced the
/// node into the depth-sorted bin at index `1`. That coupling is on by default
/// and can be switched off here.
///
/// # Examples
///
/// ```
/// use khora_state::RenderBinPolicy;
///
/// let policy = RenderBinPolicy::from_json_str(r#"{ "transparent_bin_index": 10 }"#).unwrap();
/// assert_eq!(policy.transparent_bin_index, 10);
/// assert_eq!(policy.transparent_bin_name, "DepthSortedBin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderBinPolicy {
    /// If `true`, the transparent hint also assigns the transparent bin.
    pub couple_transparent_hint: bool,
    /// The index of the transparent bin.
    pub transparent_bin_index: i32,
    /// The name of the transparent bin.
    pub transparent_bin_name: String,
}

impl RenderBinPolicy {
    /// The bin name assigned to transparent geometry by default.
    pub const DEPTH_SORTED_BIN: &'static str = "DepthSortedBin";

    /// Parses a policy from JSON. Missing fields take their default values.
    pub fn from_json_str(json: &str) -> Result<Self, StateError> {
        let policy: Self =
            serde_json::from_str(json).map_err(|source| StateError::InvalidConfig {
                what: "render bin policy",
                source,
            })?;
        if policy.transparent_bin_name.is_empty() {
            return Err(StateError::EmptyBinName);
        }
        Ok(policy)
    }

    /// The bin a transparent hint assigns, or `None` when the coupling is disabled.
    pub fn transparent_bin(&self) -> Option<RenderBinSpec> {
        self.couple_transparent_hint.then(|| {
            RenderBinSpec::new(
                self.transparent_bin_index,
                self.transparent_bin_name.clone(),
                RenderBinMode::UseRenderBinDetails,
            )
        })
    }
}

impl Default for RenderBinPolicy {
    fn default() -> Self {
        Self {
            couple_transparent_hint: true,
            transparent_bin_index: 1,
            transparent_bin_name: Self::DEPTH_SORTED_BIN.to_owned(),
        }
    }
}
