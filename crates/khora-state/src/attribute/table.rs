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

//! The sparse table of attributes held by a state set.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::{AttributeCategory, AttributeRef};
use crate::ordering::lockstep_cmp;

/// An installed attribute together with its override flag.
#[derive(Debug, Clone)]
pub struct AttributePair {
    attribute: AttributeRef,
    override_flag: bool,
}

impl AttributePair {
    /// Pairs `attribute` with an override flag.
    pub fn new(attribute: AttributeRef, override_flag: bool) -> Self {
        Self {
            attribute,
            override_flag,
        }
    }

    /// The installed attribute.
    pub fn attribute(&self) -> &AttributeRef {
        &self.attribute
    }

    /// Returns `true` if descendants may not replace this attribute during merging.
    pub fn is_override(&self) -> bool {
        self.override_flag
    }

    /// Changes the override flag without replacing the attribute.
    pub fn set_override(&mut self, override_flag: bool) {
        self.override_flag = override_flag;
    }

    /// Orders two pairs of the same category: override flag first, then the
    /// attribute's own comparator.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.override_flag
            .cmp(&other.override_flag)
            .then_with(|| self.attribute.compare(&*other.attribute))
    }
}

/// A sparse mapping from [`AttributeCategory`] to an [`AttributePair`].
///
/// Holds at most one attribute per category; inserting replaces and releases
/// the previous handle. Iteration is always in ascending category order.
#[derive(Debug, Clone, Default)]
pub struct AttributeTable {
    entries: BTreeMap<AttributeCategory, AttributePair>,
}

impl AttributeTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `pair` under its attribute's category, returning the replaced pair.
    pub fn insert(&mut self, pair: AttributePair) -> Option<AttributePair> {
        let category = pair.attribute.category();
        log::trace!(
            "Installing {category:?} attribute (override: {}).",
            pair.override_flag
        );
        self.entries.insert(category, pair)
    }

    /// Removes and returns the pair stored for `category`.
    pub fn remove(&mut self, category: AttributeCategory) -> Option<AttributePair> {
        let removed = self.entries.remove(&category);
        if removed.is_some() {
            log::trace!("{category:?} attribute now inherits.");
        }
        removed
    }

    /// Returns the attribute stored for `category`.
    pub fn get(&self, category: AttributeCategory) -> Option<&AttributeRef> {
        self.entries.get(&category).map(AttributePair::attribute)
    }

    /// Returns the pair stored for `category`.
    pub fn get_pair(&self, category: AttributeCategory) -> Option<&AttributePair> {
        self.entries.get(&category)
    }

    /// Returns the pair stored for `category` for in-place flag edits.
    pub fn get_pair_mut(&mut self, category: AttributeCategory) -> Option<&mut AttributePair> {
        self.entries.get_mut(&category)
    }

    /// Returns `true` if an attribute is stored for `category`.
    pub fn contains(&self, category: AttributeCategory) -> bool {
        self.entries.contains_key(&category)
    }

    /// Iterates over the stored pairs in ascending category order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeCategory, &AttributePair)> + '_ {
        self.entries.iter().map(|(category, pair)| (*category, pair))
    }

    /// Returns the number of installed attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if every category inherits.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry, releasing the handles. Mode side effects are not run.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Orders two tables by walking both in ascending category order.
    ///
    /// Categories are compared first, then each matching pair with
    /// [`AttributePair::compare`]. A table that is a strict prefix of the other
    /// sorts first.
    pub fn compare(&self, other: &Self) -> Ordering {
        lockstep_cmp(self.iter(), other.iter(), |lhs, rhs| lhs.compare(rhs))
    }
}
