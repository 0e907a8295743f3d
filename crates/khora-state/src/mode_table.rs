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

//! The sparse table of mode values held by a state set.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::mode::{Mode, ModeValue};
use crate::ordering::lockstep_cmp;

/// A sparse mapping from [`Mode`] to [`ModeValue`].
///
/// A missing entry means "inherit". Values carrying the `INHERIT` sentinel are
/// never stored; setting one removes the entry instead. Iteration is always in
/// ascending mode order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeTable {
    entries: BTreeMap<Mode, ModeValue>,
}

impl ModeTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` for `mode`, or removes the entry if `value` is `INHERIT`.
    pub fn set(&mut self, mode: Mode, value: ModeValue) {
        if value.is_inherit() {
            self.set_to_inherit(mode);
        } else {
            log::trace!("Setting {mode:?} to {value:?}.");
            self.entries.insert(mode, value);
        }
    }

    /// Removes the entry for `mode`, if any.
    pub fn set_to_inherit(&mut self, mode: Mode) {
        if self.entries.remove(&mode).is_some() {
            log::trace!("{mode:?} now inherits.");
        }
    }

    /// Returns the stored value for `mode`, or `INHERIT` when unset.
    pub fn get(&self, mode: Mode) -> ModeValue {
        self.entries
            .get(&mode)
            .copied()
            .unwrap_or(ModeValue::INHERIT)
    }

    /// Returns `true` if an explicit value is stored for `mode`.
    pub fn contains(&self, mode: Mode) -> bool {
        self.entries.contains_key(&mode)
    }

    /// Iterates over the stored entries in ascending mode order.
    pub fn iter(&self) -> impl Iterator<Item = (Mode, ModeValue)> + '_ {
        self.entries.iter().map(|(mode, value)| (*mode, *value))
    }

    /// Returns the number of explicit entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if every mode inherits.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Orders two tables by walking both in ascending mode order.
    ///
    /// The first differing mode decides, then the first differing value (by
    /// its raw bits). A table that is a strict prefix of the other sorts first.
    pub fn compare(&self, other: &Self) -> Ordering {
        lockstep_cmp(self.iter(), other.iter(), |lhs, rhs| {
            lhs.bits().cmp(&rhs.bits())
        })
    }
}
