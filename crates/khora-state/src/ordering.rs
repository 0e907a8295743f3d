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

//! Lock-step comparison over two ascending key/value sequences.

use std::cmp::Ordering;

/// Walks two ascending sequences side by side and returns the first difference.
///
/// Keys are compared first, then values with `value_cmp`. When one side runs
/// out while the other still has entries, the shorter side sorts first.
pub(crate) fn lockstep_cmp<K, V, L, R, F>(mut lhs: L, mut rhs: R, mut value_cmp: F) -> Ordering
where
    K: Ord,
    L: Iterator<Item = (K, V)>,
    R: Iterator<Item = (K, V)>,
    F: FnMut(&V, &V) -> Ordering,
{
    loop {
        match (lhs.next(), rhs.next()) {
            (Some((lk, lv)), Some((rk, rv))) => {
                let ordering = lk.cmp(&rk).then_with(|| value_cmp(&lv, &rv));
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (None, None) => return Ordering::Equal,
        }
    }
}
