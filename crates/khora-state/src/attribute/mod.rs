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

//! Attribute categories, the `StateAttribute` contract and shared attribute handles.
//!
//! Every concrete attribute kind reports exactly one [`AttributeCategory`]. A
//! state set holds at most one attribute per category, so two unrelated kinds
//! must never report the same category. The container cannot detect such a
//! collision; it is an obligation on whoever implements [`StateAttribute`].

mod alpha_func;
mod cull_face;
mod depth;
mod front_face;
mod material;
mod polygon_mode;
mod table;
mod transparency;

pub use alpha_func::*;
pub use cull_face::*;
pub use depth::*;
pub use front_face::*;
pub use material::*;
pub use polygon_mode::*;
pub use table::*;
pub use transparency::*;

use std::any::{Any, TypeId};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::compile::CompileTarget;
use crate::mode::ModeValue;
use crate::state_set::StateSet;

/// Identifies a kind of attribute. One slot per kind exists in a state set.
///
/// The declaration order is the sort order used when state sets are compared
/// and compiled. Externally defined kinds use [`AttributeCategory::Custom`] and
/// sort after every built-in kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeCategory {
    /// Alpha test function.
    AlphaFunc,
    /// Face culling.
    CullFace,
    /// Front-face winding.
    FrontFace,
    /// Lighting material.
    Material,
    /// Polygon rasterization mode.
    PolygonMode,
    /// Blend function.
    Transparency,
    /// Depth test configuration.
    Depth,
    /// An attribute kind defined outside this crate.
    Custom(u32),
}

/// Helper trait to allow downcasting `dyn StateAttribute` trait objects to their concrete types.
pub trait AsAny {
    /// Returns a reference to the inner value as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A structured block of rendering parameters belonging to one category.
///
/// Attribute instances are immutable once shared: a state set only ever
/// replaces them, it never edits one in place.
pub trait StateAttribute: AsAny + fmt::Debug + Send + Sync {
    /// The category slot this attribute occupies.
    fn category(&self) -> AttributeCategory;

    /// Orders this attribute against another instance of the same category.
    ///
    /// Implementations typically call [`compare_peer`] to downcast `other`.
    fn compare(&self, other: &dyn StateAttribute) -> Ordering;

    /// Sets the modes implied by this attribute on `state_set`.
    ///
    /// Called with the install value by [`StateSet::set_attribute_and_modes`]
    /// and with `INHERIT` when the attribute is removed, so that implied modes
    /// are cleared again. The default implementation implies no modes.
    fn apply_mode_effects(&self, state_set: &mut StateSet, value: ModeValue) {
        let _ = (state_set, value);
    }

    /// Prepares this attribute against an external compile target.
    ///
    /// The default implementation has nothing to prepare.
    fn compile(&self, target: &mut dyn CompileTarget) {
        let _ = target;
    }
}

/// Downcasts `other` to `T` and orders the pair with `cmp`.
///
/// If `other` is a different concrete type, two attribute kinds share a
/// category. The pair is then ordered by type identity so the result stays a
/// strict order, and a warning is logged.
pub fn compare_peer<T, F>(this: &T, other: &dyn StateAttribute, cmp: F) -> Ordering
where
    T: StateAttribute + 'static,
    F: FnOnce(&T, &T) -> Ordering,
{
    match other.as_any().downcast_ref::<T>() {
        Some(peer) => cmp(this, peer),
        None => {
            log::warn!(
                "Attribute category {:?} is reported by more than one attribute type.",
                this.category()
            );
            TypeId::of::<T>().cmp(&other.as_any().type_id())
        }
    }
}

/// A thread-safe, reference-counted handle to an attribute instance.
///
/// The same instance is routinely shared by many state sets. Cloning a handle
/// only increments the reference count; the attribute is dropped when the last
/// handle goes away.
#[derive(Debug, Clone)]
pub struct AttributeRef(Arc<dyn StateAttribute>);

impl AttributeRef {
    /// Wraps `attribute` in a new shared handle.
    pub fn new<T: StateAttribute + 'static>(attribute: T) -> Self {
        Self(Arc::new(attribute))
    }

    /// Returns `true` if both handles point at the same instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Returns the concrete attribute if it is a `T`.
    pub fn downcast_ref<T: StateAttribute + 'static>(&self) -> Option<&T> {
        let attribute: &dyn StateAttribute = &*self.0;
        attribute.as_any().downcast_ref::<T>()
    }

    /// Returns the number of handles sharing this instance.
    pub fn strong_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}

impl From<Arc<dyn StateAttribute>> for AttributeRef {
    fn from(attribute: Arc<dyn StateAttribute>) -> Self {
        Self(attribute)
    }
}

impl Deref for AttributeRef {
    type Target = dyn StateAttribute;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Impostor;

    impl StateAttribute for Impostor {
        fn category(&self) -> AttributeCategory {
            AttributeCategory::CullFace
        }

        fn compare(&self, other: &dyn StateAttribute) -> Ordering {
            compare_peer(self, other, |_, _| Ordering::Equal)
        }
    }

    #[test]
    fn test_builtin_categories_sort_before_custom() {
        assert!(AttributeCategory::AlphaFunc < AttributeCategory::CullFace);
        assert!(AttributeCategory::Depth < AttributeCategory::Custom(0));
        assert!(AttributeCategory::Custom(1) < AttributeCategory::Custom(2));
    }

    #[test]
    fn test_handles_share_one_instance() {
        let a = AttributeRef::new(CullFace::default());
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        assert_eq!(a.strong_count(), 2);
        drop(b);
        assert_eq!(a.strong_count(), 1);
    }

    #[test]
    fn test_downcast() {
        let handle = AttributeRef::new(CullFace::new(crate::pipeline::CullMode::Front));
        let cull = handle.downcast_ref::<CullFace>().expect("Should downcast to CullFace");
        assert_eq!(cull.mode, crate::pipeline::CullMode::Front);
        assert!(handle.downcast_ref::<Depth>().is_none());
    }

    #[test]
    fn test_colliding_types_still_order_strictly() {
        let impostor = AttributeRef::new(Impostor);
        let cull = AttributeRef::new(CullFace::default());

        let forward = impostor.compare(&*cull);
        let backward = cull.compare(&*impostor);
        assert_ne!(forward, Ordering::Equal);
        assert_eq!(forward, backward.reverse());
    }
}
