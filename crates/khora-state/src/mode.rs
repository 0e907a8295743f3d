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

//! Mode identifiers and the flag set stored against them.

use std::fmt;

/// Identifies a single boolean rendering switch, such as face culling.
///
/// Modes are opaque and totally ordered. The well-known constants reuse the
/// conventional GL enum values so that their relative order is stable across
/// the whole program.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mode(pub u32);

impl Mode {
    /// Lighting calculations.
    pub const LIGHTING: Self = Self(0x0B50);
    /// Fog.
    pub const FOG: Self = Self(0x0B60);
    /// Antialiased point rasterization.
    pub const POINT_SMOOTH: Self = Self(0x0B10);
    /// Two-dimensional texture mapping.
    pub const TEXTURE_2D: Self = Self(0x0DE1);
    /// Texture coordinate generation for the `s` coordinate.
    pub const TEXTURE_GEN_S: Self = Self(0x0C60);
    /// Texture coordinate generation for the `t` coordinate.
    pub const TEXTURE_GEN_T: Self = Self(0x0C61);
    /// Texture coordinate generation for the `r` coordinate.
    pub const TEXTURE_GEN_R: Self = Self(0x0C62);
    /// Texture coordinate generation for the `q` coordinate.
    pub const TEXTURE_GEN_Q: Self = Self(0x0C63);
    /// The alpha test.
    pub const ALPHA_TEST: Self = Self(0x0BC0);
    /// Face culling.
    pub const CULL_FACE: Self = Self(0x0B44);
    /// The depth test.
    pub const DEPTH_TEST: Self = Self(0x0B71);
    /// Color blending.
    pub const BLEND: Self = Self(0x0BE2);
    /// Material colors tracking the current vertex color.
    pub const COLOR_MATERIAL: Self = Self(0x0B57);

    /// Returns the raw identifier.
    pub const fn id(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mode({:#06x})", self.0)
    }
}

/// The value stored against a [`Mode`], or the override request attached to an attribute.
///
/// This is a small bit set rather than a plain boolean: the low bit holds the
/// on/off state and the higher bits carry the `OVERRIDE`, `PROTECTED` and
/// `INHERIT` modifiers. `INHERIT` is a sentinel meaning "not set here" and is
/// never stored in a table.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModeValue {
    bits: u32,
}

impl ModeValue {
    /// The switch is disabled.
    pub const OFF: Self = Self { bits: 0x0 };
    /// The switch is enabled.
    pub const ON: Self = Self { bits: 0x1 };
    /// Descendants may not change this entry during hierarchical merging.
    pub const OVERRIDE: Self = Self { bits: 0x2 };
    /// This entry may not be overridden by an ancestor.
    pub const PROTECTED: Self = Self { bits: 0x4 };
    /// Defer to ancestor state. Never stored.
    pub const INHERIT: Self = Self { bits: 0x8 };

    /// Creates a value from raw bits.
    pub const fn from_bits(bits: u32) -> Self {
        Self { bits }
    }

    /// Returns the raw bits.
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// Returns `true` if all bits of `other` are set in `self`.
    pub const fn contains(&self, other: Self) -> bool {
        (self.bits & other.bits) == other.bits
    }

    /// Combines two values.
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Returns `true` if the `INHERIT` sentinel is present.
    pub const fn is_inherit(&self) -> bool {
        self.contains(Self::INHERIT)
    }

    /// Returns `true` if the `OVERRIDE` bit is present.
    pub const fn is_override(&self) -> bool {
        self.contains(Self::OVERRIDE)
    }

    /// Returns `true` if the `PROTECTED` bit is present.
    pub const fn is_protected(&self) -> bool {
        self.contains(Self::PROTECTED)
    }

    /// Returns the base on/off state, ignoring modifiers.
    pub const fn is_on(&self) -> bool {
        self.contains(Self::ON)
    }

    /// Returns only the `OVERRIDE` bit of this value.
    pub const fn override_bit(self) -> Self {
        Self {
            bits: self.bits & Self::OVERRIDE.bits,
        }
    }
}

impl std::ops::BitOr for ModeValue {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl std::ops::BitOrAssign for ModeValue {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl From<bool> for ModeValue {
    fn from(on: bool) -> Self {
        if on {
            Self::ON
        } else {
            Self::OFF
        }
    }
}

impl fmt::Debug for ModeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_inherit() {
            return write!(f, "ModeValue {{ INHERIT }}");
        }
        write!(f, "ModeValue {{ {}", if self.is_on() { "ON" } else { "OFF" })?;
        if self.is_override() {
            write!(f, " | OVERRIDE")?;
        }
        if self.is_protected() {
            write!(f, " | PROTECTED")?;
        }
        write!(f, " }}")
    }
}
