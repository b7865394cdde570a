//! Resource-sampling call vocabulary.
//!
//! GLSL-style lookups (`texture`, `textureLod`, `texelFetch`, …) do not lower to plain calls: the emitter turns
//! them into a method chain on the sampled resource (`tex.sample( uv ).level( lod )`). This registry names the
//! calls and the modifier each one implies.
//!
//! ## Examples
//! ```rust
//! use nodeshade_core::lang::sampling::{self, SampleModifier, SamplingFnId};
//!
//! assert_eq!(sampling::from_str("textureLod"), Some(SamplingFnId::TextureLod));
//! assert_eq!(sampling::info_for(SamplingFnId::TextureLod).modifier, SampleModifier::Level);
//! ```

/// Stable identifier for a sampling call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamplingFnId {
    Texture,
    Texture2D,
    Texture3D,
    TextureCube,
    TextureLod,
    TexelFetch,
    TextureGrad,
}

/// The chained call appended after the base `.sample( coord )`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleModifier {
    /// `.bias( b )`, only when a third argument is supplied.
    OptionalBias,
    /// `.level( lod )`.
    Level,
    /// `.grad( dx, dy )`.
    Grad,
    /// `.setSampler( false )`: raw texel fetch, no filtering.
    NoInterpolation,
}

/// Metadata for a sampling call.
#[derive(Debug, Clone, Copy)]
pub struct SamplingFnInfo {
    pub id: SamplingFnId,
    pub name: &'static str,
    pub modifier: SampleModifier,
    /// Minimum argument count (resource + coordinate + modifier arguments).
    pub min_args: usize,
}

/// Registry of all sampling calls.
pub const SAMPLING_FUNCTIONS: &[SamplingFnInfo] = &[
    SamplingFnInfo {
        id: SamplingFnId::Texture,
        name: "texture",
        modifier: SampleModifier::OptionalBias,
        min_args: 2,
    },
    SamplingFnInfo {
        id: SamplingFnId::Texture2D,
        name: "texture2D",
        modifier: SampleModifier::OptionalBias,
        min_args: 2,
    },
    SamplingFnInfo {
        id: SamplingFnId::Texture3D,
        name: "texture3D",
        modifier: SampleModifier::OptionalBias,
        min_args: 2,
    },
    SamplingFnInfo {
        id: SamplingFnId::TextureCube,
        name: "textureCube",
        modifier: SampleModifier::OptionalBias,
        min_args: 2,
    },
    SamplingFnInfo {
        id: SamplingFnId::TextureLod,
        name: "textureLod",
        modifier: SampleModifier::Level,
        min_args: 3,
    },
    SamplingFnInfo {
        id: SamplingFnId::TexelFetch,
        name: "texelFetch",
        modifier: SampleModifier::NoInterpolation,
        min_args: 2,
    },
    SamplingFnInfo {
        id: SamplingFnId::TextureGrad,
        name: "textureGrad",
        modifier: SampleModifier::Grad,
        min_args: 4,
    },
];

/// Resolve a sampling call by name (case-sensitive).
pub fn from_str(name: &str) -> Option<SamplingFnId> {
    SAMPLING_FUNCTIONS
        .iter()
        .find(|info| info.name == name)
        .map(|info| info.id)
}

/// Return registry metadata for a sampling call.
pub fn info_for(id: SamplingFnId) -> &'static SamplingFnInfo {
    SAMPLING_FUNCTIONS
        .iter()
        .find(|info| info.id == id)
        .expect("INVARIANT: every SamplingFnId has a registry entry")
}
