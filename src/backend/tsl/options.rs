//! Generation options for the TSL emitter

use nodeshade_core::THREE_REVISION;

/// Options that shape the generated document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Wrap the document in `( function ( TSL, uniforms ) { … } );` and return the globals instead of exporting them
    pub iife: bool,
    /// Bind uniforms to the external `uniforms` store instead of constructing them
    pub reference: bool,
    /// Revision shown in the provenance header
    pub revision: String,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            iife: false,
            reference: false,
            revision: THREE_REVISION.to_string(),
        }
    }
}

impl EncodeOptions {
    /// Create options with default settings (module mode, literal uniforms)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set closure (IIFE) mode
    pub fn with_iife(mut self, iife: bool) -> Self {
        self.iife = iife;
        self
    }

    /// Set reference-store uniform binding
    pub fn with_reference(mut self, reference: bool) -> Self {
        self.reference = reference;
        self
    }

    /// Set the header revision
    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = revision.into();
        self
    }
}
