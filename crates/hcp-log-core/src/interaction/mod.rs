//! Interaction domain module.
//!
//! # Module Structure
//!
//! - `draft`: The in-progress form (`InteractionDraft`, `FormField`)
//! - `patch`: Closed-set edit patches (`EditableField`, `EditPatch`)
//! - `model`: Server-side interaction records (`Interaction`)

mod draft;
mod model;
mod patch;

pub use draft::{FormField, InteractionDraft};
pub(crate) use draft::remove_at;
pub use model::Interaction;
pub use patch::{EditPatch, EditableField};

/// Backend identifier of a stored interaction.
pub type InteractionId = i64;
