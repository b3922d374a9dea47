//! The deck state store and the editing helpers built on top of it.

pub mod bulk;
pub mod defaults;
pub mod form;
pub mod listener;
pub mod store;

pub use bulk::{plan_bulk_assignment, BulkAssignment, BULK_SLIDE_ORDER};
pub use form::ImageForm;
pub use listener::{DeckChange, DeckListener, ListenerId};
pub use store::DeckState;
