//! Address state machine.
//!
//! - **state**: UI snapshot and the pure `reduce` transition function
//! - **collection**: pure duplicate detection and insert/update/remove
//! - **address_editor**: the stateful editor that sequences both

pub mod address_editor;
pub mod collection;
pub mod state;

pub use address_editor::AddressEditor;
pub use collection::{find_duplicate, remove_address, upsert_address, SaveOutcome};
pub use state::{reduce, Dialog, EditorMode, FormAction, FormState};
