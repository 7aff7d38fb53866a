//! Card system: definitions, instances, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: identifier for card definitions
//! - `CardDefinition`: static card data (name + image URL)
//! - `CardInstance`: one deck slot with its mutable `revealed` flag
//! - `CardCatalog`: ordered registry of unique definitions
//!
//! A deck always holds two independent `CardInstance`s per definition;
//! see `round::build_deck`.

pub mod catalog;
pub mod definition;
pub mod instance;

pub use catalog::CardCatalog;
pub use definition::{CardDefinition, CardId};
pub use instance::CardInstance;
