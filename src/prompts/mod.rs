pub mod builder;
pub mod catalog;
pub mod loader;
pub mod templates;

pub use builder::{compose_turn, fill, PromptBuilder, TimeOfDay};
pub use catalog::{Catalog, LocalizedText};
pub use loader::CatalogLoader;
