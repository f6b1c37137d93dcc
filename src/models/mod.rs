pub mod definition;
pub mod loaders;

pub use definition::{Page, PageDefinition, QuestionEntry, QuestionRecord, TransformedQuestion};
pub use loaders::{load_definition, parse_definition};
