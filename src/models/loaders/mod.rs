pub mod yaml_loader;

pub use yaml_loader::{load_definition, parse_definition};
