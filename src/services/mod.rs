pub mod question_transformer;
pub mod record_writer;
pub mod tree_walker;

pub use question_transformer::QuestionTransformer;
pub use record_writer::RecordWriter;
pub use tree_walker::TreeWalker;
