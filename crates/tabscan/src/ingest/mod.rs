//! File loading and source metadata.

mod reader;
mod source;

pub use reader::{Loader, LoaderConfig};
pub use source::SourceMetadata;
