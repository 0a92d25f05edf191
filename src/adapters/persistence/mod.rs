//! Filesystem adapters: article folder (input) and timestamped text files (output).

pub mod fs_articles;
pub mod fs_output;

pub use fs_articles::FsArticleSource;
pub use fs_output::FsOutputStore;
