//! Storage abstraction and implementations for the journal.
//!
//! This crate provides the file store the codecs read from and write to,
//! with a plain-markdown filesystem implementation and an in-memory one.

#![warn(missing_docs)]

pub mod trait_;
pub mod markdown_storage;
pub mod memory_storage;

pub use trait_::{validate_path, FileStore, Result, StorageError};
pub use markdown_storage::MarkdownStorage;
pub use memory_storage::MemoryStorage;
