// Type definitions for the swagger trimming pipeline

pub mod document;

pub use document::*;
