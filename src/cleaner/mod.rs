//! Cleaner modules for swagger document trimming

pub mod description_trimmer;

pub use description_trimmer::{trim_descriptions, DescriptionTrimmer, TrimStats};
