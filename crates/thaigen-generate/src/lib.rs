//! Synthetic Thai contact sentence generation.
//!
//! Reference lists of names and administrative regions are loaded once, then
//! sampled uniformly to build sentences of the form
//! `<name> <address phrase> <address> <phone phrase> <phone>`.

pub mod assembler;
pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;
pub mod reference;

pub use assembler::SentenceAssembler;
pub use engine::{GenerationEngine, SentenceGenerator};
pub use errors::{ErrorKind, GenerationError};
pub use model::{GenerateOptions, GenerationReport};
pub use reference::{
    AddressReferenceLoader, AddressReferenceSet, HttpFetcher, NameReferenceSet, OfflineFetcher,
    ReferenceData, ReferenceFetcher,
};
