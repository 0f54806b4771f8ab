pub mod text;

pub use text::SentenceSink;
