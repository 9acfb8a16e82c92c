/// Word set loading and length-based candidate filtering
pub mod words;

pub use words::Lexicon;
