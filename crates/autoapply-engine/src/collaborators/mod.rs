//! Built-in implementations of the collaborator seams.

pub mod extract;
pub mod generate;
pub mod recognize;

pub use extract::FileTextExtractor;
pub use generate::HttpGenerator;
pub use recognize::RegexRecognizer;
