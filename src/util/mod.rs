pub mod mid;
pub mod range;
pub mod span;

pub use span::Span;
