pub mod lexical;

pub use lexical::RelevanceIndex;
