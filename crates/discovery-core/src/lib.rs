pub mod error;
pub mod models;
pub mod persona;
pub mod readme;
pub mod scoring;
pub mod signals;

pub use error::{RankError, Result};
pub use models::{DocumentationMetrics, RankedResult, RepositoryProfile};
pub use persona::Persona;
