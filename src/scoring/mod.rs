pub mod dosha;
pub mod engine;
pub mod recommendations;

pub use dosha::{Dosha, DoshaMap};
pub use engine::{classify, ClassificationResult};
pub use recommendations::{recommendations_for, RecommendationBundle};
