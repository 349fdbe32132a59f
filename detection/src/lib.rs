pub mod analyzer;
pub mod classifier;
pub mod detectors;
pub mod lexicon;
pub mod model;
pub mod sentiment;

pub use analyzer::ReviewAnalyzer;
pub use model::{AnalysisResult, Evidence, Prediction};
