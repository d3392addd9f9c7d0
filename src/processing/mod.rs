//! Text processing and analysis module
//! Tokenization, TF-IDF scoring, skill-gap detection and suggestions

pub mod text_processor;
pub mod scorer;
pub mod skill_gap;
pub mod suggestions;
pub mod analyzer;
