//! Per-level filename classification.
//!
//! A [`LevelClassifier`] decides which node a filename belongs to at one depth
//! of the tree. A [`ClassificationTable`] holds the classifiers in depth order
//! and runs them all over the full filename list up front, producing an
//! immutable [`Classification`] that tree construction reads from.

pub mod level;
pub mod table;

pub use level::{LevelAssignment, LevelClassifier, NO_MATCH, PatternRule};
pub use table::{Classification, ClassificationTable};
