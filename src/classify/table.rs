use crate::classify::{LevelAssignment, LevelClassifier};

/// Level classifiers in tree-depth order, outermost first.
#[derive(Debug, Clone, Default)]
pub struct ClassificationTable {
    levels: Vec<LevelClassifier>,
}

impl ClassificationTable {
    pub fn new(levels: Vec<LevelClassifier>) -> Self {
        Self { levels }
    }

    pub fn levels(&self) -> &[LevelClassifier] {
        &self.levels
    }

    /// Classify every filename at every level.
    ///
    /// This must complete before any tree insertion: insertion reads each
    /// level's filename -> node table and never classifies on demand.
    pub fn classify(&self, filenames: &[String]) -> Classification {
        let levels = self
            .levels
            .iter()
            .map(|level| {
                let assignment = level.classify(filenames.iter().map(String::as_str));
                log::info!(
                    "level '{}': {} filenames into {} nodes",
                    level.name(),
                    assignment.len(),
                    assignment.nodes().count()
                );
                for node in assignment.nodes() {
                    let count = assignment.filenames_for(node).map_or(0, |f| f.len());
                    log::debug!("level '{}': node {:?} holds {}", level.name(), node, count);
                }
                assignment
            })
            .collect();
        Classification { levels }
    }
}

/// Immutable outcome of [`ClassificationTable::classify`], one
/// [`LevelAssignment`] per level in depth order.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    levels: Vec<LevelAssignment>,
}

impl Classification {
    pub fn levels(&self) -> &[LevelAssignment] {
        &self.levels
    }

    pub fn level_names(&self) -> impl Iterator<Item = &str> {
        self.levels.iter().map(LevelAssignment::level)
    }
}
