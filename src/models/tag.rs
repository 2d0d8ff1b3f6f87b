use std::fmt;

use serde::{Deserialize, Serialize};

/// Heuristic syntactic role of a matched line
///
/// Variants are listed in classification priority order. The bracketed
/// label returned by [`ClassificationTag::label`] is what callers see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassificationTag {
    Annotation,
    Import,
    Class,
    Constructor,
    Function,
    Gradle,
    Property,
    Generic,
}

impl ClassificationTag {
    /// All tags, in the order the classifier evaluates them
    pub const ALL: [ClassificationTag; 8] = [
        ClassificationTag::Annotation,
        ClassificationTag::Import,
        ClassificationTag::Class,
        ClassificationTag::Constructor,
        ClassificationTag::Function,
        ClassificationTag::Gradle,
        ClassificationTag::Property,
        ClassificationTag::Generic,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ClassificationTag::Annotation => "[Annotation]",
            ClassificationTag::Import => "[Import]",
            ClassificationTag::Class => "[Class]",
            ClassificationTag::Constructor => "[Constructor]",
            ClassificationTag::Function => "[Function]",
            ClassificationTag::Gradle => "[Gradle]",
            ClassificationTag::Property => "[Property]",
            ClassificationTag::Generic => "[Generic]",
        }
    }
}

impl fmt::Display for ClassificationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
