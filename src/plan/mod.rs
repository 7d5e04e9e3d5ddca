//! Commit plans: the ordered list of definitions a run works through.

pub mod definition;
pub mod loader;

pub use definition::{CommitDefinition, CommitMessage};
pub use loader::{builtin_plan, load_plan, parse_plan};

/// An immutable, ordered list of commit definitions.
///
/// Order decides only the order commits are created in; definitions do not
/// depend on each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitPlan {
    definitions: Vec<CommitDefinition>,
}

impl CommitPlan {
    pub fn new(definitions: Vec<CommitDefinition>) -> Self {
        Self { definitions }
    }

    pub fn definitions(&self) -> &[CommitDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CommitDefinition> {
        self.definitions.iter()
    }
}

impl<'a> IntoIterator for &'a CommitPlan {
    type Item = &'a CommitDefinition;
    type IntoIter = std::slice::Iter<'a, CommitDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<CommitDefinition> for CommitPlan {
    fn from_iter<T: IntoIterator<Item = CommitDefinition>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
