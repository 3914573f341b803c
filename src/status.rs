/// One file's version-control state snapshot.
///
/// Constructed fresh per call from upstream status output; nothing in this
/// crate retains it across calls. The discard planner accepts every boolean
/// combination without assuming mutual exclusivity beyond what git semantics
/// guarantee (an added file is by definition untracked before its first
/// commit).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileStatus {
    /// Repository-relative path
    pub path: String,
    /// Known to the revision index (has at least one prior commit)
    pub tracked: bool,
    /// Newly created and staged for its first commit, no committed version
    pub added: bool,
    /// Index differs from the last commit for this file
    pub has_staged_changes: bool,
    /// Unresolved merge conflict recorded for this file
    pub has_merge_conflicts: bool,
}

impl FileStatus {
    /// Status for a plain untracked file (not staged, no history)
    pub fn untracked(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Status for a committed file with no staged changes
    pub fn tracked(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            tracked: true,
            ..Self::default()
        }
    }
}
