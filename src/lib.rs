//! Working-tree mutation planning and diff argument construction for git.
//!
//! This crate decides which sequence of git operations safely discards a
//! file's changes given its status (tracked, untracked, added, staged,
//! conflicted), and assembles the exact ordered argument lists for the
//! worktree, ref-to-ref, and untracked-file diff invocations.
//!
//! All git execution goes through the [`CommandDispatcher`] capability and
//! all file deletion through the [`FileRemover`] capability, so argument
//! ordering and call sequencing can be asserted without spawning a process.

use error_set::error_set;

mod diff;
mod discard;
mod dispatch;
mod staging;
mod status;

pub use diff::DiffOptions;
pub use dispatch::{CommandDispatcher, DiskRemover, FileRemover, GitRunner};
pub use status::FileStatus;

error_set! {
    /// Top-level error for working tree operations
    WorktreeError := {
        /// The injected file-removal capability failed. The underlying
        /// message is carried through untouched.
        #[display("{message}")]
        FileRemoval { message: String },
    } || GitCommandError

    /// Errors from git command execution
    GitCommandError := {
        #[display("Failed to run git: {message}")]
        SpawnFailed { message: String },
        /// git exited non-zero; displays the captured stderr verbatim
        #[display("{stderr}")]
        ExitError { stderr: String },
        #[display("Invalid UTF-8 in git output: {message}")]
        InvalidUtf8 { message: String },
    }
}

/// Main interface for working tree operations.
///
/// Holds the worktree path (emitted as `-C <path>` on diff invocations) and
/// the dispatcher that executes argument lists against the git binary.
///
/// # Examples
/// ```no_run
/// use git_fileops::{GitRunner, WorkingTree};
///
/// let tree = WorkingTree::new(".", GitRunner::new());
/// tree.stage_file("flake.nix").unwrap();
/// ```
pub struct WorkingTree<'a, D> {
    pub(crate) worktree_path: &'a str,
    pub(crate) dispatcher: D,
}

impl<'a, D: CommandDispatcher> WorkingTree<'a, D> {
    /// Create a new WorkingTree rooted at the given worktree path
    pub fn new(worktree_path: &'a str, dispatcher: D) -> Self {
        Self {
            worktree_path,
            dispatcher,
        }
    }

    pub(crate) fn dispatch(&self, args: Vec<String>) -> Result<String, GitCommandError> {
        self.dispatcher.run(&args)
    }
}
