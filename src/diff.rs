//! Diff argument construction.
//!
//! Flag order is significant and reproduced exactly: the sequences here match
//! what git's parser expects and what output snapshot comparisons are written
//! against, so the builders are pure functions over their inputs with no
//! hidden state or ordering drift.

use crate::dispatch::CommandDispatcher;
use crate::{FileStatus, GitCommandError, WorkingTree};

/// User-selected diff presentation settings, immutable per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOptions {
    /// Suppress color (`--color=never` instead of `--color=always`)
    pub plain: bool,
    /// Diff the index against the last commit instead of the working tree
    /// against the index
    pub cached: bool,
    pub ignore_whitespace: bool,
    /// Lines of context around each change (`--unified=<n>`)
    pub context_size: u32,
    /// Rename-detection sensitivity, 0-100 (`--find-renames=<n>%`)
    pub similarity_threshold: u8,
    /// Swap the from/to direction (ref-to-ref diffs only)
    pub reverse: bool,
    /// Skip the `diff.noprefix=false` override so a user's no-prefix header
    /// configuration takes effect (ref-to-ref diffs only)
    pub no_prefix_in_diff_header: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            plain: false,
            cached: false,
            ignore_whitespace: false,
            context_size: 3,
            similarity_threshold: 50,
            reverse: false,
            no_prefix_in_diff_header: false,
        }
    }
}

fn color_arg(plain: bool) -> &'static str {
    if plain { "never" } else { "always" }
}

/// Argument list for a working-tree-vs-index diff of one file.
///
/// An untracked file with nothing staged has no index entry to diff against,
/// so it is diffed as a full-file addition instead: `--no-index` against
/// `/dev/null`.
pub(crate) fn worktree_diff_args(
    worktree_path: &str,
    status: &FileStatus,
    options: &DiffOptions,
) -> Vec<String> {
    let no_index = !status.tracked && !status.has_staged_changes && !options.cached;

    let mut args = vec![
        "-C".to_string(),
        worktree_path.to_string(),
        "diff".to_string(),
        "--no-ext-diff".to_string(),
        "--submodule".to_string(),
        format!("--unified={}", options.context_size),
        format!("--color={}", color_arg(options.plain)),
    ];
    if options.ignore_whitespace {
        args.push("--ignore-all-space".to_string());
    }
    args.push(format!("--find-renames={}%", options.similarity_threshold));
    if options.cached {
        args.push("--cached".to_string());
    }
    if no_index {
        args.push("--no-index".to_string());
    }
    args.push("--".to_string());
    if no_index {
        args.push("/dev/null".to_string());
    }
    args.push(status.path.clone());

    args
}

/// Argument list for a diff between two arbitrary revisions, restricted to
/// one path.
///
/// Rename detection is disabled: comparing two fixed trees, a rename report
/// is not meaningful the way it is against the index. Unless the caller's
/// configuration asks for no-prefix headers, `diff.noprefix=false` is forced
/// so the `a/`/`b/` header format stays stable.
pub(crate) fn ref_diff_args(
    worktree_path: &str,
    from: &str,
    to: &str,
    path: &str,
    options: &DiffOptions,
) -> Vec<String> {
    let mut args = vec!["-C".to_string(), worktree_path.to_string()];
    if !options.no_prefix_in_diff_header {
        args.push("-c".to_string());
        args.push("diff.noprefix=false".to_string());
    }
    args.extend([
        "diff".to_string(),
        "--no-ext-diff".to_string(),
        "--submodule".to_string(),
        format!("--unified={}", options.context_size),
        "--no-renames".to_string(),
        format!("--color={}", color_arg(options.plain)),
    ]);

    let (from, to) = if options.reverse { (to, from) } else { (from, to) };
    args.push(from.to_string());
    args.push(to.to_string());

    if options.ignore_whitespace {
        args.push("--ignore-all-space".to_string());
    }
    args.push("--".to_string());
    args.push(path.to_string());

    args
}

impl<D: CommandDispatcher> WorkingTree<'_, D> {
    /// Diff one file's working-tree content against the index (or the index
    /// against the last commit, with `options.cached`), returning git's
    /// captured output verbatim
    pub fn worktree_file_diff(
        &self,
        status: &FileStatus,
        options: &DiffOptions,
    ) -> Result<String, GitCommandError> {
        self.dispatch(worktree_diff_args(self.worktree_path, status, options))
    }

    /// Diff one path between two revisions, returning git's captured output
    /// verbatim
    pub fn show_file_diff(
        &self,
        from: &str,
        to: &str,
        path: &str,
        options: &DiffOptions,
    ) -> Result<String, GitCommandError> {
        self.dispatch(ref_diff_args(self.worktree_path, from, to, path, options))
    }
}
