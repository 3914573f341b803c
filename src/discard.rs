//! The discard planner: derive and execute the minimal safe sequence of git
//! operations that throws away all changes to one file.

use crate::dispatch::{CommandDispatcher, FileRemover};
use crate::{FileStatus, GitCommandError, WorkingTree, WorktreeError};

impl<D: CommandDispatcher> WorkingTree<'_, D> {
    /// Discard every change to the file described by `status`.
    ///
    /// The plan is derived from the status flags, in priority order:
    ///
    /// 1. A staged entry is unstaged first (`git reset -- <path>`), without
    ///    touching the working copy yet.
    /// 2. An untracked file (plain untracked or added-for-first-commit) is
    ///    deleted from disk through `remover`.
    /// 3. A tracked file has its last-committed content restored
    ///    (`git checkout -- <path>`), which also resolves merge conflicts
    ///    for that path.
    ///
    /// So a tracked file with staged changes undergoes both a reset and a
    /// checkout, and an added file with staged changes a reset and a
    /// removal. The sequence is fail-fast with no rollback: the first
    /// failing step halts the plan and its error is returned with the
    /// message unchanged, leaving the file in whatever state the completed
    /// steps produced.
    pub fn discard_all_file_changes<R: FileRemover>(
        &self,
        status: &FileStatus,
        remover: &R,
    ) -> Result<(), WorktreeError> {
        if status.has_staged_changes {
            self.dispatch(vec![
                "reset".to_string(),
                "--".to_string(),
                status.path.clone(),
            ])?;
        }

        if !status.tracked && !status.added && !status.has_staged_changes {
            return remove_from_disk(remover, &status.path);
        }

        if status.added {
            // any staged entry was already reset away above; the file itself
            // has no committed version to restore, so delete it
            return remove_from_disk(remover, &status.path);
        }

        if status.tracked {
            self.discard_unstaged_file_changes(&status.path)?;
        }

        Ok(())
    }

    /// Restore one path's working-tree content from the index
    /// (`git checkout -- <path>`), leaving any staged entry alone
    pub fn discard_unstaged_file_changes(&self, path: &str) -> Result<(), GitCommandError> {
        self.dispatch(vec![
            "checkout".to_string(),
            "--".to_string(),
            path.to_string(),
        ])?;
        Ok(())
    }

    /// Restore the whole worktree from the index (`git checkout -- .`)
    pub fn discard_any_unstaged_file_changes(&self) -> Result<(), GitCommandError> {
        self.dispatch(vec![
            "checkout".to_string(),
            "--".to_string(),
            ".".to_string(),
        ])?;
        Ok(())
    }

    /// Delete all untracked files and directories (`git clean -fd`)
    pub fn remove_untracked_files(&self) -> Result<(), GitCommandError> {
        self.dispatch(vec!["clean".to_string(), "-fd".to_string()])?;
        Ok(())
    }

    /// Hard-reset the worktree and index to `reference`
    /// (`git reset --hard <reference>`)
    pub fn reset_hard(&self, reference: &str) -> Result<(), GitCommandError> {
        self.dispatch(vec![
            "reset".to_string(),
            "--hard".to_string(),
            reference.to_string(),
        ])?;
        Ok(())
    }
}

fn remove_from_disk<R: FileRemover>(remover: &R, path: &str) -> Result<(), WorktreeError> {
    remover.remove_file(path).map_err(|e| WorktreeError::FileRemoval {
        message: e.to_string(),
    })
}
