//! Staging operations: add paths to the index, take them back out, and
//! restore a path's content from an arbitrary revision.

use crate::dispatch::CommandDispatcher;
use crate::{GitCommandError, WorkingTree};

impl<D: CommandDispatcher> WorkingTree<'_, D> {
    /// Stage a single file (`git add -- <path>`)
    pub fn stage_file(&self, path: &str) -> Result<(), GitCommandError> {
        self.stage_files(&[path])
    }

    /// Stage several files in one invocation (`git add -- <paths...>`).
    ///
    /// Each path is passed as its own trailing token after `--`, so paths
    /// with spaces or characters special to the shell survive verbatim.
    pub fn stage_files(&self, paths: &[&str]) -> Result<(), GitCommandError> {
        let mut args = vec!["add".to_string(), "--".to_string()];
        args.extend(paths.iter().map(|p| p.to_string()));
        self.dispatch(args)?;
        Ok(())
    }

    /// Take paths out of the index.
    ///
    /// With `reset` the index entries are restored to the last-commit version
    /// (`git reset HEAD -- <paths...>`); use this for tracked files. Without
    /// it the entries are dropped from the index while the files stay on disk
    /// (`git rm --cached --force -- <paths...>`); use this for newly-added
    /// files that have no prior commit to reset to. The caller chooses
    /// `reset` from the file's tracked state; this operation does not infer
    /// it.
    pub fn unstage_file(&self, paths: &[&str], reset: bool) -> Result<(), GitCommandError> {
        let mut args: Vec<String> = if reset {
            ["reset", "HEAD", "--"].iter().map(|a| a.to_string()).collect()
        } else {
            ["rm", "--cached", "--force", "--"]
                .iter()
                .map(|a| a.to_string())
                .collect()
        };
        args.extend(paths.iter().map(|p| p.to_string()));
        self.dispatch(args)?;
        Ok(())
    }

    /// Overwrite `path` in the working tree with its content at `revision`
    /// (`git checkout <revision> -- <path>`)
    pub fn checkout_file(&self, revision: &str, path: &str) -> Result<(), GitCommandError> {
        self.dispatch(vec![
            "checkout".to_string(),
            revision.to_string(),
            "--".to_string(),
            path.to_string(),
        ])?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::dispatch::doubles::FakeDispatcher;
    use crate::WorkingTree;

    #[test]
    fn stage_file() {
        let runner = FakeDispatcher::new().expect(&["add", "--", "test.txt"], "");
        let tree = WorkingTree::new("/path/to/worktree", &runner);

        tree.stage_file("test.txt").unwrap();
        runner.assert_no_pending();
    }

    #[test]
    fn stage_files() {
        let runner = FakeDispatcher::new().expect(&["add", "--", "test.txt", "test2.txt"], "");
        let tree = WorkingTree::new("/path/to/worktree", &runner);

        tree.stage_files(&["test.txt", "test2.txt"]).unwrap();
        runner.assert_no_pending();
    }

    #[test]
    fn stage_file_with_special_characters() {
        let runner = FakeDispatcher::new().expect(&["add", "--", "name with spaces;&.txt"], "");
        let tree = WorkingTree::new("/path/to/worktree", &runner);

        tree.stage_file("name with spaces;&.txt").unwrap();
        runner.assert_no_pending();
    }

    #[test]
    fn unstage_added_file_removes_it_from_the_index() {
        let runner =
            FakeDispatcher::new().expect(&["rm", "--cached", "--force", "--", "test.txt"], "");
        let tree = WorkingTree::new("/path/to/worktree", &runner);

        tree.unstage_file(&["test.txt"], false).unwrap();
        runner.assert_no_pending();
    }

    #[test]
    fn unstage_tracked_file_resets_to_head() {
        let runner = FakeDispatcher::new().expect(&["reset", "HEAD", "--", "test.txt"], "");
        let tree = WorkingTree::new("/path/to/worktree", &runner);

        tree.unstage_file(&["test.txt"], true).unwrap();
        runner.assert_no_pending();
    }

    #[test]
    fn checkout_file_at_revision() {
        let runner =
            FakeDispatcher::new().expect(&["checkout", "11af912", "--", "test999.txt"], "");
        let tree = WorkingTree::new("/path/to/worktree", &runner);

        tree.checkout_file("11af912", "test999.txt").unwrap();
        runner.assert_no_pending();
    }

    #[test]
    fn checkout_file_surfaces_the_error() {
        let runner = FakeDispatcher::new()
            .expect_err(&["checkout", "11af912", "--", "test999.txt"], "error");
        let tree = WorkingTree::new("/path/to/worktree", &runner);

        let err = tree.checkout_file("11af912", "test999.txt").unwrap_err();
        assert_eq!(err.to_string(), "error");
        runner.assert_no_pending();
    }

    #[test]
    fn stage_file_surfaces_the_error() {
        let runner = FakeDispatcher::new().expect_err(
            &["add", "--", "test.txt"],
            "fatal: pathspec 'test.txt' did not match any files",
        );
        let tree = WorkingTree::new("/path/to/worktree", &runner);

        let err = tree.stage_file("test.txt").unwrap_err();
        assert_eq!(
            err.to_string(),
            "fatal: pathspec 'test.txt' did not match any files"
        );
        runner.assert_no_pending();
    }
}
