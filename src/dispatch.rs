//! Capability boundaries for process execution and file removal.
//!
//! The rest of the crate only ever hands an ordered token list to a
//! [`CommandDispatcher`] or a path to a [`FileRemover`]. Implementations may
//! shell out, use a library, or be test fakes that record and assert calls.

use std::path::PathBuf;
use std::process::Command;

use crate::GitCommandError;

/// Executes one git invocation from a discrete, ordered argument list.
///
/// Arguments are never shell-interpreted: each element is passed as its own
/// token, preserving embedded spaces and special characters in paths.
pub trait CommandDispatcher {
    /// Run `git <args...>` and return its captured stdout.
    fn run(&self, args: &[String]) -> Result<String, GitCommandError>;
}

impl<D: CommandDispatcher + ?Sized> CommandDispatcher for &D {
    fn run(&self, args: &[String]) -> Result<String, GitCommandError> {
        (**self).run(args)
    }
}

/// Dispatcher that runs the real `git` binary, blocking until it exits.
#[derive(Default)]
pub struct GitRunner {
    cwd: Option<PathBuf>,
}

impl GitRunner {
    /// Runner executing git in the process working directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner executing git with `path` as its working directory.
    ///
    /// The staging and discard sequences name paths relative to the
    /// repository root without a `-C` selector, so callers operating on a
    /// repository other than the current directory use this constructor.
    pub fn in_dir(path: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(path.into()),
        }
    }
}

impl CommandDispatcher for GitRunner {
    fn run(&self, args: &[String]) -> Result<String, GitCommandError> {
        let mut cmd = Command::new("git");
        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }
        let output = cmd
            .args(args)
            .output()
            .map_err(|e| GitCommandError::SpawnFailed {
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitCommandError::ExitError {
                stderr: stderr.into_owned(),
            });
        }

        String::from_utf8(output.stdout).map_err(|e| GitCommandError::InvalidUtf8 {
            message: e.to_string(),
        })
    }
}

/// Deletes a single file from disk.
///
/// Injected into the discard planner so that removal calls can be recorded
/// and their arguments asserted in tests.
pub trait FileRemover {
    fn remove_file(&self, path: &str) -> std::io::Result<()>;
}

impl<R: FileRemover + ?Sized> FileRemover for &R {
    fn remove_file(&self, path: &str) -> std::io::Result<()> {
        (**self).remove_file(path)
    }
}

/// Remover backed by `std::fs::remove_file`.
pub struct DiskRemover;

impl FileRemover for DiskRemover {
    fn remove_file(&self, path: &str) -> std::io::Result<()> {
        std::fs::remove_file(path)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
pub(crate) mod doubles {
    //! Test doubles shared by the unit tests: a dispatcher that holds a
    //! queue of expected argument lists with canned responses, and a remover
    //! that records its calls.

    use std::cell::RefCell;
    use std::collections::VecDeque;

    use crate::GitCommandError;

    use super::{CommandDispatcher, FileRemover};

    type Expectation = (Vec<String>, Result<String, GitCommandError>);

    /// Dispatcher fake: each `run` pops the next expectation, asserts the
    /// argument list matches it exactly, and returns the canned response.
    #[derive(Default)]
    pub struct FakeDispatcher {
        expected: RefCell<VecDeque<Expectation>>,
    }

    impl FakeDispatcher {
        pub fn new() -> Self {
            Self::default()
        }

        /// Expect the given invocation and respond with `stdout`
        pub fn expect(self, args: &[&str], stdout: &str) -> Self {
            self.expected.borrow_mut().push_back((
                args.iter().map(|a| a.to_string()).collect(),
                Ok(stdout.to_string()),
            ));
            self
        }

        /// Expect the given invocation and fail with `stderr`
        pub fn expect_err(self, args: &[&str], stderr: &str) -> Self {
            self.expected.borrow_mut().push_back((
                args.iter().map(|a| a.to_string()).collect(),
                Err(GitCommandError::ExitError {
                    stderr: stderr.to_string(),
                }),
            ));
            self
        }

        /// Fails the test if any expected invocation was never made
        pub fn assert_no_pending(&self) {
            let pending = self.expected.borrow();
            assert!(
                pending.is_empty(),
                "expected git invocations never made: {:?}",
                pending.iter().map(|(args, _)| args).collect::<Vec<_>>()
            );
        }
    }

    impl CommandDispatcher for FakeDispatcher {
        fn run(&self, args: &[String]) -> Result<String, GitCommandError> {
            let Some((expected, response)) = self.expected.borrow_mut().pop_front() else {
                panic!("unexpected git invocation: {args:?}");
            };
            similar_asserts::assert_eq!(expected.as_slice(), args);
            response
        }
    }

    /// Remover fake: records every path it is asked to remove, optionally
    /// failing with a fixed message.
    #[derive(Default)]
    pub struct RecordingRemover {
        calls: RefCell<Vec<String>>,
        fail_with: Option<String>,
    }

    impl RecordingRemover {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing(message: &str) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_with: Some(message.to_string()),
            }
        }

        pub fn removed(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl FileRemover for RecordingRemover {
        fn remove_file(&self, path: &str) -> std::io::Result<()> {
            self.calls.borrow_mut().push(path.to_string());
            match &self.fail_with {
                Some(message) => Err(std::io::Error::other(message.clone())),
                None => Ok(()),
            }
        }
    }
}
