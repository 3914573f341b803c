use clap::{Parser, Subcommand};
use git_fileops::{DiffOptions, DiskRemover, FileStatus, GitRunner, WorkingTree};

#[derive(Parser)]
#[command(name = "git-fileops")]
#[command(about = "Working-tree staging, discard, and diff operations")]
struct Cli {
    /// Worktree to operate on
    #[arg(short = 'C', long, default_value = ".")]
    worktree: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stage files (git add)
    Stage { paths: Vec<String> },
    /// Take files out of the index; --reset restores tracked files to HEAD,
    /// otherwise the entry is dropped and the file kept on disk
    Unstage {
        #[arg(long)]
        reset: bool,
        paths: Vec<String>,
    },
    /// Discard all changes to one file, choosing the operation sequence from
    /// its status flags
    Discard {
        path: String,
        #[arg(long)]
        tracked: bool,
        #[arg(long)]
        added: bool,
        #[arg(long)]
        staged: bool,
        #[arg(long)]
        conflicted: bool,
    },
    /// Diff one file's working tree content against the index
    Diff {
        path: String,
        /// The file is untracked (diff it as a full-file addition)
        #[arg(long)]
        untracked: bool,
        #[arg(long)]
        plain: bool,
        #[arg(long)]
        cached: bool,
        #[arg(long)]
        ignore_whitespace: bool,
        #[arg(long, default_value_t = 3)]
        context: u32,
        #[arg(long, default_value_t = 50)]
        find_renames: u8,
    },
    /// Diff one path between two revisions
    Show {
        from: String,
        to: String,
        path: String,
        #[arg(long)]
        reverse: bool,
        #[arg(long)]
        plain: bool,
        #[arg(long)]
        ignore_whitespace: bool,
        #[arg(long, default_value_t = 3)]
        context: u32,
    },
    /// Overwrite a file with its content at a revision
    CheckoutFile { revision: String, path: String },
    /// Delete all untracked files and directories (git clean -fd)
    Clean,
    /// Hard-reset the worktree and index to a reference
    ResetHard {
        #[arg(default_value = "HEAD")]
        reference: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let tree = WorkingTree::new(&cli.worktree, GitRunner::in_dir(&cli.worktree));

    match cli.command {
        Commands::Stage { paths } => {
            let paths: Vec<&str> = paths.iter().map(String::as_str).collect();
            tree.stage_files(&paths)?;
        }
        Commands::Unstage { reset, paths } => {
            let paths: Vec<&str> = paths.iter().map(String::as_str).collect();
            tree.unstage_file(&paths, reset)?;
        }
        Commands::Discard {
            path,
            tracked,
            added,
            staged,
            conflicted,
        } => {
            let status = FileStatus {
                path,
                tracked,
                added,
                has_staged_changes: staged,
                has_merge_conflicts: conflicted,
            };
            tree.discard_all_file_changes(&status, &DiskRemover)?;
        }
        Commands::Diff {
            path,
            untracked,
            plain,
            cached,
            ignore_whitespace,
            context,
            find_renames,
        } => {
            let status = FileStatus {
                path,
                tracked: !untracked,
                ..FileStatus::default()
            };
            let options = DiffOptions {
                plain,
                cached,
                ignore_whitespace,
                context_size: context,
                similarity_threshold: find_renames,
                ..DiffOptions::default()
            };
            print!("{}", tree.worktree_file_diff(&status, &options)?);
        }
        Commands::Show {
            from,
            to,
            path,
            reverse,
            plain,
            ignore_whitespace,
            context,
        } => {
            let options = DiffOptions {
                plain,
                ignore_whitespace,
                context_size: context,
                reverse,
                ..DiffOptions::default()
            };
            print!("{}", tree.show_file_diff(&from, &to, &path, &options)?);
        }
        Commands::CheckoutFile { revision, path } => {
            tree.checkout_file(&revision, &path)?;
        }
        Commands::Clean => {
            tree.remove_untracked_files()?;
        }
        Commands::ResetHard { reference } => {
            tree.reset_hard(&reference)?;
        }
    }

    Ok(())
}
