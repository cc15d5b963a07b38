//! Pure construction of command specs from parsed actions.

use std::path::Path;

use tracing::trace;

use gitbridge_models::CommandSpec;

use crate::action::GitAction;

/// Builds the command for one action.
///
/// Pure function of its inputs: identical `(action, program, directory)`
/// always yields an identical argument vector, in the fixed order the
/// grammar table defines. Every caller-supplied value lands in its own
/// vector element; nothing is ever joined into a shell string.
pub fn build(action: &GitAction, program: &str, working_directory: &Path) -> CommandSpec {
    let mut args: Vec<String> = Vec::new();

    match action {
        GitAction::Init => {
            args.push("init".into());
        }
        GitAction::Clone {
            url,
            path,
            depth,
            branch,
        } => {
            args.push("clone".into());
            if let Some(depth) = depth {
                args.push("--depth".into());
                args.push(depth.to_string());
            }
            if let Some(branch) = branch {
                args.push("--branch".into());
                args.push(branch.clone());
            }
            args.push(url.clone());
            args.push(path.clone());
        }
        GitAction::Add { files } => {
            args.push("add".into());
            args.extend(files.iter().cloned());
        }
        GitAction::Commit { message, all } => {
            args.push("commit".into());
            args.push("-m".into());
            args.push(message.clone());
            if *all {
                args.push("--all".into());
            }
        }
        GitAction::Push {
            remote,
            branch,
            force,
            set_upstream,
        } => {
            args.push("push".into());
            args.push(remote.clone());
            args.push(branch.clone());
            if *force {
                args.push("--force".into());
            }
            if *set_upstream {
                args.push("--set-upstream".into());
            }
        }
        GitAction::Pull {
            remote,
            branch,
            rebase,
        } => {
            args.push("pull".into());
            args.push(remote.clone());
            args.push(branch.clone());
            if *rebase {
                args.push("--rebase".into());
            }
        }
        GitAction::Fetch { remote, all, prune } => {
            args.push("fetch".into());
            args.push(remote.clone());
            if *all {
                args.push("--all".into());
            }
            if *prune {
                args.push("--prune".into());
            }
        }
        GitAction::CreateBranch { name } => {
            args.push("branch".into());
            args.push(name.clone());
        }
        GitAction::SwitchBranch { name } => {
            args.push("switch".into());
            args.push(name.clone());
        }
        GitAction::Merge {
            branch,
            no_fast_forward,
            squash,
        } => {
            args.push("merge".into());
            args.push(branch.clone());
            if *no_fast_forward {
                args.push("--no-ff".into());
            }
            if *squash {
                args.push("--squash".into());
            }
        }
        GitAction::Status => {
            args.push("status".into());
            args.push("--porcelain".into());
        }
        GitAction::Log {
            max_count,
            since,
            until,
            author,
        } => {
            args.push("log".into());
            args.push("--oneline".into());
            if let Some(n) = max_count {
                args.push("-n".into());
                args.push(n.to_string());
            }
            if let Some(since) = since {
                args.push(format!("--since={}", since));
            }
            if let Some(until) = until {
                args.push(format!("--until={}", until));
            }
            if let Some(author) = author {
                args.push(format!("--author={}", author));
            }
        }
        GitAction::GetCurrentBranch => {
            args.push("rev-parse".into());
            args.push("--abbrev-ref".into());
            args.push("HEAD".into());
        }
        GitAction::GetBranches => {
            args.push("branch".into());
        }
        GitAction::GetRemotes => {
            args.push("remote".into());
            args.push("-v".into());
        }
        GitAction::AddRemote { name, url } => {
            args.push("remote".into());
            args.push("add".into());
            args.push(name.clone());
            args.push(url.clone());
        }
        GitAction::RemoveRemote { name } => {
            args.push("remote".into());
            args.push("remove".into());
            args.push(name.clone());
        }
        GitAction::Diff { cached, staged } => {
            args.push("diff".into());
            if *cached {
                args.push("--cached".into());
            }
            if *staged {
                args.push("--staged".into());
            }
        }
        GitAction::Reset { mode, reference } => {
            args.push("reset".into());
            if !mode.is_empty() {
                args.push(format!("--{}", mode));
            }
            if !reference.is_empty() {
                args.push(reference.clone());
            }
        }
        GitAction::Revert { commits, no_commit } => {
            args.push("revert".into());
            if *no_commit {
                args.push("--no-commit".into());
            }
            args.extend(commits.iter().cloned());
        }
        GitAction::Stash {
            include_untracked,
            all,
            message,
        } => {
            args.push("stash".into());
            if *include_untracked {
                args.push("--include-untracked".into());
            }
            if *all {
                args.push("--all".into());
            }
            if let Some(message) = message {
                args.push("save".into());
                args.push(message.clone());
            }
        }
        GitAction::StashApply { reference, index } => {
            args.push("stash".into());
            args.push("apply".into());
            if *index {
                args.push("--index".into());
            }
            if !reference.is_empty() {
                args.push(reference.clone());
            }
        }
        GitAction::StashList => {
            args.push("stash".into());
            args.push("list".into());
        }
        GitAction::Remove {
            files,
            cached,
            force,
        } => {
            args.push("rm".into());
            if *cached {
                args.push("--cached".into());
            }
            if *force {
                args.push("--force".into());
            }
            args.extend(files.iter().cloned());
        }
        GitAction::Tag {
            name,
            message,
            annotate,
        } => {
            args.push("tag".into());
            if !message.is_empty() {
                args.push("-m".into());
                args.push(message.clone());
            }
            if *annotate {
                args.push("-a".into());
            }
            args.push(name.clone());
        }
        GitAction::GetTags => {
            args.push("tag".into());
        }
        GitAction::IsRepository => {
            args.push("rev-parse".into());
            args.push("--git-dir".into());
        }
    }

    let spec = CommandSpec::new(program, args, working_directory);
    trace!(action = action.name(), command = %spec, "built command");
    spec
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn argv(action: &GitAction) -> Vec<String> {
        build(action, "git", Path::new("/repo")).args
    }

    #[test]
    fn test_clone_argument_order() {
        let action = GitAction::Clone {
            url: "https://example.com/repo.git".into(),
            path: "repo".into(),
            depth: Some(1),
            branch: Some("main".into()),
        };
        assert_eq!(
            argv(&action),
            vec![
                "clone",
                "--depth",
                "1",
                "--branch",
                "main",
                "https://example.com/repo.git",
                "repo",
            ]
        );
    }

    #[test]
    fn test_commit_with_all() {
        let action = GitAction::Commit {
            message: "fix bug".into(),
            all: true,
        };
        assert_eq!(argv(&action), vec!["commit", "-m", "fix bug", "--all"]);
    }

    #[test]
    fn test_message_stays_one_element() {
        // A message with spaces and quotes must remain a single argument.
        let action = GitAction::Commit {
            message: r#"say "hello"; rm -rf /"#.into(),
            all: false,
        };
        let args = argv(&action);
        assert_eq!(args.len(), 3);
        assert_eq!(args[2], r#"say "hello"; rm -rf /"#);
    }

    #[test]
    fn test_build_is_deterministic() {
        let action = GitAction::Push {
            remote: "origin".into(),
            branch: "main".into(),
            force: true,
            set_upstream: true,
        };
        let first = build(&action, "git", Path::new("/repo"));
        let second = build(&action, "git", Path::new("/repo"));
        assert_eq!(first, second);
        assert_eq!(
            first.args,
            vec!["push", "origin", "main", "--force", "--set-upstream"]
        );
    }

    #[test]
    fn test_status_always_porcelain() {
        assert_eq!(argv(&GitAction::Status), vec!["status", "--porcelain"]);
    }

    #[test]
    fn test_log_flags() {
        let action = GitAction::Log {
            max_count: Some(10),
            since: Some("2 weeks ago".into()),
            until: None,
            author: Some("ada".into()),
        };
        assert_eq!(
            argv(&action),
            vec![
                "log",
                "--oneline",
                "-n",
                "10",
                "--since=2 weeks ago",
                "--author=ada",
            ]
        );
    }

    #[test]
    fn test_reset_skips_empty_parts() {
        let action = GitAction::Reset {
            mode: String::new(),
            reference: String::new(),
        };
        assert_eq!(argv(&action), vec!["reset"]);

        let action = GitAction::Reset {
            mode: "hard".into(),
            reference: "HEAD~1".into(),
        };
        assert_eq!(argv(&action), vec!["reset", "--hard", "HEAD~1"]);
    }

    #[test]
    fn test_revert_flag_precedes_commits() {
        let action = GitAction::Revert {
            commits: vec!["abc123".into(), "def456".into()],
            no_commit: true,
        };
        assert_eq!(
            argv(&action),
            vec!["revert", "--no-commit", "abc123", "def456"]
        );
    }

    #[test]
    fn test_stash_save_message() {
        let action = GitAction::Stash {
            include_untracked: true,
            all: false,
            message: Some("wip: half done".into()),
        };
        assert_eq!(
            argv(&action),
            vec!["stash", "--include-untracked", "save", "wip: half done"]
        );
    }

    #[test]
    fn test_stash_apply_with_ref() {
        let action = GitAction::StashApply {
            reference: "stash@{1}".into(),
            index: true,
        };
        assert_eq!(
            argv(&action),
            vec!["stash", "apply", "--index", "stash@{1}"]
        );
    }

    #[test]
    fn test_remove_flags_before_files() {
        let action = GitAction::Remove {
            files: vec!["old.txt".into()],
            cached: true,
            force: true,
        };
        assert_eq!(argv(&action), vec!["rm", "--cached", "--force", "old.txt"]);
    }

    #[test]
    fn test_tag_with_message_and_annotate() {
        let action = GitAction::Tag {
            name: "v1.0.0".into(),
            message: "first release".into(),
            annotate: true,
        };
        assert_eq!(
            argv(&action),
            vec!["tag", "-m", "first release", "-a", "v1.0.0"]
        );
    }

    #[test]
    fn test_tag_without_message() {
        let action = GitAction::Tag {
            name: "v1.0.0".into(),
            message: String::new(),
            annotate: false,
        };
        assert_eq!(argv(&action), vec!["tag", "v1.0.0"]);
    }

    #[test]
    fn test_add_each_file_is_one_element() {
        let action = GitAction::Add {
            files: vec!["a file.txt".into(), "b.txt".into()],
        };
        assert_eq!(argv(&action), vec!["add", "a file.txt", "b.txt"]);
    }

    #[test]
    fn test_working_directory_and_program_pass_through() {
        let spec = build(&GitAction::Init, "/usr/bin/git", Path::new("/work/new"));
        assert_eq!(spec.program, "/usr/bin/git");
        assert_eq!(spec.working_directory, PathBuf::from("/work/new"));
        assert_eq!(spec.args, vec!["init"]);
    }
}
