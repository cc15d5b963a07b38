//! The closed set of supported git actions.
//!
//! Each action is one variant carrying its typed parameters. Parsing a
//! request validates the action name, required positional arguments, and
//! option kinds in one pass; everything downstream works with the typed
//! variant and never touches the raw option map again.

use gitbridge_models::{ActionRequest, OptionValue};

use crate::error::{GrammarError, Result};

/// One supported git action with its typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitAction {
    /// `git init`
    Init,
    /// `git clone [--depth N] [--branch B] <url> <path>`
    Clone {
        url: String,
        path: String,
        depth: Option<u64>,
        branch: Option<String>,
    },
    /// `git add <file>...`
    Add { files: Vec<String> },
    /// `git commit -m <msg> [--all]`
    Commit { message: String, all: bool },
    /// `git push <remote> <branch> [--force] [--set-upstream]`
    Push {
        remote: String,
        branch: String,
        force: bool,
        set_upstream: bool,
    },
    /// `git pull <remote> <branch> [--rebase]`
    Pull {
        remote: String,
        branch: String,
        rebase: bool,
    },
    /// `git fetch <remote> [--all] [--prune]`
    Fetch {
        remote: String,
        all: bool,
        prune: bool,
    },
    /// `git branch <name>`
    CreateBranch { name: String },
    /// `git switch <name>`
    SwitchBranch { name: String },
    /// `git merge <branch> [--no-ff] [--squash]`
    Merge {
        branch: String,
        no_fast_forward: bool,
        squash: bool,
    },
    /// `git status --porcelain`
    Status,
    /// `git log --oneline [-n N] [--since=S] [--until=U] [--author=A]`
    Log {
        max_count: Option<u64>,
        since: Option<String>,
        until: Option<String>,
        author: Option<String>,
    },
    /// `git rev-parse --abbrev-ref HEAD`
    GetCurrentBranch,
    /// `git branch`
    GetBranches,
    /// `git remote -v`
    GetRemotes,
    /// `git remote add <name> <url>`
    AddRemote { name: String, url: String },
    /// `git remote remove <name>`
    RemoveRemote { name: String },
    /// `git diff [--cached] [--staged]`
    Diff { cached: bool, staged: bool },
    /// `git reset [--<mode>] [<ref>]`
    Reset { mode: String, reference: String },
    /// `git revert [--no-commit] <commit>...`
    Revert {
        commits: Vec<String>,
        no_commit: bool,
    },
    /// `git stash [--include-untracked] [--all] [save <msg>]`
    Stash {
        include_untracked: bool,
        all: bool,
        message: Option<String>,
    },
    /// `git stash apply [--index] [<ref>]`
    StashApply { reference: String, index: bool },
    /// `git stash list`
    StashList,
    /// `git rm [--cached] [--force] <file>...`
    Remove {
        files: Vec<String>,
        cached: bool,
        force: bool,
    },
    /// `git tag [-m <msg>] [-a] <name>`
    Tag {
        name: String,
        message: String,
        annotate: bool,
    },
    /// `git tag`
    GetTags,
    /// `git rev-parse --git-dir`
    IsRepository,
}

/// All action names the grammar table recognizes, in wire spelling.
pub const ACTION_NAMES: [&str; 27] = [
    "init",
    "clone",
    "add",
    "commit",
    "push",
    "pull",
    "fetch",
    "createBranch",
    "switchBranch",
    "merge",
    "status",
    "log",
    "getCurrentBranch",
    "getBranches",
    "getRemotes",
    "addRemote",
    "removeRemote",
    "diff",
    "reset",
    "revert",
    "stash",
    "stashApply",
    "stashList",
    "remove",
    "tag",
    "getTags",
    "isRepository",
];

impl GitAction {
    /// Parses and validates a request against the grammar table.
    ///
    /// # Errors
    ///
    /// Returns [`GrammarError::InvalidAction`] for an unrecognized name and
    /// an argument error if a required positional argument is missing or an
    /// option carries the wrong kind of value.
    pub fn from_request(request: &ActionRequest) -> Result<Self> {
        match request.name.as_str() {
            "init" => Ok(GitAction::Init),
            "clone" => Ok(GitAction::Clone {
                url: positional(request, "clone", 0, "url")?,
                path: positional(request, "clone", 1, "path")?,
                depth: count_option(request, "clone", "depth")?,
                branch: text_option(request, "clone", "branch")?,
            }),
            "add" => Ok(GitAction::Add {
                files: file_list(request, "add", "files")?,
            }),
            "commit" => Ok(GitAction::Commit {
                message: positional(request, "commit", 0, "message")?,
                all: flag_option(request, "commit", "all")?,
            }),
            "push" => Ok(GitAction::Push {
                remote: positional(request, "push", 0, "remote")?,
                branch: positional(request, "push", 1, "branch")?,
                force: flag_option(request, "push", "force")?,
                set_upstream: flag_option(request, "push", "setUpstream")?,
            }),
            "pull" => Ok(GitAction::Pull {
                remote: positional(request, "pull", 0, "remote")?,
                branch: positional(request, "pull", 1, "branch")?,
                rebase: flag_option(request, "pull", "rebase")?,
            }),
            "fetch" => Ok(GitAction::Fetch {
                remote: positional(request, "fetch", 0, "remote")?,
                all: flag_option(request, "fetch", "all")?,
                prune: flag_option(request, "fetch", "prune")?,
            }),
            "createBranch" => Ok(GitAction::CreateBranch {
                name: positional(request, "createBranch", 0, "name")?,
            }),
            "switchBranch" => Ok(GitAction::SwitchBranch {
                name: positional(request, "switchBranch", 0, "name")?,
            }),
            "merge" => Ok(GitAction::Merge {
                branch: positional(request, "merge", 0, "branch")?,
                no_fast_forward: flag_option(request, "merge", "noFastForward")?,
                squash: flag_option(request, "merge", "squash")?,
            }),
            "status" => Ok(GitAction::Status),
            "log" => Ok(GitAction::Log {
                max_count: count_option(request, "log", "maxCount")?,
                since: text_option(request, "log", "since")?,
                until: text_option(request, "log", "until")?,
                author: text_option(request, "log", "author")?,
            }),
            "getCurrentBranch" => Ok(GitAction::GetCurrentBranch),
            "getBranches" => Ok(GitAction::GetBranches),
            "getRemotes" => Ok(GitAction::GetRemotes),
            "addRemote" => Ok(GitAction::AddRemote {
                name: positional(request, "addRemote", 0, "name")?,
                url: positional(request, "addRemote", 1, "url")?,
            }),
            "removeRemote" => Ok(GitAction::RemoveRemote {
                name: positional(request, "removeRemote", 0, "name")?,
            }),
            "diff" => Ok(GitAction::Diff {
                cached: flag_option(request, "diff", "cached")?,
                staged: flag_option(request, "diff", "staged")?,
            }),
            "reset" => Ok(GitAction::Reset {
                mode: positional(request, "reset", 0, "mode")?,
                reference: positional(request, "reset", 1, "ref")?,
            }),
            "revert" => Ok(GitAction::Revert {
                commits: file_list(request, "revert", "commits")?,
                no_commit: flag_option(request, "revert", "noCommit")?,
            }),
            "stash" => Ok(GitAction::Stash {
                include_untracked: flag_option(request, "stash", "includeUntracked")?,
                all: flag_option(request, "stash", "all")?,
                message: text_option(request, "stash", "message")?,
            }),
            "stashApply" => Ok(GitAction::StashApply {
                reference: positional(request, "stashApply", 0, "ref")?,
                index: flag_option(request, "stashApply", "index")?,
            }),
            "stashList" => Ok(GitAction::StashList),
            "remove" => Ok(GitAction::Remove {
                files: file_list(request, "remove", "files")?,
                cached: flag_option(request, "remove", "cached")?,
                force: flag_option(request, "remove", "force")?,
            }),
            "tag" => Ok(GitAction::Tag {
                name: positional(request, "tag", 0, "name")?,
                message: positional(request, "tag", 1, "message")?,
                annotate: flag_option(request, "tag", "annotate")?,
            }),
            "getTags" => Ok(GitAction::GetTags),
            "isRepository" => Ok(GitAction::IsRepository),
            other => Err(GrammarError::InvalidAction(other.to_string())),
        }
    }

    /// Returns the action's wire name.
    pub fn name(&self) -> &'static str {
        match self {
            GitAction::Init => "init",
            GitAction::Clone { .. } => "clone",
            GitAction::Add { .. } => "add",
            GitAction::Commit { .. } => "commit",
            GitAction::Push { .. } => "push",
            GitAction::Pull { .. } => "pull",
            GitAction::Fetch { .. } => "fetch",
            GitAction::CreateBranch { .. } => "createBranch",
            GitAction::SwitchBranch { .. } => "switchBranch",
            GitAction::Merge { .. } => "merge",
            GitAction::Status => "status",
            GitAction::Log { .. } => "log",
            GitAction::GetCurrentBranch => "getCurrentBranch",
            GitAction::GetBranches => "getBranches",
            GitAction::GetRemotes => "getRemotes",
            GitAction::AddRemote { .. } => "addRemote",
            GitAction::RemoveRemote { .. } => "removeRemote",
            GitAction::Diff { .. } => "diff",
            GitAction::Reset { .. } => "reset",
            GitAction::Revert { .. } => "revert",
            GitAction::Stash { .. } => "stash",
            GitAction::StashApply { .. } => "stashApply",
            GitAction::StashList => "stashList",
            GitAction::Remove { .. } => "remove",
            GitAction::Tag { .. } => "tag",
            GitAction::GetTags => "getTags",
            GitAction::IsRepository => "isRepository",
        }
    }

    /// Returns true for the repository probe, which downgrades execution
    /// failures to a negative result instead of an error.
    pub fn is_probe(&self) -> bool {
        matches!(self, GitAction::IsRepository)
    }
}

fn positional(
    request: &ActionRequest,
    action: &'static str,
    index: usize,
    name: &'static str,
) -> Result<String> {
    request
        .positional_args
        .get(index)
        .cloned()
        .ok_or(GrammarError::MissingArgument { action, name })
}

/// All positional arguments, required to be non-empty.
fn file_list(
    request: &ActionRequest,
    action: &'static str,
    name: &'static str,
) -> Result<Vec<String>> {
    if request.positional_args.is_empty() {
        return Err(GrammarError::MissingArgument { action, name });
    }
    Ok(request.positional_args.clone())
}

/// A boolean option; absent means false.
fn flag_option(request: &ActionRequest, action: &'static str, key: &'static str) -> Result<bool> {
    match request.option(key) {
        None => Ok(false),
        Some(value) => value.as_bool().ok_or(GrammarError::WrongOptionKind {
            action,
            key,
            expected: "a boolean",
        }),
    }
}

/// A string option; absent means None.
fn text_option(
    request: &ActionRequest,
    action: &'static str,
    key: &'static str,
) -> Result<Option<String>> {
    match request.option(key) {
        None => Ok(None),
        Some(value) => value
            .as_text()
            .map(|s| Some(s.to_string()))
            .ok_or(GrammarError::WrongOptionKind {
                action,
                key,
                expected: "a string",
            }),
    }
}

/// A non-negative integer option; absent means None.
fn count_option(
    request: &ActionRequest,
    action: &'static str,
    key: &'static str,
) -> Result<Option<u64>> {
    match request.option(key) {
        None => Ok(None),
        Some(value) => {
            let n = value.as_int().ok_or(GrammarError::WrongOptionKind {
                action,
                key,
                expected: "an integer",
            })?;
            u64::try_from(n).map(Some).map_err(|_| GrammarError::OptionOutOfRange { action, key })
        }
    }
}
