//! Per-action result shaping.
//!
//! Success payload shapes are part of each action's grammar: lifecycle
//! actions answer with a fixed confirmation string, listing actions with the
//! raw captured output, `status`/`log`/`diff` with a structured record, and
//! `isRepository` with a boolean. Failure messages mirror the host
//! application's historical wording.

use gitbridge_models::{ExecutionOutcome, Payload};

use crate::action::GitAction;

/// Shapes the success payload for an action that exited with code zero.
pub fn success_payload(action: &GitAction, outcome: &ExecutionOutcome) -> Payload {
    match action {
        GitAction::Init => Payload::Message("Repository initialized successfully".into()),
        GitAction::Clone { .. } => Payload::Message("Repository cloned successfully".into()),
        GitAction::Add { .. } => Payload::Message("Files added to staging area".into()),
        GitAction::Commit { .. } => Payload::Message("Changes committed successfully".into()),
        GitAction::Push { .. } => Payload::Message("Changes pushed successfully".into()),
        GitAction::Pull { .. } => Payload::Message("Changes pulled successfully".into()),
        GitAction::Fetch { .. } => Payload::Message("Fetch completed successfully".into()),
        GitAction::CreateBranch { .. } => Payload::Message("Branch created successfully".into()),
        GitAction::SwitchBranch { name } => {
            Payload::Message(format!("Switched to branch {}", name))
        }
        GitAction::Merge { .. } => Payload::Message("Merge completed successfully".into()),
        GitAction::Status | GitAction::Log { .. } | GitAction::Diff { .. } => Payload::Report {
            output: outcome.stdout.clone(),
            exit_code: outcome.exit_code,
        },
        GitAction::GetCurrentBranch => Payload::Message(outcome.stdout.trim().to_string()),
        GitAction::GetBranches
        | GitAction::GetRemotes
        | GitAction::GetTags
        | GitAction::StashList => Payload::Message(outcome.stdout.clone()),
        GitAction::AddRemote { .. } => Payload::Message("Remote added successfully".into()),
        GitAction::RemoveRemote { .. } => Payload::Message("Remote removed successfully".into()),
        GitAction::Reset { .. } => Payload::Message("Reset completed successfully".into()),
        GitAction::Revert { .. } => Payload::Message("Revert completed successfully".into()),
        GitAction::Stash { .. } => Payload::Message("Stash completed successfully".into()),
        GitAction::StashApply { .. } => Payload::Message("Stash applied successfully".into()),
        GitAction::Remove { .. } => Payload::Message("Files removed successfully".into()),
        GitAction::Tag { .. } => Payload::Message("Tag created successfully".into()),
        GitAction::IsRepository => Payload::Flag(true),
    }
}

/// The generic failure message for an action that exited non-zero.
pub fn failure_message(action: &GitAction) -> &'static str {
    match action {
        GitAction::Init => "Failed to initialize repository",
        GitAction::Clone { .. } => "Failed to clone repository",
        GitAction::Add { .. } => "Failed to add files",
        GitAction::Commit { .. } => "Failed to commit changes",
        GitAction::Push { .. } => "Failed to push changes",
        GitAction::Pull { .. } => "Failed to pull changes",
        GitAction::Fetch { .. } => "Failed to fetch",
        GitAction::CreateBranch { .. } => "Failed to create branch",
        GitAction::SwitchBranch { .. } => "Failed to switch branch",
        GitAction::Merge { .. } => "Failed to merge",
        GitAction::Status => "Failed to get status",
        GitAction::Log { .. } => "Failed to get log",
        GitAction::GetCurrentBranch => "Failed to get current branch",
        GitAction::GetBranches => "Failed to get branches",
        GitAction::GetRemotes => "Failed to get remotes",
        GitAction::AddRemote { .. } => "Failed to add remote",
        GitAction::RemoveRemote { .. } => "Failed to remove remote",
        GitAction::Diff { .. } => "Failed to get diff",
        GitAction::Reset { .. } => "Failed to reset",
        GitAction::Revert { .. } => "Failed to revert",
        GitAction::Stash { .. } => "Failed to stash",
        GitAction::StashApply { .. } => "Failed to apply stash",
        GitAction::StashList => "Failed to list stashes",
        GitAction::Remove { .. } => "Failed to remove files",
        GitAction::Tag { .. } => "Failed to create tag",
        GitAction::GetTags => "Failed to get tags",
        // The probe never reports an error; the bridge downgrades failures
        // to a negative result before this message could be used.
        GitAction::IsRepository => "Failed to check repository",
    }
}
