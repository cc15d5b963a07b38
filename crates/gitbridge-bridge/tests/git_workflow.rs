//! End-to-end workflow against a real git binary.
//!
//! These tests drive the bridge through a full repository lifecycle in a
//! scratch directory. They are skipped when git is not installed.

use std::path::Path;
use std::process::Command;

use gitbridge_bridge::{BridgeConfig, GitBridge};
use gitbridge_exec::ProcessExecutor;
use gitbridge_models::{ActionRequest, Payload};

fn git_available() -> bool {
    ProcessExecutor::is_available("git")
}

/// Identity config so commits work in a bare environment.
fn configure_identity(repo: &Path) {
    for (key, value) in [("user.email", "test@example.com"), ("user.name", "Test")] {
        let status = Command::new("git")
            .args(["config", key, value])
            .current_dir(repo)
            .status()
            .unwrap();
        assert!(status.success());
    }
}

#[tokio::test]
async fn test_full_repository_workflow() {
    if !git_available() {
        return;
    }

    let scratch = tempfile::tempdir().unwrap();
    let repo = scratch.path();
    let bridge = GitBridge::new(BridgeConfig::default());

    // init
    let payload = bridge
        .dispatch(ActionRequest::new("init", repo))
        .await
        .wait()
        .await
        .unwrap();
    assert_eq!(payload.as_message(), Some("Repository initialized successfully"));

    // the directory is now a repository
    let payload = bridge
        .dispatch(ActionRequest::new("isRepository", repo))
        .await
        .wait()
        .await
        .unwrap();
    assert_eq!(payload.as_flag(), Some(true));

    configure_identity(repo);

    // stage a file
    std::fs::write(repo.join("a.txt"), "hello\n").unwrap();
    let payload = bridge
        .dispatch(ActionRequest::new("add", repo).with_arg("a.txt"))
        .await
        .wait()
        .await
        .unwrap();
    assert_eq!(payload.as_message(), Some("Files added to staging area"));

    // staged file shows up in porcelain status
    match bridge
        .dispatch(ActionRequest::new("status", repo))
        .await
        .wait()
        .await
        .unwrap()
    {
        Payload::Report { output, exit_code } => {
            assert_eq!(exit_code, 0);
            assert!(output.contains("a.txt"));
        }
        other => panic!("unexpected payload: {:?}", other),
    }

    // commit
    let payload = bridge
        .dispatch(ActionRequest::new("commit", repo).with_arg("initial commit"))
        .await
        .wait()
        .await
        .unwrap();
    assert_eq!(payload.as_message(), Some("Changes committed successfully"));

    // clean tree after the commit
    match bridge
        .dispatch(ActionRequest::new("status", repo))
        .await
        .wait()
        .await
        .unwrap()
    {
        Payload::Report { output, exit_code } => {
            assert_eq!(exit_code, 0);
            assert!(output.is_empty());
        }
        other => panic!("unexpected payload: {:?}", other),
    }

    // the commit appears in the log
    match bridge
        .dispatch(ActionRequest::new("log", repo).with_option("maxCount", 1i64))
        .await
        .wait()
        .await
        .unwrap()
    {
        Payload::Report { output, .. } => assert!(output.contains("initial commit")),
        other => panic!("unexpected payload: {:?}", other),
    }

    // current branch is a single trimmed line
    let payload = bridge
        .dispatch(ActionRequest::new("getCurrentBranch", repo))
        .await
        .wait()
        .await
        .unwrap();
    let branch = payload.as_message().unwrap().to_string();
    assert!(!branch.is_empty());
    assert!(!branch.contains('\n'));

    // create and switch to a new branch
    let payload = bridge
        .dispatch(ActionRequest::new("createBranch", repo).with_arg("feature"))
        .await
        .wait()
        .await
        .unwrap();
    assert_eq!(payload.as_message(), Some("Branch created successfully"));

    let payload = bridge
        .dispatch(ActionRequest::new("switchBranch", repo).with_arg("feature"))
        .await
        .wait()
        .await
        .unwrap();
    assert_eq!(payload.as_message(), Some("Switched to branch feature"));

    let payload = bridge
        .dispatch(ActionRequest::new("getBranches", repo))
        .await
        .wait()
        .await
        .unwrap();
    assert!(payload.as_message().unwrap().contains("feature"));

    // tag the commit and list tags
    let payload = bridge
        .dispatch(
            ActionRequest::new("tag", repo)
                .with_arg("v0.1.0")
                .with_arg(""),
        )
        .await
        .wait()
        .await
        .unwrap();
    assert_eq!(payload.as_message(), Some("Tag created successfully"));

    let payload = bridge
        .dispatch(ActionRequest::new("getTags", repo))
        .await
        .wait()
        .await
        .unwrap();
    assert!(payload.as_message().unwrap().contains("v0.1.0"));

    bridge.shutdown().await;
}

#[tokio::test]
async fn test_is_repository_false_outside_a_repo() {
    if !git_available() {
        return;
    }

    let scratch = tempfile::tempdir().unwrap();
    let bridge = GitBridge::new(BridgeConfig::default());

    let payload = bridge
        .dispatch(ActionRequest::new("isRepository", scratch.path()))
        .await
        .wait()
        .await
        .unwrap();
    assert_eq!(payload.as_flag(), Some(false));

    bridge.shutdown().await;
}

#[tokio::test]
async fn test_commit_in_empty_repo_fails_with_action_message() {
    if !git_available() {
        return;
    }

    let scratch = tempfile::tempdir().unwrap();
    let repo = scratch.path();
    let bridge = GitBridge::new(BridgeConfig::default());

    bridge
        .dispatch(ActionRequest::new("init", repo))
        .await
        .wait()
        .await
        .unwrap();
    configure_identity(repo);

    // Nothing staged; git commit exits non-zero.
    let err = bridge
        .dispatch(ActionRequest::new("commit", repo).with_arg("empty"))
        .await
        .wait()
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Failed to commit changes");

    bridge.shutdown().await;
}
