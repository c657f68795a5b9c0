use std::sync::Arc;

use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;

use usb_loader::{CommandSet, MountOrchestrator, MountRequest, SystemRunner};

fn orchestrator() -> MountOrchestrator {
    MountOrchestrator::from_commands(Arc::new(SystemRunner::new()), &CommandSet::default())
}

#[test]
fn directory_creation_is_idempotent() {
    let temp = TempDir::new().expect("temp dir");
    let target = temp.child("mnt/usb");
    let path = target.path().to_str().expect("utf-8 temp path");

    let mounter = orchestrator();
    mounter.ensure_directory(path).expect("first creation");
    mounter.ensure_directory(path).expect("second creation");

    target.assert(predicate::path::is_dir());
}

#[test]
fn directory_failure_blocks_mount() {
    let temp = TempDir::new().expect("temp dir");
    let file = temp.child("occupied");
    file.write_str("not a directory").expect("write file");
    let path = file.child("usb");

    let outcome = orchestrator().mount(&MountRequest::new(
        "/dev/usb-loader-test",
        path.path().to_str().expect("utf-8 temp path"),
    ));

    assert!(!outcome.success);
    assert!(
        outcome
            .message
            .starts_with("Failed to create mount directory: mkdir exited with status 1"),
        "{}",
        outcome.message
    );
    path.assert(predicate::path::missing());
}
