//! Mount target validation.
//!
//! A denylist, not an allowlist: anything outside the listed system
//! locations is an acceptable target.

use std::path::{Path, PathBuf};

/// Top-level directories that may never be used as a target, at any depth.
const DENIED_ROOTS: &[&str] = &["dev", "proc", "sys"];

/// Default guest user whose home directory is reserved.
const DEFAULT_USER: &str = "ubuntu";

/// Split `path` into components with `.` and `..` resolved textually.
///
/// No file-system access and no symlink resolution. A `..` at the root is
/// dropped.
fn normalized_components(path: &str) -> Vec<&str> {
    let mut components = Vec::new();
    for component in path.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                components.pop();
            }
            other => components.push(other),
        }
    }
    components
}

/// Check whether `target_path` is unsafe to use as a mount target.
///
/// Rejects `/`, anything under `/dev`, `/proc` or `/sys`, and `/home` or
/// `/home/ubuntu` themselves. Repeated separators are ignored and `.`/`..`
/// are resolved first, so `/tmp/../dev/sda` is rejected. Symlinks are not
/// followed.
pub fn invalid_target_path(target_path: &str) -> bool {
    match normalized_components(target_path).as_slice() {
        [] => true,
        [first, ..] if DENIED_ROOTS.contains(first) => true,
        ["home"] => true,
        ["home", user] => *user == DEFAULT_USER,
        _ => false,
    }
}

/// Return `path/subdir`, or `path` itself when `subdir` is empty.
pub fn backend_directory_path(path: &Path, subdir: &str) -> PathBuf {
    if subdir.is_empty() {
        path.to_path_buf()
    } else {
        path.join(subdir)
    }
}
