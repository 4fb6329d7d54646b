//! Integration tests for moor-utils against the local file system.
//!
//! Set `RUST_LOG=moor_utils=trace` to see the crate's logs.

use moor_utils::{
    invalid_target_path, to_cmd, valid_hostname, valid_mac_address, FileWriteRequest, QuoteType,
    RetryConfig, TimeoutAction, Utils, UtilsConfig, UtilsError,
};
use std::fs;
use std::time::Duration;
use tempfile::{NamedTempFile, TempDir};
use tracing_subscriber::EnvFilter;

const FILE_CONTENTS: &str = "line 1 of file contents\nline 2\n";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_make_file_with_content_works() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("test-file");

    Utils::new()
        .make_file_with_content(&path, FILE_CONTENTS, false)
        .expect("write should succeed");

    assert_eq!(fs::read_to_string(&path).unwrap(), FILE_CONTENTS);
}

#[test]
fn test_make_file_with_content_does_not_overwrite() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("test-file");
    let utils = Utils::new();

    utils.make_file_with_content(&path, FILE_CONTENTS, false).unwrap();

    let err = utils
        .make_file_with_content(&path, "other stuff\n", false)
        .unwrap_err();
    assert!(matches!(err, UtilsError::AlreadyExists(_)));
    assert!(err.to_string().contains("already exists"));

    assert_eq!(fs::read_to_string(&path).unwrap(), FILE_CONTENTS);
}

#[test]
fn test_make_file_with_content_overwrites_when_asked() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("test-file");
    let utils = Utils::new();

    utils.make_file_with_content(&path, FILE_CONTENTS, false).unwrap();
    utils
        .write_file(&FileWriteRequest::new(&path, "other stuff\n").overwrite(true))
        .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "other stuff\n");
}

#[test]
fn test_make_file_with_content_creates_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("new_dir/nested/test-file");

    Utils::new()
        .make_file_with_content(&path, FILE_CONTENTS, false)
        .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), FILE_CONTENTS);
}

#[test]
fn test_make_file_with_binary_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blob");
    let content: Vec<u8> = (0..=255).collect();

    Utils::new()
        .make_file_with_content(&path, &content, false)
        .unwrap();

    assert_eq!(fs::read(&path).unwrap(), content);
}

#[test]
fn test_make_file_fails_when_parent_is_a_file() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a dir").unwrap();

    let err = Utils::new()
        .make_file_with_content(blocker.join("child"), FILE_CONTENTS, false)
        .unwrap_err();
    assert!(matches!(err, UtilsError::DirectoryCreation { .. }));
}

#[test]
fn test_contents_of_reads_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("test-file");
    fs::write(&path, "just a bit of test content here").unwrap();

    let content = Utils::new().contents_of(&path).unwrap();
    assert_eq!(content, b"just a bit of test content here");
}

#[test]
fn test_contents_of_missing_file() {
    let err = Utils::new()
        .contents_of("this-file-does-not-exist")
        .unwrap_err();
    assert!(matches!(err, UtilsError::Read { .. }));
}

#[test]
fn test_contents_of_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty_test_file");
    Utils::new().make_file_with_content(&path, "", false).unwrap();

    assert!(Utils::new().contents_of(&path).unwrap().is_empty());
}

#[test]
fn test_absent_config_file_and_dir_are_created() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config_dir/config");

    Utils::new().check_and_create_config_file(&path).unwrap();

    assert!(path.exists());
    assert!(fs::read(&path).unwrap().is_empty());
}

#[test]
fn test_existing_config_file_is_untouched() {
    let mut config_file = NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut config_file, b"keep = true\n").unwrap();
    let before = fs::metadata(config_file.path()).unwrap().modified().unwrap();

    Utils::new()
        .check_and_create_config_file(config_file.path())
        .unwrap();

    let after = fs::metadata(config_file.path()).unwrap().modified().unwrap();
    assert_eq!(before, after);
    assert_eq!(fs::read(config_file.path()).unwrap(), b"keep = true\n");
}

#[test]
fn test_make_dir_creates_dir() {
    let dir = TempDir::new().unwrap();
    let utils = Utils::new();

    let new_path = utils.make_dir(dir.path(), "foo").unwrap();
    assert!(new_path.is_dir());
    assert_eq!(new_path, dir.path().join("foo"));

    let same = utils.make_dir(dir.path(), "").unwrap();
    assert_eq!(same, dir.path());
}

#[test]
fn test_filesystem_bytes_available() {
    let dir = TempDir::new().unwrap();
    assert!(Utils::new().filesystem_bytes_available(dir.path()).is_ok());
}

#[test]
fn test_scrypt_hash_known_answer() {
    let hash = Utils::new().generate_scrypt_hash_for("passphrase").unwrap();
    assert_eq!(
        hash,
        "f28cb995d91eed8064674766f28e468aae8065b2cf02af556c857dd77de2d2476f3830fd02147f3e3503\
         7a1812df0d0d0934fa677be585269fee5358d5c70758"
    );
}

#[test]
fn test_random_bytes_size() {
    let utils = Utils::new();
    assert_eq!(utils.random_bytes(4).len(), 4);
    assert!(utils.random_bytes(0).is_empty());
}

#[test]
fn test_configured_poll_interval_is_used() {
    let utils = Utils::new()
        .with_config(UtilsConfig {
            retry: RetryConfig {
                poll_interval_ms: 1,
            },
            ..Default::default()
        })
        .unwrap();

    let mut attempts = 0;
    let mut timed_out = false;
    utils.try_action_for(
        || timed_out = true,
        Duration::from_millis(20),
        || {
            attempts += 1;
            TimeoutAction::Retry
        },
    );

    assert!(timed_out);
    assert!(attempts > 2, "expected several attempts, got {attempts}");
}

#[test]
fn test_invalid_config_rejected() {
    let result = Utils::new().with_config(UtilsConfig {
        retry: RetryConfig {
            poll_interval_ms: 0,
        },
        ..Default::default()
    });
    assert!(matches!(result, Err(UtilsError::InvalidConfig(_))));
}

/// Mount request validation as a caller would chain it.
#[test]
fn test_mount_request_flow() {
    let requests = [
        ("primary", "/srv/data", true),
        ("primary", "/home/ubuntu", false),
        ("1primary", "/srv/data", false),
        ("dev-box", "/dev/sda1", false),
        ("dev-box", "/home/alice/src", true),
    ];

    for (name, target, accepted) in requests {
        let ok = valid_hostname(name) && !invalid_target_path(target);
        assert_eq!(ok, accepted, "{name} -> {target}");
    }

    assert!(valid_mac_address("52:54:00:ab:cd:ef"));
    assert_eq!(
        to_cmd(&["mount", "--bind", "/srv/my data", "/mnt"], QuoteType::QuoteEveryArg),
        "mount --bind /srv/my\\ data /mnt"
    );
}
