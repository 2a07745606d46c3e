use s3_dir_upload::config::ConfigError;
use s3_dir_upload::interfaces::MockObjectUploader;
use s3_dir_upload::testing::RecordingLogger;
use s3_dir_upload::{AppError, run_with_uploader};
use std::cell::Cell;
use std::fs;

const VALID: &str = "[S3Info]\naccesskey = AKIATEST\nsecretkey = secret\nbucket_name = public-files\n\n[LocalInfo]\nbase_path = /tmp/\n";

#[test]
fn test_missing_config_file_never_connects() {
    let scratch = tempfile::tempdir().unwrap();
    let connected = Cell::new(false);
    let logger = RecordingLogger::default();

    let result = run_with_uploader(&scratch.path().join("config.ini"), &logger, |_| {
        connected.set(true);
        Ok(MockObjectUploader::new())
    });

    assert!(matches!(result, Err(AppError::Config(ConfigError::NotFound(_)))));
    assert!(!connected.get());
}

#[test]
fn test_each_missing_key_never_uploads() {
    for key in ["accesskey", "secretkey", "bucket_name", "base_path"] {
        let scratch = tempfile::tempdir().unwrap();
        let config_path = scratch.path().join("config.ini");
        let content: String = VALID
            .lines()
            .filter(|line| !line.starts_with(key))
            .map(|line| format!("{line}\n"))
            .collect();
        fs::write(&config_path, content).unwrap();

        let logger = RecordingLogger::default();
        let result = run_with_uploader(&config_path, &logger, |_| {
            let mut uploader = MockObjectUploader::new();
            uploader.expect_put_object().times(0);
            Ok(uploader)
        });

        match result {
            Err(AppError::Config(ConfigError::MissingKey { key: missing, .. })) => {
                assert_eq!(missing, key)
            }
            other => panic!("expected MissingKey for {key}, got {other:?}"),
        }
    }
}
