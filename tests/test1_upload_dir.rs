use aws_sdk_s3::types::ObjectCannedAcl;
use s3_dir_upload::interfaces::MockObjectUploader;
use s3_dir_upload::run_with_uploader;
use s3_dir_upload::s3::UploadError;
use s3_dir_upload::testing::RecordingLogger;
use s3_dir_upload::utils::log_utils::LogLevel;
use std::fs;
use std::path::Path;

fn write_config(dir: &Path, base_path: &Path) -> std::path::PathBuf {
    let config_path = dir.join("config.ini");
    fs::write(
        &config_path,
        format!(
            "[S3Info]\naccesskey = AKIATEST\nsecretkey = secret\nbucket_name = public-files\n\n[LocalInfo]\nbase_path = {}/\n",
            base_path.display()
        ),
    )
    .unwrap();
    config_path
}

#[test]
fn test_one_accepted_one_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let scratch = tempfile::tempdir()?;
    let outbox = scratch.path().join("outbox");
    fs::create_dir(&outbox)?;
    fs::write(outbox.join("a.txt"), "alpha")?;
    fs::write(outbox.join("b.txt"), "beta")?;
    let config_path = write_config(scratch.path(), &outbox);

    let mut uploader = MockObjectUploader::new();
    uploader
        .expect_put_object()
        .withf(|req| req.bucket == "public-files" && req.acl == ObjectCannedAcl::PublicRead)
        .times(2)
        .returning(|req| {
            if req.key == "a.txt" {
                Ok(())
            } else {
                Err(UploadError::Permission("Access Denied".to_string()))
            }
        });
    let logger = RecordingLogger::default();

    let summary = run_with_uploader(&config_path, &logger, |_| Ok(uploader))?;

    assert_eq!(summary.uploaded, vec!["a.txt".to_string()]);
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].0, "b.txt");
    assert!(matches!(summary.failed[0].1, UploadError::Permission(_)));

    let info = logger.at(LogLevel::Info);
    assert_eq!(info.len(), 1);
    assert!(info[0].contains("a.txt"));
    let errors = logger.at(LogLevel::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("b.txt"));

    assert_eq!(summary.exit_code(false), 0);
    Ok(())
}

#[test]
fn test_empty_base_path() -> Result<(), Box<dyn std::error::Error>> {
    let scratch = tempfile::tempdir()?;
    let outbox = scratch.path().join("outbox");
    fs::create_dir(&outbox)?;
    let config_path = write_config(scratch.path(), &outbox);

    let mut uploader = MockObjectUploader::new();
    uploader.expect_put_object().times(0);
    let logger = RecordingLogger::default();

    let summary = run_with_uploader(&config_path, &logger, |_| Ok(uploader))?;

    assert!(summary.uploaded.is_empty() && summary.failed.is_empty());
    assert!(logger.at(LogLevel::Info).is_empty());
    assert!(logger.at(LogLevel::Error).is_empty());
    assert_eq!(summary.exit_code(true), 0);
    Ok(())
}

#[test]
fn test_same_file_twice_overwrites() -> Result<(), Box<dyn std::error::Error>> {
    let scratch = tempfile::tempdir()?;
    let outbox = scratch.path().join("outbox");
    fs::create_dir(&outbox)?;
    fs::write(outbox.join("a.txt"), "alpha")?;
    let config_path = write_config(scratch.path(), &outbox);

    for _ in 0..2 {
        let mut uploader = MockObjectUploader::new();
        uploader
            .expect_put_object()
            .withf(|req| req.key == "a.txt")
            .times(1)
            .returning(|_| Ok(()));
        let logger = RecordingLogger::default();

        let summary = run_with_uploader(&config_path, &logger, |_| Ok(uploader))?;

        assert_eq!(summary.uploaded, vec!["a.txt".to_string()]);
    }
    Ok(())
}
