use crate::config::Config;
use crate::errors::AppError;
use crate::interfaces::ObjectUploader;
use crate::s3::{UploadError, upload_file};
use crate::utils::upload_logger::UploadLogger;
use walkdir::WalkDir;

/// Exit status used with `--fail-on-error` when at least one file failed.
pub const PARTIAL_FAILURE_EXIT_CODE: i32 = 2;

/// Per-file outcomes of one run over the base path.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub uploaded: Vec<String>,
    pub failed: Vec<(String, UploadError)>,
    pub skipped: Vec<String>,
}

impl BatchSummary {
    pub fn exit_code(&self, fail_on_error: bool) -> i32 {
        if fail_on_error && !self.failed.is_empty() {
            PARTIAL_FAILURE_EXIT_CODE
        } else {
            0
        }
    }
}

/// Upload every regular file directly inside `config.base_path`, one at a time
///
/// A failed file is recorded and the batch moves on; only an unreadable base path
/// stops the run.
pub fn upload_directory<U: ObjectUploader + ?Sized, L: UploadLogger + ?Sized>(
    config: &Config,
    uploader: &U,
    logger: &L,
) -> Result<BatchSummary, AppError> {
    let base = &config.base_path;
    if !base.is_dir() {
        return Err(AppError::BaseDir {
            path: base.clone(),
            message: "not a readable directory".to_string(),
        });
    }

    let mut summary = BatchSummary::default();

    for entry in WalkDir::new(base)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let name = e
                    .path()
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                // Depth-0 errors mean the base path itself could not be read
                if e.depth() == 0 {
                    return Err(AppError::BaseDir {
                        path: base.clone(),
                        message: e.to_string(),
                    });
                }
                logger.error(&format!("Cannot read entry {name}: {e}"));
                summary.failed.push((
                    name,
                    UploadError::LocalFile {
                        path: e.path().map(|p| p.to_path_buf()).unwrap_or_default(),
                        message: e.to_string(),
                    },
                ));
                continue;
            }
        };

        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !entry.file_type().is_file() {
            logger.debug(&format!("Skipping {file_name}: not a regular file"));
            summary.skipped.push(file_name);
            continue;
        }

        match upload_file(uploader, logger, entry.path(), &config.bucket_name, None) {
            Ok(_) => {
                logger.info(&format!("File: {file_name} was uploaded"));
                summary.uploaded.push(file_name);
            }
            Err(e) => summary.failed.push((file_name, e)),
        }
    }

    Ok(summary)
}
