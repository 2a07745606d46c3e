use s3_dir_upload::utils::log_utils::Logger;
use s3_dir_upload::{args, run_app};

fn main() {
    // Parse command-line arguments
    let args = args::args_checks();
    let logger = Logger::new(args.verbosity());

    match run_app(&args, &logger) {
        Ok(summary) => {
            logger.debug(&format!(
                "{} uploaded, {} failed, {} skipped",
                summary.uploaded.len(),
                summary.failed.len(),
                summary.skipped.len()
            ));
            std::process::exit(summary.exit_code(args.fail_on_error));
        }
        Err(e) => {
            logger.error(&e.to_string());
            std::process::exit(1);
        }
    }
}
