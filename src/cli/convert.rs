use std::path::PathBuf;

use crate::{convert, error, info, success, utils};

pub async fn convert(from: PathBuf, to: PathBuf) {
    if !from.is_dir() {
        error!("{} is not a directory", from.display());
    }

    let pb = utils::spinner(format!("Converting MP3 files in {}...", from.display()));
    let src = from.clone();
    let dst = to.clone();
    let result =
        tokio::task::spawn_blocking(move || convert::convert_directory(&src, &dst)).await;
    pb.finish_and_clear();

    match result {
        Ok(Ok(summary)) => {
            if summary.skipped > 0 {
                info!(
                    "{} file(s) already converted, left untouched",
                    summary.skipped
                );
            }
            success!(
                "Converted {} file(s) into {}",
                summary.converted,
                to.display()
            );
        }
        Ok(Err(e)) => error!("Conversion failed. Err: {}", e),
        Err(e) => error!("Conversion task failed: {}", e),
    }
}
