//! Single-stream HTTP GET of a deployment package.
//!
//! The response body is written unchanged to `<dest>.part` and renamed onto
//! `dest` once the transfer completed with a 2xx status.

mod error;

pub use error::FetchError;

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use crate::config::LfdConfig;
use crate::function::DownloadLocation;
use crate::storage::ArtifactWriter;

/// Abort when the average rate stays below this many bytes/s for [`LOW_SPEED_TIME`].
const LOW_SPEED_LIMIT: u32 = 1024;
const LOW_SPEED_TIME: Duration = Duration::from_secs(60);

/// Transfer limits for one GET.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    /// Receive-speed cap in bytes per second.
    pub max_recv_speed: Option<u64>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::from_config(&LfdConfig::default())
    }
}

impl FetchOptions {
    /// Stall threshold, kept below a configured receive cap so a capped
    /// transfer is never treated as stalled.
    pub fn low_speed_limit(&self) -> u32 {
        match self.max_recv_speed {
            Some(cap) if cap > 0 => (cap / 2).clamp(1, u64::from(LOW_SPEED_LIMIT)) as u32,
            _ => LOW_SPEED_LIMIT,
        }
    }

    pub fn from_config(cfg: &LfdConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.transfer_timeout_secs),
            max_recv_speed: cfg.max_bytes_per_sec,
        }
    }
}

/// Downloads `location` to `dest`. Returns the number of bytes written.
///
/// On any failure the temp file is removed and `dest` is left as it was.
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub fn fetch_to_path(
    location: &DownloadLocation,
    dest: &Path,
    opts: &FetchOptions,
) -> Result<u64, FetchError> {
    tracing::debug!(url = %location.redacted(), dest = %dest.display(), "GET artifact");
    let mut writer = ArtifactWriter::create(dest).map_err(FetchError::Storage)?;
    match get_into(location, &mut writer, opts) {
        Ok(()) => writer.finalize().map_err(FetchError::Storage),
        Err(e) => {
            writer.discard();
            Err(e)
        }
    }
}

fn get_into(
    location: &DownloadLocation,
    writer: &mut ArtifactWriter,
    opts: &FetchOptions,
) -> Result<(), FetchError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(location.as_str())?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.low_speed_limit(opts.low_speed_limit())?;
    easy.low_speed_time(LOW_SPEED_TIME)?;
    easy.timeout(opts.timeout)?;
    if let Some(speed) = opts.max_recv_speed {
        easy.max_recv_speed(speed)?;
    }

    let mut write_err: Option<io::Error> = None;
    let performed = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| match writer.write_all(data) {
            Ok(()) => Ok(data.len()),
            Err(e) => {
                write_err = Some(e);
                Ok(0) // abort transfer
            }
        })?;
        transfer.perform()
    };
    if let Some(e) = write_err {
        return Err(e.into());
    }
    performed?;

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }
    Ok(())
}
