use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::atomic_file::AtomicFile;
use super::constants::APP_DIR_NAME;

#[derive(Error, Debug)]
pub enum ModelResolveError {
    #[error("failed to create model directory {path}: {source}")]
    CacheDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("download failed for {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to write model to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not determine cache directory")]
    NoCacheDir,
}

/// Progress callback: `(bytes_downloaded, total_bytes)`.
/// `total_bytes` is 0 if the server didn't provide Content-Length.
pub type ProgressFn = Box<dyn Fn(u64, u64) + Send>;

const DOWNLOAD_BUFFER_SIZE: usize = 1024 * 1024;

/// Locates model files on disk, downloading into the cache when missing.
///
/// Resolution order:
/// 1. Cache directory
/// 2. User-supplied model directory (`--model-dir`)
/// 3. Download from URL into the cache
#[derive(Debug, Clone)]
pub struct ModelStore {
    cache_dir: PathBuf,
    model_dir: Option<PathBuf>,
}

impl ModelStore {
    pub fn new(cache_dir: PathBuf, model_dir: Option<PathBuf>) -> Self {
        Self {
            cache_dir,
            model_dir,
        }
    }

    /// Store rooted at the platform cache directory.
    pub fn with_default_cache(model_dir: Option<PathBuf>) -> Result<Self, ModelResolveError> {
        Ok(Self::new(model_cache_dir()?, model_dir))
    }

    /// `name` in the cache or model directory, without downloading.
    pub fn find_local(&self, name: &str) -> Option<PathBuf> {
        let cached_path = self.cache_dir.join(name);
        if cached_path.exists() {
            return Some(cached_path);
        }
        self.model_dir
            .as_ref()
            .map(|dir| dir.join(name))
            .filter(|path| path.exists())
    }

    pub fn resolve(
        &self,
        name: &str,
        url: &str,
        progress: Option<ProgressFn>,
    ) -> Result<PathBuf, ModelResolveError> {
        if let Some(path) = self.find_local(name) {
            return Ok(path);
        }

        let cached_path = self.cache_dir.join(name);
        fs::create_dir_all(&self.cache_dir).map_err(|e| ModelResolveError::CacheDir {
            path: self.cache_dir.clone(),
            source: e,
        })?;
        log::info!("Downloading {name} from {url}");
        download(url, &cached_path, progress)?;
        Ok(cached_path)
    }
}

/// Platform-specific model cache directory.
///
/// - macOS: `~/Library/Application Support/Transcribe/models/`
/// - Linux: `$XDG_CACHE_HOME/Transcribe/models/` or `~/.cache/Transcribe/models/`
/// - Windows: `%LOCALAPPDATA%/Transcribe/models/`
pub fn model_cache_dir() -> Result<PathBuf, ModelResolveError> {
    #[cfg(target_os = "macos")]
    {
        dirs::data_dir()
            .map(|d| d.join(APP_DIR_NAME).join("models"))
            .ok_or(ModelResolveError::NoCacheDir)
    }
    #[cfg(not(target_os = "macos"))]
    {
        dirs::cache_dir()
            .map(|d| d.join(APP_DIR_NAME).join("models"))
            .ok_or(ModelResolveError::NoCacheDir)
    }
}

fn download(url: &str, dest: &Path, progress: Option<ProgressFn>) -> Result<(), ModelResolveError> {
    let mut response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(|e| ModelResolveError::Download {
            url: url.to_string(),
            source: e,
        })?;

    let write_err = |e: std::io::Error| ModelResolveError::Write {
        path: dest.to_path_buf(),
        source: e,
    };

    let total = response.content_length().unwrap_or(0);
    let mut downloaded: u64 = 0;
    let mut file = AtomicFile::create(dest).map_err(write_err)?;

    let mut buf = vec![0u8; DOWNLOAD_BUFFER_SIZE];
    loop {
        let n = response.read(&mut buf).map_err(write_err)?;
        if n == 0 {
            break;
        }
        file.write_all(&buf[..n]).map_err(write_err)?;
        downloaded += n as u64;
        if let Some(ref cb) = progress {
            cb(downloaded, total);
        }
    }

    file.commit().map_err(write_err)
}
