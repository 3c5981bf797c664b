//! Saving finished drawings as PNG files.
//!
//! Files are named `drawing_<unix-millis>.png` inside the store directory.
//! Background saves take an owned raster snapshot, so edits made on the
//! canvas after export can never reach the bytes being written.

use serenart_render::{CodecError, Pixmap, encode_png};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Encode(#[from] CodecError),
    #[error("writing drawing failed: {0}")]
    Io(#[from] io::Error),
    #[error("background save worker panicked")]
    WorkerPanicked,
}

/// Directory-backed drawing storage.
#[derive(Debug, Clone)]
pub struct DrawingStore {
    dir: PathBuf,
}

impl DrawingStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name for a drawing saved at `millis` since the Unix epoch.
    pub fn file_name_at(millis: i64) -> String {
        format!("drawing_{millis}.png")
    }

    /// Encode `raster` and write it under a fresh timestamped name.
    ///
    /// # Errors
    /// Returns `StoreError` if encoding fails or the file cannot be written.
    pub fn save(&self, raster: &Pixmap) -> Result<PathBuf, StoreError> {
        let millis = chrono::Utc::now().timestamp_millis();
        let bytes = encode_png(raster)?;
        fs::create_dir_all(&self.dir)?;

        // Two saves within one millisecond get a numeric suffix.
        let mut attempt = 0u32;
        loop {
            let name = if attempt == 0 {
                Self::file_name_at(millis)
            } else {
                format!("drawing_{millis}_{attempt}.png")
            };
            let path = self.dir.join(name);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => {
                    write_or_remove(file, &path, &bytes)?;
                    log::info!("saved drawing to {}", path.display());
                    return Ok(path);
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Write `snapshot` on a worker thread.
    pub fn save_in_background(&self, snapshot: Pixmap) -> SaveHandle {
        let store = self.clone();
        SaveHandle(thread::spawn(move || store.save(&snapshot)))
    }
}

/// Write `bytes` to the freshly created `file`. On failure the partial file
/// is removed so the store never holds a truncated drawing.
fn write_or_remove(mut file: impl Write, path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Err(e) = file.write_all(bytes).and_then(|()| file.flush()) {
        drop(file);
        log::warn!("write to {} failed: {e}", path.display());
        if let Err(rm) = fs::remove_file(path) {
            log::warn!("removing partial {} failed: {rm}", path.display());
        }
        return Err(e);
    }
    Ok(())
}

/// Pending background save.
pub struct SaveHandle(JoinHandle<Result<PathBuf, StoreError>>);

impl SaveHandle {
    /// Block until the save finishes.
    ///
    /// # Errors
    /// Propagates the save error, or `WorkerPanicked` if the thread died.
    pub fn wait(self) -> Result<PathBuf, StoreError> {
        self.0.join().map_err(|_| StoreError::WorkerPanicked)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenart_render::decode_png;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("serenart-store-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn file_names_follow_timestamp_scheme() {
        assert_eq!(DrawingStore::file_name_at(1_700_000_000_123), "drawing_1700000000123.png");
    }

    #[test]
    fn save_writes_decodable_png() {
        let dir = scratch_dir("save");
        let store = DrawingStore::new(&dir);
        let raster = Pixmap::new(12, 9).unwrap();

        let path = store.save(&raster).unwrap();
        assert!(path.starts_with(&dir));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("drawing_") && name.ends_with(".png"), "{name}");

        let back = decode_png(&fs::read(&path).unwrap()).unwrap();
        assert_eq!((back.width(), back.height()), (12, 9));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn rapid_saves_get_distinct_paths() {
        let dir = scratch_dir("rapid");
        let store = DrawingStore::new(&dir);
        let raster = Pixmap::new(2, 2).unwrap();
        let a = store.save(&raster).unwrap();
        let b = store.save(&raster).unwrap();
        assert_ne!(a, b);
        let _ = fs::remove_dir_all(&dir);
    }

    /// Accepts a few bytes, then fails like a full disk.
    struct FullDisk(usize);

    impl Write for FullDisk {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.0 == 0 {
                return Err(io::Error::other("no space left on device"));
            }
            let n = buf.len().min(self.0);
            self.0 -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_write_leaves_no_partial_file() {
        let dir = scratch_dir("partial");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(DrawingStore::file_name_at(42));
        fs::write(&path, b"\x89PNG").unwrap();

        let err = write_or_remove(FullDisk(3), &path, &[0u8; 64]).unwrap_err();
        assert_eq!(err.to_string(), "no space left on device");
        assert!(!path.exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn successful_write_keeps_file() {
        let dir = scratch_dir("complete");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(DrawingStore::file_name_at(7));
        let file = OpenOptions::new().write(true).create_new(true).open(&path).unwrap();

        write_or_remove(file, &path, b"drawing").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"drawing");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn background_save_completes() {
        let dir = scratch_dir("background");
        let store = DrawingStore::new(&dir);
        let handle = store.save_in_background(Pixmap::new(4, 4).unwrap());
        let path = handle.wait().unwrap();
        assert!(path.exists());
        let _ = fs::remove_dir_all(&dir);
    }
}
