// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Destination for generated files.

use std::{
    fs,
    path::{Path, PathBuf}
};

use crate::error::{Result, ScaffoldError};

/// Receives generated files.
///
/// Implementations create missing directories and overwrite existing files.
pub trait FileSink {
    /// Write `contents` to `dir/file_name`, returning the written path.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::FileWrite`] when the directory cannot be
    /// created or the file cannot be written.
    fn write(&self, dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf>;
}

/// Writes to the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSink;

impl FileSink for FsSink {
    fn write(&self, dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf> {
        fs::create_dir_all(dir).map_err(|source| ScaffoldError::FileWrite {
            path: dir.to_path_buf(),
            source
        })?;

        let path = dir.join(file_name);
        fs::write(&path, contents).map_err(|source| ScaffoldError::FileWrite {
            path: path.clone(),
            source
        })?;

        Ok(path)
    }
}

impl<S: FileSink + ?Sized> FileSink for &S {
    fn write(&self, dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf> {
        (**self).write(dir, file_name, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("a").join("b");

        let path = FsSink.write(&dir, "User.entity.ts", "export class UserEntity {}\n").unwrap();

        assert_eq!(path, dir.join("User.entity.ts"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "export class UserEntity {}\n");
    }

    #[test]
    fn overwrites_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        FsSink.write(tmp.path(), "x.ts", "old").unwrap();
        let path = FsSink.write(tmp.path(), "x.ts", "new").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "new");
    }

    #[test]
    fn reports_directory_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let err = FsSink.write(&blocker.join("sub"), "x.ts", "").unwrap_err();
        assert!(matches!(err, ScaffoldError::FileWrite { .. }));
    }
}
