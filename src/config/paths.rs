//! Directory path validators for argument parsing
//!
//! Both validators return the path unchanged on success so they can be
//! plugged directly into clap as value parsers.

use std::ffi::CString;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Validation failure for a directory path argument
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("The path '{0}' is not a valid directory.")]
    NotADirectory(String),

    #[error("The path '{0}' is not a readable directory.")]
    NotReadable(String),

    #[error("The path '{0}' is not a writable directory.")]
    NotWritable(String),
}

/// Validate that a path names an existing directory this process can read
pub fn readable_dir(path: &str) -> Result<PathBuf, PathError> {
    if !Path::new(path).is_dir() {
        return Err(PathError::NotADirectory(path.to_string()));
    }
    if has_access(path, libc::R_OK) {
        Ok(PathBuf::from(path))
    } else {
        Err(PathError::NotReadable(path.to_string()))
    }
}

/// Validate that a path names an existing directory this process can write
pub fn writable_dir(path: &str) -> Result<PathBuf, PathError> {
    if !Path::new(path).is_dir() {
        return Err(PathError::NotADirectory(path.to_string()));
    }
    if has_access(path, libc::W_OK) {
        Ok(PathBuf::from(path))
    } else {
        Err(PathError::NotWritable(path.to_string()))
    }
}

fn has_access(path: &str, mode: libc::c_int) -> bool {
    // Interior NUL cannot name an existing path
    let Ok(cpath) = CString::new(path) else {
        return false;
    };
    unsafe { libc::access(cpath.as_ptr(), mode) == 0 }
}
