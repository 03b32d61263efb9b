//! Project path resolver.
//!
//! Computes the four canonical directories of the fixed project layout:
//! root, data, extracted-data, and metadata. This component only joins path
//! strings; it never touches the filesystem, and creating or checking the
//! directories is the caller's responsibility.

use std::env;
use std::path::{Path, PathBuf};

/// Configurable pieces of the project layout.
///
/// Use [`Default`] and struct-update syntax to override individual parts:
///
/// ```rust
/// use manifest_ingest::paths::{ProjectLayout, ProjectPaths};
///
/// let paths = ProjectPaths::new(ProjectLayout {
///     root: Some("/srv/project".into()),
///     data_folder: "raw".to_string(),
///     ..Default::default()
/// });
/// assert_eq!(paths.data_path(), std::path::Path::new("/srv/project/raw"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Project root. When `None`, defaults to two levels above the current
    /// working directory (a documented convention, computed lexically).
    pub root: Option<PathBuf>,
    /// Name of the raw-data folder. Defaults to `data`.
    pub data_folder: String,
    /// Name of the extracted-data folder. Defaults to `extracted_data`.
    pub extracted_data_folder: String,
    /// Name of the metadata folder. Defaults to `metadata`.
    pub metadata_folder: String,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            root: None,
            data_folder: "data".to_string(),
            extracted_data_folder: "extracted_data".to_string(),
            metadata_folder: "metadata".to_string(),
        }
    }
}

/// Resolved project directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    root: PathBuf,
    data: PathBuf,
    extracted_data: PathBuf,
    metadata: PathBuf,
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self::new(ProjectLayout::default())
    }
}

impl ProjectPaths {
    /// Resolve the four project paths from `layout`.
    ///
    /// Always succeeds: folder names are used verbatim, and the default root
    /// falls back to `.` if the current working directory is unavailable.
    pub fn new(layout: ProjectLayout) -> Self {
        let root = layout.root.unwrap_or_else(default_root);
        Self {
            data: root.join(&layout.data_folder),
            extracted_data: root.join(&layout.extracted_data_folder),
            metadata: root.join(&layout.metadata_folder),
            root,
        }
    }

    /// The project root directory.
    pub fn project_root(&self) -> &Path {
        &self.root
    }

    /// The raw-data directory (root joined with the data folder name).
    pub fn data_path(&self) -> &Path {
        &self.data
    }

    /// The extracted-data directory.
    pub fn extracted_data_path(&self) -> &Path {
        &self.extracted_data
    }

    /// The metadata directory.
    pub fn metadata_path(&self) -> &Path {
        &self.metadata
    }
}

/// Two levels above the current working directory, computed lexically.
fn default_root() -> PathBuf {
    let mut root = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    root.pop();
    root.pop();
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_folder_names_join_root() {
        let p = ProjectPaths::new(ProjectLayout {
            root: Some(PathBuf::from("/proj")),
            ..Default::default()
        });
        assert_eq!(p.project_root(), Path::new("/proj"));
        assert_eq!(p.data_path(), Path::new("/proj/data"));
        assert_eq!(p.extracted_data_path(), Path::new("/proj/extracted_data"));
        assert_eq!(p.metadata_path(), Path::new("/proj/metadata"));
    }

    #[test]
    fn overridden_folder_names_are_used_verbatim() {
        let p = ProjectPaths::new(ProjectLayout {
            root: Some(PathBuf::from("/proj")),
            data_folder: "raw".to_string(),
            extracted_data_folder: "out".to_string(),
            metadata_folder: "meta".to_string(),
        });
        assert_eq!(p.data_path(), Path::new("/proj/raw"));
        assert_eq!(p.extracted_data_path(), Path::new("/proj/out"));
        assert_eq!(p.metadata_path(), Path::new("/proj/meta"));
    }

    #[test]
    fn default_root_is_two_levels_up() {
        let p = ProjectPaths::default();
        let mut expected = std::env::current_dir().unwrap();
        expected.pop();
        expected.pop();
        assert_eq!(p.project_root(), expected.as_path());
    }
}
