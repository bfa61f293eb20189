/// Root directory probe — validates the root and splits its immediate
/// children into subdirectories (scan targets) and a direct file count.
use crate::error::ScanError;
use crate::model::ScanTarget;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// What the probe found directly under the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    /// The root, absolute and normalised.
    pub root: ScanTarget,
    /// Immediate children that are directories themselves, sorted by path.
    pub subdirectories: Vec<ScanTarget>,
    /// Immediate children that are not directories.
    pub direct_file_count: u64,
}

/// Confirm `root` is a non-empty directory and list its immediate children.
///
/// Children are classified by their own file type: a symlink to a directory
/// counts as a file and is never followed. Read-only.
pub fn probe(root: &Path) -> Result<Probe, ScanError> {
    let root = ScanTarget::resolve(root).map_err(|source| ScanError::io(root, source))?;

    let metadata = match fs::metadata(root.as_path()) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(ScanError::NotFound {
                path: root.into_path_buf(),
            });
        }
        Err(err) => return Err(ScanError::io(root.as_path(), err)),
    };
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.into_path_buf(),
        });
    }

    let entries = fs::read_dir(root.as_path()).map_err(|err| ScanError::io(root.as_path(), err))?;

    let mut subdirectories = Vec::new();
    let mut direct_file_count: u64 = 0;
    let mut entry_count: u64 = 0;
    for entry_result in entries {
        let entry = entry_result.map_err(|err| ScanError::io(root.as_path(), err))?;
        entry_count += 1;
        let file_type = entry
            .file_type()
            .map_err(|err| ScanError::io(entry.path(), err))?;
        if file_type.is_dir() {
            subdirectories.push(root.child(entry.file_name()));
        } else {
            direct_file_count += 1;
        }
    }

    if entry_count == 0 {
        return Err(ScanError::EmptyDirectory {
            path: root.into_path_buf(),
        });
    }

    subdirectories.sort();
    debug!(
        "Probed {}: {} subdirectories, {} direct files",
        root,
        subdirectories.len(),
        direct_file_count
    );

    Ok(Probe {
        root,
        subdirectories,
        direct_file_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn flat_directory_has_no_subdirectories() {
        let tmp = TempDir::new().unwrap();
        for i in 0..5 {
            File::create(tmp.path().join(format!("f{i}.txt"))).unwrap();
        }

        let probe = probe(tmp.path()).unwrap();
        assert!(probe.subdirectories.is_empty());
        assert_eq!(probe.direct_file_count, 5);
        assert_eq!(probe.root.as_path(), tmp.path());
    }

    #[test]
    fn splits_directories_from_files() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("beta")).unwrap();
        fs::create_dir(tmp.path().join("alpha")).unwrap();
        File::create(tmp.path().join("top.txt")).unwrap();

        let probe = probe(tmp.path()).unwrap();
        assert_eq!(probe.direct_file_count, 1);
        let names: Vec<&Path> = probe
            .subdirectories
            .iter()
            .map(ScanTarget::as_path)
            .collect();
        assert_eq!(
            names,
            vec![
                tmp.path().join("alpha").as_path(),
                tmp.path().join("beta").as_path()
            ]
        );
    }

    #[test]
    fn subdirectories_are_not_recursed() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("a").join("nested")).unwrap();
        File::create(tmp.path().join("a").join("inner.txt")).unwrap();

        let probe = probe(tmp.path()).unwrap();
        assert_eq!(probe.subdirectories.len(), 1);
        assert_eq!(probe.direct_file_count, 0);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = probe(tmp.path()).unwrap_err();
        assert!(matches!(err, ScanError::EmptyDirectory { .. }), "{err}");
    }

    #[test]
    fn missing_root_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = probe(&tmp.path().join("missing")).unwrap_err();
        assert!(matches!(err, ScanError::NotFound { .. }), "{err}");
    }

    #[test]
    fn regular_file_is_not_a_directory() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("plain.txt");
        File::create(&file).unwrap();

        let err = probe(&file).unwrap_err();
        assert!(matches!(err, ScanError::NotADirectory { .. }), "{err}");
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directory_counts_as_a_file() {
        let tmp = TempDir::new().unwrap();
        let real = tmp.path().join("real");
        fs::create_dir(&real).unwrap();
        std::os::unix::fs::symlink(&real, tmp.path().join("link")).unwrap();

        let probe = probe(tmp.path()).unwrap();
        assert_eq!(probe.subdirectories.len(), 1);
        assert_eq!(probe.direct_file_count, 1);
    }
}
