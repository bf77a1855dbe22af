//! Path utilities
//!
//! Output naming and input-to-output directory mirroring. Report paths are
//! normalized to use '/' as separator and are relative to the input root.

use std::path::{Path, PathBuf};

use crate::core::error::{Result, SplitError};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Check whether a file name ends with the given suffix (e.g. `.py`)
pub fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.ends_with(suffix))
        .unwrap_or(false)
}

/// Suffix of `source` used for chunk naming when no target suffix applies
///
/// `big.py` gives `.py`; a dotfile such as `.py` is all suffix; a name
/// without any dot gives an empty suffix.
pub fn source_suffix(source: &Path) -> String {
    match source.extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy()),
        None => source
            .file_name()
            .map(|name| name.to_string_lossy())
            .filter(|name| name.len() > 1 && name.starts_with('.'))
            .map(|name| name.to_string())
            .unwrap_or_default(),
    }
}

/// Name of the `index`-th (1-based) chunk file of `source`
///
/// When the file name ends with `suffix`, that suffix is cut off to form the
/// stem and appended after the part number: `big.py` with `.py` becomes
/// `big_part_3.py`, `x.d.ts` with `.d.ts` becomes `x_part_1.d.ts`. Otherwise
/// the whole file name is the stem and no suffix is added.
pub fn chunk_file_name(source: &Path, suffix: &str, index: usize) -> String {
    let name = source
        .file_name()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();

    match name.strip_suffix(suffix).filter(|_| !suffix.is_empty()) {
        Some(stem) => format!("{}_part_{}{}", stem, index, suffix),
        None => format!("{}_part_{}", name, index),
    }
}

/// Output directory for `file`: its parent directory relative to
/// `input_root`, re-rooted under `output_root`
pub fn mirror_dir(file: &Path, input_root: &Path, output_root: &Path) -> Result<PathBuf> {
    let parent = file.parent().unwrap_or_else(|| Path::new(""));
    let relative = parent
        .strip_prefix(input_root)
        .map_err(|_| SplitError::OutsideRoot {
            path: file.to_path_buf(),
            root: input_root.to_path_buf(),
        })?;

    Ok(output_root.join(relative))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        let path = Path::new("src/main.py");
        assert_eq!(normalize_path(path), "src/main.py");
    }

    #[test]
    fn test_make_relative() {
        let root = Path::new("/project");
        let path = Path::new("/project/pkg/mod.py");
        assert_eq!(make_relative(path, root), Some("pkg/mod.py".to_string()));
    }

    #[test]
    fn test_make_relative_not_under_root() {
        let root = Path::new("/project");
        let path = Path::new("/other/file.py");
        assert_eq!(make_relative(path, root), None);
    }

    #[test]
    fn test_has_suffix() {
        assert!(has_suffix(Path::new("a/b/foo.py"), ".py"));
        assert!(!has_suffix(Path::new("a/b/notes.txt"), ".py"));
        assert!(!has_suffix(Path::new("a/b/foo.pyc"), ".py"));
        assert!(!has_suffix(Path::new("/"), ".py"));
    }

    #[test]
    fn test_chunk_file_name() {
        assert_eq!(
            chunk_file_name(Path::new("dir/big.py"), ".py", 1),
            "big_part_1.py"
        );
        assert_eq!(chunk_file_name(Path::new("big.py"), ".py", 12), "big_part_12.py");
    }

    #[test]
    fn test_chunk_file_name_only_suffix_stripped() {
        assert_eq!(
            chunk_file_name(Path::new("setup.py.py"), ".py", 2),
            "setup.py_part_2.py"
        );
        assert_eq!(
            chunk_file_name(Path::new("my.python.py"), ".py", 1),
            "my.python_part_1.py"
        );
    }

    #[test]
    fn test_chunk_file_name_dotfile_is_all_suffix() {
        assert_eq!(chunk_file_name(Path::new("pkg/.py"), ".py", 1), "_part_1.py");
        assert_eq!(chunk_file_name(Path::new(".py"), ".py", 2), "_part_2.py");
    }

    #[test]
    fn test_chunk_file_name_multi_dot_suffix() {
        assert_eq!(
            chunk_file_name(Path::new("src/x.d.ts"), ".d.ts", 1),
            "x_part_1.d.ts"
        );
    }

    #[test]
    fn test_chunk_file_name_without_suffix() {
        assert_eq!(chunk_file_name(Path::new("Makefile"), "", 1), "Makefile_part_1");
        assert_eq!(
            chunk_file_name(Path::new("notes.txt"), ".py", 1),
            "notes.txt_part_1"
        );
    }

    #[test]
    fn test_source_suffix() {
        assert_eq!(source_suffix(Path::new("a/big.py")), ".py");
        assert_eq!(source_suffix(Path::new("a/x.d.ts")), ".ts");
        assert_eq!(source_suffix(Path::new(".py")), ".py");
        assert_eq!(source_suffix(Path::new("Makefile")), "");
    }

    #[test]
    fn test_mirror_dir_nested() {
        let dir = mirror_dir(
            Path::new("/in/sub/dir/foo.py"),
            Path::new("/in"),
            Path::new("/out"),
        )
        .unwrap();
        assert_eq!(dir, PathBuf::from("/out/sub/dir"));
    }

    #[test]
    fn test_mirror_dir_top_level() {
        let dir = mirror_dir(Path::new("/in/foo.py"), Path::new("/in"), Path::new("/out")).unwrap();
        assert_eq!(dir, PathBuf::from("/out"));
    }

    #[test]
    fn test_mirror_dir_outside_root() {
        let err = mirror_dir(
            Path::new("/elsewhere/foo.py"),
            Path::new("/in"),
            Path::new("/out"),
        )
        .unwrap_err();
        assert!(matches!(err, SplitError::OutsideRoot { .. }));
    }
}
