use std::path::Path;

/// String form of a path used in history records and ignore checks
///
/// No normalization happens here: the same file reached through a different
/// root spelling (`.` vs an absolute path) yields a different key.
pub fn path_key(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Whether two paths refer to the same existing file
///
/// Falls back to plain comparison when either side cannot be canonicalized
/// (for example a history file that has not been written yet).
pub fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
