use std::fs;
use std::io;
use std::path::Path;

/// Replace `dir` with a fresh empty directory.
///
/// Removes the directory and everything under it if it exists, then
/// recreates it including any missing parent directories. The caller owns
/// the directory afterwards.
pub fn reset_dir(dir: &Path) -> io::Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// List all file names (not paths) in a directory.
/// Only returns regular files, not subdirectories.
pub fn list_files(dir: &Path) -> io::Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;

        if file_type.is_file() {
            if let Some(name) = entry.file_name().to_str() {
                files.push(name.to_string());
            }
        }
    }

    files.sort();
    Ok(files)
}
