use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_file(dir: &TempDir, name: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(b"placeholder")?;
    Ok(file_path)
}

pub fn create_test_dir(dir: &TempDir, name: &str) -> Result<PathBuf> {
    let dir_path = dir.path().join(name);
    fs::create_dir_all(&dir_path)?;
    Ok(dir_path)
}

pub fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(&dir, "setup_romex.exe")?;
    create_test_dir(&dir, "data/primocache_cache")?;
    create_test_file(&dir, "readme.txt")?;
    create_test_file(&dir, "nested/deeper/notes.doc")?;
    create_test_file(&dir, "nested/deeper/L2Cache.sys")?;
    create_test_file(&dir, ".hidden_romex")?;

    Ok(dir)
}
