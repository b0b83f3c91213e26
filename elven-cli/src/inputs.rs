//! Local input file resolution.
//!
//! Inputs live at `{input_dir}/{year}/day{DD}.txt`; a single file override
//! takes precedence when the run targets exactly one year/day.

use crate::error::InputError;
use std::path::{Path, PathBuf};

pub struct InputStore {
    input_dir: PathBuf,
    override_file: Option<PathBuf>,
}

impl InputStore {
    pub fn new(input_dir: PathBuf, override_file: Option<PathBuf>) -> Self {
        Self {
            input_dir,
            override_file,
        }
    }

    /// Resolved path for a year/day input
    pub fn path(&self, year: u16, day: u8) -> PathBuf {
        match &self.override_file {
            Some(file) => file.clone(),
            None => self
                .input_dir
                .join(year.to_string())
                .join(format!("day{:02}.txt", day)),
        }
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.path(year, day).is_file()
    }

    /// Read the input for a year/day
    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.path(year, day);
        if !path.is_file() {
            return Err(InputError::Missing { year, day, path });
        }
        Ok(std::fs::read_to_string(&path)?)
    }
}

/// Expand a leading ~ to the home directory
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(home) = dirs::home_dir()
    {
        if path_str == "~" {
            return home;
        }
        if let Some(rest) = path_str.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn resolves_year_day_layout() {
        let store = InputStore::new(PathBuf::from("inputs"), None);
        assert_eq!(
            store.path(2023, 7),
            PathBuf::from("inputs/2023/day07.txt")
        );
    }

    #[test]
    fn reads_stored_input() {
        let dir = tempfile::tempdir().unwrap();
        let year_dir = dir.path().join("2023");
        fs::create_dir_all(&year_dir).unwrap();
        fs::write(year_dir.join("day01.txt"), "1abc2\n").unwrap();

        let store = InputStore::new(dir.path().to_path_buf(), None);
        assert!(store.contains(2023, 1));
        assert_eq!(store.read(2023, 1).unwrap(), "1abc2\n");
    }

    #[test]
    fn missing_input_is_distinct_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = InputStore::new(dir.path().to_path_buf(), None);
        assert!(!store.contains(2023, 1));
        assert!(matches!(
            store.read(2023, 1),
            Err(InputError::Missing { year: 2023, day: 1, .. })
        ));
    }

    #[test]
    fn tilde_expansion() {
        assert_eq!(
            expand_tilde(Path::new("plain/dir")),
            PathBuf::from("plain/dir")
        );
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~")), home);
            assert_eq!(expand_tilde(Path::new("~/inputs")), home.join("inputs"));
        }
    }

    #[test]
    fn override_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("custom.txt");
        fs::write(&file, "custom input").unwrap();

        let store = InputStore::new(PathBuf::from("inputs"), Some(file.clone()));
        assert_eq!(store.path(2023, 1), file);
        assert_eq!(store.read(2023, 1).unwrap(), "custom input");
    }
}
