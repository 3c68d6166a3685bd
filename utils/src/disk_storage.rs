//! Utilities for storing a struct in a TOML file on the disk.
//! The struct should implement Serialize and Deserialize from serde.

use std::{fmt::Debug, fs, path::Path, path::PathBuf};

use directories::BaseDirs;
use serde::{de::DeserializeOwned, Serialize};

/// Name of the directory under the home directory holding folio's files.
pub const APP_DIR: &str = ".folio";

pub fn app_dir() -> crate::Result<PathBuf> {
    let dirs = BaseDirs::new().ok_or(crate::Error::BaseDirsFailed)?;
    Ok(dirs.home_dir().join(APP_DIR))
}

pub trait DiskStorageInterface
where
    Self: Sized + Debug + Default + Serialize + DeserializeOwned,
{
    const FILE_NAME: &'static str;

    /// Get the path to the file
    fn path() -> crate::Result<PathBuf> {
        Ok(app_dir()?.join(Self::FILE_NAME).with_extension("toml"))
    }

    /// Load the content from the file if it exists otherwise return the default value
    fn load() -> crate::Result<Self> {
        Self::load_from(&Self::path()?)
    }

    fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| crate::Error::FileReadFailed(path.to_path_buf(), e))?;

            toml::from_str(&content)
                .map_err(|e| crate::Error::TomlParsingFailed(path.to_path_buf(), e))
        } else {
            Ok(Self::default())
        }
    }

    /// Save content to a file, creating the directories and file as necessary
    fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::path()?)
    }

    fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| crate::Error::CreateDirAllFailed(parent.to_path_buf(), e))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::TomlFormattingFailed(format!("{self:?}"), e))?;

        fs::write(path, content).map_err(|e| crate::Error::FileWriteFailed(path.to_path_buf(), e))?;

        Ok(())
    }
}
