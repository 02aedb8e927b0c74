use crate::models::{BugsDocument, UsersDocument};
use crate::utils::error::AppError;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const USERS_FILE: &str = "users.json";
const BUGS_FILE: &str = "bugs.json";

/// File-backed datastore: one pretty-printed JSON document per collection.
///
/// Every operation works at whole-document granularity — load the full file,
/// mutate in memory, rewrite the full file. There is no locking: concurrent
/// load/mutate/save sequences can lose updates (last writer wins). Accepted
/// limitation at this scale.
#[derive(Clone)]
pub struct JsonStore {
    users_path: PathBuf,
    bugs_path: PathBuf,
}

impl JsonStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            users_path: data_dir.join(USERS_FILE),
            bugs_path: data_dir.join(BUGS_FILE),
        }
    }

    /// Creates the data directory and both document files if absent, each
    /// initialized to an empty-collection wrapper. Existing files are left
    /// untouched. Called once at startup.
    pub fn ensure_files(&self) -> Result<(), AppError> {
        if let Some(dir) = self.users_path.parent() {
            fs::create_dir_all(dir)?;
        }

        if !self.users_path.exists() {
            log::info!("   📄 Creating {}", self.users_path.display());
            self.save_document(&self.users_path, &UsersDocument::default())?;
        }
        if !self.bugs_path.exists() {
            log::info!("   📄 Creating {}", self.bugs_path.display());
            self.save_document(&self.bugs_path, &BugsDocument::default())?;
        }

        Ok(())
    }

    pub fn load_users(&self) -> Result<UsersDocument, AppError> {
        self.load_document(&self.users_path)
    }

    pub fn save_users(&self, document: &UsersDocument) -> Result<(), AppError> {
        self.save_document(&self.users_path, document)
    }

    pub fn load_bugs(&self) -> Result<BugsDocument, AppError> {
        self.load_document(&self.bugs_path)
    }

    pub fn save_bugs(&self, document: &BugsDocument) -> Result<(), AppError> {
        self.save_document(&self.bugs_path, document)
    }

    fn load_document<T: DeserializeOwned>(&self, path: &Path) -> Result<T, AppError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save_document<T: Serialize>(&self, path: &Path, document: &T) -> Result<(), AppError> {
        let content = serde_json::to_string_pretty(document)?;
        fs::write(path, content)?;
        Ok(())
    }
}
