//! Roster store: captured source lists and the working form.
//!
//! The store stands in for the back office's data layer: it holds one
//! snapshot of the lists the REST API returned, plus the form being
//! edited. All I/O goes through the ports on [`ServiceContext`].
//!
//! ```text
//! <root>/
//!   ├── roster.yaml   (or roster.json)
//!   └── form.yaml
//! ```

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::context::ServiceContext;
use crate::linkage::{LinkageEngine, LinkageInputs, UnresolvedAgentPolicy};
use crate::model::{Agent, CurrentUser, Form, LoadingFlags, Manager, Property};

const ROSTER_YAML: &str = "roster.yaml";
const ROSTER_JSON: &str = "roster.json";
const FORM_YAML: &str = "form.yaml";

/// Store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Neither `roster.yaml` nor `roster.json` exists under the root.
    #[error("no roster found in {}", .0.display())]
    MissingRoster(PathBuf),
    /// A file could not be read.
    #[error("failed to read {}: {reason}", path.display())]
    Read {
        /// File path.
        path: PathBuf,
        /// Underlying error message.
        reason: String,
    },
    /// A file could not be parsed.
    #[error("failed to parse {}: {reason}", path.display())]
    Parse {
        /// File path.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },
    /// A value could not be serialized or written.
    #[error("failed to write {}: {reason}", path.display())]
    Write {
        /// File path.
        path: PathBuf,
        /// Underlying error message.
        reason: String,
    },
}

/// One capture of the lists the back office serves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    /// When the lists were fetched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_at: Option<DateTime<Utc>>,
    /// The user operating the form.
    pub user: CurrentUser,
    /// Property list.
    #[serde(default)]
    pub properties: Vec<Property>,
    /// Agent list.
    #[serde(default)]
    pub agents: Vec<Agent>,
    /// Manager list.
    #[serde(default)]
    pub managers: Vec<Manager>,
    /// Fetch state at capture time.
    #[serde(default)]
    pub loading: LoadingFlags,
}

impl Roster {
    /// Builds a linkage engine over this roster.
    #[must_use]
    pub fn engine(&self, policy: UnresolvedAgentPolicy) -> LinkageEngine {
        LinkageEngine::new(&LinkageInputs {
            properties: &self.properties,
            agents: &self.agents,
            managers: &self.managers,
            user: &self.user,
            loading: self.loading,
        })
        .with_policy(policy)
    }
}

/// The working form with its last save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedForm {
    /// Form fields.
    pub form: Form,
    /// When the form was last written.
    pub saved_at: DateTime<Utc>,
}

/// Persistence for the roster snapshot and the working form.
pub struct RosterStore<'a> {
    ctx: &'a ServiceContext,
    root: PathBuf,
}

impl<'a> RosterStore<'a> {
    /// Creates a store rooted at the given path.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, root: &Path) -> Self {
        Self { ctx, root: root.to_path_buf() }
    }

    /// Root directory of the store.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loads the roster, preferring `roster.yaml` over `roster.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if no roster exists or it cannot be read or parsed.
    pub fn load_roster(&self) -> Result<Roster, StoreError> {
        let yaml = self.root.join(ROSTER_YAML);
        if self.ctx.fs.exists(&yaml) {
            let contents = self.read(&yaml)?;
            return serde_yaml::from_str(&contents)
                .map_err(|e| StoreError::Parse { path: yaml, reason: e.to_string() });
        }

        let json = self.root.join(ROSTER_JSON);
        if self.ctx.fs.exists(&json) {
            let contents = self.read(&json)?;
            return serde_json::from_str(&contents)
                .map_err(|e| StoreError::Parse { path: json, reason: e.to_string() });
        }

        Err(StoreError::MissingRoster(self.root.clone()))
    }

    /// Saves the roster as `roster.yaml`. Used by [`RosterStore::import_roster`].
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save_roster(&self, roster: &Roster) -> Result<(), StoreError> {
        let path = self.root.join(ROSTER_YAML);
        let yaml = serde_yaml::to_string(roster)
            .map_err(|e| StoreError::Write { path: path.clone(), reason: e.to_string() })?;
        self.write(&path, &yaml)
    }

    /// Copies a roster exported from the back office into the store.
    ///
    /// `.json` sources are read as JSON, anything else as YAML. A roster
    /// without `captured_at` is stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or parsed, or the
    /// roster cannot be saved.
    pub fn import_roster(&self, source: &Path) -> Result<Roster, StoreError> {
        let contents = self.read(source)?;
        let is_json = source.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let parsed = if is_json {
            serde_json::from_str::<Roster>(&contents).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str::<Roster>(&contents).map_err(|e| e.to_string())
        };
        let mut roster =
            parsed.map_err(|reason| StoreError::Parse { path: source.to_path_buf(), reason })?;
        roster.captured_at.get_or_insert_with(|| self.ctx.clock.now());

        self.save_roster(&roster)?;
        tracing::debug!(source = %source.display(), "roster imported");
        Ok(roster)
    }

    /// Loads the saved form, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if `form.yaml` exists but cannot be read or parsed.
    pub fn load_saved_form(&self) -> Result<Option<SavedForm>, StoreError> {
        let path = self.form_path();
        if !self.ctx.fs.exists(&path) {
            return Ok(None);
        }
        let contents = self.read(&path)?;
        serde_yaml::from_str(&contents)
            .map(Some)
            .map_err(|e| StoreError::Parse { path, reason: e.to_string() })
    }

    /// Loads the working form; an unsaved form is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if `form.yaml` exists but cannot be read or parsed.
    pub fn load_form(&self) -> Result<Form, StoreError> {
        Ok(self.load_saved_form()?.map(|saved| saved.form).unwrap_or_default())
    }

    /// Saves the working form stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save_form(&self, form: &Form) -> Result<SavedForm, StoreError> {
        let path = self.form_path();
        let saved = SavedForm { form: form.clone(), saved_at: self.ctx.clock.now() };
        let yaml = serde_yaml::to_string(&saved)
            .map_err(|e| StoreError::Write { path: path.clone(), reason: e.to_string() })?;
        self.write(&path, &yaml)?;
        tracing::debug!(path = %path.display(), "form saved");
        Ok(saved)
    }

    /// Deletes the saved form.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear_form(&self) -> Result<(), StoreError> {
        let path = self.form_path();
        self.ctx
            .fs
            .remove(&path)
            .map_err(|e| StoreError::Write { path, reason: e.to_string() })
    }

    fn read(&self, path: &Path) -> Result<String, StoreError> {
        self.ctx
            .fs
            .read_to_string(path)
            .map_err(|e| StoreError::Read { path: path.to_path_buf(), reason: e.to_string() })
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), StoreError> {
        self.ctx
            .fs
            .write(path, contents)
            .map_err(|e| StoreError::Write { path: path.to_path_buf(), reason: e.to_string() })
    }

    fn form_path(&self) -> PathBuf {
        self.root.join(FORM_YAML)
    }
}
