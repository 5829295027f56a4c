//! Scaffold Service - writes the embedded template to disk.
//!
//! The five creation operations mirror the template's grouping: directory
//! structure, configuration, source stubs, documentation, and repository
//! metadata. Each is idempotent, touches a path set disjoint from the
//! others, and returns the root-relative paths it created so the caller can
//! print one progress line per path.
//!
//! Every directory and file must exist before the repository initializer
//! runs, so the first commit captures the full template.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{ProjectSpec, TemplateFile, template},
    error::ForgeResult,
};

/// Writes the fixed project template through the [`Filesystem`] port.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Run all five creation operations in order, returning every created
    /// path. Filesystem failures abort immediately; nothing is rolled back
    /// (re-running overwrites).
    #[instrument(skip_all, fields(project = %spec.name(), root = %spec.root().display()))]
    pub fn scaffold(&self, spec: &ProjectSpec) -> ForgeResult<Vec<String>> {
        let root = spec.root();
        let name = spec.name().as_str();

        let mut created = self.create_structure(root)?;
        created.extend(self.create_config_files(root)?);
        created.extend(self.create_source_files(root)?);
        created.extend(self.create_docs(root, name)?);
        created.extend(self.create_meta_files(root, name)?);

        info!(paths = created.len(), "Scaffold completed");
        Ok(created)
    }

    /// Create the project root and the fixed directory skeleton.
    pub fn create_structure(&self, root: &Path) -> ForgeResult<Vec<String>> {
        self.filesystem.create_dir_all(root)?;

        let mut created = Vec::with_capacity(template::DIRECTORIES.len());
        for dir in template::DIRECTORIES {
            self.filesystem.create_dir_all(&root.join(dir))?;
            created.push((*dir).to_string());
        }
        Ok(created)
    }

    /// Write the model and logging configuration files.
    pub fn create_config_files(&self, root: &Path) -> ForgeResult<Vec<String>> {
        self.write_files(root, &template::config_files())
    }

    /// Write the Python source stubs and the entry point.
    pub fn create_source_files(&self, root: &Path) -> ForgeResult<Vec<String>> {
        self.write_files(root, &template::source_files())
    }

    /// Write `docs/README.md` and `docs/SETUP.md`.
    pub fn create_docs(&self, root: &Path, project_name: &str) -> ForgeResult<Vec<String>> {
        self.write_files(root, &template::doc_files(project_name))
    }

    /// Write `.gitignore`, the dependency manifests, and `.env.example`.
    pub fn create_meta_files(&self, root: &Path, project_name: &str) -> ForgeResult<Vec<String>> {
        self.write_files(root, &template::meta_files(project_name))
    }

    fn write_files(&self, root: &Path, files: &[TemplateFile]) -> ForgeResult<Vec<String>> {
        let mut created = Vec::with_capacity(files.len());

        for file in files {
            let path = root.join(file.path);
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, &file.content)?;
            created.push(file.path.to_string());
        }

        Ok(created)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
