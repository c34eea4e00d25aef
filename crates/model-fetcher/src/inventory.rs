//! Final on-disk inventory
//!
//! After the run, the inventory walks the models directory and reports the
//! weight files actually present, grouped by subdirectory with sizes. It
//! reflects disk state only; there is no manifest or provenance record, so
//! a missing entry is the only trace a failed artifact leaves here.

use std::path::Path;

use common::error::Result;
use common::utils::format_bytes;

/// Extensions counted as model weight files
const WEIGHT_EXTENSIONS: [&str; 3] = ["safetensors", "bin", "pt"];

/// One file in the inventory
#[derive(Debug, Clone)]
pub struct InventoryEntry {
    /// Filename
    pub name: String,

    /// Size in bytes
    pub size: u64,
}

/// Weight files in one subdirectory
#[derive(Debug, Clone)]
pub struct SubdirInventory {
    /// Subdirectory name
    pub name: String,

    /// Files sorted by name
    pub entries: Vec<InventoryEntry>,
}

/// Inventory of a models directory
#[derive(Debug, Clone)]
pub struct Inventory {
    /// Non-empty subdirectories sorted by name
    pub subdirs: Vec<SubdirInventory>,
}

impl Inventory {
    /// Scans a models directory
    ///
    /// Subdirectories with no weight files are omitted. A missing models
    /// directory scans as empty; nothing was fetched.
    pub fn scan(models_dir: &Path) -> Result<Self> {
        let mut subdirs = Vec::new();

        if !models_dir.is_dir() {
            return Ok(Self { subdirs });
        }

        for entry in std::fs::read_dir(models_dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            let mut entries = Vec::new();
            for file in std::fs::read_dir(&path)? {
                let file = file?;
                let file_path = file.path();
                let is_weight = file_path
                    .extension()
                    .and_then(|e| e.to_str())
                    .map(|e| WEIGHT_EXTENSIONS.contains(&e))
                    .unwrap_or(false);
                if !file_path.is_file() || !is_weight {
                    continue;
                }
                entries.push(InventoryEntry {
                    name: file.file_name().to_string_lossy().to_string(),
                    size: file.metadata()?.len(),
                });
            }

            if entries.is_empty() {
                continue;
            }
            entries.sort_by(|a, b| a.name.cmp(&b.name));
            subdirs.push(SubdirInventory {
                name: entry.file_name().to_string_lossy().to_string(),
                entries,
            });
        }

        subdirs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Self { subdirs })
    }

    /// Returns true if a file is listed under a subdirectory
    pub fn contains(&self, subdir: &str, file_name: &str) -> bool {
        self.subdirs
            .iter()
            .find(|s| s.name == subdir)
            .map(|s| s.entries.iter().any(|e| e.name == file_name))
            .unwrap_or(false)
    }

    /// Renders the inventory for the end-of-run printout
    pub fn render(&self) -> String {
        let mut out = String::new();
        for subdir in &self.subdirs {
            out.push_str(&format!("\n  {}/\n", subdir.name));
            for entry in &subdir.entries {
                out.push_str(&format!(
                    "    {:60}  {:>9}\n",
                    entry.name,
                    format_bytes(entry.size)
                ));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path, len: usize) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, vec![0u8; len]).unwrap();
    }

    #[test]
    fn scan_groups_weight_files_by_subdir() {
        let root = tempfile::tempdir().unwrap();
        touch(&root.path().join("vae/flux2-vae.safetensors"), 100);
        touch(&root.path().join("vae/sdxl_vae.safetensors"), 50);
        touch(&root.path().join("checkpoints/sd15.safetensors"), 10);

        let inventory = Inventory::scan(root.path()).unwrap();

        let names: Vec<&str> = inventory.subdirs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["checkpoints", "vae"]);
        assert!(inventory.contains("vae", "flux2-vae.safetensors"));
        assert_eq!(inventory.subdirs[1].entries[0].name, "flux2-vae.safetensors");
        assert_eq!(inventory.subdirs[1].entries[0].size, 100);
    }

    #[test]
    fn scan_ignores_non_weight_files_and_empty_subdirs() {
        let root = tempfile::tempdir().unwrap();
        touch(&root.path().join("vae/readme.txt"), 5);
        touch(&root.path().join("vae/model.safetensors.part"), 5);
        std::fs::create_dir_all(root.path().join("diffusion_models")).unwrap();

        let inventory = Inventory::scan(root.path()).unwrap();

        assert!(inventory.subdirs.is_empty());
    }

    #[test]
    fn missing_models_dir_scans_as_empty() {
        let root = tempfile::tempdir().unwrap();
        let inventory = Inventory::scan(&root.path().join("nope")).unwrap();
        assert!(inventory.subdirs.is_empty());
    }

    #[test]
    fn render_lists_files_with_sizes() {
        let root = tempfile::tempdir().unwrap();
        touch(&root.path().join("checkpoints/sd15.safetensors"), 2048);

        let rendered = Inventory::scan(root.path()).unwrap().render();

        assert!(rendered.contains("checkpoints/"));
        assert!(rendered.contains("sd15.safetensors"));
        assert!(rendered.contains("2.0 KiB"));
    }
}
