use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct VaultConfig {
    /// Directory names to ignore anywhere in the path.
    pub ignore_dirs: Vec<String>,
    /// File extensions (without dot) that are considered notes.
    pub note_extensions: Vec<String>,
    /// Relative paths containing this substring are treated as temp files.
    pub temp_marker: String,
    /// Subdirectory for captured notes (relative to vault root). Read by
    /// capture tooling, not by the core itself.
    pub inbox_dir: Option<PathBuf>,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            ignore_dirs: vec![".trash".into()],
            note_extensions: vec!["md".into()],
            temp_marker: "~".into(),
            inbox_dir: None,
        }
    }
}
