//! Built-in skip heuristics
//!
//! Applied after the rule file: well-known build and VCS directories are
//! never descended into, binary and junk files are never inlined, and the
//! tool's own artifacts are always left out of their own report.

use std::fs::File;
use std::path::Path;

use crate::config::TreecatConfig;

/// Directory names that are skipped regardless of the rule file, grouped by
/// what generates them.
#[derive(Debug)]
pub struct SkipDirectories {
    /// Version control metadata
    pub vcs: &'static [&'static str],
    /// Dependency trees fetched by package managers
    pub dependencies: &'static [&'static str],
    /// Build and bundler output
    pub build: &'static [&'static str],
    /// Language-level caches
    pub caches: &'static [&'static str],
    /// Editor and IDE state
    pub ide: &'static [&'static str],
}

impl SkipDirectories {
    fn default() -> Self {
        Self {
            vcs: &[".git", ".svn", ".hg"],
            dependencies: &["node_modules", "vendor"],
            build: &["target", "build", "dist", "bin", "obj", ".next"],
            caches: &["__pycache__"],
            ide: &[".idea", ".vscode"],
        }
    }

    fn contains(&self, name: &str) -> bool {
        self.vcs.contains(&name)
            || self.dependencies.contains(&name)
            || self.build.contains(&name)
            || self.caches.contains(&name)
            || self.ide.contains(&name)
    }
}

/// File extensions (lowercased, with leading dot) whose contents are never
/// inlined: executables, archives, images, databases, logs, locks.
const SKIP_EXTENSIONS: &[&str] = &[
    ".exe", ".dll", ".so", ".dylib", ".bin", ".obj", ".class", ".pyc", ".pdb", ".cache", ".jpg",
    ".jpeg", ".png", ".gif", ".ico", ".pdf", ".zip", ".tar", ".gz", ".rar", ".7z", ".db",
    ".sqlite", ".mdb", ".iso", ".img", ".log", ".lock",
];

/// File names that carry no report value.
const SKIP_FILES: &[&str] = &[
    ".DS_Store",
    "Thumbs.db",
    "desktop.ini",
    ".gitignore",
    ".env",
    ".env.local",
];

/// Combined skip decision for a single walk.
#[derive(Debug)]
pub struct EntryFilter {
    directories: SkipDirectories,
    extra_directories: Vec<String>,
    extra_extensions: Vec<String>,
    /// The configured output and rule file names, skipped whatever they are.
    own_artifacts: Vec<String>,
    max_file_size: u64,
}

impl EntryFilter {
    pub fn from_config(config: &TreecatConfig) -> Self {
        Self {
            directories: SkipDirectories::default(),
            extra_directories: config.filter.extra_skip_dirs.clone(),
            extra_extensions: config
                .filter
                .extra_skip_extensions
                .iter()
                .map(|ext| normalize_extension(ext))
                .collect(),
            own_artifacts: vec![
                config.report.output_file.clone(),
                config.report.rule_file.clone(),
            ],
            max_file_size: config.filter.max_file_size_mb * 1024 * 1024,
        }
    }

    /// Should this directory be pruned from the walk?
    pub fn skips_directory(&self, name: &str) -> bool {
        self.directories.contains(name) || self.extra_directories.iter().any(|d| d == name)
    }

    /// Should this file be left out of the report?
    pub fn skips_file(&self, name: &str, size: u64) -> bool {
        if SKIP_FILES.contains(&name) || self.own_artifacts.iter().any(|a| a == name) {
            return true;
        }

        if size > self.max_file_size {
            return true;
        }

        let ext = extension_of(name);
        SKIP_EXTENSIONS.contains(&ext.as_str()) || self.extra_extensions.contains(&ext)
    }

    /// Probe whether the file can actually be opened for reading. Files
    /// failing the probe are skipped, not reported as errors.
    pub fn is_readable(path: &Path) -> bool {
        File::open(path).is_ok()
    }
}

/// Lowercased extension including the dot, or an empty string.
fn extension_of(name: &str) -> String {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name[idx..].to_lowercase(),
        _ => String::new(),
    }
}

fn normalize_extension(ext: &str) -> String {
    let ext = ext.to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> EntryFilter {
        EntryFilter::from_config(&TreecatConfig::default())
    }

    #[test]
    fn test_skips_known_directories() {
        let filter = filter();
        assert!(filter.skips_directory(".git"));
        assert!(filter.skips_directory("node_modules"));
        assert!(filter.skips_directory("target"));
        assert!(filter.skips_directory("__pycache__"));
        assert!(!filter.skips_directory("src"));
        assert!(!filter.skips_directory("docs"));
    }

    #[test]
    fn test_skips_binary_extensions() {
        let filter = filter();
        assert!(filter.skips_file("photo.PNG", 10));
        assert!(filter.skips_file("app.exe", 10));
        assert!(filter.skips_file("Cargo.lock", 10));
        assert!(!filter.skips_file("main.rs", 10));
        assert!(!filter.skips_file("README.md", 10));
    }

    #[test]
    fn test_skips_junk_and_own_artifacts() {
        let filter = filter();
        assert!(filter.skips_file(".DS_Store", 10));
        assert!(filter.skips_file(".env", 10));
        assert!(filter.skips_file("project_structure.txt", 10));
        assert!(filter.skips_file(".treecatignore", 10));
    }

    #[test]
    fn test_skips_oversized_files() {
        let filter = filter();
        let limit = 50 * 1024 * 1024;
        assert!(!filter.skips_file("big.txt", limit));
        assert!(filter.skips_file("big.txt", limit + 1));
    }

    #[test]
    fn test_dotfile_without_extension() {
        // A leading dot is not an extension separator.
        assert_eq!(extension_of(".bashrc"), "");
        assert_eq!(extension_of("archive.tar.gz"), ".gz");
        assert_eq!(extension_of("plain"), "");
    }

    #[test]
    fn test_config_extras() {
        let mut config = TreecatConfig::default();
        config.filter.extra_skip_dirs.push("generated".to_string());
        config.filter.extra_skip_extensions.push("wasm".to_string());

        let filter = EntryFilter::from_config(&config);
        assert!(filter.skips_directory("generated"));
        assert!(filter.skips_file("module.wasm", 10));
    }
}
