//! File plan construction.
//!
//! A [`FilePlan`] is the ordered list of artifacts a scaffold writes. It is
//! built from a [`DerivedConfig`] plus fixed templates and nothing else, so
//! two plans built from equal configurations are byte-identical.

use crate::derivation::DerivedConfig;
use crate::error::PlanError;
use crate::tooling::ignore_list;
use camino::{Utf8Path, Utf8PathBuf};
use log::trace;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::collections::HashSet;
use std::fmt;

/// Every file a plan can contain, whatever the answers.
pub const GENERATED_FILES: [&str; 9] = [
    "package.json",
    "tsconfig.json",
    ".gitignore",
    ".prettierrc",
    ".eslintrc",
    ".eslintignore",
    "jestconfig.json",
    "tests/test.ts",
    "src/index.ts",
];

/// Contents of the generated source stub.
pub const INDEX_STUB: &str = r#"console.log("Hello world!");"#;

/// How a plan entry is materialised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A JSON document.
    Json,
    /// A plain text file.
    Text,
    /// An empty directory.
    Directory,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Directory => "directory",
        })
    }
}

/// One artifact to write, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    /// Path relative to the project root.
    pub path: Utf8PathBuf,
    /// Entry kind.
    pub kind: EntryKind,
    /// File contents; empty for directories.
    pub contents: String,
}

impl PlanEntry {
    /// A JSON or text file entry.
    #[must_use]
    pub fn file(path: impl Into<Utf8PathBuf>, kind: EntryKind, contents: String) -> Self {
        Self {
            path: path.into(),
            kind,
            contents,
        }
    }

    /// A directory entry.
    #[must_use]
    pub fn directory(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
            contents: String::new(),
        }
    }

    /// Returns true if this entry is a directory.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Ordered artifacts for one scaffold.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilePlan {
    entries: Vec<PlanEntry>,
}

impl FilePlan {
    /// Build the plan for a derived configuration.
    ///
    /// Entries follow a fixed order: manifest, compiler config, ignore and
    /// tool configs, the test directory, the output directory and finally
    /// the source stub.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Render`] if a JSON artifact cannot be serialised.
    ///
    /// # Examples
    ///
    /// ```
    /// use tslib_scaffold::answers::{AdvancedAnswers, BasicAnswers, OutDir, ProjectName};
    /// use tslib_scaffold::derivation::derive;
    /// use tslib_scaffold::plan::FilePlan;
    ///
    /// let basic = BasicAnswers {
    ///     name: ProjectName::new("demo")?,
    ///     out_dir: OutDir::default(),
    ///     git_init: true,
    ///     advanced_mode: false,
    /// };
    /// let plan = FilePlan::from_config(&derive(&basic, &AdvancedAnswers::default()))?;
    ///
    /// assert_eq!(plan.entries()[0].path, "package.json");
    /// assert!(plan.get(".gitignore").is_some());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_config(config: &DerivedConfig) -> Result<Self, PlanError> {
        let out_dir = config.normalized_out_dir.as_str();
        let mut entries = vec![
            PlanEntry::file(
                "package.json",
                EntryKind::Json,
                render_json("package.json", &config.manifest)?,
            ),
            PlanEntry::file(
                "tsconfig.json",
                EntryKind::Json,
                render_json("tsconfig.json", &config.compiler)?,
            ),
        ];

        if config.git_init {
            entries.push(PlanEntry::file(
                ".gitignore",
                EntryKind::Text,
                ignore_list(out_dir),
            ));
        }
        if let Some(prettier) = &config.prettier {
            entries.push(PlanEntry::file(
                ".prettierrc",
                EntryKind::Json,
                render_json(".prettierrc", prettier)?,
            ));
        }
        if let Some(eslint) = &config.eslint {
            entries.push(PlanEntry::file(
                ".eslintrc",
                EntryKind::Json,
                render_json(".eslintrc", eslint)?,
            ));
            entries.push(PlanEntry::file(
                ".eslintignore",
                EntryKind::Text,
                ignore_list(out_dir),
            ));
        }
        if let Some(jest) = &config.jest {
            entries.push(PlanEntry::file(
                "jestconfig.json",
                EntryKind::Json,
                render_json("jestconfig.json", jest)?,
            ));
            push_directory(&mut entries, "tests");
            entries.push(PlanEntry::file("tests/test.ts", EntryKind::Text, String::new()));
        }

        push_directory(&mut entries, out_dir);
        push_directory(&mut entries, "src");
        entries.push(PlanEntry::file(
            "src/index.ts",
            EntryKind::Text,
            INDEX_STUB.to_owned(),
        ));

        trace!("planned {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Wrap entries that were assembled by hand, as tests and tools do.
    ///
    /// The order is not checked here; see [`Self::verify_order`].
    #[must_use]
    pub fn from_entries(entries: Vec<PlanEntry>) -> Self {
        Self { entries }
    }

    /// Entries in materialisation order.
    #[must_use]
    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    /// Look up an entry by its relative path.
    #[must_use]
    pub fn get(&self, path: impl AsRef<Utf8Path>) -> Option<&PlanEntry> {
        let path = path.as_ref();
        self.entries.iter().find(|entry| entry.path == path)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the plan has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check that every file's parent directory is the project root or a
    /// directory entry listed before it, and that no path repeats.
    ///
    /// Directory entries may be nested; their missing ancestors are created
    /// along with them.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::ParentNotPlanned`] or [`PlanError::DuplicateEntry`].
    pub fn verify_order(&self) -> Result<(), PlanError> {
        let mut seen: HashSet<&Utf8Path> = HashSet::new();
        let mut directories: HashSet<&Utf8Path> = HashSet::new();

        for entry in &self.entries {
            if !seen.insert(entry.path.as_path()) {
                return Err(PlanError::DuplicateEntry {
                    path: entry.path.clone(),
                });
            }
            if entry.is_directory() {
                directories.extend(entry.path.ancestors().filter(|a| !a.as_str().is_empty()));
                continue;
            }
            let parent = entry
                .path
                .parent()
                .filter(|parent| !parent.as_str().is_empty());
            if let Some(parent) = parent {
                if !directories.contains(parent) {
                    return Err(PlanError::ParentNotPlanned {
                        path: entry.path.clone(),
                        parent: parent.to_owned(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Add a directory entry unless the same directory is already planned, as
/// happens when the output directory is `src` or `tests`.
fn push_directory(entries: &mut Vec<PlanEntry>, path: &str) {
    if entries.iter().any(|entry| entry.is_directory() && entry.path == path) {
        return;
    }
    entries.push(PlanEntry::directory(path));
}

impl<'a> IntoIterator for &'a FilePlan {
    type Item = &'a PlanEntry;
    type IntoIter = std::slice::Iter<'a, PlanEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Render a value as tab-indented JSON without a trailing newline.
///
/// # Errors
///
/// Returns [`PlanError::Render`] naming `file` if serialisation fails.
pub fn render_json<T: Serialize>(file: &'static str, value: &T) -> Result<String, PlanError> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"\t"));
    value
        .serialize(&mut serializer)
        .map_err(|source| PlanError::Render { file, source })?;
    // serde_json only emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
