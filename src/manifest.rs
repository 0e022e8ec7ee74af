//! The generated `package.json`.
//!
//! Field order in these structs is the key order of the written file.

use serde::{Deserialize, Serialize};

/// Version written to a freshly scaffolded manifest.
pub const INITIAL_VERSION: &str = "1.0.0";

/// License written to a freshly scaffolded manifest.
pub const DEFAULT_LICENSE: &str = "ISC";

/// Script entries of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scripts {
    /// Compiler invocation.
    pub build: String,
    /// `&&`-joined build pipeline run by the package manager on install.
    pub prepare: String,
    /// Test runner invocation, when Jest is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<String>,
    /// Linter invocation, when ESLint is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lint: Option<String>,
    /// Formatter invocation, when Prettier is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Scripts {
    /// Look up a script by its manifest key.
    ///
    /// # Examples
    ///
    /// ```
    /// use tslib_scaffold::manifest::Scripts;
    ///
    /// let scripts = Scripts {
    ///     build: "tsc".to_owned(),
    ///     prepare: "tsc".to_owned(),
    ///     test: None,
    ///     lint: Some("eslint . --ext .ts".to_owned()),
    ///     format: None,
    /// };
    /// assert_eq!(scripts.get("lint"), Some("eslint . --ext .ts"));
    /// assert_eq!(scripts.get("test"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "build" => Some(&self.build),
            "prepare" => Some(&self.prepare),
            "test" => self.test.as_deref(),
            "lint" => self.lint.as_deref(),
            "format" => self.format.as_deref(),
            _ => None,
        }
    }
}

/// Version-control block added when git is initialised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Always `git`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Left empty for the user to fill in.
    pub url: String,
}

impl Repository {
    /// A git repository with no remote URL yet.
    #[must_use]
    pub fn empty_git() -> Self {
        Self {
            kind: "git".to_owned(),
            url: String::new(),
        }
    }
}

/// The package manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManifest {
    /// Package name, already normalised.
    pub name: String,
    /// Package version.
    pub version: String,
    /// Package description.
    pub description: String,
    /// Compiled entry point.
    pub main: String,
    /// Declaration entry point.
    pub types: String,
    /// Script table.
    pub scripts: Scripts,
    /// Globs of files to publish.
    pub files: Vec<String>,
    /// Package author.
    pub author: String,
    /// Package license.
    pub license: String,
    /// Repository block, present only when git is initialised.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<Repository>,
}

impl PackageManifest {
    /// Build a manifest whose entry points and published files live under
    /// `out_dir`.
    #[must_use]
    pub fn new(package_name: String, out_dir: &str, scripts: Scripts, git_init: bool) -> Self {
        Self {
            name: package_name,
            version: INITIAL_VERSION.to_owned(),
            description: String::new(),
            main: format!("{out_dir}/index.js"),
            types: format!("{out_dir}/index.d.ts"),
            scripts,
            files: vec![format!("{out_dir}/**/*")],
            author: String::new(),
            license: DEFAULT_LICENSE.to_owned(),
            repository: git_init.then(Repository::empty_git),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn scripts() -> Scripts {
        Scripts {
            build: "tsc".to_owned(),
            prepare: "tsc".to_owned(),
            test: None,
            lint: None,
            format: None,
        }
    }

    #[rstest]
    fn paths_are_rooted_at_out_dir(scripts: Scripts) {
        let manifest = PackageManifest::new("lib".to_owned(), "build/out", scripts, false);
        assert_eq!(manifest.main, "build/out/index.js");
        assert_eq!(manifest.types, "build/out/index.d.ts");
        assert_eq!(manifest.files, vec!["build/out/**/*"]);
    }

    #[rstest]
    #[case::with_git(true, true)]
    #[case::without_git(false, false)]
    fn repository_follows_git_choice(scripts: Scripts, #[case] git: bool, #[case] expected: bool) {
        let manifest = PackageManifest::new("lib".to_owned(), "dist", scripts, git);
        assert_eq!(manifest.repository.is_some(), expected);
    }

    #[rstest]
    fn absent_scripts_are_not_serialised(scripts: Scripts) {
        let json = serde_json::to_string(&scripts).expect("serialise scripts");
        assert_eq!(json, r#"{"build":"tsc","prepare":"tsc"}"#);
    }

    #[test]
    fn repository_serialises_type_key() {
        let json = serde_json::to_string(&Repository::empty_git()).expect("serialise repository");
        assert_eq!(json, r#"{"type":"git","url":""}"#);
    }
}
