//! Configuration derivation.
//!
//! [`derive`] maps a pair of answer sets to every artifact the scaffold
//! writes. Each optional tool is applied by its own step, in the fixed order
//! test runner, linter, formatter, so dependency order and the `prepare`
//! pipeline order always agree. The function is pure: equal inputs produce
//! equal outputs.

use crate::answers::{AdvancedAnswers, BasicAnswers};
use crate::manifest::{PackageManifest, Scripts};
use crate::tooling::{EslintConfig, JestConfig, PrettierConfig};
use crate::tsconfig::CompilerConfig;
use log::debug;

/// First step of every build pipeline, and the `build` script.
pub const COMPILER_STEP: &str = "tsc";

/// Pipeline step appended when ESLint is enabled.
pub const LINT_STEP: &str = "npm run lint";

/// Pipeline step appended when Prettier is enabled.
pub const FORMAT_STEP: &str = "npm run format";

/// Separator joining pipeline steps into the `prepare` script.
pub const PIPELINE_SEPARATOR: &str = " && ";

/// `scripts.test` when Jest is enabled.
pub const TEST_SCRIPT: &str = "jest --config jestconfig.json";

/// `scripts.lint` when ESLint is enabled.
pub const LINT_SCRIPT: &str = "eslint . --ext .ts";

/// A development dependency group, installed in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DevDependency {
    /// The TypeScript compiler.
    Compiler,
    /// Jest.
    TestRunner,
    /// ESLint and its TypeScript parser and plugin.
    LintToolchain,
    /// Prettier.
    Formatter,
}

impl DevDependency {
    /// Package identifiers passed to the package manager.
    ///
    /// # Examples
    ///
    /// ```
    /// use tslib_scaffold::derivation::DevDependency;
    ///
    /// assert_eq!(DevDependency::Compiler.packages(), ["typescript"]);
    /// assert_eq!(DevDependency::LintToolchain.packages().len(), 3);
    /// ```
    #[must_use]
    pub const fn packages(self) -> &'static [&'static str] {
        match self {
            Self::Compiler => &["typescript"],
            Self::TestRunner => &["jest"],
            Self::LintToolchain => &[
                "eslint",
                "@typescript-eslint/parser",
                "@typescript-eslint/eslint-plugin",
            ],
            Self::Formatter => &["prettier"],
        }
    }
}

/// Everything derived from one set of answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedConfig {
    /// Output directory with forward slashes and no trailing slash.
    pub normalized_out_dir: String,
    /// Manifest-safe package name.
    pub package_name: String,
    /// Whether git is initialised after installation.
    pub git_init: bool,
    /// Dependency groups in installation order.
    pub dev_dependencies: Vec<DevDependency>,
    /// Build pipeline steps in execution order.
    pub build_pipeline_steps: Vec<&'static str>,
    /// `package.json`.
    pub manifest: PackageManifest,
    /// `tsconfig.json`.
    pub compiler: CompilerConfig,
    /// `.prettierrc`, when enabled.
    pub prettier: Option<PrettierConfig>,
    /// `.eslintrc`, when enabled.
    pub eslint: Option<EslintConfig>,
    /// `jestconfig.json`, when enabled.
    pub jest: Option<JestConfig>,
}

impl DerivedConfig {
    /// Script table of the manifest.
    #[must_use]
    pub fn scripts(&self) -> &Scripts {
        &self.manifest.scripts
    }

    /// Flattened package identifiers in installation order.
    #[must_use]
    pub fn install_packages(&self) -> Vec<&'static str> {
        self.dev_dependencies
            .iter()
            .flat_map(|dependency| dependency.packages().iter().copied())
            .collect()
    }
}

/// Normalise an output directory: backslashes become forward slashes and
/// trailing slashes are removed.
///
/// # Examples
///
/// ```
/// use tslib_scaffold::derivation::normalize_out_dir;
///
/// assert_eq!(normalize_out_dir("build/"), "build");
/// assert_eq!(normalize_out_dir("a\\b\\"), "a/b");
/// ```
#[must_use]
pub fn normalize_out_dir(raw: &str) -> String {
    raw.replace('\\', "/").trim_end_matches('/').to_owned()
}

/// Turn a project name into a manifest name: each whitespace character
/// becomes a hyphen and the result is lower-cased.
///
/// # Examples
///
/// ```
/// use tslib_scaffold::derivation::package_name;
///
/// assert_eq!(package_name("My Cool Lib"), "my-cool-lib");
/// ```
#[must_use]
pub fn package_name(name: &str) -> String {
    name.replace(char::is_whitespace, "-").to_lowercase()
}

/// `scripts.format` for the given output directory.
#[must_use]
pub fn format_script(out_dir: &str) -> String {
    format!(r#"prettier --write "{out_dir}/**/*.ts" "{out_dir}/**/*.js""#)
}

/// Accumulates dependency groups, pipeline steps and optional scripts while
/// the tool steps are applied.
#[derive(Debug)]
struct Draft<'a> {
    out_dir: &'a str,
    dev_dependencies: Vec<DevDependency>,
    steps: Vec<&'static str>,
    test: Option<String>,
    lint: Option<String>,
    format: Option<String>,
}

impl<'a> Draft<'a> {
    fn new(out_dir: &'a str) -> Self {
        Self {
            out_dir,
            dev_dependencies: vec![DevDependency::Compiler],
            steps: vec![COMPILER_STEP],
            test: None,
            lint: None,
            format: None,
        }
    }

    fn apply_test_runner(&mut self, enabled: bool) {
        if !enabled {
            return;
        }
        self.dev_dependencies.push(DevDependency::TestRunner);
        self.test = Some(TEST_SCRIPT.to_owned());
    }

    fn apply_linter(&mut self, enabled: bool) {
        if !enabled {
            return;
        }
        self.dev_dependencies.push(DevDependency::LintToolchain);
        self.lint = Some(LINT_SCRIPT.to_owned());
        self.steps.push(LINT_STEP);
    }

    fn apply_formatter(&mut self, enabled: bool) {
        if !enabled {
            return;
        }
        self.dev_dependencies.push(DevDependency::Formatter);
        self.format = Some(format_script(self.out_dir));
        self.steps.push(FORMAT_STEP);
    }

    fn scripts(&self) -> Scripts {
        Scripts {
            build: COMPILER_STEP.to_owned(),
            prepare: self.steps.join(PIPELINE_SEPARATOR),
            test: self.test.clone(),
            lint: self.lint.clone(),
            format: self.format.clone(),
        }
    }
}

/// Derive the full scaffold configuration from validated answers.
///
/// # Examples
///
/// ```
/// use tslib_scaffold::answers::{AdvancedAnswers, BasicAnswers, OutDir, ProjectName};
/// use tslib_scaffold::derivation::derive;
///
/// let basic = BasicAnswers {
///     name: ProjectName::new("My Lib")?,
///     out_dir: OutDir::new("build/")?,
///     git_init: false,
///     advanced_mode: false,
/// };
/// let config = derive(&basic, &AdvancedAnswers::default());
///
/// assert_eq!(config.package_name, "my-lib");
/// assert_eq!(config.normalized_out_dir, "build");
/// assert_eq!(config.scripts().prepare, "tsc && npm run lint && npm run format");
/// # Ok::<(), tslib_scaffold::error::AnswerError>(())
/// ```
#[must_use]
pub fn derive(basic: &BasicAnswers, advanced: &AdvancedAnswers) -> DerivedConfig {
    let normalized_out_dir = normalize_out_dir(basic.out_dir.as_str());
    let package_name = package_name(basic.name.as_str());

    let mut draft = Draft::new(&normalized_out_dir);
    draft.apply_test_runner(advanced.use_jest);
    draft.apply_linter(advanced.use_eslint);
    draft.apply_formatter(advanced.use_prettier);
    let scripts = draft.scripts();
    let Draft {
        dev_dependencies,
        steps,
        ..
    } = draft;

    let manifest = PackageManifest::new(
        package_name.clone(),
        &normalized_out_dir,
        scripts,
        basic.git_init,
    );
    let compiler = CompilerConfig::new(
        advanced.module_format,
        advanced.strict,
        &normalized_out_dir,
    );

    debug!(
        "derived {package_name}: out_dir={normalized_out_dir}, dependencies={dev_dependencies:?}, pipeline={steps:?}"
    );

    DerivedConfig {
        package_name,
        git_init: basic.git_init,
        dev_dependencies,
        build_pipeline_steps: steps,
        manifest,
        compiler,
        prettier: advanced.use_prettier.then(PrettierConfig::default),
        eslint: advanced.use_eslint.then(EslintConfig::default),
        jest: advanced.use_jest.then(JestConfig::default),
        normalized_out_dir,
    }
}

#[cfg(test)]
#[path = "derivation_tests.rs"]
mod tests;
