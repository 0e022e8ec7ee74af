//! Fixed templates for the optional formatter, linter and test runner.
//!
//! None of these depend on the answers beyond the flag that enables them.

use serde::Serialize;
use std::collections::BTreeMap;

/// `.prettierrc` contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrettierConfig {
    /// Line width before wrapping.
    pub print_width: u32,
    /// Trailing comma policy.
    pub trailing_comma: &'static str,
    /// Whether single quotes are preferred.
    pub single_quote: bool,
}

impl Default for PrettierConfig {
    fn default() -> Self {
        Self {
            print_width: 120,
            trailing_comma: "all",
            single_quote: true,
        }
    }
}

/// `.eslintrc` contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EslintConfig {
    /// Stops ESLint looking in parent directories.
    pub root: bool,
    /// TypeScript-aware parser.
    pub parser: &'static str,
    /// Loaded plugins.
    pub plugins: Vec<&'static str>,
    /// Shared configurations.
    pub extends: Vec<&'static str>,
}

impl Default for EslintConfig {
    fn default() -> Self {
        Self {
            root: true,
            parser: "@typescript-eslint/parser",
            plugins: vec!["@typescript-eslint"],
            extends: vec![
                "eslint:recommended",
                "plugin:@typescript-eslint/eslint-recommended",
                "plugin:@typescript-eslint/recommended",
            ],
        }
    }
}

/// `jestconfig.json` contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JestConfig {
    /// File pattern to transformer.
    pub transform: BTreeMap<&'static str, &'static str>,
    /// Pattern matching test files.
    pub test_regex: &'static str,
    /// Extensions Jest resolves.
    pub module_file_extensions: Vec<&'static str>,
}

impl Default for JestConfig {
    fn default() -> Self {
        Self {
            transform: BTreeMap::from([(r"^.+\.(t|j)sx?$", "ts-jest")]),
            test_regex: r"(/__tests__/.*|(\.|/)(test|spec))\.(jsx?|tsx?)$",
            module_file_extensions: vec!["ts", "tsx", "js", "jsx", "json", "node"],
        }
    }
}

/// Contents shared by `.gitignore` and `.eslintignore`.
///
/// # Examples
///
/// ```
/// assert_eq!(tslib_scaffold::tooling::ignore_list("dist"), "node_modules\ndist");
/// ```
#[must_use]
pub fn ignore_list(out_dir: &str) -> String {
    format!("node_modules\n{out_dir}")
}
