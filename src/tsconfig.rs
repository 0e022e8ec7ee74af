//! The generated `tsconfig.json`.

use crate::answers::ModuleFormat;
use serde::Serialize;

/// Compiler target written to every scaffold.
pub const TARGET: &str = "ES6";

/// Globs compiled by the project.
pub const INCLUDE: [&str; 2] = ["src/**/*", "tests/**/*"];

/// Globs excluded from compilation.
pub const EXCLUDE: [&str; 2] = ["node_modules", "**/__tests__/*"];

/// The `compilerOptions` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    /// ECMAScript target.
    pub target: &'static str,
    /// Emitted module system.
    pub module: ModuleFormat,
    /// Whether `.d.ts` files are emitted.
    pub declaration: bool,
    /// Output directory.
    pub out_dir: String,
    /// Whether CommonJS/ES module interop helpers are emitted.
    pub es_module_interop: bool,
    /// Whether strict type checking is enabled.
    pub strict: bool,
}

/// The whole compiler configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerConfig {
    /// Compiler options.
    pub compiler_options: CompilerOptions,
    /// Included globs.
    pub include: [&'static str; 2],
    /// Excluded globs.
    pub exclude: [&'static str; 2],
}

impl CompilerConfig {
    /// Build the compiler configuration for a scaffold.
    ///
    /// # Examples
    ///
    /// ```
    /// use tslib_scaffold::answers::ModuleFormat;
    /// use tslib_scaffold::tsconfig::CompilerConfig;
    ///
    /// let config = CompilerConfig::new(ModuleFormat::Es6, false, "lib");
    /// assert_eq!(config.compiler_options.out_dir, "lib");
    /// assert!(!config.compiler_options.strict);
    /// ```
    #[must_use]
    pub fn new(module: ModuleFormat, strict: bool, out_dir: &str) -> Self {
        Self {
            compiler_options: CompilerOptions {
                target: TARGET,
                module,
                declaration: true,
                out_dir: out_dir.to_owned(),
                es_module_interop: true,
                strict,
            },
            include: INCLUDE,
            exclude: EXCLUDE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_with_camel_case_keys() {
        let config = CompilerConfig::new(ModuleFormat::CommonJs, true, "dist");
        let json = serde_json::to_string(&config).expect("serialise tsconfig");
        assert_eq!(
            json,
            concat!(
                r#"{"compilerOptions":{"target":"ES6","module":"CommonJS","declaration":true,"#,
                r#""outDir":"dist","esModuleInterop":true,"strict":true},"#,
                r#""include":["src/**/*","tests/**/*"],"exclude":["node_modules","**/__tests__/*"]}"#,
            )
        );
    }
}
