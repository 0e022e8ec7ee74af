//! Tests for scaffold pipeline orchestration.

use super::*;
use crate::error::EXIT_ANSWERS;
use crate::prompt::FileAnswers;
use crate::test_utils::{
    ExpectedCall, RecordingReporter, ScriptedAnswers, StubExecutor, failure_output,
    success_output,
};
use rstest::{fixture, rstest};
use tempfile::TempDir;
use tslib_scaffold::config::AnswersFile;
use tslib_scaffold::error::AnswerError;
use tslib_scaffold::{AdvancedAnswers, BasicAnswers, OutDir, ProjectName};

struct Project {
    _dir: TempDir,
    options: RunOptions,
}

#[fixture]
fn project() -> Project {
    let dir = TempDir::new().expect("create temp dir");
    let root = Utf8PathBuf::from_path_buf(dir.path().to_owned()).expect("temp dir is UTF-8");
    Project {
        _dir: dir,
        options: RunOptions {
            root,
            dry_run: false,
            skip_install: false,
            quiet: true,
        },
    }
}

fn answers(git_init: bool) -> ScriptedAnswers {
    ScriptedAnswers::new(
        BasicAnswers {
            name: ProjectName::new("My Cool Lib").expect("valid name"),
            out_dir: OutDir::default(),
            git_init,
            advanced_mode: false,
        },
        AdvancedAnswers::default(),
    )
}

const DEFAULT_INSTALL: [&str; 7] = [
    "i",
    "--save-dev",
    "typescript",
    "eslint",
    "@typescript-eslint/parser",
    "@typescript-eslint/eslint-plugin",
    "prettier",
];

fn run(
    options: &RunOptions,
    source: &mut ScriptedAnswers,
    executor: &StubExecutor,
    reporter: &mut RecordingReporter,
) -> Result<Outcome> {
    scaffold(
        options,
        Collaborators {
            answers: source,
            executor,
            reporter,
        },
    )
}

#[rstest]
fn creates_project_and_installs(project: Project) {
    let executor = StubExecutor::new(vec![
        ExpectedCall {
            cmd: "npm",
            args: DEFAULT_INSTALL.to_vec(),
            result: Ok(success_output()),
        },
        ExpectedCall {
            cmd: "git",
            args: vec!["init"],
            result: Ok(success_output()),
        },
    ]);
    let mut reporter = RecordingReporter::default();

    let outcome = run(&project.options, &mut answers(true), &executor, &mut reporter)
        .expect("scaffold succeeds");

    assert_eq!(outcome, Outcome::Created);
    assert!(executor.is_finished());
    assert!(project.options.root.join("package.json").is_file());
    assert!(project.options.root.join(".gitignore").is_file());
    assert!(project.options.root.join("dist").is_dir());
    assert_eq!(
        reporter.lines,
        vec![
            "success: > Files created.",
            "success: [Success] Project created successfully. Happy coding!",
        ]
    );
}

#[rstest]
fn non_empty_directory_stops_before_prompts(project: Project) {
    std::fs::write(project.options.root.join("README.md"), "x").expect("seed file");
    let mut source = answers(true);
    let mut reporter = RecordingReporter::default();

    let err = run(
        &project.options,
        &mut source,
        &StubExecutor::idle(),
        &mut reporter,
    )
    .expect_err("precondition fails");

    assert!(matches!(err, ScaffoldError::PreconditionFailed { entries: 1, .. }));
    assert!(!source.basic_asked());
    assert!(!source.advanced_asked());
    assert!(!project.options.root.join("package.json").exists());
    assert!(reporter.lines.is_empty());
}

#[rstest]
#[case::manifest("package.json")]
#[case::source_stub("src/index.ts")]
#[case::under_source_stub("src/index.ts/x")]
fn out_dir_on_a_generated_file_fails_before_writing(project: Project, #[case] out_dir: &str) {
    let file = AnswersFile::parse(&format!("name = \"lib\"\nout_dir = \"{out_dir}\""))
        .expect("parse answers");
    let mut source = FileAnswers::from_file(file);
    let mut reporter = RecordingReporter::default();

    let err = scaffold(
        &project.options,
        Collaborators {
            answers: &mut source,
            executor: &StubExecutor::idle(),
            reporter: &mut reporter,
        },
    )
    .expect_err("colliding out dir rejected");

    assert!(matches!(
        err,
        ScaffoldError::Answers(AnswerError::OutDirCollides { .. })
    ));
    assert_eq!(err.exit_code(), EXIT_ANSWERS);
    let written = std::fs::read_dir(&project.options.root)
        .expect("project dir readable")
        .count();
    assert_eq!(written, 0);
}

#[rstest]
fn install_failure_skips_git_and_success_message(project: Project) {
    let executor = StubExecutor::new(vec![ExpectedCall {
        cmd: "npm",
        args: DEFAULT_INSTALL.to_vec(),
        result: Ok(failure_output("npm ERR! 404")),
    }]);
    let mut reporter = RecordingReporter::default();

    let err = run(&project.options, &mut answers(true), &executor, &mut reporter)
        .expect_err("install fails");

    assert!(matches!(err, ScaffoldError::InstallFailed { tool: "npm", .. }));
    assert_eq!(executor.received().len(), 1);
    assert!(reporter.contains("success: > Files created."));
    assert!(!reporter.contains("success: [Success] Project created successfully. Happy coding!"));
    assert!(project.options.root.join("src/index.ts").is_file());
}

#[rstest]
fn skip_install_runs_no_commands(mut project: Project) {
    project.options.skip_install = true;
    let executor = StubExecutor::idle();
    let mut reporter = RecordingReporter::default();

    let outcome = run(&project.options, &mut answers(true), &executor, &mut reporter)
        .expect("scaffold succeeds");

    assert_eq!(outcome, Outcome::CreatedWithoutInstall);
    assert!(executor.received().is_empty());
    assert!(project.options.root.join("tsconfig.json").is_file());
}

#[rstest]
fn dry_run_writes_nothing(mut project: Project) {
    project.options.dry_run = true;
    let executor = StubExecutor::idle();
    let mut reporter = RecordingReporter::default();

    let outcome = run(&project.options, &mut answers(false), &executor, &mut reporter)
        .expect("dry run succeeds");

    assert_eq!(outcome, Outcome::DryRun);
    assert!(executor.received().is_empty());
    assert!(
        std::fs::read_dir(&project.options.root)
            .expect("list root")
            .next()
            .is_none()
    );
    assert!(reporter.contains(
        "info: Install: npm i --save-dev typescript eslint @typescript-eslint/parser @typescript-eslint/eslint-plugin prettier"
    ));
}

#[rstest]
fn default_answers_skip_advanced_questions(mut project: Project) {
    project.options.skip_install = true;
    let mut source = answers(false);

    run(
        &project.options,
        &mut source,
        &StubExecutor::idle(),
        &mut RecordingReporter::default(),
    )
    .expect("scaffold succeeds");

    assert!(!source.advanced_asked());
}

#[rstest]
#[case::install(
    ScaffoldError::InstallFailed { tool: "npm", message: "ERR!".to_owned() },
    vec![
        "error: Error when installing dependencies !",
        "info: npm exited unsuccessfully: ERR!",
    ]
)]
#[case::precondition(
    ScaffoldError::PreconditionFailed { path: Utf8PathBuf::from("/work"), entries: 2 },
    vec!["error: Folder \"/work\" is not empty !"]
)]
fn failures_are_reported_by_kind(#[case] err: ScaffoldError, #[case] expected: Vec<&str>) {
    let mut reporter = RecordingReporter::default();
    report_failure(&mut reporter, &err);
    assert_eq!(reporter.lines, expected);
}
