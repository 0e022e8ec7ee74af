//! Behaviour tests for deriving scaffold configuration from answers.

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::{Cell, RefCell};
use tslib_scaffold::error::AnswerError;
use tslib_scaffold::{
    AdvancedAnswers, BasicAnswers, DerivedConfig, FilePlan, OutDir, ProjectName, derive,
};

#[derive(Default)]
struct World {
    name: RefCell<String>,
    out_dir: RefCell<String>,
    git_init: Cell<bool>,
    advanced: RefCell<Option<AdvancedAnswers>>,
    config: RefCell<Option<DerivedConfig>>,
    plan: RefCell<Option<FilePlan>>,
    rejection: RefCell<Option<AnswerError>>,
}

impl World {
    fn basic_answers(&self) -> Result<BasicAnswers, AnswerError> {
        Ok(BasicAnswers {
            name: ProjectName::new(&self.name.borrow())?,
            out_dir: OutDir::new(&self.out_dir.borrow())?,
            git_init: self.git_init.get(),
            advanced_mode: self.advanced.borrow().is_some(),
        })
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

#[given("the project name is {name}")]
fn given_project_name(world: &World, name: String) {
    world.name.replace(name);
}

#[given("the output directory is {out_dir}")]
fn given_out_dir(world: &World, out_dir: String) {
    world.out_dir.replace(out_dir);
}

#[given("git initialisation is enabled")]
fn given_git_enabled(world: &World) {
    world.git_init.set(true);
}

#[given("git initialisation is disabled")]
fn given_git_disabled(world: &World) {
    world.git_init.set(false);
}

#[given("advanced mode enables only jest")]
fn given_only_jest(world: &World) {
    world.advanced.replace(Some(AdvancedAnswers {
        use_jest: true,
        use_eslint: false,
        use_prettier: false,
        ..AdvancedAnswers::default()
    }));
}

#[when("the configuration is derived")]
fn when_derived(world: &World) {
    let basic = world.basic_answers().expect("answers should be valid");
    let advanced = (*world.advanced.borrow()).unwrap_or_default();
    let config = derive(&basic, &advanced);
    let plan = FilePlan::from_config(&config).expect("plan should render");
    world.config.replace(Some(config));
    world.plan.replace(Some(plan));
}

#[when("the answers are validated")]
fn when_validated(world: &World) {
    world.rejection.replace(world.basic_answers().err());
}

fn with_config<T>(world: &World, check: impl FnOnce(&DerivedConfig) -> T) -> T {
    let config = world.config.borrow();
    check(config.as_ref().expect("configuration not derived"))
}

fn with_plan<T>(world: &World, check: impl FnOnce(&FilePlan) -> T) -> T {
    let plan = world.plan.borrow();
    check(plan.as_ref().expect("plan not built"))
}

#[then("the package name is {expected}")]
fn then_package_name(world: &World, expected: String) {
    with_config(world, |config| assert_eq!(config.package_name, expected));
}

#[then("the prepare script is {expected}")]
fn then_prepare_script(world: &World, expected: String) {
    with_config(world, |config| assert_eq!(config.scripts().prepare, expected));
}

#[then("the install packages are {expected}")]
fn then_install_packages(world: &World, expected: String) {
    with_config(world, |config| {
        assert_eq!(config.install_packages().join(" "), expected);
    });
}

#[then("the plan contains {path}")]
fn then_plan_contains(world: &World, path: String) {
    with_plan(world, |plan| {
        assert!(plan.get(path.as_str()).is_some(), "{path} missing from plan");
    });
}

#[then("the plan does not contain {path}")]
fn then_plan_lacks(world: &World, path: String) {
    with_plan(world, |plan| {
        assert!(plan.get(path.as_str()).is_none(), "{path} unexpectedly planned");
    });
}

#[then("the manifest has no repository")]
fn then_no_repository(world: &World) {
    with_config(world, |config| assert!(config.manifest.repository.is_none()));
}

#[then("the answers are rejected")]
fn then_rejected(world: &World) {
    assert!(matches!(
        *world.rejection.borrow(),
        Some(AnswerError::OutDirEscapesRoot { .. })
    ));
}

#[scenario(path = "tests/features/derivation.feature", index = 0)]
fn scenario_default_answers(world: World) {
    let _ = world;
}

#[scenario(path = "tests/features/derivation.feature", index = 1)]
fn scenario_jest_only(world: World) {
    let _ = world;
}

#[scenario(path = "tests/features/derivation.feature", index = 2)]
fn scenario_git_declined(world: World) {
    let _ = world;
}

#[scenario(path = "tests/features/derivation.feature", index = 3)]
fn scenario_out_dir_outside_project(world: World) {
    let _ = world;
}
