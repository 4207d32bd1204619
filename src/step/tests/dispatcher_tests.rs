//! Unit tests for scenario dispatch.

use std::sync::Arc;

use rstest::{fixture, rstest};
use tracing_test::traced_test;

use crate::starter::register_starter_steps;
use crate::step::{
    adapters::memory::InMemoryStepRegistry,
    domain::{
        AssertionFailure, Scenario, ScenarioFailure, ScenarioReport, ScenarioStatus, ScenarioStep,
        StepDefinition, StepKind, StepStatus, ensure_eq,
    },
    ports::StepRegistry,
    services::{DispatchConfig, StepDispatcher},
};

/// Context that counts how many handlers ran.
#[derive(Debug, Default)]
struct Counter {
    calls: usize,
}

type TestDispatcher = StepDispatcher<InMemoryStepRegistry<Counter>, Counter>;

fn counted(kind: StepKind, name: &str, pattern: &str) -> StepDefinition<Counter> {
    StepDefinition::new(kind, name, |counter: &mut Counter, _| {
        counter.calls += 1;
        Ok(())
    })
    .with_pattern(pattern)
}

fn build_registry() -> InMemoryStepRegistry<Counter> {
    let mut registry = InMemoryStepRegistry::new();
    register_starter_steps(&mut registry).expect("starter steps should register");
    registry
        .register(counted(StepKind::Then, "tally", "the tally is kept"))
        .expect("tally step should register");
    registry
        .register(
            StepDefinition::new(StepKind::Then, "first_tally", |counter: &mut Counter, _| {
                ensure_eq(&counter.calls, &0_usize)?;
                counter.calls += 1;
                Ok(())
            })
            .with_pattern("the tally starts at zero"),
        )
        .expect("first tally step should register");
    registry
        .register(
            StepDefinition::new(StepKind::Then, "explode", |_: &mut Counter, _| {
                panic!("kettle boiled dry")
            })
            .with_pattern("the kettle explodes"),
        )
        .expect("panicking step should register");
    registry
}

fn dispatcher_with(config: DispatchConfig) -> TestDispatcher {
    StepDispatcher::new(Arc::new(build_registry()), config)
}

#[fixture]
fn dispatcher() -> TestDispatcher {
    dispatcher_with(DispatchConfig::default())
}

fn successful_scenario() -> Scenario {
    Scenario::from_lines(
        "successful",
        [
            "Given we have behave installed",
            "When we implement a successful test",
            "Then we will see the result",
        ],
    )
    .expect("lines should parse")
}

fn failing_scenario() -> Scenario {
    Scenario::from_lines(
        "failing",
        [
            "Given we have (behave) installed",
            "When we implement a [failing] test",
            "Then we will *see* the result",
        ],
    )
    .expect("lines should parse")
}

fn statuses(report: &ScenarioReport) -> Vec<&'static str> {
    report
        .steps()
        .iter()
        .map(|step| step.status.as_str())
        .collect()
}

#[rstest]
fn successful_scenario_passes_every_step(dispatcher: TestDispatcher) {
    let report = dispatcher.run(&successful_scenario());

    assert_eq!(statuses(&report), vec!["passed", "passed", "passed"]);
    assert_eq!(report.status(), ScenarioStatus::Passed);
    let handlers: Vec<_> = report
        .steps()
        .iter()
        .map(|step| step.handler.as_deref())
        .collect();
    assert_eq!(
        handlers,
        vec![
            Some("behave_installed"),
            Some("implement_test"),
            Some("see_result")
        ]
    );
}

#[rstest]
fn failing_action_skips_the_outcome(dispatcher: TestDispatcher) {
    let report = dispatcher.run(&failing_scenario());

    assert_eq!(statuses(&report), vec!["passed", "failed", "skipped"]);
    assert_eq!(report.status(), ScenarioStatus::Failed);
    let failure = report
        .steps()
        .get(1)
        .and_then(|step| step.failure())
        .expect("action step should carry the failure");
    assert!(failure.message().contains("[failing]"));
}

#[rstest]
fn failed_scenario_converts_into_error(dispatcher: TestDispatcher) {
    let error = dispatcher
        .run(&failing_scenario())
        .into_result()
        .expect_err("scenario should fail");

    assert!(matches!(
        error,
        ScenarioFailure::StepFailed { ref step, .. }
            if step == "When we implement a [failing] test"
    ));
}

#[rstest]
fn undefined_step_halts_scenario(dispatcher: TestDispatcher) {
    let scenario = Scenario::from_lines(
        "undefined",
        [
            "Given we have python installed",
            "Then the tally is kept",
            "Then nobody wrote this step",
        ],
    )
    .expect("lines should parse");

    let mut counter = Counter::default();
    let report = dispatcher.run_with_context(&scenario, &mut counter);

    assert_eq!(statuses(&report), vec!["undefined", "skipped", "undefined"]);
    assert_eq!(report.status(), ScenarioStatus::Undefined);
    assert_eq!(counter.calls, 0);
    assert!(matches!(
        report.into_result(),
        Err(ScenarioFailure::UndefinedStep { .. })
    ));
}

#[rstest]
fn handler_panic_becomes_assertion_failure(dispatcher: TestDispatcher) {
    let step = ScenarioStep::new(StepKind::Then, "the kettle explodes");

    let report = dispatcher.dispatch_step(&mut Counter::default(), &step);

    assert_eq!(
        report.status,
        StepStatus::Failed {
            failure: AssertionFailure::new("kettle boiled dry"),
        }
    );
}

#[rstest]
fn context_is_shared_across_steps(dispatcher: TestDispatcher) {
    let scenario = Scenario::new("tally")
        .with_step(StepKind::Given, "we have behave installed")
        .with_step(StepKind::Then, "the tally is kept")
        .with_step(StepKind::Then, "the tally is kept");

    let mut counter = Counter::default();
    let report = dispatcher.run_with_context(&scenario, &mut counter);

    assert!(report.is_passed());
    assert_eq!(counter.calls, 2);
}

#[rstest]
fn continue_after_failure_runs_remaining_steps() {
    let dispatcher = dispatcher_with(DispatchConfig::continue_after_failure());
    let scenario = failing_scenario().with_step(StepKind::Then, "the tally is kept");

    let mut counter = Counter::default();
    let report = dispatcher.run_with_context(&scenario, &mut counter);

    assert_eq!(
        statuses(&report),
        vec!["passed", "failed", "passed", "passed"]
    );
    assert_eq!(report.status(), ScenarioStatus::Failed);
    assert_eq!(counter.calls, 1);
}

#[rstest]
fn dry_run_resolves_without_invoking() {
    let dispatcher = dispatcher_with(DispatchConfig::dry_run());
    let scenario = failing_scenario()
        .with_step(StepKind::Then, "the tally is kept")
        .with_step(StepKind::Then, "nobody wrote this step")
        .with_step(StepKind::Then, "the kettle explodes");

    let mut counter = Counter::default();
    let report = dispatcher.run_with_context(&scenario, &mut counter);

    assert_eq!(
        statuses(&report),
        vec![
            "untested",
            "untested",
            "untested",
            "untested",
            "undefined",
            "untested"
        ]
    );
    assert_eq!(report.status(), ScenarioStatus::Undefined);
    assert_eq!(counter.calls, 0);
}

#[rstest]
fn dry_run_of_defined_scenario_is_untested() {
    let dispatcher = dispatcher_with(DispatchConfig::dry_run());

    let report = dispatcher.run(&successful_scenario());

    assert_eq!(report.status(), ScenarioStatus::Untested);
    assert!(report.into_result().is_ok());
}

#[rstest]
fn each_run_gets_a_fresh_context(dispatcher: TestDispatcher) {
    let scenario = Scenario::new("fresh").with_step(StepKind::Then, "the tally starts at zero");

    let first = dispatcher.run(&scenario);
    let second = dispatcher.run(&scenario);

    assert!(first.is_passed());
    assert!(second.is_passed());
}

#[rstest]
fn reused_context_keeps_earlier_state(dispatcher: TestDispatcher) {
    let scenario = Scenario::new("reused").with_step(StepKind::Then, "the tally starts at zero");
    let mut counter = Counter::default();

    let first = dispatcher.run_with_context(&scenario, &mut counter);
    let second = dispatcher.run_with_context(&scenario, &mut counter);

    assert!(first.is_passed());
    assert_eq!(second.status(), ScenarioStatus::Failed);
    assert_eq!(counter.calls, 1);
}

#[rstest]
fn dispatcher_exposes_registry_and_config() {
    let dispatcher = dispatcher_with(DispatchConfig::continue_after_failure());

    let names: Vec<_> = dispatcher
        .registry()
        .definitions()
        .iter()
        .map(|definition| definition.name().to_owned())
        .collect();

    assert_eq!(
        names,
        vec![
            "behave_installed",
            "implement_test",
            "see_result",
            "tally",
            "first_tally",
            "explode"
        ]
    );
    assert_eq!(dispatcher.config(), DispatchConfig::continue_after_failure());
    assert!(dispatcher.clone().config().continue_after_failed_step);
}

#[rstest]
fn empty_scenario_passes(dispatcher: TestDispatcher) {
    let report = dispatcher.run(&Scenario::new("empty"));

    assert!(report.steps().is_empty());
    assert!(report.is_passed());
}

#[rstest]
#[traced_test]
fn undefined_step_is_logged(dispatcher: TestDispatcher) {
    let step = ScenarioStep::new(StepKind::When, "we forget to write a step");

    let report = dispatcher.dispatch_step(&mut Counter::default(), &step);

    assert_eq!(report.status, StepStatus::Undefined);
    assert!(logs_contain("undefined step"));
    assert!(logs_contain("we forget to write a step"));
}
