//! End-to-end tests for the recreate pipeline.
//!
//! A fake daemon records every call so the tests can check:
//! 1. Step order (load, stop, remove, pull, confirm, run)
//! 2. The synthesized command handed to `run`
//! 3. That a failing step ends the pipeline with its own error
//! 4. That declining or dry-running never launches anything
//! 5. The events reported to the sink

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::cell::RefCell;
use std::rc::Rc;

use drun_common::error::{DrunError, Result};
use drun_common::types::ImageRef;
use drun_core::command::RunCommand;
use drun_runtime::backend::ContainerDaemon;
use drun_runtime::engine::{Engine, Outcome};
use drun_runtime::event::{EventSink, PipelineEvent, Severity};

const APP_INSPECT: &str = r#"[{
    "Id": "9c1d",
    "Name": "/app",
    "Config": {
        "Image": "app:latest",
        "Cmd": ["serve"],
        "Env": ["PATH=/usr/bin", "KEY=1"]
    },
    "HostConfig": {
        "Binds": ["/data:/data"],
        "PortBindings": {"80/tcp": [{"HostIp": "", "HostPort": "8080"}]},
        "RestartPolicy": {"Name": "always", "MaximumRetryCount": 0},
        "NetworkMode": "default",
        "Privileged": false,
        "PublishAllPorts": false
    }
}]"#;

const APP_TOKENS: [&str; 13] = [
    "-d", "--name", "app", "--restart", "always", "-v", "/data:/data", "-p", "8080:80/tcp", "-e",
    "KEY=1", "app:latest", "serve",
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Step {
    Inspect,
    Stop,
    Remove,
    Pull,
    Run,
}

#[derive(Clone)]
struct FakeDaemon {
    inspect_output: &'static str,
    fail_at: Option<Step>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl FakeDaemon {
    fn new(inspect_output: &'static str) -> Self {
        Self {
            inspect_output,
            fail_at: None,
            calls: Rc::default(),
        }
    }

    fn failing_at(mut self, step: Step) -> Self {
        self.fail_at = Some(step);
        self
    }

    fn record(&self, step: Step, call: String) -> std::result::Result<(), String> {
        self.calls.borrow_mut().push(call);
        if self.fail_at == Some(step) {
            Err("daemon said no".into())
        } else {
            Ok(())
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl ContainerDaemon for FakeDaemon {
    fn inspect(&self, name: &str) -> Result<Vec<u8>> {
        self.record(Step::Inspect, format!("inspect {name}"))
            .map_err(|message| DrunError::QueryFailed {
                name: name.to_owned(),
                message,
            })?;
        Ok(self.inspect_output.as_bytes().to_vec())
    }

    fn stop(&self, name: &str) -> Result<()> {
        self.record(Step::Stop, format!("stop {name}"))
            .map_err(|message| DrunError::LifecycleFailed {
                action: "stop",
                name: name.to_owned(),
                message,
            })
    }

    fn remove(&self, name: &str) -> Result<()> {
        self.record(Step::Remove, format!("rm {name}"))
            .map_err(|message| DrunError::LifecycleFailed {
                action: "remove",
                name: name.to_owned(),
                message,
            })
    }

    fn pull(&self, image: &ImageRef) -> Result<()> {
        self.record(Step::Pull, format!("pull {image}"))
            .map_err(|message| DrunError::PullFailed {
                image: image.to_string(),
                message,
            })
    }

    fn run(&self, command: &RunCommand) -> Result<()> {
        self.record(Step::Run, command.argv().join(" "))
            .map_err(|message| DrunError::ExecutionFailed { message })
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[derive(Clone, Default)]
struct RecordingSink(Rc<RefCell<Vec<PipelineEvent>>>);

impl RecordingSink {
    fn events(&self) -> Vec<PipelineEvent> {
        self.0.borrow().clone()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &PipelineEvent) {
        self.0.borrow_mut().push(event.clone());
    }
}

fn engine(daemon: &FakeDaemon, sink: &RecordingSink) -> Engine {
    Engine::with_daemon(Box::new(daemon.clone()), Box::new(sink.clone()))
}

fn accept(_: &RunCommand) -> bool {
    true
}

fn decline(_: &RunCommand) -> bool {
    false
}

// ── Happy path ───────────────────────────────────────────────────────

#[test]
fn pipeline_recreates_container_in_order() {
    let daemon = FakeDaemon::new(APP_INSPECT);
    let sink = RecordingSink::default();

    let outcome = engine(&daemon, &sink).recreate("app", &accept).expect("recreate");

    assert_eq!(outcome.command().tokens(), APP_TOKENS);
    assert!(matches!(outcome, Outcome::Recreated(_)));
    assert_eq!(
        daemon.calls(),
        [
            "inspect app".to_owned(),
            "stop app".to_owned(),
            "rm app".to_owned(),
            "pull app:latest".to_owned(),
            format!("run {}", APP_TOKENS.join(" ")),
        ]
    );
}

#[test]
fn pipeline_reports_events_with_severity() {
    let daemon = FakeDaemon::new(APP_INSPECT);
    let sink = RecordingSink::default();

    let _ = engine(&daemon, &sink).recreate("app", &accept).expect("recreate");

    let events = sink.events();
    assert_eq!(events.first(), Some(&PipelineEvent::Processing { name: "app".into() }));
    assert_eq!(events.last(), Some(&PipelineEvent::Recreated { name: "app".into() }));
    assert!(events.iter().any(|e| matches!(e, PipelineEvent::CommandReady { .. })));
    assert_eq!(events.last().map(PipelineEvent::severity), Some(Severity::Success));
    assert!(events.iter().all(|e| e.severity() != Severity::Error));
}

#[test]
fn confirmation_sees_the_synthesized_command() {
    let daemon = FakeDaemon::new(APP_INSPECT);
    let seen = RefCell::new(None);
    let confirm = |c: &RunCommand| {
        *seen.borrow_mut() = Some(c.clone());
        true
    };

    let _ = engine(&daemon, &RecordingSink::default())
        .recreate("app", &confirm)
        .expect("recreate");

    let seen = seen.into_inner().expect("confirm called");
    assert_eq!(seen.tokens(), APP_TOKENS);
}

// ── Decline & dry run ────────────────────────────────────────────────

#[test]
fn declining_skips_run_but_not_teardown() {
    let daemon = FakeDaemon::new(APP_INSPECT);
    let sink = RecordingSink::default();

    let outcome = engine(&daemon, &sink).recreate("app", &decline).expect("decline is ok");

    assert!(matches!(outcome, Outcome::Declined(_)));
    let calls = daemon.calls();
    assert_eq!(calls.len(), 4);
    assert!(!calls.iter().any(|c| c.starts_with("run")));
    assert_eq!(sink.events().last(), Some(&PipelineEvent::Cancelled));
}

#[test]
fn dry_run_only_inspects() {
    let daemon = FakeDaemon::new(APP_INSPECT);
    let sink = RecordingSink::default();

    let outcome = engine(&daemon, &sink)
        .dry_run(true)
        .recreate("app", &accept)
        .expect("dry run");

    assert!(matches!(outcome, Outcome::Planned(_)));
    assert_eq!(outcome.command().tokens(), APP_TOKENS);
    assert_eq!(daemon.calls(), ["inspect app"]);
}

// ── Failures ─────────────────────────────────────────────────────────

#[test]
fn missing_container_is_not_found_and_nothing_is_touched() {
    let daemon = FakeDaemon::new("[]");
    let err = engine(&daemon, &RecordingSink::default())
        .recreate("ghost", &accept)
        .unwrap_err();

    assert!(matches!(err, DrunError::NotFound { .. }));
    assert_eq!(daemon.calls(), ["inspect ghost"]);
}

#[test]
fn malformed_inspect_is_decode_failure() {
    let daemon = FakeDaemon::new(r#"{"not": "an array"}"#);
    let err = engine(&daemon, &RecordingSink::default())
        .recreate("app", &accept)
        .unwrap_err();

    assert_eq!(err.kind(), "decode_failed");
    assert_eq!(daemon.calls().len(), 1);
}

#[test]
fn each_failing_step_stops_the_pipeline() {
    let cases = [
        (Step::Inspect, "query_failed", 1),
        (Step::Stop, "lifecycle_failed", 2),
        (Step::Remove, "lifecycle_failed", 3),
        (Step::Pull, "pull_failed", 4),
        (Step::Run, "execution_failed", 5),
    ];
    for (step, kind, calls) in cases {
        let daemon = FakeDaemon::new(APP_INSPECT).failing_at(step);
        let err = engine(&daemon, &RecordingSink::default())
            .recreate("app", &accept)
            .unwrap_err();
        assert_eq!(err.kind(), kind);
        assert!(err.to_string().contains("daemon said no"), "{err}");
        assert_eq!(daemon.calls().len(), calls, "{kind}");
    }
}

#[test]
fn failed_pull_does_not_restore_removed_container() {
    let daemon = FakeDaemon::new(APP_INSPECT).failing_at(Step::Pull);
    let sink = RecordingSink::default();

    let _ = engine(&daemon, &sink).recreate("app", &accept).unwrap_err();

    assert_eq!(daemon.calls().last().map(String::as_str), Some("pull app:latest"));
    assert!(!sink
        .events()
        .iter()
        .any(|e| matches!(e, PipelineEvent::CommandReady { .. })));
}

#[test]
fn empty_name_never_reaches_daemon() {
    let daemon = FakeDaemon::new(APP_INSPECT);
    let err = engine(&daemon, &RecordingSink::default())
        .recreate("", &accept)
        .unwrap_err();

    assert_eq!(err.kind(), "query_failed");
    assert!(daemon.calls().is_empty());
}
