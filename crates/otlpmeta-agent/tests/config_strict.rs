#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use otlpmeta_agent::config;
use otlpmeta_agent::obs::Tags;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
agent:
  listen: "0.0.0.0:9464"
  lisen: "typo"
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.agent.listen, "0.0.0.0:9464");
    assert!(cfg.tag_set().is_empty());
    assert!(cfg.otlp().resource_attributes().is_empty());
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
agent:
  listen: "127.0.0.1:9000"
tags:
  app: demo
  zone: a
properties:
  otlp.headers: "auth=token"
  otlp.resourceAttributes: "service.name=demo, team = core"
  otlp.step: "10s"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.agent.listen_addr().unwrap().port(), 9000);
    assert_eq!(cfg.tag_set(), Tags::of(&[("zone", "a"), ("app", "demo")]));

    let otlp = cfg.otlp();
    assert_eq!(otlp.headers().get("auth"), Some("token"));
    let attrs = otlp.resource_attributes();
    assert_eq!(attrs.get("service.name"), Some("demo"));
    assert_eq!(attrs.get("team"), Some("core"));
    assert_eq!(otlp.step().unwrap().as_secs(), 10);
}

#[test]
fn unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code(), "UNSUPPORTED_VERSION");
}

#[test]
fn bad_listen_address() {
    let err = config::load_from_str("version: 1\nagent:\n  listen: nowhere\n").expect_err("must fail");
    assert_eq!(err.code(), "BAD_CONFIG");
}

#[test]
fn bad_step_is_rejected_at_load() {
    let bad = "version: 1\nproperties:\n  otlp.step: \"forever\"\n";
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code(), "BAD_CONFIG");
}

#[test]
fn missing_file_is_io_error() {
    let err = config::load_from_file("/nonexistent/otlpmeta.yaml").expect_err("must fail");
    assert_eq!(err.code(), "IO");
}
