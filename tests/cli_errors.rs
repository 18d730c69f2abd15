//! Configuration errors abort before the output tree is touched.

mod common;

use common::*;

#[test]
fn output_collision_is_fatal() {
    let env = TestEnv::new();
    env.write("index.html", "plain").write("index.html.tera", "template");

    let result = env.run(&[]);
    assert!(!result.success);
    assert!(result.stderr.contains("output collision"), "{}", result.stderr);
    assert!(result.stderr.contains("index.html.tera"));
    assert!(!env.output_path("").exists());
}

#[test]
fn dependency_cycle_is_fatal() {
    let env = TestEnv::new();
    env.write("a.html.tera", "{% include \"b.html.tera\" %}")
        .write("b.html.tera", "{% include \"a.html.tera\" %}")
        .write("style.css", "x");

    let result = env.run(&[]);
    assert!(!result.success);
    assert!(result.stderr.contains("dependency cycle"), "{}", result.stderr);
    assert!(!env.output_path("").exists());
}

#[test]
fn marker_only_template_name_is_fatal() {
    let env = TestEnv::new();
    env.write(".tera", "x");

    let result = env.run(&[]);
    assert!(!result.success);
    assert!(result.stderr.contains(".tera"), "{}", result.stderr);
}

#[test]
fn missing_source_directory_is_fatal() {
    let env = TestEnv::new();
    let result = env.run(&["does-not-exist"]);
    assert!(!result.success);
    assert!(
        result.stderr.contains("does-not-exist"),
        "{}",
        result.stderr
    );
}

#[test]
fn json_mode_reports_errors_as_events() {
    let env = TestEnv::new();
    env.write("index.html", "plain").write("index.html.tera", "template");

    let result = env.run(&["--json"]);
    assert!(!result.success);
    let error = result
        .events()
        .into_iter()
        .find(|e| e["event"] == "error")
        .expect("error event");
    assert!(error["message"]
        .as_str()
        .unwrap()
        .contains("output collision"));
}

#[test]
fn conflicting_marker_flags_are_rejected() {
    let env = TestEnv::new();
    let result = env.run(&["--ext", ".j2", "--prefix", "j2."]);
    assert!(!result.success);
    assert_eq!(result.exit_code, 2);
}
