use std::process::Command;

fn stdout_of(args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_unique_ptr"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run unique_ptr");
    assert!(output.status.success(), "exit status: {}", output.status);
    assert!(output.stderr.is_empty());
    String::from_utf8(output.stdout).expect("utf-8 stdout")
}

#[test]
fn prints_exactly_the_lifecycle() {
    assert_eq!(stdout_of(&[]), "Car created\nDriving...\nCar destroyed\n");
}

#[test]
fn transfer_reports_empty_handle_before_destruction() {
    assert_eq!(
        stdout_of(&["--transfer"]),
        "Car created\nDriving...\ncar is null after move\nCar destroyed\n"
    );
}

#[test]
fn unknown_flag_is_rejected() {
    let output = Command::new(env!("CARGO_BIN_EXE_unique_ptr"))
        .arg("--fast")
        .output()
        .expect("run unique_ptr");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[cfg(target_os = "linux")]
#[test]
fn unwritable_stdout_exits_with_status_1() {
    use std::fs::OpenOptions;
    use std::process::Stdio;

    // Every write to `/dev/full` fails with ENOSPC.
    let full = OpenOptions::new()
        .write(true)
        .open("/dev/full")
        .expect("open /dev/full");
    let output = Command::new(env!("CARGO_BIN_EXE_unique_ptr"))
        .env_remove("RUST_LOG")
        .stdout(Stdio::from(full))
        .stderr(Stdio::piped())
        .output()
        .expect("run unique_ptr");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("writing to stdout"), "stderr: {stderr}");
}
