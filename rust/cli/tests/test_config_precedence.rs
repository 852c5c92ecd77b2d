use std::io::Cursor;

use serial_test::serial;

use felt_cli::cli::PlayArgs;
use felt_cli::commands::handle_play_command;
use felt_cli::run;

struct TempEnvVar {
    key: &'static str,
    previous: Option<String>,
}

impl TempEnvVar {
    fn set(key: &'static str, value: &str) -> Self {
        let previous = std::env::var(key).ok();
        unsafe { std::env::set_var(key, value) };
        Self { key, previous }
    }

    fn unset(key: &'static str) -> Self {
        let previous = std::env::var(key).ok();
        unsafe { std::env::remove_var(key) };
        Self { key, previous }
    }
}

impl Drop for TempEnvVar {
    fn drop(&mut self) {
        if let Some(prev) = &self.previous {
            unsafe { std::env::set_var(self.key, prev) };
        } else {
            unsafe { std::env::remove_var(self.key) };
        }
    }
}

fn clear_felt_env() -> [TempEnvVar; 5] {
    [
        TempEnvVar::unset("FELT_CONFIG"),
        TempEnvVar::unset("FELT_STACK"),
        TempEnvVar::unset("FELT_OPPONENTS"),
        TempEnvVar::unset("FELT_SEED"),
        TempEnvVar::unset("FELT_PROFILE"),
    ]
}

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
#[serial]
fn file_values_reach_the_table() {
    let _cleared = clear_felt_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("felt.toml");
    std::fs::write(
        &path,
        "starting_stack = 350\nopponents = 2\nprofile = \"cautious\"\n",
    )
    .unwrap();
    let _cfg = TempEnvVar::set("FELT_CONFIG", path.to_str().unwrap());

    let (code, stdout, stderr) = run_cli(&["felt", "sim", "--hands", "1", "--seed", "42"]);
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(
        stdout.contains("sim: hands=1 players=3 stack=350 profile=cautious seed=42"),
        "header was: {}",
        stdout.lines().next().unwrap_or("")
    );
}

#[test]
#[serial]
fn env_overrides_file() {
    let _cleared = clear_felt_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("felt.toml");
    std::fs::write(&path, "starting_stack = 350\nprofile = \"cautious\"\n").unwrap();
    let _cfg = TempEnvVar::set("FELT_CONFIG", path.to_str().unwrap());
    let _stack = TempEnvVar::set("FELT_STACK", "800");
    let _profile = TempEnvVar::set("FELT_PROFILE", "aggressive");

    let (code, stdout, stderr) = run_cli(&["felt", "sim", "--hands", "1", "--seed", "42"]);
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("stack=800"));
    assert!(stdout.contains("profile=aggressive"));
}

#[test]
#[serial]
fn flags_override_env() {
    let _cleared = clear_felt_env();
    let _stack = TempEnvVar::set("FELT_STACK", "900");
    let _profile = TempEnvVar::set("FELT_PROFILE", "cautious");

    let (code, stdout, stderr) = run_cli(&[
        "felt", "sim", "--hands", "1", "--seed", "42", "--stack", "250", "--profile", "balanced",
    ]);
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("stack=250"));
    assert!(stdout.contains("profile=balanced"));
}

#[test]
#[serial]
fn config_flag_beats_env_path() {
    let _cleared = clear_felt_env();
    let dir = tempfile::tempdir().unwrap();
    let env_path = dir.path().join("env.toml");
    let flag_path = dir.path().join("flag.toml");
    std::fs::write(&env_path, "starting_stack = 111\n").unwrap();
    std::fs::write(&flag_path, "starting_stack = 222\n").unwrap();
    let _cfg = TempEnvVar::set("FELT_CONFIG", env_path.to_str().unwrap());

    let args = PlayArgs {
        seed: Some(42),
        opponents: None,
        stack: None,
        profile: Some("balanced".to_string()),
        config: Some(flag_path.to_str().unwrap().to_string()),
        hands: Some(1),
    };
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut stdin = Cursor::new(b"quit\n".to_vec());
    let result = handle_play_command(args, &mut out, &mut err, &mut stdin);
    assert!(result.is_ok(), "play failed: {:?}", result);
    let stdout = String::from_utf8_lossy(&out);
    assert!(stdout.contains("stack=222"), "stdout: {}", stdout);
}

#[test]
#[serial]
fn malformed_env_number_is_rejected() {
    let _cleared = clear_felt_env();
    let _stack = TempEnvVar::set("FELT_STACK", "abc");

    let (code, _, stderr) = run_cli(&["felt", "sim", "--hands", "1", "--seed", "42"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("FELT_STACK must be a number, got 'abc'"));
}

#[test]
#[serial]
fn missing_named_config_is_an_error() {
    let _cleared = clear_felt_env();
    let _cfg = TempEnvVar::set("FELT_CONFIG", "/nonexistent/felt.toml");

    let (code, _, stderr) = run_cli(&["felt", "sim", "--hands", "1", "--seed", "42"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("cannot read config file"));
}

#[test]
#[serial]
fn zero_stack_fails_validation() {
    let _cleared = clear_felt_env();
    let _stack = TempEnvVar::set("FELT_STACK", "0");

    let (code, _, stderr) = run_cli(&["felt", "sim", "--hands", "1", "--seed", "42"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("starting_stack must be > 0"));
}
