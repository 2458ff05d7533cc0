use std::ffi::OsStr;
use std::io::Write;
use std::process::{Command, Output, Stdio};

pub fn run_chartspan<I, S>(args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = chartspan_bin()?;
    Command::new(bin)
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .map_err(|err| format!("run chartspan failed: {}", err))
}

pub fn run_chartspan_with_stdin<I, S>(args: I, stdin: &str) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = chartspan_bin()?;
    let mut child = Command::new(bin)
        .args(args)
        .env("RUST_LOG", "error")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|err| format!("spawn chartspan failed: {}", err))?;
    if let Some(mut input) = child.stdin.take() {
        input
            .write_all(stdin.as_bytes())
            .map_err(|err| format!("write stdin failed: {}", err))?;
    }
    child
        .wait_with_output()
        .map_err(|err| format!("wait chartspan failed: {}", err))
}

pub fn stdout_of(output: &Output) -> Result<String, String> {
    if !output.status.success() {
        return Err(format!(
            "chartspan failed ({}): {}",
            output.status,
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    String::from_utf8(output.stdout.clone()).map_err(|err| format!("stdout not utf-8: {}", err))
}

fn chartspan_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_chartspan").map_or_else(
        || Err("CARGO_BIN_EXE_chartspan missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
