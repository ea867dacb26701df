use std::process::Command;

// Bakes the current commit and date into `mpkdump --version`.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let commit = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".to_string());
    let date = git(&["log", "-1", "--format=%cs"]).unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=MPKDUMP_BUILD_COMMIT={}", commit);
    println!("cargo:rustc-env=MPKDUMP_BUILD_DATE={}", date);
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if value.is_empty() { None } else { Some(value) }
}
