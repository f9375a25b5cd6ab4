use std::process::Command;

/// Run `git <args>` and return its trimmed stdout, or "unknown" outside a checkout.
fn git_output(args: &[&str]) -> String {
    match Command::new("git").args(args).output() {
        Ok(output) if output.status.success() => String::from_utf8(output.stdout)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|_| "unknown".to_string()),
        _ => "unknown".to_string(),
    }
}

fn main() {
    // Short hash goes into `wordgrid --version`
    println!("cargo:rustc-env=GIT_HASH={}", git_output(&["rev-parse", "--short", "HEAD"]));

    println!("cargo:rerun-if-changed=.git/HEAD");
}
