use std::path::PathBuf;
use std::process::Command;

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    Some(text.trim().to_string())
}

fn main() {
    println!(
        "cargo:rustc-env=GIT_HASH={}",
        git(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".to_string())
    );

    // Outside a checkout the hash never changes, so only this script matters
    match git(&["rev-parse", "--absolute-git-dir"]) {
        Some(git_dir) => {
            let head = PathBuf::from(git_dir).join("HEAD");
            println!("cargo:rerun-if-changed={}", head.display());
        }
        None => println!("cargo:rerun-if-changed=build.rs"),
    }
}
