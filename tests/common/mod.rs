use assert_cmd::Command;

pub fn aroma_cmd() -> Command {
    let mut cmd = Command::cargo_bin("aroma").unwrap();
    cmd.env_remove("AROMA_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}
