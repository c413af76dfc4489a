use assert_cmd::Command;

pub fn shopkeep_cmd() -> Command {
    let mut cmd = Command::cargo_bin("shopkeep").unwrap();
    cmd.env_remove("SHOPKEEP_ROOT");
    cmd
}

/// Pull the short record id out of list output: the second column of the
/// first row containing `needle`.
#[allow(dead_code)]
pub fn id_from_list(stdout: &str, needle: &str) -> String {
    stdout
        .lines()
        .find(|line| line.contains(needle))
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or_else(|| panic!("no row containing '{}' in:\n{}", needle, stdout))
        .to_string()
}
