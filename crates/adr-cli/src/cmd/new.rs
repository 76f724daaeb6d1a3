use crate::output::print_json;
use adr_core::{status::Status, store::Store};
use anyhow::Context;
use std::io::IsTerminal;
use std::path::Path;

pub fn run(dir: &Path, title: &str, status: Option<&str>, json: bool) -> anyhow::Result<()> {
    let status = status.map(Status::parse).unwrap_or(Status::Proposed);
    if status.is_custom() {
        eprintln!("warning: unrecognized status '{status}' recorded as a custom status");
    }

    let store = Store::new(dir);
    let created = store
        .create(title, &status)
        .with_context(|| format!("failed to create record '{title}'"))?;

    if json {
        print_json(&created)?;
    } else {
        println!("{}", created.path.display());
    }

    open_in_editor(&created.path);
    Ok(())
}

/// Open the fresh record in `$EDITOR` when stdout is a terminal. The record
/// is already on disk, so launch failures are logged at debug and never
/// change the output or the exit code.
fn open_in_editor(path: &Path) {
    let Ok(editor) = std::env::var("EDITOR") else {
        return;
    };
    if !std::io::stdout().is_terminal() {
        return;
    }
    let Some(mut cmd) = editor_command(&editor) else {
        return;
    };
    if let Err(e) = cmd.arg(path).status() {
        tracing::debug!("editor launch failed: {e}");
    }
}

/// Split an `EDITOR` value into a ready-to-run command. The value may carry
/// arguments (`code --wait`); the first token is the program. Blank values
/// yield no command.
fn editor_command(value: &str) -> Option<std::process::Command> {
    let mut words = value.split_whitespace();
    let program = words.next()?;
    let mut cmd = std::process::Command::new(program);
    cmd.args(words);
    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_value_may_carry_arguments() {
        let cmd = editor_command("code --wait").unwrap();
        assert_eq!(cmd.get_program(), "code");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, ["--wait"]);
    }

    #[test]
    fn editor_value_without_arguments_is_just_the_program() {
        let cmd = editor_command("vim").unwrap();
        assert_eq!(cmd.get_program(), "vim");
        assert_eq!(cmd.get_args().count(), 0);
    }

    #[test]
    fn blank_editor_value_yields_no_command() {
        assert!(editor_command("").is_none());
        assert!(editor_command("   ").is_none());
    }
}
