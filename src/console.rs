use std::env;
use std::io;
use std::process::Command;

use tracing::debug;

/// Something that can wipe the terminal before a frame is drawn
pub trait ClearScreen {
    /// Clear the screen, blocking until it's done
    fn clear(&mut self) -> io::Result<()>;
}

/// Leaves the terminal alone. Frames simply scroll.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClear;

impl ClearScreen for NoClear {
    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Clears by running a shell command and waiting for it to exit
#[derive(Debug, Clone)]
pub struct ShellClear {
    program: String,
    args: Vec<String>,
}

impl ShellClear {
    pub fn new<S: Into<String>>(program: S, args: impl IntoIterator<Item = S>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `cmd /c cls`
    pub fn windows() -> Self {
        Self::new("cmd", ["/c", "cls"])
    }
}

impl ClearScreen for ShellClear {
    fn clear(&mut self) -> io::Result<()> {
        let status = Command::new(&self.program).args(&self.args).status()?;

        if !status.success() {
            return Err(io::Error::other(format!(
                "`{} {}` exited with {status}",
                self.program,
                self.args.join(" ")
            )));
        }

        Ok(())
    }
}

/// Pick the clearing strategy for the platform we're running on
pub fn for_platform() -> Box<dyn ClearScreen> {
    select(env::consts::OS)
}

fn select(os: &str) -> Box<dyn ClearScreen> {
    debug!(os, "selecting console clear strategy");

    match os {
        "windows" => Box::new(ShellClear::windows()),
        _ => Box::new(NoClear),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_clear_is_a_noop() {
        assert!(NoClear.clear().is_ok());
    }

    #[test]
    fn windows_command_line() {
        let c = ShellClear::windows();

        assert_eq!(c.program, "cmd");
        assert_eq!(c.args, ["/c", "cls"]);
    }

    #[test]
    fn missing_program_is_an_error() {
        let mut c = ShellClear::new("lifeterm-no-such-program", []);

        assert!(c.clear().is_err());
    }

    #[cfg(unix)]
    #[test]
    fn failing_command_is_an_error() {
        let mut ok = ShellClear::new("true", []);
        assert!(ok.clear().is_ok());

        let mut failing = ShellClear::new("false", []);
        let err = failing.clear().unwrap_err();
        assert!(err.to_string().contains("false"));
    }

    #[test]
    fn other_platforms_do_not_clear() {
        // Must not spawn anything
        assert!(select("linux").clear().is_ok());
        assert!(select("macos").clear().is_ok());
    }
}
