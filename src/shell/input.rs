use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Source of user replies for the interactive shell.
pub trait LineInput {
    /// Shows `prompt` and returns the next line, or `None` once input is over.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Terminal input with line editing and in-session history.
pub struct TerminalInput(DefaultEditor);

impl TerminalInput {
    pub fn new() -> Result<Self> {
        Ok(Self(DefaultEditor::new()?))
    }
}

impl LineInput for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.0.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.0.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            // Ctrl-D / Ctrl-C end the session
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Replays a fixed list of replies; runs out like a closed stdin.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: std::collections::VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineInput for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
