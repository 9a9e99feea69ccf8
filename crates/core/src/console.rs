//! Line-oriented console seam.
//!
//! Interactive flows never touch stdin/stdout directly. They ask for tokens and
//! print lines through [`Console`], so the business rules stay testable with a
//! [`ScriptedConsole`].

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Prompt-and-print interface used by every interactive flow.
pub trait Console {
    /// Show `prompt` and return the next input line without its line ending.
    fn ask(&mut self, prompt: &str) -> String;

    /// Print one line of output.
    fn say(&mut self, line: &str);

    /// Input has ended; further asks only return empty lines.
    fn is_closed(&self) -> bool {
        false
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn ask(&mut self, prompt: &str) -> String {
        (**self).ask(prompt)
    }

    fn say(&mut self, line: &str) {
        (**self).say(line)
    }

    fn is_closed(&self) -> bool {
        (**self).is_closed()
    }
}

/// Console bound to the process stdin/stdout.
#[derive(Debug, Default)]
pub struct StdConsole {
    closed: bool,
}

impl StdConsole {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Console for StdConsole {
    fn ask(&mut self, prompt: &str) -> String {
        let mut stdout = io::stdout().lock();
        let _ = write!(stdout, "{prompt}");
        let _ = stdout.flush();
        drop(stdout);

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => {
                self.closed = true;
                String::new()
            }
            Ok(_) => line.trim_end_matches(['\r', '\n']).to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read from stdin");
                self.closed = true;
                String::new()
            }
        }
    }

    fn say(&mut self, line: &str) {
        println!("{line}");
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Console that answers prompts from a queue and records what was printed.
///
/// Prompts are kept apart from the printed transcript, so assertions on
/// [`ScriptedConsole::output`] see exactly what the flow printed.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    prompts: Vec<String>,
    output: String,
    exhausted: bool,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            output: String::new(),
            exhausted: false,
        }
    }

    /// Queue more answers after the existing ones.
    pub fn push_answers<I, S>(&mut self, answers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.answers.extend(answers.into_iter().map(Into::into));
        self.exhausted = false;
    }

    /// Everything printed so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Return and reset the printed transcript.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    /// Prompts shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Answers not consumed yet.
    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn ask(&mut self, prompt: &str) -> String {
        self.prompts.push(prompt.to_string());
        match self.answers.pop_front() {
            Some(answer) => answer,
            None => {
                self.exhausted = true;
                String::new()
            }
        }
    }

    fn say(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }

    fn is_closed(&self) -> bool {
        self.exhausted
    }
}
