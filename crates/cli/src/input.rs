use std::sync::mpsc as std_mpsc;

use rustyline::error::ReadlineError;
use tokio::sync::mpsc;

const PROMPT: &str = "Customer> ";

/// Slash commands understood by the REPL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Stats,
    Json,
    Config,
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        match line {
            "/q" | "/quit" | "/exit" => Some(Self::Quit),
            "/stats" => Some(Self::Stats),
            "/json" => Some(Self::Json),
            "/config" => Some(Self::Config),
            _ => None,
        }
    }
}

/// One unit of terminal input, already classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Message(String),
    Command(Command),
    Blank,
    Interrupted,
    Closed,
    Failed(String),
}

impl Input {
    /// Unknown slash words are analyzed like any other message.
    pub fn from_line(line: &str) -> Self {
        let text = line.trim();
        if text.is_empty() {
            return Self::Blank;
        }
        match Command::parse(text) {
            Some(cmd) => Self::Command(cmd),
            None => Self::Message(text.to_owned()),
        }
    }

    /// Whether the reader stops after delivering this input.
    fn ends_session(&self) -> bool {
        matches!(self, Self::Interrupted | Self::Closed | Self::Failed(_))
    }
}

/// Readline on a dedicated thread. The thread shows a prompt only after
/// [`Prompter::next`], so output printed between prompts stays in order.
pub struct Prompter {
    ready: std_mpsc::Sender<()>,
}

impl Prompter {
    pub fn spawn(inputs: mpsc::UnboundedSender<Input>) -> Self {
        let (ready, ready_rx) = std_mpsc::channel::<()>();
        std::thread::spawn(move || read_loop(inputs, ready_rx));
        Self { ready }
    }

    /// Ask for the next line. A closed reader is ignored; the input
    /// channel has already reported why.
    pub fn next(&self) {
        let _ = self.ready.send(());
    }
}

fn read_loop(inputs: mpsc::UnboundedSender<Input>, ready: std_mpsc::Receiver<()>) {
    let mut editor = match rustyline::DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            let _ = inputs.send(Input::Failed(e.to_string()));
            return;
        }
    };

    while ready.recv().is_ok() {
        let input = match editor.readline(PROMPT) {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                Input::from_line(&line)
            }
            Err(ReadlineError::Interrupted) => Input::Interrupted,
            Err(ReadlineError::Eof) => Input::Closed,
            Err(e) => Input::Failed(e.to_string()),
        };
        let last = input.ends_session();
        if inputs.send(input).is_err() || last {
            break;
        }
    }
}
