//! Message loop around a [`Shell`].
//!
//! The program owns the only mutable path into the shell. Commands returned from
//! `update` are executed here: `Cmd::Msg` is queued for the next cycle, `Cmd::Task`
//! runs on its own thread and reports back through the channel, `Cmd::Quit` stops
//! message delivery. Hosts feed keys and resizes through a [`ProgramHandle`].

use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crate::core::message::{Cmd, Msg};
use crate::core::terminal::Terminal;
use crate::error::{Result, ShellError};
use crate::runtime::shell::Shell;

const CLEAR_AND_HOME: &str = "\x1b[H\x1b[2J";

/// Cloneable sender for messages from other threads.
#[derive(Clone)]
pub struct ProgramHandle {
    sender: Sender<Msg>,
}

impl ProgramHandle {
    /// Queue a message. Returns `false` once the program is gone.
    pub fn send(&self, msg: Msg) -> bool {
        self.sender.send(msg).is_ok()
    }
}

pub struct Program {
    shell: Shell,
    sender: Sender<Msg>,
    receiver: Receiver<Msg>,
    pending: VecDeque<Msg>,
    quit: bool,
    last_frame: Option<String>,
}

impl Program {
    pub fn new(shell: Shell) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            shell,
            sender,
            receiver,
            pending: VecDeque::new(),
            quit: false,
            last_frame: None,
        }
    }

    pub fn handle(&self) -> ProgramHandle {
        ProgramHandle {
            sender: self.sender.clone(),
        }
    }

    /// Run the shell's startup commands.
    pub fn init(&mut self) {
        if let Some(cmd) = self.shell.init() {
            self.execute(cmd);
        }
    }

    /// Deliver one message to the shell and execute whatever it returns.
    ///
    /// Messages arriving after quit are dropped.
    pub fn dispatch(&mut self, msg: Msg) {
        if self.quit {
            tracing::trace!(?msg, "dropping message after quit");
            return;
        }
        if let Some(cmd) = self.shell.update(msg) {
            self.execute(cmd);
        }
    }

    fn execute(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::Quit => {
                tracing::info!("program quitting");
                self.quit = true;
            }
            Cmd::Msg(msg) => self.pending.push_back(msg),
            Cmd::Task(task) => {
                let sender = self.sender.clone();
                thread::spawn(move || {
                    if let Some(msg) = task() {
                        // The receiver only disappears when the program is dropped.
                        let _ = sender.send(msg);
                    }
                });
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.execute(cmd);
                }
            }
        }
    }

    /// Process queued messages and anything already waiting on the channel.
    ///
    /// Returns the number of messages delivered.
    pub fn run_pending(&mut self) -> usize {
        let mut delivered = 0;
        while !self.quit {
            let Some(msg) = self
                .pending
                .pop_front()
                .or_else(|| self.receiver.try_recv().ok())
            else {
                break;
            };
            self.dispatch(msg);
            delivered += 1;
        }
        delivered
    }

    /// Block until a message is available or `timeout` elapses.
    pub fn wait(&mut self, timeout: Duration) -> bool {
        if !self.pending.is_empty() {
            return true;
        }
        match self.receiver.recv_timeout(timeout) {
            Ok(msg) => {
                self.pending.push_back(msg);
                true
            }
            Err(_) => false,
        }
    }

    /// Size the shell from the terminal's current dimensions.
    pub fn resize_from(&mut self, terminal: &impl Terminal) {
        let msg = Msg::resize(
            usize::from(terminal.columns()),
            usize::from(terminal.rows()),
        );
        self.dispatch(msg);
    }

    /// Write the current frame when it differs from the last one written.
    pub fn render(&mut self, terminal: &mut impl Terminal) -> Result<bool> {
        let frame = self.shell.view();
        if self.last_frame.as_deref() == Some(frame.as_str()) {
            return Ok(false);
        }
        let output = format!("{CLEAR_AND_HOME}{}", frame.replace('\n', "\r\n"));
        terminal.write(&output).map_err(ShellError::Terminal)?;
        self.last_frame = Some(frame);
        Ok(true)
    }

    /// Drive the loop until a quit command runs.
    ///
    /// Input comes from [`ProgramHandle`]s; `tick` bounds how long each wait blocks.
    pub fn run(&mut self, terminal: &mut impl Terminal, tick: Duration) -> Result<()> {
        self.init();
        self.resize_from(terminal);
        loop {
            self.run_pending();
            self.render(terminal)?;
            if self.quit {
                return Ok(());
            }
            self.wait(tick);
        }
    }

    pub fn is_quit(&self) -> bool {
        self.quit
    }

    pub fn view(&self) -> String {
        self.shell.view()
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut Shell {
        &mut self.shell
    }
}
