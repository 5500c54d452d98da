//! Attach command implementation.
//!
//! `autosession attach` is the bridge between an editor host and the
//! autosave controller. The host writes one command per line on stdin:
//!
//! ```text
//! load --silent
//! event buffer-entered
//! save ~/sessions/work\ tree
//! status
//! stop --no-save
//! quit
//! ```
//!
//! Words are split on unescaped whitespace, so a backslash-escaped path
//! arrives as a single argument. Each `event NAME` line is delivered to the
//! controller, which re-saves the tracked session when `NAME` is one of the
//! configured trigger events. End of input behaves like `quit`: autosave
//! stops without a final save.
//!
//! Replies to `status` and `help` are protocol output and are written to
//! stdout whatever the output mode; diagnostics go through the UI.

use std::io::{self, BufRead, Write};

use clap::error::ErrorKind;
use clap::Parser;

use crate::autosave::AutosaveController;
use crate::cli::args::{HostCommand, HostLine};
use crate::error::Result;
use crate::events::EventSource;
use crate::paths::split_escaped;
use crate::store::SessionStore;
use crate::ui::UserInterface;

use super::dispatcher::{build_controller, Command, CommandContext, CommandResult};

/// The attach command implementation.
pub struct AttachCommand {
    context: CommandContext,
}

impl AttachCommand {
    /// Create a new attach command.
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }
}

impl Command for AttachCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.context.load_config()?;
        let mut controller = build_controller(&self.context, &config)?;
        tracing::info!(
            "Attached; trigger events: [{}]",
            controller.trigger_events().join(", ")
        );

        let stdin = io::stdin();
        run_host_session(stdin.lock(), io::stdout(), &mut controller, ui)?;
        Ok(CommandResult::success())
    }
}

/// What the host loop should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Serve attach-protocol lines from `reader` until `quit` or end of input,
/// writing replies to `writer`.
///
/// Controller failures are reported by the controller and do not end the
/// session; only a read or write error does.
pub fn run_host_session<R, W, S, E>(
    reader: R,
    mut writer: W,
    controller: &mut AutosaveController<S, E>,
    ui: &mut dyn UserInterface,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: SessionStore,
    E: EventSource,
{
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let words = split_escaped(line);
        let command = match HostLine::try_parse_from(&words) {
            Ok(parsed) => parsed.command,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp) => {
                writeln!(writer, "{}", e.to_string().trim_end())?;
                writer.flush()?;
                continue;
            }
            Err(e) => {
                let reason = e.to_string();
                let reason = reason.lines().next().unwrap_or_default();
                ui.warning(&format!("Ignoring '{}': {}", line, reason));
                continue;
            }
        };

        tracing::debug!("Host command: {:?}", command);
        if handle(command, &mut writer, controller, ui)? == Flow::Quit {
            break;
        }
    }

    controller.stop_autosave(crate::autosave::StopOptions { save: false }, ui)
}

fn handle<W: Write, S: SessionStore, E: EventSource>(
    command: HostCommand,
    writer: &mut W,
    controller: &mut AutosaveController<S, E>,
    ui: &mut dyn UserInterface,
) -> io::Result<Flow> {
    // Failures were reported to the user by the controller.
    let _ = match command {
        HostCommand::Save(args) => controller
            .save(args.path.as_deref(), args.options(), ui)
            .map(drop),
        HostCommand::Load(args) => controller
            .load(args.path.as_deref(), args.options(), ui)
            .map(drop),
        HostCommand::Start(args) => controller
            .start_autosave(args.path.as_deref(), ui)
            .map(drop),
        HostCommand::Stop(args) => controller.stop_autosave(args.options(), ui),
        HostCommand::Event(args) => controller.dispatch(&args.name, ui).map(|wrote| {
            if !wrote {
                tracing::debug!("Event {} ignored", args.name);
            }
        }),
        HostCommand::Status => {
            match controller.tracked_path() {
                Some(path) => writeln!(writer, "recording {}", path)?,
                None => writeln!(writer, "idle")?,
            }
            writer.flush()?;
            Ok(())
        }
        HostCommand::Quit => return Ok(Flow::Quit),
    };
    Ok(Flow::Continue)
}
