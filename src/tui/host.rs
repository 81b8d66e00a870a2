//! Console host: drives a widget from stdin and the terminal.

use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::error::HostError;
use crate::session::{HostSurface, TerminalWidget};
use crate::tui::renderer::ConsoleRenderer;
use crate::tui::settings;

/// The terminal window as a widget container.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalSurface;

impl HostSurface for TerminalSurface {
    fn container_inner_height(&self) -> u32 {
        let rows = crossterm::terminal::size()
            .map(|(_, rows)| rows)
            .unwrap_or(settings::FALLBACK_ROWS);
        u32::from(rows) * settings::ROW_HEIGHT_PX
    }
}

/// Feed stdin lines into the widget until stdin closes, every request has
/// resolved, or Ctrl-C is pressed.
///
/// Lines typed while a request is in flight wait their turn.
pub async fn run_console(
    widget: &mut TerminalWidget,
    renderer: &Arc<ConsoleRenderer>,
) -> Result<(), HostError> {
    let (line_tx, mut line_rx) = mpsc::unbounded_channel::<io::Result<String>>();
    // A plain thread: blocking stdin reads must not hold up runtime shutdown.
    std::thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let failed = line.is_err();
            if line_tx.send(line).is_err() || failed {
                break;
            }
        }
    });

    let mut queued: VecDeque<String> = VecDeque::new();
    let mut stdin_open = true;
    let mut warned_disabled = false;

    loop {
        tokio::select! {
            line = line_rx.recv(), if stdin_open => match line {
                Some(Ok(line)) => queued.push_back(line),
                Some(Err(err)) => return Err(HostError::Io(err)),
                None => stdin_open = false,
            },
            Some(event) = widget.next_event() => widget.handle_event(event),
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("interrupted");
                break;
            }
        }

        while widget.input().is_visible() {
            let Some(line) = queued.pop_front() else {
                break;
            };
            if widget.input().is_disabled() {
                if !warned_disabled {
                    renderer.warn("input is disabled; typed lines are ignored");
                    warned_disabled = true;
                }
                continue;
            }
            submit_line(widget, renderer, &line);
        }

        if !stdin_open && widget.in_flight() == 0 {
            widget.drain_events();
            break;
        }
    }

    Ok(())
}

fn submit_line(widget: &mut TerminalWidget, renderer: &ConsoleRenderer, line: &str) {
    widget.type_input(line);
    if !widget.submit() {
        renderer.reprompt(widget.input());
    }
}
