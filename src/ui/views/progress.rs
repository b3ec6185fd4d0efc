//! Console progress for prune runs
//!
//! Shows a live `Removing <step>` bar on stderr when it is an interactive
//! terminal, and one line per step otherwise.

use std::io::{self, Write};
use std::sync::Mutex;

use modtrim::domain::ports::{RemovalEvent, RemovalEventSink};

use crate::ui::context::UiContext;
use crate::ui::live_region::StatusLine;
use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::progress::StepProgress;

#[derive(Debug, Default)]
struct ConsoleState {
    progress: Option<StepProgress>,
    line: StatusLine,
}

/// Human-readable progress for `modtrim prune`
pub struct ConsoleEventSink {
    ui: UiContext,
    state: Mutex<ConsoleState>,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self {
            ui,
            state: Mutex::new(ConsoleState::default()),
        }
    }

    fn redraw(&self, state: &mut ConsoleState, out: &mut impl Write) -> io::Result<()> {
        if let Some(progress) = &state.progress {
            let rendered = progress.render(self.ui.unicode);
            state.line.update(out, &rendered)?;
        }
        Ok(())
    }

    fn handle(&self, event: RemovalEvent, out: &mut impl Write) -> io::Result<()> {
        let Ok(mut state) = self.state.lock() else {
            return Ok(());
        };

        match event {
            RemovalEvent::StepStarted {
                index,
                total,
                label,
            } => {
                if self.ui.animation {
                    let progress = state.progress.get_or_insert_with(|| {
                        let mut bar = StepProgress::new(total);
                        bar.set_width((self.ui.caps.width / 4).clamp(10, 30));
                        bar
                    });
                    progress.set_total(total);
                    progress.set_label(label);
                    self.redraw(&mut state, out)?;
                } else {
                    writeln!(
                        out,
                        "{} [{}/{}] Removing {}",
                        Icon::Arrow.colored(self.ui.color, self.ui.unicode),
                        index + 1,
                        total,
                        label
                    )?;
                }
            }
            RemovalEvent::Progress { fraction } => {
                if let Some(progress) = state.progress.as_mut() {
                    progress.set_fraction(fraction);
                }
                if self.ui.animation {
                    self.redraw(&mut state, out)?;
                }
            }
            RemovalEvent::ModuleDisposed {
                name,
                residue: true,
                ..
            } => {
                state.line.clear(out)?;
                writeln!(
                    out,
                    "{} {}: some files could not be deleted",
                    Icon::Warning.colored(self.ui.color, self.ui.unicode),
                    name
                )?;
                self.redraw(&mut state, out)?;
            }
            RemovalEvent::Cancelled { .. } | RemovalEvent::Completed { .. } => {
                state.line.clear(out)?;
                state.progress = None;
            }
            _ => {}
        }
        Ok(())
    }
}

impl RemovalEventSink for ConsoleEventSink {
    fn on_event(&self, event: RemovalEvent) {
        let mut err = io::stderr().lock();
        let _ = self.handle(event, &mut err);
    }

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
