//! Interactive terminal timing session.
//!
//! A reader thread feeds stdin lines over a channel; the main loop waits on
//! that channel with a one-second deadline while the stopwatch runs, so the
//! tick is a single periodic callback and all state mutation stays on this
//! loop. Pausing drops the deadline, which cancels the pending tick.

use crate::core::stopwatch::StopwatchEngine;
use crate::core::timeline::render_bar;
use crate::errors::AppResult;
use crate::models::marker::TimeMarker;
use crate::ui::messages::info;
use crate::utils::colors::CLEAR_EOL;
use crate::utils::formatting::format_seconds;
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

/// Input events delivered by the stdin reader thread.
enum SessionInput {
    Line(String),
    Eof,
}

/// Spawn the stdin reader. The thread ends at EOF; closing the channel is
/// indistinguishable from EOF for the consumer, which is what we want.
fn spawn_stdin_reader() -> Receiver<SessionInput> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(l) => {
                    if tx.send(SessionInput::Line(l)).is_err() {
                        return;
                    }
                }
                Err(_) => break,
            }
        }
        let _ = tx.send(SessionInput::Eof);
    });
    rx
}

pub struct TimingSession {
    engine: StopwatchEngine,
    timeline_width: usize,
}

impl TimingSession {
    pub fn new(timeline_width: usize) -> Self {
        Self {
            engine: StopwatchEngine::new(),
            timeline_width,
        }
    }

    /// Run the session to completion and return the elapsed seconds and the
    /// (label-edited, filtered) marker sequence.
    pub fn run(mut self) -> AppResult<(u32, Vec<TimeMarker>)> {
        info("Stopwatch: s=start  p=pause  m [label]=marker  r=reset  d=done");
        let rx = spawn_stdin_reader();

        self.event_loop(&rx)?;

        let mut engine = self.engine;
        if !engine.markers().is_empty() {
            let revised = prompt_label_edits(engine.markers(), &rx)?;
            engine.edit_labels(revised);
        }
        Ok(engine.into_result())
    }

    fn event_loop(&mut self, rx: &Receiver<SessionInput>) -> AppResult<()> {
        // Deadline of the next tick; None while paused/stopped.
        let mut next_tick: Option<Instant> = None;

        loop {
            let input = match next_tick {
                Some(deadline) => {
                    let timeout = deadline.saturating_duration_since(Instant::now());
                    match rx.recv_timeout(timeout) {
                        Ok(input) => input,
                        Err(RecvTimeoutError::Timeout) => {
                            self.engine.tick();
                            next_tick = Some(deadline + Duration::from_secs(1));
                            self.redraw()?;
                            continue;
                        }
                        Err(RecvTimeoutError::Disconnected) => SessionInput::Eof,
                    }
                }
                None => rx.recv().unwrap_or(SessionInput::Eof),
            };

            let line = match input {
                SessionInput::Line(l) => l,
                SessionInput::Eof => {
                    self.engine.finish();
                    break;
                }
            };

            let cmd = line.trim();
            match cmd.split_whitespace().next().unwrap_or("") {
                "s" => {
                    self.engine.start();
                    if next_tick.is_none() && self.engine.is_running() {
                        next_tick = Some(Instant::now() + Duration::from_secs(1));
                    }
                    self.redraw()?;
                }
                "p" => {
                    self.engine.pause();
                    next_tick = None;
                    self.redraw()?;
                }
                "m" => {
                    let label = cmd.strip_prefix('m').unwrap_or("").trim();
                    self.engine.add_marker(label);
                    // The marker row scrolls up; the stopwatch line redraws
                    // below it.
                    if let Some(m) = self.engine.markers().last() {
                        println!("\r  {}  {}{}", format_seconds(m.seconds), m.label, CLEAR_EOL);
                    }
                    self.redraw()?;
                }
                "r" => {
                    self.engine.reset();
                    next_tick = None;
                    self.redraw()?;
                }
                "d" | "q" => {
                    self.engine.finish();
                    break;
                }
                "" => {}
                other => {
                    println!("  unknown command '{}'", other);
                }
            }
        }
        Ok(())
    }

    fn redraw(&self) -> AppResult<()> {
        let elapsed = self.engine.elapsed_seconds();
        let bar = render_bar(elapsed, self.engine.markers(), None, self.timeline_width);
        print!(
            "\r  {}  {}  markers: {}   ",
            format_seconds(elapsed),
            bar,
            self.engine.markers().len()
        );
        io::stdout().flush()?;
        Ok(())
    }
}

/// Post-recording label editor: one prompt per marker. Empty input keeps
/// the current label, `-` clears it (which drops the marker after the
/// whitespace filter). EOF keeps all remaining labels unchanged.
fn prompt_label_edits(
    markers: &[TimeMarker],
    rx: &Receiver<SessionInput>,
) -> AppResult<Vec<TimeMarker>> {
    println!();
    info("Edit marker labels (enter keeps, '-' removes):");

    let mut revised = Vec::with_capacity(markers.len());
    let mut input_open = true;

    for m in markers {
        let mut label = m.label.clone();
        if input_open {
            print!("  {} [{}]: ", format_seconds(m.seconds), m.label);
            io::stdout().flush()?;
            match rx.recv() {
                Ok(SessionInput::Line(l)) => {
                    let t = l.trim();
                    if t == "-" {
                        label = String::new();
                    } else if !t.is_empty() {
                        label = t.to_string();
                    }
                }
                Ok(SessionInput::Eof) | Err(_) => {
                    input_open = false;
                    println!();
                }
            }
        }
        revised.push(TimeMarker::new(label, m.seconds));
    }

    Ok(revised)
}
