//! Tick scheduling: timer-divided logic task plus a signalled render task
//!
//! The logic task stands in for the timer interrupt handler: every call to
//! [`LogicTask::on_interrupt`] is one interrupt, and every `TICK_DIVIDER`-th
//! one runs a game tick. The render task sleeps on a condition variable until
//! a tick marks a frame pending.
//!
//! The game mutex plays the role of interrupt masking. The render task holds
//! it only while promoting positions and capturing the frame, so a tick can
//! never land between two objects' promotions. The repaint then draws the
//! captured frame without the lock.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

use crate::audio::{Buzzer, ToneGenerator};
use crate::consts::TICK_DIVIDER;
use crate::platform::{Buttons, StatusLed};
use crate::render::{Display, draw_all, promote, repaint};
use crate::sim::{GameState, TickInput, TickReport, tick};

/// Counts timer interrupts and fires once every `divider` of them
#[derive(Debug, Clone, Copy)]
pub struct TickDivider {
    count: u16,
    divider: u16,
}

impl Default for TickDivider {
    fn default() -> Self {
        Self::new(TICK_DIVIDER)
    }
}

impl TickDivider {
    pub fn new(divider: u16) -> Self {
        Self {
            count: 0,
            divider: divider.max(1),
        }
    }

    /// Register one interrupt; true when a logic tick is due
    pub fn on_interrupt(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.divider {
            self.count = 0;
            true
        } else {
            false
        }
    }
}

/// State shared between the logic and render tasks
#[derive(Debug)]
pub struct Shared {
    state: Mutex<GameState>,
    redraw: Condvar,
    stopped: AtomicBool,
}

impl Shared {
    pub fn new(state: GameState) -> Self {
        Self {
            state: Mutex::new(state),
            redraw: Condvar::new(),
            stopped: AtomicBool::new(false),
        }
    }

    /// Lock the game state. A panic in the other task cannot leave the state
    /// half-promoted, so a poisoned lock is recovered.
    pub fn lock(&self) -> MutexGuard<'_, GameState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Ask the render task to finish once no frame is pending
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
        // Take the lock so a render task between its check and its wait sees it
        let _guard = self.lock();
        self.redraw.notify_all();
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    pub fn into_state(self) -> GameState {
        self.state.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

/// The interrupt-side task: input, physics, scoring, tone
pub struct LogicTask<B: Buttons, T: ToneGenerator, L: StatusLed> {
    divider: TickDivider,
    buttons: B,
    buzzer: Buzzer<T>,
    led: L,
    /// Logic ticks run
    pub ticks: u64,
    /// Ticks with a ball/paddle contact
    pub contacts: u64,
    /// Score resets caused by a win
    pub wins: u64,
}

impl<B: Buttons, T: ToneGenerator, L: StatusLed> LogicTask<B, T, L> {
    pub fn new(buttons: B, tone: T, led: L) -> Self {
        Self {
            divider: TickDivider::default(),
            buttons,
            buzzer: Buzzer::new(tone),
            led,
            ticks: 0,
            contacts: 0,
            wins: 0,
        }
    }

    pub fn with_divider(mut self, divider: u16) -> Self {
        self.divider = TickDivider::new(divider);
        self
    }

    pub fn buzzer(&self) -> &Buzzer<T> {
        &self.buzzer
    }

    /// Handle one timer interrupt. Returns the tick report when a tick ran.
    pub fn on_interrupt(&mut self, shared: &Shared) -> Option<TickReport> {
        self.led.set(true);
        let report = if self.divider.on_interrupt() {
            Some(self.run_tick(shared))
        } else {
            None
        };
        self.led.set(false);
        report
    }

    fn run_tick(&mut self, shared: &Shared) -> TickReport {
        let report = {
            let mut state = shared.lock();
            let input = TickInput {
                buttons: self.buttons.read(&state),
            };
            tick(&mut state, &input)
        };
        self.buzzer.apply(&report);

        self.ticks += 1;
        if report.any_hit() {
            self.contacts += 1;
        }
        if report.winner.is_some() {
            self.wins += 1;
        }

        shared.redraw.notify_one();
        report
    }
}

/// The foreground task: wait for a pending frame, promote, repaint
pub struct RenderTask<D: Display, L: StatusLed> {
    display: D,
    led: L,
    /// Frames repainted
    pub frames: u64,
}

impl<D: Display, L: StatusLed> RenderTask<D, L> {
    pub fn new(display: D, led: L) -> Self {
        Self {
            display,
            led,
            frames: 0,
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    /// Paint the whole screen from the current state
    pub fn draw_initial(&mut self, shared: &Shared) {
        let state = shared.lock();
        draw_all(&state, &mut self.display);
    }

    /// Block until a frame is pending, then render it.
    ///
    /// Returns false once stopped with nothing left to draw.
    pub fn render_next(&mut self, shared: &Shared) -> bool {
        let frame = {
            let mut state = shared.lock();
            while !state.redraw_pending {
                if shared.is_stopped() {
                    return false;
                }
                self.led.set(false);
                state = shared
                    .redraw
                    .wait(state)
                    .unwrap_or_else(PoisonError::into_inner);
            }
            self.led.set(true);
            promote(&mut state)
        };

        repaint(&frame, &mut self.display);
        self.frames += 1;
        true
    }
}

/// Totals from one [`run`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub interrupts: u64,
    pub ticks: u64,
    pub frames: u64,
    pub contacts: u64,
    pub wins: u64,
}

/// Drive both tasks: a timer thread calling the logic task every `period`,
/// and the render task on the calling thread. Stops after `max_ticks` logic
/// ticks, or never if `None`.
pub fn run<B, T, L, M, D>(
    shared: &Shared,
    logic: &mut LogicTask<B, T, L>,
    render: &mut RenderTask<D, M>,
    period: Duration,
    max_ticks: Option<u64>,
) -> RunSummary
where
    B: Buttons + Send,
    T: ToneGenerator + Send,
    L: StatusLed + Send,
    M: StatusLed,
    D: Display,
{
    render.draw_initial(shared);
    log::info!("Running at {:?} per interrupt", period);

    let start_ticks = logic.ticks;
    let start_frames = render.frames;
    let mut interrupts = 0;

    thread::scope(|s| {
        let timer = s.spawn(|| {
            let mut count = 0u64;
            loop {
                if max_ticks.is_some_and(|max| logic.ticks - start_ticks >= max) {
                    break;
                }
                thread::sleep(period);
                logic.on_interrupt(shared);
                count += 1;
            }
            shared.stop();
            count
        });

        while render.render_next(shared) {}

        interrupts = timer.join().unwrap_or_else(|_| {
            log::error!("Timer thread panicked");
            0
        });
    });

    let summary = RunSummary {
        interrupts,
        ticks: logic.ticks - start_ticks,
        frames: render.frames - start_frames,
        contacts: logic.contacts,
        wins: logic.wins,
    };
    log::info!(
        "Stopped after {} ticks, {} frames",
        summary.ticks,
        summary.frames
    );
    summary
}
