//! Timer controller
//!
//! The controller owns every piece of timing state (state machine,
//! debounce window, countdown session, alarm sequencer) and is advanced
//! by one synchronous call per tick. Nothing is global: the firmware's
//! timer task holds the only instance.
//!
//! Per tick:
//! 1. Classify the sample into a face.
//! 2. While counting down or alarming, run the debounce tracker against
//!    the active face; a confirmed change returns to the menu and ends
//!    the tick.
//! 3. Dispatch on the state: start a countdown from the menu, step the
//!    countdown, or step the alarm sequencer.

use crate::alarm::{AlarmOutput, AlarmSequencer};
use crate::config::{FaceBinding, TimerConfig};
use crate::countdown::{CountdownSession, CountdownTick};
use crate::debounce::{DebounceTracker, FaceChange};
use crate::orientation::{classify, AccelerationSample, Face};
use crate::state::{Event, TimerState};
use crate::time::Millis;
use crate::traits::{Clock, MotionError, MotionSource, PresentationSink};

/// Controller state for coordinating the timer
#[derive(Debug, Clone)]
pub struct TimerController {
    /// Build-time configuration
    config: TimerConfig,
    /// Current top-level state
    state: TimerState,
    /// Binding of the face that started the current session
    active: Option<FaceBinding>,
    /// Face-change debounce window
    debounce: DebounceTracker,
    /// Countdown in progress (Countdown state only)
    session: Option<CountdownSession>,
    /// Alarm clocks (Alarm state only)
    alarm: Option<AlarmSequencer>,
    /// Face seen on the most recent tick
    last_face: Face,
}

impl TimerController {
    /// Create a new controller in the menu state
    ///
    /// Call [`start`](Self::start) once the presentation sink is ready.
    pub fn new(config: TimerConfig) -> Self {
        Self {
            debounce: DebounceTracker::new(config.debounce_ms),
            config,
            state: TimerState::Menu,
            active: None,
            session: None,
            alarm: None,
            last_face: Face::None,
        }
    }

    /// Show the menu and put all outputs in their idle state
    pub fn start<P: PresentationSink>(&mut self, sink: &mut P) {
        self.state = TimerState::Menu;
        self.enter_menu(sink);
    }

    /// Get current state
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Face the current session is bound to (`None` in the menu)
    pub fn active_face(&self) -> Face {
        self.active.map(|b| b.face).unwrap_or(Face::None)
    }

    /// Binding of the current session
    pub fn active_binding(&self) -> Option<&FaceBinding> {
        self.active.as_ref()
    }

    /// Countdown in progress
    pub fn session(&self) -> Option<&CountdownSession> {
        self.session.as_ref()
    }

    /// Seconds left on the countdown in progress
    pub fn remaining_s(&self) -> Option<u16> {
        self.session.as_ref().map(|s| s.remaining_s())
    }

    /// Alarm clocks, while alarming
    pub fn alarm(&self) -> Option<&AlarmSequencer> {
        self.alarm.as_ref()
    }

    /// Check if a face change is currently being debounced
    pub fn change_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    /// Face classified on the most recent tick
    pub fn last_face(&self) -> Face {
        self.last_face
    }

    /// Read the motion source and clock, then run one tick
    ///
    /// A failed read leaves the controller untouched.
    pub fn poll<M, C, P>(
        &mut self,
        motion: &mut M,
        clock: &C,
        sink: &mut P,
    ) -> Result<Option<Event>, MotionError>
    where
        M: MotionSource,
        C: Clock,
        P: PresentationSink,
    {
        let sample = motion.sample()?;
        Ok(self.tick(&sample, clock.now_ms(), sink))
    }

    /// Run one tick with a sample taken at `now`
    ///
    /// Returns the event that caused a state transition, if any.
    pub fn tick<P: PresentationSink>(
        &mut self,
        sample: &AccelerationSample,
        now: Millis,
        sink: &mut P,
    ) -> Option<Event> {
        let face = classify(sample, &self.config.gravity);
        self.last_face = face;

        if self.state.is_timing() {
            let active = self.active_face();
            if self.debounce.observe(face, active, now) == FaceChange::Confirmed {
                return self.dispatch(Event::ReorientationConfirmed, now, sink);
            }
        } else {
            // Menu: nothing to debounce against
            self.debounce.reset();
            self.active = None;
        }

        match self.state {
            TimerState::Menu => {
                if face.is_trigger() {
                    self.dispatch(Event::FaceDetected(face), now, sink)
                } else {
                    None
                }
            }
            TimerState::Countdown => self.tick_countdown(now, sink),
            TimerState::Alarm => {
                if let Some(alarm) = self.alarm.as_mut() {
                    let output = alarm.tick(now);
                    publish(&output, sink);
                }
                None
            }
        }
    }

    /// Step the countdown
    fn tick_countdown<P: PresentationSink>(&mut self, now: Millis, sink: &mut P) -> Option<Event> {
        let session = self.session.as_mut()?;
        match session.tick(now) {
            CountdownTick::Unchanged => None,
            CountdownTick::Decremented(remaining) => {
                sink.render_countdown(remaining, session.orientation());
                None
            }
            CountdownTick::Expired => self.dispatch(Event::CountdownExpired, now, sink),
        }
    }

    /// Apply an event and run the entry actions of the new state
    fn dispatch<P: PresentationSink>(
        &mut self,
        event: Event,
        now: Millis,
        sink: &mut P,
    ) -> Option<Event> {
        let next = self.state.transition(event);
        if next == self.state {
            return None;
        }

        match (next, event) {
            (TimerState::Countdown, Event::FaceDetected(face)) => {
                let binding = *self.config.binding_for(face)?;
                self.enter_countdown(binding, now, sink);
            }
            (TimerState::Alarm, _) => self.enter_alarm(now, sink),
            (TimerState::Menu, _) => self.enter_menu(sink),
            _ => return None,
        }

        self.state = next;
        Some(event)
    }

    /// Hard reset of all transient timing state
    fn enter_menu<P: PresentationSink>(&mut self, sink: &mut P) {
        self.active = None;
        self.session = None;
        self.alarm = None;
        self.debounce.reset();

        sink.set_indicator(false);
        sink.set_tone(0);
        sink.render_menu();
    }

    fn enter_countdown<P: PresentationSink>(
        &mut self,
        binding: FaceBinding,
        now: Millis,
        sink: &mut P,
    ) {
        // Record the baseline before the first debounce check
        self.active = Some(binding);
        self.debounce.reset();

        let session = CountdownSession::start(&binding, now);
        sink.render_countdown(session.remaining_s(), session.orientation());
        self.session = Some(session);
    }

    fn enter_alarm<P: PresentationSink>(&mut self, now: Millis, sink: &mut P) {
        // The session is handed off, not kept
        self.session = None;

        let (alarm, output) =
            AlarmSequencer::start(self.config.melody, self.config.blink_period_ms, now);
        publish(&output, sink);
        self.alarm = Some(alarm);

        if let Some(binding) = self.active {
            sink.render_alarm(binding.orientation);
        }
    }
}

/// Forward sequencer output changes to the sink
fn publish<P: PresentationSink>(output: &AlarmOutput, sink: &mut P) {
    if output.is_empty() {
        return;
    }
    if let Some(level) = output.indicator {
        sink.set_indicator(level);
    }
    if let Some(hz) = output.tone_hz {
        sink.set_tone(hz);
    }
}
