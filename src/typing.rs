use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::animate::{Animation, Animator, Scheduler};

pub const TYPE_INTERVAL: Duration = Duration::from_millis(100);
pub const HOLD_DELAY: Duration = Duration::from_millis(1500);
pub const ERASE_INTERVAL: Duration = Duration::from_millis(50);
pub const BLINK_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypingError {
    #[error("Typing sequence needs at least one phrase")]
    InvalidInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Erasing,
    Complete,
}

/// What the hero headline shows at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub text: String,
    pub complete: bool,
}

/// Types each phrase out, holds it, erases it and moves on. The last phrase
/// is typed and then left on screen.
#[derive(Debug, Clone)]
pub struct TypingState {
    phrases: Arc<[Vec<char>]>,
    phrase_index: usize,
    // always equal to the number of chars in `displayed`
    char_index: usize,
    phase: Phase,
    displayed: String,
}

impl TypingState {
    pub fn new<I, S>(phrases: I) -> Result<Self, TypingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases = phrases
            .into_iter()
            .map(|p| p.as_ref().chars().collect::<Vec<_>>())
            .collect::<Arc<[_]>>();
        if phrases.is_empty() {
            return Err(TypingError::InvalidInput);
        }
        let mut state = Self {
            phrases,
            phrase_index: 0,
            char_index: 0,
            phase: Phase::Typing,
            displayed: String::new(),
        };
        state.settle();
        Ok(state)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn displayed_text(&self) -> &str {
        &self.displayed
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            text: self.displayed.clone(),
            complete: self.is_complete(),
        }
    }

    fn current(&self) -> &[char] {
        &self.phrases[self.phrase_index]
    }

    fn is_last(&self) -> bool {
        self.phrase_index + 1 == self.phrases.len()
    }

    /// Apply the transitions that happen without waiting: a fully typed
    /// phrase starts holding (or completes), and an erased phrase hands over
    /// to the next one.
    fn settle(&mut self) {
        loop {
            match self.phase {
                Phase::Typing if self.char_index == self.current().len() => {
                    self.phase = if self.is_last() {
                        Phase::Complete
                    } else {
                        Phase::Holding
                    };
                }
                Phase::Erasing if self.displayed.is_empty() => {
                    self.phrase_index += 1;
                    self.char_index = 0;
                    self.phase = Phase::Typing;
                }
                _ => return,
            }
        }
    }
}

impl Animation for TypingState {
    type Frame = Snapshot;

    fn next_delay(&self) -> Option<Duration> {
        match self.phase {
            Phase::Typing => Some(TYPE_INTERVAL),
            Phase::Holding => Some(HOLD_DELAY),
            Phase::Erasing => Some(ERASE_INTERVAL),
            Phase::Complete => None,
        }
    }

    fn step(&mut self) -> bool {
        let changed = match self.phase {
            Phase::Typing => {
                let c = self.current()[self.char_index];
                self.displayed.push(c);
                self.char_index += 1;
                true
            }
            Phase::Holding => {
                self.phase = Phase::Erasing;
                false
            }
            Phase::Erasing => {
                self.displayed.pop();
                self.char_index -= 1;
                true
            }
            Phase::Complete => false,
        };
        self.settle();
        changed
    }

    fn frame(&self) -> Snapshot {
        self.snapshot()
    }
}

pub type TypingSequencer<S> = Animator<TypingState, S>;

impl<S: Scheduler> Animator<TypingState, S> {
    /// Start typing `phrases` from the first character of the first phrase.
    /// Nothing is scheduled or emitted when the list is empty.
    pub fn start_phrases<I, P>(&self, phrases: I) -> Result<(), TypingError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let state = TypingState::new(phrases)?;
        log::debug!("starting typing sequence");
        self.start(state);
        Ok(())
    }
}

/// The blinking caret. Toggles forever on its own timer.
#[derive(Debug, Clone, Copy)]
pub struct Cursor {
    visible: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl Animation for Cursor {
    type Frame = bool;

    fn next_delay(&self) -> Option<Duration> {
        Some(BLINK_INTERVAL)
    }

    fn step(&mut self) -> bool {
        self.visible = !self.visible;
        true
    }

    fn frame(&self) -> bool {
        self.visible
    }
}
