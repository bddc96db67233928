//! Reveal-on-scroll policy: observer options per element kind, the one-shot
//! trigger, stagger delays, counters and per-character text reveal.

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealKind {
    Section,
    Card,
    Counter,
    Text,
}

impl RevealKind {
    pub const ALL: [RevealKind; 4] = [
        RevealKind::Section,
        RevealKind::Card,
        RevealKind::Counter,
        RevealKind::Text,
    ];

    pub fn options(self) -> ObserverOptions {
        match self {
            RevealKind::Section => ObserverOptions {
                threshold: SECTION_THRESHOLD,
                root_margin: SECTION_ROOT_MARGIN,
            },
            RevealKind::Card => ObserverOptions {
                threshold: CARD_THRESHOLD,
                root_margin: DEFAULT_ROOT_MARGIN,
            },
            RevealKind::Counter => ObserverOptions {
                threshold: COUNTER_THRESHOLD,
                root_margin: DEFAULT_ROOT_MARGIN,
            },
            RevealKind::Text => ObserverOptions {
                threshold: TEXT_THRESHOLD,
                root_margin: DEFAULT_ROOT_MARGIN,
            },
        }
    }

    /// CSS class added when the element is revealed. Counters animate their text instead.
    pub fn class(self) -> Option<&'static str> {
        match self {
            RevealKind::Section => Some("animate-in"),
            RevealKind::Card => Some("card-animate-in"),
            RevealKind::Counter => None,
            RevealKind::Text => Some("revealed"),
        }
    }

    pub fn selector(self) -> &'static str {
        match self {
            RevealKind::Section => ".animated-section",
            RevealKind::Card => ".animated-card",
            RevealKind::Counter => ".animated-counter",
            RevealKind::Text => ".text-reveal",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OneShotState {
    #[default]
    Watching,
    Fired,
}

/// Fires at most once per element; not restartable without a remount.
#[derive(Clone, Copy, Debug, Default)]
pub struct OneShot {
    state: OneShotState,
}

impl OneShot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed an intersection entry. Returns true exactly once, on the first
    /// intersecting entry.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.state == OneShotState::Fired || !is_intersecting {
            return false;
        }
        self.state = OneShotState::Fired;
        true
    }

    pub fn state(&self) -> OneShotState {
        self.state
    }

    pub fn has_fired(&self) -> bool {
        self.state == OneShotState::Fired
    }
}

#[inline]
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    (index as u32).saturating_mul(step_ms)
}

#[derive(Clone, Debug, PartialEq)]
pub enum CounterEnd {
    Number(u64),
    Text(String),
}

impl CounterEnd {
    /// Numeric when the whole attribute parses as an integer.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<u64>() {
            Ok(n) => CounterEnd::Number(n),
            Err(_) => CounterEnd::Text(raw.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

/// Counts from zero to `end` over `duration_ms`, rounding down each frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    pub end: CounterEnd,
    pub suffix: String,
    pub duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(end: CounterEnd, suffix: impl Into<String>) -> Self {
        Self {
            end,
            suffix: suffix.into(),
            duration_ms: COUNTER_DURATION_MS,
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Text shown before the counter is revealed.
    pub fn initial_text(&self) -> String {
        format!("0{}", self.suffix)
    }

    pub fn frame(&self, elapsed_ms: f64) -> CounterFrame {
        match &self.end {
            CounterEnd::Text(t) => CounterFrame {
                text: format!("{}{}", t, self.suffix),
                done: true,
            },
            CounterEnd::Number(end) => {
                let progress = if self.duration_ms > 0.0 {
                    (elapsed_ms.max(0.0) / self.duration_ms).min(1.0)
                } else {
                    1.0
                };
                if progress >= 1.0 {
                    return CounterFrame {
                        text: format!("{}{}", end, self.suffix),
                        done: true,
                    };
                }
                let value = (progress * *end as f64).floor() as u64;
                CounterFrame {
                    text: format!("{}{}", value, self.suffix),
                    done: false,
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealChar {
    pub display: char,
    pub delay_sec: f32,
}

/// Split text into per-character reveal spans; spaces become NBSP so they keep their width.
pub fn reveal_chars(text: &str) -> Vec<RevealChar> {
    text.chars()
        .enumerate()
        .map(|(i, c)| RevealChar {
            display: if c == ' ' { '\u{00A0}' } else { c },
            delay_sec: i as f32 * TEXT_CHAR_DELAY_SEC,
        })
        .collect()
}
