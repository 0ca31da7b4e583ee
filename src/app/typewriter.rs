use leptos::prelude::*;
use leptos_use::use_interval_fn;

/// Milliseconds between typewriter ticks.
const TICK_MS: u64 = 75;
/// Ticks a fully typed phrase stays on screen before deletion starts.
const HOLD_TICKS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Typing,
    Holding(u32),
    Deleting,
}

/// Cycles through a fixed phrase list: type forward, hold, delete,
/// advance to the next phrase, wrap around. One tick per step.
#[derive(Debug, Clone)]
pub struct TypewriterState {
    phrases: &'static [&'static str],
    phrase: usize,
    chars: usize,
    mode: Mode,
}

impl TypewriterState {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self {
            phrases,
            phrase: 0,
            chars: 0,
            mode: Mode::Typing,
        }
    }

    fn current(&self) -> &'static str {
        self.phrases.get(self.phrase).copied().unwrap_or_default()
    }

    fn render(&self) -> String {
        self.current().chars().take(self.chars).collect()
    }

    /// Advances one tick and returns the text to display.
    pub fn step(&mut self) -> String {
        let len = self.current().chars().count();
        match self.mode {
            Mode::Typing => {
                if self.chars < len {
                    self.chars += 1;
                }
                if self.chars >= len {
                    self.mode = Mode::Holding(HOLD_TICKS);
                }
            }
            Mode::Holding(0) => self.mode = Mode::Deleting,
            Mode::Holding(n) => self.mode = Mode::Holding(n - 1),
            Mode::Deleting => {
                if self.chars > 0 {
                    self.chars -= 1;
                }
                if self.chars == 0 && !self.phrases.is_empty() {
                    self.phrase = (self.phrase + 1) % self.phrases.len();
                    self.mode = Mode::Typing;
                }
            }
        }
        self.render()
    }
}

#[component]
pub fn Typewriter(phrases: &'static [&'static str]) -> impl IntoView {
    let state = StoredValue::new(TypewriterState::new(phrases));
    let (text, set_text) = signal(String::new());

    let _ = use_interval_fn(
        move || {
            state.update_value(|s| set_text(s.step()));
        },
        TICK_MS,
    );

    view! {
        <span>
            {move || text.get()}
            <span class="typewriter-caret">"|"</span>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASES: &[&str] = &["ab", "xyz"];

    #[test]
    fn test_types_one_char_per_tick() {
        let mut tw = TypewriterState::new(PHRASES);
        assert_eq!(tw.step(), "a");
        assert_eq!(tw.step(), "ab");
    }

    #[test]
    fn test_holds_before_deleting() {
        let mut tw = TypewriterState::new(PHRASES);
        tw.step();
        tw.step();
        // Held in place for the configured number of ticks
        for _ in 0..=HOLD_TICKS {
            assert_eq!(tw.step(), "ab");
        }
        assert_eq!(tw.step(), "a");
    }

    #[test]
    fn test_advances_to_next_phrase_and_wraps() {
        let mut tw = TypewriterState::new(PHRASES);
        // ab: type 2, hold HOLD_TICKS+1, delete 2
        for _ in 0..(2 + HOLD_TICKS + 1 + 2) {
            tw.step();
        }
        assert_eq!(tw.step(), "x");
        // xyz: finish typing, hold, delete, then wrap back to the first
        for _ in 0..(2 + HOLD_TICKS + 1 + 3) {
            tw.step();
        }
        assert_eq!(tw.step(), "a");
    }

    #[test]
    fn test_empty_phrase_list_renders_nothing() {
        let mut tw = TypewriterState::new(&[]);
        assert_eq!(tw.step(), "");
        assert_eq!(tw.step(), "");
    }
}
