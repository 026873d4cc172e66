use enum_dispatch::enum_dispatch;
use enum_map::Enum;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// Pre-game settings chosen on the start screen (or seeded from the
/// configuration file)
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Options {
    pub(crate) difficulty: Difficulty,
    pub(crate) sound: bool,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            difficulty: Difficulty::default(),
            sound: true,
        }
    }
}

impl Options {
    pub(crate) fn get(&self, key: OptKey) -> OptValue {
        match key {
            OptKey::Difficulty => self.difficulty.into(),
            OptKey::Sound => self.sound.into(),
        }
    }

    pub(crate) fn set(&mut self, key: OptKey, value: OptValue) {
        match key {
            OptKey::Difficulty => {
                self.difficulty = value
                    .try_into()
                    .expect("Options::set(Difficulty, value) called with non-Difficulty value");
            }
            OptKey::Sound => {
                self.sound = value
                    .try_into()
                    .expect("Options::set(Sound, value) called with non-Bool value");
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum OptKey {
    Difficulty,
    Sound,
}

impl OptKey {
    pub(crate) const DISPLAY_WIDTH: u16 = 10;

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            OptKey::Difficulty => "Difficulty",
            OptKey::Sound => "Sound",
        }
    }
}

impl fmt::Display for OptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[enum_dispatch]
pub(crate) trait Adjustable {
    fn increase(&mut self);
    fn decrease(&mut self);
    fn toggle(&mut self);
    fn can_increase(&self) -> bool;
    fn can_decrease(&self) -> bool;
}

#[enum_dispatch(Adjustable)] // This also gives us From and TryInto
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum OptValue {
    Bool(bool),
    Difficulty,
}

impl OptValue {
    pub(crate) const DISPLAY_WIDTH: u16 = 10;
}

// This is needed for EnumMap to be convenient to construct.
impl Default for OptValue {
    fn default() -> OptValue {
        OptValue::Bool(false)
    }
}

impl fmt::Display for OptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            OptValue::Bool(false) => write!(f, "   [ ]    "),
            OptValue::Bool(true) => write!(f, "   [✓]    "),
            OptValue::Difficulty(df) => {
                write!(
                    f,
                    "{left} {df:6} {right}",
                    left = if df.can_decrease() { '◀' } else { '◁' },
                    right = if df.can_increase() { '▶' } else { '▷' }
                )
            }
        }
    }
}

impl Adjustable for bool {
    fn increase(&mut self) {
        *self = true;
    }

    fn decrease(&mut self) {
        *self = false;
    }

    fn toggle(&mut self) {
        *self = !*self;
    }

    fn can_increase(&self) -> bool {
        !*self
    }

    fn can_decrease(&self) -> bool {
        *self
    }
}

/// How fast the snake moves.  Each difficulty is just a fixed tick
/// interval, selected before a run and constant for its duration.
#[derive(Clone, Copy, Debug, Default, Deserialize, Enum, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub(crate) const MINIMUM: Difficulty = Difficulty::Easy;
    pub(crate) const MAXIMUM: Difficulty = Difficulty::Hard;

    /// Time between simulation steps at this difficulty
    pub(crate) fn tick_interval(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(150),
            Difficulty::Medium => Duration::from_millis(100),
            Difficulty::Hard => Duration::from_millis(50),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Adjustable for Difficulty {
    fn increase(&mut self) {
        match self {
            Difficulty::Easy => *self = Difficulty::Medium,
            Difficulty::Medium => *self = Difficulty::Hard,
            Difficulty::Hard => (),
        }
    }

    fn decrease(&mut self) {
        match self {
            Difficulty::Easy => (),
            Difficulty::Medium => *self = Difficulty::Easy,
            Difficulty::Hard => *self = Difficulty::Medium,
        }
    }

    fn toggle(&mut self) {}

    fn can_increase(&self) -> bool {
        *self != Self::MAXIMUM
    }

    fn can_decrease(&self) -> bool {
        *self != Self::MINIMUM
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::EnumExt;

    mod opt_key {
        use super::*;

        #[test]
        fn display_width() {
            let actual_width = OptKey::iter()
                .map(|key| key.as_str().chars().count())
                .max()
                .unwrap();
            assert_eq!(actual_width, usize::from(OptKey::DISPLAY_WIDTH));
        }

        #[test]
        fn fmt_width() {
            assert_eq!(
                format!(
                    "{:width$}",
                    OptKey::Sound,
                    width = usize::from(OptKey::DISPLAY_WIDTH)
                ),
                "Sound     "
            );
        }
    }

    mod opt_value {
        use super::*;

        #[test]
        fn display_width() {
            let actual_width = [
                OptValue::Bool(false),
                OptValue::Bool(true),
                OptValue::Difficulty(Difficulty::Easy),
                OptValue::Difficulty(Difficulty::Medium),
                OptValue::Difficulty(Difficulty::Hard),
            ]
            .iter()
            .map(|value| value.to_string().chars().count())
            .max()
            .unwrap();
            assert_eq!(actual_width, usize::from(OptValue::DISPLAY_WIDTH));
        }
    }

    mod difficulty {
        use super::*;
        use rstest::rstest;
        use std::time::Duration;

        #[rstest]
        #[case(Difficulty::Easy, Duration::from_millis(150))]
        #[case(Difficulty::Medium, Duration::from_millis(100))]
        #[case(Difficulty::Hard, Duration::from_millis(50))]
        fn intervals(#[case] df: Difficulty, #[case] interval: Duration) {
            assert_eq!(df.tick_interval(), interval);
        }

        #[test]
        fn adjust_endpoints() {
            let mut df = Difficulty::Easy;
            df.decrease();
            assert_eq!(df, Difficulty::Easy);
            df.increase();
            assert_eq!(df, Difficulty::Medium);
            df.increase();
            assert_eq!(df, Difficulty::Hard);
            df.increase();
            assert_eq!(df, Difficulty::Hard);
        }

        #[test]
        fn fmt_width() {
            assert_eq!(format!("{:6}", Difficulty::Easy), "Easy  ");
        }
    }

    mod options {
        use super::*;

        #[test]
        fn get_set_roundtrip() {
            let mut opts = Options::default();
            for key in OptKey::iter() {
                let value = opts.get(key);
                opts.set(key, value);
            }
            assert_eq!(opts, Options::default());
        }

        #[test]
        fn defaults() {
            let opts = Options::default();
            assert_eq!(opts.difficulty, Difficulty::Medium);
            assert!(opts.sound);
        }
    }
}
