use crate::consts;
use enum_map::Enum;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// How fast the snake moves at the start of a game
#[derive(Clone, Copy, Debug, Default, Deserialize, Enum, Eq, Hash, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub(crate) const DISPLAY_WIDTH: u16 = 6;

    pub(crate) fn iter() -> impl Iterator<Item = Difficulty> {
        (0..Self::LENGTH).map(Self::from_usize)
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub(crate) fn description(self) -> &'static str {
        match self {
            Difficulty::Easy => "Slow moves, good for beginners",
            Difficulty::Medium => "Moderate speed, balanced play",
            Difficulty::Hard => "Fast moves, a challenge for experts",
        }
    }

    /// The tick interval at a score of zero
    pub(crate) fn base_speed(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(200),
            Difficulty::Medium => Duration::from_millis(150),
            Difficulty::Hard => Duration::from_millis(100),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Return the tick interval for a game at the given score & difficulty.
///
/// The interval starts at the difficulty's base speed and shrinks by
/// [`SPEEDUP_STEP`][consts::SPEEDUP_STEP] for every
/// [`SPEEDUP_SCORE_INTERVAL`][consts::SPEEDUP_SCORE_INTERVAL] points, but
/// never below [`MIN_TICK_PERIOD`][consts::MIN_TICK_PERIOD].
pub(crate) fn current_speed(score: u32, difficulty: Difficulty) -> Duration {
    let steps = score / consts::SPEEDUP_SCORE_INTERVAL;
    consts::SPEEDUP_STEP
        .checked_mul(steps)
        .and_then(|reduction| difficulty.base_speed().checked_sub(reduction))
        .map_or(consts::MIN_TICK_PERIOD, |speed| {
            speed.max(consts::MIN_TICK_PERIOD)
        })
}

/// The "speed level" shown to the player: 1 at 200ms per tick, going up by
/// one for every 5ms faster than that
pub(crate) fn speed_level(speed: Duration) -> u32 {
    let faster_by = Duration::from_millis(200).saturating_sub(speed);
    let steps = faster_by.as_millis() / consts::SPEEDUP_STEP.as_millis();
    u32::try_from(steps).unwrap_or(u32::MAX).saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Difficulty::Easy, 200)]
    #[case(0, Difficulty::Medium, 150)]
    #[case(0, Difficulty::Hard, 100)]
    #[case(10, Difficulty::Medium, 150)]
    #[case(20, Difficulty::Medium, 145)]
    #[case(30, Difficulty::Medium, 145)]
    #[case(40, Difficulty::Medium, 140)]
    #[case(200, Difficulty::Hard, 50)]
    #[case(190, Difficulty::Hard, 55)]
    #[case(1000, Difficulty::Easy, 50)]
    #[case(u32::MAX, Difficulty::Easy, 50)]
    fn test_current_speed(#[case] score: u32, #[case] difficulty: Difficulty, #[case] ms: u64) {
        assert_eq!(
            current_speed(score, difficulty),
            Duration::from_millis(ms)
        );
    }

    #[test]
    fn current_speed_is_monotonic() {
        for difficulty in Difficulty::iter() {
            let mut prev = current_speed(0, difficulty);
            for score in (0..2000).step_by(10) {
                let speed = current_speed(score, difficulty);
                assert!(speed <= prev, "speed went up at score {score} on {difficulty}");
                assert!(speed >= consts::MIN_TICK_PERIOD);
                prev = speed;
            }
        }
    }

    #[rstest]
    #[case(200, 1)]
    #[case(150, 11)]
    #[case(100, 21)]
    #[case(50, 31)]
    #[case(250, 1)]
    fn test_speed_level(#[case] ms: u64, #[case] level: u32) {
        assert_eq!(speed_level(Duration::from_millis(ms)), level);
    }

    #[test]
    fn display_width() {
        let actual_width = Difficulty::iter()
            .map(|d| d.as_str().chars().count())
            .max()
            .unwrap();
        assert_eq!(actual_width, usize::from(Difficulty::DISPLAY_WIDTH));
    }

    #[test]
    fn fmt_width() {
        assert_eq!(format!("{:6}", Difficulty::Hard), "Hard  ");
    }

    #[test]
    fn deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            difficulty: Difficulty,
        }
        let w: Wrapper = toml::from_str("difficulty = \"hard\"").unwrap();
        assert_eq!(w.difficulty, Difficulty::Hard);
    }
}
