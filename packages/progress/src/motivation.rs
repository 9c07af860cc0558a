use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

const STARTING: &[&str] = &[
    "Every expert was once a beginner. Let's start this journey!",
    "The secret of getting ahead is getting started.",
    "A journey of a thousand miles begins with a single step.",
];

const IN_PROGRESS: &[&str] = &[
    "You're making great progress! Keep going!",
    "Consistency is the key to mastery.",
    "Small steps every day lead to big results.",
    "You're doing amazing! Don't stop now!",
];

const ALMOST_DONE: &[&str] = &[
    "So close to the finish line! Push through!",
    "The last mile is the hardest, but you've got this!",
    "Victory is just around the corner!",
];

const COMPLETED: &[&str] = &[
    "🎉 Congratulations! You've completed this roadmap!",
    "🏆 Achievement unlocked! You did it!",
    "⭐ Excellence achieved! What's next?",
];

/// Encouragement bucket for a progress percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MotivationTier {
    Starting,
    InProgress,
    AlmostDone,
    Completed,
}

impl MotivationTier {
    pub fn from_progress(progress: u8) -> Self {
        match progress {
            0 => MotivationTier::Starting,
            1..=49 => MotivationTier::InProgress,
            50..=99 => MotivationTier::AlmostDone,
            _ => MotivationTier::Completed,
        }
    }

    pub fn messages(&self) -> &'static [&'static str] {
        match self {
            MotivationTier::Starting => STARTING,
            MotivationTier::InProgress => IN_PROGRESS,
            MotivationTier::AlmostDone => ALMOST_DONE,
            MotivationTier::Completed => COMPLETED,
        }
    }

    pub fn pick_message<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        self.messages().choose(rng).copied().unwrap_or_default()
    }
}

/// Random message for the given progress using the thread-local RNG
pub fn motivational_message(progress: u8) -> &'static str {
    MotivationTier::from_progress(progress).pick_message(&mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    #[rstest]
    #[case(0, MotivationTier::Starting)]
    #[case(1, MotivationTier::InProgress)]
    #[case(49, MotivationTier::InProgress)]
    #[case(50, MotivationTier::AlmostDone)]
    #[case(99, MotivationTier::AlmostDone)]
    #[case(100, MotivationTier::Completed)]
    fn test_tier_boundaries(#[case] progress: u8, #[case] tier: MotivationTier) {
        assert_eq!(MotivationTier::from_progress(progress), tier);
    }

    #[test]
    fn test_pick_message_comes_from_tier() {
        let mut rng = StdRng::seed_from_u64(7);
        let tier = MotivationTier::AlmostDone;
        for _ in 0..10 {
            assert!(tier.messages().contains(&tier.pick_message(&mut rng)));
        }
    }

    #[test]
    fn test_motivational_message_not_empty() {
        assert!(!motivational_message(100).is_empty());
    }
}
