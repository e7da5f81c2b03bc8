use rand::prelude::SliceRandom;
use serenity::all::UserId;

/// Chooses the winner of a giveaway from its entrants.
pub trait WinnerPicker: Send + Sync {
    fn pick(&self, entrants: &[UserId]) -> Option<UserId>;
}

pub struct RandomPicker;

impl WinnerPicker for RandomPicker {
    fn pick(&self, entrants: &[UserId]) -> Option<UserId> {
        entrants.choose(&mut rand::thread_rng()).copied()
    }
}

#[cfg(test)]
pub mod testing {
    use std::sync::Mutex;

    use rand::{prelude::SliceRandom, rngs::StdRng, SeedableRng};
    use serenity::all::UserId;

    use super::WinnerPicker;

    pub struct SeededPicker {
        rng: Mutex<StdRng>,
    }

    impl SeededPicker {
        pub fn new(seed: u64) -> Self {
            SeededPicker {
                rng: Mutex::new(StdRng::seed_from_u64(seed)),
            }
        }
    }

    impl WinnerPicker for SeededPicker {
        fn pick(&self, entrants: &[UserId]) -> Option<UserId> {
            entrants.choose(&mut *self.rng.lock().unwrap()).copied()
        }
    }
}

#[cfg(test)]
mod tests {
    use serenity::all::UserId;

    use super::{testing::SeededPicker, RandomPicker, WinnerPicker};

    fn entrants() -> Vec<UserId> {
        (1..=25).map(UserId::new).collect()
    }

    #[test]
    fn test_empty_pool_has_no_winner() {
        assert_eq!(RandomPicker.pick(&[]), None);
        assert_eq!(SeededPicker::new(7).pick(&[]), None);
    }

    #[test]
    fn test_winner_is_always_an_entrant() {
        let pool = entrants();
        for _ in 0..200 {
            let winner = RandomPicker.pick(&pool).unwrap();
            assert!(pool.contains(&winner));
        }
    }

    #[test]
    fn test_single_entrant_always_wins() {
        let pool = vec![UserId::new(99)];
        assert_eq!(RandomPicker.pick(&pool), Some(UserId::new(99)));
    }

    #[test]
    fn test_same_seed_draws_same_sequence() {
        let pool = entrants();
        let first = SeededPicker::new(1234);
        let second = SeededPicker::new(1234);

        let first_draws: Vec<_> = (0..10).map(|_| first.pick(&pool)).collect();
        let second_draws: Vec<_> = (0..10).map(|_| second.pick(&pool)).collect();
        assert_eq!(first_draws, second_draws);
    }
}
