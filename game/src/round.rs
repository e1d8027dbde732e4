use std::collections::BTreeSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::round_timer::RoundTimer;
use crate::words::{Category, Difficulty};

/// Number of body segments the gallows figure is drawn with.
pub const BODY_PARTS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyPolicy {
    pub max_wrong: u32,
    pub time_limit: Option<Duration>,
}

impl Difficulty {
    pub fn policy(self) -> DifficultyPolicy {
        match self {
            Difficulty::Easy => DifficultyPolicy {
                max_wrong: 8,
                time_limit: None,
            },
            Difficulty::Medium => DifficultyPolicy {
                max_wrong: 6,
                time_limit: Some(Duration::from_secs(120)),
            },
            Difficulty::Hard => DifficultyPolicy {
                max_wrong: 4,
                time_limit: Some(Duration::from_secs(60)),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    Ignored,
    Correct,
    Wrong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossReason {
    OutOfLives,
    TimeUp,
}

impl LossReason {
    pub fn message(self) -> &'static str {
        match self {
            LossReason::OutOfLives => "Out of lives!",
            LossReason::TimeUp => "Time's up!",
        }
    }
}

/// How a guessed letter relates to the word, for keyboard coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterState {
    Unguessed,
    Hit,
    Miss,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    word: String,
    guesses: BTreeSet<char>,
    wrong_count: u32,
    max_wrong: u32,
    category: Category,
    difficulty: Difficulty,
    timer: Option<RoundTimer>,
}

impl RoundState {
    /// `now` is the game clock at round start; it anchors the timer deadline.
    pub fn new(word: &str, category: Category, difficulty: Difficulty, now: Duration) -> Self {
        let policy = difficulty.policy();
        Self {
            word: word.to_ascii_lowercase(),
            guesses: BTreeSet::new(),
            wrong_count: 0,
            max_wrong: policy.max_wrong,
            category,
            difficulty,
            timer: policy.time_limit.map(|limit| RoundTimer::new(now, limit)),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn guesses(&self) -> &BTreeSet<char> {
        &self.guesses
    }

    pub fn wrong_count(&self) -> u32 {
        self.wrong_count
    }

    pub fn max_wrong(&self) -> u32 {
        self.max_wrong
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn timer(&self) -> Option<&RoundTimer> {
        self.timer.as_ref()
    }

    pub fn is_won(&self) -> bool {
        self.word
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .all(|c| self.guesses.contains(&c))
    }

    pub fn is_out_of_lives(&self) -> bool {
        self.wrong_count >= self.max_wrong
    }

    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_out_of_lives() || self.timer.is_some_and(|t| t.has_fired())
    }

    /// Records a guess. Anything that is not a fresh `a..=z` letter in a live round is ignored.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() || self.guesses.contains(&letter) || self.is_over() {
            return GuessOutcome::Ignored;
        }

        self.guesses.insert(letter);
        if self.word.contains(letter) {
            GuessOutcome::Correct
        } else {
            self.wrong_count = (self.wrong_count + 1).min(self.max_wrong);
            GuessOutcome::Wrong
        }
    }

    pub fn letter_state(&self, letter: char) -> LetterState {
        if !self.guesses.contains(&letter) {
            LetterState::Unguessed
        } else if self.word.contains(letter) {
            LetterState::Hit
        } else {
            LetterState::Miss
        }
    }

    /// The word with unguessed letters as `_`, one space between characters.
    pub fn masked_word(&self) -> String {
        self.word
            .chars()
            .map(|c| {
                if c.is_ascii_alphabetic() && !self.guesses.contains(&c) {
                    '_'
                } else {
                    c
                }
            })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Body segments that should be visible for the current wrong count.
    pub fn body_parts_due(&self) -> usize {
        if self.max_wrong == 0 {
            return BODY_PARTS;
        }
        (self.wrong_count as usize * BODY_PARTS) / self.max_wrong as usize
    }

    pub fn lives_left(&self) -> u32 {
        self.max_wrong.saturating_sub(self.wrong_count)
    }

    /// True once, on the first call at or past the deadline of a live round.
    pub fn check_timeout(&mut self, now: Duration) -> bool {
        if self.is_won() || self.is_out_of_lives() {
            return false;
        }
        self.timer.as_mut().is_some_and(|t| t.fire_if_up(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(word: &str, difficulty: Difficulty) -> RoundState {
        RoundState::new(word, Category::Animals, difficulty, Duration::ZERO)
    }

    #[test]
    fn repeated_letters_need_one_guess_each() {
        let mut r = round("apple", Difficulty::Easy);
        for c in ['a', 'p', 'l'] {
            assert_eq!(r.guess(c), GuessOutcome::Correct);
            assert!(!r.is_won());
        }
        assert_eq!(r.guess('e'), GuessOutcome::Correct);
        assert!(r.is_won());
        assert_eq!(r.wrong_count(), 0);
    }

    #[test]
    fn repeated_guess_changes_nothing() {
        let mut r = round("dog", Difficulty::Easy);
        assert_eq!(r.guess('x'), GuessOutcome::Wrong);
        let before = r.clone();
        assert_eq!(r.guess('x'), GuessOutcome::Ignored);
        assert_eq!(r.guess('X'), GuessOutcome::Ignored);
        assert_eq!(r, before);
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut r = round("dog", Difficulty::Easy);
        for c in ['1', '-', ' ', 'é'] {
            assert_eq!(r.guess(c), GuessOutcome::Ignored);
        }
        assert!(r.guesses().is_empty());
    }

    #[test]
    fn hyphen_is_shown_and_never_needs_guessing() {
        let mut r = RoundState::new("rolls-royce", Category::Cars, Difficulty::Hard, Duration::ZERO);
        assert_eq!(r.masked_word(), "_ _ _ _ _ - _ _ _ _ _");
        for c in ['r', 'o', 'l', 's', 'y', 'c', 'e'] {
            r.guess(c);
        }
        assert!(r.is_won());
        assert_eq!(r.masked_word(), "r o l l s - r o y c e");
    }

    #[test]
    fn wrong_count_stops_at_max_and_round_locks() {
        let mut r = round("dog", Difficulty::Hard);
        for c in ['a', 'b', 'c', 'e'] {
            assert_eq!(r.guess(c), GuessOutcome::Wrong);
        }
        assert!(r.is_out_of_lives());
        assert_eq!(r.guess('f'), GuessOutcome::Ignored);
        assert_eq!(r.wrong_count(), 4);
        assert_eq!(r.lives_left(), 0);
    }

    #[test]
    fn body_parts_scale_with_lives() {
        let mut r = round("dog", Difficulty::Easy);
        let mut due = Vec::new();
        for c in ['a', 'b', 'c', 'e', 'f', 'h', 'i', 'j'] {
            r.guess(c);
            due.push(r.body_parts_due());
        }
        assert_eq!(due, vec![0, 1, 2, 3, 3, 4, 5, 6]);
    }

    #[test]
    fn easy_has_no_timer_and_hard_times_out_once() {
        let mut easy = round("dog", Difficulty::Easy);
        assert!(easy.timer().is_none());
        assert!(!easy.check_timeout(Duration::from_secs(10_000)));

        let mut hard = round("dog", Difficulty::Hard);
        assert!(!hard.check_timeout(Duration::from_secs(59)));
        assert!(hard.check_timeout(Duration::from_secs(60)));
        assert!(!hard.check_timeout(Duration::from_secs(61)));
        assert!(hard.is_over());
        assert_eq!(hard.guess('d'), GuessOutcome::Ignored);
    }

    #[test]
    fn letter_state_tracks_hits_and_misses() {
        let mut r = round("dog", Difficulty::Easy);
        r.guess('d');
        r.guess('z');
        assert_eq!(r.letter_state('d'), LetterState::Hit);
        assert_eq!(r.letter_state('z'), LetterState::Miss);
        assert_eq!(r.letter_state('o'), LetterState::Unguessed);
    }
}
