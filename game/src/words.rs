use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Animals,
    Movies,
    Countries,
    Sports,
    Fruits,
    Cars,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Animals,
        Category::Movies,
        Category::Countries,
        Category::Sports,
        Category::Fruits,
        Category::Cars,
    ];

    /// Panics when `index` is out of range; callers only pass indices of on-screen buttons.
    pub fn from_index(index: usize) -> Self {
        assert!(
            index < Self::ALL.len(),
            "category index {index} out of range (0..{})",
            Self::ALL.len()
        );
        Self::ALL[index]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Animals => "Animals",
            Category::Movies => "Movies",
            Category::Countries => "Countries",
            Category::Sports => "Sports",
            Category::Fruits => "Fruits",
            Category::Cars => "Cars",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Panics when `index` is out of range.
    pub fn from_index(index: usize) -> Self {
        assert!(
            index < Self::ALL.len(),
            "difficulty index {index} out of range (0..{})",
            Self::ALL.len()
        );
        Self::ALL[index]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easier words, 8 lives, no time limit",
            Difficulty::Medium => "Medium words, 6 lives, 2 minute limit",
            Difficulty::Hard => "Hard words, 4 lives, 1 minute limit",
        }
    }
}

const ANIMALS: [&[&str]; 3] = [
    &["dog", "cat", "pig", "fox", "cow", "rat", "bat", "hen", "bee", "ant"],
    &[
        "tiger", "zebra", "koala", "panda", "camel", "eagle", "shark", "snake", "horse", "sheep",
    ],
    &[
        "elephant",
        "giraffe",
        "penguin",
        "kangaroo",
        "dolphin",
        "rhinoceros",
        "crocodile",
        "octopus",
        "cheetah",
        "panther",
    ],
];

const MOVIES: [&[&str]; 3] = [
    &[
        "jaws", "star", "cars", "up", "toy", "lion", "wall", "bolt", "soul", "nemo",
    ],
    &[
        "frozen", "avatar", "matrix", "aliens", "psycho", "shrek", "titanic", "batman", "joker",
        "rocky",
    ],
    &[
        "inception",
        "gladiator",
        "interstellar",
        "casablanca",
        "godfather",
        "parasite",
        "whiplash",
        "braveheart",
        "goodfellas",
        "apocalypse",
    ],
];

const COUNTRIES: [&[&str]; 3] = [
    &[
        "usa", "cuba", "peru", "mali", "fiji", "iran", "iraq", "chad", "togo", "laos",
    ],
    &[
        "japan", "india", "china", "spain", "italy", "kenya", "egypt", "chile", "sudan", "nepal",
    ],
    &[
        "australia",
        "argentina",
        "singapore",
        "switzerland",
        "kazakhstan",
        "mozambique",
        "bangladesh",
        "madagascar",
        "azerbaijan",
        "kyrgyzstan",
    ],
];

const SPORTS: [&[&str]; 3] = [
    &[
        "golf", "swim", "run", "ski", "surf", "bike", "judo", "yoga", "polo", "bowl",
    ],
    &[
        "soccer", "tennis", "hockey", "boxing", "karate", "rowing", "diving", "cricket", "cycling",
        "fencing",
    ],
    &[
        "basketball",
        "volleyball",
        "gymnastics",
        "wrestling",
        "badminton",
        "skateboard",
        "snowboard",
        "waterpolo",
        "taekwondo",
        "equestrian",
    ],
];

const FRUITS: [&[&str]; 3] = [
    &[
        "pear", "plum", "lime", "kiwi", "fig", "date", "apple", "grape", "melon", "mango",
    ],
    &[
        "orange", "banana", "cherry", "papaya", "guava", "lychee", "apricot", "peach", "lemon",
        "coconut",
    ],
    &[
        "pineapple",
        "watermelon",
        "strawberry",
        "blueberry",
        "blackberry",
        "raspberry",
        "cranberry",
        "dragonfruit",
        "passionfruit",
        "pomegranate",
    ],
];

const CARS: [&[&str]; 3] = [
    &[
        "ford", "audi", "jeep", "kia", "mini", "seat", "fiat", "bmw", "saab", "opel",
    ],
    &[
        "toyota", "nissan", "honda", "mazda", "subaru", "volvo", "lexus", "jaguar", "tesla",
        "porsche",
    ],
    &[
        "mercedes",
        "lamborghini",
        "maserati",
        "bentley",
        "ferrari",
        "bugatti",
        "chevrolet",
        "mitsubishi",
        "volkswagen",
        "rolls-royce",
    ],
];

pub fn words(category: Category, difficulty: Difficulty) -> &'static [&'static str] {
    let table = match category {
        Category::Animals => &ANIMALS,
        Category::Movies => &MOVIES,
        Category::Countries => &COUNTRIES,
        Category::Sports => &SPORTS,
        Category::Fruits => &FRUITS,
        Category::Cars => &CARS,
    };
    table[difficulty.index()]
}

/// Draws one word uniformly from the bank.
pub fn pick_word<R: Rng + ?Sized>(
    category: Category,
    difficulty: Difficulty,
    rng: &mut R,
) -> &'static str {
    words(category, difficulty)
        .choose(rng)
        .copied()
        .expect("every word list is non-empty")
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn every_list_has_ten_lowercase_words() {
        for category in Category::ALL {
            for difficulty in Difficulty::ALL {
                let list = words(category, difficulty);
                assert_eq!(list.len(), 10, "{category:?}/{difficulty:?}");
                for word in list {
                    assert_eq!(*word, word.to_lowercase());
                    assert!(word.chars().any(|c| c.is_ascii_lowercase()));
                }
            }
        }
    }

    #[test]
    fn indices_round_trip() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(Category::from_index(i), *category);
            assert_eq!(category.index(), i);
        }
        assert_eq!(Difficulty::from_index(2), Difficulty::Hard);
    }

    #[test]
    #[should_panic(expected = "category index 6 out of range")]
    fn out_of_range_category_panics() {
        let _ = Category::from_index(6);
    }

    #[test]
    #[should_panic(expected = "difficulty index 3 out of range")]
    fn out_of_range_difficulty_panics() {
        let _ = Difficulty::from_index(3);
    }

    #[test]
    fn pick_is_deterministic_for_a_seed() {
        let a = pick_word(Category::Cars, Difficulty::Hard, &mut StdRng::seed_from_u64(9));
        let b = pick_word(Category::Cars, Difficulty::Hard, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
        assert!(words(Category::Cars, Difficulty::Hard).contains(&a));
    }

    #[test]
    fn every_pick_comes_from_its_own_list() {
        let mut rng = StdRng::seed_from_u64(21);
        for category in Category::ALL {
            for difficulty in Difficulty::ALL {
                for _ in 0..20 {
                    let word = pick_word(category, difficulty, &mut rng);
                    assert!(
                        words(category, difficulty).contains(&word),
                        "{word} not in {category:?}/{difficulty:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn hard_cars_keeps_the_hyphenated_word() {
        assert!(words(Category::Cars, Difficulty::Hard).contains(&"rolls-royce"));
    }
}
