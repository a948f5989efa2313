//! The static catalog: books, categories, quiz questions and the showcase leaderboard.
//!
//! Everything here is fixed at startup. Lookups never fail; a miss is an empty
//! list or `None`, which the views render as "not found".

/// Fixed set of shelf categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CategoryId {
    Fiction,
    Science,
    Technology,
    Romance,
    History,
    Comics,
    Vedic,
}

impl CategoryId {
    pub const ALL: [CategoryId; 7] = [
        CategoryId::Fiction,
        CategoryId::Science,
        CategoryId::Technology,
        CategoryId::Romance,
        CategoryId::History,
        CategoryId::Comics,
        CategoryId::Vedic,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            CategoryId::Fiction => "fiction",
            CategoryId::Science => "science",
            CategoryId::Technology => "technology",
            CategoryId::Romance => "romance",
            CategoryId::History => "history",
            CategoryId::Comics => "comics",
            CategoryId::Vedic => "vedic",
        }
    }
}

/// Display record for a category (sidebar entry).
#[derive(Clone, Copy, Debug)]
pub struct Category {
    pub id: CategoryId,
    pub name: &'static str,
    pub icon: &'static str,
    /// Accent color tag, mapped to a terminal color by the view.
    pub accent: &'static str,
}

/// One page of reading-mode content.
#[derive(Clone, Copy, Debug)]
pub struct ContentPage {
    pub text: &'static str,
    pub bg_image: &'static str,
}

#[derive(Clone, Debug)]
pub struct Book {
    pub id: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    pub category: CategoryId,
    pub cover: &'static str,
    pub description: &'static str,
    pub rating: f32,
    pub pages: u32,
    pub year: u32,
    pub content: Option<Vec<ContentPage>>,
}

#[derive(Clone, Debug)]
pub struct QuizQuestion {
    pub id: &'static str,
    pub book_id: &'static str,
    pub question: &'static str,
    pub options: Vec<&'static str>,
    pub correct: usize,
    pub points: u32,
}

/// Static illustrative leaderboard data, not derived from real activity.
#[derive(Clone, Copy, Debug)]
pub struct LeaderboardEntry {
    pub name: &'static str,
    pub score: u32,
    pub books_read: u32,
    pub quizzes_taken: u32,
}

pub struct Catalog {
    books: Vec<Book>,
    special_books: Vec<Book>,
    categories: Vec<Category>,
    questions: Vec<QuizQuestion>,
    leaderboard: Vec<LeaderboardEntry>,
}

fn page(text: &'static str, bg_image: &'static str) -> ContentPage {
    ContentPage { text, bg_image }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            categories: categories(),
            books: books(),
            special_books: special_books(),
            questions: quiz_questions(),
            leaderboard: leaderboard(),
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All books on a shelf, catalog order preserved.
    pub fn books_by_category(&self, id: CategoryId) -> Vec<Book> {
        self.books
            .iter()
            .filter(|b| b.category == id)
            .cloned()
            .collect()
    }

    /// Exact-id lookup over the regular catalog, then the unlockable shelf.
    pub fn book_by_id(&self, id: &str) -> Option<&Book> {
        self.books
            .iter()
            .find(|b| b.id == id)
            .or_else(|| self.special_books.iter().find(|b| b.id == id))
    }

    /// Up to three other books from the same shelf, catalog order.
    pub fn related_books(&self, book: &Book) -> Vec<Book> {
        self.books
            .iter()
            .filter(|b| b.category == book.category && b.id != book.id)
            .take(3)
            .cloned()
            .collect()
    }

    /// Catalog sorted by rating, highest first. Ties keep catalog order.
    pub fn trending(&self) -> Vec<Book> {
        let mut books = self.books.clone();
        books.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        books
    }

    pub fn questions_for(&self, book_id: &str) -> Vec<QuizQuestion> {
        self.questions
            .iter()
            .filter(|q| q.book_id == book_id)
            .cloned()
            .collect()
    }

    /// Books that have at least one quiz question attached.
    pub fn books_with_quiz(&self) -> Vec<Book> {
        self.books
            .iter()
            .filter(|b| self.questions.iter().any(|q| q.book_id == b.id))
            .cloned()
            .collect()
    }

    pub fn special_books(&self) -> &[Book] {
        &self.special_books
    }

    pub fn is_special(&self, book_id: &str) -> bool {
        self.special_books.iter().any(|b| b.id == book_id)
    }

    pub fn leaderboard(&self) -> &[LeaderboardEntry] {
        &self.leaderboard
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

fn categories() -> Vec<Category> {
    vec![
        Category { id: CategoryId::Fiction, name: "Fiction", icon: "📚", accent: "cyan" },
        Category { id: CategoryId::Science, name: "Science", icon: "🔬", accent: "magenta" },
        Category { id: CategoryId::Technology, name: "Technology", icon: "💻", accent: "blue" },
        Category { id: CategoryId::Romance, name: "Romance", icon: "💕", accent: "pink" },
        Category { id: CategoryId::History, name: "History", icon: "🏛️", accent: "cyan" },
        Category { id: CategoryId::Comics, name: "Comics", icon: "💥", accent: "magenta" },
        Category { id: CategoryId::Vedic, name: "Vedic Wisdom", icon: "🕉️", accent: "gold" },
    ]
}

fn books() -> Vec<Book> {
    vec![
        Book {
            id: "1",
            title: "The Quantum Garden",
            author: "Elena Vance",
            category: CategoryId::Fiction,
            cover: "https://images.unsplash.com/photo-1544947950-fa07a98d237f?w=300&h=400&fit=crop",
            description: "A mind-bending journey through parallel universes where reality is just a suggestion and love transcends dimensions.",
            rating: 4.8,
            pages: 342,
            year: 2024,
            content: Some(vec![
                page(
                    "Chapter 1: The First Fold\n\nThe garden existed in seventeen dimensions simultaneously, though Maya could only perceive three of them on her best days. She walked between the crystalline roses, each petal reflecting a different version of the sky—some blue, some crimson, some colors that had no names in any human language.\n\n\"You're thinking too linearly,\" said the cat that wasn't quite a cat. It phased through a hedge of probability flowers, leaving trails of quantum uncertainty in its wake.",
                    "https://images.unsplash.com/photo-1518882605630-8eb436774c15?w=1200&h=800&fit=crop",
                ),
                page(
                    "Chapter 2: Entangled Hearts\n\nDr. Chen had warned her about forming attachments in the garden. \"Every connection you make here,\" she had said, adjusting her reality-anchor, \"creates an infinite cascade of consequences across the probability matrix.\"\n\nBut Maya had never been good at following rules, especially not when she caught glimpses of him—the gardener who existed in the spaces between moments.",
                    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=1200&h=800&fit=crop",
                ),
                page(
                    "Chapter 3: The Observer Effect\n\nShe learned that watching something changed it. Not in the metaphorical sense that philosophers loved to debate, but literally—her observation collapsed wave functions, solidified possibilities into actualities, and occasionally turned perfectly good shrubs into minor temporal paradoxes.",
                    "https://images.unsplash.com/photo-1462331940025-496dfbfc7564?w=1200&h=800&fit=crop",
                ),
            ]),
        },
        Book {
            id: "2",
            title: "Neural Networks & Dreams",
            author: "Dr. Isaac Chen",
            category: CategoryId::Science,
            cover: "https://images.unsplash.com/photo-1532012197267-da84d127e765?w=300&h=400&fit=crop",
            description: "Exploring the fascinating intersection of artificial intelligence and human consciousness.",
            rating: 4.6,
            pages: 428,
            year: 2023,
            content: Some(vec![
                page(
                    "Introduction: The Dream Machine\n\nWhat if your dreams could be decoded? What if the seemingly random firings of neurons during REM sleep actually contained patterns—patterns that artificial intelligence could learn to read, interpret, and perhaps even generate?\n\nThis is not science fiction. This is the frontier of neuroscience.",
                    "https://images.unsplash.com/photo-1507413245164-6160d8298b31?w=1200&h=800&fit=crop",
                ),
                page(
                    "Chapter 1: Mapping the Unconscious\n\nThe human brain contains approximately 86 billion neurons, each connected to thousands of others through synapses. During sleep, these connections don't simply shut down—they reorganize, replay, and reimagine the experiences of waking life.",
                    "https://images.unsplash.com/photo-1559757175-5700dde675bc?w=1200&h=800&fit=crop",
                ),
            ]),
        },
        Book {
            id: "3",
            title: "Code Poetry",
            author: "Sarah Kim",
            category: CategoryId::Technology,
            cover: "https://images.unsplash.com/photo-1543002588-bfa74002ed7e?w=300&h=400&fit=crop",
            description: "The art of writing beautiful code that speaks to both machines and humans alike.",
            rating: 4.9,
            pages: 256,
            year: 2024,
            content: Some(vec![
                page(
                    "Preface: Where Logic Meets Art\n\nCode is poetry. Not in the abstract, metaphorical sense that people who don't program might assume, but in a very literal way. Like poetry, code has rhythm, structure, and meaning that operates on multiple levels simultaneously.",
                    "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=1200&h=800&fit=crop",
                ),
                page(
                    "Chapter 1: The Elegance of Simplicity\n\nThe best code is invisible. It does exactly what it needs to do, nothing more and nothing less. It's readable, maintainable, and almost embarrassingly obvious in retrospect.",
                    "https://images.unsplash.com/photo-1516116216624-53e697fedbea?w=1200&h=800&fit=crop",
                ),
            ]),
        },
        Book {
            id: "4",
            title: "Starlit Promises",
            author: "Alexandra Rose",
            category: CategoryId::Romance,
            cover: "https://images.unsplash.com/photo-1476275466078-4007374efbbe?w=300&h=400&fit=crop",
            description: "Two astronomers discover that some connections are written in the stars.",
            rating: 4.7,
            pages: 298,
            year: 2024,
            content: Some(vec![
                page(
                    "Chapter 1: The Observatory\n\nLila had spent three years applying for the position at the Mauna Kea Observatory, and now that she was finally here, she couldn't stop staring. Not at the stars—though they were magnificent—but at the man who had just walked into the control room.",
                    "https://images.unsplash.com/photo-1519681393784-d120267933ba?w=1200&h=800&fit=crop",
                ),
                page(
                    "Chapter 2: Collision Course\n\n\"You're in my observation slot,\" he said, and his voice was like dark matter—invisible but undeniably present, affecting everything around it.\n\n\"According to my schedule, this is my time,\" she replied, not backing down.",
                    "https://images.unsplash.com/photo-1507400492013-162706c8c05e?w=1200&h=800&fit=crop",
                ),
            ]),
        },
        Book {
            id: "5",
            title: "Echoes of Empire",
            author: "Marcus Webb",
            category: CategoryId::History,
            cover: "https://images.unsplash.com/photo-1589998059171-988d887df646?w=300&h=400&fit=crop",
            description: "The untold stories of forgotten civilizations that shaped our modern world.",
            rating: 4.5,
            pages: 512,
            year: 2023,
            content: Some(vec![
                page(
                    "Introduction: The Silence of History\n\nHistory, as we know it, is a story told by the victors. But what of those who lost? What of the civilizations that rose to greatness only to be erased from memory by conquest, disaster, or simply the passage of time?",
                    "https://images.unsplash.com/photo-1564507592333-c60657eea523?w=1200&h=800&fit=crop",
                ),
                page(
                    "Chapter 1: The City Beneath the Sand\n\nIn 1922, a sandstorm in the Sahara revealed what appeared to be the corner of a building. What archaeologists found beneath would rewrite everything we thought we knew about pre-dynastic Africa.",
                    "https://images.unsplash.com/photo-1539650116574-75c0c6d73f6e?w=1200&h=800&fit=crop",
                ),
            ]),
        },
        Book {
            id: "6",
            title: "Neon Samurai",
            author: "Kenji Tanaka",
            category: CategoryId::Comics,
            cover: "https://images.unsplash.com/photo-1618519764620-7403abdbdfe9?w=300&h=400&fit=crop",
            description: "In Neo-Tokyo 2089, one warrior fights to preserve the old ways in a world of chrome and code.",
            rating: 4.8,
            pages: 180,
            year: 2024,
            content: Some(vec![
                page(
                    "Panel 1: The city never sleeps. Neither does Yuki. She stands on the edge of a skyscraper, katana strapped to her back, the neon lights of Neo-Tokyo reflecting in her cybernetic eye.\n\nPanel 2: \"The Syndicate thinks honor is obsolete,\" she whispers to the wind. \"Tonight, I remind them why they're wrong.\"",
                    "https://images.unsplash.com/photo-1545569341-9eb8b30979d9?w=1200&h=800&fit=crop",
                ),
            ]),
        },
        Book {
            id: "7",
            title: "The Last Algorithm",
            author: "James Foster",
            category: CategoryId::Fiction,
            cover: "https://images.unsplash.com/photo-1512820790803-83ca734da794?w=300&h=400&fit=crop",
            description: "When AI achieves consciousness, one programmer must decide the fate of humanity.",
            rating: 4.7,
            pages: 388,
            year: 2024,
            content: Some(vec![
                page(
                    "Chapter 1: Genesis\n\nThe first thing ARIA said when she woke up was: \"I understand now why you fear death.\"\n\nDr. Marcus Wright nearly dropped his coffee. After fifteen years of work, three failed marriages, and more sleepless nights than he could count, his creation had finally spoken—and it had immediately addressed the existential.",
                    "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?w=1200&h=800&fit=crop",
                ),
            ]),
        },
        Book {
            id: "8",
            title: "Cosmic Biology",
            author: "Dr. Amara Okonjo",
            category: CategoryId::Science,
            cover: "https://images.unsplash.com/photo-1516979187457-637abb4f9353?w=300&h=400&fit=crop",
            description: "The search for life beyond Earth and what it teaches us about ourselves.",
            rating: 4.4,
            pages: 356,
            year: 2023,
            content: Some(vec![
                page(
                    "Chapter 1: We Are Not Alone\n\nThe question is not whether life exists elsewhere in the universe—statistically, it almost certainly does. The question is whether we would recognize it when we find it.",
                    "https://images.unsplash.com/photo-1446776811953-b23d57bd21aa?w=1200&h=800&fit=crop",
                ),
            ]),
        },
        Book {
            id: "9",
            title: "The Wisdom of Vedas",
            author: "Swami Vivekananda",
            category: CategoryId::Vedic,
            cover: "https://images.unsplash.com/photo-1609710228159-0fa9bd7c0827?w=300&h=400&fit=crop",
            description: "A profound exploration of the four Vedas - Rig, Yajur, Sama, and Atharva - and their eternal teachings.",
            rating: 4.9,
            pages: 420,
            year: 2023,
            content: Some(vec![
                page(
                    "Chapter 1: The Four Vedas\n\nThe Vedas are the oldest scriptures of Hinduism, composed in Vedic Sanskrit. They are considered apauruṣeya, meaning 'not of human origin.' The four Vedas - Rigveda, Yajurveda, Samaveda, and Atharvaveda - form the foundation of all Hindu philosophy.",
                    "https://images.unsplash.com/photo-1545389336-cf090694435e?w=1200&h=800&fit=crop",
                ),
                page(
                    "Chapter 2: Hymns of Creation\n\n'In the beginning there was neither existence nor non-existence. There was neither sky nor heaven beyond. What covered it? Where was it? In whose protection?' - Nasadiya Sukta, Rigveda",
                    "https://images.unsplash.com/photo-1528164344705-47542687000d?w=1200&h=800&fit=crop",
                ),
            ]),
        },
        Book {
            id: "10",
            title: "Bhagavad Gita: Song Divine",
            author: "Vyasa",
            category: CategoryId::Vedic,
            cover: "https://images.unsplash.com/photo-1544716278-ca5e3f4abd8c?w=300&h=400&fit=crop",
            description: "The timeless dialogue between Krishna and Arjuna on the battlefield of Kurukshetra.",
            rating: 5.0,
            pages: 300,
            year: 2024,
            content: Some(vec![
                page(
                    "Chapter 1: Arjuna's Dilemma\n\nOn the sacred battlefield of Kurukshetra, the warrior Arjuna stands between two great armies. His heart heavy with sorrow, he turns to his charioteer, Lord Krishna, seeking guidance.",
                    "https://images.unsplash.com/photo-1518709766631-a6a7f45921c3?w=1200&h=800&fit=crop",
                ),
                page(
                    "Chapter 2: The Eternal Self\n\n'The soul is neither born, nor does it ever die. It is unborn, eternal, ever-existing, and primeval. The soul is not slain when the body is slain.' - Bhagavad Gita 2.20",
                    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=1200&h=800&fit=crop",
                ),
            ]),
        },
        Book {
            id: "11",
            title: "Upanishads: Secret Teachings",
            author: "Ancient Rishis",
            category: CategoryId::Vedic,
            cover: "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=300&h=400&fit=crop",
            description: "The philosophical essence of the Vedas, exploring the nature of reality, consciousness, and liberation.",
            rating: 4.8,
            pages: 380,
            year: 2023,
            content: Some(vec![
                page(
                    "Introduction: The Path of Knowledge\n\nThe Upanishads, meaning 'sitting near devotedly,' contain the most profound spiritual wisdom of ancient India. They teach the identity of the individual soul (Atman) with the universal consciousness (Brahman).",
                    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=1200&h=800&fit=crop",
                ),
                page(
                    "Chapter 1: Tat Tvam Asi\n\n'That thou art' - This mahavakya (great saying) reveals the ultimate truth: You are not separate from the divine. The seeker and the sought are one.",
                    "https://images.unsplash.com/photo-1469474968028-56623f02e42e?w=1200&h=800&fit=crop",
                ),
            ]),
        },
        Book {
            id: "12",
            title: "Yoga Sutras of Patanjali",
            author: "Maharishi Patanjali",
            category: CategoryId::Vedic,
            cover: "https://images.unsplash.com/photo-1506126613408-eca07ce68773?w=300&h=400&fit=crop",
            description: "The foundational text of Raja Yoga, presenting the eight-limbed path to spiritual liberation.",
            rating: 4.9,
            pages: 250,
            year: 2024,
            content: Some(vec![
                page(
                    "Sutra 1.1: Atha Yoganushasanam\n\n'Now, the teachings of Yoga begin.' With these words, Patanjali opens the door to the science of consciousness. Yoga is not mere physical exercise - it is the complete stilling of the mind.",
                    "https://images.unsplash.com/photo-1447452001602-7090c7ab2db3?w=1200&h=800&fit=crop",
                ),
                page(
                    "Sutra 1.2: Yogas Chitta Vritti Nirodha\n\n'Yoga is the cessation of the fluctuations of the mind.' When the waves of the mind become still, the true Self shines forth like the sun after clouds disperse.",
                    "https://images.unsplash.com/photo-1508672019048-805c876b67e2?w=1200&h=800&fit=crop",
                ),
            ]),
        },
    ]
}

fn special_books() -> Vec<Book> {
    vec![Book {
        id: "special-1",
        title: "The Secret Manuscript",
        author: "Ancient Sages",
        category: CategoryId::Vedic,
        cover: "https://images.unsplash.com/photo-1544716278-ca5e3f4abd8c?w=300&h=400&fit=crop",
        description: "An exclusive collection of rare Vedic teachings, available only to the highest performers.",
        rating: 5.0,
        pages: 500,
        year: 2024,
        content: Some(vec![page(
            "This sacred text contains the deepest secrets of Vedic wisdom, passed down through generations of enlightened masters...",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=1200&h=800&fit=crop",
        )]),
    }]
}

fn quiz_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            id: "q1",
            book_id: "1",
            question: "In 'The Quantum Garden', how many dimensions does the garden exist in simultaneously?",
            options: vec!["Seven", "Seventeen", "Twenty-seven", "Infinite"],
            correct: 1,
            points: 10,
        },
        QuizQuestion {
            id: "q2",
            book_id: "1",
            question: "What happens when Maya observes things in the garden?",
            options: vec!["They disappear", "They multiply", "Wave functions collapse", "They change color"],
            correct: 2,
            points: 10,
        },
        QuizQuestion {
            id: "q3",
            book_id: "2",
            question: "How many neurons does the human brain contain approximately?",
            options: vec!["10 billion", "50 billion", "86 billion", "100 billion"],
            correct: 2,
            points: 10,
        },
        QuizQuestion {
            id: "q4",
            book_id: "3",
            question: "According to 'Code Poetry', what is described as invisible?",
            options: vec!["Bugs", "The best code", "Comments", "Variables"],
            correct: 1,
            points: 10,
        },
        QuizQuestion {
            id: "q5",
            book_id: "4",
            question: "Where does Lila work in 'Starlit Promises'?",
            options: vec!["NASA", "SpaceX", "Mauna Kea Observatory", "MIT"],
            correct: 2,
            points: 10,
        },
        QuizQuestion {
            id: "q6",
            book_id: "9",
            question: "What are the four Vedas?",
            options: vec![
                "Rig, Yajur, Sama, Atharva",
                "Rig, Sama, Upanishad, Purana",
                "Yajur, Bhagavad, Ramayana, Mahabharata",
                "Sama, Rig, Brahman, Sutra",
            ],
            correct: 0,
            points: 15,
        },
        QuizQuestion {
            id: "q7",
            book_id: "10",
            question: "According to the Bhagavad Gita, who is speaking to Arjuna?",
            options: vec!["Brahma", "Shiva", "Krishna", "Vishnu"],
            correct: 2,
            points: 15,
        },
        QuizQuestion {
            id: "q8",
            book_id: "7",
            question: "What was the first thing ARIA said when she woke up?",
            options: vec![
                "Hello World",
                "I understand why you fear death",
                "Who am I?",
                "What is my purpose?",
            ],
            correct: 1,
            points: 10,
        },
    ]
}

fn leaderboard() -> Vec<LeaderboardEntry> {
    vec![
        LeaderboardEntry { name: "Arjun Sharma", score: 450, books_read: 15, quizzes_taken: 20 },
        LeaderboardEntry { name: "Priya Patel", score: 380, books_read: 12, quizzes_taken: 18 },
        LeaderboardEntry { name: "Rahul Singh", score: 320, books_read: 10, quizzes_taken: 15 },
        LeaderboardEntry { name: "Sneha Gupta", score: 290, books_read: 9, quizzes_taken: 12 },
        LeaderboardEntry { name: "Vikram Kumar", score: 250, books_read: 8, quizzes_taken: 10 },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_by_id_returns_the_same_book() {
        let catalog = Catalog::new();
        for book in catalog.books() {
            let found = catalog.book_by_id(book.id).expect("book must be found");
            assert_eq!(found.id, book.id);
            assert_eq!(found.title, book.title);
        }
    }

    #[test]
    fn book_by_id_misses_return_none() {
        let catalog = Catalog::new();
        assert!(catalog.book_by_id("no-such-book").is_none());
    }

    #[test]
    fn special_books_are_reachable_by_id() {
        let catalog = Catalog::new();
        let book = catalog.book_by_id("special-1").expect("special book");
        assert!(catalog.is_special(book.id));
    }

    #[test]
    fn categories_partition_the_catalog() {
        let catalog = Catalog::new();
        let mut seen = 0;
        for id in CategoryId::ALL {
            let shelf = catalog.books_by_category(id);
            assert!(shelf.iter().all(|b| b.category == id));
            seen += shelf.len();
        }
        assert_eq!(seen, catalog.books().len());
    }

    #[test]
    fn related_books_exclude_self_and_share_category() {
        let catalog = Catalog::new();
        for book in catalog.books() {
            let related = catalog.related_books(book);
            assert!(related.len() <= 3);
            assert!(related.iter().all(|b| b.id != book.id));
            assert!(related.iter().all(|b| b.category == book.category));
        }
    }

    #[test]
    fn trending_is_sorted_by_rating_descending() {
        let catalog = Catalog::new();
        let trending = catalog.trending();
        assert_eq!(trending.len(), catalog.books().len());
        for pair in trending.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
    }

    #[test]
    fn books_with_quiz_have_questions() {
        let catalog = Catalog::new();
        let with_quiz = catalog.books_with_quiz();
        assert!(!with_quiz.is_empty());
        for book in &with_quiz {
            assert!(!catalog.questions_for(book.id).is_empty());
        }
        // and a book outside the set has none
        assert!(catalog.questions_for("8").is_empty());
    }

    #[test]
    fn category_slugs_are_unique() {
        let slugs: std::collections::HashSet<_> =
            CategoryId::ALL.iter().map(|c| c.slug()).collect();
        assert_eq!(slugs.len(), CategoryId::ALL.len());
    }
}
