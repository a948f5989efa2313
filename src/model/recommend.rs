//! Nova's recommendation matcher.
//!
//! A pure, ordered rule table over lowercased input. The first rule whose
//! keyword list hits wins; nothing matching falls through to a generic prompt
//! with no book list. Messages and keyword sets come from the production
//! assistant and are kept verbatim.

use crate::model::catalog::{Book, Catalog, CategoryId};

/// How many books the "trending" rule surfaces.
pub const TRENDING_LIMIT: usize = 4;

pub const GREETING: &str = "Hey there! 👋 I'm Nova, your AI reading companion. \
Tell me what you're in the mood for, and I'll find the perfect book for you!";

pub const FALLBACK_MESSAGE: &str = "I'd love to help you find your perfect read! \
Try telling me about your mood, interests, or what genre you're in the mood for. \
You can also ask about trending books or specific categories!";

/// Canned prompts shown under the transcript for one-key sends.
pub const QUICK_PROMPTS: [&str; 4] = [
    "I want something exciting",
    "I'm feeling romantic",
    "Teach me something new",
    "Show me trending books",
];

/// What a matched rule pulls from the catalog.
enum Picks {
    Categories(&'static [CategoryId]),
    Trending,
}

struct Rule {
    keywords: &'static [&'static str],
    message: &'static str,
    picks: Picks,
}

/// Evaluated top to bottom; order is part of the behavior.
const RULES: [Rule; 5] = [
    Rule {
        keywords: &["romantic", "love", "romance"],
        message: "Ah, a romantic soul! 💕 Here are some heartwarming reads that will make you believe in love again:",
        picks: Picks::Categories(&[CategoryId::Romance]),
    },
    Rule {
        keywords: &["sci", "learn", "tech"],
        message: "Curious mind detected! 🔬 These fascinating reads will expand your horizons:",
        picks: Picks::Categories(&[CategoryId::Science, CategoryId::Technology]),
    },
    Rule {
        keywords: &["exciting", "adventure", "action"],
        message: "Ready for adventure! ⚡ These thrilling stories will keep you on the edge of your seat:",
        picks: Picks::Categories(&[CategoryId::Fiction, CategoryId::Comics]),
    },
    Rule {
        keywords: &["trending", "popular", "best"],
        message: "Here are the hottest books everyone's talking about! 🔥",
        picks: Picks::Trending,
    },
    Rule {
        keywords: &["history", "past"],
        message: "A lover of the past! 🏛️ These historical gems will transport you through time:",
        picks: Picks::Categories(&[CategoryId::History]),
    },
];

/// A reply: message text plus the books it recommends (possibly none).
#[derive(Clone, Debug)]
pub struct Recommendation {
    pub message: String,
    pub books: Vec<Book>,
}

/// Match `input` against the rule table and pull the winning rule's books.
pub fn respond(catalog: &Catalog, input: &str) -> Recommendation {
    let lowered = input.to_lowercase();
    for rule in &RULES {
        if rule.keywords.iter().any(|k| lowered.contains(k)) {
            let books = match rule.picks {
                Picks::Categories(ids) => ids
                    .iter()
                    .flat_map(|&id| catalog.books_by_category(id))
                    .collect(),
                Picks::Trending => catalog.trending().into_iter().take(TRENDING_LIMIT).collect(),
            };
            return Recommendation {
                message: rule.message.to_string(),
                books,
            };
        }
    }
    Recommendation {
        message: FALLBACK_MESSAGE.to_string(),
        books: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn romantic_mood_hits_the_romance_rule() {
        let catalog = Catalog::new();
        let reply = respond(&catalog, "I'm feeling romantic");
        assert!(reply.message.starts_with("Ah, a romantic soul!"));
        assert!(!reply.books.is_empty());
        assert!(reply.books.iter().all(|b| b.category == CategoryId::Romance));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let catalog = Catalog::new();
        let reply = respond(&catalog, "I want to LEARN something NEW");
        assert!(reply.message.starts_with("Curious mind detected!"));
        assert!(reply
            .books
            .iter()
            .all(|b| matches!(b.category, CategoryId::Science | CategoryId::Technology)));
    }

    #[test]
    fn earlier_rules_win_over_later_ones() {
        let catalog = Catalog::new();
        // "love" (rule 1) and "history" (rule 5) both occur; rule 1 wins.
        let reply = respond(&catalog, "I love history");
        assert!(reply.message.starts_with("Ah, a romantic soul!"));
    }

    #[test]
    fn trending_rule_takes_the_top_four_by_rating() {
        let catalog = Catalog::new();
        let reply = respond(&catalog, "show me trending books");
        assert_eq!(reply.books.len(), TRENDING_LIMIT);
        let expected: Vec<&str> = catalog
            .trending()
            .into_iter()
            .take(TRENDING_LIMIT)
            .map(|b| b.id)
            .collect();
        let got: Vec<&str> = reply.books.iter().map(|b| b.id).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn unmatched_input_falls_back_without_books() {
        let catalog = Catalog::new();
        let reply = respond(&catalog, "hello there");
        assert_eq!(reply.message, FALLBACK_MESSAGE);
        assert!(reply.books.is_empty());
    }

    #[test]
    fn substring_keywords_match_inside_words() {
        let catalog = Catalog::new();
        // "sci" matches inside "science".
        let reply = respond(&catalog, "got any science picks?");
        assert!(reply.message.starts_with("Curious mind detected!"));
    }
}
