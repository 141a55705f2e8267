// ============================================================
// Layer 6 — Rule-Based Part-of-Speech Tagger
// ============================================================
// A small deterministic tagger producing Penn Treebank tags.
//
// Tokenisation:
//   1. split on whitespace
//   2. peel leading and trailing punctuation into their own tokens
//      "(apple)," → "(" "apple" ")" ","
//   3. split English clitics off the word
//      "don't" → "do" "n't",  "Tom's" → "Tom" "'s"
//
// Tagging, first rule that matches wins:
//   1. punctuation                     → its Penn punctuation tag
//   2. closed-class word table         → PRP, PRP$, WP, WP$, DT, IN, ...
//      ("her" is PRP$ before a word, PRP otherwise)
//   3. number                          → CD
//   4. capitalised word                → NNP
//   5. suffix rules                    → RB, VBG, VBD, JJ, NNS
//   6. anything else                   → NN
//
// Closed-class words carry the pronoun tags the feature layer
// cares about, so those are tagged exactly; open-class tags
// are a best effort.

use anyhow::Result;

use crate::data::tokens::is_upper_token;
use crate::domain::traits::{TaggedToken, Tagger};

/// Dictionary and suffix rule tagger. Stateless and thread-safe.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleTagger;

impl RuleTagger {
    pub fn new() -> Self {
        Self
    }

    /// Split text into word, clitic and punctuation tokens
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut out = Vec::new();

        for word in text.split_whitespace() {
            let mut rest = word;

            // leading punctuation
            while let Some(c) = rest.chars().next() {
                if !is_punctuation(c) {
                    break;
                }
                out.push(c.to_string());
                rest = &rest[c.len_utf8()..];
            }

            // trailing punctuation, collected back to front
            let mut trailing = Vec::new();
            while let Some(c) = rest.chars().next_back() {
                if !is_punctuation(c) {
                    break;
                }
                trailing.push(c.to_string());
                rest = &rest[..rest.len() - c.len_utf8()];
            }

            if !rest.is_empty() {
                split_clitic(rest, &mut out);
            }
            out.extend(trailing.into_iter().rev());
        }

        out
    }
}

impl Tagger for RuleTagger {
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
        let tokens = self.tokenize(text);
        let tagged = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                let next = tokens.get(i + 1).map(String::as_str);
                TaggedToken::new(token.clone(), tag_token(token, next))
            })
            .collect();
        Ok(tagged)
    }
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || matches!(c, '“' | '”' | '‘' | '’' | '…' | '—' | '–')
}

const CLITICS: [&str; 7] = ["n't", "'s", "'re", "'ve", "'ll", "'d", "'m"];

fn split_clitic(word: &str, out: &mut Vec<String>) {
    let lower = word.to_lowercase();
    for clitic in CLITICS {
        let cut = word.len().saturating_sub(clitic.len());
        if cut > 0 && lower.len() == word.len() && lower.ends_with(clitic) && word.is_char_boundary(cut) {
            out.push(word[..cut].to_string());
            out.push(word[cut..].to_string());
            return;
        }
    }
    out.push(word.to_string());
}

fn tag_token(token: &str, next: Option<&str>) -> String {
    if let Some(tag) = punctuation_tag(token) {
        return tag.to_string();
    }
    // acronyms (US, IT, ME) are names, not closed-class words; "I" stays PRP
    if token.chars().filter(|c| c.is_alphabetic()).count() > 1 && is_upper_token(token) {
        return "NNP".to_string();
    }

    let lower = token.to_lowercase();
    if lower == "her" {
        let before_word = next
            .and_then(|n| n.chars().next())
            .map(char::is_alphanumeric)
            .unwrap_or(false);
        let tag = if before_word { "PRP$" } else { "PRP" };
        return tag.to_string();
    }
    if let Some(tag) = closed_class_tag(&lower) {
        return tag.to_string();
    }

    if is_number(token) {
        return "CD".to_string();
    }
    if token.chars().next().is_some_and(char::is_uppercase) {
        return "NNP".to_string();
    }
    suffix_tag(&lower).to_string()
}

fn punctuation_tag(token: &str) -> Option<&'static str> {
    let mut chars = token.chars();
    let c = chars.next()?;
    if chars.next().is_some() || !is_punctuation(c) {
        return None;
    }
    Some(match c {
        '.' | '!' | '?'          => ".",
        ','                      => ",",
        ':' | ';' | '-' | '—' | '–' | '…' => ":",
        '(' | '[' | '{'          => "(",
        ')' | ']' | '}'          => ")",
        '"' | '“' | '‘' | '`'    => "``",
        '”' | '’' | '\''         => "''",
        '$'                      => "$",
        '#'                      => "#",
        _                        => "SYM",
    })
}

fn closed_class_tag(lower: &str) -> Option<&'static str> {
    let tag = match lower {
        "i" | "me" | "you" | "he" | "him" | "she" | "it" | "we" | "us" | "they" | "them"
        | "myself" | "yourself" | "himself" | "herself" | "itself" | "ourselves"
        | "yourselves" | "themselves" | "mine" | "yours" | "hers" | "ours" | "theirs" => "PRP",
        "my" | "your" | "his" | "its" | "our" | "their" => "PRP$",
        "who" | "whom" | "what" | "whoever" | "whatever" => "WP",
        "whose" => "WP$",
        "which" | "whichever" => "WDT",
        "when" | "where" | "why" | "how" | "whenever" | "wherever" => "WRB",
        "the" | "a" | "an" | "this" | "these" | "those" | "each" | "every" | "all" | "some"
        | "any" | "no" | "another" | "both" | "either" | "neither" => "DT",
        "of" | "in" | "on" | "at" | "by" | "for" | "with" | "from" | "about" | "into"
        | "over" | "under" | "after" | "before" | "between" | "through" | "during"
        | "without" | "within" | "against" | "among" | "since" | "until" | "upon" | "than"
        | "because" | "if" | "while" | "although" | "that" | "as" | "per" | "near" => "IN",
        "to" => "TO",
        "and" | "or" | "but" | "nor" | "plus" => "CC",
        "can" | "could" | "will" | "would" | "shall" | "should" | "may" | "might" | "must"
        | "ca" | "wo" | "'ll" | "'d" => "MD",
        "is" | "has" | "does" => "VBZ",
        "am" | "are" | "have" | "do" | "'re" | "'ve" | "'m" => "VBP",
        "was" | "were" | "had" | "did" => "VBD",
        "be" => "VB",
        "been" => "VBN",
        "being" => "VBG",
        "'s" => "POS",
        "not" | "n't" | "very" | "also" | "never" | "too" | "often" | "always" => "RB",
        "there" => "EX",
        "many" | "few" | "several" | "much" | "little" | "enough" => "JJ",
        "more" | "less" | "fewer" => "JJR",
        "most" | "least" => "JJS",
        _ => return None,
    };
    Some(tag)
}

fn is_number(token: &str) -> bool {
    let cleaned: String = token.chars().filter(|c| *c != ',').collect();
    cleaned.chars().any(|c| c.is_ascii_digit()) && cleaned.parse::<f64>().is_ok()
}

fn suffix_tag(lower: &str) -> &'static str {
    const ADJECTIVE_SUFFIXES: [&str; 8] = ["ous", "ful", "ive", "able", "ible", "less", "ical", "ic"];

    if lower.len() > 4 && lower.ends_with("ly") {
        "RB"
    } else if lower.len() > 4 && lower.ends_with("ing") {
        "VBG"
    } else if lower.len() > 3 && lower.ends_with("ed") {
        "VBD"
    } else if lower.len() > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        "JJ"
    } else if lower.len() > 2 && lower.ends_with('s') && !lower.ends_with("ss") {
        "NNS"
    } else {
        "NN"
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn tags(text: &str) -> Vec<(String, String)> {
        RuleTagger::new()
            .tag(text)
            .unwrap()
            .into_iter()
            .map(|t| (t.token, t.tag))
            .collect()
    }

    fn tag_of(text: &str, token: &str) -> String {
        tags(text)
            .into_iter()
            .find(|(t, _)| t == token)
            .map(|(_, tag)| tag)
            .unwrap()
    }

    #[test]
    fn test_tokenize_peels_punctuation() {
        let t = RuleTagger::new();
        assert_eq!(t.tokenize("Who ate the apple?"), vec!["Who", "ate", "the", "apple", "?"]);
        assert_eq!(t.tokenize("(apple),"), vec!["(", "apple", ")", ","]);
        assert!(t.tokenize("  \n ").is_empty());
    }

    #[test]
    fn test_tokenize_splits_clitics() {
        let t = RuleTagger::new();
        assert_eq!(t.tokenize("don't"), vec!["do", "n't"]);
        assert_eq!(t.tokenize("Tom's"), vec!["Tom", "'s"]);
        assert_eq!(t.tokenize("they'll"), vec!["they", "'ll"]);
    }

    #[test]
    fn test_pronoun_tags() {
        assert_eq!(tag_of("He saw it", "He"), "PRP");
        assert_eq!(tag_of("their house", "their"), "PRP$");
        assert_eq!(tag_of("Who is there", "Who"), "WP");
        assert_eq!(tag_of("whose book", "whose"), "WP$");
    }

    #[test]
    fn test_all_caps_acronyms_are_proper_nouns() {
        assert_eq!(tag_of("The US economy grew", "US"), "NNP");
        assert_eq!(tag_of("IT staff left", "IT"), "NNP");
        assert_eq!(tag_of("Call ME now", "ME"), "NNP");
        assert_eq!(tag_of("I ran", "I"), "PRP");
        assert_eq!(tag_of("He saw it", "it"), "PRP");
    }

    #[test]
    fn test_her_depends_on_what_follows() {
        assert_eq!(tag_of("He gave her book away", "her"), "PRP$");
        assert_eq!(tag_of("He saw her .", "her"), "PRP");
        assert_eq!(tag_of("He saw her", "her"), "PRP");
    }

    #[test]
    fn test_open_class_fallbacks() {
        assert_eq!(tag_of("Paris is big", "Paris"), "NNP");
        assert_eq!(tag_of("1,200 apples", "1,200"), "CD");
        assert_eq!(tag_of("1,200 apples", "apples"), "NNS");
        assert_eq!(tag_of("he walked quickly", "quickly"), "RB");
        assert_eq!(tag_of("running water", "running"), "VBG");
        assert_eq!(tag_of("a glass", "glass"), "NN");
    }

    #[test]
    fn test_punctuation_tags() {
        let t = tags("Yes, indeed.");
        assert_eq!(t[1], (",".to_string(), ",".to_string()));
        assert_eq!(t[3], (".".to_string(), ".".to_string()));
    }

    #[test]
    fn test_tagging_is_deterministic() {
        let text = "She told him that their plan, surely, would fail.";
        assert_eq!(tags(text), tags(text));
    }
}
