//! strategies.rs - The replacement algorithms applied to each matched word.
//!
//! Every [`ReplacementStrategy`] maps to a pure [`Evaluator`]: a function from the matched
//! text to its replacement. The only shared input is the random source, passed in by the
//! caller so runs can be made deterministic with a seeded RNG.
//!
//! Lengths are counted in `char`s, not bytes, so multi-byte words (`cabrón`, `coño`) are
//! masked one symbol per letter.
//!
//! License: MIT OR APACHE 2.0

use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

use crate::parameters::ReplacementStrategy;

/// A replacement function for one matched word.
pub type Evaluator = fn(&str, &mut dyn RngCore) -> String;

const ASTERISK: char = '*';
const BLOCK: char = '█';
const UNDERSCORE: char = '_';
const SWEAR_EMOJI: &str = "🤬";
const BLEEP: &str = "bleep";

const EMOJI_POOL: &[&str] = &[
    "🙊", "🙉", "🙈", "💥", "💢", "💩", "🤐", "🤭", "🤫", "😶", "🫢", "🫣", "🤯", "😬", "🥴", "🙃",
];

const ANGER_EMOJI_POOL: &[&str] = &["😠", "😡", "🤬", "👿", "💢", "😤"];

/// Symbols used for grawlixes. `$` may appear at most once per replacement, since a
/// second one would open a math span in markdown renderers.
const GRAWLIX_POOL: &[char] = &['#', '$', '@', '!', '%', '&', '?'];
const DOLLAR: char = '$';

/// Vowels across the supported languages, including accented forms. Compared lowercase.
const VOWELS: &str = "aeiouáàâäãåāăąéèêëēėęěíìîïīįóòôöõøōőúùûüūůűųæœ";

/// Static dispatch from strategy to evaluator.
pub struct ReplacementStrategyTable;

impl ReplacementStrategyTable {
    pub fn evaluator_for(strategy: ReplacementStrategy) -> Evaluator {
        match strategy {
            ReplacementStrategy::Asterisk => asterisk,
            ReplacementStrategy::Emoji => emoji,
            ReplacementStrategy::AngerEmoji => anger_emoji,
            ReplacementStrategy::MiddleSwearEmoji => middle_swear_emoji,
            ReplacementStrategy::RandomAsterisk => random_asterisk,
            ReplacementStrategy::MiddleAsterisk => middle_asterisk,
            ReplacementStrategy::FirstLetterThenAsterisk => first_letter_then_asterisk,
            ReplacementStrategy::VowelAsterisk => vowel_asterisk,
            ReplacementStrategy::Bleep => bleep,
            ReplacementStrategy::RedactedRectangle => redacted_rectangle,
            ReplacementStrategy::StrikeThrough => strike_through,
            ReplacementStrategy::Underscores => underscores,
            ReplacementStrategy::Grawlix => grawlix,
            ReplacementStrategy::BoldGrawlix => bold_grawlix,
        }
    }
}

/// Backslash-escapes the mask characters a strategy produces, so markdown renders them
/// literally (`****` becomes `\*\*\*\*`). Markup-producing strategies are left alone.
pub fn escape_markdown(strategy: ReplacementStrategy, replacement: &str) -> String {
    let mask = match strategy {
        ReplacementStrategy::Asterisk
        | ReplacementStrategy::RandomAsterisk
        | ReplacementStrategy::MiddleAsterisk
        | ReplacementStrategy::FirstLetterThenAsterisk
        | ReplacementStrategy::VowelAsterisk => ASTERISK,
        ReplacementStrategy::Underscores => UNDERSCORE,
        _ => return replacement.to_string(),
    };

    let mut escaped = String::with_capacity(replacement.len() * 2);
    for c in replacement.chars() {
        if c == mask {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn repeat_char(c: char, count: usize) -> String {
    std::iter::repeat(c).take(count).collect()
}

fn asterisk(matched: &str, _rng: &mut dyn RngCore) -> String {
    repeat_char(ASTERISK, matched.chars().count())
}

fn random_asterisk(matched: &str, rng: &mut dyn RngCore) -> String {
    let len = matched.chars().count();
    // A single character can't shrink and still leave a visible mask.
    if len <= 1 {
        return ASTERISK.to_string();
    }
    repeat_char(ASTERISK, rng.random_range(1..len))
}

fn middle_asterisk(matched: &str, _rng: &mut dyn RngCore) -> String {
    let chars: Vec<char> = matched.chars().collect();
    if chars.len() <= 2 {
        return matched.to_string();
    }
    let mut out = String::with_capacity(matched.len());
    out.push(chars[0]);
    out.push_str(&repeat_char(ASTERISK, chars.len() - 2));
    out.push(chars[chars.len() - 1]);
    out
}

fn first_letter_then_asterisk(matched: &str, _rng: &mut dyn RngCore) -> String {
    let mut chars = matched.chars();
    match chars.next() {
        Some(first) => {
            let mut out = first.to_string();
            out.push_str(&repeat_char(ASTERISK, chars.count()));
            out
        }
        None => String::new(),
    }
}

fn is_vowel(c: char) -> bool {
    c.to_lowercase().all(|lower| VOWELS.contains(lower))
}

fn vowel_asterisk(matched: &str, _rng: &mut dyn RngCore) -> String {
    matched
        .chars()
        .map(|c| if is_vowel(c) { ASTERISK } else { c })
        .collect()
}

fn emoji(_matched: &str, rng: &mut dyn RngCore) -> String {
    EMOJI_POOL.choose(rng).copied().unwrap_or(SWEAR_EMOJI).to_string()
}

fn anger_emoji(_matched: &str, rng: &mut dyn RngCore) -> String {
    ANGER_EMOJI_POOL.choose(rng).copied().unwrap_or(SWEAR_EMOJI).to_string()
}

fn middle_swear_emoji(matched: &str, _rng: &mut dyn RngCore) -> String {
    let chars: Vec<char> = matched.chars().collect();
    match chars.as_slice() {
        [] | [_] => SWEAR_EMOJI.to_string(),
        [first, .., last] => format!("{}{}{}", first, SWEAR_EMOJI, last),
    }
}

fn bleep(_matched: &str, _rng: &mut dyn RngCore) -> String {
    BLEEP.to_string()
}

fn redacted_rectangle(matched: &str, _rng: &mut dyn RngCore) -> String {
    repeat_char(BLOCK, matched.chars().count())
}

fn strike_through(matched: &str, _rng: &mut dyn RngCore) -> String {
    format!("~~{}~~", matched)
}

fn underscores(matched: &str, _rng: &mut dyn RngCore) -> String {
    repeat_char(UNDERSCORE, matched.chars().count())
}

/// Keeps grawlix output to at most one `$` across a whole run, not just one match.
/// `dollar_emitted` carries the state between matches; any further `$` is redrawn from
/// the rest of the pool. Other strategies pass through unchanged.
pub fn limit_dollar_signs(
    strategy: ReplacementStrategy,
    replacement: String,
    dollar_emitted: &mut bool,
    rng: &mut dyn RngCore,
) -> String {
    if !matches!(strategy, ReplacementStrategy::Grawlix | ReplacementStrategy::BoldGrawlix) {
        return replacement;
    }
    replacement
        .chars()
        .map(|c| {
            if c != DOLLAR {
                return c;
            }
            if !*dollar_emitted {
                *dollar_emitted = true;
                return c;
            }
            loop {
                let candidate = GRAWLIX_POOL[rng.random_range(0..GRAWLIX_POOL.len())];
                if candidate != DOLLAR {
                    break candidate;
                }
            }
        })
        .collect()
}

fn grawlix(matched: &str, rng: &mut dyn RngCore) -> String {
    let len = matched.chars().count();
    let mut out = String::with_capacity(len);
    let mut dollar_used = false;
    for _ in 0..len {
        let symbol = loop {
            let candidate = GRAWLIX_POOL[rng.random_range(0..GRAWLIX_POOL.len())];
            if candidate != DOLLAR || !dollar_used {
                break candidate;
            }
        };
        dollar_used |= symbol == DOLLAR;
        out.push(symbol);
    }
    out
}

fn bold_grawlix(matched: &str, rng: &mut dyn RngCore) -> String {
    format!("**{}**", grawlix(matched, rng))
}
