use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use crate::naming::clean_rom_name;

/// Minimum token-sort score for a candidate to be accepted.
pub const MATCH_THRESHOLD: u8 = 60;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestMatch {
    pub name: String,
    pub score: u8,
    /// False when no candidate reached the threshold and the cleaned ROM
    /// name itself was returned.
    pub from_candidates: bool,
}

// (start in a, start in b, length)
type Block = (usize, usize, usize);

fn longest_match(
    a: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    (alo, ahi, blo, bhi): (usize, usize, usize, usize),
) -> Block {
    let mut best = (alo, blo, 0usize);
    let mut j2len: HashMap<usize, usize> = HashMap::new();

    for (i, ch) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut next: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = b2j.get(ch) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let k = j
                    .checked_sub(1)
                    .and_then(|prev| j2len.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                next.insert(j, k);
                if k > best.2 {
                    best = (i + 1 - k, j + 1 - k, k);
                }
            }
        }
        j2len = next;
    }

    best
}

/// Maximal matching blocks between `a` and `b`, in order, adjacent blocks
/// merged. No junk heuristics are applied.
fn matching_blocks(a: &[char], b: &[char]) -> Vec<Block> {
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, ch) in b.iter().enumerate() {
        b2j.entry(*ch).or_default().push(j);
    }

    let mut queue = vec![(0, a.len(), 0, b.len())];
    let mut blocks = Vec::new();
    while let Some(range) = queue.pop() {
        let (alo, ahi, blo, bhi) = range;
        let (i, j, k) = longest_match(a, &b2j, range);
        if k == 0 {
            continue;
        }
        blocks.push((i, j, k));
        if alo < i && blo < j {
            queue.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            queue.push((i + k, ahi, j + k, bhi));
        }
    }
    blocks.sort_unstable();

    let mut merged: Vec<Block> = Vec::with_capacity(blocks.len());
    for (i, j, k) in blocks {
        match merged.last_mut() {
            Some(last) if last.0 + last.2 == i && last.1 + last.2 == j => last.2 += k,
            _ => merged.push((i, j, k)),
        }
    }
    merged
}

fn similarity(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matches: usize = matching_blocks(a, b).iter().map(|(_, _, k)| k).sum();
    2.0 * matches as f64 / total as f64
}

fn to_score(value: f64) -> u8 {
    (value * 100.0).round() as u8
}

/// Similarity of two strings on a 0-100 scale.
pub fn ratio(a: &str, b: &str) -> u8 {
    if a == b {
        return 100;
    }
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    to_score(similarity(&a, &b))
}

/// Best ratio of the shorter string against any equally long window of the
/// longer one.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    if a == b {
        return 100;
    }
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    // the trailing (len, len, 0) block aligns the window with the tail
    let mut blocks = matching_blocks(&shorter, &longer);
    blocks.push((shorter.len(), longer.len(), 0));

    let mut best = 0.0f64;
    for (i, j, _) in blocks {
        let start = j.saturating_sub(i);
        let end = (start + shorter.len()).min(longer.len());
        let score = similarity(&shorter, &longer[start..end]);
        if score > 0.995 {
            return 100;
        }
        best = best.max(score);
    }
    to_score(best)
}

/// Lowercase, drop non-ASCII and collapse every non-word character to a space.
pub fn full_process(input: &str) -> String {
    let ascii: String = input.chars().filter(char::is_ascii).collect();
    NON_WORD
        .replace_all(&ascii, " ")
        .to_lowercase()
        .trim()
        .to_string()
}

fn sorted_tokens(input: &str) -> String {
    let processed = full_process(input);
    let mut tokens: Vec<&str> = processed.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Ratio of both strings after processing and sorting their tokens, so word
/// order does not matter.
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Pick the candidate title that best matches a ROM file name.
///
/// The ROM name is cleaned first. The highest `token_sort_ratio` wins, with
/// earlier candidates winning ties. When nothing reaches `MATCH_THRESHOLD`
/// the cleaned name itself is returned.
pub fn find_best_match<S: AsRef<str>>(rom_name: &str, candidates: &[S]) -> BestMatch {
    let cleaned = clean_rom_name(rom_name);
    let mut best = BestMatch {
        name: String::new(),
        score: 0,
        from_candidates: false,
    };

    for candidate in candidates {
        let candidate = candidate.as_ref();
        let score = token_sort_ratio(&cleaned, candidate);
        if score > best.score {
            best = BestMatch {
                name: candidate.to_string(),
                score,
                from_candidates: true,
            };
        }
    }

    if best.score < MATCH_THRESHOLD {
        let score = partial_ratio(&cleaned, &cleaned);
        if score > best.score {
            best = BestMatch {
                name: cleaned,
                score,
                from_candidates: false,
            };
        }
    }

    best
}
