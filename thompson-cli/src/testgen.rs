use crate::error::CliError;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs;
use std::path::Path;
use thompson::nfa::eval::NfaEvaluator;
use thompson::{compile, matches, Nfa};

const LITERALS: [char; 6] = ['a', 'b', 'c', 'd', 'x', 'y'];
const MAX_DEPTH: usize = 3;
const MAX_WALK_LEN: usize = 12;
const NEGATIVE_ATTEMPTS: usize = 200;
const POSITIVE_SAMPLES: usize = 5;
const NEGATIVE_SAMPLES: usize = 5;

/// Test-generation mode (spec §6's `--generate-tests <N>`): produces `N`
/// random patterns from a small grammar, each paired with positive and
/// negative candidate strings, written under `tests/` as one JSON file per
/// pattern.
///
/// Grounded on the randomized self-test generator this engine is
/// descended from (random pattern and string generation, written to files
/// for later replay), but the walk toward positive strings is guided by
/// the compiled NFA's actual transitions (see
/// [`NfaEvaluator::available_chars`]) rather than by pure random guessing
/// over the whole alphabet, which would rarely land inside a specific
/// pattern's language.
pub fn run(count: usize) -> Result<(), CliError> {
    let dir = Path::new("tests");
    fs::create_dir_all(dir).map_err(|source| CliError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut rng = rand::thread_rng();
    for i in 0..count {
        let pattern = random_pattern(&mut rng, MAX_DEPTH);
        let Ok(nfa) = compile(&pattern) else {
            // The grammar below only emits well-formed patterns; this is a
            // defensive skip, not an expected path.
            continue;
        };

        let positive = sample_positive_strings(&nfa, &mut rng, POSITIVE_SAMPLES);
        let negative = sample_negative_strings(&nfa, &mut rng, NEGATIVE_SAMPLES);

        let path = dir.join(format!("pattern_{i}.json"));
        let body = serde_json::json!({
            "regex": pattern,
            "positive": positive,
            "negative": negative,
        });
        let text =
            serde_json::to_string_pretty(&body).expect("test-case JSON is always serializable");
        fs::write(&path, text).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        })?;
        debug!("wrote {}", path.display());
    }

    Ok(())
}

fn random_pattern(rng: &mut impl Rng, depth: usize) -> String {
    if depth == 0 {
        return random_atom(rng);
    }
    match rng.gen_range(0..6) {
        0 => random_atom(rng),
        1 => format!(
            "{}{}",
            random_pattern(rng, depth - 1),
            random_pattern(rng, depth - 1)
        ),
        2 => format!(
            "({}|{})",
            random_pattern(rng, depth - 1),
            random_pattern(rng, depth - 1)
        ),
        3 => format!("({})*", random_pattern(rng, depth - 1)),
        4 => format!("({})+", random_pattern(rng, depth - 1)),
        _ => format!("({})?", random_pattern(rng, depth - 1)),
    }
}

fn random_atom(rng: &mut impl Rng) -> String {
    if rng.gen_bool(0.3) {
        random_class(rng)
    } else {
        LITERALS.choose(rng).expect("LITERALS is non-empty").to_string()
    }
}

fn random_class(rng: &mut impl Rng) -> String {
    let mut sorted = LITERALS;
    sorted.sort_unstable();
    let lo_idx = rng.gen_range(0..sorted.len());
    let hi_idx = rng.gen_range(lo_idx..sorted.len());
    format!("[{}-{}]", sorted[lo_idx], sorted[hi_idx])
}

fn sample_positive_strings(nfa: &Nfa, rng: &mut impl Rng, n: usize) -> Vec<String> {
    (0..n).filter_map(|_| walk_to_acceptance(nfa, rng)).collect()
}

/// Random-walks the NFA's own transitions, occasionally stopping once an
/// accepting configuration is reached, up to `MAX_WALK_LEN` characters.
fn walk_to_acceptance(nfa: &Nfa, rng: &mut impl Rng) -> Option<String> {
    let mut evaluator = NfaEvaluator::new(nfa);
    let mut result = String::new();
    for _ in 0..MAX_WALK_LEN {
        if evaluator.is_accepting() && rng.gen_bool(0.35) {
            return Some(result);
        }
        let choices = evaluator.available_chars();
        let Some(&c) = choices.choose(rng) else {
            break;
        };
        evaluator.step(c);
        result.push(c);
    }
    evaluator.is_accepting().then_some(result)
}

fn sample_negative_strings(nfa: &Nfa, rng: &mut impl Rng, n: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut attempts = 0;
    while out.len() < n && attempts < NEGATIVE_ATTEMPTS {
        attempts += 1;
        let len = rng.gen_range(0..=MAX_WALK_LEN);
        let candidate: String = (0..len)
            .map(|_| *LITERALS.choose(rng).expect("LITERALS is non-empty"))
            .collect();
        if !matches(nfa, &candidate) {
            out.push(candidate);
        }
    }
    out
}
