//! Exam records and the assembly loop.
//!
//! Assembly is a strict sequential fold over (topic × repetition) pairs.
//! Every random draw comes from one explicitly threaded source, so a fixed
//! seed reproduces the exam byte for byte; do not parallelize this loop
//! without first making the draw order independent of scheduling.

use crate::bank::TemplateBank;
use crate::solve;
use crate::template;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// One generated problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub topic: String,
    /// Fully substituted problem text; contains no placeholder letters.
    pub text: String,
    /// Rendered solution set, or `None` when the text did not solve.
    pub answer: Option<String>,
}

/// The assembled exam artifact.
///
/// `topics` echoes the caller-supplied list verbatim, including topics that
/// contributed no questions; `questions` is in generation order and that
/// order is a contract relied on by downstream renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub level: String,
    pub topics: Vec<String>,
    pub count: usize,
    pub questions: Vec<Question>,
}

/// Generate an exam with a fresh random source.
///
/// A supplied seed makes the result reproducible; without one the source
/// is seeded from OS entropy.
pub fn generate(level: &str, topics: &[String], bank: &TemplateBank, seed: Option<u64>) -> Exam {
    let mut rng = match seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    };
    generate_with(&mut rng, level, topics, bank)
}

/// Generate an exam, drawing every random value from `rng`.
///
/// Topics iterate in caller order. A topic absent from the bank, or one
/// with no templates at the requested level, silently contributes zero
/// questions; callers needing coverage guarantees compare `count` against
/// `topics.len() * questions_per_topic`. Each repetition draws its
/// template uniformly at random, with replacement.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    level: &str,
    topics: &[String],
    bank: &TemplateBank,
) -> Exam {
    let per_topic = bank.questions_per_topic(level);
    let mut questions = Vec::new();

    for topic in topics {
        let Some(templates) = bank.templates_for(topic, level) else {
            continue;
        };
        if templates.is_empty() {
            continue;
        }
        for _ in 0..per_topic {
            let Some(tpl) = templates.choose(rng) else {
                break;
            };
            let text = template::fill(rng, tpl);
            let answer = solve::solve(&text);
            questions.push(Question {
                topic: topic.clone(),
                text,
                answer,
            });
        }
    }

    Exam {
        level: level.to_string(),
        topics: topics.to_vec(),
        count: questions.len(),
        questions,
    }
}
