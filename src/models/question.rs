use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::models::wrapped::WrappedEntry;

pub static TOP_ARTIST_PROMPT: &str = "Who was your top artist of the year?";

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Question {
    pub prompt: String,
    pub correct_answer: String,
    pub options: Vec<String>,
}

/// Builds the question list for one quiz from the user's wrapped history.
///
/// Returns an empty list when no usable entry exists, which the caller must
/// treat as "no quiz available" rather than an error. The correct answer is
/// the top artist of the most recent entry; the options are a shuffled copy
/// of up to `option_pool` artist names. The input is never mutated, so the
/// shuffled order is fixed once generated.
pub fn generate_questions<R: Rng + ?Sized>(
    entries: &[WrappedEntry],
    option_pool: usize,
    rng: &mut R,
) -> Vec<Question> {
    let Some(first) = entries.first() else {
        return Vec::new();
    };

    let correct_answer = first
        .artists
        .first()
        .map(|artist| artist.name.clone())
        .unwrap_or_default();

    let mut options: Vec<String> = first
        .artists
        .iter()
        .take(option_pool)
        .map(|artist| artist.name.clone())
        .collect();
    options.shuffle(rng);

    vec![Question {
        prompt: TOP_ARTIST_PROMPT.into(),
        correct_answer,
        options,
    }]
}
