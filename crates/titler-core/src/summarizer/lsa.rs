//! Latent semantic analysis sentence ranking.
//!
//! Sentences are columns of a term-sentence matrix built from stemmed,
//! non-stop-word terms. Each sentence is scored by the length of its
//! projection onto the latent topics found by singular value decomposition,
//! and the best-scoring sentences are returned in document order.

use crate::text::document::{Document, Sentence};
use crate::text::stemmer::Stemmer;
use crate::text::stop_words::StopWords;
use crate::{CoreError, Result as CoreErrorResult};

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};
use nalgebra::DMatrix;

const MIN_DIMENSIONS: usize = 3;
const REDUCTION_RATIO: f64 = 1.0;
const TERM_FREQUENCY_SMOOTHING: f64 = 0.4;
const SVD_MAX_ITERATIONS: usize = 10_000;

#[derive(Debug)]
pub struct LsaSummarizer {
    stemmer: Stemmer,
    stop_words: StopWords,
}

impl LsaSummarizer {
    pub fn new(stemmer: Stemmer, stop_words: StopWords) -> Self {
        Self {
            stemmer,
            stop_words,
        }
    }

    pub fn english() -> Self {
        Self::new(Stemmer::english(), StopWords::english())
    }

    /// Pick the `sentences_count` best ranked sentences, in document order.
    ///
    /// Returns an empty list when the document has no sentences or no
    /// vocabulary left after stop-word filtering.
    pub fn summarize<'d>(
        &self,
        document: &'d Document,
        sentences_count: usize,
    ) -> CoreErrorResult<Vec<&'d Sentence>> {
        let sentences: Vec<&Sentence> = document.sentences().collect();
        let dictionary = self.create_dictionary(document);
        debug!(
            "LSA input: {} sentences, {} terms",
            sentences.len(),
            dictionary.len()
        );

        if sentences.is_empty() || dictionary.is_empty() {
            return Ok(Vec::new());
        }

        if dictionary.len() < sentences.len() {
            warn!(
                "Number of words ({}) is lower than number of sentences ({}); LSA may not work properly",
                dictionary.len(),
                sentences.len()
            );
        }

        let matrix = self.create_matrix(&sentences, &dictionary);
        let matrix = compute_term_frequency(matrix);

        let svd = matrix
            .try_svd(false, true, f64::EPSILON, SVD_MAX_ITERATIONS)
            .ok_or_else(|| CoreError::summarizer("singular value decomposition did not converge"))?;
        let v_t = svd
            .v_t
            .ok_or_else(|| CoreError::summarizer("singular value decomposition returned no V^T"))?;

        let ranks = compute_ranks(svd.singular_values.as_slice(), &v_t);
        Ok(best_sentences(&sentences, &ranks, sentences_count))
    }

    fn normalize_word(word: &str) -> String {
        word.to_lowercase()
    }

    fn stem_word(&self, word: &str) -> String {
        self.stemmer.stem(&Self::normalize_word(word))
    }

    /// Stems of every non-stop-word in the document, each mapped to its matrix row.
    fn create_dictionary(&self, document: &Document) -> BTreeMap<String, usize> {
        let terms: BTreeSet<String> = document
            .words()
            .map(Self::normalize_word)
            .filter(|word| !self.stop_words.contains(word))
            .map(|word| self.stemmer.stem(&word))
            .collect();

        terms
            .into_iter()
            .enumerate()
            .map(|(row, term)| (term, row))
            .collect()
    }

    /// Term counts, one row per dictionary term and one column per sentence.
    fn create_matrix(
        &self,
        sentences: &[&Sentence],
        dictionary: &BTreeMap<String, usize>,
    ) -> DMatrix<f64> {
        let mut matrix = DMatrix::<f64>::zeros(dictionary.len(), sentences.len());

        for (col, sentence) in sentences.iter().enumerate() {
            for word in sentence.words() {
                if let Some(&row) = dictionary.get(&self.stem_word(word)) {
                    matrix[(row, col)] += 1.0;
                }
            }
        }

        matrix
    }
}

/// Scale each sentence column by its most frequent term, with smoothing.
///
/// Columns without any dictionary term stay all zero.
pub(crate) fn compute_term_frequency(mut matrix: DMatrix<f64>) -> DMatrix<f64> {
    for mut column in matrix.column_iter_mut() {
        let max_frequency = column.max();
        if max_frequency == 0.0 {
            continue;
        }
        for cell in column.iter_mut() {
            let frequency = *cell / max_frequency;
            *cell = TERM_FREQUENCY_SMOOTHING + (1.0 - TERM_FREQUENCY_SMOOTHING) * frequency;
        }
    }
    matrix
}

/// Sentence scores from the singular values and the rows of V^T.
///
/// The strongest `max(MIN_DIMENSIONS, k * REDUCTION_RATIO)` topics are kept;
/// weaker ones weigh zero.
pub(crate) fn compute_ranks(sigma: &[f64], v_t: &DMatrix<f64>) -> Vec<f64> {
    let dimensions = MIN_DIMENSIONS.max((sigma.len() as f64 * REDUCTION_RATIO) as usize);

    let mut strongest: Vec<usize> = (0..sigma.len()).collect();
    strongest.sort_by(|&a, &b| sigma[b].total_cmp(&sigma[a]));

    let mut powered_sigma = vec![0.0; sigma.len()];
    for &topic in strongest.iter().take(dimensions) {
        powered_sigma[topic] = sigma[topic].powi(2);
    }

    v_t.column_iter()
        .map(|column| {
            powered_sigma
                .iter()
                .zip(column.iter())
                .map(|(weight, v)| weight * v.powi(2))
                .sum::<f64>()
                .sqrt()
        })
        .collect()
}

/// Highest ranks first (ties keep document order), then back to document order.
pub(crate) fn best_sentences<'d>(
    sentences: &[&'d Sentence],
    ranks: &[f64],
    count: usize,
) -> Vec<&'d Sentence> {
    let mut ranked: Vec<(usize, f64)> = ranks.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(count);
    ranked.sort_by_key(|&(order, _)| order);

    ranked
        .into_iter()
        .filter_map(|(order, _)| sentences.get(order).copied())
        .collect()
}
