//! Candidate enumeration and scoring for one encoder round.

use ahash::AHashMap as HashMap;
use std::hash::Hash;

/// A distinct substring seen during enumeration and its occurrence count.
#[derive(Debug, PartialEq, Eq)]
pub struct Candidate<'a, T> {
    pub substring: &'a [T],
    pub count: usize,
}

impl<T> Clone for Candidate<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Candidate<'_, T> {}

/// Occurrence counts for every distinct substring in a length window.
///
/// Candidates are kept in enumeration order: shortest length first, then
/// by first occurrence (run order, then offset within the run).
#[derive(Debug)]
pub struct SubstringCounts<'a, T> {
    candidates: Vec<Candidate<'a, T>>,
    index: HashMap<&'a [T], usize>,
}

impl<'a, T: Hash + Eq> SubstringCounts<'a, T> {
    /// Returns the count for `substring`, if it was enumerated.
    pub fn get(&self, substring: &[T]) -> Option<usize> {
        self.index
            .get(substring)
            .map(|&slot| self.candidates[slot].count)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidates in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate<'a, T>> + '_ {
        self.candidates.iter()
    }

    /// Returns the candidate with the lowest [`scr`] and its score.
    ///
    /// Only a strictly lower score replaces the current best, so ties go to
    /// the earliest candidate in enumeration order.
    pub fn lowest_scr(&self, total_len: usize) -> Option<(Candidate<'a, T>, f64)> {
        let mut best: Option<(Candidate<'a, T>, f64)> = None;
        for candidate in &self.candidates {
            let score = scr(candidate.substring.len(), candidate.count, total_len);
            match best {
                Some((_, best_score)) if score >= best_score => {}
                _ => best = Some((*candidate, score)),
            }
        }
        best
    }
}

/// Counts every distinct substring with length in `[min_len, max_len]`
/// across `runs`.
///
/// Substrings never span two runs. Within a run, occurrences are counted
/// left to right without overlap, so `"010"` occurs once in `"010101"`.
/// Counts from different runs are summed. Lengths longer than a run are
/// skipped for that run.
pub fn substring_counts<'a, T, I>(
    runs: I,
    min_len: usize,
    max_len: usize,
) -> SubstringCounts<'a, T>
where
    T: Hash + Eq + 'a,
    I: IntoIterator<Item = &'a [T]>,
{
    let runs: Vec<&'a [T]> = runs.into_iter().collect();
    let longest = runs.iter().map(|run| run.len()).max().unwrap_or(0);

    let mut candidates: Vec<Candidate<'a, T>> = Vec::new();
    let mut index: HashMap<&'a [T], usize> = HashMap::default();
    // Per candidate: the run it was last seen in and the first offset in
    // that run where a new occurrence may start.
    let mut cursors: Vec<(usize, usize)> = Vec::new();

    for len in min_len.max(1)..=max_len.min(longest) {
        for (run_ix, &run) in runs.iter().enumerate() {
            if run.len() < len {
                continue;
            }
            for pos in 0..=run.len() - len {
                let substring = &run[pos..pos + len];
                let slot = *index.entry(substring).or_insert_with(|| {
                    candidates.push(Candidate {
                        substring,
                        count: 0,
                    });
                    cursors.push((run_ix, 0));
                    candidates.len() - 1
                });

                let (seen_run, free_from) = &mut cursors[slot];
                if *seen_run != run_ix {
                    *seen_run = run_ix;
                    *free_from = 0;
                }
                if pos >= *free_from {
                    candidates[slot].count += 1;
                    *free_from = pos + len;
                }
            }
        }
    }

    SubstringCounts { candidates, index }
}

/// Stochastic complexity reduction score of a candidate.
///
/// `len` is the candidate length, `count` its occurrence count and
/// `total_len` the length of the original input. Lower is better.
pub fn scr(len: usize, count: usize, total_len: usize) -> f64 {
    let r = count as f64;
    let len = len as f64;
    let half = total_len as f64 / 2.0;
    (r * (half.log2() - r.log2()) + len) / (len * r)
}
