//! All-pair overlap search over a corpus of documents.
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::config::{ReadPolicy, Sensitivity};
use crate::document::Document;
use crate::errors::{OverlapError, Result};
use crate::profile::NGramProfile;
use crate::score::shared_count;

const EXTRACTION_PROGRESS_STEP: usize = 1000;
const COMPARISON_PROGRESS_STEP: usize = 100;

/// Searcher of document pairs sharing word n-grams.
///
/// # Examples
///
/// ```
/// use overlap_check::{OverlapSearcher, TextDocument};
///
/// let documents = vec![
///     TextDocument::new("a", "the cat sat on the mat"),
///     TextDocument::new("b", "the cat sat on the rug"),
///     TextDocument::new("c", "a completely different text"),
/// ];
///
/// let searcher = OverlapSearcher::new(3).unwrap();
/// let comparison = searcher.build_profiles(&documents).unwrap().compare_all();
///
/// assert_eq!(comparison.num_flagged(), 1);
/// let result = &comparison.results()[0];
/// assert_eq!((result.left.as_str(), result.right.as_str(), result.shared), ("a", "b", 3));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct OverlapSearcher {
    sensitivity: Sensitivity,
    read_policy: ReadPolicy,
    shows_progress: bool,
}

impl OverlapSearcher {
    /// Creates an instance.
    ///
    /// # Arguments
    ///
    /// * `sensitivity` - Number of consecutive words per n-gram (must be more than 0).
    pub fn new(sensitivity: usize) -> Result<Self> {
        Ok(Self::with_sensitivity(Sensitivity::new(sensitivity)?))
    }

    /// Creates an instance from a validated sensitivity.
    pub const fn with_sensitivity(sensitivity: Sensitivity) -> Self {
        Self {
            sensitivity,
            read_policy: ReadPolicy::Skip,
            shows_progress: false,
        }
    }

    /// Sets how unreadable documents are handled.
    pub const fn read_policy(mut self, policy: ReadPolicy) -> Self {
        self.read_policy = policy;
        self
    }

    /// Logs the progress of long runs?
    pub const fn shows_progress(mut self, yes: bool) -> Self {
        self.shows_progress = yes;
        self
    }

    /// Gets the n-gram width.
    pub const fn sensitivity(&self) -> Sensitivity {
        self.sensitivity
    }

    /// Reads one document and builds its profile.
    pub fn profile<D>(&self, document: &D) -> Result<NGramProfile>
    where
        D: Document + ?Sized,
    {
        let profile = document
            .open()
            .and_then(|rdr| NGramProfile::from_reader(rdr, self.sensitivity))
            .map_err(|e| OverlapError::read(document.id(), e))?;
        tracing::debug!(
            document = document.id(),
            grams = profile.len(),
            "built n-gram profile"
        );
        Ok(profile)
    }

    /// Builds the profiles of input documents one by one, keeping the input order.
    ///
    /// With [`ReadPolicy::Skip`], unreadable documents are reported in
    /// [`ProfileSet::failures()`] and left out of the comparison.
    /// With [`ReadPolicy::Abort`], the first unreadable document is returned as an error.
    pub fn build_profiles<I, D>(&self, documents: I) -> Result<ProfileSet>
    where
        I: IntoIterator<Item = D>,
        D: Document,
    {
        let mut set = ProfileSet::new(self.shows_progress);
        for (i, document) in documents.into_iter().enumerate() {
            if self.shows_progress && (i + 1) % EXTRACTION_PROGRESS_STEP == 0 {
                tracing::info!("Processed {} documents...", i + 1);
            }
            let outcome = self.profile(&document);
            set.push(i, document.id(), outcome, self.read_policy)?;
        }
        set.log_summary();
        Ok(set)
    }

    /// Builds the profiles of input documents using the rayon thread pool.
    ///
    /// The result is identical to [`Self::build_profiles()`].
    /// With [`ReadPolicy::Abort`], every document is still read before
    /// the first failure in input order is returned.
    pub fn build_profiles_in_parallel<D>(&self, documents: &[D]) -> Result<ProfileSet>
    where
        D: Document + Sync,
    {
        let processed = AtomicUsize::new(0);
        let outcomes: Vec<_> = documents
            .par_iter()
            .map(|document| {
                let outcome = self.profile(document);
                let cnt = processed.fetch_add(1, Ordering::Relaxed) + 1;
                if self.shows_progress && cnt % EXTRACTION_PROGRESS_STEP == 0 {
                    tracing::info!("Processed {} documents...", cnt);
                }
                outcome
            })
            .collect();

        let mut set = ProfileSet::new(self.shows_progress);
        for (i, (document, outcome)) in documents.iter().zip(outcomes).enumerate() {
            set.push(i, document.id(), outcome, self.read_policy)?;
        }
        set.log_summary();
        Ok(set)
    }
}

/// A document that could not be profiled.
#[derive(Debug)]
pub struct ExtractionFailure {
    /// Position of the document in the input.
    pub index: usize,
    /// The read failure, carrying the document identifier.
    pub error: OverlapError,
}

impl ExtractionFailure {
    /// Gets the identifier of the failed document.
    pub fn id(&self) -> &str {
        self.error.document_id().unwrap_or_default()
    }
}

/// One document and its profile.
#[derive(Clone, Debug)]
pub struct ProfileEntry {
    /// Identifier of the document.
    pub id: String,
    /// N-gram profile of the document.
    pub profile: NGramProfile,
}

/// Ordered profiles of the readable documents of a corpus.
#[derive(Debug, Default)]
pub struct ProfileSet {
    entries: Vec<ProfileEntry>,
    failures: Vec<ExtractionFailure>,
    shows_progress: bool,
}

impl ProfileSet {
    fn new(shows_progress: bool) -> Self {
        Self {
            entries: vec![],
            failures: vec![],
            shows_progress,
        }
    }

    /// Creates an instance from already built profiles, keeping the input order.
    pub fn from_profiles<I, S>(profiles: I) -> Self
    where
        I: IntoIterator<Item = (S, NGramProfile)>,
        S: Into<String>,
    {
        let entries = profiles
            .into_iter()
            .map(|(id, profile)| ProfileEntry {
                id: id.into(),
                profile,
            })
            .collect();
        Self {
            entries,
            failures: vec![],
            shows_progress: false,
        }
    }

    fn push(
        &mut self,
        index: usize,
        id: &str,
        outcome: Result<NGramProfile>,
        policy: ReadPolicy,
    ) -> Result<()> {
        match outcome {
            Ok(profile) => self.entries.push(ProfileEntry {
                id: id.to_owned(),
                profile,
            }),
            Err(error) => match policy {
                ReadPolicy::Abort => return Err(error),
                ReadPolicy::Skip => {
                    tracing::warn!(document = id, "skipping unreadable document: {}", error);
                    self.failures.push(ExtractionFailure { index, error });
                }
            },
        }
        Ok(())
    }

    fn log_summary(&self) {
        tracing::info!(
            profiled = self.entries.len(),
            skipped = self.failures.len(),
            "built n-gram profiles"
        );
    }

    /// Gets the profiled documents in input order.
    pub fn entries(&self) -> &[ProfileEntry] {
        &self.entries
    }

    /// Gets the documents that could not be read, in input order.
    pub fn failures(&self) -> &[ExtractionFailure] {
        &self.failures
    }

    /// Gets the number of profiled documents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if no document was profiled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compares every unordered pair `(i, j)` with `i < j` in input order,
    /// returning the pairs sharing at least one n-gram in the evaluated order.
    pub fn compare_all(&self) -> Comparison {
        let mut results = vec![];
        for i in 0..self.entries.len() {
            self.report_row(i + 1);
            self.compare_row(i, &mut results);
        }
        self.finish(results)
    }

    /// Same as [`Self::compare_all()`] but spreads rows over the rayon thread pool.
    pub fn compare_all_in_parallel(&self) -> Comparison {
        let processed = AtomicUsize::new(0);
        let rows: Vec<Vec<ComparisonResult>> = (0..self.entries.len())
            .into_par_iter()
            .map(|i| {
                let mut row = vec![];
                self.compare_row(i, &mut row);
                self.report_row(processed.fetch_add(1, Ordering::Relaxed) + 1);
                row
            })
            .collect();
        self.finish(rows.into_iter().flatten().collect())
    }

    fn compare_row(&self, i: usize, results: &mut Vec<ComparisonResult>) {
        let x = &self.entries[i];
        for (j, y) in self.entries.iter().enumerate().skip(i + 1) {
            let shared = shared_count(&x.profile, &y.profile);
            if shared > 0 {
                results.push(ComparisonResult {
                    left_index: i,
                    right_index: j,
                    left: x.id.clone(),
                    right: y.id.clone(),
                    shared,
                });
            }
        }
    }

    fn report_row(&self, processed: usize) {
        if self.shows_progress && processed % COMPARISON_PROGRESS_STEP == 0 {
            tracing::info!(
                "Processed {}/{} documents...",
                processed,
                self.entries.len()
            );
        }
    }

    fn finish(&self, results: Vec<ComparisonResult>) -> Comparison {
        let n = self.entries.len();
        let num_pairs = n * n.saturating_sub(1) / 2;
        tracing::info!(
            pairs = num_pairs,
            flagged = results.len(),
            "compared all document pairs"
        );
        Comparison { results, num_pairs }
    }
}

/// A pair of documents sharing n-grams.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonResult {
    /// Position of the left-side document in the profile set.
    pub left_index: usize,
    /// Position of the right-side document in the profile set.
    pub right_index: usize,
    /// Identifier of the left-side document.
    pub left: String,
    /// Identifier of the right-side document.
    pub right: String,
    /// Number of distinct n-grams found in both documents.
    pub shared: usize,
}

/// Outcome of comparing all pairs of a profile set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Comparison {
    results: Vec<ComparisonResult>,
    num_pairs: usize,
}

impl Comparison {
    /// Gets the pairs with a nonzero shared count, ordered by `(left_index, right_index)`.
    pub fn results(&self) -> &[ComparisonResult] {
        &self.results
    }

    /// Gets the number of pairs sharing at least one n-gram,
    /// i.e., the possible acts of plagiarism.
    pub fn num_flagged(&self) -> usize {
        self.results.len()
    }

    /// Gets the number of evaluated pairs.
    pub const fn num_pairs(&self) -> usize {
        self.num_pairs
    }

    /// Consumes the comparison, returning the flagged pairs.
    pub fn into_results(self) -> Vec<ComparisonResult> {
        self.results
    }
}
