use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::BenchConfig;
use crate::error::{BenchError, HolderError};
use crate::holder::Holder;

// =============================================================================
// Word source
// =============================================================================

/// Whitespace separated tokens loaded once, so the timed loops never touch I/O.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn from_text(text: &str) -> Self {
        WordList {
            words: text.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, BenchError> {
        let content = fs::read_to_string(path).map_err(|err| BenchError::io(path, err))?;
        let list = Self::from_text(&content);
        debug!(path = %path.display(), words = list.len(), "loaded word list");
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

// =============================================================================
// Timed phases
// =============================================================================

/// Number of words used in round `k`: k tenths of `nwords`, capped by the list.
pub fn round_size(k: usize, nwords: usize, words: &WordList) -> usize {
    (k * nwords / 10).min(words.len())
}

pub fn insert_all_words(
    k: usize,
    words: &WordList,
    holder: &mut dyn Holder,
    nwords: usize,
) -> Result<Duration, HolderError> {
    let limit = round_size(k, nwords, words);
    let start = Instant::now();
    for word in words.iter().take(limit) {
        holder.insert(word.to_string())?;
    }
    Ok(start.elapsed())
}

pub fn remove_all_words(
    k: usize,
    words: &WordList,
    holder: &mut dyn Holder,
    nwords: usize,
) -> Result<Duration, HolderError> {
    let limit = round_size(k, nwords, words);
    let start = Instant::now();
    for _ in 0..limit {
        holder.remove()?;
    }
    Ok(start.elapsed())
}

// =============================================================================
// Measurements
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundTiming {
    pub k: usize,
    pub words: usize,
    #[serde(serialize_with = "as_secs")]
    pub insert: Duration,
    #[serde(serialize_with = "as_secs")]
    pub remove: Duration,
    /// The holder still had values after the remove phase.
    pub leftover: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HolderReport {
    pub name: &'static str,
    pub rounds: Vec<RoundTiming>,
}

impl HolderReport {
    pub fn total_insert(&self) -> Duration {
        self.rounds.iter().map(|round| round.insert).sum()
    }

    pub fn total_remove(&self) -> Duration {
        self.rounds.iter().map(|round| round.remove).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchReport {
    pub nwords: usize,
    pub words_available: usize,
    pub holders: Vec<HolderReport>,
}

fn as_secs<S: serde::Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

/// Runs K = 1..=rounds insert/remove rounds against one holder.
pub fn measure_holder(
    words: &WordList,
    holder: &mut dyn Holder,
    config: &BenchConfig,
) -> Result<HolderReport, BenchError> {
    let name = holder.name();
    info!(holder = name, "measuring");

    let mut rounds = Vec::with_capacity(config.rounds);
    for k in 1..=config.rounds {
        let insert = insert_all_words(k, words, holder, config.nwords)?;
        let remove = remove_all_words(k, words, holder, config.nwords)?;
        let leftover = !holder.is_empty();
        if leftover {
            warn!(holder = name, k, "{name} is not empty");
        }
        info!(
            holder = name,
            k,
            insert_secs = insert.as_secs_f64(),
            remove_secs = remove.as_secs_f64(),
            "round finished"
        );
        rounds.push(RoundTiming {
            k,
            words: round_size(k, config.nwords, words),
            insert,
            remove,
            leftover,
        });
    }

    Ok(HolderReport { name, rounds })
}

/// Builds every configured holder (bounded ones with capacity `nwords`) and
/// measures them in order.
pub fn measure_holders(words: &WordList, config: &BenchConfig) -> Result<BenchReport, BenchError> {
    config.validate()?;
    if words.len() < config.nwords {
        warn!(
            available = words.len(),
            nwords = config.nwords,
            "word list is shorter than nwords; rounds are capped"
        );
    }

    let mut holders = Vec::with_capacity(config.holders.len());
    for kind in &config.holders {
        let mut holder = kind.build(config.nwords);
        holders.push(measure_holder(words, holder.as_mut(), config)?);
    }

    Ok(BenchReport {
        nwords: config.nwords,
        words_available: words.len(),
        holders,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holder::HolderKind;
    use crate::stack::{ArrayStack, Stack};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_words(n: usize) -> WordList {
        let text: Vec<String> = (0..n).map(|i| format!("w{i}")).collect();
        WordList::from_text(&text.join(" "))
    }

    fn small_config(nwords: usize, rounds: usize) -> BenchConfig {
        BenchConfig {
            nwords,
            rounds,
            ..BenchConfig::default()
        }
    }

    #[test]
    fn test_word_list_splits_on_any_whitespace() {
        let words = WordList::from_text("alpha  beta\n\tgamma\r\ndelta ");
        assert_eq!(words.len(), 4);
        assert_eq!(words.iter().collect::<Vec<_>>(), vec!["alpha", "beta", "gamma", "delta"]);
    }

    #[test]
    fn test_word_list_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "one two").unwrap();
        writeln!(file, "three").unwrap();
        let words = WordList::from_file(file.path()).unwrap();
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn test_word_list_missing_file() {
        let err = WordList::from_file(Path::new("/no/such/words.txt")).unwrap_err();
        assert!(matches!(err, BenchError::Io { .. }));
    }

    #[test]
    fn test_round_size() {
        let words = sample_words(100);
        assert_eq!(round_size(1, 100, &words), 10);
        assert_eq!(round_size(10, 100, &words), 100);
        assert_eq!(round_size(5, 1000, &words), 100);
        assert_eq!(round_size(1, 5, &words), 0);
    }

    #[test]
    fn test_insert_then_remove_leaves_holder_empty() {
        let words = sample_words(50);
        let mut holder = ArrayStack::new(50);
        insert_all_words(4, &words, &mut holder, 50).unwrap();
        assert_eq!(holder.len(), 20);
        assert_eq!(holder.top().unwrap(), "w19");
        remove_all_words(4, &words, &mut holder, 50).unwrap();
        assert!(Stack::is_empty(&holder));
    }

    #[test]
    fn test_insert_beyond_capacity_fails() {
        let words = sample_words(20);
        let mut holder = ArrayStack::new(5);
        let err = insert_all_words(10, &words, &mut holder, 20).unwrap_err();
        assert!(err.is_capacity_exceeded());
    }

    #[test]
    fn test_measure_holder_records_every_round() {
        let words = sample_words(40);
        let config = small_config(40, 10);
        let mut holder = HolderKind::LinkedQueue.build(config.nwords);
        let report = measure_holder(&words, holder.as_mut(), &config).unwrap();

        assert_eq!(report.name, "LQ");
        assert_eq!(report.rounds.len(), 10);
        let sizes: Vec<usize> = report.rounds.iter().map(|round| round.words).collect();
        assert_eq!(sizes, vec![4, 8, 12, 16, 20, 24, 28, 32, 36, 40]);
        assert!(report.rounds.iter().all(|round| !round.leftover));
        assert!(holder.is_empty());
    }

    /// Accepts every insert and every remove but never gives anything back.
    #[derive(Default)]
    struct StickyHolder {
        inserted: usize,
    }

    impl Holder for StickyHolder {
        fn name(&self) -> &'static str {
            "ST"
        }

        fn insert(&mut self, _value: String) -> Result<(), HolderError> {
            self.inserted += 1;
            Ok(())
        }

        fn remove(&mut self) -> Result<(), HolderError> {
            Ok(())
        }

        fn is_empty(&self) -> bool {
            self.inserted == 0
        }
    }

    #[test]
    fn test_measure_holder_flags_leftover_values() {
        let words = sample_words(20);
        let config = small_config(20, 3);
        let mut holder = StickyHolder::default();
        let report = measure_holder(&words, &mut holder, &config).unwrap();

        assert_eq!(report.rounds.len(), 3);
        assert!(report.rounds.iter().all(|round| round.leftover));

        let bench = BenchReport {
            nwords: config.nwords,
            words_available: words.len(),
            holders: vec![report],
        };
        let text = crate::report::render_text(&bench, false);
        assert_eq!(text.matches("ST is not empty").count(), 3);
    }

    #[test]
    fn test_measure_holders_runs_in_configured_order() {
        let words = sample_words(30);
        let report = measure_holders(&words, &small_config(30, 3)).unwrap();
        let names: Vec<&str> = report.holders.iter().map(|h| h.name).collect();
        assert_eq!(names, vec!["AS", "LS", "AQ", "LQ"]);
        assert_eq!(report.words_available, 30);
        assert!(report.holders.iter().all(|h| h.rounds.len() == 3));
    }

    #[test]
    fn test_measure_holders_with_short_word_list() {
        let words = sample_words(7);
        let report = measure_holders(&words, &small_config(100, 10)).unwrap();
        for holder in &report.holders {
            assert!(holder.rounds.iter().all(|round| round.words <= 7));
        }
    }

    #[test]
    fn test_measure_holders_rejects_invalid_config() {
        let words = sample_words(10);
        let err = measure_holders(&words, &small_config(0, 1)).unwrap_err();
        assert!(matches!(err, BenchError::InvalidConfig { .. }));
    }

    #[test]
    fn test_report_serializes_seconds() {
        let report = HolderReport {
            name: "AS",
            rounds: vec![RoundTiming {
                k: 1,
                words: 2,
                insert: Duration::from_millis(1500),
                remove: Duration::from_millis(250),
                leftover: false,
            }],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["rounds"][0]["insert"], 1.5);
        assert_eq!(json["rounds"][0]["remove"], 0.25);
        assert_eq!(report.total_insert(), Duration::from_millis(1500));
        assert_eq!(report.total_remove(), Duration::from_millis(250));
    }
}
