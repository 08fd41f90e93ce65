// Word-ingestion contract: the set as used by a word-frequency driver.
//
// The driver is a plain consumer of the public API: it normalizes each
// line (strip everything outside [a-zA-Z' -], lower-case), splits on
// single spaces, and adds every token, including the empty tokens that
// consecutive separators produce. The core accepts any value of the
// element type; what reaches `add` is entirely the driver's decision.
use chained_hashset::ChainedHashSet;

// Mirrors the driver's normalization: strip, lower-case, split on ' '.
fn tokens(line: &str) -> Vec<String> {
    let cleaned: String = line
        .chars()
        .filter(|&c| c.is_ascii_alphabetic() || matches!(c, '\'' | ' ' | '-'))
        .collect();
    cleaned
        .to_lowercase()
        .split(' ')
        .map(str::to_owned)
        .collect()
}

fn ingest(text: &str, capacity: usize) -> ChainedHashSet<String> {
    let mut set = ChainedHashSet::with_capacity(capacity).expect("positive capacity");
    for line in text.lines() {
        set.add_all(tokens(line));
    }
    set
}

const STORY: &str = "\
The quick brown fox jumps over the lazy dog.
The dog, surprised & a little amused, didn't move.
Quick thinking, that dog!
";

// Test: normalization produces the expected token stream.
// Verifies: punctuation outside [a-zA-Z' -] is stripped before
// lower-casing and splitting, and consecutive separators yield empty
// tokens rather than being collapsed.
#[test]
fn normalization_matches_driver_rules() {
    assert_eq!(
        tokens("The quick brown fox."),
        ["the", "quick", "brown", "fox"]
    );
    assert_eq!(tokens("didn't move!"), ["didn't", "move"]);
    assert_eq!(tokens("a  b"), ["a", "", "b"]);
    // Stripped digits leave their separators behind.
    assert_eq!(tokens("7 words, 3 numbers"), ["", "words", "", "numbers"]);
}

// Test: distinct-token count after full ingestion.
// Assumes: set semantics deduplicate repeated words across lines.
// Verifies: len equals the number of distinct normalized tokens.
#[test]
fn ingest_counts_distinct_tokens() {
    let set = ingest(STORY, 128);

    let mut expected = std::collections::BTreeSet::new();
    for line in STORY.lines() {
        expected.extend(tokens(line));
    }
    assert_eq!(set.len(), expected.len());
    assert!(set.contains_all(expected.iter().map(String::as_str)));

    // Repeated words were suppressed, not double-counted.
    assert!(set.contains("the"));
    assert!(set.contains("dog"));
    assert!(set.contains("didn't"));
}

// Test: empty tokens are ordinary elements.
// Assumes: only absence is rejected, and absence is unrepresentable.
// Verifies: the empty string left behind by the stripped "&" is stored
// once and is findable like any other element.
#[test]
fn empty_token_is_a_valid_element() {
    let set = ingest(STORY, 64);
    assert!(set.contains(""));

    let mut s = ChainedHashSet::with_capacity(4).expect("positive capacity");
    assert!(s.add(String::new()));
    assert!(!s.add(String::new()));
    assert!(s.contains(""));
    assert_eq!(s.len(), 1);
    assert!(s.remove(""));
    assert!(!s.contains(""));
}

// Test: the driver's capacity sweep.
// Assumes: membership is independent of capacity.
// Verifies: every capacity stores the same distinct-token count, the
// distribution identities hold, and a generous capacity leaves most
// buckets empty while a tight one forces collisions.
#[test]
fn capacity_sweep_preserves_membership() {
    let mut lens = Vec::new();
    for capacity in [10usize, 100, 1_000] {
        let set = ingest(STORY, capacity);
        lens.push(set.len());

        let stats = set.distribution();
        assert_eq!(stats.capacity, capacity);
        assert_eq!(stats.load_factor, stats.len as f64 / capacity as f64);
        let occupied = stats.capacity - stats.empty_buckets;
        assert_eq!(stats.collisions + occupied, stats.len);
    }
    assert_eq!(lens[0], lens[1]);
    assert_eq!(lens[1], lens[2]);

    // At capacity 10 a story with more distinct words than buckets must
    // collide somewhere.
    let tight = ingest(STORY, 10);
    assert!(tight.len() > tight.capacity());
    assert!(tight.collisions() > 0);
    assert!(tight.biggest_bucket() >= 2);

    // At capacity 1_000 most buckets stay empty.
    let roomy = ingest(STORY, 1_000);
    assert!(roomy.empty_buckets() >= 1_000 - roomy.len());
}
