//! Benchmark corpora for the weft transcoding workspace.
//!
//! Provides deterministic sample strings at several scalar-width mixes so
//! the transcode and arena benchmarks measure comparable inputs:
//!
//! - [`ascii_corpus`]: single-byte scalars only
//! - [`latin_corpus`]: one- and two-byte scalars
//! - [`mixed_corpus`]: all four UTF-8 sequence lengths

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

/// A pure-ASCII corpus of roughly `scalars` characters.
pub fn ascii_corpus(scalars: usize) -> String {
    "the quick brown fox jumps over the lazy dog "
        .chars()
        .cycle()
        .take(scalars)
        .collect()
}

/// A Latin-1-heavy corpus mixing one- and two-byte sequences.
pub fn latin_corpus(scalars: usize) -> String {
    "voilà, le café est prêt, garçon étonné "
        .chars()
        .cycle()
        .take(scalars)
        .collect()
}

/// A corpus exercising every UTF-8 sequence length, including
/// supplementary-plane scalars that split into surrogate pairs.
pub fn mixed_corpus(scalars: usize) -> String {
    "wê€ft 😀 weaves ünicode 🧵 text ✂ "
        .chars()
        .cycle()
        .take(scalars)
        .collect()
}
