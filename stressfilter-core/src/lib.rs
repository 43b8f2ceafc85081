//! Rule engine for filtering Bashkir words by stress-placement rules
//!
//! This crate implements the pure decision logic of the stressfilter tool:
//! given a word and a caller-supplied stress index, decide whether the word
//! matches any of the fixed exclusion rules. Everything here is total and
//! side-effect free; file handling and diagnostics live in the CLI crate.
//!
//! # Architecture
//!
//! - [`alphabet`]: vowel tables and contextual vowel classification
//! - [`record`]: the (word, index) record parsed from one input line
//! - [`rules`]: the ordered exclusion rules and their composition
//!
//! # Example
//!
//! ```rust
//! use stressfilter_core::rules::should_exclude;
//!
//! // Ends with the interrogative particle "мо": always excluded.
//! assert!(should_exclude("китапмо", 1));
//!
//! // Plain word, index not on the last vowel: kept.
//! assert!(!should_exclude("ҡалам", 1));
//! ```

pub mod alphabet;
pub mod record;
pub mod rules;

pub use alphabet::{is_vowel_at, last_vowel_index};
pub use record::{ParseError, WordRecord};
pub use rules::should_exclude;
