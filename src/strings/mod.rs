//! String exercises
//!
//! - **Anagram:** deletions needed to make two strings anagrams of each other

pub mod anagram;

pub use anagram::{common_letters, make_anagram, AnagramReport};
