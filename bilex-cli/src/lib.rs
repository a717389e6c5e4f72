//! bilex CLI library
//!
//! Command-line front-end for the bilex bilingual stemming dictionary.

pub mod output;
