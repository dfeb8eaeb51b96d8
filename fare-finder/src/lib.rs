//! Flexible-date round-trip fare finder.
//!
//! A search tool that answers: "between these two airports, across this
//! travel window, which pair of one-way fares makes the cheapest
//! round trip?"

pub mod domain;
pub mod pegasus;
pub mod report;
pub mod search;
