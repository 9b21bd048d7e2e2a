// phishscan: heuristic phishing risk scoring for email text
//
// This is the library root. The scorer is pure and lives in `scoring`;
// everything else is input, output, and configuration around it.

pub mod config;
pub mod input;
pub mod output;
pub mod scoring;
