// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod entropy;
pub mod repos;
pub mod time;

pub use entropy::FailingEntropy;
pub use repos::{FailingRepo, StaleWriteRepo};
pub use time::{MockClock, fixed_now};
