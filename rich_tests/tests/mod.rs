// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for the rich text crates.
//!
//! - The `util` module contains the fixed-advance font metrics, the recording canvas and the
//!   test objects shared by the layout tests.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so the shared utilities are compiled once.
//! - Put new tests into the module of their topic and start the test name with that topic,
//!   e.g. `wrap_keeps_margins` rather than `keeps_margins_when_wrapping`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod util;
