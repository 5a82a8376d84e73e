//! Test support
//!
//! Construction helpers for IR trees, shared by the unit tests and the
//! integration suites under `tests/`. Each helper fixes the calling
//! convention the default catalogue expects for that node kind, so tests
//! exercise the same registry/convention pairing the host integration uses.

pub mod ir;
