//! Test-only crate. All end-to-end tests live under `tests/`.
