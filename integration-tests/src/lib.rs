//! Tests against a deployed orders stack live under `tests/`.
