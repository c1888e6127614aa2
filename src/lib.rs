//! Workspace-level integration tests for Parker live under `tests/`.
