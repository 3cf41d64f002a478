// src/jobs/tests/mod.rs
