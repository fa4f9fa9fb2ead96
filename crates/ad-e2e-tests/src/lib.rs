//! End-to-end tests for the AutoDrive storefront.
//!
//! The tests live under `tests/` and drive the real router, resolver and
//! completion client through in-memory state and a `wiremock` endpoint.
