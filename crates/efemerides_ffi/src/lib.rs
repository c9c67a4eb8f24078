//! Flutter-facing bindings for the efemérides calendar core.

pub mod api;
