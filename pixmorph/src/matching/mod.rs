//! Rank-based color matching between the source and target pixel lists.

pub(crate) mod matcher;
