//! Visible-pixel records and their color sort key.

pub(crate) mod color_key;
pub(crate) mod extract;
pub(crate) mod record;
