//! The morph controller: owns both pixel slots, the surface and the animator.

pub(crate) mod morph_session;
