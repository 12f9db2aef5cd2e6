//! Exclusive-ownership storage block used as the backing store of `simplevec`.
//!
//! An [`OwnedBuffer`] owns exactly one contiguous heap block of `T` slots and
//! knows nothing about which of those slots are "live". Ownership moves, it is
//! never duplicated: the type deliberately does not implement `Clone`.

mod owned_buffer;

pub use owned_buffer::OwnedBuffer;
