//! Contains the integer helpers and the continued fraction expansion that the
//! rational type is built on.

pub(crate) mod frac;
pub(crate) mod integer;
