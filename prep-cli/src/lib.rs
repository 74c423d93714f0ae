//! Support modules for the `prep` binary.

pub mod inspect;
pub mod logging;
