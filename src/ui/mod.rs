//! Screen-facing state, decoupled from any rendering toolkit.

pub mod mvi;
pub mod pagination;
