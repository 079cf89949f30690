//! Core runtime components: the per-target collection engine and the
//! concurrent collector façade.

pub mod collector;
