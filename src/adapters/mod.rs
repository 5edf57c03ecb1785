//! Adapters - Implementations of the ports.
//!
//! Each adapter wires a port to a concrete technology. Only the storage
//! side needs adapters here: the dialogue engine itself is pure domain
//! code with no external dependencies.

pub mod storage;
