//! Services that move note collections between the engine and storage.
//!
//! ARCHITECTURE
//! ============
//! The engine never touches storage. `persistence` mirrors the board to the
//! local key after every mutation; `remote` simulates a slow server that
//! keeps its own copy under a separate key.

pub mod persistence;
pub mod remote;
