//! Vela Timestream
//!
//! Declarative AWS Timestream database resources.
//!
//! ## Module Structure
//!
//! - `resources` - Resource type configuration
//! - `synth` - Synthesizer seam and in-memory implementation
//! - `database` - Database factories and descriptor
//! - `key` - Encryption key references

pub mod database;
pub mod key;
pub mod resources;
pub mod synth;

// Re-export main types
pub use database::{Database, DatabaseAttributes, DatabaseDescriptor, DatabaseProps};
pub use key::KeyRef;
pub use synth::{Declaration, Registration, StackSynthesizer, SynthError, Synthesizer};
