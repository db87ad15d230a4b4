//! Firebase Analytics adapter.
//!
//! Translates the generic event vocabulary into Firebase event names and
//! parameters and drives an injected [`FirebaseSdk`].

pub mod constants;
mod firebase;
pub mod mapping;
mod sdk;

pub use firebase::{FirebaseEvent, FirebaseProvider, TokenObserver};
pub use sdk::{FirebaseSdk, Number, ParamValue, Parameters};
