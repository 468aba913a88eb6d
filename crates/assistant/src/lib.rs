//! The message-handling pipeline — the heart of CityGuide.
//!
//! Each `send_message` call runs a single pass:
//!
//! 1. **Scope filter** — off-topic questions get the fixed refusal, no
//!    backend call
//! 2. **Augmentation** — bike-share questions trigger a live station
//!    lookup; a failed lookup degrades to an inline notice, never an error
//! 3. **Assembly** — instruction preamble + retrieved data + verbatim
//!    question
//! 4. **Dispatch** — one call to whichever backend is active in the
//!    registry
//!
//! No retries, no fan-out; at most two sequential awaits per invocation.

pub mod detect;
pub mod pipeline;
pub mod prompt;
pub mod scope;

pub use detect::AugmentationDetector;
pub use pipeline::{Assistant, BackendResolver};
pub use prompt::{build_payload, LOOKUP_FAILED_NOTICE, OUT_OF_SCOPE_MESSAGE, SYSTEM_PROMPT};
pub use scope::ScopeFilter;
