//! Vidya Library console engine
//!
//! The non-UI core of the management console: the member/payment/request
//! registry with its invariants, the pure dues calculator, the replacement
//! workflow state machine, the archive lifecycle, and JSON snapshot
//! persistence.
//!
//! Collaborator shells (admin console, student portal) read through the
//! published accessors and route every mutation through [`Registry`].
//! Time and id generation are injected ports so tests can pin both.

pub mod clock;
pub mod dues;
pub mod ids;
pub mod persist;
pub mod registry;
pub mod snapshot;

// Re-exports
pub use clock::{Clock, FixedClock, SystemClock};
pub use dues::{effective_dues, parse_dues};
pub use ids::{IdAllocator, SequentialAllocator, SnowflakeAllocator};
pub use persist::{JsonFileStore, SnapshotStore, StoreError};
pub use registry::{Decision, MemberFilter, Registry, RegistryError, RegistryResult};
pub use snapshot::RegistrySnapshot;
