//! Standard API response envelopes.
//!
//! Two envelope designs live side by side:
//!
//! - [`BasicResponse`]: flat envelope with a machine-readable `code` and
//!   flat pagination counters. Messages are used verbatim.
//! - [`DetailedResponse`]: envelope with a free-form `errors` channel and a
//!   nested [`PaginationInfo`] object. Empty messages are replaced by the
//!   defaults in [`messages`].
//!
//! Both are plain data: constructors are pure and never fail.

pub mod basic;
pub mod codes;
pub mod detailed;
pub mod envelope;
pub mod error;
pub mod messages;
pub mod pagination;
pub mod validation;

pub use basic::BasicResponse;
pub use detailed::DetailedResponse;
pub use envelope::Envelope;
pub use error::CoreError;
pub use pagination::{PageSizeMode, PaginationInfo};
pub use validation::ValidationErrors;
