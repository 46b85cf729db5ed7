//! Machine-readable outcome codes for the `code` field of
//! [`BasicResponse`](crate::BasicResponse) and the `code` entry of
//! structured error detail.
//!
//! Envelopes accept any string; these are the ones the workspace itself uses.

pub const CODE_SUCCESS: &str = "SUCCESS";
pub const CODE_BAD_REQUEST: &str = "BAD_REQUEST";
pub const CODE_NOT_FOUND: &str = "NOT_FOUND";
