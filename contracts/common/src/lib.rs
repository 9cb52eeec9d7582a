//! DAICO - shared building blocks for the platform contracts.
//!
//! * [`ownership`] two-phase ownership (transfer, then claim) plus the proxy
//!   variants that let one contract claim or hand over another on its behalf.
//! * [`units`] canonical AUSD arithmetic and the contribution bonus schedule.
//! * [`interfaces`] typed clients used for every cross-contract call.

#![no_std]

pub mod interfaces;
pub mod ownership;
pub mod units;
