//! Command implementations
//!
//! Every command fetches everything it needs through [`CloudApi`] first, then
//! builds a record set and hands it to the renderer. A failed fetch therefore
//! never leaves partial output behind.

use nimbus_client::CloudApi;
use nimbus_core::OutputOptions;

pub mod instance;
pub mod kubernetes;
pub mod quota;
pub mod region;
pub mod volume;

#[cfg(test)]
mod mock;

/// Everything a command needs besides its own arguments
pub struct Context<'a> {
    pub api: &'a dyn CloudApi,
    pub output: &'a OutputOptions,
    /// Region requests are scoped to, if any
    pub region: Option<&'a str>,
}
