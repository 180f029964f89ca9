//! Typed Rust client for the CloudControl network and server REST API.
//!
//! The crate is split into a domain layer of strong types, a transport layer
//! for wire-format details, and a client layer that interprets a manifest of
//! endpoint declarations. Every listing comes in two forms: a single page
//! (`list_*`) and a lazy stream over all pages (`stream_*`).
//!
//! ```rust,no_run
//! use futures::TryStreamExt;
//! use cloudcontrol::{Auth, CloudControlClient, NetworkDomainId, OrgId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), cloudcontrol::CloudControlError> {
//!     let client = CloudControlClient::new(Auth::basic("user", "...")?, OrgId::new("...")?);
//!     let domain = NetworkDomainId::new("...")?;
//!     let vlans: Vec<_> = client.stream_vlans(&domain).try_collect().await?;
//!     println!("{} vlans", vlans.len());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    Auth, CloudControlClient, CloudControlClientBuilder, CloudControlError, PageRequest,
    PagedStream, paginate,
};
pub use domain::{
    DatacenterId, DeployNetworkDomain, DeployVlan, Marker, NatRule, NatRuleId, NetworkDomain,
    NetworkDomainId, NetworkDomainType, OrgId, Page, PageNumber, PageSize, PageToken,
    PaginationOptions, PublicIpBlock, PublicIpBlockId, Response, Server, ServerId,
    ValidationError, Vlan, VlanId, next_options,
};
