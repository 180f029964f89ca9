//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod network;
mod page;
mod response;
mod server;

pub use network::{
    encode_add_public_ip_block_json, encode_create_nat_rule_json,
    encode_deploy_network_domain_json, encode_deploy_vlan_json,
};
pub(crate) use page::{WireRecord, decode_page, decode_record};
pub use page::{TransportError, encode_pagination_query};
pub use response::{decode_response_json, encode_id_json};
