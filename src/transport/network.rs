use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

use super::page::WireRecord;
use crate::domain::{
    DeployNetworkDomain, DeployVlan, IpRange, NatRule, NetworkDomain, NetworkDomainId,
    NetworkDomainRef, PublicIpBlock, Vlan,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NetworkDomainJson {
    id: String,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "type")]
    domain_type: String,
    #[serde(default)]
    snat_ipv4_address: Option<String>,
    #[serde(default)]
    create_time: Option<String>,
    state: String,
    #[serde(default)]
    datacenter_id: Option<String>,
}

impl WireRecord for NetworkDomain {
    type Json = NetworkDomainJson;
    const ITEMS_FIELD: &'static str = "networkDomain";

    fn from_json(json: Self::Json) -> Self {
        Self {
            id: json.id,
            name: json.name,
            description: json.description,
            domain_type: json.domain_type,
            snat_ipv4_address: json.snat_ipv4_address,
            create_time: json.create_time,
            state: json.state,
            datacenter_id: json.datacenter_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NetworkDomainRefJson {
    id: String,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IpRangeJson {
    address: String,
    prefix_size: u8,
}

impl From<IpRangeJson> for IpRange {
    fn from(value: IpRangeJson) -> Self {
        Self {
            address: value.address,
            prefix_size: value.prefix_size,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VlanJson {
    id: String,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    network_domain: Option<NetworkDomainRefJson>,
    #[serde(default)]
    private_ipv4_range: Option<IpRangeJson>,
    #[serde(default)]
    ipv4_gateway_address: Option<String>,
    #[serde(default)]
    ipv6_range: Option<IpRangeJson>,
    #[serde(default)]
    ipv6_gateway_address: Option<String>,
    #[serde(default)]
    create_time: Option<String>,
    state: String,
    #[serde(default)]
    datacenter_id: Option<String>,
}

impl WireRecord for Vlan {
    type Json = VlanJson;
    const ITEMS_FIELD: &'static str = "vlan";

    fn from_json(json: Self::Json) -> Self {
        Self {
            id: json.id,
            name: json.name,
            description: json.description,
            network_domain: json.network_domain.map(|domain| NetworkDomainRef {
                id: domain.id,
                name: domain.name,
            }),
            private_ipv4_range: json.private_ipv4_range.map(IpRange::from),
            ipv4_gateway_address: json.ipv4_gateway_address,
            ipv6_range: json.ipv6_range.map(IpRange::from),
            ipv6_gateway_address: json.ipv6_gateway_address,
            create_time: json.create_time,
            state: json.state,
            datacenter_id: json.datacenter_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PublicIpBlockJson {
    id: String,
    network_domain_id: String,
    base_ip: String,
    size: u32,
    #[serde(default)]
    create_time: Option<String>,
    state: String,
    #[serde(default)]
    datacenter_id: Option<String>,
}

impl WireRecord for PublicIpBlock {
    type Json = PublicIpBlockJson;
    const ITEMS_FIELD: &'static str = "publicIpBlock";

    fn from_json(json: Self::Json) -> Self {
        Self {
            id: json.id,
            network_domain_id: json.network_domain_id,
            base_ip: json.base_ip,
            size: json.size,
            create_time: json.create_time,
            state: json.state,
            datacenter_id: json.datacenter_id,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NatRuleJson {
    id: String,
    network_domain_id: String,
    internal_ip: String,
    external_ip: String,
    #[serde(default)]
    create_time: Option<String>,
    state: String,
    #[serde(default)]
    datacenter_id: Option<String>,
}

impl WireRecord for NatRule {
    type Json = NatRuleJson;
    const ITEMS_FIELD: &'static str = "natRule";

    fn from_json(json: Self::Json) -> Self {
        Self {
            id: json.id,
            network_domain_id: json.network_domain_id,
            internal_ip: json.internal_ip,
            external_ip: json.external_ip,
            create_time: json.create_time,
            state: json.state,
            datacenter_id: json.datacenter_id,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeployNetworkDomainJson<'a> {
    datacenter_id: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(rename = "type")]
    domain_type: &'static str,
}

pub fn encode_deploy_network_domain_json(
    request: &DeployNetworkDomain,
) -> Result<String, serde_json::Error> {
    serde_json::to_string(&DeployNetworkDomainJson {
        datacenter_id: request.datacenter_id().as_str(),
        name: request.name(),
        description: request.description(),
        domain_type: request.domain_type().as_str(),
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeployVlanJson<'a> {
    network_domain_id: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    private_ipv4_base_address: Ipv4Addr,
    private_ipv4_prefix_size: u8,
}

pub fn encode_deploy_vlan_json(request: &DeployVlan) -> Result<String, serde_json::Error> {
    serde_json::to_string(&DeployVlanJson {
        network_domain_id: request.network_domain_id().as_str(),
        name: request.name(),
        description: request.description(),
        private_ipv4_base_address: request.private_ipv4_base_address(),
        private_ipv4_prefix_size: request.private_ipv4_prefix_size(),
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NetworkDomainScopedJson<'a> {
    network_domain_id: &'a str,
}

pub fn encode_add_public_ip_block_json(
    network_domain_id: &NetworkDomainId,
) -> Result<String, serde_json::Error> {
    serde_json::to_string(&NetworkDomainScopedJson {
        network_domain_id: network_domain_id.as_str(),
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateNatRuleJson<'a> {
    network_domain_id: &'a str,
    internal_ip: Ipv4Addr,
    external_ip: Ipv4Addr,
}

pub fn encode_create_nat_rule_json(
    network_domain_id: &NetworkDomainId,
    internal_ip: Ipv4Addr,
    external_ip: Ipv4Addr,
) -> Result<String, serde_json::Error> {
    serde_json::to_string(&CreateNatRuleJson {
        network_domain_id: network_domain_id.as_str(),
        internal_ip,
        external_ip,
    })
}
