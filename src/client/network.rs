use std::net::Ipv4Addr;

use super::endpoint::{
    ADD_PUBLIC_IP_BLOCK, CREATE_NAT_RULE, DELETE_NAT_RULE, DELETE_NETWORK_DOMAIN, DELETE_VLAN,
    DEPLOY_NETWORK_DOMAIN, DEPLOY_VLAN, GET_NAT_RULE, GET_NETWORK_DOMAIN, GET_PUBLIC_IP_BLOCK,
    GET_VLAN, LIST_NAT_RULES, LIST_NETWORK_DOMAINS, LIST_PUBLIC_IP_BLOCKS, LIST_VLANS,
    REMOVE_PUBLIC_IP_BLOCK,
};
use super::{CloudControlClient, CloudControlError, PagedStream};
use crate::domain::{
    DeployNetworkDomain, DeployVlan, NatRule, NatRuleId, NetworkDomain, NetworkDomainId, Page,
    PaginationOptions, PublicIpBlock, PublicIpBlockId, Response, Vlan, VlanId,
};
use crate::transport::{
    encode_add_public_ip_block_json, encode_create_nat_rule_json,
    encode_deploy_network_domain_json, encode_deploy_vlan_json, encode_id_json,
};

fn network_domain_filter(network_domain_id: &NetworkDomainId) -> Vec<(String, String)> {
    vec![(
        NetworkDomainId::FIELD.to_owned(),
        network_domain_id.as_str().to_owned(),
    )]
}

/// Network domains, VLANs, public IPv4 blocks and NAT rules.
///
/// Listing calls return an empty page (or an empty stream) when the server
/// reports the listing as not found; lookups return `None`. Mutating calls
/// always surface errors.
impl CloudControlClient {
    pub async fn list_network_domains(
        &self,
        options: &PaginationOptions,
    ) -> Result<Page<NetworkDomain>, CloudControlError> {
        self.list_page(&LIST_NETWORK_DOMAINS, &[], options).await
    }

    pub fn stream_network_domains(&self) -> PagedStream<NetworkDomain> {
        self.stream_records(&LIST_NETWORK_DOMAINS, Vec::new())
    }

    pub async fn get_network_domain(
        &self,
        id: &NetworkDomainId,
    ) -> Result<Option<NetworkDomain>, CloudControlError> {
        self.fetch_record(&GET_NETWORK_DOMAIN, id.as_str()).await
    }

    /// Deploy a network domain; the new id is in the `networkDomainId` info entry.
    pub async fn deploy_network_domain(
        &self,
        request: &DeployNetworkDomain,
    ) -> Result<Response, CloudControlError> {
        self.submit(
            &DEPLOY_NETWORK_DOMAIN,
            encode_deploy_network_domain_json(request),
        )
        .await
    }

    pub async fn delete_network_domain(
        &self,
        id: &NetworkDomainId,
    ) -> Result<Response, CloudControlError> {
        self.submit(&DELETE_NETWORK_DOMAIN, encode_id_json(id.as_str()))
            .await
    }

    pub async fn list_vlans(
        &self,
        network_domain_id: &NetworkDomainId,
        options: &PaginationOptions,
    ) -> Result<Page<Vlan>, CloudControlError> {
        self.list_page(&LIST_VLANS, &network_domain_filter(network_domain_id), options)
            .await
    }

    pub fn stream_vlans(&self, network_domain_id: &NetworkDomainId) -> PagedStream<Vlan> {
        self.stream_records(&LIST_VLANS, network_domain_filter(network_domain_id))
    }

    pub async fn get_vlan(&self, id: &VlanId) -> Result<Option<Vlan>, CloudControlError> {
        self.fetch_record(&GET_VLAN, id.as_str()).await
    }

    /// Deploy a VLAN; the new id is in the `vlanId` info entry.
    pub async fn deploy_vlan(&self, request: &DeployVlan) -> Result<Response, CloudControlError> {
        self.submit(&DEPLOY_VLAN, encode_deploy_vlan_json(request))
            .await
    }

    pub async fn delete_vlan(&self, id: &VlanId) -> Result<Response, CloudControlError> {
        self.submit(&DELETE_VLAN, encode_id_json(id.as_str())).await
    }

    pub async fn list_public_ipv4_address_blocks(
        &self,
        network_domain_id: &NetworkDomainId,
        options: &PaginationOptions,
    ) -> Result<Page<PublicIpBlock>, CloudControlError> {
        self.list_page(
            &LIST_PUBLIC_IP_BLOCKS,
            &network_domain_filter(network_domain_id),
            options,
        )
        .await
    }

    pub fn stream_public_ipv4_address_blocks(
        &self,
        network_domain_id: &NetworkDomainId,
    ) -> PagedStream<PublicIpBlock> {
        self.stream_records(
            &LIST_PUBLIC_IP_BLOCKS,
            network_domain_filter(network_domain_id),
        )
    }

    pub async fn get_public_ipv4_address_block(
        &self,
        id: &PublicIpBlockId,
    ) -> Result<Option<PublicIpBlock>, CloudControlError> {
        self.fetch_record(&GET_PUBLIC_IP_BLOCK, id.as_str()).await
    }

    /// Reserve a new public IPv4 block; the new id is in the `ipBlockId` info entry.
    pub async fn add_public_ipv4_address_block(
        &self,
        network_domain_id: &NetworkDomainId,
    ) -> Result<Response, CloudControlError> {
        self.submit(
            &ADD_PUBLIC_IP_BLOCK,
            encode_add_public_ip_block_json(network_domain_id),
        )
        .await
    }

    pub async fn remove_public_ipv4_address_block(
        &self,
        id: &PublicIpBlockId,
    ) -> Result<Response, CloudControlError> {
        self.submit(&REMOVE_PUBLIC_IP_BLOCK, encode_id_json(id.as_str()))
            .await
    }

    pub async fn list_nat_rules(
        &self,
        network_domain_id: &NetworkDomainId,
        options: &PaginationOptions,
    ) -> Result<Page<NatRule>, CloudControlError> {
        self.list_page(
            &LIST_NAT_RULES,
            &network_domain_filter(network_domain_id),
            options,
        )
        .await
    }

    pub fn stream_nat_rules(&self, network_domain_id: &NetworkDomainId) -> PagedStream<NatRule> {
        self.stream_records(&LIST_NAT_RULES, network_domain_filter(network_domain_id))
    }

    pub async fn get_nat_rule(&self, id: &NatRuleId) -> Result<Option<NatRule>, CloudControlError> {
        self.fetch_record(&GET_NAT_RULE, id.as_str()).await
    }

    /// Map `external_ip` to `internal_ip`; the new id is in the `natRuleId` info entry.
    pub async fn create_nat_rule(
        &self,
        network_domain_id: &NetworkDomainId,
        internal_ip: Ipv4Addr,
        external_ip: Ipv4Addr,
    ) -> Result<Response, CloudControlError> {
        self.submit(
            &CREATE_NAT_RULE,
            encode_create_nat_rule_json(network_domain_id, internal_ip, external_ip),
        )
        .await
    }

    pub async fn delete_nat_rule(&self, id: &NatRuleId) -> Result<Response, CloudControlError> {
        self.submit(&DELETE_NAT_RULE, encode_id_json(id.as_str()))
            .await
    }
}
