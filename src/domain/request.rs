use std::net::Ipv4Addr;

use crate::domain::validation::ValidationError;
use crate::domain::value::{DatacenterId, NetworkDomainId};

pub const VLAN_MIN_PREFIX_SIZE: u8 = 16;
pub const VLAN_MAX_PREFIX_SIZE: u8 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetworkDomainType {
    #[default]
    Essentials,
    Advanced,
}

impl NetworkDomainType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Essentials => "ESSENTIALS",
            Self::Advanced => "ADVANCED",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DeployNetworkDomain {
    datacenter_id: DatacenterId,
    name: String,
    description: Option<String>,
    domain_type: NetworkDomainType,
}

impl DeployNetworkDomain {
    pub fn new(
        datacenter_id: DatacenterId,
        name: impl Into<String>,
        domain_type: NetworkDomainType,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            datacenter_id,
            name: non_empty_name(name.into())?,
            description: None,
            domain_type,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn datacenter_id(&self) -> &DatacenterId {
        &self.datacenter_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn domain_type(&self) -> NetworkDomainType {
        self.domain_type
    }
}

#[derive(Debug, Clone)]
pub struct DeployVlan {
    network_domain_id: NetworkDomainId,
    name: String,
    description: Option<String>,
    private_ipv4_base_address: Ipv4Addr,
    private_ipv4_prefix_size: u8,
}

impl DeployVlan {
    pub fn new(
        network_domain_id: NetworkDomainId,
        name: impl Into<String>,
        private_ipv4_base_address: Ipv4Addr,
        private_ipv4_prefix_size: u8,
    ) -> Result<Self, ValidationError> {
        if !(VLAN_MIN_PREFIX_SIZE..=VLAN_MAX_PREFIX_SIZE).contains(&private_ipv4_prefix_size) {
            return Err(ValidationError::OutOfRange {
                field: "privateIpv4PrefixSize",
                min: VLAN_MIN_PREFIX_SIZE.into(),
                max: VLAN_MAX_PREFIX_SIZE.into(),
                actual: private_ipv4_prefix_size.into(),
            });
        }
        Ok(Self {
            network_domain_id,
            name: non_empty_name(name.into())?,
            description: None,
            private_ipv4_base_address,
            private_ipv4_prefix_size,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn network_domain_id(&self) -> &NetworkDomainId {
        &self.network_domain_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn private_ipv4_base_address(&self) -> Ipv4Addr {
        self.private_ipv4_base_address
    }

    pub fn private_ipv4_prefix_size(&self) -> u8 {
        self.private_ipv4_prefix_size
    }
}

fn non_empty_name(name: String) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field: "name" });
    }
    Ok(trimmed.to_owned())
}
