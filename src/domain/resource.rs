#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkDomain {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// `ESSENTIALS` or `ADVANCED`.
    pub domain_type: String,
    pub snat_ipv4_address: Option<String>,
    pub create_time: Option<String>,
    pub state: String,
    pub datacenter_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkDomainRef {
    pub id: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpRange {
    pub address: String,
    pub prefix_size: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vlan {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub network_domain: Option<NetworkDomainRef>,
    pub private_ipv4_range: Option<IpRange>,
    pub ipv4_gateway_address: Option<String>,
    pub ipv6_range: Option<IpRange>,
    pub ipv6_gateway_address: Option<String>,
    pub create_time: Option<String>,
    pub state: String,
    pub datacenter_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicIpBlock {
    pub id: String,
    pub network_domain_id: String,
    pub base_ip: String,
    pub size: u32,
    pub create_time: Option<String>,
    pub state: String,
    pub datacenter_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NatRule {
    pub id: String,
    pub network_domain_id: String,
    pub internal_ip: String,
    pub external_ip: String,
    pub create_time: Option<String>,
    pub state: String,
    pub datacenter_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatingSystem {
    pub id: String,
    pub display_name: Option<String>,
    pub family: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cpu {
    pub count: u32,
    pub speed: Option<String>,
    pub cores_per_socket: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disk {
    pub id: String,
    pub scsi_id: Option<u32>,
    pub size_gb: u32,
    pub speed: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nic {
    pub id: String,
    pub private_ipv4: Option<String>,
    pub ipv6: Option<String>,
    pub vlan_id: Option<String>,
    pub vlan_name: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInfo {
    pub network_domain_id: String,
    pub primary_nic: Nic,
    pub additional_nics: Vec<Nic>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub datacenter_id: Option<String>,
    pub operating_system: Option<OperatingSystem>,
    pub cpu: Option<Cpu>,
    pub memory_gb: Option<u32>,
    pub disks: Vec<Disk>,
    pub network_info: Option<NetworkInfo>,
    pub source_image_id: Option<String>,
    pub create_time: Option<String>,
    pub deployed: bool,
    pub started: bool,
    pub state: String,
}
