use serde::Deserialize;

use super::page::WireRecord;
use crate::domain::{Cpu, Disk, NetworkInfo, Nic, OperatingSystem, Server};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OperatingSystemJson {
    id: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    family: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CpuJson {
    count: u32,
    #[serde(default)]
    speed: Option<String>,
    #[serde(default)]
    cores_per_socket: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DiskJson {
    id: String,
    #[serde(default)]
    scsi_id: Option<u32>,
    size_gb: u32,
    #[serde(default)]
    speed: Option<String>,
    #[serde(default)]
    state: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NicJson {
    id: String,
    #[serde(default)]
    private_ipv4: Option<String>,
    #[serde(default)]
    ipv6: Option<String>,
    #[serde(default)]
    vlan_id: Option<String>,
    #[serde(default)]
    vlan_name: Option<String>,
    #[serde(default)]
    state: Option<String>,
}

impl From<NicJson> for Nic {
    fn from(value: NicJson) -> Self {
        Self {
            id: value.id,
            private_ipv4: value.private_ipv4,
            ipv6: value.ipv6,
            vlan_id: value.vlan_id,
            vlan_name: value.vlan_name,
            state: value.state,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NetworkInfoJson {
    network_domain_id: String,
    primary_nic: NicJson,
    #[serde(default)]
    additional_nic: Vec<NicJson>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ServerJson {
    id: String,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    datacenter_id: Option<String>,
    #[serde(default)]
    operating_system: Option<OperatingSystemJson>,
    #[serde(default)]
    cpu: Option<CpuJson>,
    #[serde(default)]
    memory_gb: Option<u32>,
    #[serde(default)]
    disk: Vec<DiskJson>,
    #[serde(default)]
    network_info: Option<NetworkInfoJson>,
    #[serde(default)]
    source_image_id: Option<String>,
    #[serde(default)]
    create_time: Option<String>,
    #[serde(default)]
    deployed: bool,
    #[serde(default)]
    started: bool,
    state: String,
}

impl WireRecord for Server {
    type Json = ServerJson;
    const ITEMS_FIELD: &'static str = "server";

    fn from_json(json: Self::Json) -> Self {
        Self {
            id: json.id,
            name: json.name,
            description: json.description,
            datacenter_id: json.datacenter_id,
            operating_system: json.operating_system.map(|os| OperatingSystem {
                id: os.id,
                display_name: os.display_name,
                family: os.family,
            }),
            cpu: json.cpu.map(|cpu| Cpu {
                count: cpu.count,
                speed: cpu.speed,
                cores_per_socket: cpu.cores_per_socket,
            }),
            memory_gb: json.memory_gb,
            disks: json
                .disk
                .into_iter()
                .map(|disk| Disk {
                    id: disk.id,
                    scsi_id: disk.scsi_id,
                    size_gb: disk.size_gb,
                    speed: disk.speed,
                    state: disk.state,
                })
                .collect(),
            network_info: json.network_info.map(|info| NetworkInfo {
                network_domain_id: info.network_domain_id,
                primary_nic: info.primary_nic.into(),
                additional_nics: info.additional_nic.into_iter().map(Nic::from).collect(),
            }),
            source_image_id: json.source_image_id,
            create_time: json.create_time,
            deployed: json.deployed,
            started: json.started,
            state: json.state,
        }
    }
}
