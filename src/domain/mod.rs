//! Domain layer: strong types with validation and invariants (no I/O).

mod page;
mod request;
mod resource;
mod response;
mod validation;
mod value;

pub use page::{Marker, Page, PaginationOptions, next_options};
pub use request::{
    DeployNetworkDomain, DeployVlan, NetworkDomainType, VLAN_MAX_PREFIX_SIZE,
    VLAN_MIN_PREFIX_SIZE,
};
pub use resource::{
    Cpu, Disk, IpRange, NatRule, NetworkDomain, NetworkDomainRef, NetworkInfo, Nic,
    OperatingSystem, PublicIpBlock, Server, Vlan,
};
pub use response::{Property, Response};
pub use validation::ValidationError;
pub use value::{
    DatacenterId, NatRuleId, NetworkDomainId, OrgId, PageNumber, PageSize, PageToken, Password,
    PublicIpBlockId, ServerId, Username, VlanId,
};

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use super::*;

    #[test]
    fn identifiers_reject_empty_and_trim() {
        assert!(matches!(
            NetworkDomainId::new("   "),
            Err(ValidationError::Empty {
                field: NetworkDomainId::FIELD
            })
        ));
        assert_eq!(NatRuleId::new(" rule-42 ").unwrap().as_str(), "rule-42");
        assert_eq!(NetworkDomainId::FIELD, "networkDomainId");
        assert_eq!(NatRuleId::FIELD, "id");
    }

    #[test]
    fn password_rejects_empty_and_hides_value_in_debug() {
        assert!(matches!(
            Password::new(""),
            Err(ValidationError::Empty {
                field: Password::FIELD
            })
        ));
        let password = Password::new("s3cret").unwrap();
        assert!(!format!("{password:?}").contains("s3cret"));
    }

    #[test]
    fn deploy_vlan_enforces_prefix_range() {
        let domain = NetworkDomainId::new("netdom-1").unwrap();
        let base = Ipv4Addr::new(10, 0, 0, 0);
        assert!(DeployVlan::new(domain.clone(), "web", base, 15).is_err());
        assert!(DeployVlan::new(domain.clone(), "web", base, 24).is_ok());
        assert!(DeployVlan::new(domain, "web", base, 25).is_err());
    }

    #[test]
    fn deploy_network_domain_requires_name() {
        let datacenter = DatacenterId::new("NA9").unwrap();
        let err = DeployNetworkDomain::new(datacenter, " ", NetworkDomainType::Advanced)
            .unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "name" });
    }

    #[test]
    fn response_helpers() {
        let response = Response {
            operation: Some("CREATE_NAT_RULE".to_owned()),
            response_code: Response::IN_PROGRESS.to_owned(),
            message: None,
            info: vec![Property {
                name: "natRuleId".to_owned(),
                value: "rule-42".to_owned(),
            }],
            warning: Vec::new(),
            error: Vec::new(),
            request_id: None,
        };
        assert!(response.is_success());
        assert!(!response.is_not_found());
        assert_eq!(response.info_value("natRuleId"), Some("rule-42"));
        assert_eq!(response.info_value("missing"), None);
    }
}
