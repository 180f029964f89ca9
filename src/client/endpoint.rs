//! Endpoint manifest: one declaration per remote operation, interpreted by
//! the dispatch engine in [`super::CloudControlClient`].

use tracing::debug;

use super::CloudControlError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What to do when the server answers "not found".
pub(crate) enum Fallback {
    Propagate,
    /// Listing endpoints: a missing namespace means zero items.
    EmptyOnNotFound,
    /// Single-item lookups: a missing resource means `None`.
    NoneOnNotFound,
}

impl Fallback {
    pub(crate) fn recover<T>(
        self,
        endpoint: &'static str,
        result: Result<T, CloudControlError>,
        substitute: impl FnOnce() -> T,
    ) -> Result<T, CloudControlError> {
        match result {
            Err(err) if self != Self::Propagate && err.is_not_found() => {
                debug!(endpoint, fallback = ?self, "not found; substituting empty result");
                Ok(substitute())
            }
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Endpoint {
    pub(crate) name: &'static str,
    pub(crate) method: HttpMethod,
    /// Path below `<endpoint>/<orgId>`; `{name}` segments are bound per call.
    pub(crate) path: &'static str,
    pub(crate) fallback: Fallback,
}

impl Endpoint {
    const fn get(name: &'static str, path: &'static str, fallback: Fallback) -> Self {
        Self {
            name,
            method: HttpMethod::Get,
            path,
            fallback,
        }
    }

    const fn post(name: &'static str, path: &'static str) -> Self {
        Self {
            name,
            method: HttpMethod::Post,
            path,
            fallback: Fallback::Propagate,
        }
    }

    /// Path segments with every `{name}` placeholder replaced by its bound value.
    pub(crate) fn path_segments<'a>(
        &self,
        bindings: &[(&str, &'a str)],
    ) -> Result<Vec<&'a str>, CloudControlError> {
        self.path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                let Some(placeholder) = segment
                    .strip_prefix('{')
                    .and_then(|rest| rest.strip_suffix('}'))
                else {
                    return Ok(segment);
                };
                bindings
                    .iter()
                    .find(|(name, _)| *name == placeholder)
                    .map(|(_, value)| *value)
                    .ok_or_else(|| {
                        CloudControlError::InvalidEndpoint(format!(
                            "{}: unbound path parameter {{{placeholder}}}",
                            self.name
                        ))
                    })
            })
            .collect()
    }
}

pub(crate) static LIST_NETWORK_DOMAINS: Endpoint = Endpoint::get(
    "network:list",
    "/network/networkDomain",
    Fallback::EmptyOnNotFound,
);
pub(crate) static GET_NETWORK_DOMAIN: Endpoint = Endpoint::get(
    "network:get",
    "/network/networkDomain/{id}",
    Fallback::NoneOnNotFound,
);
pub(crate) static DEPLOY_NETWORK_DOMAIN: Endpoint =
    Endpoint::post("network:deployNetworkDomain", "/network/deployNetworkDomain");
pub(crate) static DELETE_NETWORK_DOMAIN: Endpoint =
    Endpoint::post("network:deleteNetworkDomain", "/network/deleteNetworkDomain");

pub(crate) static LIST_VLANS: Endpoint =
    Endpoint::get("network:vlan", "/network/vlan", Fallback::EmptyOnNotFound);
pub(crate) static GET_VLAN: Endpoint = Endpoint::get(
    "network:getVlan",
    "/network/vlan/{id}",
    Fallback::NoneOnNotFound,
);
pub(crate) static DEPLOY_VLAN: Endpoint =
    Endpoint::post("network:deployVlan", "/network/deployVlan");
pub(crate) static DELETE_VLAN: Endpoint =
    Endpoint::post("network:deleteVlan", "/network/deleteVlan");

pub(crate) static LIST_PUBLIC_IP_BLOCKS: Endpoint = Endpoint::get(
    "network:publicIpBlock",
    "/network/publicIpBlock",
    Fallback::EmptyOnNotFound,
);
pub(crate) static GET_PUBLIC_IP_BLOCK: Endpoint = Endpoint::get(
    "network:getPublicIpBlock",
    "/network/publicIpBlock/{id}",
    Fallback::NoneOnNotFound,
);
pub(crate) static ADD_PUBLIC_IP_BLOCK: Endpoint =
    Endpoint::post("network:addPublicIpBlock", "/network/addPublicIpBlock");
pub(crate) static REMOVE_PUBLIC_IP_BLOCK: Endpoint =
    Endpoint::post("network:removePublicIpBlock", "/network/removePublicIpBlock");

pub(crate) static LIST_NAT_RULES: Endpoint =
    Endpoint::get("network:natRule", "/network/natRule", Fallback::EmptyOnNotFound);
pub(crate) static GET_NAT_RULE: Endpoint = Endpoint::get(
    "network:getNatRule",
    "/network/natRule/{id}",
    Fallback::NoneOnNotFound,
);
pub(crate) static CREATE_NAT_RULE: Endpoint =
    Endpoint::post("network:createNatRule", "/network/createNatRule");
pub(crate) static DELETE_NAT_RULE: Endpoint =
    Endpoint::post("network:deleteNatRule", "/network/deleteNatRule");

pub(crate) static LIST_SERVERS: Endpoint =
    Endpoint::get("server:list", "/server/server", Fallback::EmptyOnNotFound);
pub(crate) static GET_SERVER: Endpoint = Endpoint::get(
    "server:get",
    "/server/server/{id}",
    Fallback::NoneOnNotFound,
);
pub(crate) static DELETE_SERVER: Endpoint =
    Endpoint::post("server:deleteServer", "/server/deleteServer");

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> CloudControlError {
        CloudControlError::NotFound {
            status: 404,
            response: None,
        }
    }

    #[test]
    fn path_segments_bind_placeholders() {
        assert_eq!(
            GET_VLAN.path_segments(&[("id", "vlan-1")]).unwrap(),
            vec!["network", "vlan", "vlan-1"]
        );
        assert_eq!(
            LIST_VLANS.path_segments(&[]).unwrap(),
            vec!["network", "vlan"]
        );
    }

    #[test]
    fn path_segments_reject_unbound_placeholder() {
        let err = GET_SERVER.path_segments(&[]).unwrap_err();
        assert!(matches!(err, CloudControlError::InvalidEndpoint(_)));
    }

    #[test]
    fn listing_fallback_substitutes_only_not_found() {
        let recovered = LIST_NAT_RULES
            .fallback
            .recover(LIST_NAT_RULES.name, Err::<Vec<u8>, _>(not_found()), Vec::new)
            .unwrap();
        assert!(recovered.is_empty());

        let err = LIST_NAT_RULES
            .fallback
            .recover(
                LIST_NAT_RULES.name,
                Err::<Vec<u8>, _>(CloudControlError::HttpStatus {
                    status: 500,
                    body: None,
                }),
                Vec::new,
            )
            .unwrap_err();
        assert!(matches!(err, CloudControlError::HttpStatus { status: 500, .. }));
    }

    #[test]
    fn mutating_endpoints_never_recover() {
        for endpoint in [&CREATE_NAT_RULE, &DELETE_NAT_RULE, &DELETE_SERVER] {
            assert_eq!(endpoint.method, HttpMethod::Post);
            let err = endpoint
                .fallback
                .recover(endpoint.name, Err::<(), _>(not_found()), || ())
                .unwrap_err();
            assert!(err.is_not_found());
        }
    }

    #[test]
    fn listing_endpoints_share_wire_paths_with_lookups() {
        for (list, get) in [
            (&LIST_NETWORK_DOMAINS, &GET_NETWORK_DOMAIN),
            (&LIST_VLANS, &GET_VLAN),
            (&LIST_PUBLIC_IP_BLOCKS, &GET_PUBLIC_IP_BLOCK),
            (&LIST_NAT_RULES, &GET_NAT_RULE),
            (&LIST_SERVERS, &GET_SERVER),
        ] {
            assert_eq!(list.fallback, Fallback::EmptyOnNotFound);
            assert_eq!(get.fallback, Fallback::NoneOnNotFound);
            assert_eq!(format!("{}/{{id}}", list.path), get.path);
        }
    }
}
