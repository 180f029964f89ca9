use std::io;

use cloudcontrol::{Auth, CloudControlClient, NetworkDomainId, OrgId};
use futures::TryStreamExt;
use tracing_subscriber::EnvFilter;

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let auth = Auth::basic(
        required_env("CLOUDCONTROL_USERNAME")?,
        required_env("CLOUDCONTROL_PASSWORD")?,
    )?;
    let org_id = OrgId::new(required_env("CLOUDCONTROL_ORG_ID")?)?;
    let network_domain_id = NetworkDomainId::new(required_env("CLOUDCONTROL_NETWORK_DOMAIN_ID")?)?;

    let mut builder = CloudControlClient::builder(auth, org_id);
    if let Ok(endpoint) = std::env::var("CLOUDCONTROL_ENDPOINT") {
        builder = builder.endpoint(endpoint);
    }
    let client = builder.build()?;

    let mut vlans = client.stream_vlans(&network_domain_id);
    while let Some(vlan) = vlans.try_next().await? {
        println!(
            "{} {} {:?} {}",
            vlan.id, vlan.name, vlan.private_ipv4_range, vlan.state
        );
    }

    Ok(())
}
