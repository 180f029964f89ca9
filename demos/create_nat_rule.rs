use std::io;
use std::net::Ipv4Addr;

use cloudcontrol::{Auth, CloudControlClient, NetworkDomainId, OrgId};
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
    let internal_ip: Ipv4Addr = required_env("CLOUDCONTROL_INTERNAL_IP")?.parse()?;
    let external_ip: Ipv4Addr = required_env("CLOUDCONTROL_EXTERNAL_IP")?.parse()?;

    let client = CloudControlClient::new(auth, org_id);
    let response = client
        .create_nat_rule(&network_domain_id, internal_ip, external_ip)
        .await?;

    println!(
        "responseCode: {}, message: {:?}, natRuleId: {:?}",
        response.response_code,
        response.message,
        response.info_value("natRuleId")
    );

    Ok(())
}
