//! Wraps a toy connector with Kerberos property injection.
//!
//! Run with:
//!
//! ```sh
//! cargo run --example wrap_connector
//! ```

use anyhow::Result;
use async_trait::async_trait;

use krbgate_common::{ConnectRequest, ConnectorVersion, CredentialContext, PropertyInfo};
use krbgate_connector::{Connector, ConnectorError, KerberosConnector};

/// Prints the properties it is handed instead of opening anything.
struct EchoConnector;

#[async_trait]
impl Connector for EchoConnector {
    type Handle = String;

    fn accepts_target(&self, target: &str) -> bool {
        target.starts_with("db://")
    }

    async fn connect(&self, request: &ConnectRequest) -> krbgate_connector::Result<String> {
        let mut entries: Vec<_> = request.properties.iter().collect();
        entries.sort_unstable();
        for (key, value) in entries {
            println!("  {key} = {value}");
        }
        Ok(format!("session for {}", request.target))
    }

    fn property_info(
        &self,
        _request: &ConnectRequest,
    ) -> krbgate_connector::Result<Vec<PropertyInfo>> {
        Err(ConnectorError::MetadataNotSupported)
    }

    fn version(&self) -> ConnectorVersion {
        ConnectorVersion::new(1, 0)
    }

    fn is_compliant(&self) -> bool {
        true
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let context = CredentialContext::new("/tmp/krbcc_1234")?;
    let connector = KerberosConnector::new(EchoConnector, context);

    let request = ConnectRequest::new("db://analytics").with_property("user", "alice");

    println!("connecting to {} (connector v{})", request.target, connector.version());
    let session = connector.connect(&request).await?;
    println!("{session}");

    Ok(())
}
