//! Single place where the gateway implementation is chosen

use cask_config::{GatewayConfig, GatewayKind};
use tracing::info;

use crate::{CatalogGateway, FixtureGateway, GatewayError, Result, StubGateway};

/// Default gateway for the process
pub fn gateway() -> Box<dyn CatalogGateway> {
    Box::new(StubGateway)
}

/// Gateway selected by configuration
pub fn from_config(config: &GatewayConfig) -> Result<Box<dyn CatalogGateway>> {
    let gateway: Box<dyn CatalogGateway> = match config.kind {
        GatewayKind::Stub => gateway(),
        GatewayKind::Fixture => {
            let path = config
                .fixture_path
                .as_deref()
                .ok_or(GatewayError::MissingFixturePath)?;
            Box::new(FixtureGateway::load(path)?)
        }
    };
    info!("using {} catalog gateway", gateway.name());
    Ok(gateway)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_stub() {
        assert_eq!(gateway().name(), "stub");
    }

    #[test]
    fn test_stub_from_config() {
        let gateway = from_config(&GatewayConfig::default()).unwrap();
        assert_eq!(gateway.name(), "stub");
    }

    #[test]
    fn test_fixture_without_path() {
        let config = GatewayConfig {
            kind: GatewayKind::Fixture,
            fixture_path: None,
        };
        assert!(matches!(
            from_config(&config),
            Err(GatewayError::MissingFixturePath)
        ));
    }

    #[test]
    fn test_fixture_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = GatewayConfig {
            kind: GatewayKind::Fixture,
            fixture_path: Some(dir.path().join("absent.json")),
        };
        assert!(matches!(from_config(&config), Err(GatewayError::Io(_))));
    }
}
