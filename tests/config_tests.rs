//! Configuration loading from YAML files

use fleet::config::FleetConfig;
use fleet::core::filter::ParamMap;
use fleet::core::ship::ShipType;
use fleet::server::ServerBuilder;
use fleet::storage::InMemoryShipStore;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const FULL_CONFIG: &str = r#"
server:
  host: 0.0.0.0
  port: 9100
paging:
  default_page_size: 2
seed:
  - name: Aurora
    planet: Earth
    shipType: TRANSPORT
    prodDate: 29348928000000
    speed: 0.5
    crewSize: 100
  - name: Bastion
    planet: Mars
    shipType: MILITARY
    prodDate: 32503680000000
    isUsed: true
    speed: 0.9
    crewSize: 500
  - name: Comet
    planet: Venus
    shipType: MERCHANT
    prodDate: 27771062400000
    speed: 0.2
    crewSize: 20
"#;

#[test]
fn test_load_full_config_from_file() {
    let file = write_config(FULL_CONFIG);
    let config = FleetConfig::from_yaml_file(file.path()).unwrap();

    assert_eq!(config.bind_address(), "0.0.0.0:9100");
    assert_eq!(config.paging.default_page_size, 2);
    assert_eq!(config.seed.len(), 3);
    assert_eq!(config.seed[1].ship_type, Some(ShipType::Military));
    assert_eq!(config.seed[0].is_used, None);
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = FleetConfig::from_yaml_file(dir.path().join("absent.yaml")).unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn test_malformed_file_names_the_file() {
    let file = write_config("server: [unclosed");
    let err = FleetConfig::from_yaml_file(file.path()).unwrap_err();

    assert_eq!(err.error_code(), "CONFIG_ERROR");
    let path = file.path().display().to_string();
    assert!(err.to_string().contains(&path));
}

#[test]
fn test_zero_page_size_is_rejected() {
    let file = write_config("paging:\n  default_page_size: 0\n");
    assert!(FleetConfig::from_yaml_file(file.path()).is_err());
}

#[tokio::test]
async fn test_seeded_host_uses_configured_page_size() {
    let file = write_config(FULL_CONFIG);
    let config = FleetConfig::from_yaml_file(file.path()).unwrap();

    let host = ServerBuilder::new()
        .with_config(config)
        .with_shared_store(Arc::new(InMemoryShipStore::new()))
        .build_host()
        .unwrap();
    let seeded = host.seed().await.unwrap();
    assert_eq!(seeded.len(), 3);

    let page = host.service.list(&ParamMap::new()).await.unwrap();
    let names: Vec<&str> = page.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Aurora", "Bastion"]);
    assert_eq!(host.service.count(&ParamMap::new()).await.unwrap(), 3);
}

#[tokio::test]
async fn test_invalid_seed_aborts() {
    let yaml = r#"
seed:
  - name: Broken
    planet: Nowhere
    shipType: TRANSPORT
    prodDate: 32503680000000
    speed: 1.5
    crewSize: 10
"#;
    let config = FleetConfig::from_yaml_str(yaml).unwrap();
    let host = ServerBuilder::new().with_config(config).build_host().unwrap();

    assert!(host.seed().await.is_err());
}
