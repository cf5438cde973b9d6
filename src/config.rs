use serde::Deserialize;
use serde_yaml_with_quirks::Value;
use std::{fs, path::Path};
use thiserror::Error;

pub const STORE_KIND_GARDENER: &str = "gardener";

#[derive(Error, Debug)]
pub enum Error {
    #[error("providing a configuration for the Gardener store is required. Please configure your SwitchConfig file properly")]
    MissingStoreConfig,
    #[error("neither landscapeName nor store id is set, can't name the landscape")]
    MissingLandscape,
    #[error("failed to read switch config: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to unmarshal config for the Gardener kubeconfig store: {0}")]
    Decode(#[from] serde_yaml_with_quirks::Error),
}
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchConfig {
    #[serde(default)]
    pub kubeconfig_stores: Vec<KubeconfigStore>,
}

impl SwitchConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_yaml_with_quirks::from_str(&contents)?)
    }

    pub fn gardener_stores(&self) -> impl Iterator<Item = &KubeconfigStore> {
        self.kubeconfig_stores
            .iter()
            .filter(|store| store.kind == STORE_KIND_GARDENER)
    }
}

/// Single store entry, `config` is store-kind specific
#[derive(Clone, Debug, Deserialize)]
pub struct KubeconfigStore {
    pub kind: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub paths: Vec<String>,
    #[serde(default)]
    pub config: Option<Value>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StoreConfigGardener {
    /// Kubeconfig of the garden cluster
    #[serde(rename = "gardenerAPIKubeconfigPath")]
    pub gardener_api_kubeconfig_path: String,
    #[serde(rename = "landscapeName", default)]
    pub landscape_name: Option<String>,
}

impl StoreConfigGardener {
    /// Landscape identity used as identifier prefix
    pub fn landscape(&self, store: &KubeconfigStore) -> Result<String> {
        self.landscape_name
            .clone()
            .or_else(|| store.id.clone())
            .ok_or(Error::MissingLandscape)
    }
}

/// Decode Gardener specific part of store config
pub fn get_store_config(store: &KubeconfigStore) -> Result<StoreConfigGardener> {
    let config = store.config.as_ref().ok_or(Error::MissingStoreConfig)?;
    // Goes through value, because config is kept untyped until store kind is known
    let value = serde_yaml_with_quirks::to_value(config)?;
    Ok(serde_yaml_with_quirks::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SWITCH_CONFIG: &str = r#"
kind: SwitchConfig
kubeconfigStores:
- kind: filesystem
  paths:
  - ~/.kube
- kind: gardener
  id: dev
  config:
    gardenerAPIKubeconfigPath: /home/user/.kube/garden-dev.yaml
- kind: gardener
  config:
    gardenerAPIKubeconfigPath: /home/user/.kube/garden-live.yaml
    landscapeName: live
- kind: gardener
  id: broken
"#;

    fn stores() -> Vec<KubeconfigStore> {
        let config: SwitchConfig = serde_yaml_with_quirks::from_str(SWITCH_CONFIG).unwrap();
        config.gardener_stores().cloned().collect()
    }

    #[test]
    fn store_config() {
        let stores = stores();
        assert_eq!(stores.len(), 3);

        let dev = get_store_config(&stores[0]).unwrap();
        assert_eq!(
            dev.gardener_api_kubeconfig_path,
            "/home/user/.kube/garden-dev.yaml"
        );
        assert_eq!(dev.landscape(&stores[0]).unwrap(), "dev");

        let live = get_store_config(&stores[1]).unwrap();
        assert_eq!(live.landscape(&stores[1]).unwrap(), "live");
    }

    #[test]
    fn missing_store_config() {
        let stores = stores();
        assert!(matches!(
            get_store_config(&stores[2]),
            Err(Error::MissingStoreConfig)
        ));
    }

    #[test]
    fn undecodable_store_config() {
        let store: KubeconfigStore =
            serde_yaml_with_quirks::from_str("kind: gardener\nconfig:\n  landscapeName: dev\n")
                .unwrap();
        assert!(matches!(get_store_config(&store), Err(Error::Decode(_))));
    }

    #[test]
    fn missing_landscape() {
        let store: KubeconfigStore = serde_yaml_with_quirks::from_str(
            "kind: gardener\nconfig:\n  gardenerAPIKubeconfigPath: /tmp/garden\n",
        )
        .unwrap();
        let config = get_store_config(&store).unwrap();
        assert!(matches!(
            config.landscape(&store),
            Err(Error::MissingLandscape)
        ));
    }

    #[test]
    fn from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SWITCH_CONFIG.as_bytes()).unwrap();
        let config = SwitchConfig::from_path(file.path()).unwrap();
        assert_eq!(config.kubeconfig_stores.len(), 4);

        assert!(matches!(
            SwitchConfig::from_path(Path::new("/nonexistent/switch-config.yaml")),
            Err(Error::Read(_))
        ));
    }
}
