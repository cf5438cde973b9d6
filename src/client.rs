use crate::{
    config::StoreConfigGardener,
    kubemodel::{ObjectList, Project, Shoot, GARDENER_API_VERSION},
};
use http::Request;
use k8s_openapi::api::core::v1::Secret;
use kube::{
    api::{Api, ListParams},
    config::{KubeConfigOptions, Kubeconfig},
    Client, Config,
};
use serde::de::DeserializeOwned;
use std::convert::TryFrom;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unable to create rest config from {0}: {1}")]
    RestConfig(String, #[source] kube::Error),
    #[error("unable to create garden client: {0}")]
    Client(#[source] kube::Error),
    #[error("kube error: {0}")]
    Kube(#[from] kube::Error),
}
pub type Result<T> = std::result::Result<T, Error>;

/// Objects of one garden cluster, fetched at roughly the same time
#[derive(Debug, Default)]
pub struct Snapshot {
    pub secrets: Vec<Secret>,
    pub projects: Vec<Project>,
    pub shoots: Vec<Shoot>,
}

async fn rest_config(path: &str) -> std::result::Result<Config, kube::Error> {
    let kubeconfig = Kubeconfig::read_from(path)?;
    Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default()).await
}

/// Connect to garden cluster using kubeconfig referenced by store config
pub async fn garden_client(config: &StoreConfigGardener) -> Result<Client> {
    let path = &config.gardener_api_kubeconfig_path;
    let rest_config = rest_config(path)
        .await
        .map_err(|e| Error::RestConfig(path.clone(), e))?;
    Client::try_from(rest_config).map_err(Error::Client)
}

async fn list_gardener<T: DeserializeOwned>(client: &Client, plural: &str) -> Result<Vec<T>> {
    let uri = format!("/apis/{}/{}", GARDENER_API_VERSION, plural);
    log::trace!("Listing {}", uri);
    let list = client
        .request::<ObjectList<T>>(
            Request::builder()
                .uri(&uri)
                .body(vec![])
                .map_err(kube::Error::HttpError)?,
        )
        .await?;
    Ok(list.items)
}

pub async fn list_secrets(client: &Client) -> Result<Vec<Secret>> {
    log::trace!("Listing secrets");
    let secrets: Api<Secret> = Api::all(client.clone());
    Ok(secrets.list(&ListParams::default()).await?.items)
}

pub async fn list_projects(client: &Client) -> Result<Vec<Project>> {
    list_gardener(client, "projects").await
}

pub async fn list_shoots(client: &Client) -> Result<Vec<Shoot>> {
    list_gardener(client, "shoots").await
}

pub async fn fetch_snapshot(client: &Client) -> Result<Snapshot> {
    let (secrets, projects, shoots) = futures::try_join!(
        list_secrets(client),
        list_projects(client),
        list_shoots(client),
    )?;
    log::trace!(
        "Fetched {} secrets, {} projects, {} shoots",
        secrets.len(),
        projects.len(),
        shoots.len()
    );
    Ok(Snapshot {
        secrets,
        projects,
        shoots,
    })
}
