use std::future::Future;
use std::time::Duration;

use tokio::time::timeout;
use tonic::transport::{Channel, Endpoint};
use tonic::Request;

use gobgpapi::gobgp_api_client::GobgpApiClient;
use gobgpapi::GetNeighborRequest;

pub mod gobgpapi {
    tonic::include_proto!("gobgpapi");
}

use crate::config::Config;
use crate::error::ClientError;
use crate::neighbor::{self, PeerRecord};

pub type Client = GobgpApiClient<Channel>;

// Default lists every neighbor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighborQuery {
    pub address: Option<String>,
}

impl NeighborQuery {
    fn to_request(&self) -> GetNeighborRequest {
        GetNeighborRequest {
            enable_advertised: false,
            address: self.address.clone().unwrap_or_default(),
        }
    }
}

impl From<&Config> for NeighborQuery {
    fn from(config: &Config) -> Self {
        NeighborQuery {
            address: config.address.clone(),
        }
    }
}

// The only timer on either step; the channel itself gets no connect_timeout.
async fn bounded<T, F>(
    limit: Duration,
    waiting_for: &'static str,
    fut: F,
) -> Result<T, ClientError>
where
    F: Future<Output = Result<T, ClientError>>,
{
    timeout(limit, fut).await.map_err(|_| ClientError::Timeout {
        after: limit,
        waiting_for,
    })?
}

pub async fn connect(config: &Config) -> Result<Client, ClientError> {
    let endpoint = config.endpoint();
    log::debug!("connecting to {}", endpoint);

    let target = Endpoint::from_shared(endpoint.clone()).map_err(|source| {
        ClientError::Connect {
            endpoint: endpoint.clone(),
            source,
        }
    })?;

    let channel = bounded(config.timeout, "connection", async {
        target
            .connect()
            .await
            .map_err(|source| ClientError::Connect { endpoint, source })
    })
    .await?;

    log::info!("connected to {}", config.endpoint());
    Ok(GobgpApiClient::new(channel))
}

pub async fn get_neighbors(
    client: &mut Client,
    query: &NeighborQuery,
    limit: Duration,
) -> Result<Vec<PeerRecord>, ClientError> {
    let request = Request::new(query.to_request());
    log::debug!("sending {:?}", request.get_ref());

    let response = bounded(limit, "GetNeighbor response", async {
        Ok(client.get_neighbor(request).await?)
    })
    .await?;

    let response = response.into_inner();
    log::info!("daemon returned {} neighbor(s)", response.peers.len());
    neighbor::from_response(response)
}

// The channel is dropped with `client` on every path.
pub async fn fetch_neighbors(config: &Config) -> Result<Vec<PeerRecord>, ClientError> {
    let mut client = connect(config).await?;
    get_neighbors(&mut client, &NeighborQuery::from(config), config.timeout).await
}
