//! JSON-over-HTTP implementation of the server facade.

use std::future::Future;
use std::pin::Pin;

use area_game_api_types::{AreaStatus, Coordinate, NearbyPlayersRequest, PlayerSighting};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::FacadeError;
use crate::facade::{FacadeResult, ServerFacade};

#[derive(Clone)]
pub struct HttpServerFacade {
    client: Client,
    base_url: String,
}

impl HttpServerFacade {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();

        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/gameapi/{path}", self.base_url)
    }
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> FacadeResult<T> {
    let response = request
        .send()
        .await
        .map_err(|e| FacadeError::Network(e.to_string()))?;

    match response.status() {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            let body = response.text().await.unwrap_or_default();
            return Err(FacadeError::Auth(body));
        }
        status if !status.is_success() => {
            return Err(FacadeError::Network(format!("server responded with {status}")));
        }
        _ => {}
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FacadeError::InvalidResponse(e.to_string()))
}

impl ServerFacade for HttpServerFacade {
    fn fetch_game_area(
        &self,
    ) -> Pin<Box<dyn Future<Output = FacadeResult<Vec<Coordinate>>> + Send + '_>> {
        Box::pin(async move {
            tracing::debug!("fetching game area from {}", self.base_url);
            send_json(self.client.get(self.url("gamearea"))).await
        })
    }

    fn is_user_in_area(
        &self,
        longitude: f64,
        latitude: f64,
    ) -> Pin<Box<dyn Future<Output = FacadeResult<AreaStatus>> + Send + '_>> {
        Box::pin(async move {
            let url = self.url(&format!("isuserinarea/{longitude}/{latitude}"));
            send_json(self.client.get(url)).await
        })
    }

    fn find_nearby_players<'a>(
        &'a self,
        user_name: &'a str,
        password: &'a str,
        latitude: f64,
        longitude: f64,
        distance: &'a str,
    ) -> Pin<Box<dyn Future<Output = FacadeResult<Vec<PlayerSighting>>> + Send + 'a>> {
        Box::pin(async move {
            let body = NearbyPlayersRequest {
                user_name: user_name.to_owned(),
                password: password.to_owned(),
                lat: latitude,
                lon: longitude,
                distance: distance.to_owned(),
            };
            send_json(self.client.post(self.url("nearbyplayers")).json(&body)).await
        })
    }
}
