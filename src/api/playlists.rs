//! Playlist and track mutations

use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use reqwest::{Client, Response, Url};
use serde::{Deserialize, Serialize};

use crate::features::settings::NetworkSettings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RemoveTracksResponse {
    playlist: Playlist,
}

#[derive(Debug, Serialize)]
struct TrackIds<'a> {
    ids: &'a [u64],
}

/// Error body returned by the backend on failure
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Clone)]
pub struct PlaylistApi {
    client: Client,
    base_url: Url,
}

impl std::fmt::Debug for PlaylistApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaylistApi")
            .field("client", &"<HttpClient>")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl PlaylistApi {
    pub fn new(network: &NetworkSettings) -> Result<Self> {
        let mut base_url = Url::parse(&network.api_base_url)
            .with_context(|| format!("Invalid API base URL: {}", network.api_base_url))?;
        // Relative joins drop the last segment unless the path ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = Client::builder().timeout(Duration::from_secs(network.timeout_secs));
        if let Some(proxy_url) = network.proxy_url() {
            match reqwest::Proxy::all(&proxy_url) {
                Ok(proxy) => builder = builder.proxy(proxy),
                Err(e) => tracing::warn!("Failed to set proxy: {}", e),
            }
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("Invalid endpoint path: {}", path))
    }

    /// Remove `track_ids` from a playlist, returning the updated playlist
    pub async fn remove_tracks(&self, playlist_id: u64, track_ids: &[u64]) -> Result<Playlist> {
        if track_ids.is_empty() {
            bail!("No tracks to remove");
        }

        let url = self.endpoint(&format!("playlists/{}/tracks/remove", playlist_id))?;
        tracing::info!(
            "Removing {} tracks from playlist {}",
            track_ids.len(),
            playlist_id
        );

        let response = self
            .client
            .post(url)
            .json(&TrackIds { ids: track_ids })
            .send()
            .await?;
        let body: RemoveTracksResponse = check_status(response)
            .await?
            .json()
            .await
            .context("Unexpected remove tracks response")?;

        Ok(body.playlist)
    }

    /// Delete tracks from the catalogue
    pub async fn delete_tracks(&self, track_ids: &[u64]) -> Result<()> {
        if track_ids.is_empty() {
            bail!("No tracks to delete");
        }

        let ids = track_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let url = self.endpoint(&format!("tracks/{}", ids))?;
        tracing::info!("Deleting tracks {}", ids);

        let response = self.client.delete(url).send().await?;
        check_status(response).await?;
        Ok(())
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    Err(match message {
        Some(message) => anyhow!("Request failed ({}): {}", status, message),
        None => anyhow!("Request failed ({})", status),
    })
}

/// Notice shown after tracks were removed from a playlist
pub fn removed_tracks_message(count: usize) -> String {
    if count == 1 {
        "Removed 1 track from playlist".to_string()
    } else {
        format!("Removed {} tracks from playlist", count)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn api_for(server: &MockServer) -> PlaylistApi {
        let network = NetworkSettings {
            // No trailing slash on purpose
            api_base_url: format!("{}/api/v1", server.uri()),
            ..Default::default()
        };
        PlaylistApi::new(&network).unwrap()
    }

    #[tokio::test]
    async fn remove_tracks_posts_ids() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/playlists/5/tracks/remove"))
            .and(body_json(json!({ "ids": [1, 2, 3] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "playlist": { "id": 5, "name": "Late night" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let playlist = api_for(&server).remove_tracks(5, &[1, 2, 3]).await.unwrap();
        assert_eq!(playlist.id, 5);
        assert_eq!(playlist.name, "Late night");
        assert_eq!(playlist.description, None);
    }

    #[tokio::test]
    async fn delete_tracks_joins_ids() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/tracks/4,8"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })))
            .expect(1)
            .mount(&server)
            .await;

        api_for(&server).delete_tracks(&[4, 8]).await.unwrap();
    }

    #[tokio::test]
    async fn backend_message_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/playlists/5/tracks/remove"))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_json(json!({ "message": "You can't modify this playlist" })),
            )
            .mount(&server)
            .await;

        let err = api_for(&server).remove_tracks(5, &[1]).await.unwrap_err();
        let err = err.to_string();
        assert!(err.contains("403"), "{}", err);
        assert!(err.contains("You can't modify this playlist"), "{}", err);
    }

    #[tokio::test]
    async fn error_without_body_still_fails() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = api_for(&server).delete_tracks(&[1]).await.unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn empty_selection_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let api = api_for(&server);
        assert!(api.remove_tracks(5, &[]).await.is_err());
        assert!(api.delete_tracks(&[]).await.is_err());
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let network = NetworkSettings {
            api_base_url: "not a url".into(),
            ..Default::default()
        };
        assert!(PlaylistApi::new(&network).is_err());
    }

    #[test]
    fn removed_message_pluralizes() {
        assert_eq!(removed_tracks_message(1), "Removed 1 track from playlist");
        assert_eq!(removed_tracks_message(3), "Removed 3 tracks from playlist");
    }
}
