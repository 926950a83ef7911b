use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode, header::CONTENT_TYPE};
use tokio::{sync::Mutex, time::sleep};

use crate::{
    Res, config,
    error::Error,
    management::TokenManager,
    spotify::{PlaylistEditor, TrackSource},
    types::{
        CreatePlaylistRequest, CreatePlaylistResponse, CreatedPlaylist, CurrentUserResponse,
        GetUserPlaylistsResponse, PlaylistId, PlaylistItemsRequest, PlaylistOwnerResponse,
        PlaylistSummary, PlaylistTracksResponse, TrackPage, TrackRecord,
    },
    utils, warning,
};

const MAX_ATTEMPTS: u32 = 3;
const MAX_RETRY_AFTER_SECS: u64 = 120;
const PAGE_SIZE: u32 = 100;
const TRACK_FIELDS: &str =
    "items(added_at,track(id,uri,name,popularity,artists(name))),next,offset,total";

/// Authenticated session against the Spotify Web API.
///
/// Built once per run with [`SpotifyClient::connect`] and then passed by
/// reference to every operation. The account id never changes after
/// construction; the access token is refreshed behind the mutex when needed.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    tokens: Mutex<TokenManager>,
    user_id: String,
    display_name: String,
}

impl SpotifyClient {
    /// Loads the cached token and resolves the account behind it.
    ///
    /// # Errors
    ///
    /// - [`Error::Auth`] when no token was cached yet (`spotlist auth` first)
    /// - [`Error::Upstream`] when Spotify rejects the token or is unreachable
    pub async fn connect() -> Res<Self> {
        let tokens = TokenManager::load().await?;
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;

        let mut client = Self {
            http,
            api_url: config::spotify_apiurl(),
            tokens: Mutex::new(tokens),
            user_id: String::new(),
            display_name: String::new(),
        };

        let url = format!("{}/me", client.api_url);
        let me: CurrentUserResponse = client.send(|http| http.get(&url)).await?.json().await?;
        client.display_name = me.display_name.unwrap_or_else(|| me.id.clone());
        client.user_id = me.id;

        Ok(client)
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Sends a request built by `request` with a fresh bearer token.
    ///
    /// Retries `429` (respecting `Retry-After`) and `502` responses up to
    /// [`MAX_ATTEMPTS`] times; any other non-success status becomes an error
    /// carrying the response body.
    async fn send<F>(&self, request: F) -> Res<Response>
    where
        F: Fn(&Client) -> RequestBuilder,
    {
        let mut attempt = 0;

        loop {
            attempt += 1;
            let token = self.tokens.lock().await.get_valid_token().await?;
            let response = request(&self.http).bearer_auth(token).send().await?;
            let status = response.status();

            if status.is_success() {
                return Ok(response);
            }

            if attempt < MAX_ATTEMPTS {
                if status == StatusCode::TOO_MANY_REQUESTS {
                    let retry_after = response
                        .headers()
                        .get("retry-after")
                        .and_then(|v| v.to_str().ok())
                        .and_then(|v| v.parse::<u64>().ok())
                        .unwrap_or(1);

                    if retry_after <= MAX_RETRY_AFTER_SECS {
                        sleep(Duration::from_secs(retry_after)).await;
                        continue;
                    }

                    warning!(
                        "Spotify asks to wait {} seconds before the next request. Try again later.",
                        retry_after
                    );
                } else if status == StatusCode::BAD_GATEWAY {
                    sleep(Duration::from_secs(10)).await;
                    continue;
                }
            }

            let body = response.text().await.unwrap_or_default();
            return Err(Error::Upstream(format!("{} {}", status, body.trim())));
        }
    }
}

impl TrackSource for SpotifyClient {
    async fn track_page(&self, playlist: &PlaylistId, offset: u32) -> Res<TrackPage> {
        let url = format!("{}/playlists/{}/tracks", self.api_url, playlist);
        let query = [
            ("limit", PAGE_SIZE.to_string()),
            ("offset", offset.to_string()),
            ("fields", TRACK_FIELDS.to_string()),
            ("additional_types", "track".to_string()),
        ];

        let page: PlaylistTracksResponse = self
            .send(|http| http.get(&url).query(&query))
            .await?
            .json()
            .await?;

        let next_offset = page
            .next
            .as_ref()
            .map(|_| page.offset + page.items.len() as u32);

        let tracks = page
            .items
            .into_iter()
            .filter_map(|item| {
                let track = item.track?;
                let id = track.id?;
                Some(TrackRecord {
                    id,
                    uri: track.uri,
                    name: track.name,
                    artist: track
                        .artists
                        .first()
                        .map(|a| a.name.clone())
                        .unwrap_or_default(),
                    popularity: track.popularity,
                    added_at: utils::parse_added_at(item.added_at.as_deref()),
                })
            })
            .collect();

        Ok(TrackPage {
            tracks,
            next_offset,
        })
    }
}

impl PlaylistEditor for SpotifyClient {
    fn account_id(&self) -> &str {
        &self.user_id
    }

    async fn user_playlists(&self, limit: u32) -> Res<Vec<PlaylistSummary>> {
        let url = format!("{}/me/playlists", self.api_url);
        let res: GetUserPlaylistsResponse = self
            .send(|http| http.get(&url).query(&[("limit", limit)]))
            .await?
            .json()
            .await?;

        Ok(res
            .items
            .into_iter()
            .map(|p| PlaylistSummary {
                id: PlaylistId::new(p.id),
                name: p.name,
            })
            .collect())
    }

    async fn playlist_owner(&self, playlist: &PlaylistId) -> Res<String> {
        let url = format!("{}/playlists/{}", self.api_url, playlist);
        let res: PlaylistOwnerResponse = self
            .send(|http| http.get(&url).query(&[("fields", "owner(id)")]))
            .await?
            .json()
            .await?;

        Ok(res.owner.id)
    }

    async fn create_playlist(
        &self,
        name: &str,
        public: bool,
        description: &str,
    ) -> Res<CreatedPlaylist> {
        let url = format!("{}/users/{}/playlists", self.api_url, self.user_id);
        let body = CreatePlaylistRequest {
            name: name.to_string(),
            description: description.to_string(),
            public,
        };

        let res: CreatePlaylistResponse = self
            .send(|http| http.post(&url).json(&body))
            .await?
            .json()
            .await?;

        Ok(CreatedPlaylist {
            id: PlaylistId::new(res.id),
            url: res.external_urls.spotify,
        })
    }

    async fn replace_items(&self, playlist: &PlaylistId, uris: &[String]) -> Res<()> {
        let url = format!("{}/playlists/{}/tracks", self.api_url, playlist);
        let body = PlaylistItemsRequest {
            uris: uris.to_vec(),
        };

        self.send(|http| http.put(&url).json(&body)).await?;
        Ok(())
    }

    async fn add_items(&self, playlist: &PlaylistId, uris: &[String]) -> Res<()> {
        let url = format!("{}/playlists/{}/tracks", self.api_url, playlist);
        let body = PlaylistItemsRequest {
            uris: uris.to_vec(),
        };

        self.send(|http| http.post(&url).json(&body)).await?;
        Ok(())
    }

    async fn upload_cover_image(&self, playlist: &PlaylistId, jpeg_base64: &str) -> Res<()> {
        let url = format!("{}/playlists/{}/images", self.api_url, playlist);

        self.send(|http| {
            http.put(&url)
                .header(CONTENT_TYPE, "image/jpeg")
                .body(jpeg_base64.to_string())
        })
        .await?;
        Ok(())
    }
}
