//! Track context menu, delete and remove-from-playlist handlers

use crate::api::{PlaylistApi, removed_tracks_message};
use crate::app::App;
use crate::features::track_menu::{self, track_menu_items};
use crate::features::{MenuOptions, Track, TrackPermissions};
use crate::ui::widgets::{Prompt, Toast};

impl App {
    /// Confirm, then delete the tracks
    ///
    /// Refused while another deletion is running.
    pub(super) fn spawn_delete_tracks(&mut self, track_ids: Vec<u64>) {
        let Some(guard) = self.deleting.start() else {
            Toast::warning("Tracks are already being deleted").show();
            return;
        };

        let tracks: Vec<Track> = track_ids.iter().copied().map(Track::from_id).collect();
        let confirmed = track_menu::confirm_delete(&self.dialogs, &tracks);
        let api = self.api.clone();

        self.flows.spawn(async move {
            let _guard = guard;
            if !confirmed.await {
                tracing::debug!("Track deletion cancelled");
                return;
            }
            delete_tracks(&api, &track_ids).await;
        });
    }

    pub(super) fn spawn_remove_tracks(&mut self, playlist_id: u64, track_ids: Vec<u64>) {
        let api = self.api.clone();
        self.flows.spawn(async move {
            remove_tracks(&api, playlist_id, &track_ids).await;
        });
    }

    pub(super) fn show_track_menu(
        &self,
        tracks: &[Track],
        permissions: TrackPermissions,
        options: MenuOptions,
    ) {
        println!("{}", self.track_menu_prompt(tracks, permissions, options));
    }

    fn track_menu_prompt(
        &self,
        tracks: &[Track],
        permissions: TrackPermissions,
        options: MenuOptions,
    ) -> Prompt {
        let options = MenuOptions {
            is_deleting: self.deleting.is_running(),
            ..options
        };
        let title = match tracks {
            [track] => format!("Track {}", track.id),
            _ => format!("{} tracks", tracks.len()),
        };

        track_menu_items(tracks, permissions, options)
            .into_iter()
            .fold(Prompt::new(title), |prompt, item| {
                prompt.line(item.to_string())
            })
    }
}

async fn delete_tracks(api: &PlaylistApi, track_ids: &[u64]) {
    match api.delete_tracks(track_ids).await {
        Ok(()) => {
            let noun = if track_ids.len() == 1 { "track" } else { "tracks" };
            Toast::success(format!("Deleted {} {}", track_ids.len(), noun)).show();
        }
        Err(e) => {
            tracing::error!("Failed to delete tracks {:?}: {:#}", track_ids, e);
            Toast::error(format!("{:#}", e)).show();
        }
    }
}

async fn remove_tracks(api: &PlaylistApi, playlist_id: u64, track_ids: &[u64]) {
    match api.remove_tracks(playlist_id, track_ids).await {
        Ok(playlist) => {
            tracing::info!(
                "Playlist {} ({}) updated after removing tracks",
                playlist.id,
                playlist.name
            );
            Toast::success(removed_tracks_message(track_ids.len())).show();
        }
        Err(e) => {
            tracing::error!(
                "Failed to remove tracks from playlist {}: {:#}",
                playlist_id,
                e
            );
            Toast::error(format!("{:#}", e)).show();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::app::App;
    use crate::dialog::{Dialog, DialogResponse};
    use crate::features::track_menu::{Album, Artist};
    use crate::features::{MenuOptions, Settings, Track, TrackPermissions};

    fn app_for(server: &MockServer) -> App {
        let mut settings = Settings::default();
        settings.network.api_base_url = format!("{}/api/v1/", server.uri());
        App::with_settings_path(settings, None).unwrap()
    }

    /// Wait for the next spawned flow to finish
    async fn join_flow(app: &mut App) {
        tokio::time::timeout(Duration::from_secs(5), app.flows.join_next())
            .await
            .expect("flow did not finish")
            .expect("no flow was spawned")
            .unwrap();
    }

    async fn request_count(server: &MockServer) -> usize {
        server.received_requests().await.unwrap().len()
    }

    #[tokio::test]
    async fn confirmed_delete_calls_api() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/tracks/1,2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })))
            .mount(&server)
            .await;

        let mut app = app_for(&server);
        app.spawn_delete_tracks(vec![1, 2]);

        let active = app.dialogs.active().expect("confirmation is open");
        assert!(matches!(active.dialog, Dialog::Confirmation(ref p) if p.is_danger));

        app.dialogs.close(DialogResponse::Confirmed(true));
        join_flow(&mut app).await;

        assert_eq!(request_count(&server).await, 1);
        assert!(!app.deleting.is_running());
    }

    #[tokio::test]
    async fn declined_delete_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let mut app = app_for(&server);
        app.spawn_delete_tracks(vec![3]);
        assert!(app.deleting.is_running());

        app.dialogs.close(DialogResponse::Confirmed(false));
        join_flow(&mut app).await;

        assert_eq!(request_count(&server).await, 0);
        assert!(!app.deleting.is_running());
    }

    #[tokio::test]
    async fn second_delete_refused_while_first_runs() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "status": "success" }))
                    .set_delay(Duration::from_millis(100)),
            )
            .mount(&server)
            .await;

        let mut app = app_for(&server);
        app.spawn_delete_tracks(vec![1]);
        app.dialogs.close(DialogResponse::Confirmed(true));

        app.spawn_delete_tracks(vec![2]);
        assert!(!app.dialogs.is_active(), "no second confirmation");
        assert_eq!(app.flows.len(), 1);

        let prompt = app.track_menu_prompt(
            &[Track::from_id(1)],
            TrackPermissions {
                can_edit: false,
                can_delete: true,
            },
            MenuOptions::default(),
        );
        assert_eq!(prompt.lines.last().map(String::as_str), Some("Delete (in progress)"));

        join_flow(&mut app).await;
        assert_eq!(request_count(&server).await, 1);
        assert!(!app.deleting.is_running());
    }

    #[tokio::test]
    async fn remove_goes_straight_to_api() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/playlists/9/tracks/remove"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "playlist": { "id": 9, "name": "Focus" }
            })))
            .mount(&server)
            .await;

        let mut app = app_for(&server);
        app.spawn_remove_tracks(9, vec![4]);
        assert!(!app.dialogs.is_active());

        join_flow(&mut app).await;
        assert_eq!(request_count(&server).await, 1);
    }

    #[tokio::test]
    async fn shutdown_waits_for_running_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/playlists/5/tracks/remove"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "playlist": { "id": 5, "name": "Late night" } }))
                    .set_delay(Duration::from_millis(300)),
            )
            .mount(&server)
            .await;

        let mut app = app_for(&server);
        app.spawn_remove_tracks(5, vec![1]);
        app.finish_flows().await;

        assert!(app.flows.is_empty());
        assert_eq!(request_count(&server).await, 1);
    }

    #[tokio::test]
    async fn menu_shows_navigation_for_known_artist_and_album() {
        let server = MockServer::start().await;
        let app = app_for(&server);

        let track = Track {
            artists: vec![Artist {
                id: 3,
                name: String::new(),
            }],
            album: Some(Album {
                id: 11,
                name: String::new(),
            }),
            ..Track::from_id(7)
        };
        let prompt = app.track_menu_prompt(
            &[track],
            TrackPermissions::default(),
            MenuOptions {
                is_mobile: true,
                ..Default::default()
            },
        );

        assert_eq!(prompt.title, "Track 7");
        assert!(prompt.lines.iter().any(|line| line == "Go to artist"));
        assert!(prompt.lines.iter().any(|line| line == "Go to album"));
    }
}
