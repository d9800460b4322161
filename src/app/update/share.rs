//! Share dialog handler

use crate::app::App;
use crate::dialog::{Dialog, DialogResponse, PendingDialog, ShareProps};
use crate::features::share::share_link;
use crate::ui::widgets::Toast;

impl App {
    pub(super) fn spawn_share(&mut self, link: String, name: Option<String>) {
        let props = ShareProps {
            link,
            name,
            image: None,
        };
        let pending = self.dialogs.open(Dialog::Share(props.clone()));
        self.flows.spawn(async move {
            if let Some(url) = wait_for_share_url(pending, &props).await {
                Toast::info(url).show();
            }
        });
    }
}

/// URL for the network picked in the share dialog, if one was picked
async fn wait_for_share_url(pending: PendingDialog, props: &ShareProps) -> Option<String> {
    match pending.await {
        Ok(DialogResponse::Share(network)) => {
            tracing::debug!("Sharing {} on {}", props.link, network);
            Some(share_link(
                network,
                &props.link,
                props.name.as_deref(),
                props.image.as_deref(),
            ))
        }
        Ok(other) => {
            tracing::debug!("Share dialog closed with {:?}", other);
            None
        }
        Err(e) => {
            tracing::debug!("Share dialog ended: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::DialogCoordinator;
    use crate::features::ShareNetwork;

    fn props() -> ShareProps {
        ShareProps {
            link: "https://x.y/t/1".into(),
            name: Some("Blue".into()),
            image: None,
        }
    }

    #[tokio::test]
    async fn picked_network_builds_url() {
        let dialogs = DialogCoordinator::new();
        let pending = dialogs.open(Dialog::Share(props()));
        dialogs.close(DialogResponse::Share(ShareNetwork::Twitter));

        assert_eq!(
            wait_for_share_url(pending, &props()).await.as_deref(),
            Some("https://twitter.com/intent/tweet?text=Blue&url=https%3A%2F%2Fx.y%2Ft%2F1")
        );
    }

    #[tokio::test]
    async fn dismissed_share_builds_nothing() {
        let dialogs = DialogCoordinator::new();
        let pending = dialogs.open(Dialog::Share(props()));
        dialogs.close(DialogResponse::Dismissed);

        assert_eq!(wait_for_share_url(pending, &props()).await, None);
    }
}
