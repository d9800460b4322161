//! Share dialog component

use crate::dialog::{DialogResponse, ShareProps};
use crate::features::ShareNetwork;
use crate::ui::widgets::Prompt;

/// Build the share prompt
pub fn view(props: &ShareProps) -> Prompt {
    let title = match &props.name {
        Some(name) => format!("Share \"{}\"", name),
        None => "Share".to_string(),
    };

    let mut prompt = Prompt::new(title).line(&props.link);
    for (index, network) in ShareNetwork::ALL.iter().enumerate() {
        prompt = prompt.choice(format!("{}: {}", index + 1, network));
    }
    prompt.choice("cancel")
}

/// Network name or its number in the prompt
pub fn answer(_props: &ShareProps, input: &str) -> Option<DialogResponse> {
    if input.eq_ignore_ascii_case("cancel") {
        return Some(DialogResponse::Dismissed);
    }

    if let Ok(number) = input.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| ShareNetwork::ALL.get(index))
            .map(|network| DialogResponse::Share(*network));
    }

    input.parse::<ShareNetwork>().ok().map(DialogResponse::Share)
}
