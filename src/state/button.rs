//! Start/pause button appearance

use serde::{Deserialize, Serialize};

/// Colour roles used by the start/pause button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Start,
    Pause,
    Light,
    Dark,
}

/// Which face the start/pause button shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ButtonState {
    Running,
    #[default]
    Paused,
}

/// Label and colours to render on the button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ButtonAppearance {
    pub label: &'static str,
    pub background: Color,
    pub text: Color,
}

impl ButtonState {
    pub fn from_running(running: bool) -> Self {
        if running {
            ButtonState::Running
        } else {
            ButtonState::Paused
        }
    }

    pub fn appearance(self) -> ButtonAppearance {
        match self {
            ButtonState::Running => ButtonAppearance {
                label: "Pause",
                background: Color::Pause,
                text: Color::Dark,
            },
            ButtonState::Paused => ButtonAppearance {
                label: "Start",
                background: Color::Start,
                text: Color::Light,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paused_is_initial_and_offers_start() {
        let state = ButtonState::default();
        assert_eq!(state, ButtonState::Paused);
        let look = state.appearance();
        assert_eq!(look.label, "Start");
        assert_eq!(look.background, Color::Start);
        assert_eq!(look.text, Color::Light);
    }

    #[test]
    fn running_offers_pause() {
        let look = ButtonState::from_running(true).appearance();
        assert_eq!(look.label, "Pause");
        assert_eq!(look.background, Color::Pause);
        assert_eq!(look.text, Color::Dark);
    }
}
