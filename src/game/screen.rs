//! The four-state screen controller.

/// Exactly one screen is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Start,
    Playing,
    Over,
    Leaderboard,
}

/// Things that can move the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    /// Jump pressed on the start screen.
    Jump,
    /// Collision or out-of-bounds during play.
    RunEnded,
    /// Backend acknowledged a score submission.
    ScoreSubmitted,
    /// "Play again" on game-over or "continue" on the leaderboard.
    Continue,
}

/// The overlay panel shown for a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Start,
    GameOver,
    Leaderboard,
}

impl Screen {
    /// The screen that follows `event`, or `None` if the event is not valid
    /// here. Every pair is listed so a new screen can't slip through.
    pub fn next(self, event: ScreenEvent) -> Option<Screen> {
        match (self, event) {
            (Screen::Start, ScreenEvent::Jump) => Some(Screen::Playing),
            (Screen::Start, ScreenEvent::RunEnded)
            | (Screen::Start, ScreenEvent::ScoreSubmitted)
            | (Screen::Start, ScreenEvent::Continue) => None,

            (Screen::Playing, ScreenEvent::RunEnded) => Some(Screen::Over),
            (Screen::Playing, ScreenEvent::Jump)
            | (Screen::Playing, ScreenEvent::ScoreSubmitted)
            | (Screen::Playing, ScreenEvent::Continue) => None,

            (Screen::Over, ScreenEvent::ScoreSubmitted) => Some(Screen::Leaderboard),
            (Screen::Over, ScreenEvent::Continue) => Some(Screen::Start),
            (Screen::Over, ScreenEvent::Jump) | (Screen::Over, ScreenEvent::RunEnded) => None,

            (Screen::Leaderboard, ScreenEvent::Continue) => Some(Screen::Start),
            (Screen::Leaderboard, ScreenEvent::Jump)
            | (Screen::Leaderboard, ScreenEvent::RunEnded)
            | (Screen::Leaderboard, ScreenEvent::ScoreSubmitted) => None,
        }
    }

    /// Which panel is visible. Playing shows the bare field.
    pub fn panel(self) -> Option<Panel> {
        match self {
            Screen::Start => Some(Panel::Start),
            Screen::Playing => None,
            Screen::Over => Some(Panel::GameOver),
            Screen::Leaderboard => Some(Panel::Leaderboard),
        }
    }

    /// Whether the play field (entities and score) is drawn.
    pub fn shows_world(self) -> bool {
        matches!(self, Screen::Playing | Screen::Over)
    }

    pub fn name(self) -> &'static str {
        match self {
            Screen::Start => "start",
            Screen::Playing => "playing",
            Screen::Over => "over",
            Screen::Leaderboard => "leaderboard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_SCREENS: [Screen; 4] = [
        Screen::Start,
        Screen::Playing,
        Screen::Over,
        Screen::Leaderboard,
    ];
    const ALL_EVENTS: [ScreenEvent; 4] = [
        ScreenEvent::Jump,
        ScreenEvent::RunEnded,
        ScreenEvent::ScoreSubmitted,
        ScreenEvent::Continue,
    ];

    #[test]
    fn test_valid_transitions() {
        assert_eq!(Screen::Start.next(ScreenEvent::Jump), Some(Screen::Playing));
        assert_eq!(
            Screen::Playing.next(ScreenEvent::RunEnded),
            Some(Screen::Over)
        );
        assert_eq!(
            Screen::Over.next(ScreenEvent::ScoreSubmitted),
            Some(Screen::Leaderboard)
        );
        assert_eq!(Screen::Over.next(ScreenEvent::Continue), Some(Screen::Start));
        assert_eq!(
            Screen::Leaderboard.next(ScreenEvent::Continue),
            Some(Screen::Start)
        );
    }

    #[test]
    fn test_exactly_five_transitions_exist() {
        let count = ALL_SCREENS
            .iter()
            .flat_map(|s| ALL_EVENTS.iter().map(move |e| s.next(*e)))
            .filter(Option::is_some)
            .count();
        assert_eq!(count, 5);
    }

    #[test]
    fn test_playing_cannot_skip_to_leaderboard() {
        assert_eq!(Screen::Playing.next(ScreenEvent::ScoreSubmitted), None);
        assert_eq!(Screen::Start.next(ScreenEvent::ScoreSubmitted), None);
    }

    #[test]
    fn test_one_panel_per_screen() {
        assert_eq!(Screen::Start.panel(), Some(Panel::Start));
        assert_eq!(Screen::Playing.panel(), None);
        assert_eq!(Screen::Over.panel(), Some(Panel::GameOver));
        assert_eq!(Screen::Leaderboard.panel(), Some(Panel::Leaderboard));
    }

    #[test]
    fn test_world_visible_only_in_play_and_over() {
        assert!(!Screen::Start.shows_world());
        assert!(Screen::Playing.shows_world());
        assert!(Screen::Over.shows_world());
        assert!(!Screen::Leaderboard.shows_world());
    }
}
