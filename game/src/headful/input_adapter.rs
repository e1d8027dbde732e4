use engine::input::{InputEvent, Key};

use crate::state::GameAction;
use crate::view::Screen;

/// Keyboard shortcuts for the current screen. Letters guess during a round; outside one, `p`
/// toggles the scenery.
pub fn map_key(key: Key, screen: &Screen) -> Option<GameAction> {
    match key {
        Key::Letter(letter) if screen.is_playing() => Some(GameAction::Guess(letter)),
        Key::Letter('p') => Some(GameAction::ToggleParallax),
        Key::Escape => Some(GameAction::Escape),
        Key::F11 => Some(GameAction::ToggleFullscreen),
        Key::Letter(_) | Key::Enter | Key::Other => None,
    }
}

/// Key events of one frame, mapped against the screen as it was at frame start.
pub fn key_actions<'a>(
    events: &'a [InputEvent],
    screen: &'a Screen,
) -> impl Iterator<Item = GameAction> + 'a {
    events.iter().filter_map(move |event| match event {
        InputEvent::KeyDown(key) => map_key(*key, screen),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use engine::ui::Point;

    use super::*;
    use crate::round::LossReason;

    #[test]
    fn letters_guess_only_while_playing() {
        assert_eq!(
            map_key(Key::Letter('e'), &Screen::Playing),
            Some(GameAction::Guess('e'))
        );
        assert_eq!(map_key(Key::Letter('e'), &Screen::MainMenu), None);
        assert_eq!(
            map_key(Key::Letter('e'), &Screen::Paused(Box::new(Screen::Playing))),
            None
        );
    }

    #[test]
    fn p_toggles_parallax_outside_a_round() {
        assert_eq!(
            map_key(Key::Letter('p'), &Screen::Lost(LossReason::TimeUp)),
            Some(GameAction::ToggleParallax)
        );
        assert_eq!(
            map_key(Key::Letter('p'), &Screen::Playing),
            Some(GameAction::Guess('p'))
        );
    }

    #[test]
    fn escape_and_f11_map_everywhere() {
        for screen in [Screen::MainMenu, Screen::Playing, Screen::Won] {
            assert_eq!(map_key(Key::Escape, &screen), Some(GameAction::Escape));
            assert_eq!(
                map_key(Key::F11, &screen),
                Some(GameAction::ToggleFullscreen)
            );
            assert_eq!(map_key(Key::Enter, &screen), None);
        }
    }

    #[test]
    fn pointer_events_are_skipped() {
        let events = [
            InputEvent::PointerMoved(Point::new(1.0, 1.0)),
            InputEvent::KeyDown(Key::Letter('a')),
            InputEvent::PointerDown(Point::new(1.0, 1.0)),
            InputEvent::KeyDown(Key::Other),
        ];
        let actions: Vec<_> = key_actions(&events, &Screen::Playing).collect();
        assert_eq!(actions, vec![GameAction::Guess('a')]);
    }
}
