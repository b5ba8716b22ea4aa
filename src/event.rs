//! Terminal input handling: key events become [`Command`]s.

use crate::app::{App, PromptKind};
use crate::command::Command;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a terminal event into a command, or `None` when the event is
/// not bound. Prompt mode captures the keyboard until submitted or
/// cancelled.
pub fn map_event(app: &App, event: Event) -> Option<Command> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            if let Some(prompt) = &app.prompt {
                map_prompt_key(prompt.kind, key)
            } else {
                map_browse_key(key)
            }
        }
        _ => None,
    }
}

fn map_prompt_key(kind: PromptKind, key: KeyEvent) -> Option<Command> {
    // The delete confirmation is y/n rather than a text field.
    if kind == PromptKind::ConfirmDelete {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                Some(Command::PromptSubmit)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                Some(Command::PromptCancel)
            }
            _ => None,
        };
    }

    match key.code {
        KeyCode::Enter => Some(Command::PromptSubmit),
        KeyCode::Esc => Some(Command::PromptCancel),
        KeyCode::Backspace => Some(Command::PromptBackspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::PromptInput(ch))
        }
        _ => None,
    }
}

fn map_browse_key(key: KeyEvent) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    let command = match key.code {
        KeyCode::Char('q') => Command::Quit,

        // Tabs
        KeyCode::Char('t') => Command::NewTab,
        KeyCode::Char('w') => Command::CloseTab,
        KeyCode::Tab => Command::NextTab,
        KeyCode::BackTab => Command::PrevTab,
        KeyCode::Char(ch @ '1'..='9') if ctrl => {
            Command::ActivateTab(ch as usize - '1' as usize)
        }

        // History navigation
        KeyCode::Left if alt => Command::Back,
        KeyCode::Right if alt => Command::Forward,
        KeyCode::Up if alt => Command::Up,
        KeyCode::Char('h') if ctrl => Command::ToggleHidden,
        KeyCode::Char('h') | KeyCode::Left => Command::Back,
        KeyCode::Char('f') if ctrl => Command::PromptSearch,
        KeyCode::Char('f') => Command::Forward,
        KeyCode::Char('u') => Command::Up,
        KeyCode::Char('r') | KeyCode::F(5) => Command::Refresh,

        // Cursor and selection
        KeyCode::Up if shift => Command::ExtendSelectionUp,
        KeyCode::Down if shift => Command::ExtendSelectionDown,
        KeyCode::Char('k') | KeyCode::Up => Command::CursorUp,
        KeyCode::Char('j') | KeyCode::Down => Command::CursorDown,
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => Command::OpenCursor,
        KeyCode::Char(' ') => Command::ToggleSelect,
        KeyCode::Char('a') if ctrl => Command::SelectAll,
        KeyCode::Esc => Command::ClearSelection,

        // Clipboard
        KeyCode::Char('c') if ctrl => Command::CopySelection,
        KeyCode::Char('y') => Command::CopySelection,
        KeyCode::Char('x') => Command::CutSelection,
        KeyCode::Char('v') if ctrl => Command::Paste,
        KeyCode::Char('p') => Command::Paste,

        // Mutations
        KeyCode::Char('d') | KeyCode::Delete => Command::DeleteSelection,
        KeyCode::Char('R') | KeyCode::F(2) => Command::PromptRename,
        KeyCode::Char('n') | KeyCode::F(7) => Command::PromptCreateFolder,

        // Prompts
        KeyCode::Char('/') => Command::PromptSearch,
        KeyCode::Char('o') => Command::PromptOpenLocation,

        // Settings and bookmarks
        KeyCode::Char('.') => Command::ToggleHidden,
        KeyCode::Char('b') if ctrl => Command::ToggleSidebar,
        KeyCode::Char('g') => Command::ToggleViewMode,
        KeyCode::Char('s') => Command::CycleSortKey,
        KeyCode::Char('S') => Command::ToggleSortOrder,
        KeyCode::Char('m') => Command::AddBookmark,
        KeyCode::Char('M') => Command::RemoveBookmark,

        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmarks::BookmarkList;
    use crate::settings::Settings;

    fn app() -> App {
        App::new("/".into(), Settings::default(), BookmarkList::new())
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn key_with(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn browse_keys_map_to_commands() {
        let app = app();
        assert_eq!(map_event(&app, key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(
            map_event(&app, key(KeyCode::Enter)),
            Some(Command::OpenCursor)
        );
        assert_eq!(
            map_event(&app, key_with(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            Some(Command::SelectAll)
        );
        assert_eq!(
            map_event(&app, key_with(KeyCode::Left, KeyModifiers::ALT)),
            Some(Command::Back)
        );
        assert_eq!(
            map_event(&app, key_with(KeyCode::Down, KeyModifiers::SHIFT)),
            Some(Command::ExtendSelectionDown)
        );
        assert_eq!(
            map_event(&app, key_with(KeyCode::Char('1'), KeyModifiers::CONTROL)),
            Some(Command::ActivateTab(0))
        );
        assert_eq!(map_event(&app, key(KeyCode::F(9))), None);
    }

    #[test]
    fn prompt_mode_captures_text_input() {
        let mut app = app();
        app.open_prompt(PromptKind::Search, String::new());

        assert_eq!(
            map_event(&app, key(KeyCode::Char('q'))),
            Some(Command::PromptInput('q'))
        );
        assert_eq!(
            map_event(&app, key(KeyCode::Backspace)),
            Some(Command::PromptBackspace)
        );
        assert_eq!(
            map_event(&app, key(KeyCode::Enter)),
            Some(Command::PromptSubmit)
        );
        assert_eq!(
            map_event(&app, key(KeyCode::Esc)),
            Some(Command::PromptCancel)
        );
    }

    #[test]
    fn confirm_delete_prompt_is_yes_no() {
        let mut app = app();
        app.open_prompt(PromptKind::ConfirmDelete, String::new());

        assert_eq!(
            map_event(&app, key(KeyCode::Char('y'))),
            Some(Command::PromptSubmit)
        );
        assert_eq!(
            map_event(&app, key(KeyCode::Char('n'))),
            Some(Command::PromptCancel)
        );
        assert_eq!(map_event(&app, key(KeyCode::Char('z'))), None);
    }
}
