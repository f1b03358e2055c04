use crate::app::AppState;
use crate::error::Result;
use crate::input::{key_command, Command};
use crate::types::UiMode;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<()> {
        // The first key press of the session hides the hint, bound or not
        app.dismiss_hint();

        match app.ui_mode {
            UiMode::Help => Self::handle_help(app, key),
            UiMode::Normal => Self::handle_slides(app, key),
        }
    }

    fn handle_slides(app: &mut AppState, key: KeyEvent) -> Result<()> {
        match key_command(key) {
            Some(Command::Navigate(transition)) => app.navigate(transition),
            Some(Command::ToggleHelp) => app.toggle_help(),
            Some(Command::Quit) => {
                app.should_quit = true;
            }
            None => {}
        }
        Ok(())
    }

    fn handle_help(app: &mut AppState, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Esc {
            app.toggle_help();
            return Ok(());
        }
        match key_command(key) {
            Some(Command::ToggleHelp) => app.toggle_help(),
            Some(Command::Quit) => {
                app.should_quit = true;
            }
            _ => {}
        }
        Ok(())
    }

    pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> Result<()> {
        if app.ui_mode != UiMode::Normal {
            app.swipe.cancel();
            return Ok(());
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                app.pointer_down(mouse.column, mouse.row);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                app.pointer_up(mouse.column);
            }
            _ => {}
        }
        Ok(())
    }
}
