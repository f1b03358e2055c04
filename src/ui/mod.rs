pub mod input_handler;
pub mod layout;
pub mod widgets;

use crate::app::AppState;
use crate::error::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use input_handler::InputHandler;

pub fn handle_key_event(app: &mut AppState, key: KeyEvent) -> Result<()> {
    InputHandler::handle_key(app, key)
}

pub fn handle_mouse_event(app: &mut AppState, mouse: MouseEvent) -> Result<()> {
    InputHandler::handle_mouse(app, mouse)
}
