//! Global key passthrough for the physical remote / keyboard

use crate::keycode::{VK_0, VK_9, VK_BACK_SPACE, VK_ESCAPE, VK_MENU};
use super::{Command, ImeEvent};

/// Maps a key code from outside the on-screen grid to an event.
///
/// Digit keys insert their digit; menu, backspace and escape hide the
/// keyboard. Every other code is ignored.
pub fn translate_key(code: u16) -> Option<ImeEvent> {
    match code {
        VK_0..=VK_9 => {
            let digit = char::from(b'0' + (code - VK_0) as u8);
            Some(ImeEvent::Insert(digit.to_string()))
        }
        VK_MENU | VK_BACK_SPACE | VK_ESCAPE => Some(ImeEvent::Cmd(Command::Hide)),
        _ => None,
    }
}
