use std::{io, thread};
use termion::{event::Key, input::TermRead};
use tokio::sync::mpsc::unbounded_channel;
use tokio_stream::wrappers::UnboundedReceiverStream;

use crate::table::SortKey;

/// Keystrokes from stdin. Reading blocks, so it happens on its own thread
/// and keys are forwarded over a channel; the thread ends once the stream
/// is dropped and the next key fails to send.
pub fn user_input() -> UnboundedReceiverStream<Key> {
  let (key_tx, key_rx) = unbounded_channel();

  thread::spawn(move || {
    for key in io::stdin().keys().filter_map(Result::ok) {
      if key_tx.send(key).is_err() { return; }
    }
  });

  UnboundedReceiverStream::new(key_rx)
}

/// What a keystroke asks the session to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
  Quit,
  Type(char),
  Erase,
  ClearSearch,
  Sort(SortKey),
  Refresh,
  Up,
  Down,
  PageUp,
  PageDown
}

impl Command {
  pub fn from_key(key: Key) -> Option<Command> {
    let command = match key {
      Key::Ctrl('c') | Key::Ctrl('d') => Command::Quit,
      Key::Esc | Key::Ctrl('u') => Command::ClearSearch,
      Key::Ctrl('r') | Key::F(5) => Command::Refresh,
      Key::Backspace => Command::Erase,

      Key::F(1) | Key::Alt('y') => Command::Sort(SortKey::Year),
      Key::F(2) | Key::Alt('m') => Command::Sort(SortKey::Model),
      Key::F(3) | Key::Alt('k') => Command::Sort(SortKey::Make),

      Key::Up => Command::Up,
      Key::Down => Command::Down,
      Key::PageUp => Command::PageUp,
      Key::PageDown => Command::PageDown,

      Key::Char(c) if !c.is_control() => Command::Type(c),
      _ => return None
    };

    Some(command)
  }
}
