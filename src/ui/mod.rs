use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use std::io;
use termion::{event::Key, raw::{IntoRawMode, RawTerminal}};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tui::{backend::TermionBackend, widgets::TableState, Terminal};

use crate::inventory::InventoryEvent;
use self::user_input::user_input;

pub use self::session::{Flow, Session};
pub use self::user_input::Command;

mod render;
mod session;
mod user_input;

enum Event {
  Key(Key),
  Inventory(InventoryEvent)
}

pub struct UI {
  /// terminal abstraction, raw mode is left when this drops
  terminal: Terminal<TermionBackend<RawTerminal<io::Stdout>>>,

  session: Session,

  /// scroll position of the table between frames
  selection: TableState
}

impl UI {
  pub fn new(session: Session) -> Result<Self> {
    let stdout = io::stdout()
      .into_raw_mode()
      .context("Failed to put terminal into 'raw mode'")?;

    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to initialize terminal abstraction")?;

    terminal.clear().context("Failed to clear terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;

    Ok(UI { terminal, session, selection: TableState::default() })
  }

  // draw based on state
  fn render(&mut self) -> io::Result<()> {
    let view = self.session.view();
    let selection = &mut self.selection;
    selection.select(self.session.cursor());

    self.terminal.draw(|f| render::draw(f, view, selection))?;
    Ok(())
  }

  /// Starts the loaders, then handles keystrokes and loader results until
  /// the user quits, redrawing after every event.
  pub async fn listen(&mut self, inventory: UnboundedReceiver<InventoryEvent>) -> Result<()> {
    let keys = user_input().map(Event::Key);
    let updates = UnboundedReceiverStream::new(inventory).map(Event::Inventory);
    let mut events = stream::select(keys, updates);

    self.session.start();

    loop {
      self.render().context("Failed to render")?;

      match events.next().await {
        Some(Event::Key(key)) => {
          let command = match Command::from_key(key) {
            Some(command) => command,
            None => continue
          };

          if self.session.on_command(command) == Flow::Quit { break; }
        },
        Some(Event::Inventory(event)) => self.session.on_inventory(event),
        None => break
      }
    }

    self.terminal.show_cursor().context("Failed to restore cursor")?;
    Ok(())
  }
}
