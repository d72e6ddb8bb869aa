use tracing::{debug, info};

use crate::inventory::{DatasetId, InventoryEvent, Loader};
use crate::table::{Action, TableView};

use super::user_input::Command;

const PAGE: usize = 10;

/// Whether the event loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
  Continue,
  Quit
}

/// Owns the table state and the loaders, and turns keystrokes and loader
/// results into state changes. Knows nothing about the terminal.
pub struct Session {
  loader: Loader,
  dataset_id: Option<DatasetId>,
  view: TableView,

  /// highlighted row among the displayed ones
  cursor: usize
}

impl Session {
  pub fn new(loader: Loader, search: String) -> Self {
    let view = TableView::default().reduce(Action::SearchChanged(search));
    Session { loader, dataset_id: None, view, cursor: 0 }
  }

  /// Kicks off the dataset id fetch; everything else follows from its result
  pub fn start(&mut self) {
    self.loader.load_dataset_id();
  }

  pub fn view(&self) -> &TableView { &self.view }

  pub fn dataset_id(&self) -> Option<&DatasetId> { self.dataset_id.as_ref() }

  pub fn cursor(&self) -> Option<usize> {
    if self.view.displayed_len() == 0 { None } else { Some(self.cursor) }
  }

  fn dispatch(&mut self, action: Action) {
    self.view = std::mem::take(&mut self.view).reduce(action);
    self.cursor = self.cursor.min(self.view.displayed_len().saturating_sub(1));
  }

  pub fn on_inventory(&mut self, event: InventoryEvent) {
    match event {
      InventoryEvent::DatasetId(id) => {
        self.loader.load_vehicles(id.clone());
        self.dataset_id = Some(id);
      },
      InventoryEvent::Vehicles { generation, dataset_id, vehicles } => {
        if !self.loader.is_current(generation) {
          debug!(generation, %dataset_id, "dropping superseded vehicle list");
          return;
        }

        info!(%dataset_id, count = vehicles.len(), "vehicle list replaced");
        self.dispatch(Action::VehiclesLoaded(vehicles));
      }
    }
  }

  pub fn on_command(&mut self, command: Command) -> Flow {
    match command {
      Command::Quit => return Flow::Quit,
      Command::Type(c) => self.dispatch(Action::SearchTyped(c)),
      Command::Erase => self.dispatch(Action::SearchErased),
      Command::ClearSearch => self.dispatch(Action::ClearSearch),
      Command::Sort(key) => self.dispatch(Action::SortBy(key)),
      Command::Refresh => {
        debug!(previous = ?self.dataset_id(), "refreshing");
        self.loader.load_dataset_id()
      },

      Command::Up => self.cursor = self.cursor.saturating_sub(1),
      Command::PageUp => self.cursor = self.cursor.saturating_sub(PAGE),
      Command::Down => self.move_down(1),
      Command::PageDown => self.move_down(PAGE)
    }

    Flow::Continue
  }

  fn move_down(&mut self, by: usize) {
    let last = self.view.displayed_len().saturating_sub(1);
    self.cursor = (self.cursor + by).min(last);
  }
}
