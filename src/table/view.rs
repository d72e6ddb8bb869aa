use crate::inventory::Vehicle;

use super::{filter_positions, SortConfig, SortKey};

/// Everything that can change what the table shows
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
  VehiclesLoaded(Vec<Vehicle>),
  SearchChanged(String),
  SearchTyped(char),
  SearchErased,
  ClearSearch,
  SortBy(SortKey)
}

/// The vehicle list, the search and sort inputs, and the rows derived from
/// them. Never edited in place: every change goes through [`TableView::reduce`],
/// which rebuilds the displayed rows as `sort(filter(vehicles))`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableView {
  vehicles: Vec<Vehicle>,
  search: String,
  sort: SortConfig,

  /// positions into `vehicles`
  displayed: Vec<usize>
}

impl TableView {
  pub fn reduce(self, action: Action) -> TableView {
    let TableView { mut vehicles, mut search, mut sort, .. } = self;

    match action {
      Action::VehiclesLoaded(loaded) => vehicles = loaded,
      Action::SearchChanged(term) => search = term,
      Action::SearchTyped(c) => search.push(c),
      Action::SearchErased => { search.pop(); },
      Action::ClearSearch => search.clear(),
      Action::SortBy(key) => sort = sort.toggle(key)
    }

    TableView::derive(vehicles, search, sort)
  }

  fn derive(vehicles: Vec<Vehicle>, search: String, sort: SortConfig) -> TableView {
    let mut displayed = filter_positions(&vehicles, &search);
    sort.apply(&vehicles, &mut displayed);

    TableView { vehicles, search, sort, displayed }
  }

  /// Nothing has arrived yet, so there is nothing to draw a table for
  pub fn is_loading(&self) -> bool { self.vehicles.is_empty() }

  pub fn vehicles(&self) -> &[Vehicle] { &self.vehicles }

  pub fn search(&self) -> &str { &self.search }

  pub fn sort(&self) -> SortConfig { self.sort }

  pub fn displayed_len(&self) -> usize { self.displayed.len() }

  pub fn displayed(&self) -> impl Iterator<Item = &Vehicle> + '_ {
    self.displayed.iter().map(move |&position| &self.vehicles[position])
  }
}
