use crate::inventory::Vehicle;

/// Search needle, lowercased once up front
pub struct SearchFilter<'a> {
  literal: &'a str,
  folded: String
}

impl<'a> SearchFilter<'a> {
  pub fn new(term: &'a str) -> Self {
    SearchFilter { literal: term, folded: term.to_lowercase() }
  }

  /// Make and model match case-insensitively; the year matches on its
  /// decimal text against the term exactly as typed.
  pub fn matches(&self, vehicle: &Vehicle) -> bool {
    self.literal.is_empty()
      || vehicle.make.to_lowercase().contains(&self.folded)
      || vehicle.model.to_lowercase().contains(&self.folded)
      || vehicle.year.to_string().contains(self.literal)
  }
}

/// Positions in `vehicles` that match `term`, in list order
pub fn filter_positions(vehicles: &[Vehicle], term: &str) -> Vec<usize> {
  let filter = SearchFilter::new(term);

  vehicles
    .iter()
    .enumerate()
    .filter(|(_, vehicle)| filter.matches(vehicle))
    .map(|(position, _)| position)
    .collect()
}
