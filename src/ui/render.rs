use tui::{
  backend::Backend,
  layout::{Constraint, Direction, Layout},
  style::{Color, Modifier, Style},
  text::Span,
  widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
  Frame
};

use crate::table::{SortConfig, SortDirection, SortKey, TableView};

const COLUMN_WIDTHS: [Constraint; 3] = [
  Constraint::Length(6),
  Constraint::Percentage(45),
  Constraint::Percentage(45)
];

const HELP: &str = " F1 year  F2 model  F3 maker  Esc clear  Ctrl-R refresh  Ctrl-C quit";

fn header_label(key: SortKey, sort: SortConfig) -> String {
  match sort {
    SortConfig { key: Some(active), direction } if active == key => format!(
      "{} {}",
      key,
      match direction {
        SortDirection::Ascending => "▲",
        SortDirection::Descending => "▼"
      }
    ),
    _ => key.to_string()
  }
}

/// Draws the whole screen: a loading line until vehicles exist, the search
/// bar and table after that (even when no row matches).
pub fn draw<B: Backend>(f: &mut Frame<B>, view: &TableView, selection: &mut TableState) {
  let area = f.size();

  if view.is_loading() {
    f.render_widget(Paragraph::new("Loading..."), area);
    return;
  }

  let chunks = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1),
      Constraint::Length(3),
      Constraint::Min(3),
      Constraint::Length(1)
    ].as_ref())
    .split(area);

  let title = Paragraph::new(Span::styled(" Vehicles", Style::default().add_modifier(Modifier::BOLD)));
  f.render_widget(title, chunks[0]);

  let search = if view.search().is_empty() {
    Paragraph::new(Span::styled("type to filter", Style::default().fg(Color::DarkGray)))
  } else {
    Paragraph::new(view.search())
  };
  f.render_widget(search.block(Block::default().title("Search").borders(Borders::ALL)), chunks[1]);

  let sort = view.sort();
  let header = Row::new(SortKey::ALL.iter().map(|&key| header_label(key, sort)))
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

  let rows = view.displayed().map(|vehicle| Row::new(vec![
    Cell::from(vehicle.year.to_string()),
    Cell::from(vehicle.model.as_str()),
    Cell::from(vehicle.make.as_str())
  ]));

  let table = Table::new(rows)
    .header(header)
    .block(
      Block::default()
        .title(format!("{} of {}", view.displayed_len(), view.vehicles().len()))
        .borders(Borders::ALL)
    )
    .widths(&COLUMN_WIDTHS)
    .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .highlight_symbol("> ");
  f.render_stateful_widget(table, chunks[2], selection);

  f.render_widget(Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)), chunks[3]);
}
