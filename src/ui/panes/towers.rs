//! Peg and disc rendering
//!
//! Layout is computed by [`peg_rows`] and [`disc_width`], which know nothing
//! about ratatui, and drawn by [`render_towers_pane`].

use crate::puzzle::{Disc, Peg, Tower};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Narrowest disc, in cells
pub const MIN_DISC_WIDTH: u16 = 3;

/// One text row of a peg column, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PegRow {
    Blank,
    Pole,
    Disc(Disc),
    Base,
    Label,
}

/// Rows for one peg column of `height` rows.
///
/// The pole is one row taller than a full stack. When `height` is too small the
/// top of the column is cut off first, so the base, the label and the lowest
/// discs stay visible.
pub fn peg_rows(discs: &[Disc], num_discs: u32, height: usize) -> Vec<PegRow> {
    let pole_height = num_discs as usize + 1;

    // Built bottom-up, reversed at the end
    let mut rows = vec![PegRow::Label, PegRow::Base];
    rows.extend(discs.iter().map(|&d| PegRow::Disc(d)));
    rows.extend(std::iter::repeat(PegRow::Pole).take(pole_height.saturating_sub(discs.len())));
    if rows.len() < height {
        rows.resize(height, PegRow::Blank);
    }
    rows.truncate(height);
    rows.reverse();
    rows
}

/// Width of `disc` in a column whose widest disc may span `max_width` cells.
///
/// Widths grow linearly from [`MIN_DISC_WIDTH`] (disc 1) to `max_width` (the
/// largest disc) and are always odd so a disc centers on the pole.
pub fn disc_width(disc: Disc, num_discs: u32, max_width: u16) -> u16 {
    let max_width = max_width.max(MIN_DISC_WIDTH);
    let width = if num_discs <= 1 {
        max_width
    } else {
        let span = u32::from(max_width - MIN_DISC_WIDTH);
        let step = disc.clamp(1, num_discs) - 1;
        MIN_DISC_WIDTH + (span * step / (num_discs - 1)) as u16
    };
    if width % 2 == 0 {
        width - 1
    } else {
        width
    }
}

/// Width of `disc` drawn in a peg column `column_width` cells wide.
///
/// Leaves a cell of margin on each side when there is room, never exceeds the
/// column, and stays odd (or zero for a zero-width column).
pub fn fit_disc_width(disc: Disc, num_discs: u32, column_width: u16) -> u16 {
    let width = disc_width(disc, num_discs, column_width.saturating_sub(2)).min(column_width);
    if width % 2 == 0 {
        width.saturating_sub(1)
    } else {
        width
    }
}

/// Render all three pegs of `tower` inside a bordered block
pub fn render_towers_pane(frame: &mut Frame, area: Rect, tower: &Tower) {
    let block = Block::default()
        .title(format!(" Tower of Hanoi ({} discs) ", tower.num_discs()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(inner);

    for peg in Peg::ALL {
        let column = columns[peg.index()];
        let lines = peg_lines(tower, peg, column.width, column.height);
        frame.render_widget(Paragraph::new(lines), column);
    }
}

fn peg_lines(tower: &Tower, peg: Peg, width: u16, height: u16) -> Vec<Line<'static>> {
    let num_discs = tower.num_discs();
    let pole_col = width.saturating_sub(1) / 2;

    peg_rows(&tower.discs(peg), num_discs, height as usize)
        .into_iter()
        .map(|row| match row {
            PegRow::Blank => Line::default(),
            PegRow::Pole => Line::from(vec![
                Span::raw(" ".repeat(pole_col as usize)),
                Span::styled("┃", Style::default().fg(DEFAULT_THEME.pole)),
            ]),
            PegRow::Disc(disc) => {
                let w = fit_disc_width(disc, num_discs, width);
                let pad = width.saturating_sub(w) / 2;
                Line::from(vec![
                    Span::raw(" ".repeat(pad as usize)),
                    Span::styled(
                        "█".repeat(w as usize),
                        Style::default().fg(DEFAULT_THEME.disc_color(disc)),
                    ),
                ])
            }
            PegRow::Base => Line::from(Span::styled(
                "▀".repeat(width as usize),
                Style::default().fg(DEFAULT_THEME.base),
            )),
            PegRow::Label => Line::from(vec![
                Span::raw(" ".repeat(pole_col as usize)),
                Span::styled(
                    peg.label(),
                    Style::default()
                        .fg(DEFAULT_THEME.fg)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn rows_stack_discs_above_base() {
        let rows = peg_rows(&[3, 2, 1], 3, 7);
        assert_eq!(
            rows,
            vec![
                PegRow::Blank,
                PegRow::Pole,
                PegRow::Disc(1),
                PegRow::Disc(2),
                PegRow::Disc(3),
                PegRow::Base,
                PegRow::Label,
            ]
        );
    }

    #[test]
    fn empty_peg_shows_full_pole() {
        let rows = peg_rows(&[], 2, 5);
        assert_eq!(
            rows,
            vec![
                PegRow::Pole,
                PegRow::Pole,
                PegRow::Pole,
                PegRow::Base,
                PegRow::Label,
            ]
        );
    }

    #[test]
    fn short_column_keeps_the_bottom() {
        let rows = peg_rows(&[4, 3, 2, 1], 4, 4);
        assert_eq!(
            rows,
            vec![PegRow::Disc(3), PegRow::Disc(4), PegRow::Base, PegRow::Label]
        );
    }

    #[test]
    fn disc_widths_grow_with_size_and_stay_odd() {
        let widths: Vec<u16> = (1..=5).map(|d| disc_width(d, 5, 21)).collect();
        assert_eq!(widths[0], MIN_DISC_WIDTH);
        assert_eq!(widths[4], 21);
        assert!(widths.windows(2).all(|w| w[0] <= w[1]));
        assert!(widths.iter().all(|w| w % 2 == 1));
    }

    #[test]
    fn single_disc_uses_full_width() {
        assert_eq!(disc_width(1, 1, 15), 15);
        assert_eq!(disc_width(1, 1, 1), MIN_DISC_WIDTH);
    }

    #[test]
    fn narrow_columns_keep_discs_odd_and_inside() {
        for column in 0..=8u16 {
            for disc in 1..=4 {
                let w = fit_disc_width(disc, 4, column);
                assert!(w <= column, "disc {} too wide for {}", disc, column);
                assert!(w % 2 == 1 || column == 0, "even width {} in {}", w, column);
            }
        }
        assert_eq!(fit_disc_width(1, 1, 2), 1);
        assert_eq!(fit_disc_width(4, 4, 23), 21);
    }

    #[test]
    fn renders_peg_labels() {
        let tower = Tower::new(3).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(48, 12)).unwrap();
        terminal
            .draw(|f| render_towers_pane(f, f.area(), &tower))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Tower of Hanoi (3 discs)"));
        assert!(text.contains('A') && text.contains('B') && text.contains('C'));
        assert!(text.contains('█'));
    }
}
