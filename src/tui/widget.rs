//! Rating control widget.
//!
//! Draws an optional title, a row of segments and a value label. Segment
//! columns are derived from the same position mapping the core uses for
//! drags, so pressing or dragging over a segment always selects that segment.

use std::fmt::Display;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::domain::OrderedSelectableSet;
use crate::tui::interaction::ClickRegion;
use crate::tui::theme::*;

/// Rows occupied by each part of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingLayout {
    pub title: Option<Rect>,
    pub track: Rect,
    pub value: Rect,
}

/// Terminal rendering of a rating control.
pub struct RatingWidget<'a, D: OrderedSelectableSet> {
    domain: &'a D,
    selection: &'a D::Element,
    title: Option<Line<'a>>,
    value_label: Option<Line<'a>>,
    filled: Color,
    empty: Color,
    segment_height: u16,
}

impl<'a, D> RatingWidget<'a, D>
where
    D: OrderedSelectableSet,
    D::Element: Display,
{
    pub fn new(domain: &'a D, selection: &'a D::Element) -> Self {
        Self {
            domain,
            selection,
            title: None,
            value_label: None,
            filled: SEGMENT_FILLED,
            empty: SEGMENT_EMPTY,
            segment_height: 1,
        }
    }

    pub fn title<T: Into<Line<'a>>>(mut self, title: T) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replace the default value label (the selection's description).
    pub fn value_label<F>(mut self, label: F) -> Self
    where
        F: FnOnce(&D::Element) -> Line<'a>,
    {
        self.value_label = Some(label(self.selection));
        self
    }

    pub fn colors(mut self, filled: Color, empty: Color) -> Self {
        self.filled = filled;
        self.empty = empty;
        self
    }

    pub fn segment_height(mut self, height: u16) -> Self {
        self.segment_height = height.max(1);
        self
    }

    /// Total rows the widget wants.
    pub fn height(&self) -> u16 {
        u16::from(self.title.is_some()) + self.segment_height + 1
    }

    pub fn layout(&self, area: Rect) -> RatingLayout {
        let mut y = area.y;
        let bottom = area.bottom();

        let title = self.title.as_ref().map(|_| {
            let rect = Rect::new(area.x, y, area.width, 1u16.min(bottom - y));
            y = (y + 1).min(bottom);
            rect
        });

        let track_height = self.segment_height.min(bottom - y);
        let track = Rect::new(area.x, y, area.width, track_height);
        y += track_height;

        let value = Rect::new(area.x, y, area.width, 1u16.min(bottom - y));

        RatingLayout {
            title,
            track,
            value,
        }
    }

    /// Column span of every segment within `track`, gap excluded.
    ///
    /// Segments that get no column on a narrow track are omitted.
    pub fn segment_regions(&self, track: Rect) -> Vec<(usize, ClickRegion)> {
        let region = ClickRegion::from(track);
        let mut spans: Vec<(usize, u16, u16)> = Vec::with_capacity(self.domain.len());

        for column in track.left()..track.right() {
            let index = self
                .domain
                .offset_at_percentage(region.horizontal_fraction(column));
            match spans.last_mut() {
                Some((last, _, end)) if *last == index => *end = column + 1,
                _ => spans.push((index, column, column + 1)),
            }
        }

        let count = spans.len();
        spans
            .into_iter()
            .enumerate()
            .map(|(position, (index, start, end))| {
                let width = end - start;
                // One blank column separates neighbours when there is room.
                let width = if position + 1 < count && width > 1 {
                    width - 1
                } else {
                    width
                };
                (index, ClickRegion::new(start, track.y, width, track.height))
            })
            .collect()
    }

    fn selected_index(&self) -> usize {
        self.domain.index_of(self.selection)
    }

    fn segment_line(&self, track: Rect) -> Line<'static> {
        let selected = self.selected_index();
        let mut spans = Vec::new();
        let mut cursor = track.x;

        for (index, region) in self.segment_regions(track) {
            if region.x > cursor {
                spans.push(Span::raw(" ".repeat(usize::from(region.x - cursor))));
            }
            let color = if index <= selected { self.filled } else { self.empty };
            spans.push(Span::styled(
                "█".repeat(usize::from(region.width)),
                Style::new().fg(color),
            ));
            cursor = region.x + region.width;
        }

        Line::from(spans)
    }
}

impl<D> Widget for RatingWidget<'_, D>
where
    D: OrderedSelectableSet,
    D::Element: Display,
{
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let layout = self.layout(area);

        if let (Some(title), Some(rect)) = (&self.title, layout.title) {
            title
                .clone()
                .patch_style(Style::new().fg(TEXT_WHITE).bold())
                .centered()
                .render(rect, buf);
        }

        let segments = self.segment_line(layout.track);
        for row in layout.track.rows() {
            segments.clone().render(row, buf);
        }

        let value = self
            .value_label
            .clone()
            .unwrap_or_else(|| Line::styled(self.selection.to_string(), Style::new().fg(TEXT_DIM)));
        value.centered().render(layout.value, buf);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::buffer::Cell;

    use super::*;
    use crate::domain::OrderedDomain;
    use crate::rating::Rating;

    fn cell(buf: &Buffer, x: u16, y: u16) -> &Cell {
        &buf[(x, y)]
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| cell(buf, x, y).symbol()).collect()
    }

    fn five() -> OrderedDomain<Rating> {
        OrderedDomain::all_cases().unwrap()
    }

    #[test]
    fn test_layout_with_title() {
        let domain = five();
        let widget = RatingWidget::new(&domain, &Rating::Two).title("Rating");
        let layout = widget.layout(Rect::new(0, 0, 20, 5));

        assert_eq!(widget.height(), 3);
        assert_eq!(layout.title, Some(Rect::new(0, 0, 20, 1)));
        assert_eq!(layout.track, Rect::new(0, 1, 20, 1));
        assert_eq!(layout.value, Rect::new(0, 2, 20, 1));
    }

    #[test]
    fn test_layout_clips_to_short_area() {
        let domain = five();
        let widget = RatingWidget::new(&domain, &Rating::Two)
            .title("Rating")
            .segment_height(3);
        let layout = widget.layout(Rect::new(0, 0, 20, 2));

        assert_eq!(layout.track.height, 1);
        assert_eq!(layout.value.height, 0);
    }

    #[test]
    fn test_segment_regions_partition_track() {
        let domain = five();
        let widget = RatingWidget::new(&domain, &Rating::One);
        let regions = widget.segment_regions(Rect::new(2, 0, 20, 1));

        let indices: Vec<usize> = regions.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
        assert_eq!(regions[0].1, ClickRegion::new(2, 0, 3, 1));
        assert_eq!(regions[1].1, ClickRegion::new(6, 0, 3, 1));
        assert_eq!(regions[4].1, ClickRegion::new(18, 0, 4, 1));
    }

    #[test]
    fn test_segment_regions_agree_with_drag_mapping() {
        let domain = five();
        let widget = RatingWidget::new(&domain, &Rating::One);
        let track = Rect::new(0, 0, 17, 1);
        let region = ClickRegion::from(track);

        for (index, bounds) in widget.segment_regions(track) {
            for column in bounds.x..bounds.x + bounds.width {
                let p = region.horizontal_fraction(column);
                assert_eq!(domain.offset_at_percentage(p), index, "column {column}");
            }
        }
    }

    #[test]
    fn test_render_fills_up_to_selection() {
        let domain = five();
        let area = Rect::new(0, 0, 20, 2);
        let mut buf = Buffer::empty(area);

        RatingWidget::new(&domain, &Rating::Three).render(area, &mut buf);

        assert_eq!(cell(&buf, 0, 0).symbol(), "█");
        assert_eq!(cell(&buf, 0, 0).fg, SEGMENT_FILLED);
        assert_eq!(cell(&buf, 3, 0).symbol(), " ");
        assert_eq!(cell(&buf, 8, 0).fg, SEGMENT_FILLED);
        assert_eq!(cell(&buf, 12, 0).fg, SEGMENT_EMPTY);
        assert_eq!(cell(&buf, 19, 0).fg, SEGMENT_EMPTY);

        assert_eq!(row_text(&buf, 1).trim(), "Three");
    }

    #[test]
    fn test_custom_value_label() {
        let domain = five();
        let area = Rect::new(0, 0, 12, 2);
        let mut buf = Buffer::empty(area);

        RatingWidget::new(&domain, &Rating::Four)
            .value_label(|rating| Line::raw(format!("{rating} stars")))
            .render(area, &mut buf);

        assert_eq!(row_text(&buf, 1).trim(), "Four stars");
    }

    #[test]
    fn test_stale_selection_renders_first_segment() {
        let domain = OrderedDomain::new(vec!["low", "high"]).unwrap();
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);

        RatingWidget::new(&domain, &"missing").render(area, &mut buf);

        assert_eq!(cell(&buf, 0, 0).fg, SEGMENT_FILLED);
        assert_eq!(cell(&buf, 9, 0).fg, SEGMENT_EMPTY);
    }
}
