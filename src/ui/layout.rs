use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::counter::CounterIntent;

/// Width of one trigger button, borders included.
pub const TRIGGER_WIDTH: u16 = 13;
/// Height of one trigger button, borders included.
pub const TRIGGER_HEIGHT: u16 = 3;
const TRIGGER_GAP: u16 = 2;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Counter panel regions inside the body: count display, trigger row, turn log.
pub struct CounterRegions {
    pub display: Rect,
    pub triggers: Rect,
    pub turn_log: Rect,
}

pub fn counter_regions(body: Rect) -> CounterRegions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),              // Count display
            Constraint::Length(TRIGGER_HEIGHT), // Triggers
            Constraint::Min(0),                 // Turn log
        ])
        .split(body);

    CounterRegions {
        display: chunks[0],
        triggers: chunks[1],
        turn_log: chunks[2],
    }
}

/// Button rectangles for each trigger, centered in `row`, in view order.
pub fn trigger_rects(row: Rect) -> Vec<(Rect, CounterIntent)> {
    let count = CounterIntent::TRIGGERS.len() as u16;
    let total = TRIGGER_WIDTH * count + TRIGGER_GAP * count.saturating_sub(1);
    let start = row.x + row.width.saturating_sub(total) / 2;

    CounterIntent::TRIGGERS
        .iter()
        .enumerate()
        .map(|(idx, &intent)| {
            let x = start + idx as u16 * (TRIGGER_WIDTH + TRIGGER_GAP);
            let rect = Rect {
                x,
                y: row.y,
                width: TRIGGER_WIDTH,
                height: TRIGGER_HEIGHT.min(row.height),
            };
            (rect.intersection(row), intent)
        })
        .collect()
}

/// Trigger under the given terminal cell, for a screen of `size`.
pub fn trigger_at(size: (u16, u16), column: u16, row: u16) -> Option<CounterIntent> {
    let area = Rect {
        x: 0,
        y: 0,
        width: size.0,
        height: size.1,
    };
    let (_, body, _) = layout_regions(area);
    let regions = counter_regions(body);
    trigger_rects(regions.triggers)
        .into_iter()
        .find(|(rect, _)| {
            column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        })
        .map(|(_, intent)| intent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_split_header_body_footer() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.y, 3);
        assert_eq!(body.height, 18);
    }

    #[test]
    fn triggers_are_left_to_right_in_view_order() {
        let rects = trigger_rects(Rect::new(0, 6, 80, 3));
        let intents: Vec<_> = rects.iter().map(|(_, intent)| *intent).collect();
        assert_eq!(intents, CounterIntent::TRIGGERS.to_vec());
        assert!(rects[0].0.x < rects[1].0.x && rects[1].0.x < rects[2].0.x);
    }

    #[test]
    fn hit_test_finds_each_trigger() {
        let size = (80, 24);
        let (_, body, _) = layout_regions(Rect::new(0, 0, 80, 24));
        let row = counter_regions(body).triggers;
        for (rect, intent) in trigger_rects(row) {
            assert_eq!(trigger_at(size, rect.x + 1, rect.y + 1), Some(intent));
        }
        assert_eq!(trigger_at(size, 0, 0), None);
    }
}
