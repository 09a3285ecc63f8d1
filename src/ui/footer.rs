use crate::ui::input::{KeyBinding, BINDINGS};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const SEPARATOR: &str = " │ ";

/// Key hints from [`BINDINGS`] on the left, version on the right.
///
/// Hints that do not fit are dropped from the end; the version always stays.
pub fn footer(area: Rect) -> Paragraph<'static> {
    let hint_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let key_style = Style::default().fg(ACCENT);

    let version = format!("v{} ", VERSION);
    let inner = area.width.saturating_sub(2) as usize;
    let budget = inner.saturating_sub(version.chars().count());

    let mut spans = vec![Span::styled(" ", hint_style)];
    let mut used = 1;
    for (idx, binding) in BINDINGS.iter().enumerate() {
        let separator = if idx == 0 { "" } else { SEPARATOR };
        let width = separator.chars().count() + hint_width(binding);
        if used + width > budget {
            break;
        }
        if !separator.is_empty() {
            spans.push(Span::styled(separator, hint_style));
        }
        spans.push(Span::styled(binding.keys_label, key_style));
        spans.push(Span::styled(format!(": {}", binding.description), hint_style));
        used += width;
    }

    let padding = inner.saturating_sub(used + version.chars().count());
    spans.push(Span::styled(" ".repeat(padding), hint_style));
    spans.push(Span::styled(version, hint_style));

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn hint_width(binding: &KeyBinding) -> usize {
    binding.keys_label.chars().count() + 2 + binding.description.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rendered(width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 3)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(footer(frame.area()), frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, 1)].symbol().to_string())
            .collect()
    }

    #[test]
    fn wide_footer_lists_every_binding() {
        let line = rendered(120);
        for binding in BINDINGS {
            let hint = format!("{}: {}", binding.keys_label, binding.description);
            assert!(line.contains(&hint), "missing {:?} in {:?}", hint, line);
        }
        assert!(line.contains(&format!("v{}", VERSION)));
    }

    #[test]
    fn narrow_footer_drops_trailing_hints_but_keeps_version() {
        let line = rendered(40);
        assert!(line.contains("+/→: Increment"));
        assert!(!line.contains("Decrement"));
        assert!(!line.contains("Quit"));
        assert!(line.contains(&format!("v{}", VERSION)));
    }
}
