use crate::counter::{ViewNode, ViewTree, DISPLAY_CLASS, TRIGGER_CLASS};
use crate::ui::app::App;
use crate::ui::controls::ControlsState;
use crate::ui::footer::footer;
use crate::ui::header::Header;
use crate::ui::layout::{counter_regions, layout_regions, trigger_rects};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK, TRIGGER_BORDER,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer_area) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.generation(), app.renders()), header);
    frame.render_widget(Clear, body);

    let regions = counter_regions(body);
    render_view(frame, body, &app.view(), app.count(), app.controls());

    if app.show_turn_log() && regions.turn_log.height > 0 {
        let lines: Vec<Line> = app
            .turn_log()
            .iter()
            .rev()
            .map(|record| Line::from(record.summary()))
            .collect();
        let block = Block::default()
            .title(" Recent turns ")
            .borders(Borders::TOP)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let widget = Paragraph::new(lines)
            .style(Style::default().fg(HEADER_TEXT))
            .block(block);
        frame.render_widget(widget, regions.turn_log);
    }

    frame.render_widget(footer(footer_area), footer_area);
}

/// Paint a counter view tree into `body`.
///
/// Text nodes go to the display row; triggers fill the button row in order.
pub fn render_view(
    frame: &mut Frame<'_>,
    body: Rect,
    tree: &ViewTree,
    count: i64,
    controls: &ControlsState,
) {
    let regions = counter_regions(body);
    let mut buttons = trigger_rects(regions.triggers).into_iter();

    for node in &tree.children {
        match node {
            ViewNode::Text { class, content } => {
                let widget = Paragraph::new(content.clone())
                    .style(text_style(class, count))
                    .alignment(Alignment::Center);
                frame.render_widget(widget, centered_line(regions.display));
            }
            ViewNode::Trigger {
                class,
                label,
                intent,
            } => {
                let Some((rect, _)) = buttons.next() else {
                    continue;
                };
                let focused = controls.is_focused(*intent);
                let widget = Paragraph::new(*label)
                    .alignment(Alignment::Center)
                    .style(trigger_style(class, focused))
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(trigger_border(focused)),
                    );
                frame.render_widget(widget, rect);
            }
        }
    }
}

fn centered_line(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: area.height.min(1),
    }
}

fn text_style(class: &str, count: i64) -> Style {
    if class != DISPLAY_CLASS {
        return Style::default().fg(HEADER_TEXT);
    }
    let color = match count.signum() {
        1 => STATUS_OK,
        -1 => STATUS_ERROR,
        _ => HEADER_TEXT,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn trigger_style(class: &str, focused: bool) -> Style {
    let base = if class == TRIGGER_CLASS {
        Style::default().fg(HEADER_TEXT)
    } else {
        Style::default()
    };
    if focused {
        base.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD)
    } else {
        base
    }
}

fn trigger_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(TRIGGER_BORDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;
    use crate::counter::CounterIntent;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn draws_count_and_triggers() {
        let mut app = App::new(&UiConfig::default());
        app.activate(CounterIntent::Increment);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Count: 3"));
        assert!(text.contains("Decrement"));
        assert!(text.contains("Reset"));
        assert!(text.contains("Increment"));
        assert!(text.contains("#1 increment: 0 -> 3"));
    }

    #[test]
    fn turn_log_hidden_when_disabled() {
        let config = UiConfig {
            show_turn_log: false,
            ..UiConfig::default()
        };
        let mut app = App::new(&config);
        app.activate(CounterIntent::Decrement);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Count: -3"));
        assert!(!text.contains("Recent turns"));
    }
}
