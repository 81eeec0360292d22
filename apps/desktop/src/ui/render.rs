//! Drawing of the form and the notice popup.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::app::{App, Focus, Notice, NoticeKind, ResultView};

const FOOTER_HINTS: &str =
    "Tab/Shift-Tab move  ←/→ field  Enter run  F1 search  F2 update  F3 logs  F4 add  Esc quit";

/// Draws the whole form; the notice popup, if any, goes on top.
pub fn draw(frame: &mut Frame, app: &App, title: &str) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(3), // search
            Constraint::Length(6), // result
            Constraint::Length(3), // stock change
            Constraint::Min(4),    // logs
            Constraint::Length(3), // add product
            Constraint::Length(1), // hints
        ])
        .split(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from(title.to_string()).bold().centered()),
        rows[0],
    );

    draw_search_row(frame, app, rows[1]);
    draw_result(frame, app, rows[2]);
    draw_stock_row(frame, app, rows[3]);
    draw_logs(frame, app, rows[4]);
    draw_add_row(frame, app, rows[5]);

    frame.render_widget(
        Paragraph::new(Line::from(FOOTER_HINTS).dim()),
        rows[6],
    );

    if let Some(notice) = &app.notice {
        draw_notice(frame, notice);
    }
}

fn draw_search_row(frame: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(22)])
        .split(area);

    draw_input(frame, app, Focus::SearchValue, "Search Product", cols[0]);

    let focused = app.focus == Focus::SearchField;
    let selector = Line::from(vec![
        Span::raw("◀ "),
        Span::styled(app.search_field.label(), Style::default().fg(Color::Cyan)),
        Span::raw(" ▶"),
    ]);
    frame.render_widget(
        Paragraph::new(selector).block(field_block("Field", focused)),
        cols[1],
    );
}

fn draw_result(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = match &app.result {
        ResultView::Empty => Vec::new(),
        ResultView::Product(product) => product
            .summary_lines()
            .into_iter()
            .map(|l| Line::from(l).fg(Color::Blue))
            .collect(),
        ResultView::Message(message) => vec![Line::from(message.clone())],
    };

    frame.render_widget(
        Paragraph::new(lines).block(panel_block("Result")),
        area,
    );
}

fn draw_stock_row(frame: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(20)])
        .split(area);

    draw_input(frame, app, Focus::Delta, "Stock Change (+/-)", cols[0]);
    draw_input(frame, app, Focus::Person, "Updated By", cols[1]);
}

fn draw_logs(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app.logs.iter().map(|l| Line::from(l.as_str())).collect();
    let title = match &app.logs_for {
        Some(identifier) => format!("Logs: {}", identifier),
        None => "Logs".to_string(),
    };
    frame.render_widget(
        Paragraph::new(lines).block(panel_block(&title)),
        area,
    );
}

fn draw_add_row(frame: &mut Frame, app: &App, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(22),
            Constraint::Percentage(38),
            Constraint::Percentage(15),
            Constraint::Percentage(25),
        ])
        .split(area);

    draw_input(frame, app, Focus::AddIdentifier, "Identifier", cols[0]);
    draw_input(frame, app, Focus::AddDescription, "Description", cols[1]);
    draw_input(frame, app, Focus::AddQuantity, "Quantity", cols[2]);
    draw_input(frame, app, Focus::AddPerson, "Added By", cols[3]);
}

/// Renders one text input and, when it has focus, places the cursor in it.
fn draw_input(frame: &mut Frame, app: &App, focus: Focus, label: &str, area: Rect) {
    let Some(input) = app.input(focus) else {
        return;
    };
    let focused = app.focus == focus;

    // Keep the cursor visible in narrow boxes by scrolling horizontally.
    let inner_width = area.width.saturating_sub(2) as usize;
    let skip = (input.cursor() + 1).saturating_sub(inner_width);
    let visible: String = input.value().chars().skip(skip).collect();

    frame.render_widget(
        Paragraph::new(visible).block(field_block(label, focused)),
        area,
    );

    // Boxes narrower than their borders have no room for a cursor.
    if focused && app.notice.is_none() && inner_width > 0 {
        let col = input
            .cursor()
            .saturating_sub(skip)
            .min(inner_width.saturating_sub(1)) as u16;
        let x = area.x.saturating_add(1).saturating_add(col);
        frame.set_cursor_position((x, area.y.saturating_add(1)));
    }
}

fn field_block(label: &str, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(format!(" {} ", label))
}

fn panel_block(label: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", label))
}

fn draw_notice(frame: &mut Frame, notice: &Notice) {
    let color = match notice.kind {
        NoticeKind::Info => Color::Green,
        NoticeKind::Warning => Color::Yellow,
        NoticeKind::Error => Color::Red,
    };

    let area = centered_rect(56, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            format!(" {} ", notice.title),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));

    let text = vec![
        Line::from(notice.message.clone()),
        Line::from(""),
        Line::from("Press any key").dim(),
    ];

    frame.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::ProductDto;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use stockroom_core::SearchField;

    fn render_to_string(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| draw(f, app, "Inventory System"))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut lines = Vec::new();
        for y in 0..height {
            let mut line = String::new();
            for x in 0..width {
                line.push_str(buffer[(x, y)].symbol());
            }
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    #[test]
    fn test_empty_form_shows_sections() {
        let output = render_to_string(&App::new(), 100, 30);
        for expected in [
            "Inventory System",
            "Search Product",
            "Identifier",
            "Stock Change (+/-)",
            "Updated By",
            "Logs",
            "Added By",
            "F4 add",
        ] {
            assert!(output.contains(expected), "missing {expected:?} in:\n{output}");
        }
    }

    #[test]
    fn test_product_and_logs_render() {
        let mut app = App::new();
        app.search_field = SearchField::Description;
        app.result = ResultView::Product(ProductDto {
            identifier: "SKU1".to_string(),
            description: "Widget".to_string(),
            quantity: 7,
            last_editor: Some("bob".to_string()),
        });
        app.logs = vec!["[2024-03-01 09:30:00] bob -> -3".to_string()];
        app.logs_for = Some("SKU1".to_string());

        let output = render_to_string(&app, 100, 30);
        assert!(output.contains("Description"), "{output}");
        assert!(output.contains("Quantity:    7"), "{output}");
        assert!(output.contains("Last editor: bob"), "{output}");
        assert!(output.contains("bob -> -3"), "{output}");
        assert!(output.contains("Logs: SKU1"), "{output}");
    }

    #[test]
    fn test_notice_popup() {
        let mut app = App::new();
        app.notice = Some(Notice::info("Success", "Stock updated for SKU1"));

        let output = render_to_string(&app, 100, 30);
        assert!(output.contains("Success"), "{output}");
        assert!(output.contains("Stock updated for SKU1"), "{output}");
        assert!(output.contains("Press any key"), "{output}");
    }

    #[test]
    fn test_cursor_scrolls_in_narrow_input() {
        let mut app = App::new();
        app.focus = Focus::AddQuantity;
        app.add_quantity.set("1234567890123456789");

        // Must not panic when the value is wider than its box.
        let output = render_to_string(&app, 60, 24);
        assert!(output.contains("6789"), "{output}");
    }

    #[test]
    fn test_every_focus_renders_on_narrow_terminals() {
        for width in [10, 20, 30, 40, 41] {
            for focus in [
                Focus::SearchValue,
                Focus::SearchField,
                Focus::Delta,
                Focus::Person,
                Focus::AddIdentifier,
                Focus::AddDescription,
                Focus::AddQuantity,
                Focus::AddPerson,
            ] {
                let mut app = App::new();
                app.focus = focus;
                if let Some(input) = match focus {
                    Focus::SearchValue => Some(&mut app.search_value),
                    Focus::Delta => Some(&mut app.delta),
                    Focus::AddQuantity => Some(&mut app.add_quantity),
                    _ => None,
                } {
                    input.set("12345");
                }

                // Must not panic, whatever the box width.
                render_to_string(&app, width, 24);
            }
        }
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 40, 5);
        let popup = centered_rect(56, 7, area);
        assert_eq!(popup, Rect::new(0, 0, 40, 5));
    }
}
