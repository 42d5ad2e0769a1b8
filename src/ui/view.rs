//! Menu board screen rendering
//!
//! Draws the whole screen from read-only controller state: title,
//! counts row, course tabs, the add-dish form, and the item list
//! filtered by the active tab.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, List, ListItem, Paragraph, Tabs};

use crate::app::controller::AppController;
use crate::app::state::{FormField, FormState};
use crate::domain::menu::Course;
use crate::ui::theme;

/// Renders one frame of the menu board
pub fn draw(frame: &mut Frame, app: &AppController) {
    let [title, counts, tabs, form, list] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(6),
        Constraint::Min(0),
    ])
    .areas(frame.area());

    draw_title(frame, title);
    draw_counts(frame, counts, app);
    draw_tabs(frame, tabs, app.filter());
    draw_form(frame, form, app.form());
    draw_list(frame, list, app);
}

fn draw_title(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new("NU CHEF").style(theme::title()).centered(),
        area,
    );
}

fn draw_counts(frame: &mut Frame, area: Rect, app: &AppController) {
    let store = app.store();
    let mut spans = vec![Span::styled(
        format!("Total: {}", store.count_all()),
        theme::counts(),
    )];
    for course in Course::ALL {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("{}: {}", course.tab_label(), store.count_by_course(course)),
            theme::counts(),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).centered(), area);
}

fn draw_tabs(frame: &mut Frame, area: Rect, filter: Course) {
    let tabs = Tabs::new(Course::ALL.iter().map(|course| course.tab_label()))
        .select(filter.index())
        .style(theme::tab())
        .highlight_style(theme::active_tab())
        .block(Block::bordered().title("Courses"));
    frame.render_widget(tabs, area);
}

fn draw_form(frame: &mut Frame, area: Rect, form: &FormState) {
    let mut lines: Vec<Line> = FormField::ALL
        .iter()
        .map(|&field| field_line(form, field))
        .collect();
    lines.push(Line::from(vec![
        Span::styled(format!("{:<12} ", "Course"), theme::field_label()),
        Span::raw(form.draft.course.label()),
    ]));
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Tab field · Up/Down course · Enter add dish · Left/Right tabs · Esc quit",
        theme::hint(),
    ));
    frame.render_widget(Paragraph::new(Text::from(lines)), area);
}

fn field_line(form: &FormState, field: FormField) -> Line<'_> {
    let focused = form.focus == field;
    let label_style = if focused {
        theme::focused_field_label()
    } else {
        theme::field_label()
    };
    let mut spans = vec![
        Span::styled(format!("{:<12} ", field.label()), label_style),
        Span::raw(form.field(field)),
    ];
    if focused {
        spans.push(Span::styled("█", theme::hint()));
    }
    Line::from(spans)
}

fn draw_list(frame: &mut Frame, area: Rect, app: &AppController) {
    let filter = app.filter();
    let block = Block::bordered().title(filter.tab_label());

    let items: Vec<ListItem> = app
        .store()
        .filter_by_course(filter)
        .map(|item| {
            ListItem::new(Text::from(vec![
                Line::styled(item.name.clone(), theme::item_name()),
                Line::raw(item.description.clone()),
                Line::styled(item.course.label(), theme::item_course()),
                Line::styled(format!("R {:.2}", item.price), theme::item_price()),
                Line::raw(""),
            ]))
        })
        .collect();

    if items.is_empty() {
        let placeholder = format!("No {} on the menu yet", filter.tab_label().to_lowercase());
        frame.render_widget(
            Paragraph::new(placeholder).style(theme::hint()).block(block),
            area,
        );
    } else {
        frame.render_widget(List::new(items).block(block), area);
    }
}
