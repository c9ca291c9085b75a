use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::api::{Media, Topic};
use crate::app::state::AppState;
use crate::app::views::Fetch;
use crate::ui::spinner;

pub fn render_topic_list(f: &mut Frame, area: Rect, state: &AppState) {
    let view = &state.topic_list;
    let block = Block::default().borders(Borders::ALL).title("Topics");

    match &view.state {
        Fetch::Idle | Fetch::Loading => {
            let text = format!("{} Loading topics...", spinner(state.tick));
            f.render_widget(Paragraph::new(text).block(block), area);
        }
        Fetch::Errored(message) => render_error(f, area, block, message),
        Fetch::Loaded(topics) if topics.is_empty() => {
            let text = "No topics yet. Press 'n' to create one.";
            f.render_widget(Paragraph::new(text).style(Style::default().fg(Color::Gray)).block(block), area);
        }
        Fetch::Loaded(topics) => {
            let items: Vec<ListItem> = topics.iter().map(topic_row).collect();

            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
                .highlight_symbol("> ");

            let mut list_state = ListState::default();
            list_state.select(Some(view.selected_index));
            f.render_stateful_widget(list, area, &mut list_state);
        }
    }
}

fn topic_row(topic: &Topic) -> ListItem<'_> {
    let mut spans = vec![
        Span::styled(format!("#{:<5}", topic.topic_id), Style::default().fg(Color::Gray)),
        Span::styled(topic.title.as_str(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
    ];
    if topic.is_new {
        spans.push(Span::styled(" NEW", Style::default().fg(Color::Green)));
    }
    spans.push(Span::styled(
        format!(" ({} tips)", topic.tip_total()),
        Style::default().fg(Color::Gray),
    ));
    if !topic.description.is_empty() {
        spans.push(Span::raw(" - "));
        spans.push(Span::styled(topic.description.as_str(), Style::default().fg(Color::Cyan)));
    }

    ListItem::new(Line::from(spans))
}

pub fn render_topic_detail(f: &mut Frame, area: Rect, state: &AppState) {
    let view = &state.topic_detail;
    let title = format!("Topic {}", view.topic_id);
    let block = Block::default().borders(Borders::ALL).title(title);

    let topic = match &view.state {
        Fetch::Idle | Fetch::Loading => {
            let text = format!("{} Loading topic...", spinner(state.tick));
            f.render_widget(Paragraph::new(text).block(block), area);
            return;
        }
        Fetch::Errored(message) => {
            render_error(f, area, block, message);
            return;
        }
        Fetch::Loaded(topic) => topic,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Topic header
            Constraint::Min(0),    // Tips
        ])
        .split(area);

    let mut header = vec![
        Line::from(Span::styled(
            topic.title.as_str(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(topic.description.as_str()),
    ];
    if let Some(media) = &topic.media {
        header.push(media_line(media));
    }
    header.push(Line::from(Span::styled(
        format!(
            "Created {} | Updated {}",
            topic.created_at.format("%Y-%m-%d %H:%M"),
            topic.updated_at.format("%Y-%m-%d %H:%M")
        ),
        Style::default().fg(Color::Gray),
    )));

    let header = Paragraph::new(header).block(block).wrap(Wrap { trim: true });
    f.render_widget(header, chunks[0]);

    let mut lines = Vec::new();
    if topic.tips.is_empty() {
        lines.push(Line::from(Span::styled("This topic has no tips yet.", Style::default().fg(Color::Gray))));
    }
    for tip in &topic.tips {
        lines.push(Line::from(vec![
            Span::styled(format!("{}. ", tip.display_order), Style::default().fg(Color::Gray)),
            Span::styled(tip.title.as_str(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(format!("   {}", tip.description)));
        if let Some(media) = &tip.media {
            let mut line = media_line(media);
            line.spans.insert(0, Span::raw("   "));
            lines.push(line);
        }
        lines.push(Line::from(""));
    }

    let tips = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(format!("Tips ({})", topic.tips.len())))
        .wrap(Wrap { trim: false })
        .scroll((view.scroll, 0));
    f.render_widget(tips, chunks[1]);
}

fn media_line(media: &Media) -> Line<'_> {
    let mut spans = vec![
        Span::styled(format!("[{}] ", media.kind), Style::default().fg(Color::Magenta)),
        Span::styled(media.url.as_str(), Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED)),
    ];
    if let Some(alt) = &media.alt_text {
        spans.push(Span::styled(format!(" ({})", alt), Style::default().fg(Color::Gray)));
    }
    Line::from(spans)
}

fn render_error(f: &mut Frame, area: Rect, block: Block<'_>, message: &str) {
    let text = vec![
        Line::from(Span::styled(message, Style::default().fg(Color::Red))),
        Line::from(""),
        Line::from(Span::styled("Press 'r' to try again.", Style::default().fg(Color::Gray))),
    ];
    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
