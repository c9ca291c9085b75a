use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "Welcome to the Help Center",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Browse topics and their tips, or share a new topic with your team."),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter/2", Style::default().fg(Color::Cyan)),
            Span::raw(" - Browse topics   "),
            Span::styled("3/n", Style::default().fg(Color::Green)),
            Span::raw(" - New topic   "),
            Span::styled(":", Style::default().fg(Color::Magenta)),
            Span::raw(" - Command (go <path>, topic <id>, back, q)"),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Home"))
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
