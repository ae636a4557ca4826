use crate::app::{ComposerField, ForumState, ReplyField};
use crate::logic::relative_age;
use crate::models::{ForumPost, PostCategory};
use crate::ui::components::{InputWidget, SelectWidget};
use crate::ui::Theme;
use chrono::{DateTime, Utc};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

/// Discussion forum with three modes: post list, open-post detail with a
/// reply form, and the new-post composer.
pub struct ForumScreen<'a> {
    posts: &'a [&'a ForumPost],
    state: &'a ForumState,
    selected_post: Option<&'a ForumPost>,
    composer_open: bool,
    now: DateTime<Utc>,
}

impl<'a> ForumScreen<'a> {
    pub fn new(posts: &'a [&'a ForumPost], state: &'a ForumState) -> Self {
        Self {
            posts,
            state,
            selected_post: None,
            composer_open: false,
            now: Utc::now(),
        }
    }

    pub fn selected_post(mut self, post: Option<&'a ForumPost>) -> Self {
        self.selected_post = post;
        self
    }

    pub fn composer_open(mut self, open: bool) -> Self {
        self.composer_open = open;
        self
    }
}

impl Widget for ForumScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Min(10),   // Body
                Constraint::Length(1), // Nav
            ])
            .split(area);

        Paragraph::new(Span::styled("Community Forum", Theme::title())).render(chunks[0], buf);

        if self.composer_open {
            self.render_composer(chunks[1], buf);
            self.render_nav(chunks[2], buf, "composer");
        } else if let Some(post) = self.selected_post {
            self.render_detail(post, chunks[1], buf);
            self.render_nav(chunks[2], buf, "detail");
        } else {
            self.render_list(chunks[1], buf);
            self.render_nav(chunks[2], buf, "list");
        }
    }
}

impl ForumScreen<'_> {
    fn render_nav(&self, area: Rect, buf: &mut Buffer, mode: &str) {
        let spans = match mode {
            "composer" => vec![
                Span::styled("[Tab]", Theme::nav_key()),
                Span::styled("Field ", Theme::nav_label()),
                Span::styled("[←/→]", Theme::nav_key()),
                Span::styled("Category ", Theme::nav_label()),
                Span::styled("[Ctrl-s]", Theme::nav_key()),
                Span::styled("Submit ", Theme::nav_label()),
                Span::styled("[Esc]", Theme::nav_key()),
                Span::styled("Cancel", Theme::nav_label()),
            ],
            "detail" => vec![
                Span::styled("[Tab]", Theme::nav_key()),
                Span::styled("Field ", Theme::nav_label()),
                Span::styled("[Ctrl-s]", Theme::nav_key()),
                Span::styled("Reply ", Theme::nav_label()),
                Span::styled("[Esc]", Theme::nav_key()),
                Span::styled("Back", Theme::nav_label()),
            ],
            _ => vec![
                Span::styled("[n]", Theme::nav_key()),
                Span::styled("New Post ", Theme::nav_label()),
                Span::styled("[f]", Theme::nav_key()),
                Span::styled("Filter ", Theme::nav_label()),
                Span::styled("[↑/↓]", Theme::nav_key()),
                Span::styled("Select ", Theme::nav_label()),
                Span::styled("[Enter]", Theme::nav_key()),
                Span::styled("Open ", Theme::nav_label()),
                Span::styled("[q]", Theme::nav_key()),
                Span::styled("Quit", Theme::nav_label()),
            ],
        };
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let filter_label = self
            .state
            .filter_category()
            .map(|c| c.as_str())
            .unwrap_or("All");

        let block = Block::default()
            .title(format!("Posts ({}) - {}", self.posts.len(), filter_label))
            .borders(Borders::ALL)
            .border_style(Theme::border());
        let inner = block.inner(area);
        block.render(area, buf);

        if self.posts.is_empty() {
            Paragraph::new(Span::styled(
                "No posts in this category yet. Press [n] to start a discussion.",
                Theme::dim(),
            ))
            .wrap(Wrap { trim: true })
            .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .posts
            .iter()
            .enumerate()
            .map(|(i, post)| {
                let title_style = if i == self.state.selected_index {
                    Theme::selected()
                } else {
                    Theme::header()
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(post.title.clone(), title_style),
                        Span::styled(
                            format!(" [{}]", post.category.as_str()),
                            Style::default().fg(post.category.color()),
                        ),
                    ]),
                    Line::from(Span::styled(
                        format!(
                            "  by {} · {} · {} replies",
                            post.author_name,
                            relative_age(post.created_at, self.now),
                            post.replies.len()
                        ),
                        Theme::dim(),
                    )),
                    Line::from(""),
                ])
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_detail(&self, post: &ForumPost, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),    // Post + replies
                Constraint::Length(8), // Reply form
            ])
            .split(area);

        let block = Block::default()
            .title(post.title.clone())
            .borders(Borders::ALL)
            .border_style(Theme::border());
        let inner = block.inner(chunks[0]);
        block.render(chunks[0], buf);

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("[{}] ", post.category.as_str()),
                    Style::default().fg(post.category.color()),
                ),
                Span::styled(
                    format!(
                        "by {} · {}",
                        post.author_name,
                        relative_age(post.created_at, self.now)
                    ),
                    Theme::dim(),
                ),
            ]),
            Line::from(""),
            Line::from(Span::raw(post.content.clone())),
            Line::from(""),
            Line::from(Span::styled(
                format!("Replies ({})", post.replies.len()),
                Theme::header(),
            )),
        ];

        for reply in &post.replies {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!(
                    "{} · {}",
                    reply.author_name,
                    relative_age(reply.created_at, self.now)
                ),
                Theme::dim(),
            )));
            lines.push(Line::from(Span::raw(format!("  {}", reply.content))));
        }

        Paragraph::new(lines).wrap(Wrap { trim: true }).render(inner, buf);

        self.render_reply_form(chunks[1], buf);
    }

    fn render_reply_form(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Write a Reply")
            .borders(Borders::ALL)
            .border_style(Theme::border());
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3)])
            .split(inner);

        InputWidget::new("Your Name", &self.state.reply.author)
            .focused(self.state.reply.focused_field == ReplyField::Author)
            .render(rows[0], buf);
        InputWidget::new("Reply", &self.state.reply.content)
            .placeholder("Share your experience...")
            .focused(self.state.reply.focused_field == ReplyField::Content)
            .render(rows[1], buf);
    }

    fn render_composer(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("New Post")
            .borders(Borders::ALL)
            .border_style(Theme::border_focused());
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(3),
            ])
            .split(inner);

        let composer = &self.state.composer;

        InputWidget::new("Your Name", &composer.author)
            .focused(composer.focused_field == ComposerField::Author)
            .render(rows[0], buf);

        let categories: Vec<&str> = PostCategory::all().iter().map(|c| c.as_str()).collect();
        SelectWidget::new("Category", &categories, composer.category_index)
            .focused(composer.focused_field == ComposerField::Category)
            .render(rows[1], buf);

        InputWidget::new("Title", &composer.title)
            .placeholder("What is your question about?")
            .focused(composer.focused_field == ComposerField::Title)
            .render(rows[2], buf);

        InputWidget::new("Content", &composer.content)
            .placeholder("Describe your question or share your knowledge...")
            .focused(composer.focused_field == ComposerField::Content)
            .render(rows[3], buf);
    }
}
