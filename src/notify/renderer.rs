//! Per-category formatting of file changes into notification messages

use crate::config::EmojiConfig;
use crate::core::{Category, FileChangeEvent};
use crate::error::{NotifyError, Result};

use super::datetime::format_event_datetime;
use super::message::NotificationMessage;

/// Bullet used for each file in a digest body
const BULLET: &str = "●";

/// Renders buckets of file changes into titled messages
#[derive(Debug, Clone)]
pub struct MessageRenderer<'a> {
    emoji: &'a EmojiConfig,
}

impl<'a> MessageRenderer<'a> {
    pub fn new(emoji: &'a EmojiConfig) -> Self {
        Self { emoji }
    }

    /// Render one category bucket of a course.
    ///
    /// Digest categories yield a single message for the whole bucket, the
    /// others yield one message per file.
    pub fn render(
        &self,
        category: Category,
        files: &[&FileChangeEvent],
        course_name: &str,
    ) -> Result<Vec<NotificationMessage>> {
        if files.is_empty() {
            return Ok(Vec::new());
        }

        let messages = match category {
            Category::Assign => vec![self.assign_digest(files, course_name)],
            Category::Folder | Category::Resource => {
                vec![self.resource_digest(files, course_name)]
            }
            Category::Misc => vec![self.misc_digest(files, course_name)],
            Category::Calendar => files
                .iter()
                .map(|file| self.calendar_message(file, course_name))
                .collect::<Result<Vec<_>>>()?,
            Category::Forum => files
                .iter()
                .map(|file| self.forum_message(file, course_name))
                .collect(),
            Category::Quiz => files
                .iter()
                .map(|file| self.file_message(file, course_name, &self.emoji.quiz))
                .collect(),
        };

        Ok(messages)
    }

    /// `⏰ {event} @ {time}` from a `<date> <time> <event name>` filename
    pub fn calendar_message(
        &self,
        file: &FileChangeEvent,
        course_name: &str,
    ) -> Result<NotificationMessage> {
        let mut parts = file.content_filename.splitn(3, ' ');
        let (date, time, event_name) = match (parts.next(), parts.next(), parts.next()) {
            (Some(date), Some(time), Some(name)) => (date, time, name),
            _ => {
                return Err(NotifyError::Parse {
                    filename: file.content_filename.clone(),
                })
            }
        };

        let when = format_event_datetime(date, time)?;
        let title = with_emoji(&self.emoji.calendar, &format!("{} @ {}", event_name, when));

        Ok(NotificationMessage::new(title, self.course_line(course_name))
            .with_source_url(file.content_fileurl.clone()))
    }

    pub fn forum_message(&self, file: &FileChangeEvent, course_name: &str) -> NotificationMessage {
        let title = with_emoji(&self.emoji.forum, file.filepath_tail());

        NotificationMessage::new(title, self.course_line(course_name))
            .with_source_url(file.content_fileurl.clone())
    }

    /// A single-file message titled with the filename
    pub fn file_message(
        &self,
        file: &FileChangeEvent,
        course_name: &str,
        emoji: &str,
    ) -> NotificationMessage {
        let title = with_emoji(emoji, &file.content_filename);

        NotificationMessage::new(title, self.course_line(course_name))
            .with_source_url(file.content_fileurl.clone())
    }

    pub fn assign_digest(&self, files: &[&FileChangeEvent], course_name: &str) -> NotificationMessage {
        self.digest(files, course_name, "assignment file", &self.emoji.assign, true, true)
    }

    pub fn resource_digest(&self, files: &[&FileChangeEvent], course_name: &str) -> NotificationMessage {
        self.digest(files, course_name, "file", &self.emoji.resource, false, false)
    }

    pub fn misc_digest(&self, files: &[&FileChangeEvent], course_name: &str) -> NotificationMessage {
        self.digest(files, course_name, "misc", &self.emoji.misc, false, true)
    }

    fn digest(
        &self,
        files: &[&FileChangeEvent],
        course_name: &str,
        keyword: &str,
        emoji: &str,
        with_content_type: bool,
        with_status: bool,
    ) -> NotificationMessage {
        let title = with_emoji(emoji, &format!("{} {} updates", files.len(), keyword));

        let mut text = self.course_line(course_name);
        text.push('\n');
        for file in files {
            text.push_str(&format!("{} {}", BULLET, file.content_filename));
            if with_content_type {
                text.push_str(&format!(" ({})", file.content_type_display()));
            }
            if with_status {
                if let Some(status) = file.status().annotation() {
                    text.push_str(&format!(" ({})", status));
                }
            }
            text.push('\n');
        }
        let text = text.trim_end().to_string();

        NotificationMessage::new(title, text)
    }

    fn course_line(&self, course_name: &str) -> String {
        with_emoji(&self.emoji.course, course_name)
    }
}

fn with_emoji(emoji: &str, rest: &str) -> String {
    if emoji.is_empty() {
        rest.to_string()
    } else {
        format!("{} {}", emoji, rest)
    }
}
