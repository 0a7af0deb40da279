use tracing::debug;

use crate::config::NotifyConfig;
use crate::core::{Category, CategoryClassifier, CourseChangeSet, FileAggregator};
use crate::error::{NotifyError, Result};

use super::message::NotificationMessage;
use super::renderer::MessageRenderer;

/// Turns batches of course changes into an ordered list of notifications
#[derive(Debug, Clone)]
pub struct DiffMessageBuilder {
    config: NotifyConfig,
    classifier: CategoryClassifier,
}

impl DiffMessageBuilder {
    pub fn new(config: NotifyConfig) -> Self {
        let classifier = CategoryClassifier::new(&config.categories);
        Self { config, classifier }
    }

    pub fn config(&self) -> &NotifyConfig {
        &self.config
    }

    /// Render every course in input order into one flat message list
    pub fn build(&self, courses: &[CourseChangeSet]) -> Result<Vec<NotificationMessage>> {
        let mut messages = Vec::new();
        for course in courses {
            messages.extend(self.build_course(course)?);
        }

        debug!("Built {} messages for {} courses", messages.len(), courses.len());
        Ok(messages)
    }

    /// Render a single course, categories in their fixed order
    pub fn build_course(&self, course: &CourseChangeSet) -> Result<Vec<NotificationMessage>> {
        let course_name = course.display_name();

        let mut aggregator = FileAggregator::new(&self.classifier);
        aggregator.extend(&course.files);

        debug!(
            "Course '{}': {} files in {} categories",
            course_name,
            aggregator.total_files(),
            aggregator.populated_buckets()
        );

        let renderer = MessageRenderer::new(&self.config.emoji);
        let mut messages = Vec::new();
        let mut rendered_files = 0;

        for category in Category::ALL {
            let Some(files) = aggregator.bucket(category) else {
                continue;
            };
            if files.is_empty() {
                continue;
            }

            rendered_files += files.len();
            messages.extend(renderer.render(category, files, course_name)?);
        }

        if rendered_files != course.files.len() {
            return Err(NotifyError::ContractViolation(format!(
                "course '{}': rendered {} of {} files",
                course_name,
                rendered_files,
                course.files.len()
            )));
        }

        Ok(messages)
    }
}

impl Default for DiffMessageBuilder {
    fn default() -> Self {
        Self::new(NotifyConfig::default())
    }
}

/// Render course changes with the default configuration
pub fn create_diff_messages(courses: &[CourseChangeSet]) -> Result<Vec<NotificationMessage>> {
    DiffMessageBuilder::default().build(courses)
}
