use std::fmt;
use serde::{Deserialize, Serialize};

/// How a file changed since the last check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    New,
    Modified,
    Deleted,
    Moved,
}

impl ChangeStatus {
    /// Derive a single status from the raw change flags.
    ///
    /// Flags are checked in priority order: modified, deleted, moved.
    /// A file with none of them set is new.
    pub fn from_flags(modified: bool, deleted: bool, moved: bool) -> Self {
        let checks = [
            (modified, ChangeStatus::Modified),
            (deleted, ChangeStatus::Deleted),
            (moved, ChangeStatus::Moved),
        ];

        checks
            .into_iter()
            .find(|(flag, _)| *flag)
            .map(|(_, status)| status)
            .unwrap_or(ChangeStatus::New)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeStatus::New => "new",
            ChangeStatus::Modified => "modified",
            ChangeStatus::Deleted => "deleted",
            ChangeStatus::Moved => "moved",
        }
    }

    /// Text shown next to a file in a digest; new files carry none
    pub fn annotation(&self) -> Option<&'static str> {
        match self {
            ChangeStatus::New => None,
            other => Some(other.as_str()),
        }
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single changed artifact inside a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChangeEvent {
    pub content_filename: String,
    pub content_filepath: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_fileurl: Option<String>,
    pub content_type: String,
    pub module_modname: String,
    #[serde(default)]
    pub modified: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub moved: bool,
}

impl FileChangeEvent {
    pub fn new(module_modname: &str, content_type: &str, filename: &str) -> Self {
        Self {
            content_filename: filename.to_string(),
            content_filepath: format!("/ {}", filename),
            content_fileurl: None,
            content_type: content_type.to_string(),
            module_modname: module_modname.to_string(),
            modified: false,
            deleted: false,
            moved: false,
        }
    }

    pub fn with_filepath(mut self, filepath: &str) -> Self {
        self.content_filepath = filepath.to_string();
        self
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.content_fileurl = Some(url.to_string());
        self
    }

    pub fn modified(mut self) -> Self {
        self.modified = true;
        self
    }

    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    pub fn moved(mut self) -> Self {
        self.moved = true;
        self
    }

    pub fn status(&self) -> ChangeStatus {
        ChangeStatus::from_flags(self.modified, self.deleted, self.moved)
    }

    /// Human readable name for `content_type`, falling back to the raw value
    pub fn content_type_display(&self) -> &str {
        match self.content_type.as_str() {
            "assign_file" => "Assigment File",
            "submission_file" => "Submission File",
            other => other,
        }
    }

    /// `content_filepath` without its leading structural token
    pub fn filepath_tail(&self) -> &str {
        self.content_filepath
            .split_once(' ')
            .map(|(_, rest)| rest)
            .unwrap_or(&self.content_filepath)
    }
}

/// All detected changes for one course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseChangeSet {
    pub fullname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite_name_with: Option<String>,
    #[serde(default)]
    pub files: Vec<FileChangeEvent>,
}

impl CourseChangeSet {
    pub fn new(fullname: &str) -> Self {
        Self {
            fullname: fullname.to_string(),
            overwrite_name_with: None,
            files: Vec::new(),
        }
    }

    pub fn with_display_name(mut self, name: &str) -> Self {
        self.overwrite_name_with = Some(name.to_string());
        self
    }

    pub fn with_file(mut self, file: FileChangeEvent) -> Self {
        self.files.push(file);
        self
    }

    /// The override name if one is set, otherwise the canonical full name
    pub fn display_name(&self) -> &str {
        match self.overwrite_name_with.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.fullname,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_priority_order() {
        assert_eq!(ChangeStatus::from_flags(false, false, false), ChangeStatus::New);
        assert_eq!(ChangeStatus::from_flags(true, false, false), ChangeStatus::Modified);
        assert_eq!(ChangeStatus::from_flags(false, true, false), ChangeStatus::Deleted);
        assert_eq!(ChangeStatus::from_flags(false, false, true), ChangeStatus::Moved);

        // Higher priority flags win when several are set
        assert_eq!(ChangeStatus::from_flags(true, true, true), ChangeStatus::Modified);
        assert_eq!(ChangeStatus::from_flags(false, true, true), ChangeStatus::Deleted);
    }

    #[test]
    fn test_status_annotation() {
        assert_eq!(ChangeStatus::New.annotation(), None);
        assert_eq!(ChangeStatus::Modified.annotation(), Some("modified"));
        assert_eq!(ChangeStatus::Moved.to_string(), "moved");
    }

    #[test]
    fn test_file_event_builder() {
        let event = FileChangeEvent::new("assign", "assign_file", "HW1.pdf")
            .with_url("https://moodle.example/hw1")
            .deleted();

        assert_eq!(event.module_modname, "assign");
        assert_eq!(event.content_fileurl.as_deref(), Some("https://moodle.example/hw1"));
        assert_eq!(event.status(), ChangeStatus::Deleted);
    }

    #[test]
    fn test_content_type_display() {
        let assign = FileChangeEvent::new("assign", "assign_file", "a.pdf");
        let submission = FileChangeEvent::new("assign", "submission_file", "b.pdf");
        let other = FileChangeEvent::new("resource", "file", "c.pdf");

        assert_eq!(assign.content_type_display(), "Assigment File");
        assert_eq!(submission.content_type_display(), "Submission File");
        assert_eq!(other.content_type_display(), "file");
    }

    #[test]
    fn test_filepath_tail() {
        let event = FileChangeEvent::new("forum", "description", "post")
            .with_filepath("/ Announcements/Exam moved");
        assert_eq!(event.filepath_tail(), "Announcements/Exam moved");

        let single = FileChangeEvent::new("forum", "description", "post").with_filepath("nospace");
        assert_eq!(single.filepath_tail(), "nospace");
    }

    #[test]
    fn test_course_display_name() {
        let course = CourseChangeSet::new("MATH101 Algebra I (Winter)");
        assert_eq!(course.display_name(), "MATH101 Algebra I (Winter)");

        let renamed = course.with_display_name("Algebra I");
        assert_eq!(renamed.display_name(), "Algebra I");
    }

    #[test]
    fn test_deserialize_with_missing_flags() {
        let json = r#"{
            "fullname": "Physics",
            "files": [{
                "content_filename": "Lab.pdf",
                "content_filepath": "/ Lab",
                "content_type": "file",
                "module_modname": "resource"
            }]
        }"#;

        let course: CourseChangeSet = serde_json::from_str(json).unwrap();
        assert_eq!(course.files.len(), 1);
        assert_eq!(course.files[0].status(), ChangeStatus::New);
        assert!(course.files[0].content_fileurl.is_none());
    }
}
