//! Domain types for a single upload: file categories, the manifest, and the
//! uniform result handed back to front ends.

use std::fmt;
use std::path::{Path, PathBuf};

/// Label rendered for a category value that does not name a known category.
pub const UNKNOWN_CATEGORY_LABEL: &str = "unknown";

/// Logical kind of file accepted by the upload endpoint.
///
/// Each category owns a fixed multipart form-field name.
///
/// # Examples
///
/// ```
/// use trtc_core::FileCategory;
///
/// assert_eq!(FileCategory::StudentCourses.label(), "studentcourses");
/// assert_eq!(FileCategory::label_of(2), "students");
/// assert_eq!(FileCategory::label_of(42), "unknown");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FileCategory {
    Courses,
    Equivalencies,
    Students,
    StudentCourses,
}

impl FileCategory {
    /// All categories in canonical manifest order.
    pub const ALL: [FileCategory; 4] = [
        FileCategory::Courses,
        FileCategory::Equivalencies,
        FileCategory::Students,
        FileCategory::StudentCourses,
    ];

    /// Returns the form-field name used for this category's file part.
    pub fn label(self) -> &'static str {
        match self {
            FileCategory::Courses => "courses",
            FileCategory::Equivalencies => "equivalencies",
            FileCategory::Students => "students",
            FileCategory::StudentCourses => "studentcourses",
        }
    }

    /// Looks up a category by its ordinal (0 = courses .. 3 = studentcourses).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Renders a raw category ordinal, falling back to `"unknown"` when out of range.
    pub fn label_of(index: usize) -> &'static str {
        Self::from_index(index)
            .map(FileCategory::label)
            .unwrap_or(UNKNOWN_CATEGORY_LABEL)
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One file attached to an upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub category: FileCategory,
    /// Absolute path of the file on disk.
    pub path: PathBuf,
}

impl ManifestEntry {
    pub fn new(category: FileCategory, path: impl Into<PathBuf>) -> Self {
        Self {
            category,
            path: path.into(),
        }
    }

    /// Base name sent as the multipart filename.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

/// A validated request ready for a [`Transport`](crate::Transport).
///
/// Only built by the uploader after the key and manifest have been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub api_key: String,
    pub entries: Vec<ManifestEntry>,
}

/// Outcome of a completed HTTP exchange.
///
/// `success` is true only for status 200; `message` is the raw response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    pub success: bool,
    pub message: String,
    pub status_code: u16,
}

impl UploadResult {
    /// Normalizes a raw status and body into a result.
    ///
    /// ```
    /// use trtc_core::UploadResult;
    ///
    /// let accepted = UploadResult::from_response(200, "OK");
    /// assert!(accepted.success);
    ///
    /// let rejected = UploadResult::from_response(201, "Created");
    /// assert!(!rejected.success);
    /// ```
    pub fn from_response(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            success: status_code == 200,
            message: body.into(),
            status_code,
        }
    }
}

/// Caller-supplied path per category. Empty strings mean "not selected".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPaths {
    pub courses: String,
    pub equivalencies: String,
    pub students: String,
    pub student_courses: String,
}

impl CategoryPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the path for one category.
    pub fn set(mut self, category: FileCategory, path: impl Into<String>) -> Self {
        *self.slot_mut(category) = path.into();
        self
    }

    pub fn get(&self, category: FileCategory) -> &str {
        match category {
            FileCategory::Courses => &self.courses,
            FileCategory::Equivalencies => &self.equivalencies,
            FileCategory::Students => &self.students,
            FileCategory::StudentCourses => &self.student_courses,
        }
    }

    /// Yields the non-empty paths in canonical category order.
    pub fn selected(&self) -> impl Iterator<Item = (FileCategory, &Path)> + '_ {
        FileCategory::ALL.into_iter().filter_map(move |category| {
            let path = self.get(category);
            (!path.is_empty()).then(|| (category, Path::new(path)))
        })
    }

    fn slot_mut(&mut self, category: FileCategory) -> &mut String {
        match category {
            FileCategory::Courses => &mut self.courses,
            FileCategory::Equivalencies => &mut self.equivalencies,
            FileCategory::Students => &mut self.students,
            FileCategory::StudentCourses => &mut self.student_courses,
        }
    }
}
