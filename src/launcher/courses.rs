//! Enrolled courses view

use super::{Fetched, Launcher, filter};
use crate::client::models::{Course, EnrolledCourses};
use crate::client::{FN_ENROLLED_COURSES, MoodleApi, ServiceCall};
use crate::config::CoursesMode;
use crate::error::Result;
use crate::models::item::or_placeholder;
use crate::models::{Action, DisplayItem, Icon};

impl<C: MoodleApi> Launcher<C> {
    /// Enrolled courses in the configured classification whose name matches
    /// `query`, in the order the site returns them
    pub async fn courses(&self, query: &str) -> Result<Vec<DisplayItem>> {
        let classification = self.preferences.course_status;
        let mode = self.preferences.courses_type;
        log::debug!(
            "Rendering courses for query '{}' (classification={}, mode={})",
            query,
            classification,
            mode
        );

        let call = ServiceCall::new(FN_ENROLLED_COURSES, &self.credentials)
            .param("classification", classification.as_str());

        match self.fetch::<EnrolledCourses>(&call).await? {
            Fetched::Failed(message) => Ok(vec![DisplayItem::message(message)]),
            Fetched::Data(data) => Ok(render_courses(&data.courses, query, mode)),
        }
    }
}

/// Build course items, dropping non-matching names and, in starred mode,
/// courses that are not favourites
pub fn render_courses(courses: &[Course], query: &str, mode: CoursesMode) -> Vec<DisplayItem> {
    let items = courses
        .iter()
        .filter(|course| filter::matches(query, &course.fullname))
        .filter(|course| mode != CoursesMode::Starred || course.isfavourite)
        .map(|course| {
            DisplayItem::new(
                Icon::App,
                course.fullname.clone(),
                Action::OpenUrl(course.viewurl.clone()),
            )
            .description(format!("Category: {}", course.coursecategory))
        })
        .collect();

    or_placeholder(items)
}
