use crate::api::{Media, NewTopic};
use crate::utils::error::Result;

pub const CREATE_TOPIC_FALLBACK: &str = "Failed to create topic.";
pub const REQUIRED_FIELDS_MESSAGE: &str = "Title and description are required.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    MediaType,
    MediaUrl,
    MediaAlt,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Title,
        FormField::Description,
        FormField::MediaType,
        FormField::MediaUrl,
        FormField::MediaAlt,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title *",
            FormField::Description => "Description *",
            FormField::MediaType => "Media Type (image, video)",
            FormField::MediaUrl => "Media URL",
            FormField::MediaAlt => "Media Alt Text",
        }
    }

    fn position(self) -> usize {
        FormField::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> FormField {
        FormField::ALL[(self.position() + 1) % FormField::ALL.len()]
    }

    pub fn previous(self) -> FormField {
        let len = FormField::ALL.len();
        FormField::ALL[(self.position() + len - 1) % len]
    }

    pub fn is_last(self) -> bool {
        self.position() == FormField::ALL.len() - 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicForm {
    pub title: String,
    pub description: String,
    pub media_type: String,
    pub media_url: String,
    pub media_alt: String,
    pub current_field: FormField,
}

impl Default for TopicForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            media_type: String::new(),
            media_url: String::new(),
            media_alt: String::new(),
            current_field: FormField::Title,
        }
    }
}

impl TopicForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::MediaType => &self.media_type,
            FormField::MediaUrl => &self.media_url,
            FormField::MediaAlt => &self.media_alt,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::MediaType => &mut self.media_type,
            FormField::MediaUrl => &mut self.media_url,
            FormField::MediaAlt => &mut self.media_alt,
        }
    }

    pub fn set(&mut self, field: FormField, value: &str) {
        *self.value_mut(field) = value.to_string();
    }

    pub fn add_char(&mut self, c: char) {
        let field = self.current_field;
        self.value_mut(field).push(c);
    }

    pub fn backspace(&mut self) {
        let field = self.current_field;
        self.value_mut(field).pop();
    }

    pub fn next_field(&mut self) {
        self.current_field = self.current_field.next();
    }

    pub fn previous_field(&mut self) {
        self.current_field = self.current_field.previous();
    }

    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }

    /// Media is attached only when both type and URL are filled in.
    pub fn to_request(&self) -> NewTopic {
        let media = (!self.media_type.is_empty() && !self.media_url.is_empty()).then(|| Media {
            kind: self.media_type.clone(),
            url: self.media_url.clone(),
            alt_text: (!self.media_alt.is_empty()).then(|| self.media_alt.clone()),
        });

        NewTopic {
            title: self.title.clone(),
            description: self.description.clone(),
            media,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CreateTopicView {
    pub form: TopicForm,
    pub submitting: bool,
    pub success: bool,
    pub error: Option<String>,
}

impl CreateTopicView {
    pub fn begin(&mut self) {
        *self = Self::default();
    }

    /// Returns the request body to post, or `None` when nothing should be sent.
    pub fn submit(&mut self) -> Option<NewTopic> {
        if self.submitting {
            return None;
        }

        if !self.form.is_valid() {
            self.error = Some(REQUIRED_FIELDS_MESSAGE.to_string());
            return None;
        }

        self.submitting = true;
        self.success = false;
        self.error = None;
        Some(self.form.to_request())
    }

    pub fn finish(&mut self, result: Result<()>) {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.success = true;
                self.form = TopicForm::default();
            }
            Err(e) => {
                self.error = Some(e.user_message(CREATE_TOPIC_FALLBACK));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::HelpCenterError;
    use reqwest::StatusCode;
    use serde_json::json;

    fn filled(title: &str, description: &str, media: (&str, &str, &str)) -> CreateTopicView {
        let mut view = CreateTopicView::default();
        view.form.set(FormField::Title, title);
        view.form.set(FormField::Description, description);
        view.form.set(FormField::MediaType, media.0);
        view.form.set(FormField::MediaUrl, media.1);
        view.form.set(FormField::MediaAlt, media.2);
        view
    }

    #[test]
    fn empty_title_is_rejected_locally() {
        let mut view = filled("", "B", ("", "", ""));
        assert!(view.submit().is_none());
        assert!(!view.submitting);
        assert_eq!(view.error.as_deref(), Some(REQUIRED_FIELDS_MESSAGE));

        let mut view = filled("A", "   ", ("", "", ""));
        assert!(view.submit().is_none());
    }

    #[test]
    fn body_without_media() {
        let mut view = filled("A", "B", ("", "", ""));
        let body = view.submit().unwrap();
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"title": "A", "description": "B"}));
    }

    #[test]
    fn media_requires_both_type_and_url() {
        let body = filled("A", "B", ("image", "", "alt")).form.to_request();
        assert_eq!(body.media, None);

        let body = filled("A", "B", ("", "http://x/y.png", "")).form.to_request();
        assert_eq!(body.media, None);
    }

    #[test]
    fn body_with_media_skips_empty_alt_text() {
        let mut view = filled("A", "B", ("image", "http://x/y.png", ""));
        let body = view.submit().unwrap();
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"title": "A", "description": "B", "media": {"type": "image", "url": "http://x/y.png"}})
        );

        let body = filled("A", "B", ("image", "http://x/y.png", "Dashboard")).form.to_request();
        assert_eq!(body.media.unwrap().alt_text.as_deref(), Some("Dashboard"));
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut view = filled("A", "B", ("", "", ""));
        assert!(view.submit().is_some());
        assert!(view.submit().is_none());
    }

    #[test]
    fn success_resets_form() {
        let mut view = filled("A", "B", ("image", "http://x/y.png", "alt"));
        view.submit().unwrap();
        view.finish(Ok(()));

        assert!(view.success);
        assert!(!view.submitting);
        assert_eq!(view.form, TopicForm::default());
    }

    #[test]
    fn failure_keeps_form_for_resubmission() {
        let mut view = filled("A", "B", ("", "", ""));
        view.submit().unwrap();
        view.finish(Err(HelpCenterError::Api {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: None,
        }));

        assert!(!view.success);
        assert_eq!(view.error.as_deref(), Some(CREATE_TOPIC_FALLBACK));
        assert_eq!(view.form.title, "A");
        assert!(view.submit().is_some());
    }

    #[test]
    fn typing_targets_current_field() {
        let mut form = TopicForm::default();
        form.add_char('H');
        form.add_char('i');
        form.next_field();
        form.add_char('x');
        form.backspace();
        form.add_char('y');
        form.previous_field();
        form.previous_field();

        assert_eq!(form.title, "Hi");
        assert_eq!(form.description, "y");
        assert_eq!(form.current_field, FormField::MediaAlt);
        assert!(form.current_field.is_last());
    }
}
