//! Add-Card Form Draft
//!
//! In-progress form state, its field-level validation, and promotion of a
//! valid draft into a [`NewCard`].

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::clock;
use crate::models::{CardIcon, Download, FooterTag, NewCard, TagColor, TitleColor};

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Largest accepted attachment (5 MB)
pub const MAX_UPLOAD_BYTES: u64 = 5 * BYTES_PER_MB;

/// Longest footer detail text
pub const DETAIL_MAX_CHARS: usize = 20;

/// Optional extra section of a card. Only one can be chosen at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttachmentMode {
    #[default]
    None,
    Upload,
    FooterTag,
}

/// Form fields that can carry an error, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Description,
    Attachment,
    FileName,
    Details,
    DateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Title is required")]
    TitleRequired,
    #[error("Description is required")]
    DescriptionRequired,
    #[error("File name is required")]
    FileNameRequired,
    #[error("File size ({}) exceeds the maximum limit of {} MB", size_label(.size), .limit / BYTES_PER_MB)]
    FileTooLarge { size: u64, limit: u64 },
    #[error("Details are required")]
    DetailsRequired,
    #[error("Details must be at most {max} characters")]
    DetailsTooLong { max: usize },
    #[error("Date & time is required")]
    DateTimeRequired,
    #[error("Date & time is not valid")]
    DateTimeInvalid,
}

impl Field {
    /// Fields that only exist under one attachment mode
    pub fn is_mode_specific(self) -> bool {
        matches!(self, Field::Attachment | Field::FileName | Field::Details | Field::DateTime)
    }
}

pub type FieldErrors = BTreeMap<Field, FieldError>;

/// Editing a field drops its error. Returns true if one was removed.
pub fn clear_field(errors: &mut FieldErrors, field: Field) -> bool {
    errors.remove(&field).is_some()
}

/// Switching attachment mode drops the errors of every mode-specific field
pub fn clear_mode_errors(errors: &mut FieldErrors) -> bool {
    let before = errors.len();
    errors.retain(|field, _| !field.is_mode_specific());
    errors.len() != before
}

/// Backdrop clicks close the form only when the press also started on the
/// backdrop. A press inside the panel that is released outside it does not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DismissGuard {
    pressed_on_backdrop: bool,
}

impl DismissGuard {
    pub fn press(&mut self, on_backdrop: bool) {
        self.pressed_on_backdrop = on_backdrop;
    }

    pub fn release_dismisses(&mut self, on_backdrop: bool) -> bool {
        let dismiss = self.pressed_on_backdrop && on_backdrop;
        self.pressed_on_backdrop = false;
        dismiss
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLimits {
    pub max_upload_bytes: u64,
    pub detail_max_chars: usize,
}

impl Default for FormLimits {
    fn default() -> Self {
        Self {
            max_upload_bytes: MAX_UPLOAD_BYTES,
            detail_max_chars: DETAIL_MAX_CHARS,
        }
    }
}

/// What the file picker reports about the chosen file
#[derive(Debug, Clone, PartialEq)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl FileInfo {
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

/// Size label shown on the form and the card, e.g. "1.50 MB"
pub fn format_file_size(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / BYTES_PER_MB as f64)
}

fn size_label(bytes: &u64) -> String {
    format_file_size(*bytes)
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormDraft {
    pub title: String,
    pub description: String,
    pub tag_color: TagColor,
    pub icon: CardIcon,
    pub title_color: TitleColor,
    mode: AttachmentMode,
    pub file_name: String,
    file_size: Option<String>,
    file_preview: Option<String>,
    details: String,
    pub date_time: String,
    limits: FormLimits,
}

impl FormDraft {
    /// Empty draft with the date-time seeded from `now`
    pub fn new(limits: FormLimits, now: NaiveDateTime) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            tag_color: TagColor::Green,
            icon: CardIcon::default(),
            title_color: TitleColor::default(),
            mode: AttachmentMode::None,
            file_name: String::new(),
            file_size: None,
            file_preview: None,
            details: String::new(),
            date_time: clock::format_datetime_local(&now),
            limits,
        }
    }

    pub fn mode(&self) -> AttachmentMode {
        self.mode
    }

    pub fn file_size(&self) -> Option<&str> {
        self.file_size.as_deref()
    }

    pub fn file_preview(&self) -> Option<&str> {
        self.file_preview.as_deref()
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    /// Checking upload clears footer-tag mode
    pub fn set_upload(&mut self, checked: bool) {
        self.set_mode(AttachmentMode::Upload, checked);
    }

    /// Checking footer-tag clears upload mode
    pub fn set_footer_tag(&mut self, checked: bool) {
        self.set_mode(AttachmentMode::FooterTag, checked);
    }

    fn set_mode(&mut self, mode: AttachmentMode, checked: bool) {
        if checked {
            self.mode = mode;
        } else if self.mode == mode {
            self.mode = AttachmentMode::None;
        }
    }

    /// Input is cut to the detail limit, counted in characters
    pub fn set_details(&mut self, value: &str) {
        self.details = value.chars().take(self.limits.detail_max_chars).collect();
    }

    /// Take name, size label and (for images) a preview from a picked file.
    /// An oversized file leaves the draft untouched. On success the preview
    /// it replaced, if any, is handed back so it can be released.
    pub fn attach_file<P>(&mut self, file: &FileInfo, make_preview: P) -> Result<Option<String>, FieldError>
    where
        P: FnOnce(&FileInfo) -> Option<String>,
    {
        if file.size > self.limits.max_upload_bytes {
            return Err(FieldError::FileTooLarge {
                size: file.size,
                limit: self.limits.max_upload_bytes,
            });
        }
        self.file_name = file.name.clone();
        self.file_size = Some(format_file_size(file.size));
        let preview = if file.is_image() { make_preview(file) } else { None };
        Ok(std::mem::replace(&mut self.file_preview, preview))
    }

    /// Preview URL that `card` does not keep, e.g. after switching away from upload mode
    pub fn unclaimed_preview(&self, card: &NewCard) -> Option<&str> {
        let claimed = card.download.as_ref().and_then(|d| d.preview.as_deref());
        self.file_preview().filter(|url| claimed != Some(*url))
    }

    pub fn validate(&self) -> Result<NewCard, FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.insert(Field::Title, FieldError::TitleRequired);
        }
        let description = self.description.trim();
        if description.is_empty() {
            errors.insert(Field::Description, FieldError::DescriptionRequired);
        }

        let mut card = NewCard {
            title: title.to_string(),
            description: description.to_string(),
            icon: self.icon,
            title_color: self.title_color,
            tag_color: self.tag_color,
            ..Default::default()
        };

        match self.mode {
            AttachmentMode::None => {}
            AttachmentMode::Upload => {
                let file_name = self.file_name.trim();
                if file_name.is_empty() {
                    errors.insert(Field::FileName, FieldError::FileNameRequired);
                }
                card.download = Some(Download {
                    file_name: Some(file_name.to_string()),
                    file_size: self.file_size.clone(),
                    preview: self.file_preview.clone(),
                });
                card.download_open = true;
            }
            AttachmentMode::FooterTag => {
                let details = self.details.trim();
                let max = self.limits.detail_max_chars;
                if details.is_empty() {
                    errors.insert(Field::Details, FieldError::DetailsRequired);
                } else if details.chars().count() > max {
                    errors.insert(Field::Details, FieldError::DetailsTooLong { max });
                }

                let timestamp = if self.date_time.trim().is_empty() {
                    errors.insert(Field::DateTime, FieldError::DateTimeRequired);
                    None
                } else {
                    let parsed = clock::parse_datetime_local(&self.date_time);
                    if parsed.is_none() {
                        errors.insert(Field::DateTime, FieldError::DateTimeInvalid);
                    }
                    parsed
                };

                card.tag = Some(FooterTag {
                    details: vec![details.to_string()],
                    timestamp,
                });
                card.tag_open = true;
            }
        }

        if errors.is_empty() {
            Ok(card)
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 28)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    fn make_draft() -> FormDraft {
        let mut draft = FormDraft::new(FormLimits::default(), now());
        draft.title = "Groceries".to_string();
        draft.description = "Milk and eggs".to_string();
        draft
    }

    fn file(size: u64, mime: &str) -> FileInfo {
        FileInfo {
            name: "photo.png".to_string(),
            size,
            mime: mime.to_string(),
        }
    }

    #[test]
    fn test_new_draft_seeds_date_time() {
        let draft = FormDraft::new(FormLimits::default(), now());
        assert_eq!(draft.date_time, "2025-03-28T14:30");
        assert_eq!(draft.mode(), AttachmentMode::None);
        assert_eq!(draft.tag_color, TagColor::Green);
    }

    #[test]
    fn test_blank_title_and_description_rejected() {
        let mut draft = make_draft();
        draft.title = "  ".to_string();
        draft.description = String::new();

        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get(&Field::Title), Some(&FieldError::TitleRequired));
        assert_eq!(errors.get(&Field::Description), Some(&FieldError::DescriptionRequired));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_plain_card_has_no_footer_sections() {
        let card = make_draft().validate().unwrap();
        assert_eq!(card.title, "Groceries");
        assert!(card.download.is_none() && card.tag.is_none());
        assert!(!card.download_open && !card.tag_open);
    }

    #[test]
    fn test_upload_requires_file_name() {
        let mut draft = make_draft();
        draft.set_upload(true);

        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get(&Field::FileName), Some(&FieldError::FileNameRequired));
        assert_eq!(errors[&Field::FileName].to_string(), "File name is required");
    }

    #[test]
    fn test_modes_are_mutually_exclusive() {
        let mut draft = make_draft();
        draft.set_upload(true);
        draft.set_footer_tag(true);
        assert_eq!(draft.mode(), AttachmentMode::FooterTag);

        draft.set_upload(true);
        assert_eq!(draft.mode(), AttachmentMode::Upload);

        // Unchecking the inactive mode changes nothing
        draft.set_footer_tag(false);
        assert_eq!(draft.mode(), AttachmentMode::Upload);

        draft.set_upload(false);
        assert_eq!(draft.mode(), AttachmentMode::None);
    }

    #[test]
    fn test_details_truncated_at_input() {
        let mut draft = make_draft();
        draft.set_footer_tag(true);
        draft.set_details("abcdefghijklmnopqrstuvwxyz");
        assert_eq!(draft.details(), "abcdefghijklmnopqrst");

        let card = draft.validate().unwrap();
        let tag = card.tag.unwrap();
        assert_eq!(tag.details, vec!["abcdefghijklmnopqrst".to_string()]);
        assert_eq!(tag.timestamp, Some(now()));
        assert!(card.tag_open);
    }

    #[test]
    fn test_details_truncation_counts_chars() {
        let mut draft = make_draft();
        draft.set_details(&"é".repeat(25));
        assert_eq!(draft.details().chars().count(), 20);
    }

    #[test]
    fn test_footer_tag_requires_details_and_date() {
        let mut draft = make_draft();
        draft.set_footer_tag(true);
        draft.date_time = String::new();

        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get(&Field::Details), Some(&FieldError::DetailsRequired));
        assert_eq!(errors.get(&Field::DateTime), Some(&FieldError::DateTimeRequired));
    }

    #[test]
    fn test_footer_tag_rejects_unparseable_date() {
        let mut draft = make_draft();
        draft.set_footer_tag(true);
        draft.set_details("Due soon");
        draft.date_time = "tomorrow".to_string();

        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get(&Field::DateTime), Some(&FieldError::DateTimeInvalid));
    }

    #[test]
    fn test_exactly_five_mb_accepted() {
        let mut draft = make_draft();
        draft.set_upload(true);
        let result = draft.attach_file(&file(MAX_UPLOAD_BYTES, "image/png"), |_| Some("blob:1".to_string()));

        assert!(result.is_ok());
        assert_eq!(draft.file_name, "photo.png");
        assert_eq!(draft.file_size(), Some("5.00 MB"));
        assert_eq!(draft.file_preview(), Some("blob:1"));
    }

    #[test]
    fn test_one_byte_over_rejected_and_draft_unchanged() {
        let mut draft = make_draft();
        draft.set_upload(true);
        let before = draft.clone();

        let err = draft
            .attach_file(&file(MAX_UPLOAD_BYTES + 1, "image/png"), |_| panic!("no preview for rejected file"))
            .unwrap_err();

        assert_eq!(err, FieldError::FileTooLarge { size: MAX_UPLOAD_BYTES + 1, limit: MAX_UPLOAD_BYTES });
        assert_eq!(err.to_string(), "File size (5.00 MB) exceeds the maximum limit of 5 MB");
        assert_eq!(draft, before);
    }

    #[test]
    fn test_non_image_gets_no_preview() {
        let mut draft = make_draft();
        draft.set_upload(true);
        draft
            .attach_file(&file(1_572_864, "application/pdf"), |_| Some("blob:2".to_string()))
            .unwrap();
        assert_eq!(draft.file_preview(), None);
        assert_eq!(draft.file_size(), Some("1.50 MB"));
    }

    #[test]
    fn test_upload_card_carries_download_block() {
        let mut draft = make_draft();
        draft.set_upload(true);
        draft.attach_file(&file(2048, "image/png"), |_| None).unwrap();
        draft.file_name = "  holiday.png ".to_string();

        let card = draft.validate().unwrap();
        let download = card.download.unwrap();
        assert_eq!(download.file_name.as_deref(), Some("holiday.png"));
        assert_eq!(download.file_size.as_deref(), Some("0.00 MB"));
        assert!(card.download_open);
        assert!(card.tag.is_none());
    }

    #[test]
    fn test_new_file_hands_back_replaced_preview() {
        let mut draft = make_draft();
        draft.set_upload(true);
        let first = draft.attach_file(&file(10, "image/png"), |_| Some("blob:a".to_string()));
        assert_eq!(first, Ok(None));

        let second = draft.attach_file(&file(10, "image/png"), |_| Some("blob:b".to_string()));
        assert_eq!(second, Ok(Some("blob:a".to_string())));
        assert_eq!(draft.file_preview(), Some("blob:b"));

        let third = draft.attach_file(&file(10, "text/plain"), |_| Some("blob:c".to_string()));
        assert_eq!(third, Ok(Some("blob:b".to_string())));
        assert_eq!(draft.file_preview(), None);
    }

    #[test]
    fn test_preview_unclaimed_after_leaving_upload_mode() {
        let mut draft = make_draft();
        draft.set_upload(true);
        draft.attach_file(&file(10, "image/png"), |_| Some("blob:a".to_string())).unwrap();

        let card = draft.validate().unwrap();
        assert_eq!(draft.unclaimed_preview(&card), None);

        draft.set_upload(false);
        let card = draft.validate().unwrap();
        assert_eq!(draft.unclaimed_preview(&card), Some("blob:a"));
    }

    #[test]
    fn test_editing_field_clears_only_its_error() {
        let mut draft = make_draft();
        draft.title.clear();
        draft.description.clear();
        let mut errors = draft.validate().unwrap_err();

        assert!(clear_field(&mut errors, Field::Title));
        assert!(!clear_field(&mut errors, Field::Title));
        assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec![Field::Description]);
    }

    #[test]
    fn test_mode_change_clears_mode_specific_errors() {
        let mut draft = make_draft();
        draft.title.clear();
        draft.set_footer_tag(true);
        draft.date_time = String::new();
        let mut errors = draft.validate().unwrap_err();
        errors.insert(Field::Attachment, FieldError::FileNameRequired);
        errors.insert(Field::FileName, FieldError::FileNameRequired);

        assert!(clear_mode_errors(&mut errors));
        assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec![Field::Title]);
        assert!(!clear_mode_errors(&mut errors));
    }

    #[test]
    fn test_dismiss_needs_press_and_release_on_backdrop() {
        let mut guard = DismissGuard::default();
        assert!(!guard.release_dismisses(true));

        // Text selection started in the panel, released over the backdrop
        guard.press(false);
        assert!(!guard.release_dismisses(true));

        guard.press(true);
        assert!(!guard.release_dismisses(false));

        guard.press(true);
        assert!(guard.release_dismisses(true));
        assert!(!guard.release_dismisses(true));
    }

    #[test]
    fn test_icon_and_colors_carry_over() {
        let mut draft = make_draft();
        draft.icon = CardIcon::Star;
        draft.title_color = TitleColor::Amber;
        draft.tag_color = TagColor::Blue;

        let card = draft.validate().unwrap();
        assert_eq!(card.icon, CardIcon::Star);
        assert_eq!(card.title_color, TitleColor::Amber);
        assert_eq!(card.tag_color, TagColor::Blue);
    }
}
