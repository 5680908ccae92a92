//! Mode Selector Component
//!
//! Checkbox pair for the optional card sections. Checking one box unchecks
//! the other.

use leptos::prelude::*;

use crate::form::AttachmentMode;

/// Selectable modes (mode, input id, label)
pub const ATTACHMENT_MODES: &[(AttachmentMode, &str, &str)] = &[
    (AttachmentMode::Upload, "want-upload-file", "Want to Upload File"),
    (AttachmentMode::FooterTag, "footer-description-tag", "Footer Description Tag"),
];

#[component]
pub fn ModeSelector(
    #[prop(into)] current_mode: Signal<AttachmentMode>,
    on_toggle: impl Fn(AttachmentMode, bool) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="mode-selector">
            {ATTACHMENT_MODES.iter().map(|(mode, input_id, label)| {
                let mode = *mode;
                let is_checked = move || current_mode.get() == mode;
                view! {
                    <div class="mode-option">
                        <input
                            type="checkbox"
                            id=*input_id
                            prop:checked=is_checked
                            on:change=move |ev| on_toggle(mode, event_target_checked(&ev))
                        />
                        <label for=*input_id>{*label}</label>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
