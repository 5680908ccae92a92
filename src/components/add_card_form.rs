//! Add Card Form Component
//!
//! Modal form for creating new cards. Closes on submit, on the × button,
//! or on a click outside the panel.

use leptos::prelude::*;
use web_sys::{HtmlInputElement, MouseEvent, SubmitEvent};

use crate::clock;
use crate::components::{IconSelector, ModeSelector, TagColorSelect};
use crate::context::use_app_context;
use crate::form::{clear_field, clear_mode_errors, AttachmentMode, DismissGuard, Field, FieldErrors, FileInfo, FormDraft};
use crate::models::{CardIcon, TagColor, TitleColor};
use crate::object_url;
use crate::store::{store_append_card, store_close_form, use_board_store};

fn clear_error(errors: RwSignal<FieldErrors>, field: Field) {
    if errors.with_untracked(|e| e.contains_key(&field)) {
        errors.update(|e| {
            clear_field(e, field);
        });
    }
}

fn on_backdrop(ev: &MouseEvent) -> bool {
    ev.target().is_some() && ev.target() == ev.current_target()
}

/// Inline message for one field
#[component]
fn FieldErrorText(errors: RwSignal<FieldErrors>, field: Field) -> impl IntoView {
    move || {
        errors.with(|e| {
            e.get(&field)
                .map(|err| view! { <p class="field-error">{err.to_string()}</p> })
        })
    }
}

#[component]
pub fn AddCardForm() -> impl IntoView {
    let store = use_board_store();
    let ctx = use_app_context();

    let draft = RwSignal::new(FormDraft::new(ctx.form_limits(), clock::now_local()));
    let errors = RwSignal::new(FieldErrors::new());
    let detail_max = ctx.form_limits().detail_max_chars;

    let guard = StoredValue::new(DismissGuard::default());

    // Closing without a card means nothing will show the preview
    let dismiss = move || {
        draft.with_untracked(|d| {
            if let Some(url) = d.file_preview() {
                object_url::release(url);
            }
        });
        store_close_form(&store);
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match draft.with_untracked(FormDraft::validate) {
            Ok(card) => {
                draft.with_untracked(|d| {
                    if let Some(url) = d.unclaimed_preview(&card) {
                        object_url::release(url);
                    }
                });
                store_append_card(&store, card);
                store_close_form(&store);
            }
            Err(found) => {
                log::debug!("[FORM] submission rejected: {:?}", found.keys().collect::<Vec<_>>());
                errors.set(found);
            }
        }
    };

    let on_file = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else { return };
        let info = FileInfo {
            name: file.name(),
            size: file.size() as u64,
            mime: file.type_(),
        };
        let attached = draft.try_update(|d| {
            d.attach_file(&info, |_| object_url::create(&file))
        });
        match attached {
            Some(Ok(replaced)) => {
                if let Some(url) = replaced {
                    object_url::release(&url);
                }
                clear_error(errors, Field::Attachment);
                clear_error(errors, Field::FileName);
            }
            Some(Err(err)) => {
                log::warn!("[FORM] rejected {} ({} bytes): {}", info.name, info.size, err);
                input.set_value("");
                errors.update(|e| {
                    e.insert(Field::Attachment, err);
                });
            }
            None => {}
        }
    };

    let on_toggle = move |mode: AttachmentMode, checked: bool| {
        draft.update(|d| match mode {
            AttachmentMode::Upload => d.set_upload(checked),
            AttachmentMode::FooterTag => d.set_footer_tag(checked),
            AttachmentMode::None => {}
        });
        if errors.with_untracked(|e| e.keys().any(|field| field.is_mode_specific())) {
            errors.update(|e| {
                clear_mode_errors(e);
            });
        }
    };

    let current_mode = Signal::derive(move || draft.with(FormDraft::mode));
    let current_color = Signal::derive(move || draft.with(|d| d.tag_color));
    let current_icon = Signal::derive(move || draft.with(|d| d.icon));
    let current_title_color = Signal::derive(move || draft.with(|d| d.title_color));

    view! {
        <div
            class="form-backdrop"
            on:mousedown=move |ev| guard.update_value(|g| g.press(on_backdrop(&ev)))
            on:click=move |ev| {
                let released = on_backdrop(&ev);
                if guard.try_update_value(|g| g.release_dismisses(released)).unwrap_or(false) {
                    dismiss();
                }
            }
        >
            <div class="form-panel" on:click=|ev| ev.stop_propagation()>
                <div class="form-header">
                    <h2>"Add New Card"</h2>
                    <button type="button" class="form-close-btn" aria-label="Close" on:click=move |_| dismiss()>
                        "✕"
                    </button>
                </div>
                <hr />
                <form class="add-card-form" novalidate=true on:submit=on_submit>
                    <div class="form-field">
                        <label for="card-title">"Title"</label>
                        <input
                            type="text"
                            id="card-title"
                            class="form-input"
                            placeholder="Enter card title"
                            prop:value=move || draft.with(|d| d.title.clone())
                            on:input=move |ev| {
                                draft.update(|d| d.title = event_target_value(&ev));
                                clear_error(errors, Field::Title);
                            }
                        />
                        <FieldErrorText errors=errors field=Field::Title />
                    </div>

                    <div class="form-field">
                        <label for="card-description">"Description"</label>
                        <textarea
                            id="card-description"
                            class="form-input"
                            rows="3"
                            placeholder="Enter card description"
                            prop:value=move || draft.with(|d| d.description.clone())
                            on:input=move |ev| {
                                draft.update(|d| d.description = event_target_value(&ev));
                                clear_error(errors, Field::Description);
                            }
                        />
                        <FieldErrorText errors=errors field=Field::Description />
                    </div>

                    <div class="form-field">
                        <label>"Tag Color"</label>
                        <TagColorSelect
                            current_color=current_color
                            on_change=move |color: TagColor| draft.update(|d| d.tag_color = color)
                        />
                    </div>

                    <div class="form-field">
                        <label>"Icon"</label>
                        <IconSelector
                            current_icon=current_icon
                            current_title_color=current_title_color
                            on_icon=move |icon: CardIcon| draft.update(|d| d.icon = icon)
                            on_title_color=move |color: TitleColor| draft.update(|d| d.title_color = color)
                        />
                    </div>

                    <ModeSelector current_mode=current_mode on_toggle=on_toggle />

                    <Show when=move || current_mode.get() == AttachmentMode::Upload>
                        <div class="form-field">
                            <label for="card-file">"Upload File"</label>
                            <input type="file" id="card-file" class="form-input" on:change=on_file />
                            <FieldErrorText errors=errors field=Field::Attachment />
                        </div>
                        <div class="form-field">
                            <label for="card-file-name">"File Name"</label>
                            <input
                                type="text"
                                id="card-file-name"
                                class="form-input"
                                placeholder="Enter file name"
                                prop:value=move || draft.with(|d| d.file_name.clone())
                                on:input=move |ev| {
                                    draft.update(|d| d.file_name = event_target_value(&ev));
                                    clear_error(errors, Field::FileName);
                                }
                            />
                            <FieldErrorText errors=errors field=Field::FileName />
                        </div>
                        {move || draft.with(|d| d.file_size().map(|size| {
                            view! { <p class="file-size">"File Size: " {size.to_string()}</p> }
                        }))}
                        {move || draft.with(|d| d.file_preview().map(|src| {
                            view! { <img class="file-preview" src=src.to_string() alt="File Preview" /> }
                        }))}
                    </Show>

                    <Show when=move || current_mode.get() == AttachmentMode::FooterTag>
                        <div class="form-field">
                            <label for="card-details">{format!("Details (Max {} characters)", detail_max)}</label>
                            <input
                                type="text"
                                id="card-details"
                                class="form-input"
                                maxlength=detail_max.to_string()
                                placeholder="Enter details"
                                prop:value=move || draft.with(|d| d.details().to_string())
                                on:input=move |ev| {
                                    draft.update(|d| d.set_details(&event_target_value(&ev)));
                                    clear_error(errors, Field::Details);
                                }
                            />
                            <FieldErrorText errors=errors field=Field::Details />
                        </div>
                        <div class="form-field">
                            <label for="card-date-time">"Date & Time"</label>
                            <input
                                type="datetime-local"
                                id="card-date-time"
                                class="form-input"
                                prop:value=move || draft.with(|d| d.date_time.clone())
                                on:input=move |ev| {
                                    draft.update(|d| d.date_time = event_target_value(&ev));
                                    clear_error(errors, Field::DateTime);
                                }
                            />
                            <FieldErrorText errors=errors field=Field::DateTime />
                        </div>
                    </Show>

                    <div class="form-actions">
                        <button type="submit" class="submit-btn">"Add Card"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
