//! Card Footer Component
//!
//! Coloured strip with the tag details and the download block.

use leptos::prelude::*;

use crate::models::Card;

#[component]
pub fn CardFooter(card: Card) -> impl IntoView {
    let footer_class = format!("card-footer {}", card.tag_color.footer_class());
    let button_class = card.tag_color.download_button_class();
    let timestamp = card.tag_timestamp_label();

    let tag_block = card.shows_tag().then(|| {
        let details = card.tag.as_ref().map(|t| t.details.clone()).unwrap_or_default();
        view! {
            <div class="tag-details">
                {details.into_iter().map(|detail| view! { <p class="tag-detail">{detail}</p> }).collect_view()}
                {timestamp.map(|ts| view! { <p class="tag-timestamp">{ts}</p> })}
            </div>
        }
    });

    let download_block = card
        .download
        .clone()
        .filter(|_| card.shows_download())
        .map(|download| {
            view! {
                <div class="download-block">
                    <div class="download-info">
                        {download.preview.map(|src| view! {
                            <img src=src alt="File Preview" class="download-preview" />
                        })}
                        {download.file_name.filter(|n| !n.is_empty()).map(|name| view! {
                            <p class="download-name">{name}</p>
                        })}
                        {download.file_size.map(|size| view! {
                            <p class="download-size">{size}</p>
                        })}
                    </div>
                    <button type="button" class=button_class aria-label="Download">"⬇"</button>
                </div>
            }
        });

    view! {
        <div class=footer_class>
            {tag_block}
            {download_block}
        </div>
    }
}
