//! Ad system: create form, listing, and edit form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Ads are shown to platform users between videos. Creation uploads the
//! display photo as multipart form data; edits send JSON and reference the
//! photo by URL.

#[cfg(test)]
#[path = "ads_test.rs"]
mod ads_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::dialog::{ConfirmDialog, StatusLine};
use crate::net::types::{Ad, AdDraft};
use crate::state::records::ListState;
#[cfg(feature = "hydrate")]
use crate::state::records::remove_by_id;
use crate::util::auth::use_backend;

/// Required-field check shared by the create and edit forms.
///
/// Returns the draft with surrounding whitespace removed.
fn validate_ad_draft(draft: &AdDraft, require_photo_url: bool) -> Result<AdDraft, &'static str> {
    let trimmed = AdDraft {
        title: draft.title.trim().to_owned(),
        description: draft.description.trim().to_owned(),
        ad_link: draft.ad_link.trim().to_owned(),
        category: draft.category.trim().to_owned(),
        photo_url: draft.photo_url.as_deref().map(str::trim).filter(|u| !u.is_empty()).map(str::to_owned),
    };
    if trimmed.title.is_empty() {
        return Err("Ad title is required.");
    }
    if trimmed.description.is_empty() {
        return Err("Ad description is required.");
    }
    if !is_http_url(&trimmed.ad_link) {
        return Err("Ad link must be an http(s) URL.");
    }
    if trimmed.category.is_empty() {
        return Err("Ad category is required.");
    }
    if require_photo_url && !trimmed.photo_url.as_deref().is_some_and(is_http_url) {
        return Err("Ad photo URL must be an http(s) URL.");
    }
    Ok(trimmed)
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("https://") || value.starts_with("http://")
}

/// Two-way bound form fields for an ad.
#[derive(Clone, Copy)]
struct AdFields {
    title: RwSignal<String>,
    description: RwSignal<String>,
    ad_link: RwSignal<String>,
    category: RwSignal<String>,
    photo_url: RwSignal<String>,
}

impl AdFields {
    fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            ad_link: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            photo_url: RwSignal::new(String::new()),
        }
    }

    fn draft(&self) -> AdDraft {
        AdDraft {
            title: self.title.get_untracked(),
            description: self.description.get_untracked(),
            ad_link: self.ad_link.get_untracked(),
            category: self.category.get_untracked(),
            photo_url: Some(self.photo_url.get_untracked()),
        }
    }

    fn fill(&self, draft: AdDraft) {
        self.title.set(draft.title);
        self.description.set(draft.description);
        self.ad_link.set(draft.ad_link);
        self.category.set(draft.category);
        self.photo_url.set(draft.photo_url.unwrap_or_default());
    }

    fn clear(&self) {
        self.fill(AdDraft::default());
    }
}

/// Shared text inputs. The photo field differs per form and is rendered by the caller.
fn text_fields(fields: AdFields) -> impl IntoView {
    view! {
        <label class="form__label">
            "Ad Title"
            <input
                class="form__input"
                type="text"
                prop:value=move || fields.title.get()
                on:input=move |ev| fields.title.set(event_target_value(&ev))
            />
        </label>
        <label class="form__label">
            "Ad Description"
            <textarea
                class="form__input"
                rows="4"
                prop:value=move || fields.description.get()
                on:input=move |ev| fields.description.set(event_target_value(&ev))
            ></textarea>
        </label>
        <label class="form__label">
            "Ad Link"
            <input
                class="form__input"
                type="url"
                prop:value=move || fields.ad_link.get()
                on:input=move |ev| fields.ad_link.set(event_target_value(&ev))
            />
        </label>
        <label class="form__label">
            "Ad Category"
            <input
                class="form__input"
                type="text"
                prop:value=move || fields.category.get()
                on:input=move |ev| fields.category.set(event_target_value(&ev))
            />
        </label>
    }
}

// =============================================================================
// CREATE
// =============================================================================

#[component]
pub fn AdCreatePage() -> impl IntoView {
    let backend = use_backend();
    let fields = AdFields::new();
    let photo_input = NodeRef::<leptos::html::Input>::new();
    let status = RwSignal::new(None::<Result<String, String>>);
    let busy = RwSignal::new(false);
    let created = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = match validate_ad_draft(&fields.draft(), false) {
            Ok(draft) => draft,
            Err(message) => {
                status.set(Some(Err(message.to_owned())));
                return;
            }
        };
        status.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let photo = photo_input.get_untracked().and_then(|input| input.files()).and_then(|files| files.get(0));
            let Some(photo) = photo else {
                status.set(Some(Err("Choose an ad photo.".to_owned())));
                busy.set(false);
                return;
            };
            let backend = backend.clone();
            leptos::task::spawn_local(async move {
                match backend.client().create_ad(&draft, Some(&photo)).await {
                    Ok(()) => {
                        log::info!("ad created: {}", draft.title);
                        fields.clear();
                        if let Some(input) = photo_input.get_untracked() {
                            input.set_value("");
                        }
                        let _ = status.try_set(Some(Ok("Ad added successfully!".to_owned())));
                        let _ = created.try_set(true);
                    }
                    Err(e) => {
                        let _ = status.try_set(Some(Err(backend.failure("Failed to add ad", &e))));
                    }
                }
                let _ = busy.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (draft, &backend);
    };

    view! {
        <div class="page">
            <h1 class="page__heading">"Add New Ad"</h1>
            <StatusLine message=status/>
            <form class="form" on:submit=on_submit>
                {text_fields(fields)}
                <label class="form__label">
                    "Ad Photo"
                    <input class="form__input" type="file" accept="image/*" node_ref=photo_input/>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Submitting..." } else { "Add Ad" }}
                </button>
            </form>
            <Show when=move || created.get()>
                <div class="dialog-backdrop" on:click=move |_| created.set(false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Ad Added Successfully!"</h2>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| created.set(false)>
                                "Close"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

// =============================================================================
// LIST
// =============================================================================

#[component]
pub fn AdListPage() -> impl IntoView {
    let backend = use_backend();
    let ads = RwSignal::new(ListState::<Ad>::default());
    let status = RwSignal::new(None::<Result<String, String>>);
    let pending_delete = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let backend = backend.clone();
        leptos::task::spawn_local(async move {
            let result = backend
                .client()
                .fetch_ads()
                .await
                .map_err(|e| backend.failure("Failed to fetch ads", &e));
            ads.try_update(|s| s.finish(result));
        });
    }

    let on_confirm = Callback::new(move |_| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        #[cfg(feature = "hydrate")]
        {
            let backend = backend.clone();
            leptos::task::spawn_local(async move {
                match backend.client().delete_ad(&id).await {
                    Ok(()) => {
                        ads.try_update(|s| remove_by_id(&mut s.items, &id));
                        let _ = status.try_set(Some(Ok("Ad deleted".to_owned())));
                    }
                    Err(e) => {
                        let _ = status.try_set(Some(Err(backend.failure("Failed to delete ad", &e))));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, &backend);
    });
    let on_cancel = Callback::new(move |_| pending_delete.set(None));

    view! {
        <div class="page">
            <h1 class="page__heading">"Ads List"</h1>
            <StatusLine message=status/>
            {move || {
                let state = ads.get();
                if state.loading {
                    return view! { <p>"Loading ads..."</p> }.into_any();
                }
                if let Some(error) = state.error {
                    return view! { <p class="status-line status-line--error">{error}</p> }.into_any();
                }
                if state.items.is_empty() {
                    return view! { <p>"No ads found."</p> }.into_any();
                }
                view! {
                    <div class="table-wrap">
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Photo"</th>
                                    <th>"Title"</th>
                                    <th>"Category"</th>
                                    <th>"Link"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {state.items.into_iter().map(|ad| ad_row(ad, pending_delete)).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
                    .into_any()
            }}
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete Ad"
                    message="Are you sure you want to delete this ad?"
                    confirm_label="Delete"
                    on_confirm=on_confirm
                    on_cancel=on_cancel
                />
            </Show>
        </div>
    }
}

fn ad_row(ad: Ad, pending_delete: RwSignal<Option<String>>) -> impl IntoView {
    let edit_href = format!("/ads/edit/{}", ad.id);
    let link_href = ad.ad_link.clone();
    let id = ad.id;
    view! {
        <tr>
            <td>
                <img class="ad-thumb" src=ad.display_photo alt=ad.title.clone()/>
            </td>
            <td>{ad.title}</td>
            <td>{ad.category}</td>
            <td>
                <a href=link_href target="_blank" rel="noopener noreferrer">
                    {ad.ad_link}
                </a>
            </td>
            <td class="actions">
                <A href=edit_href attr:class="btn">
                    "Edit"
                </A>
                <button class="btn btn--danger" on:click=move |_| pending_delete.set(Some(id.clone()))>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

// =============================================================================
// EDIT
// =============================================================================

#[component]
pub fn AdEditPage() -> impl IntoView {
    let backend = use_backend();
    let params = use_params_map();
    let navigate = use_navigate();
    let fields = AdFields::new();
    let status = RwSignal::new(None::<Result<String, String>>);
    let loaded = RwSignal::new(false);

    let ad_id = move || params.read_untracked().get("id").unwrap_or_default();

    #[cfg(feature = "hydrate")]
    {
        let backend = backend.clone();
        let id = ad_id();
        leptos::task::spawn_local(async move {
            match backend.client().fetch_ad(&id).await {
                Ok(Some(ad)) => {
                    fields.fill(AdDraft::from(&ad));
                    let _ = loaded.try_set(true);
                }
                Ok(None) => {
                    let _ = status.try_set(Some(Err("Ad not found".to_owned())));
                }
                Err(e) => {
                    let _ = status.try_set(Some(Err(backend.failure("Failed to load ad", &e))));
                }
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = match validate_ad_draft(&fields.draft(), true) {
            Ok(draft) => draft,
            Err(message) => {
                status.set(Some(Err(message.to_owned())));
                return;
            }
        };
        let id = ad_id();
        #[cfg(feature = "hydrate")]
        {
            let backend = backend.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match backend.client().update_ad(&id, &draft).await {
                    Ok(()) => {
                        let _ = status.try_set(Some(Ok("Ad updated successfully!".to_owned())));
                        gloo_timers::future::TimeoutFuture::new(1_500).await;
                        navigate("/ads-lists", Default::default());
                    }
                    Err(e) => {
                        let _ = status.try_set(Some(Err(backend.failure("Failed to update ad", &e))));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, draft, &backend, &navigate);
    };

    view! {
        <div class="page">
            <h1 class="page__heading">"Edit Ad"</h1>
            <StatusLine message=status/>
            <form class="form" on:submit=on_submit>
                <fieldset class="form__fields" disabled=move || !loaded.get()>
                    {text_fields(fields)}
                    <label class="form__label">
                        "Ad Photo URL"
                        <input
                            class="form__input"
                            type="url"
                            prop:value=move || fields.photo_url.get()
                            on:input=move |ev| fields.photo_url.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit">
                        "Update Ad"
                    </button>
                </fieldset>
            </form>
        </div>
    }
}
