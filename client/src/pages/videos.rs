//! Video moderation: the approval queue and the approved catalogue.
//!
//! DESIGN
//! ======
//! Both screens render the same table. `VideoQueue` selects which backend
//! listing and delete endpoint apply, and whether the approve action shows.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::dialog::{ConfirmDialog, StatusLine};
use crate::net::types::Video;
use crate::state::records::ListState;
#[cfg(feature = "hydrate")]
use crate::state::records::{mark_video_approved, remove_by_id};
use crate::util::auth::use_backend;
use crate::util::format::format_timestamp;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VideoQueue {
    /// Uploads awaiting moderation.
    Pending,
    /// Videos already visible on the platform.
    Approved,
}

impl VideoQueue {
    fn heading(self) -> &'static str {
        match self {
            Self::Pending => "Videos List",
            Self::Approved => "Approved Videos",
        }
    }

    #[cfg(feature = "hydrate")]
    async fn fetch(self, api: &crate::net::api::ApiClient) -> Result<Vec<Video>, crate::net::error::ApiError> {
        match self {
            Self::Pending => api.fetch_pending_videos().await,
            Self::Approved => api.fetch_approved_videos().await,
        }
    }

    #[cfg(feature = "hydrate")]
    async fn delete(self, api: &crate::net::api::ApiClient, id: &str) -> Result<(), crate::net::error::ApiError> {
        match self {
            Self::Pending => api.delete_video(id).await,
            Self::Approved => api.delete_approved_video(id).await,
        }
    }
}

#[component]
pub fn PendingVideosPage() -> impl IntoView {
    view! { <VideoTable queue=VideoQueue::Pending/> }
}

#[component]
pub fn ApprovedVideosPage() -> impl IntoView {
    view! { <VideoTable queue=VideoQueue::Approved/> }
}

#[component]
fn VideoTable(queue: VideoQueue) -> impl IntoView {
    let backend = use_backend();
    let videos = RwSignal::new(ListState::<Video>::default());
    let status = RwSignal::new(None::<Result<String, String>>);
    let pending_delete = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let backend = backend.clone();
        leptos::task::spawn_local(async move {
            let result = queue
                .fetch(&backend.client())
                .await
                .map_err(|e| backend.failure("Failed to fetch videos", &e));
            videos.try_update(|s| s.finish(result));
        });
    }

    let approve_backend = backend.clone();
    let on_approve = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            let backend = approve_backend.clone();
            leptos::task::spawn_local(async move {
                match backend.client().approve_video(&id).await {
                    Ok(()) => {
                        videos.try_update(|s| mark_video_approved(&mut s.items, &id));
                        let _ = status.try_set(Some(Ok("Video approved successfully".to_owned())));
                    }
                    Err(e) => {
                        let _ = status.try_set(Some(Err(backend.failure("Failed to approve video", &e))));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, &approve_backend);
    });

    let on_confirm_delete = Callback::new(move |_| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        #[cfg(feature = "hydrate")]
        {
            let backend = backend.clone();
            leptos::task::spawn_local(async move {
                match queue.delete(&backend.client(), &id).await {
                    Ok(()) => {
                        videos.try_update(|s| remove_by_id(&mut s.items, &id));
                        let _ = status.try_set(Some(Ok("Video deleted".to_owned())));
                    }
                    Err(e) => {
                        let _ = status.try_set(Some(Err(backend.failure("Failed to delete video", &e))));
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
            <h1 class="page__heading">{queue.heading()}</h1>
            <div class="page__actions">
                <A href="/video-upload" attr:class="btn btn--primary">
                    "+ Add Video"
                </A>
            </div>
            <StatusLine message=status/>
            {move || {
                let state = videos.get();
                if state.loading {
                    return view! { <p>"Loading videos..."</p> }.into_any();
                }
                if let Some(error) = state.error {
                    return view! { <p class="status-line status-line--error">{error}</p> }.into_any();
                }
                if state.items.is_empty() {
                    return view! { <p>"No videos found."</p> }.into_any();
                }
                view! {
                    <div class="table-wrap">
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Video"</th>
                                    <th>"User"</th>
                                    <th>"Description"</th>
                                    <th>"Stats"</th>
                                    <th>"Status"</th>
                                    <th>"Created"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {state
                                    .items
                                    .into_iter()
                                    .map(|video| video_row(video, queue, on_approve, pending_delete))
                                    .collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
                    .into_any()
            }}
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Delete Video"
                    message="Are you sure you want to delete this video?"
                    confirm_label="Delete"
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel
                />
            </Show>
        </div>
    }
}

fn video_row(
    video: Video,
    queue: VideoQueue,
    on_approve: Callback<String>,
    pending_delete: RwSignal<Option<String>>,
) -> impl IntoView {
    let owner = video.owner_name().to_owned();
    let avatar = video.user.as_ref().and_then(|u| u.avatar.clone());
    let approved = video.is_approved;
    let created = format_timestamp(video.created_at.as_deref());
    let approve_id = video.id.clone();
    let delete_id = video.id;
    view! {
        <tr>
            <td>
                <video class="video-thumb" src=video.url controls=true preload="metadata"></video>
            </td>
            <td>
                <div class="owner">
                    {avatar.map(|src| view! { <img class="avatar avatar--small" src=src alt="User avatar"/> })}
                    <span>{owner}</span>
                </div>
            </td>
            <td class="cell--clip">{video.description}</td>
            <td class="stats">
                <div>"Likes: " {video.likes}</div>
                <div>"Comments: " {video.comments_count}</div>
                <div>"Shares: " {video.shares}</div>
            </td>
            <td>
                <span class=if approved { "pill pill--ok" } else { "pill pill--pending" }>
                    {if approved { "Approved" } else { "Pending" }}
                </span>
            </td>
            <td>{created}</td>
            <td class="actions">
                {(queue == VideoQueue::Pending)
                    .then(move || {
                        view! {
                            <button
                                class="btn btn--ok"
                                disabled=approved
                                on:click=move |_| on_approve.run(approve_id.clone())
                            >
                                {if approved { "Approved" } else { "Approve" }}
                            </button>
                        }
                    })}
                <button class="btn btn--danger" on:click=move |_| pending_delete.set(Some(delete_id.clone()))>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
