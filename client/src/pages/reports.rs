//! User reports against videos, with preview and takedown.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use leptos::prelude::*;

use crate::components::dialog::{ConfirmDialog, StatusLine};
use crate::net::types::{ReportedVideo, VideoReport};
use crate::state::records::{ListState, report_reason_class, report_reason_label, truncate_text};
#[cfg(feature = "hydrate")]
use crate::state::records::remove_by_id;
use crate::util::auth::use_backend;
use crate::util::format::format_timestamp;

/// Characters of video description shown in the table.
const DESCRIPTION_PREVIEW_CHARS: usize = 60;

/// Video opened in the preview modal: id and playback URL.
type Preview = (String, String);

/// Report chosen for takedown: report id and video id.
type Takedown = (String, String);

#[component]
pub fn ReportedVideosPage() -> impl IntoView {
    let backend = use_backend();
    let reports = RwSignal::new(ListState::<VideoReport>::default());
    let status = RwSignal::new(None::<Result<String, String>>);
    let preview = RwSignal::new(None::<Preview>);
    let takedown = RwSignal::new(None::<Takedown>);

    #[cfg(feature = "hydrate")]
    {
        let backend = backend.clone();
        leptos::task::spawn_local(async move {
            let result = backend
                .client()
                .fetch_reports()
                .await
                .map_err(|e| backend.failure("Failed to fetch reports", &e));
            reports.try_update(|s| s.finish(result));
        });
    }

    let on_confirm = Callback::new(move |_| {
        let Some((report_id, video_id)) = takedown.get_untracked() else {
            return;
        };
        takedown.set(None);
        #[cfg(feature = "hydrate")]
        {
            let backend = backend.clone();
            leptos::task::spawn_local(async move {
                match backend.client().delete_video(&video_id).await {
                    Ok(()) => {
                        reports.try_update(|s| remove_by_id(&mut s.items, &report_id));
                        let _ = status.try_set(Some(Ok("Video deleted successfully.".to_owned())));
                    }
                    Err(e) => {
                        let _ = status.try_set(Some(Err(backend.failure("Failed to delete video", &e))));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (report_id, video_id, &backend);
    });
    let on_cancel = Callback::new(move |_| takedown.set(None));
    let on_close_preview = Callback::new(move |_| preview.set(None));

    view! {
        <div class="page">
            <h1 class="page__heading">"Reported Videos"</h1>
            <StatusLine message=status/>
            {move || {
                let state = reports.get();
                if state.loading {
                    return view! { <p>"Loading..."</p> }.into_any();
                }
                if let Some(error) = state.error {
                    return view! { <p class="status-line status-line--error">{error}</p> }.into_any();
                }
                if state.items.is_empty() {
                    return view! { <p>"No reported videos."</p> }.into_any();
                }
                view! {
                    <div class="table-wrap">
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"User Email"</th>
                                    <th>"Video Info"</th>
                                    <th>"Report Reason"</th>
                                    <th>"Description"</th>
                                    <th>"Date Reported"</th>
                                    <th>"Action"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {state
                                    .items
                                    .into_iter()
                                    .map(|report| report_row(report, preview, takedown))
                                    .collect_view()}
                            </tbody>
                        </table>
                    </div>
                }
                    .into_any()
            }}
            <Show when=move || takedown.get().is_some()>
                <ConfirmDialog
                    title="Delete Video"
                    message="Delete this video permanently? This action cannot be undone."
                    confirm_label="Delete"
                    on_confirm=on_confirm
                    on_cancel=on_cancel
                />
            </Show>
            {move || {
                preview.get().map(|(id, url)| view! { <PreviewModal id=id url=url on_close=on_close_preview/> })
            }}
        </div>
    }
}

fn report_row(
    report: VideoReport,
    preview: RwSignal<Option<Preview>>,
    takedown: RwSignal<Option<Takedown>>,
) -> impl IntoView {
    let reporter = report.reporter_id.as_ref().and_then(|r| r.email.clone()).unwrap_or_else(|| "N/A".to_owned());
    let reason_class = report_reason_class(report.reason.as_deref());
    let reason = report_reason_label(report.reason.as_deref());
    let description = report.description.clone().filter(|d| !d.is_empty());
    let reported_at = format_timestamp(report.created_at.as_deref());
    let video_id = report.video_id.as_ref().map(|v| v.video_id().to_owned());
    let report_id = report.id;

    let video_info = match report.video_id {
        Some(ReportedVideo::Embedded(video)) => {
            let video = *video;
            let id = video.id.clone();
            let summary = truncate_text(Some(&video.description), DESCRIPTION_PREVIEW_CHARS);
            let playable = video.url.filter(|u| !u.is_empty()).map(|url| {
                let open = (id.clone(), url.clone());
                view! {
                    <button class="btn btn--small" on:click=move |_| preview.set(Some(open.clone()))>
                        "View Video"
                    </button>
                    <a href=url target="_blank" rel="noopener noreferrer">
                        "Open in new tab"
                    </a>
                }
            });
            view! {
                <div class="video-info">
                    <div class="video-info__id">"ID: " {id}</div>
                    <div title=video.description>{summary}</div>
                    {playable}
                </div>
            }
            .into_any()
        }
        Some(ReportedVideo::Id(id)) => view! { <div class="video-info__id">"ID: " {id}</div> }.into_any(),
        None => view! { <div class="video-info--missing">"Video not found"</div> }.into_any(),
    };

    let can_delete = video_id.is_some();
    view! {
        <tr>
            <td>{reporter}</td>
            <td>{video_info}</td>
            <td>
                <span class=reason_class>{reason}</span>
            </td>
            <td>{description.unwrap_or_else(|| "No description provided".to_owned())}</td>
            <td>{reported_at}</td>
            <td>
                <button
                    class="btn btn--danger"
                    disabled=!can_delete
                    on:click=move |_| {
                        if let Some(video_id) = video_id.clone() {
                            takedown.set(Some((report_id.clone(), video_id)));
                        }
                    }
                >
                    "Delete Video"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn PreviewModal(id: String, url: String, on_close: Callback<()>) -> impl IntoView {
    let video_src = url.clone();
    let link_href = url.clone();
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <button class="dialog__close" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
                <video class="dialog__video" src=video_src controls=true autoplay=true></video>
                <div class="dialog__info">
                    <div>
                        <strong>"Video ID: "</strong>
                        {id}
                    </div>
                    <div>
                        <strong>"URL: "</strong>
                        <a href=link_href target="_blank" rel="noopener noreferrer">
                            {url}
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
