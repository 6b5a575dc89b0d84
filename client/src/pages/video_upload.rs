//! Admin video upload: signed URL, direct storage PUT, then the video record.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend never sees the video bytes. It hands out a pre-signed PUT URL,
//! the browser uploads straight to object storage, and the resulting file URL
//! is saved as a video owned by the admin uploader account.

#[cfg(test)]
#[path = "video_upload_test.rs"]
mod video_upload_test;

use leptos::prelude::*;

use crate::util::auth::use_backend;

/// Progress of one upload attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
enum UploadStage {
    Idle,
    Invalid,
    RequestingUrl,
    Uploading,
    Saving,
    Done,
    Failed(String),
}

impl UploadStage {
    fn message(&self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::Invalid => "Please select a video and write a description.".to_owned(),
            Self::RequestingUrl => "Requesting upload URL...".to_owned(),
            Self::Uploading => "Uploading video to storage...".to_owned(),
            Self::Saving => "Saving video metadata to database...".to_owned(),
            Self::Done => "Video uploaded and saved successfully!".to_owned(),
            Self::Failed(reason) => format!("Error uploading video: {reason}"),
        }
    }

    fn in_flight(&self) -> bool {
        matches!(self, Self::RequestingUrl | Self::Uploading | Self::Saving)
    }
}

/// Trimmed description, or `None` when the form cannot be submitted.
fn validate_upload(has_file: bool, description: &str) -> Option<String> {
    let description = description.trim();
    (has_file && !description.is_empty()).then(|| description.to_owned())
}

#[component]
pub fn VideoUploadPage() -> impl IntoView {
    let backend = use_backend();
    let description = RwSignal::new(String::new());
    let file_input = NodeRef::<leptos::html::Input>::new();
    let stage = RwSignal::new(UploadStage::Idle);

    let on_upload = move |_| {
        if stage.get_untracked().in_flight() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let file = file_input.get_untracked().and_then(|input| input.files()).and_then(|files| files.get(0));
            let Some(text) = validate_upload(file.is_some(), &description.get_untracked()) else {
                stage.set(UploadStage::Invalid);
                return;
            };
            let Some(file) = file else {
                return;
            };
            let backend = backend.clone();
            stage.set(UploadStage::RequestingUrl);
            leptos::task::spawn_local(async move {
                let api = backend.client();
                let outcome = async {
                    let target = api.request_upload_url(&file.name(), &file.type_()).await?;
                    let _ = stage.try_set(UploadStage::Uploading);
                    api.upload_to_storage(&target, &file).await?;
                    let _ = stage.try_set(UploadStage::Saving);
                    api.save_uploaded_video(&target.file_url, &text).await
                }
                .await;
                match outcome {
                    Ok(()) => {
                        log::info!("admin video uploaded: {}", file.name());
                        let _ = description.try_set(String::new());
                        if let Some(input) = file_input.get_untracked() {
                            input.set_value("");
                        }
                        let _ = stage.try_set(UploadStage::Done);
                    }
                    Err(e) => {
                        let message = backend.failure("Video upload failed", &e);
                        let _ = stage.try_set(UploadStage::Failed(message));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&backend, file_input);
            if validate_upload(false, &description.get_untracked()).is_none() {
                stage.set(UploadStage::Invalid);
            }
        }
    };

    view! {
        <div class="page">
            <h1 class="page__heading">"Admin: Upload Video"</h1>
            <div class="form">
                <input class="form__input" type="file" accept="video/*" node_ref=file_input/>
                <textarea
                    class="form__input"
                    placeholder="Enter video description..."
                    rows="4"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" disabled=move || stage.get().in_flight() on:click=on_upload>
                    {move || if stage.get().in_flight() { "Uploading..." } else { "Upload Video" }}
                </button>
                <p class="form__message">{move || stage.get().message()}</p>
            </div>
        </div>
    }
}
