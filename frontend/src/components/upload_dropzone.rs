//! File upload dropzone with drag & drop support.
//!
//! Takes one file from a drop or the file picker and hands it to the
//! caller's upload function. See [`crate::dropzone`] for the state machine
//! and the callback contract.

use std::future::Future;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement, Node};

use crate::dropzone::{
    pick_first, submit, DropzoneEvent, DropzoneState, StateStore, UploadHandler, ACCEPTED_KINDS_HINT,
};
use crate::{use_toaster, AppError, AppResult};

type UploadFn<F> = Rc<dyn Fn(F) -> LocalBoxFuture<'static, AppResult<Option<String>>>>;

/// Component props gathered behind the [`UploadHandler`] contract.
///
/// Plain `Rc` closures rather than reactive callbacks: an upload may settle
/// after the owning page has been disposed.
struct DropzoneHandler<F> {
    upload: UploadFn<F>,
    on_complete: Rc<dyn Fn()>,
    on_error: Rc<dyn Fn(AppError)>,
}

impl<F> Clone for DropzoneHandler<F> {
    fn clone(&self) -> Self {
        Self {
            upload: Rc::clone(&self.upload),
            on_complete: Rc::clone(&self.on_complete),
            on_error: Rc::clone(&self.on_error),
        }
    }
}

impl<F> UploadHandler for DropzoneHandler<F> {
    type File = F;

    fn upload_file(&self, file: F) -> impl Future<Output = AppResult<Option<String>>> {
        (self.upload)(file)
    }

    fn on_client_upload_complete(&self) {
        (self.on_complete)();
    }

    fn on_upload_error(&self, error: AppError) {
        (self.on_error)(error);
    }
}

/// Dropzone state held in signals.
///
/// Uses the non-panicking signal accessors so a late settle on a disposed
/// component is a no-op.
#[derive(Clone, Copy)]
struct SignalState {
    state: ReadSignal<DropzoneState>,
    set_state: WriteSignal<DropzoneState>,
}

impl StateStore for SignalState {
    fn current(&self) -> DropzoneState {
        self.state.try_get_untracked().unwrap_or_default()
    }

    fn replace(&self, next: DropzoneState) {
        _ = self.set_state.try_set(next);
    }
}

fn first_file(files: Option<FileList>) -> Option<File> {
    let files = files?;
    pick_first((0..files.length()).filter_map(|i| files.get(i)))
}

#[component]
pub fn UploadDropzone<U, Fut, C, E>(
    /// Transfers the file, resolving to its identifier
    upload_file: U,
    /// Called once per successful upload
    on_client_upload_complete: C,
    /// Called once per failed upload with the cause
    on_upload_error: E,
) -> impl IntoView
where
    U: Fn(File) -> Fut + 'static,
    Fut: Future<Output = AppResult<Option<String>>> + 'static,
    C: Fn() + 'static,
    E: Fn(AppError) + 'static,
{
    let (state, set_state) = create_signal(DropzoneState::default());
    let store = SignalState { state, set_state };
    let toaster = use_toaster();
    let input_ref = create_node_ref::<html::Input>();
    let surface_ref = create_node_ref::<html::Div>();

    let upload: UploadFn<File> = Rc::new(move |file| upload_file(file).boxed_local());
    let handler = store_value(DropzoneHandler {
        upload,
        on_complete: Rc::new(on_client_upload_complete),
        on_error: Rc::new(on_upload_error),
    });

    let start_upload = move |file: File| {
        log::info!("📄 Selected {} ({} bytes)", file.name(), file.size());

        let handler = handler.get_value();
        spawn_local(async move {
            submit(&store, &handler, &toaster, file).await;
        });
    };

    // dragover must be cancelled too, otherwise the browser refuses the drop
    let on_drag_enter = move |ev: DragEvent| {
        ev.prevent_default();
        store.apply(DropzoneEvent::DragEnter);
    };

    // Moving onto a child of the surface also fires dragleave
    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        let entered = ev.related_target().and_then(|target| target.dyn_into::<Node>().ok());
        let still_inside = match (surface_ref.get_untracked(), entered) {
            (Some(surface), Some(node)) => surface.contains(Some(&node)),
            _ => false,
        };
        if !still_inside {
            store.apply(DropzoneEvent::DragLeave);
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        store.apply(DropzoneEvent::Drop);

        if let Some(file) = first_file(ev.data_transfer().and_then(|dt| dt.files())) {
            start_upload(file);
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = first_file(input.files());

        // Allow picking the same file again
        input.set_value("");

        if let Some(file) = file {
            start_upload(file);
        }
    };

    let open_picker = move |_| {
        if !store.current().accepts_files() {
            return;
        }
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    };

    view! {
        <div class="dropzone-wrapper">
            <div
                class=move || state.get().css_class()
                role="button"
                tabindex="0"
                node_ref=surface_ref
                on:click=open_picker
                on:dragenter=on_drag_enter
                on:dragover=on_drag_enter
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <div class="dropzone-icon">"📤"</div>
                <p class="dropzone-prompt">{move || state.get().prompt()}</p>
                <p class="dropzone-hint">{ACCEPTED_KINDS_HINT}</p>
            </div>

            // Kept outside the surface so its own click does not bubble back
            <input
                type="file"
                class="dropzone-input"
                style="display:none"
                node_ref=input_ref
                disabled=move || !state.get().accepts_files()
                on:change=on_file_change
            />
        </div>
    }
}
