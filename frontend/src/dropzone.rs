//! Dropzone state machine and upload contract.
//!
//! Framework-free core of the [`UploadDropzone`](crate::UploadDropzone)
//! component: the displayed state, its transitions, and the single-attempt
//! upload flow that turns the injected operation's result into exactly one
//! callback and exactly one notification.
//!
//! ```text
//!   Idle ──DragEnter──▶ Dragging ──DragLeave/Drop──▶ Idle
//!   Idle/Dragging ──FileSelected──▶ Uploading ──Settled──▶ Idle
//! ```

use std::cell::Cell;
use std::future::Future;

use crate::{AppError, AppResult};

/// Primary prompt while waiting for a file.
pub const IDLE_PROMPT: &str = "Drag and drop or click to upload a file";

/// Prompt while a file is dragged over the surface.
pub const DRAGGING_PROMPT: &str = "Drop the file here";

/// Prompt while the upload is pending.
pub const UPLOADING_PROMPT: &str = "Uploading file...";

/// Subtitle listing the accepted kinds of files (advisory only).
pub const ACCEPTED_KINDS_HINT: &str = "Supports PDF, audio, video, and document files";

/// Toast shown after a successful upload.
pub const UPLOAD_SUCCESS_MESSAGE: &str = "File uploaded successfully";

/// Cause reported when the upload resolves without an identifier.
pub const NO_IDENTIFIER_MESSAGE: &str = "No file identifier returned";

// =============================================================================
// State machine
// =============================================================================

/// What the dropzone is currently doing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DropzoneState {
    /// Waiting for a file
    #[default]
    Idle,
    /// A file is dragged over the surface
    Dragging,
    /// An upload is in flight
    Uploading,
}

/// Input driving [`DropzoneState`] transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropzoneEvent {
    /// Drag entered (or moved over) the surface
    DragEnter,
    /// Drag left the surface
    DragLeave,
    /// Something was dropped, with or without a file
    Drop,
    /// A file was taken from a drop or the picker
    FileSelected,
    /// The pending upload finished
    Settled,
}

impl DropzoneState {
    /// Next state after `event`.
    ///
    /// An in-flight upload is only left through `Settled`.
    pub fn on(self, event: DropzoneEvent) -> Self {
        match (self, event) {
            (DropzoneState::Uploading, DropzoneEvent::Settled) => DropzoneState::Idle,
            (DropzoneState::Uploading, _) => DropzoneState::Uploading,
            (_, DropzoneEvent::DragEnter) => DropzoneState::Dragging,
            (DropzoneState::Dragging, DropzoneEvent::DragLeave) => DropzoneState::Idle,
            (_, DropzoneEvent::Drop) => DropzoneState::Idle,
            (_, DropzoneEvent::FileSelected) => DropzoneState::Uploading,
            (state, _) => state,
        }
    }

    /// Whether a new file may be submitted.
    pub fn accepts_files(self) -> bool {
        self != DropzoneState::Uploading
    }

    pub fn is_dragging(self) -> bool {
        self == DropzoneState::Dragging
    }

    /// Primary text shown on the surface.
    pub fn prompt(self) -> &'static str {
        match self {
            DropzoneState::Idle => IDLE_PROMPT,
            DropzoneState::Dragging => DRAGGING_PROMPT,
            DropzoneState::Uploading => UPLOADING_PROMPT,
        }
    }

    /// CSS classes for the surface.
    pub fn css_class(self) -> &'static str {
        match self {
            DropzoneState::Idle => "dropzone",
            DropzoneState::Dragging => "dropzone dropzone-dragging",
            DropzoneState::Uploading => "dropzone dropzone-uploading",
        }
    }
}

// =============================================================================
// Upload contract
// =============================================================================

/// Caller-supplied side of an upload: the transfer and both completion callbacks.
pub trait UploadHandler {
    /// Payload handed to the transfer.
    type File;

    /// Transfer `file`, resolving to an identifier on success.
    ///
    /// `Ok(None)` (or an empty identifier) counts as a failure.
    fn upload_file(&self, file: Self::File) -> impl Future<Output = AppResult<Option<String>>>;

    /// Called once per successful upload.
    fn on_client_upload_complete(&self);

    /// Called once per failed upload with the cause.
    fn on_upload_error(&self, error: AppError);
}

/// Fire-and-forget user notifications.
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Result of one upload attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Identifier returned by the transfer
    Success(String),
    /// Why the attempt failed
    Failure(AppError),
}

impl UploadOutcome {
    /// Classify the transfer's result.
    pub fn from_result(result: AppResult<Option<String>>) -> Self {
        match result {
            Ok(Some(id)) if !id.is_empty() => UploadOutcome::Success(id),
            Ok(_) => UploadOutcome::Failure(AppError::Upload(NO_IDENTIFIER_MESSAGE.to_string())),
            Err(e) => UploadOutcome::Failure(e),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Success(_))
    }
}

/// Run one upload attempt for `file`.
///
/// Failures never escape: each attempt ends in exactly one notification and
/// exactly one of the two callbacks.
pub async fn run_upload<H, N>(handler: &H, notifier: &N, file: H::File) -> UploadOutcome
where
    H: UploadHandler,
    N: Notifier,
{
    let outcome = UploadOutcome::from_result(handler.upload_file(file).await);

    match &outcome {
        UploadOutcome::Success(id) => {
            log::info!("✅ Upload complete: {}", id);
            notifier.success(UPLOAD_SUCCESS_MESSAGE);
            handler.on_client_upload_complete();
        }
        UploadOutcome::Failure(e) => {
            log::error!("❌ Upload failed: {}", e);
            notifier.error(&e.to_string());
            handler.on_upload_error(e.clone());
        }
    }

    outcome
}

// =============================================================================
// Surface driver
// =============================================================================

/// Where a dropzone keeps its current state.
///
/// Writes happen only when a transition actually changes the state, so
/// repeated `dragover` ticks do not notify subscribers.
pub trait StateStore {
    fn current(&self) -> DropzoneState;
    fn replace(&self, next: DropzoneState);

    /// Apply `event` and return the resulting state.
    fn apply(&self, event: DropzoneEvent) -> DropzoneState {
        let current = self.current();
        let next = current.on(event);
        if next != current {
            self.replace(next);
        }
        next
    }

    /// Claim the surface for a new upload. Refused while one is in flight.
    fn begin_upload(&self) -> bool {
        if !self.current().accepts_files() {
            return false;
        }
        self.apply(DropzoneEvent::FileSelected);
        true
    }
}

impl StateStore for Cell<DropzoneState> {
    fn current(&self) -> DropzoneState {
        self.get()
    }

    fn replace(&self, next: DropzoneState) {
        self.set(next);
    }
}

/// First entry of a file list, if any.
pub fn pick_first<T>(files: impl IntoIterator<Item = T>) -> Option<T> {
    files.into_iter().next()
}

/// Submit `file` from the surface backed by `state`.
///
/// Returns `None` without touching `handler` when an upload is already in
/// flight; otherwise runs the attempt and settles the surface back to idle.
pub async fn submit<S, H, N>(state: &S, handler: &H, notifier: &N, file: H::File) -> Option<UploadOutcome>
where
    S: StateStore,
    H: UploadHandler,
    N: Notifier,
{
    if !state.begin_upload() {
        log::warn!("⚠️  Upload in progress, ignoring new file");
        return None;
    }

    let outcome = run_upload(handler, notifier, file).await;
    state.apply(DropzoneEvent::Settled);
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Clone, Debug, PartialEq)]
    struct FakeFile {
        name: &'static str,
        mime_type: &'static str,
    }

    fn pdf() -> FakeFile {
        FakeFile {
            name: "test.pdf",
            mime_type: "application/pdf",
        }
    }

    /// Records every call; resolves uploads with a canned result.
    struct FakeHandler {
        result: AppResult<Option<String>>,
        pending: RefCell<Option<oneshot::Receiver<AppResult<Option<String>>>>>,
        received: RefCell<Vec<FakeFile>>,
        completed: RefCell<usize>,
        errors: RefCell<Vec<AppError>>,
    }

    impl FakeHandler {
        fn resolving(result: AppResult<Option<String>>) -> Self {
            Self {
                result,
                pending: RefCell::new(None),
                received: RefCell::new(Vec::new()),
                completed: RefCell::new(0),
                errors: RefCell::new(Vec::new()),
            }
        }

        /// Next upload stays pending until the returned sender fires.
        fn held() -> (Self, oneshot::Sender<AppResult<Option<String>>>) {
            let (tx, rx) = oneshot::channel();
            let handler = Self::resolving(Ok(None));
            *handler.pending.borrow_mut() = Some(rx);
            (handler, tx)
        }
    }

    impl UploadHandler for FakeHandler {
        type File = FakeFile;

        async fn upload_file(&self, file: FakeFile) -> AppResult<Option<String>> {
            self.received.borrow_mut().push(file);
            let pending = self.pending.borrow_mut().take();
            match pending {
                Some(rx) => rx.await.unwrap_or(Ok(None)),
                None => self.result.clone(),
            }
        }

        fn on_client_upload_complete(&self) {
            *self.completed.borrow_mut() += 1;
        }

        fn on_upload_error(&self, error: AppError) {
            self.errors.borrow_mut().push(error);
        }
    }

    #[derive(Default)]
    struct FakeNotifier {
        successes: RefCell<Vec<String>>,
        errors: RefCell<Vec<String>>,
    }

    impl FakeNotifier {
        fn total(&self) -> usize {
            self.successes.borrow().len() + self.errors.borrow().len()
        }
    }

    impl Notifier for FakeNotifier {
        fn success(&self, message: &str) {
            self.successes.borrow_mut().push(message.to_string());
        }

        fn error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn test_idle_shows_prompt_and_accepted_kinds() {
        let state = DropzoneState::default();
        assert_eq!(state, DropzoneState::Idle);
        assert_eq!(state.prompt(), "Drag and drop or click to upload a file");
        assert_eq!(ACCEPTED_KINDS_HINT, "Supports PDF, audio, video, and document files");
    }

    #[test]
    fn test_drag_enter_and_leave() {
        let state = DropzoneState::Idle.on(DropzoneEvent::DragEnter);
        assert!(state.is_dragging());
        assert_eq!(state.prompt(), "Drop the file here");

        // dragover repeats DragEnter
        let state = state.on(DropzoneEvent::DragEnter);
        assert_eq!(state, DropzoneState::Dragging);

        assert_eq!(state.on(DropzoneEvent::DragLeave), DropzoneState::Idle);
    }

    #[test]
    fn test_drop_then_upload_returns_to_idle() {
        let state = DropzoneState::Idle
            .on(DropzoneEvent::DragEnter)
            .on(DropzoneEvent::Drop);
        assert_eq!(state, DropzoneState::Idle);

        let state = state.on(DropzoneEvent::FileSelected);
        assert_eq!(state, DropzoneState::Uploading);
        assert!(!state.accepts_files());

        let state = state.on(DropzoneEvent::Settled);
        assert_eq!(state.prompt(), IDLE_PROMPT);
    }

    #[test]
    fn test_uploading_ignores_everything_but_settled() {
        let uploading = DropzoneState::Uploading;
        for event in [
            DropzoneEvent::DragEnter,
            DropzoneEvent::DragLeave,
            DropzoneEvent::Drop,
            DropzoneEvent::FileSelected,
        ] {
            assert_eq!(uploading.on(event), DropzoneState::Uploading);
        }
        assert_eq!(uploading.on(DropzoneEvent::Settled), DropzoneState::Idle);
    }

    #[test]
    fn test_settled_outside_upload_is_noop() {
        assert_eq!(DropzoneState::Idle.on(DropzoneEvent::Settled), DropzoneState::Idle);
        assert_eq!(DropzoneState::Idle.on(DropzoneEvent::DragLeave), DropzoneState::Idle);
    }

    #[test]
    fn test_success_calls_complete_once() {
        let handler = FakeHandler::resolving(Ok(Some("upload-success".to_string())));
        let notifier = FakeNotifier::default();

        let outcome = block_on(run_upload(&handler, &notifier, pdf()));

        assert_eq!(outcome, UploadOutcome::Success("upload-success".to_string()));
        assert_eq!(*handler.received.borrow(), vec![pdf()]);
        assert_eq!(*handler.completed.borrow(), 1);
        assert!(handler.errors.borrow().is_empty());
        assert_eq!(*notifier.successes.borrow(), vec![UPLOAD_SUCCESS_MESSAGE.to_string()]);
        assert_eq!(notifier.total(), 1);
    }

    #[test]
    fn test_null_result_reports_generic_error() {
        let handler = FakeHandler::resolving(Ok(None));
        let notifier = FakeNotifier::default();

        let outcome = block_on(run_upload(&handler, &notifier, pdf()));

        assert!(!outcome.is_success());
        assert_eq!(handler.received.borrow().len(), 1);
        assert_eq!(*handler.completed.borrow(), 0);
        assert_eq!(
            *handler.errors.borrow(),
            vec![AppError::Upload(NO_IDENTIFIER_MESSAGE.to_string())]
        );
        assert_eq!(notifier.errors.borrow().len(), 1);
        assert_eq!(notifier.total(), 1);
    }

    #[test]
    fn test_empty_identifier_is_failure() {
        let handler = FakeHandler::resolving(Ok(Some(String::new())));
        let notifier = FakeNotifier::default();

        block_on(run_upload(&handler, &notifier, pdf()));

        assert_eq!(*handler.completed.borrow(), 0);
        assert_eq!(handler.errors.borrow().len(), 1);
    }

    #[test]
    fn test_raised_error_is_forwarded() {
        let raised = AppError::Network("HTTP request failed: offline".to_string());
        let handler = FakeHandler::resolving(Err(raised.clone()));
        let notifier = FakeNotifier::default();

        let outcome = block_on(run_upload(&handler, &notifier, pdf()));

        assert_eq!(outcome, UploadOutcome::Failure(raised.clone()));
        assert_eq!(*handler.errors.borrow(), vec![raised.clone()]);
        assert_eq!(*handler.completed.borrow(), 0);
        assert_eq!(*notifier.errors.borrow(), vec![raised.to_string()]);
        assert!(notifier.successes.borrow().is_empty());
    }

    #[test]
    fn test_file_is_passed_through_unchanged() {
        let handler = FakeHandler::resolving(Ok(Some("id-1".to_string())));
        let notifier = FakeNotifier::default();
        let song = FakeFile {
            name: "song.mp3",
            mime_type: "audio/mpeg",
        };

        block_on(run_upload(&handler, &notifier, song.clone()));

        assert_eq!(*handler.received.borrow(), vec![song]);
    }

    #[test]
    fn test_repeated_drag_over_writes_once() {
        struct CountingStore {
            state: Cell<DropzoneState>,
            writes: Cell<usize>,
        }

        impl StateStore for CountingStore {
            fn current(&self) -> DropzoneState {
                self.state.get()
            }

            fn replace(&self, next: DropzoneState) {
                self.writes.set(self.writes.get() + 1);
                self.state.set(next);
            }
        }

        let store = CountingStore {
            state: Cell::new(DropzoneState::Idle),
            writes: Cell::new(0),
        };
        for _ in 0..5 {
            store.apply(DropzoneEvent::DragEnter);
        }

        assert_eq!(store.current(), DropzoneState::Dragging);
        assert_eq!(store.writes.get(), 1);
    }

    #[test]
    fn test_begin_upload_refused_while_uploading() {
        let state = Cell::new(DropzoneState::Dragging);
        assert!(state.begin_upload());
        assert_eq!(state.get(), DropzoneState::Uploading);

        assert!(!state.begin_upload());
        assert_eq!(state.get(), DropzoneState::Uploading);
    }

    #[test]
    fn test_pick_first_takes_only_the_first_file() {
        let song = FakeFile {
            name: "song.mp3",
            mime_type: "audio/mpeg",
        };
        assert_eq!(pick_first(vec![pdf(), song]), Some(pdf()));
        assert_eq!(pick_first(Vec::<FakeFile>::new()), None);
    }

    #[test]
    fn test_drop_then_submit_settles_to_idle() {
        let state = Cell::new(DropzoneState::Idle);
        let handler = FakeHandler::resolving(Ok(Some("upload-success".to_string())));
        let notifier = FakeNotifier::default();

        assert_eq!(state.apply(DropzoneEvent::DragEnter).prompt(), DRAGGING_PROMPT);
        state.apply(DropzoneEvent::Drop);
        let file = pick_first(vec![pdf()]).unwrap();

        let outcome = block_on(submit(&state, &handler, &notifier, file));

        assert_eq!(outcome, Some(UploadOutcome::Success("upload-success".to_string())));
        assert_eq!(*handler.received.borrow(), vec![pdf()]);
        assert_eq!(*handler.completed.borrow(), 1);
        assert_eq!(state.get().prompt(), IDLE_PROMPT);
    }

    #[test]
    fn test_second_file_refused_while_first_in_flight() {
        let state = Cell::new(DropzoneState::Idle);
        let (handler, release) = FakeHandler::held();
        let notifier = FakeNotifier::default();

        block_on(async {
            let mut first = Box::pin(submit(&state, &handler, &notifier, pdf()));
            assert!(futures::poll!(&mut first).is_pending());
            assert_eq!(state.get(), DropzoneState::Uploading);

            let song = FakeFile {
                name: "song.mp3",
                mime_type: "audio/mpeg",
            };
            assert_eq!(submit(&state, &handler, &notifier, song).await, None);

            release.send(Ok(Some("id-1".to_string()))).unwrap();
            assert_eq!(first.await, Some(UploadOutcome::Success("id-1".to_string())));
        });

        assert_eq!(*handler.received.borrow(), vec![pdf()]);
        assert_eq!(*handler.completed.borrow(), 1);
        assert!(handler.errors.borrow().is_empty());
        assert_eq!(notifier.total(), 1);
        assert_eq!(state.get(), DropzoneState::Idle);
    }
}
