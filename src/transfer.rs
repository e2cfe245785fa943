//! Upload transfer client.
//!
//! Performs a multipart `FormData` POST through `XMLHttpRequest`, the one
//! browser API that reports upload progress. The XHR callbacks are bridged
//! to a future with a oneshot channel, so callers get back an abort handle
//! plus a future resolving to the parsed reply.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, FormData, ProgressEvent, XmlHttpRequest};

use crate::types::{DocumentMetadata, UploadReply};

/// Why a transfer did not produce a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// The request never reached the server.
    Transport(String),
    /// The server answered with a non-2xx status.
    Status { status: u16, body: String },
    /// The transfer was canceled through its [`AbortHandle`].
    Aborted,
}

impl std::fmt::Display for UploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadError::Transport(message) => write!(f, "Network error: {}", message),
            UploadError::Status { status, body } if body.is_empty() => {
                write!(f, "Upload failed ({})", status)
            }
            UploadError::Status { status, body } => {
                write!(f, "Upload failed ({}): {}", status, body)
            }
            UploadError::Aborted => write!(f, "Upload canceled."),
        }
    }
}

impl std::error::Error for UploadError {}

/// Cancels an in-flight transfer.
///
/// Aborting forces the request to settle immediately; the transfer future
/// then resolves with [`UploadError::Aborted`], never with a late success
/// or server error.
#[derive(Clone)]
pub struct AbortHandle {
    xhr: XmlHttpRequest,
    aborted: Rc<Cell<bool>>,
}

impl AbortHandle {
    pub fn abort(&self) {
        self.aborted.set(true);
        let _ = self.xhr.abort();
    }
}

/// Start a multipart upload of `file` to `url`.
///
/// `on_progress` receives the sent percentage (0-100) as bytes go out.
/// Returns the abort handle together with a future resolving once the
/// request settles. Metadata is attached as a JSON `metadata` form field
/// when any of its fields are non-empty.
pub fn upload_with_progress(
    url: &str,
    file: &File,
    metadata: &DocumentMetadata,
    on_progress: impl Fn(u8) + 'static,
) -> Result<
    (
        AbortHandle,
        impl Future<Output = Result<UploadReply, UploadError>>,
    ),
    UploadError,
> {
    let xhr = XmlHttpRequest::new().map_err(js_error)?;
    xhr.open("POST", url).map_err(js_error)?;

    let aborted = Rc::new(Cell::new(false));
    let (reply_tx, reply_rx) = oneshot::channel::<Result<UploadReply, UploadError>>();
    let reply_tx = Rc::new(RefCell::new(Some(reply_tx)));

    let progress_callback = Closure::<dyn FnMut(ProgressEvent)>::new(move |event: ProgressEvent| {
        if event.length_computable() {
            on_progress(percent(event.loaded(), event.total()));
        }
    });
    xhr.upload()
        .map_err(js_error)?
        .set_onprogress(Some(progress_callback.as_ref().unchecked_ref()));

    let state_callback = {
        let xhr = xhr.clone();
        let aborted = aborted.clone();
        Closure::<dyn FnMut()>::new(move || {
            if xhr.ready_state() != XmlHttpRequest::DONE {
                return;
            }
            let Some(tx) = reply_tx.borrow_mut().take() else {
                return;
            };
            let status = xhr.status().unwrap_or(0);
            let body = xhr.response_text().ok().flatten().unwrap_or_default();
            let _ = tx.send(settle(status, body, aborted.get()));
        })
    };
    xhr.set_onreadystatechange(Some(state_callback.as_ref().unchecked_ref()));

    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob("file", file).map_err(js_error)?;
    if let Some(json) = metadata.to_form_value() {
        form.append_with_str("metadata", &json).map_err(js_error)?;
    }
    xhr.send_with_opt_form_data(Some(&form)).map_err(js_error)?;

    let handle = AbortHandle {
        xhr,
        aborted,
    };
    let transfer = async move {
        // The closures must outlive the request; holding them in the
        // future keeps them alive exactly until it settles.
        let _progress_callback = progress_callback;
        let _state_callback = state_callback;
        match reply_rx.await {
            Ok(outcome) => outcome,
            Err(_) => Err(UploadError::Transport("transfer interrupted".to_string())),
        }
    };
    Ok((handle, transfer))
}

/// Map a settled request to its outcome.
///
/// Status 0 means the request never completed: either our own abort or a
/// transport-level failure, told apart by the aborted flag.
fn settle(status: u16, body: String, aborted: bool) -> Result<UploadReply, UploadError> {
    match status {
        200..=299 => Ok(UploadReply::parse(&body)),
        0 if aborted => Err(UploadError::Aborted),
        0 => Err(UploadError::Transport("server unreachable".to_string())),
        status => Err(UploadError::Status { status, body }),
    }
}

fn js_error(value: JsValue) -> UploadError {
    UploadError::Transport(format!("{:?}", value))
}

/// Sent percentage, clamped to 0-100.
pub fn percent(loaded: f64, total: f64) -> u8 {
    if total <= 0.0 {
        return 0;
    }
    ((loaded / total) * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_is_clamped() {
        assert_eq!(percent(0.0, 1000.0), 0);
        assert_eq!(percent(500.0, 1000.0), 50);
        assert_eq!(percent(1000.0, 1000.0), 100);
        assert_eq!(percent(1500.0, 1000.0), 100);
    }

    #[test]
    fn percent_with_unknown_total_is_zero() {
        assert_eq!(percent(100.0, 0.0), 0);
        assert_eq!(percent(100.0, -1.0), 0);
    }

    #[test]
    fn percent_is_monotonic_in_loaded() {
        let total = 7_321.0;
        let mut last = 0;
        for loaded in (0..=7_321).step_by(97) {
            let now = percent(loaded as f64, total);
            assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn success_statuses_yield_a_reply() {
        assert_eq!(
            settle(200, r#"{"chunks_uploaded": 7}"#.to_string(), false),
            Ok(UploadReply::parse(r#"{"chunks_uploaded": 7}"#))
        );
        // non-JSON 2xx bodies still count as success
        assert_eq!(
            settle(204, String::new(), false),
            Ok(UploadReply::Raw(String::new()))
        );
    }

    #[test]
    fn aborted_requests_settle_as_aborted() {
        // an abort zeroes the status; the flag keeps it from looking like
        // a transport failure
        assert_eq!(settle(0, String::new(), true), Err(UploadError::Aborted));
    }

    #[test]
    fn unreachable_server_is_a_transport_error() {
        assert_eq!(
            settle(0, String::new(), false),
            Err(UploadError::Transport("server unreachable".to_string()))
        );
    }

    #[test]
    fn server_errors_carry_status_and_body() {
        assert_eq!(
            settle(500, "boom".to_string(), false),
            Err(UploadError::Status {
                status: 500,
                body: "boom".to_string(),
            })
        );
    }

    #[test]
    fn status_error_message_includes_body() {
        let error = UploadError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(error.to_string(), "Upload failed (500): boom");

        let bare = UploadError::Status {
            status: 404,
            body: String::new(),
        };
        assert_eq!(bare.to_string(), "Upload failed (404)");
    }
}
