//! trtc Client - network transport for uploads
//!
//! [`HttpTransport`] is the live implementation of
//! [`trtc_core::Transport`]: it encodes an upload as `multipart/form-data`,
//! streams the files from disk, and normalizes the server's answer into an
//! [`trtc_core::UploadResult`].

pub mod http;

pub use http::HttpTransport;
