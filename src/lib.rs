//! webterm: a line-oriented terminal widget backed by a remote endpoint.
//!
//! Each submitted line is echoed into an append-only transcript, sent as a
//! form submission to a configured URL, and the plain-text response is
//! appended as output. Failures land in the transcript as `ERROR: ...` lines.
//!
//! # Quick start
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use webterm::config::TerminalOptions;
//! use webterm::session::TerminalWidget;
//! use webterm::transport::HttpTransport;
//! use webterm::tui::TerminalSurface;
//!
//! # async fn example() {
//! let options = TerminalOptions::from_json(r#"{"promptText":"$"}"#).unwrap();
//! let transport = Arc::new(HttpTransport::new(Duration::from_secs(30)));
//! let mut widget =
//!     TerminalWidget::init("http://localhost:8000/run", &options, &TerminalSurface, transport, None);
//! widget.type_input("ls");
//! widget.submit();
//! widget.settle().await;
//! println!("{}", widget.transcript().plain_lines().join("\n"));
//! # }
//! ```

pub mod config;
pub mod error;
pub mod session;
#[cfg(test)]
pub mod testsupport;
pub mod transcript;
pub mod transport;
pub mod tui;
pub mod ui;
