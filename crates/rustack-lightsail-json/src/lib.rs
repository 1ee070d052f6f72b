//! Lightsail `awsJson1_1` codec for Rustack.
//!
//! This crate turns the shapes of `rustack-lightsail-model` into wire
//! requests and back:
//!
//! - **Request**: serializes an input and names its `X-Amz-Target`
//! - **Response**: deserializes outputs and resource snapshots, decodes service errors
//! - **Router**: maps an `X-Amz-Target` header back to an operation
//! - **Config**: target prefix, content type and payload logging
//!
//! Transport, signing and retries are left to the caller.
#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod request;
pub mod response;
pub mod router;

pub use config::JsonCodecConfig;
pub use error::JsonCodecError;
pub use request::{EncodedRequest, encode_input};
pub use response::{decode_error, decode_output, decode_output_with};
pub use router::{resolve_operation, resolve_operation_with};

#[cfg(test)]
pub(crate) mod test_support {
    use std::io;
    use std::sync::{Arc, Mutex, Once};

    static INIT: Once = Once::new();

    /// Initialize tracing (once).
    pub(crate) fn init_tracing() {
        INIT.call_once(|| {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
                )
                .with_test_writer()
                .init();
        });
    }

    #[derive(Debug, Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("log buffer lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` under a thread-local `trace` subscriber and return what it logged.
    pub(crate) fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        let logs = buffer.0.lock().expect("log buffer lock").clone();
        (result, String::from_utf8_lossy(&logs).into_owned())
    }
}
