//! Line-delimited JSON host for template functions
//!
//! Each input line is a request, each output line the matching response:
//!
//! ```text
//! → {"id": 1, "function": "i18nTranslate", "args": ["error.invalidAmount", "de", "i18n:account"]}
//! ← {"id":1,"result":"Ungültiger Betrag: Konto"}
//! ```

use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;
use tokio::io::{
    AsyncBufRead,
    AsyncBufReadExt,
    AsyncWrite,
    AsyncWriteExt,
};

use crate::extension::{
    CallError,
    FunctionMap,
};

/// A function call from the host
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Request {
    /// Echoed back in the response
    #[serde(default)]
    pub id: Value,
    pub function: String,
    #[serde(default)]
    pub args: Vec<Value>,
}

/// Outcome of one request; exactly one of `result` and `error` is set
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Response {
    pub id: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    #[must_use]
    pub const fn success(id: Value, result: String) -> Self {
        Self { id, result: Some(result), error: None }
    }

    #[must_use]
    pub const fn failure(id: Value, error: String) -> Self {
        Self { id, result: None, error: Some(error) }
    }
}

/// Dispatches requests to registered template functions
pub struct Server {
    /// Registered functions
    functions: FunctionMap,
}

impl std::fmt::Debug for Server {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.functions.keys().collect();
        names.sort_unstable();
        f.debug_struct("Server").field("functions", &names).finish()
    }
}

impl Server {
    #[must_use]
    pub const fn new(functions: FunctionMap) -> Self {
        Self { functions }
    }

    /// Run one request
    #[must_use]
    pub fn handle(&self, request: Request) -> Response {
        tracing::debug!(function = %request.function, "Handling request");

        let result = self.functions.get(request.function.as_str()).map_or_else(
            || Err(CallError::UnknownFunction(request.function.clone())),
            |function| function(request.args.as_slice()),
        );

        match result {
            Ok(text) => Response::success(request.id, text),
            Err(error) => {
                tracing::warn!("Request failed: {error}");
                Response::failure(request.id, error.to_string())
            }
        }
    }

    /// Decode and run one input line. Blank lines yield `None`.
    #[must_use]
    pub fn handle_line(&self, line: &str) -> Option<Response> {
        if line.trim().is_empty() {
            return None;
        }

        match serde_json::from_str::<Request>(line) {
            Ok(request) => Some(self.handle(request)),
            Err(error) => {
                tracing::warn!("Invalid request: {error}");
                Some(Response::failure(Value::Null, format!("invalid request: {error}")))
            }
        }
    }

    /// Serve requests from `reader` until EOF, writing one response line per request.
    ///
    /// # Errors
    /// Returns an error if reading from `reader` or writing to `writer` fails.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            let Some(response) = self.handle_line(&line) else {
                continue;
            };

            let mut encoded = serde_json::to_string(&response)?;
            encoded.push('\n');
            writer.write_all(encoded.as_bytes()).await?;
            writer.flush().await?;
        }

        tracing::debug!("Input closed, stopping server");
        Ok(())
    }
}
