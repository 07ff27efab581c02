use std::fmt;

/// Failure reported by a [`Platform`](crate::platform::Platform) call.
///
/// Carries the platform's last error text verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformError(pub String);

impl PlatformError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for PlatformError {}

pub type PlatformResult<T> = Result<T, PlatformError>;

/// Errors surfaced by the bridge.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeError {
    /// `Bridge::init` was called while another bridge is live in this process.
    AlreadyInitialized,

    /// A platform call failed; `call` names the operation.
    Platform {
        call: &'static str,
        source: PlatformError,
    },

    /// The engine's font atlas does not describe a valid RGBA32 bitmap.
    InvalidFontAtlas {
        width: u32,
        height: u32,
        len: usize,
    },
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::AlreadyInitialized => {
                f.write_str("bridge already initialized; only one instance may be live per process")
            }
            BridgeError::Platform { call, source } => write!(f, "{call} failed: {source}"),
            BridgeError::InvalidFontAtlas { width, height, len } => write!(
                f,
                "font atlas of {width}x{height} RGBA32 needs {} bytes, got {len}",
                u64::from(*width) * u64::from(*height) * 4
            ),
        }
    }
}

impl std::error::Error for BridgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BridgeError::Platform { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type BridgeResult<T> = Result<T, BridgeError>;

/// Attaches the failing call's name to a platform result.
pub(crate) trait PlatformResultExt<T> {
    fn during(self, call: &'static str) -> BridgeResult<T>;
}

impl<T> PlatformResultExt<T> for PlatformResult<T> {
    #[inline]
    fn during(self, call: &'static str) -> BridgeResult<T> {
        self.map_err(|source| BridgeError::Platform { call, source })
    }
}
