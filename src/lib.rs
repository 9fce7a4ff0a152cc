//! Traces the Windows clipboard back to the processes behind it: the one
//! currently holding it open, and the one that owns its contents.

/// Platform-independent inspection logic and report rendering.
pub mod inspector;
/// Safe wrappers around the Win32 clipboard and process APIs.
#[cfg(windows)]
pub mod windows;
