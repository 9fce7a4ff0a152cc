//! Clipboard lock inspection.

use std::fmt;
use thiserror::Error;

/// Opaque handle to a top-level window, as assigned by the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowHandle(pub isize);

/// Result of asking the platform which window has the clipboard open.
///
/// The platform may set a last-error code even when the query succeeds, so
/// the code is captured unconditionally and reported verbatim.
#[derive(Clone, Copy, Debug)]
pub struct LockProbe {
    pub window: Option<WindowHandle>,
    pub last_error: u32,
}

/// Process-table entry for a resolved window.
///
/// The image path is best-effort: a process can be alive and openable while
/// its image name query still fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessInfo {
    pub pid: u32,
    pub image_path: Option<String>,
}

/// Errors that can occur whilst inspecting the clipboard.
#[derive(Error, Debug)]
pub enum InspectError {
    #[error("no running process with id {0}")]
    ProcessNotFound(u32),
}

/// The platform queries needed to trace the clipboard back to a process.
///
/// Implemented by the live Win32 backend and by the in-test fake.
pub trait ClipboardPlatform {
    /// Window that currently has the clipboard open, plus the last-error
    /// code read immediately after the query.
    fn clipboard_lock_window(&self) -> LockProbe;

    /// Window registered as having last set the clipboard's contents.
    fn clipboard_owner_window(&self) -> Option<WindowHandle>;

    /// Id of the process that created `window`; 0 when the window no longer
    /// resolves to a process.
    fn window_process_id(&self, window: WindowHandle) -> u32;

    /// Process-table lookup. `None` when no live process has this id.
    fn find_process(&self, pid: u32) -> Option<ProcessInfo>;
}

/// Everything a single inspection learned.
#[derive(Debug)]
pub struct Report {
    pub lock_window: Option<WindowHandle>,
    pub last_error: u32,
    pub owner: Option<ProcessInfo>,
    pub holder: Option<ProcessInfo>,
}

/// Traces the clipboard lock back to the process holding it, and the
/// clipboard contents back to the process that set them.
///
/// A window can close and its process exit between the handle query and the
/// process lookup; when that happens to the lock window the lookup misses
/// and the whole inspection fails with [`InspectError::ProcessNotFound`].
/// A miss on the content owner only degrades that line of the report.
pub fn inspect(platform: &impl ClipboardPlatform) -> Result<Report, InspectError> {
    let probe = platform.clipboard_lock_window();

    let holder = match probe.window {
        Some(window) => {
            let pid = platform.window_process_id(window);
            let process = platform
                .find_process(pid)
                .ok_or(InspectError::ProcessNotFound(pid))?;

            Some(process)
        }
        None => None,
    };

    let owner = platform.clipboard_owner_window().map(|window| {
        let pid = platform.window_process_id(window);

        platform.find_process(pid).unwrap_or(ProcessInfo {
            pid,
            image_path: None,
        })
    });

    Ok(Report {
        lock_window: probe.window,
        last_error: probe.last_error,
        owner,
        holder,
    })
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lock_window {
            Some(window) => writeln!(f, "open clipboard window: {:#x}", window.0)?,
            None => writeln!(f, "open clipboard window: none")?,
        }

        writeln!(f, "last error: {}", self.last_error)?;

        match &self.owner {
            Some(ProcessInfo {
                pid,
                image_path: Some(image),
            }) => writeln!(f, "clipboard contents owned by process {} ({})", pid, image)?,
            Some(ProcessInfo { pid, .. }) => {
                writeln!(f, "clipboard contents owned by process {}", pid)?
            }
            None => writeln!(f, "no window owns the clipboard contents")?,
        }

        match &self.holder {
            Some(holder) => {
                if let Some(image) = &holder.image_path {
                    writeln!(f, "clipboard held open by {}", image)?;
                }

                // Final line stays a bare process id, so scripts can grab it
                writeln!(f, "{}", holder.pid)
            }
            None => writeln!(f, "no window currently has the clipboard open"),
        }
    }
}
