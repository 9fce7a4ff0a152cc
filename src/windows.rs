use crate::inspector::{ClipboardPlatform, LockProbe, ProcessInfo, WindowHandle};
use bindings::Windows::Win32::{
    Foundation::{CloseHandle, HANDLE, HWND, PSTR},
    System::{
        DataExchange::{GetClipboardOwner, GetOpenClipboardWindow},
        Diagnostics::Debug::GetLastError,
        ProcessStatus::K32GetProcessImageFileNameA,
        Threading::{OpenProcess, PROCESS_QUERY_LIMITED_INFORMATION},
    },
    UI::WindowsAndMessaging::GetWindowThreadProcessId,
};
use windows::HRESULT;

/// Process handle that is closed again when dropped.
pub struct ProcessHandle(HANDLE);

impl ProcessHandle {
    pub fn value(&self) -> HANDLE {
        self.0
    }
}

impl Drop for ProcessHandle {
    fn drop(&mut self) {
        unsafe {
            CloseHandle(self.0);
        }
    }
}

/// Queries the window that currently has the clipboard open, together with
/// the thread's last-error code read immediately after the call.
///
/// The error code can be non-zero even when a window is returned; callers
/// report it as-is.
pub fn get_open_clipboard_window() -> (Option<HWND>, u32) {
    unsafe {
        let window = GetOpenClipboardWindow();
        let last_error = GetLastError();

        if window.is_null() {
            (None, last_error)
        } else {
            (Some(window), last_error)
        }
    }
}

/// Queries the window registered as the owner of the clipboard's contents.
pub fn get_clipboard_owner() -> Option<HWND> {
    let window = unsafe { GetClipboardOwner() };

    if window.is_null() {
        None
    } else {
        Some(window)
    }
}

pub fn get_window_thread_and_process_id(window: HWND) -> (u32, u32) {
    let mut process_id: u32 = 0;
    let thread_id = unsafe { GetWindowThreadProcessId(window, &mut process_id) };

    (process_id, thread_id)
}

pub fn open_process(process: u32) -> windows::Result<ProcessHandle> {
    unsafe {
        let process_handle = OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, process);

        if process_handle.is_null() {
            Err(HRESULT::from_thread().into())
        } else {
            Ok(ProcessHandle(process_handle))
        }
    }
}

pub fn get_process_image_file_name(process_handle: HANDLE) -> windows::Result<String> {
    const FILENAME_MAX_BYTES: usize = 256;

    let mut filename_raw = vec![0; FILENAME_MAX_BYTES + 1];

    let filename_length = unsafe {
        K32GetProcessImageFileNameA(
            process_handle,
            PSTR(filename_raw.as_mut_ptr()),
            FILENAME_MAX_BYTES as u32,
        )
    };

    if filename_length == 0 {
        Err(HRESULT::from_thread().into())
    } else {
        filename_raw.truncate(filename_length as usize);

        Ok(String::from_utf8(filename_raw)
            .expect("Invalid UTF-8 returned by GetProcessImageFileNameA"))
    }
}

/// Live Win32 implementation of [`ClipboardPlatform`].
pub struct NativeClipboard;

impl ClipboardPlatform for NativeClipboard {
    fn clipboard_lock_window(&self) -> LockProbe {
        let (window, last_error) = get_open_clipboard_window();

        LockProbe {
            window: window.map(|w| WindowHandle(w.0)),
            last_error,
        }
    }

    fn clipboard_owner_window(&self) -> Option<WindowHandle> {
        get_clipboard_owner().map(|w| WindowHandle(w.0))
    }

    fn window_process_id(&self, window: WindowHandle) -> u32 {
        let (process, _thread) = get_window_thread_and_process_id(HWND(window.0));

        process
    }

    fn find_process(&self, pid: u32) -> Option<ProcessInfo> {
        // A window whose process is gone resolves to pid 0, which the
        // process table never contains
        if pid == 0 {
            return None;
        }

        let process_handle = open_process(pid).ok()?;
        let image_path = get_process_image_file_name(process_handle.value()).ok();

        Some(ProcessInfo { pid, image_path })
    }
}
