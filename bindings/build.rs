fn main() {
    windows::build! {
        Windows::Win32::Foundation::{
            CloseHandle,
            HANDLE,
            HWND,
            PSTR
        },
        Windows::Win32::System::{
            DataExchange::{
                GetClipboardOwner,
                GetOpenClipboardWindow
            },
            Diagnostics::Debug::GetLastError,
            ProcessStatus::K32GetProcessImageFileNameA,
            Threading::{OpenProcess, PROCESS_ACCESS_RIGHTS}
        },
        Windows::Win32::UI::WindowsAndMessaging::GetWindowThreadProcessId
    };
}
