//! Operating system abstraction layer.
//!
//! Provides `sys_random` (OS entropy source) per-platform, plus a shared
//! page-locking layer used to keep decrypt-time secrets out of swap.

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;

/// Locks a buffer's backing pages in memory, preventing the OS from
/// swapping them to disk.
///
/// Returns `false` if the underlying syscall fails; callers must treat this
/// as a `MemoryProtectionFailed` condition rather than silently continuing.
#[cfg(unix)]
pub(crate) fn lock_memory(buf: &mut [u8]) -> bool {
    if buf.is_empty() {
        return true;
    }
    let ret = unsafe { libc::mlock(buf.as_ptr() as *const libc::c_void, buf.len()) };
    ret == 0
}

#[cfg(unix)]
pub(crate) fn unlock_memory(buf: &mut [u8]) -> bool {
    if buf.is_empty() {
        return true;
    }
    let ret = unsafe { libc::munlock(buf.as_ptr() as *const libc::c_void, buf.len()) };
    ret == 0
}

#[cfg(windows)]
pub(crate) fn lock_memory(buf: &mut [u8]) -> bool {
    if buf.is_empty() {
        return true;
    }
    use windows_sys::Win32::System::Memory::VirtualLock;
    let ret = unsafe { VirtualLock(buf.as_mut_ptr() as *mut core::ffi::c_void, buf.len()) };
    ret != 0
}

#[cfg(windows)]
pub(crate) fn unlock_memory(buf: &mut [u8]) -> bool {
    if buf.is_empty() {
        return true;
    }
    use windows_sys::Win32::System::Memory::VirtualUnlock;
    let ret = unsafe { VirtualUnlock(buf.as_mut_ptr() as *mut core::ffi::c_void, buf.len()) };
    ret != 0
}
