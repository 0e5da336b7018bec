//! User-facing failure notification, injected as a capability so the store
//! works headless and under test.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Presents `(message, title, severity)` to the user and blocks until the
/// notification is dismissed.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, title: &str, severity: Severity);
}

/// Swallows every notification. For headless use and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _message: &str, _title: &str, _severity: Severity) {}
}

/// Native modal message box, matching the severity to the dialog icon.
#[cfg(windows)]
#[derive(Debug, Default, Clone, Copy)]
pub struct MessageBoxNotifier;

#[cfg(windows)]
impl Notifier for MessageBoxNotifier {
    fn notify(&self, message: &str, title: &str, severity: Severity) {
        use windows::core::PCWSTR;
        use windows::Win32::UI::WindowsAndMessaging::{
            MessageBoxW, MB_ICONERROR, MB_ICONINFORMATION, MB_ICONWARNING, MB_OK,
        };

        let icon = match severity {
            Severity::Info => MB_ICONINFORMATION,
            Severity::Warning => MB_ICONWARNING,
            Severity::Error => MB_ICONERROR,
        };

        let text: Vec<u16> = message.encode_utf16().chain(Some(0)).collect();
        let caption: Vec<u16> = title.encode_utf16().chain(Some(0)).collect();

        unsafe {
            let _ = MessageBoxW(
                None,
                PCWSTR(text.as_ptr()),
                PCWSTR(caption.as_ptr()),
                MB_OK | icon,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct Recording(Arc<Mutex<Vec<(String, String, Severity)>>>);

    impl Notifier for Recording {
        fn notify(&self, message: &str, title: &str, severity: Severity) {
            self.0
                .lock()
                .unwrap()
                .push((message.into(), title.into(), severity));
        }
    }

    #[test]
    fn notifier_is_object_safe() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let notifier: Box<dyn Notifier> = Box::new(Recording(Arc::clone(&seen)));
        notifier.notify("boom", "Writing registry X", Severity::Error);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].1, "Writing registry X");
        assert_eq!(seen[0].2, Severity::Error);
    }
}
