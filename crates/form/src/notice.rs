//! User-facing notifications.

/// Whether an action worked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// A blocking message shown to the user after an action completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: &'static str,
}

impl Notice {
    const fn success(message: &'static str) -> Self {
        Self {
            kind: NoticeKind::Success,
            message,
        }
    }

    const fn failure(message: &'static str) -> Self {
        Self {
            kind: NoticeKind::Failure,
            message,
        }
    }

    pub const fn product_added() -> Self {
        Self::success("Product added successfully!")
    }

    pub const fn product_updated() -> Self {
        Self::success("Product updated successfully!")
    }

    pub const fn save_failed() -> Self {
        Self::failure("Failed to save product. Check the console for more information.")
    }

    pub const fn product_removed() -> Self {
        Self::success("Product successfully removed!")
    }

    pub const fn remove_failed() -> Self {
        Self::failure("Failed to remove product.")
    }

    pub const fn product_restored() -> Self {
        Self::success("Product restored successfully!")
    }

    pub const fn restore_failed() -> Self {
        Self::failure("Failed to restore product.")
    }

    pub const fn product_purged() -> Self {
        Self::success("Product permanently removed successfully!")
    }

    pub const fn purge_failed() -> Self {
        Self::failure("Failed to permanently remove product.")
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}

impl core::fmt::Display for Notice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message)
    }
}

/// Shows notices to the user.
///
/// `notify` returns once the user has seen the notice; the controller does
/// not continue until then.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Collects notices instead of showing them.
impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, notice: Notice) {
        (**self).notify(notice);
    }
}
