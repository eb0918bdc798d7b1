//! Test doubles for the clipboard ports

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::time::Duration;

use crate::domain::RetryPolicy;

use super::ports::{
    ClipboardError, ManagedClipboard, NativeClipboard, NativeError, RawTextHandle, Sleeper,
};

/// Clipboard text shared between the native and managed doubles
pub type SharedClipboard = Rc<RefCell<Option<String>>>;

/// Sentinel for "fail every call"
pub const ALWAYS: u32 = u32::MAX;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeCall {
    Open(bool),
    Empty(bool),
    Set(bool),
    Close,
}

fn take_failure(remaining: &Cell<u32>) -> bool {
    match remaining.get() {
        0 => false,
        ALWAYS => true,
        n => {
            remaining.set(n - 1);
            true
        }
    }
}

/// Low-level clipboard double.
///
/// Emptying drops the open state, so a write only lands if the caller
/// reopens in between.
pub struct FakeNative {
    clipboard: SharedClipboard,
    calls: RefCell<Vec<NativeCall>>,
    live: RefCell<HashMap<RawTextHandle, String>>,
    owned_by_os: RefCell<HashSet<RawTextHandle>>,
    frees: RefCell<Vec<RawTextHandle>>,
    next_id: Cell<usize>,
    is_open: Cell<bool>,
    just_emptied: Cell<bool>,
    open_failures: Cell<u32>,
    empty_failures: Cell<u32>,
    set_failures: Cell<u32>,
    reopen_fails: bool,
    alloc_fails: bool,
}

impl FakeNative {
    pub fn new() -> Self {
        Self::with_clipboard(SharedClipboard::default())
    }

    pub fn with_clipboard(clipboard: SharedClipboard) -> Self {
        Self {
            clipboard,
            calls: RefCell::new(Vec::new()),
            live: RefCell::new(HashMap::new()),
            owned_by_os: RefCell::new(HashSet::new()),
            frees: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            is_open: Cell::new(false),
            just_emptied: Cell::new(false),
            open_failures: Cell::new(0),
            empty_failures: Cell::new(0),
            set_failures: Cell::new(0),
            reopen_fails: false,
            alloc_fails: false,
        }
    }

    /// Fail the next `n` initial opens (`ALWAYS` for every one)
    pub fn failing_opens(self, n: u32) -> Self {
        self.open_failures.set(n);
        self
    }

    pub fn failing_empties(self, n: u32) -> Self {
        self.empty_failures.set(n);
        self
    }

    pub fn failing_sets(self, n: u32) -> Self {
        self.set_failures.set(n);
        self
    }

    pub fn failing_reopen(mut self) -> Self {
        self.reopen_fails = true;
        self
    }

    pub fn failing_alloc(mut self) -> Self {
        self.alloc_fails = true;
        self
    }

    pub fn calls(&self) -> Vec<NativeCall> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&NativeCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(*c)).count()
    }

    pub fn allocations(&self) -> usize {
        self.next_id.get() - 1
    }

    pub fn frees(&self) -> Vec<RawTextHandle> {
        self.frees.borrow().clone()
    }

    pub fn is_open(&self) -> bool {
        self.is_open.get()
    }

    fn record(&self, call: NativeCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl NativeClipboard for FakeNative {
    fn alloc_text(&self, text: &str) -> Result<RawTextHandle, NativeError> {
        if self.alloc_fails {
            return Err(NativeError::Call {
                op: "GlobalAlloc",
                code: 8,
            });
        }
        let handle = RawTextHandle::from_raw(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.live.borrow_mut().insert(handle, text.to_string());
        Ok(handle)
    }

    fn free_text(&self, handle: RawTextHandle) {
        assert!(
            !self.owned_by_os.borrow().contains(&handle),
            "freed a handle owned by the OS"
        );
        assert!(self.live.borrow_mut().remove(&handle).is_some(), "double free");
        self.frees.borrow_mut().push(handle);
    }

    fn open(&self) -> Result<(), NativeError> {
        let reopen = self.just_emptied.replace(false);
        if (reopen && self.reopen_fails) || (!reopen && take_failure(&self.open_failures)) {
            self.record(NativeCall::Open(false));
            return Err(NativeError::Call {
                op: "OpenClipboard",
                code: 5,
            });
        }
        self.is_open.set(true);
        self.record(NativeCall::Open(true));
        Ok(())
    }

    fn empty(&self) -> Result<(), NativeError> {
        if !self.is_open.get() || take_failure(&self.empty_failures) {
            self.record(NativeCall::Empty(false));
            return Err(NativeError::Call {
                op: "EmptyClipboard",
                code: 1418,
            });
        }
        *self.clipboard.borrow_mut() = None;
        self.is_open.set(false);
        self.just_emptied.set(true);
        self.record(NativeCall::Empty(true));
        Ok(())
    }

    fn set_text(&self, handle: RawTextHandle) -> Result<(), NativeError> {
        if !self.is_open.get() || take_failure(&self.set_failures) {
            self.record(NativeCall::Set(false));
            return Err(NativeError::Call {
                op: "SetClipboardData",
                code: 1418,
            });
        }
        let text = self
            .live
            .borrow_mut()
            .remove(&handle)
            .expect("set_text with a handle that is not live");
        self.owned_by_os.borrow_mut().insert(handle);
        *self.clipboard.borrow_mut() = Some(text);
        self.record(NativeCall::Set(true));
        Ok(())
    }

    fn close(&self) -> Result<(), NativeError> {
        self.just_emptied.set(false);
        let was_open = self.is_open.replace(false);
        self.record(NativeCall::Close);
        if was_open {
            Ok(())
        } else {
            Err(NativeError::Call {
                op: "CloseClipboard",
                code: 1418,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManagedCall {
    Clear,
    SetText { text: String, retry: RetryPolicy },
    GetText,
}

/// Higher-level clipboard double
pub struct FakeManaged {
    clipboard: SharedClipboard,
    calls: RefCell<Vec<ManagedCall>>,
    clear_fails: bool,
    set_fails: bool,
    inaccessible: bool,
}

impl FakeManaged {
    pub fn new() -> Self {
        Self::with_clipboard(SharedClipboard::default())
    }

    pub fn with_clipboard(clipboard: SharedClipboard) -> Self {
        Self {
            clipboard,
            calls: RefCell::new(Vec::new()),
            clear_fails: false,
            set_fails: false,
            inaccessible: false,
        }
    }

    pub fn failing_clear(mut self) -> Self {
        self.clear_fails = true;
        self
    }

    pub fn failing_set(mut self) -> Self {
        self.set_fails = true;
        self
    }

    pub fn inaccessible(mut self) -> Self {
        self.inaccessible = true;
        self
    }

    pub fn calls(&self) -> Vec<ManagedCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: ManagedCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl ManagedClipboard for FakeManaged {
    fn clear(&self) -> Result<(), ClipboardError> {
        self.record(ManagedCall::Clear);
        if self.clear_fails {
            return Err(ClipboardError::ClearFailed("locked".to_string()));
        }
        *self.clipboard.borrow_mut() = None;
        Ok(())
    }

    fn set_text(&self, text: &str, retry: RetryPolicy) -> Result<(), ClipboardError> {
        self.record(ManagedCall::SetText {
            text: text.to_string(),
            retry,
        });
        if self.set_fails {
            return Err(ClipboardError::CopyFailed("locked".to_string()));
        }
        *self.clipboard.borrow_mut() = Some(text.to_string());
        Ok(())
    }

    fn get_text(&self) -> Result<Option<String>, ClipboardError> {
        self.record(ManagedCall::GetText);
        if self.inaccessible {
            return Err(ClipboardError::Unavailable("locked".to_string()));
        }
        Ok(self.clipboard.borrow().clone())
    }
}

/// Sleeper that only records the requested pauses
#[derive(Default)]
pub struct RecordingSleeper {
    sleeps: RefCell<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.borrow().clone()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.sleeps.borrow_mut().push(duration);
    }
}
